/// Passage excerpts are truncated to fit small on-device context windows.
pub const QUIZ_PASSAGE_LIMIT: usize = 3000;
pub const MINDMAP_PASSAGE_LIMIT: usize = 2500;

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a quiz author. Work ONLY from the passage supplied in the user message. \
Never introduce facts, names, dates, or figures that the passage does not state. \
Respond with strict JSON and nothing else: no prose, no markdown, no commentary.";

const QUIZ_INSTRUCTIONS: &str = r#"Create 5 multiple-choice questions by masking key facts from the passage.

Rules:
- Phrase every question as a fill-in-the-blank sentence with exactly one blank written as ____.
- Provide exactly 4 distinct options per question, with exactly one correct answer that appears verbatim among the options.
- All 4 options of a question must be the same kind of value (all years, all names, all quantities).
- Never use filler options such as "none of the above", "Share", "Subscribe", or "Updated".
- Return ONLY a strict JSON array shaped like the example. No surrounding text.

Example of one element:
[{"question":"The war ended in ____.","options":["1943","1944","1945","1946"],"answer":"1945"}]"#;

pub const SUMMARY_SYSTEM_PROMPT: &str = "You summarize articles faithfully. Use only the supplied text; do not add outside \
knowledge or opinions.";

pub const MINDMAP_SYSTEM_PROMPT: &str = "You analyze articles and describe their structure as strict JSON. Use only the \
supplied text and return JSON with no surrounding prose.";

pub fn quiz_prompt(passage: &str) -> String {
    let excerpt: String = passage.chars().take(QUIZ_PASSAGE_LIMIT).collect();
    format!("{QUIZ_INSTRUCTIONS}\n\nPassage:\n\n{excerpt}")
}

pub fn summary_prompt(passage: &str) -> String {
    format!(
        "Write a detailed, long-form summary of the following article. Cover every major \
point in order and separate paragraphs with blank lines.\n\nArticle:\n\n{passage}"
    )
}

pub fn mindmap_prompt(passage: &str) -> String {
    let excerpt: String = passage.chars().take(MINDMAP_PASSAGE_LIMIT).collect();
    format!(
        "Analyze the passage and choose one visualization: timeline, process, or map. \
If timeline or process, return JSON ONLY: {{\"layout\":\"timeline|process\",\"items\":[{{\"date\":\"optional\",\"label\":\"text\"}}]}}. \
If map, return JSON ONLY: {{\"layout\":\"map\",\"topics\":[\"string\"]}}.\n\nPassage:\n\n{excerpt}"
    )
}
