pub mod distractor_service;
pub mod entity_service;
pub mod layout_service;
pub mod mindmap_service;
pub mod quiz_service;
pub mod repair_service;
pub mod summary_service;
pub mod text_service;
pub mod topic_service;
pub mod validation_service;

pub use mindmap_service::MindmapService;
pub use quiz_service::QuizService;
pub use summary_service::SummaryService;
