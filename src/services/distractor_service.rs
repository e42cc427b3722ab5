use rand::seq::SliceRandom;
use rand::Rng;

/// Builds the option set for one question: the correct value plus up to
/// three distinct distractors drawn from the same-kind pool, shuffled.
/// Callers must reject the question unless exactly four options came back.
pub fn assemble_options<R: Rng>(correct: &str, pool: &[String], rng: &mut R) -> Vec<String> {
    let mut options: Vec<String> = vec![correct.to_string()];
    for candidate in pool {
        if options.len() >= 4 {
            break;
        }
        if candidate == correct || options.iter().any(|o| o == candidate) {
            continue;
        }
        options.push(candidate.clone());
    }
    options.shuffle(rng);
    options
}
