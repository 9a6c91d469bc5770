use goaway::ProfanityDetector;
use std::env::args;
use tracing::Level;

pub fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    let input = args().skip(1).collect::<Vec<_>>().join(" ");
    let detector = ProfanityDetector::new();
    let canonical = detector.sanitize(&input);
    let profanity = detector.extract_profanity(&input);
    let censored = detector.censor(&input);
    println!(
        "\"{}\" -> \"{}\" (canonical \"{}\", profanity {:?})",
        input, censored, canonical, profanity
    );
}
