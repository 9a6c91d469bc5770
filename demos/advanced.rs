use goaway::{ProfanityDetector, Replacements};

fn main() {
    let mut replacements = Replacements::default();
    replacements.insert('¢', 'c');

    let mut detector = ProfanityDetector::new();
    detector
        .with_custom_dictionary(["heck"], ["checkered"], Vec::<&str>::new())
        .with_custom_character_replacements(replacements)
        .with_exact_word(true)
        .with_censor_replacement('?');

    assert_eq!(detector.censor("What the heck"), "What the ????");
    assert_eq!(detector.extract_profanity("heck."), Some("heck"));
    assert!(detector.is_profane("he¢k"));
    assert!(detector.is_profane("h3ck"));
    // '!' reads as 'i', so this is the word "hecki".
    assert!(!detector.is_profane("HECK!"));
    assert!(!detector.is_profane("checkered flag"));
}
