#![no_main]
use goaway::ProfanityDetector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            let mut detector = ProfanityDetector::new();
            detector
                .with_sanitize_special_characters(flag(flags, 0))
                .with_sanitize_leet_speak(flag(flags, 1))
                .with_sanitize_accents(flag(flags, 2))
                .with_sanitize_spaces(flag(flags, 3))
                .with_exact_word(flag(flags, 4))
                .with_censor_replacement(if flag(flags, 5) { '#' } else { '*' });

            let _ = detector.is_profane(text);
            let _ = detector.extract_profanity(text);
            let censored = detector.censor(text);

            assert_eq!(censored.chars().count(), text.chars().count());
            assert_eq!(detector.censor(&censored), censored);

            let _ = goaway::censor(text);
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
