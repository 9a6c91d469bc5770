use crate::replacements::BLANK;
use crate::sanitize::sanitize;
use crate::ProfanityDetector;

impl ProfanityDetector {
    /// Returns `true` if the text contains profanity.
    pub fn is_profane(&self, s: &str) -> bool {
        self.extract_profanity(s).is_some()
    }

    /// Returns the first profanity found in the text, as it appears in the dictionary.
    ///
    /// False negatives are checked first, and win even if they would otherwise be removed as false
    /// positives. Then, false positives are removed and profanities are checked in dictionary
    /// order.
    pub fn extract_profanity(&self, s: &str) -> Option<&str> {
        let (mut canonical, _) =
            sanitize(s, self.sanitize, &self.replacements, false).into_parts();

        if let Some(word) = self
            .dictionary
            .false_negatives()
            .iter()
            .find(|word| canonical.contains(word.as_str()))
        {
            return Some(word);
        }

        for word in self.dictionary.false_positives() {
            canonical = canonical.replace(word.as_str(), "");
        }

        let profanity = if self.exact_word {
            // Dictionary entries are already lowercase, as is the canonical text.
            canonical.split(BLANK).find_map(|token| {
                self.dictionary
                    .profanities()
                    .iter()
                    .find(|word| *word == token)
            })
        } else {
            self.dictionary
                .profanities()
                .iter()
                .find(|word| canonical.contains(word.as_str()))
        };

        #[cfg(feature = "trace")]
        tracing::trace!(canonical = %canonical, profanity = ?profanity, "extracted");

        profanity.map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::ProfanityDetector;

    fn custom(
        profanities: &[&str],
        false_positives: &[&str],
        false_negatives: &[&str],
    ) -> ProfanityDetector {
        let mut detector = ProfanityDetector::new();
        detector.with_custom_dictionary(profanities, false_positives, false_negatives);
        detector
    }

    #[test]
    fn extract() {
        let detector = ProfanityDetector::new();
        assert_eq!(detector.extract_profanity("hello fuck world"), Some("fuck"));
        assert_eq!(detector.extract_profanity("hello world"), None);
        assert_eq!(detector.extract_profanity(""), None);
        assert_eq!(detector.extract_profanity("    "), None);
        assert!(detector.is_profane("SHIT"));
        assert!(!detector.is_profane("what a lovely day"));
    }

    #[test]
    fn obfuscation() {
        let detector = ProfanityDetector::new();
        assert!(detector.is_profane("fu_ck"));
        assert!(detector.is_profane("f u c k"));
        assert!(detector.is_profane("4ss"));
        assert_eq!(detector.extract_profanity("4ss"), Some("ass"));
        assert_eq!(detector.extract_profanity("pÉnis"), Some("penis"));
        assert_eq!(detector.extract_profanity("p()rn"), Some("porn"));
        assert_eq!(detector.extract_profanity("$h!t"), Some("shit"));
    }

    #[test]
    fn false_positives() {
        let detector = ProfanityDetector::new();
        assert!(!detector.is_profane("assassin"));
        assert!(!detector.is_profane("I need assistance"));
        assert!(!detector.is_profane("scunthorpe"));
        assert!(detector.is_profane("assassin ass"));
    }

    #[test]
    fn false_negatives() {
        let detector = ProfanityDetector::new();
        assert_eq!(detector.extract_profanity("you asshole"), Some("asshole"));

        // A false negative wins over an identical false positive.
        let detector = custom(&["foo"], &["bar"], &["bar"]);
        assert_eq!(detector.extract_profanity("bar"), Some("bar"));
    }

    #[test]
    fn dictionary_order() {
        let detector = custom(&["bbb", "aaa"], &[], &[]);
        assert_eq!(detector.extract_profanity("aaa bbb"), Some("bbb"));
    }

    #[test]
    fn empty_entries() {
        let detector = custom(&[""], &[""], &[""]);
        assert_eq!(detector.extract_profanity("anything"), None);
    }

    #[test]
    fn exact_word() {
        let mut detector = custom(&["ass"], &[], &[]);
        assert!(detector.is_profane("classic"));
        detector.with_exact_word(true);
        assert!(!detector.is_profane("classic"));
        assert!(!detector.is_profane("assistance"));
        assert_eq!(detector.extract_profanity("what an ass"), Some("ass"));
        assert_eq!(detector.extract_profanity("what an ASS."), Some("ass"));
    }

    #[test]
    fn case_insensitive_dictionary() {
        let detector = custom(&["DARN"], &[], &[]);
        assert_eq!(detector.extract_profanity("Darn it"), Some("darn"));
    }

    #[test]
    fn without_sanitization() {
        let mut detector = ProfanityDetector::new();
        detector
            .with_sanitize_leet_speak(false)
            .with_sanitize_special_characters(false)
            .with_sanitize_spaces(false)
            .with_sanitize_accents(false);
        assert!(!detector.is_profane("fu_ck"));
        assert!(!detector.is_profane("f u c k"));
        assert!(!detector.is_profane("sh1t"));
        assert!(!detector.is_profane("pÉnis"));
        assert!(detector.is_profane("FUCK"));
    }
}
