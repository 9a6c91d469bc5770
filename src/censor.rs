use crate::detector::DEFAULT;
use crate::replacements::BLANK;
use crate::sanitize::{sanitize, Canonical};
use crate::ProfanityDetector;

impl ProfanityDetector {
    /// Produces a copy of the text, with every character of each profanity replaced by the censor
    /// replacement. The output has exactly as many characters as the input, and characters that
    /// aren't part of a profanity are untouched (accents included).
    ///
    /// False negatives are censored first. Then, false positives are excised and profanities are
    /// censored. In exact word mode, only profanities that are entire words are censored.
    ///
    /// Unlike [`Self::extract_profanity`], `()` is not read as `o`.
    ///
    /// Censoring is repeated until nothing new is masked, so censoring the output again leaves it
    /// unchanged. A pass can expose more profanity, since the censor replacement may fold to a
    /// blank and join the text around it, and masked text no longer forms false positives.
    pub fn censor(&self, s: &str) -> String {
        let mut censored: Vec<char> = s.chars().collect();
        while self.censor_pass(&mut censored) {}
        censored.into_iter().collect()
    }

    /// Returns whether any character was newly masked.
    fn censor_pass(&self, censored: &mut [char]) -> bool {
        let text: String = censored.iter().collect();
        let mut canonical = sanitize(&text, self.sanitize, &self.replacements, true);

        let mut masked = self.mask(
            &canonical,
            self.dictionary.false_negatives(),
            false,
            censored,
        );

        for word in self.dictionary.false_positives() {
            canonical.excise(&word.chars().collect::<Vec<_>>());
        }

        masked |= self.mask(
            &canonical,
            self.dictionary.profanities(),
            self.exact_word,
            censored,
        );

        masked
    }

    /// Censors each occurrence of each word, mapping canonical positions back to the original.
    fn mask(
        &self,
        canonical: &Canonical,
        words: &[String],
        exact_word: bool,
        censored: &mut [char],
    ) -> bool {
        let mut masked = false;
        for word in words {
            let word: Vec<char> = word.chars().collect();
            if exact_word && word.contains(&BLANK) {
                // Can never be an entire word.
                continue;
            }
            for range in canonical.find_iter(&word) {
                if exact_word && !canonical.is_token(&range) {
                    continue;
                }

                #[cfg(feature = "trace")]
                tracing::trace!(
                    word = %word.iter().collect::<String>(),
                    start = range.start,
                    end = range.end,
                    "censoring"
                );

                for pos in range {
                    // Positions without an original counterpart are skipped.
                    if let Some(c) = canonical
                        .original(pos)
                        .and_then(|original| censored.get_mut(original))
                    {
                        masked |= *c != self.censor_replacement;
                        *c = self.censor_replacement;
                    }
                }
            }
        }
        masked
    }
}

/// Returns `true` if the text contains profanity, according to the default [`ProfanityDetector`].
pub fn is_profane(s: &str) -> bool {
    DEFAULT.read(|detector| detector.is_profane(s))
}

/// Returns the first profanity in the text, according to the default [`ProfanityDetector`].
pub fn extract_profanity(s: &str) -> Option<String> {
    DEFAULT.read(|detector| detector.extract_profanity(s).map(String::from))
}

/// Censors all profanity in the text, according to the default [`ProfanityDetector`].
pub fn censor(s: &str) -> String {
    DEFAULT.read(|detector| detector.censor(s))
}

/// CensorStr makes it easy to check or censor a `String` or `&str` with the default
/// [`ProfanityDetector`], by calling `.censor()`.
pub trait CensorStr: Sized {
    /// The output is a newly allocated, censored string.
    fn censor(self) -> String;

    /// Returns the first profanity found, if any.
    fn extract_profanity(self) -> Option<String>;

    /// Returns `true` if the text contains profanity.
    fn is_profane(self) -> bool {
        self.extract_profanity().is_some()
    }
}

impl CensorStr for &str {
    fn censor(self) -> String {
        censor(self)
    }

    fn extract_profanity(self) -> Option<String> {
        extract_profanity(self)
    }

    fn is_profane(self) -> bool {
        is_profane(self)
    }
}
