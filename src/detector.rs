use crate::feature_cell::FeatureCell;
use crate::sanitize::{sanitize, Sanitize};
use crate::{Dictionary, Replacements};
use lazy_static::lazy_static;

lazy_static! {
    /// Shared instance behind the free functions and [`crate::CensorStr`], created on first use.
    pub(crate) static ref DEFAULT: FeatureCell<ProfanityDetector> =
        FeatureCell::new(ProfanityDetector::new());
}

/// ProfanityDetector holds the dictionaries and options that determine how profanity is detected,
/// extracted and censored.
///
/// It is read-only while detecting, so a single instance can be shared between threads.
///
/// ```
/// use goaway::ProfanityDetector;
///
/// let mut detector = ProfanityDetector::new();
/// detector.with_exact_word(true);
///
/// assert!(detector.is_profane("what the fuck"));
/// assert!(!detector.is_profane("fucking"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfanityDetector {
    pub(crate) sanitize: Sanitize,
    pub(crate) exact_word: bool,
    pub(crate) dictionary: Dictionary,
    pub(crate) replacements: Replacements,
    /// Whether `replacements` came from the caller, and must not be rebuilt from the options.
    custom_replacements: bool,
    pub(crate) censor_replacement: char,
}

impl Default for ProfanityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityDetector {
    /// Creates a detector with every sanitization enabled, substring matching and the bundled
    /// dictionary.
    pub fn new() -> Self {
        Self {
            // Default options
            sanitize: Sanitize::ALL,
            exact_word: false,
            dictionary: Dictionary::default(),
            replacements: Replacements::default(),
            custom_replacements: false,
            censor_replacement: '*',
        }
    }

    /// Whether to fold leetspeak, i.e. replacements whose value isn't `' '`. For example, `4` is
    /// replaced by `a` and `3` by `e`, so `"4sshol3"` is detected as `"asshole"`.
    ///
    /// Unless custom replacements are in use, the replacements are rebuilt.
    ///
    /// The default is `true`.
    pub fn with_sanitize_leet_speak(&mut self, sanitize: bool) -> &mut Self {
        self.sanitize.set(Sanitize::LEET_SPEAK, sanitize);
        self.rebuild_replacements()
    }

    /// Whether to fold special characters, i.e. replacements whose value is `' '`. For example,
    /// `"fu_ck"` is detected as `"fuck"`.
    ///
    /// Unless custom replacements are in use, the replacements are rebuilt.
    ///
    /// The default is `true`.
    pub fn with_sanitize_special_characters(&mut self, sanitize: bool) -> &mut Self {
        self.sanitize.set(Sanitize::SPECIAL_CHARACTERS, sanitize);
        self.rebuild_replacements()
    }

    /// Whether to strip accents, so `"pÉnis"` is detected as `"penis"`. Input consisting only
    /// of printable ASCII skips this step regardless.
    ///
    /// The default is `true`.
    pub fn with_sanitize_accents(&mut self, sanitize: bool) -> &mut Self {
        self.sanitize.set(Sanitize::ACCENTS, sanitize);
        self
    }

    /// Whether to remove blanks, so `"f u c k"` is detected as `"fuck"`.
    ///
    /// Enabling this disables exact word matching, which relies on blanks.
    ///
    /// The default is `true`.
    pub fn with_sanitize_spaces(&mut self, sanitize: bool) -> &mut Self {
        self.sanitize.set(Sanitize::SPACES, sanitize);
        if sanitize {
            self.exact_word = false;
        }
        self
    }

    /// Require profanities to be entire blank-delimited words, rather than substrings. This
    /// reduces false positives, e.g. `"ass"` no longer matches `"classic"`, but is more
    /// permissive.
    ///
    /// Enabling this disables [`Self::with_sanitize_spaces`].
    ///
    /// The default is `false`.
    pub fn with_exact_word(&mut self, exact_word: bool) -> &mut Self {
        self.exact_word = exact_word;
        if exact_word {
            self.sanitize.remove(Sanitize::SPACES);
        }
        self
    }

    /// Replaces the profanity, false positive and false negative lists. Entries are lowercased.
    pub fn with_custom_dictionary<P, FP, FN>(
        &mut self,
        profanities: P,
        false_positives: FP,
        false_negatives: FN,
    ) -> &mut Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        FP: IntoIterator,
        FP::Item: AsRef<str>,
        FN: IntoIterator,
        FN::Item: AsRef<str>,
    {
        self.with_dictionary(Dictionary::new(
            profanities,
            false_positives,
            false_negatives,
        ))
    }

    pub fn with_dictionary(&mut self, dictionary: Dictionary) -> &mut Self {
        self.dictionary = dictionary;
        self
    }

    /// Replaces the character replacements. Entries whose value is `' '` are special characters,
    /// and all others are leetspeak.
    ///
    /// Custom replacements survive subsequent calls to [`Self::with_sanitize_leet_speak`] and
    /// [`Self::with_sanitize_special_characters`], which then only choose which kind of entry
    /// applies.
    pub fn with_custom_character_replacements(&mut self, replacements: Replacements) -> &mut Self {
        self.replacements = replacements;
        self.custom_replacements = true;
        self
    }

    /// Sets the character used to censor profanity.
    ///
    /// The default is `'*'`.
    pub fn with_censor_replacement(&mut self, censor_replacement: char) -> &mut Self {
        self.censor_replacement = censor_replacement;
        self
    }

    /// Which sanitization passes are enabled.
    pub fn sanitize_flags(&self) -> Sanitize {
        self.sanitize
    }

    pub fn is_exact_word(&self) -> bool {
        self.exact_word
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    /// The canonical form of `s` that detection matches against.
    pub fn sanitize(&self, s: &str) -> String {
        sanitize(s, self.sanitize, &self.replacements, false)
            .into_parts()
            .0
    }

    fn rebuild_replacements(&mut self) -> &mut Self {
        if !self.custom_replacements {
            self.replacements = Replacements::for_flags(
                self.sanitize.contains(Sanitize::SPECIAL_CHARACTERS),
                self.sanitize.contains(Sanitize::LEET_SPEAK),
            );
        }
        self
    }
}

/// Allows customizing the shared instance used by [`crate::is_profane`],
/// [`crate::extract_profanity`], [`crate::censor`] and [`crate::CensorStr`].
///
/// Detection on other threads waits until `f` returns.
#[cfg(feature = "customize")]
pub fn customize_default<R>(f: impl FnOnce(&mut ProfanityDetector) -> R) -> R {
    DEFAULT.write(f)
}
