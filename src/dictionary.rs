use lazy_static::lazy_static;
use std::ops::Deref;

lazy_static! {
    static ref DEFAULT_DICTIONARY: Dictionary = Dictionary::new(
        bundled(include_str!("profanities.txt")),
        bundled(include_str!("false_positives.txt")),
        bundled(include_str!("false_negatives.txt")),
    );
}

fn bundled(list: &'static str) -> impl Iterator<Item = &'static str> {
    list.lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// The three word lists a [`crate::ProfanityDetector`] matches against.
///
/// Order matters: lists are scanned front to back, and the first hit wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDictionary"))]
pub struct Dictionary {
    profanities: Vec<String>,
    false_positives: Vec<String>,
    false_negatives: Vec<String>,
}

/// Deserialized lists, normalized through [`Dictionary::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDictionary {
    profanities: Vec<String>,
    false_positives: Vec<String>,
    false_negatives: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<RawDictionary> for Dictionary {
    fn from(raw: RawDictionary) -> Self {
        Self::new(raw.profanities, raw.false_positives, raw.false_negatives)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        DEFAULT_DICTIONARY.deref().clone()
    }
}

impl Dictionary {
    /// Builds a dictionary from arbitrary lists.
    ///
    /// Entries are lowercased, and empty entries are dropped, since an empty word would match
    /// at every position.
    pub fn new<P, FP, FN>(profanities: P, false_positives: FP, false_negatives: FN) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        FP: IntoIterator,
        FP::Item: AsRef<str>,
        FN: IntoIterator,
        FN::Item: AsRef<str>,
    {
        Self {
            profanities: normalize(profanities),
            false_positives: normalize(false_positives),
            false_negatives: normalize(false_negatives),
        }
    }

    /// Words that are detected and censored.
    pub fn profanities(&self) -> &[String] {
        &self.profanities
    }

    /// Benign words containing profanity, which are excised before profanities are matched.
    pub fn false_positives(&self) -> &[String] {
        &self.false_positives
    }

    /// Words that are always profane, even if they contain a false positive.
    pub fn false_negatives(&self) -> &[String] {
        &self.false_negatives
    }
}

fn normalize<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}
