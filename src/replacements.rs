use crate::Map;
use lazy_static::lazy_static;
use std::ops::Deref;

/// The blank marker. Replacements that map to it are special-character folds.
pub(crate) const BLANK: char = ' ';

lazy_static! {
    /// Punctuation and symbols that fold to a blank.
    static ref SPECIAL_CHARACTERS: Vec<char> = include_str!("special_characters.txt")
        .lines()
        .filter_map(|line| line.chars().next())
        .collect();
    /// Digits and symbols that stand in for letters.
    static ref LEET_SPEAK: Vec<(char, char)> = include_str!("leet_speak.csv")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut chars = line.chars();
            let src = chars.next().unwrap();
            assert_eq!(chars.next(), Some(','), "malformed leet_speak.csv line {:?}", line);
            (src, chars.next().unwrap())
        })
        .collect();
    static ref DEFAULT_REPLACEMENTS: Replacements = Replacements::for_flags(true, true);
}

/// Maps a single input character to the character it is folded into.
///
/// An entry whose value is `' '` is a special-character fold, and is only applied when special
/// characters are sanitized. Any other value is a leetspeak fold, and is only applied when
/// leetspeak is sanitized. This classification does not depend on insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Replacements(Map<char, char>);

impl Default for Replacements {
    fn default() -> Self {
        DEFAULT_REPLACEMENTS.deref().clone()
    }
}

impl Replacements {
    /// Empty.
    pub fn new() -> Self {
        Self(Default::default())
    }

    /// Rebuilds the bundled table for the given folding options.
    ///
    /// Characters that are both special characters and leetspeak (e.g. `$`) fold to their letter
    /// if `leet_speak` is set, and to a blank otherwise.
    pub fn for_flags(special_characters: bool, leet_speak: bool) -> Self {
        let mut ret = Self::new();
        if special_characters {
            for &c in SPECIAL_CHARACTERS.iter() {
                ret.insert(c, BLANK);
            }
        }
        if leet_speak {
            for &(src, dst) in LEET_SPEAK.iter() {
                ret.insert(src, dst);
            }
        }
        ret
    }

    pub fn get(&self, src: char) -> Option<char> {
        self.0.get(&src).copied()
    }

    /// Adds (or overwrites) a replacement.
    pub fn insert(&mut self, src: char, dst: char) {
        self.0.insert(src, dst);
    }

    /// Removes a replacement, returning what it mapped to.
    pub fn remove(&mut self, src: char) -> Option<char> {
        self.0.remove(&src)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a replacement value counts as a special-character fold.
    pub fn is_special(dst: char) -> bool {
        dst == BLANK
    }
}

impl FromIterator<(char, char)> for Replacements {
    fn from_iter<T: IntoIterator<Item = (char, char)>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

impl Extend<(char, char)> for Replacements {
    fn extend<T: IntoIterator<Item = (char, char)>>(&mut self, iter: T) {
        for (src, dst) in iter {
            self.insert(src, dst);
        }
    }
}
