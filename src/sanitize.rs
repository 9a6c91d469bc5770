use crate::replacements::{Replacements, BLANK};
use bitflags::bitflags;
use finl_unicode::categories::{CharacterCategories, MinorCategory};
use std::iter;
use std::ops::Range;
use unicode_normalization::UnicodeNormalization;

bitflags! {
    /// Sanitize selects the normalization passes applied before matching. They can be combined
    /// with bitwise operators.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sanitize: u8 {
        /// Fold punctuation and symbols to a blank.
        const SPECIAL_CHARACTERS = 0b0001;
        /// Fold digits and symbols that look like letters to those letters, e.g. `4` to `a`.
        const LEET_SPEAK         = 0b0010;
        /// Fold accented letters to their base letters.
        const ACCENTS            = 0b0100;
        /// Remove all blanks after folding.
        const SPACES             = 0b1000;

        /// Every pass.
        const ALL = Self::SPECIAL_CHARACTERS.bits | Self::LEET_SPEAK.bits | Self::ACCENTS.bits | Self::SPACES.bits;
    }
}

impl Default for Sanitize {
    fn default() -> Self {
        Self::ALL
    }
}

/// Canonical (lowercase, folded) text, optionally paired with the position in the original text
/// that each canonical character came from.
///
/// Both halves are only ever modified together, so positions never drift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Canonical {
    chars: Vec<char>,
    /// `indexes[i]` is the original character position of `chars[i]`.
    indexes: Option<Vec<usize>>,
}

impl Canonical {
    #[cfg(test)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[cfg(test)]
    pub fn indexes(&self) -> Option<&[usize]> {
        self.indexes.as_deref()
    }

    /// Original character position of a canonical character, if tracked and still present.
    pub fn original(&self, pos: usize) -> Option<usize> {
        self.indexes.as_ref()?.get(pos).copied()
    }

    pub fn into_parts(self) -> (String, Option<Vec<usize>>) {
        (self.chars.into_iter().collect(), self.indexes)
    }

    fn find_from(&self, word: &[char], from: usize) -> Option<usize> {
        if word.is_empty() || from > self.chars.len() {
            return None;
        }
        self.chars[from..]
            .windows(word.len())
            .position(|window| window == word)
            .map(|pos| pos + from)
    }

    /// Non-overlapping occurrences of `word`, leftmost first, as canonical character ranges.
    ///
    /// An empty word never matches.
    pub fn find_iter<'a>(&'a self, word: &'a [char]) -> impl Iterator<Item = Range<usize>> + 'a {
        let mut from = 0;
        iter::from_fn(move || {
            let start = self.find_from(word, from)?;
            from = start + word.len();
            Some(start..from)
        })
    }

    /// Whether `range` spans an entire blank-delimited token.
    pub fn is_token(&self, range: &Range<usize>) -> bool {
        (range.start == 0 || self.chars[range.start - 1] == BLANK)
            && (range.end == self.chars.len() || self.chars[range.end] == BLANK)
            && !self.chars[range.clone()].contains(&BLANK)
    }

    /// Removes every occurrence of `word`, from both the text and the index array.
    ///
    /// Like [`str::replace`], occurrences that only form after removal are left alone.
    pub fn excise(&mut self, word: &[char]) {
        let mut keep = vec![true; self.chars.len()];
        let mut any = false;
        for range in self.find_iter(word) {
            keep[range].iter_mut().for_each(|k| *k = false);
            any = true;
        }
        if !any {
            return;
        }

        #[cfg(feature = "trace")]
        tracing::trace!(word = %word.iter().collect::<String>(), "excising");

        let mut i = 0;
        self.chars.retain(|_| {
            i += 1;
            keep[i - 1]
        });
        if let Some(indexes) = self.indexes.as_mut() {
            let mut i = 0;
            indexes.retain(|_| {
                i += 1;
                keep[i - 1]
            });
        }
    }
}

/// Produces the canonical form of `s`, recording original character positions if `track_indexes`.
///
/// The passes run in a fixed order: lowercase, `()` collapse, replacement folding, accent folding,
/// blank removal.
pub(crate) fn sanitize(
    s: &str,
    sanitize: Sanitize,
    replacements: &Replacements,
    track_indexes: bool,
) -> Canonical {
    // Each canonical character alongside the original character position it came from.
    let mut folded: Vec<(char, usize)> = Vec::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        folded.extend(c.to_lowercase().map(|lower| (lower, i)));
    }

    // Detection only, so that "()" never has to share a single original position when censoring.
    if !track_indexes && sanitize.contains(Sanitize::LEET_SPEAK | Sanitize::SPECIAL_CHARACTERS) {
        folded = collapse_parentheses(folded);
    }

    for (c, _) in folded.iter_mut() {
        if let Some(replacement) = replacements.get(*c) {
            let enabled = if Replacements::is_special(replacement) {
                sanitize.contains(Sanitize::SPECIAL_CHARACTERS)
            } else {
                sanitize.contains(Sanitize::LEET_SPEAK)
            };
            if enabled {
                *c = replacement;
            }
        }
    }

    if sanitize.contains(Sanitize::ACCENTS) {
        folded = remove_accents(folded);
    }

    if sanitize.contains(Sanitize::SPACES) {
        folded.retain(|&(c, _)| c != BLANK);
    }

    let (chars, indexes): (Vec<char>, Vec<usize>) = folded.into_iter().unzip();

    #[cfg(feature = "trace")]
    tracing::trace!(
        input = s,
        canonical = %chars.iter().collect::<String>(),
        track_indexes,
        "sanitized"
    );

    Canonical {
        chars,
        indexes: track_indexes.then(|| indexes),
    }
}

/// Replaces each `()`, scanning left to right without overlap, with `o`.
fn collapse_parentheses(folded: Vec<(char, usize)>) -> Vec<(char, usize)> {
    let mut ret = Vec::with_capacity(folded.len());
    let mut iter = folded.into_iter().peekable();
    while let Some((c, i)) = iter.next() {
        if c == '(' && matches!(iter.peek(), Some(&(')', _))) {
            iter.next();
            ret.push(('o', i));
        } else {
            ret.push((c, i));
        }
    }
    ret
}

/// Strips diacritical marks. Printable ASCII is returned as-is, without normalizing.
///
/// Characters are decomposed and recomposed one at a time, so each surviving character keeps
/// its original position.
fn remove_accents(folded: Vec<(char, usize)>) -> Vec<(char, usize)> {
    if folded.iter().all(|&(c, _)| (' '..='~').contains(&c)) {
        return folded;
    }

    fn isnt_mark_nonspacing(c: &char) -> bool {
        !matches!(c.get_minor_category(), MinorCategory::Mn)
    }

    let mut ret = Vec::with_capacity(folded.len());
    for (c, i) in folded {
        ret.extend(
            iter::once(c)
                .nfd()
                .filter(isnt_mark_nonspacing)
                .nfc()
                .map(|c| (c, i)),
        );
    }
    ret
}

#[cfg(test)]
mod tests {
    use crate::replacements::Replacements;
    use crate::sanitize::{sanitize, Canonical, Sanitize};

    fn canonical(s: &str, flags: Sanitize) -> String {
        sanitize(s, flags, &Replacements::default(), false)
            .into_parts()
            .0
    }

    fn tracked(s: &str, flags: Sanitize) -> (String, Vec<usize>) {
        let (text, indexes) = sanitize(s, flags, &Replacements::default(), true).into_parts();
        (text, indexes.unwrap())
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn lowercase() {
        assert_eq!(canonical("HeLLo", Sanitize::empty()), "hello");
        assert_eq!(canonical("", Sanitize::ALL), "");
        assert_eq!(canonical("   ", Sanitize::ALL), "");
        assert_eq!(canonical("   ", Sanitize::ALL - Sanitize::SPACES), "   ");
    }

    #[test]
    fn special_characters() {
        assert_eq!(canonical("fu_ck", Sanitize::ALL), "fuck");
        assert_eq!(
            canonical("fu_ck", Sanitize::SPECIAL_CHARACTERS | Sanitize::LEET_SPEAK),
            "fu ck"
        );
        assert_eq!(canonical("fu_ck", Sanitize::LEET_SPEAK | Sanitize::SPACES), "fu_ck");
    }

    #[test]
    fn leet_speak() {
        assert_eq!(canonical("4ss", Sanitize::ALL), "ass");
        assert_eq!(canonical("4ss", Sanitize::ALL - Sanitize::LEET_SPEAK), "4ss");
        assert_eq!(canonical("$h1t", Sanitize::ALL), "shit");
        // Without leetspeak, '$' is only a special character.
        assert_eq!(
            sanitize(
                "$h1t",
                Sanitize::SPECIAL_CHARACTERS,
                &Replacements::for_flags(true, false),
                false
            )
            .into_parts()
            .0,
            " h1t"
        );
    }

    #[test]
    fn parentheses() {
        assert_eq!(canonical("p()rn", Sanitize::ALL), "porn");
        assert_eq!(canonical("(())", Sanitize::ALL), "o");
        // Requires both special characters and leetspeak.
        assert_eq!(canonical("p()rn", Sanitize::SPECIAL_CHARACTERS), "p  rn");
        // Not collapsed when tracking indexes.
        assert_eq!(tracked("p()rn", Sanitize::ALL).0, "prn");
    }

    #[test]
    fn accents() {
        assert_eq!(canonical("pÉnis", Sanitize::ALL), "penis");
        assert_eq!(canonical("pe\u{301}nis", Sanitize::ALL), "penis");
        assert_eq!(canonical("pÉnis", Sanitize::ALL - Sanitize::ACCENTS), "pénis");
        // Hangul decomposes without marks, and must come back intact.
        assert_eq!(canonical("한국어", Sanitize::ALL), "한국어");
        // Characters are recomposed one at a time, so conjoining jamo stay separate.
        assert_eq!(
            canonical("\u{1100}\u{1161}", Sanitize::ALL),
            "\u{1100}\u{1161}"
        );
    }

    #[test]
    fn indexes() {
        let (text, indexes) = tracked("fu_ck", Sanitize::ALL);
        assert_eq!(text, "fuck");
        assert_eq!(indexes, [0, 1, 3, 4]);

        let (text, indexes) = tracked("fu_ck", Sanitize::ALL - Sanitize::SPACES);
        assert_eq!(text, "fu ck");
        assert_eq!(indexes, [0, 1, 2, 3, 4]);

        // Combining marks are dropped, but the base letter keeps its position.
        let (text, indexes) = tracked("pe\u{301}nis", Sanitize::ALL);
        assert_eq!(text, "penis");
        assert_eq!(indexes, [0, 1, 3, 4, 5]);

        // Lowercasing may expand a character.
        let (text, indexes) = tracked("İx", Sanitize::ALL - Sanitize::ACCENTS);
        assert_eq!(text, "i\u{307}x");
        assert_eq!(indexes, [0, 0, 1]);
        let (text, indexes) = tracked("İx", Sanitize::ALL);
        assert_eq!(text, "ix");
        assert_eq!(indexes, [0, 1]);
    }

    #[test]
    fn indexes_monotonic() {
        let (text, indexes) = tracked("  Ä b-c!d  ÷ 3 ", Sanitize::ALL);
        assert_eq!(indexes.len(), text.chars().count());
        assert!(indexes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn untracked_has_no_indexes() {
        let canonical = sanitize("abc", Sanitize::ALL, &Replacements::default(), false);
        assert_eq!(canonical.indexes(), None);
        assert_eq!(canonical.original(0), None);
    }

    #[test]
    fn find_iter() {
        let canonical = sanitize("aaaaa", Sanitize::ALL, &Replacements::default(), true);
        let ranges: Vec<_> = canonical.find_iter(&chars("aa")).collect();
        assert_eq!(ranges, [0..2, 2..4]);
        assert_eq!(canonical.find_iter(&[]).count(), 0);
        assert_eq!(canonical.find_iter(&chars("aaaaaa")).count(), 0);
    }

    #[test]
    fn is_token() {
        let flags = Sanitize::ALL - Sanitize::SPACES;
        let canonical = sanitize("ass classic", flags, &Replacements::default(), true);
        let ranges: Vec<_> = canonical.find_iter(&chars("ass")).collect();
        assert_eq!(ranges, [0..3, 6..9]);
        assert!(canonical.is_token(&ranges[0]));
        assert!(!canonical.is_token(&ranges[1]));
    }

    #[test]
    fn excise() {
        let mut canonical: Canonical =
            sanitize("xAbyab", Sanitize::ALL, &Replacements::default(), true);
        canonical.excise(&chars("ab"));
        assert_eq!(canonical.chars(), ['x', 'y']);
        assert_eq!(canonical.indexes().unwrap(), [0, 3]);

        // Occurrences formed by removal survive, as with str::replace.
        let mut canonical = sanitize("aabb", Sanitize::ALL, &Replacements::default(), true);
        canonical.excise(&chars("ab"));
        assert_eq!(canonical.chars(), ['a', 'b']);
        assert_eq!(canonical.indexes().unwrap(), [0, 3]);
        assert_eq!("aabb".replace("ab", ""), "ab");

        // Untracked text is excised alone.
        let mut canonical = sanitize("abc", Sanitize::ALL, &Replacements::default(), false);
        canonical.excise(&chars("b"));
        assert_eq!(canonical.into_parts(), (String::from("ac"), None));
    }
}
