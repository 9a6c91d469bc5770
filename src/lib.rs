//! goaway detects, extracts and censors profanity, even when it is obfuscated with leetspeak,
//! special characters, accents or spaces.
//!
//! ```
//! use goaway::CensorStr;
//!
//! assert!("f u_c-k".is_profane());
//! assert_eq!("hello $h1t world".censor(), "hello **** world");
//! ```
//!
//! For custom options or dictionaries, create a [`ProfanityDetector`].

mod censor;
mod detector;
mod dictionary;
mod feature_cell;
mod mtch;
mod replacements;
mod sanitize;

pub use censor::{censor, extract_profanity, is_profane, CensorStr};
#[cfg(feature = "customize")]
pub use detector::customize_default;
pub use detector::ProfanityDetector;
pub use dictionary::Dictionary;
pub use replacements::Replacements;
pub use sanitize::Sanitize;

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;

use doc_comment::doctest;
doctest!("../README.md");
