//! Character pool construction.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::settings::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Characters easily confused with one another when printed.
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2";
/// Vowels, plus digits that read as vowels.
pub const VOWEL_LIKE: &str = "01aeiouyAEIOUY";

/// Deduplicated, sorted set of characters eligible for random selection.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Pool from an arbitrary character set.
    pub fn new<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let set: BTreeSet<char> = chars.into_iter().collect();
        if set.is_empty() {
            return Err(Error::EmptyPool);
        }
        Ok(Self {
            chars: set.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// Build the character pool for a configuration.
pub fn build(config: &GenerationConfig) -> Result<CharacterPool> {
    let mut chars: BTreeSet<char> = LOWERCASE.chars().collect();

    if !config.exclude_digits() {
        chars.extend(DIGITS.chars());
    }

    if !config.exclude_uppercase() {
        chars.extend(UPPERCASE.chars());
    }

    if config.include_symbols() {
        chars.extend(SYMBOLS.chars());
    }

    let excluded = exclusions(config);
    chars.retain(|c| !excluded.contains(c));

    debug!(
        pool_size = chars.len(),
        excluded = excluded.len(),
        "built character pool"
    );

    CharacterPool::new(chars)
}

/// Union of the explicit exclusions and the enabled fixed sets.
pub fn exclusions(config: &GenerationConfig) -> BTreeSet<char> {
    let mut excluded = config.excluded_characters().clone();

    if config.exclude_ambiguous() {
        excluded.extend(AMBIGUOUS.chars());
    }

    if config.exclude_vowel_like() {
        excluded.extend(VOWEL_LIKE.chars());
    }

    excluded
}
