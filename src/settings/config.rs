//! Validated, read-only generation parameters.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Parameters for one generation session.
///
/// Built once through [`GenerationConfig::builder`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    count: usize,
    exclude_digits: bool,
    exclude_uppercase: bool,
    include_symbols: bool,
    force_one_digit: bool,
    force_one_symbol: bool,
    exclude_ambiguous: bool,
    exclude_vowel_like: bool,
    excluded_characters: BTreeSet<char>,
}

impl GenerationConfig {
    pub fn builder(length: usize) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new(length)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn exclude_digits(&self) -> bool {
        self.exclude_digits
    }

    pub fn exclude_uppercase(&self) -> bool {
        self.exclude_uppercase
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    pub fn force_one_digit(&self) -> bool {
        self.force_one_digit
    }

    pub fn force_one_symbol(&self) -> bool {
        self.force_one_symbol
    }

    pub fn exclude_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }

    pub fn exclude_vowel_like(&self) -> bool {
        self.exclude_vowel_like
    }

    pub fn excluded_characters(&self) -> &BTreeSet<char> {
        &self.excluded_characters
    }
}

/// Chained setters for [`GenerationConfig`].
#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    fn new(length: usize) -> Self {
        Self {
            config: GenerationConfig {
                length,
                count: 1,
                exclude_digits: false,
                exclude_uppercase: false,
                include_symbols: false,
                force_one_digit: false,
                force_one_symbol: false,
                exclude_ambiguous: false,
                exclude_vowel_like: false,
                excluded_characters: BTreeSet::new(),
            },
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    pub fn exclude_digits(mut self, on: bool) -> Self {
        self.config.exclude_digits = on;
        self
    }

    pub fn exclude_uppercase(mut self, on: bool) -> Self {
        self.config.exclude_uppercase = on;
        self
    }

    pub fn include_symbols(mut self, on: bool) -> Self {
        self.config.include_symbols = on;
        self
    }

    pub fn force_one_digit(mut self, on: bool) -> Self {
        self.config.force_one_digit = on;
        self
    }

    pub fn force_one_symbol(mut self, on: bool) -> Self {
        self.config.force_one_symbol = on;
        self
    }

    pub fn exclude_ambiguous(mut self, on: bool) -> Self {
        self.config.exclude_ambiguous = on;
        self
    }

    pub fn exclude_vowel_like(mut self, on: bool) -> Self {
        self.config.exclude_vowel_like = on;
        self
    }

    /// Add characters that must never be drawn from the pool.
    pub fn exclude_characters<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.config.excluded_characters.extend(chars);
        self
    }

    pub fn build(self) -> Result<GenerationConfig> {
        if self.config.length == 0 {
            return Err(Error::invalid_configuration(
                "password length must be at least 1",
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        let err = GenerationConfig::builder(0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn builder_collects_toggles() {
        let config = GenerationConfig::builder(12)
            .count(3)
            .exclude_digits(true)
            .force_one_symbol(true)
            .exclude_characters("abca".chars())
            .build()
            .unwrap();

        assert_eq!(config.length(), 12);
        assert_eq!(config.count(), 3);
        assert!(config.exclude_digits());
        assert!(config.force_one_symbol());
        assert!(!config.exclude_uppercase());
        assert_eq!(config.excluded_characters().len(), 3);
    }
}
