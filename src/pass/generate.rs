//! Password generation.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::{self, AMBIGUOUS, CharacterPool, DIGITS, SYMBOLS, VOWEL_LIKE};
use crate::error::{Error, Result};
use crate::rand::RandomSource;
use crate::settings::GenerationConfig;

/// A generated password. Its characters are wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({:?})", self.0)
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Draws passwords for one session.
///
/// Owns its pool, its configuration and its randomness source. The source is
/// never shared: each draw advances it, so interleaving two generators on
/// one source would break reproducibility.
pub struct PasswordGenerator {
    pool: CharacterPool,
    config: GenerationConfig,
    candidates: Vec<char>,
    rng: RandomSource,
}

impl PasswordGenerator {
    /// Build the pool from `config` and take ownership of `rng`.
    pub fn from_config(config: GenerationConfig, rng: RandomSource) -> Result<Self> {
        let pool = charset::build(&config)?;
        Self::new(pool, config, rng)
    }

    /// Generator over an existing pool.
    ///
    /// Pool characters hit by the ambiguous or vowel-like rules are rejected
    /// here, once, so filling never retries. Fails with
    /// [`Error::EmptyPool`] if nothing survives.
    pub fn new(pool: CharacterPool, config: GenerationConfig, rng: RandomSource) -> Result<Self> {
        let candidates: Vec<char> = pool.iter().filter(|&c| !rejects(&config, c)).collect();
        if candidates.is_empty() {
            return Err(Error::EmptyPool);
        }

        debug!(
            source = rng.name(),
            pool_size = pool.len(),
            candidates = candidates.len(),
            length = config.length(),
            "password generator ready"
        );

        Ok(Self {
            pool,
            config,
            candidates,
            rng,
        })
    }

    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a single password.
    pub fn generate(&mut self) -> Password {
        assemble(&self.candidates, &self.config, &mut self.rng)
    }

    /// The configured number of passwords.
    pub fn passwords(&mut self) -> Passwords<'_> {
        let count = self.config.count();
        self.generate_many(count)
    }

    /// Exactly `count` passwords, produced lazily.
    ///
    /// The sequence cannot be restarted; reproducing it takes a generator
    /// built from the same seed.
    pub fn generate_many(&mut self, count: usize) -> Passwords<'_> {
        Passwords {
            generator: self,
            remaining: count,
        }
    }

    /// Give the randomness source back.
    pub fn into_source(self) -> RandomSource {
        self.rng
    }
}

impl fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator")
            .field("pool", &self.pool.len())
            .field("config", &self.config)
            .field("rng", &self.rng)
            .finish()
    }
}

/// Lazy, finite sequence of passwords from a [`PasswordGenerator`].
pub struct Passwords<'a> {
    generator: &'a mut PasswordGenerator,
    remaining: usize,
}

impl Iterator for Passwords<'_> {
    type Item = Password;

    fn next(&mut self) -> Option<Password> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Passwords<'_> {}

impl FusedIterator for Passwords<'_> {}

#[inline]
fn rejects(config: &GenerationConfig, c: char) -> bool {
    (config.exclude_ambiguous() && AMBIGUOUS.contains(c))
        || (config.exclude_vowel_like() && VOWEL_LIKE.contains(c))
}

#[inline]
fn pick<R: Rng + ?Sized>(class: &str, rng: &mut R) -> char {
    let bytes = class.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

/// Forced symbol, forced digit, pool fill, then shuffle.
///
/// Forced characters come from the raw classes and skip the rejection rules.
fn assemble<R: Rng + ?Sized>(
    candidates: &[char],
    config: &GenerationConfig,
    rng: &mut R,
) -> Password {
    let mut n = config.length();
    let mut chars: Vec<char> = Vec::with_capacity(n);

    if config.force_one_symbol() && n > 0 {
        chars.push(pick(SYMBOLS, rng));
        n -= 1;
    }

    if config.force_one_digit() && !config.exclude_digits() && n > 0 {
        chars.push(pick(DIGITS, rng));
        n -= 1;
    }

    chars.extend((0..n).map(|_| candidates[rng.random_range(0..candidates.len())]));

    chars.shuffle(rng);

    let password = Password(chars.iter().collect());
    chars.zeroize();
    password
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Seed;
    use crate::settings::GenerationConfigBuilder;

    fn seeded() -> RandomSource {
        RandomSource::deterministic(&Seed::derive(b"abcdef"))
    }

    fn generator(builder: GenerationConfigBuilder) -> PasswordGenerator {
        PasswordGenerator::from_config(builder.build().unwrap(), seeded()).unwrap()
    }

    fn all(builder: GenerationConfigBuilder, count: usize) -> Vec<Password> {
        generator(builder).generate_many(count).collect()
    }

    #[test]
    fn plain_passwords_have_exact_length() {
        let passwords = all(GenerationConfig::builder(8).count(5), 5);
        assert_eq!(passwords.len(), 5);
        for p in &passwords {
            assert_eq!(p.len(), 8);
            assert!(p.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn passwords_follow_configured_count() {
        let mut generator = generator(GenerationConfig::builder(6).count(7));
        let passwords = generator.passwords();
        assert_eq!(passwords.len(), 7);
        assert_eq!(passwords.count(), 7);
        assert_eq!(generator.generate_many(0).count(), 0);
    }

    #[test]
    fn forced_digit_always_present() {
        for p in all(GenerationConfig::builder(5).force_one_digit(true), 10_000) {
            assert!(p.chars().any(|c| c.is_ascii_digit()), "{p}");
        }
    }

    #[test]
    fn forced_digit_ignored_when_digits_excluded() {
        let builder = GenerationConfig::builder(10)
            .force_one_digit(true)
            .exclude_digits(true);
        for p in all(builder, 2_000) {
            assert!(!p.chars().any(|c| c.is_ascii_digit()), "{p}");
        }
    }

    #[test]
    fn forced_symbol_always_present() {
        let builder = GenerationConfig::builder(5)
            .include_symbols(true)
            .force_one_symbol(true);
        for p in all(builder, 10_000) {
            assert!(p.chars().any(|c| SYMBOLS.contains(c)), "{p}");
        }
    }

    #[test]
    fn single_slot_goes_to_forced_symbol() {
        let builder = GenerationConfig::builder(1)
            .force_one_symbol(true)
            .force_one_digit(true);
        for p in all(builder, 2_000) {
            assert_eq!(p.len(), 1);
            assert!(SYMBOLS.contains(p.as_str()), "{p}");
        }
    }

    #[test]
    fn forced_symbol_bypasses_pool_exclusions() {
        let builder = GenerationConfig::builder(3)
            .force_one_symbol(true)
            .exclude_characters(SYMBOLS.chars());
        for p in all(builder, 500) {
            assert_eq!(p.chars().filter(|&c| SYMBOLS.contains(c)).count(), 1, "{p}");
        }
    }

    #[test]
    fn ambiguous_characters_never_drawn() {
        for p in all(GenerationConfig::builder(10).exclude_ambiguous(true), 10_000) {
            assert!(p.chars().all(|c| !AMBIGUOUS.contains(c)), "{p}");
        }
    }

    #[test]
    fn vowel_like_characters_never_drawn() {
        for p in all(GenerationConfig::builder(10).exclude_vowel_like(true), 10_000) {
            assert!(p.chars().all(|c| !VOWEL_LIKE.contains(c)), "{p}");
        }
    }

    #[test]
    fn excluded_classes_never_drawn() {
        let builder = GenerationConfig::builder(10)
            .exclude_digits(true)
            .exclude_uppercase(true);
        for p in all(builder, 5_000) {
            assert!(p.chars().all(|c| c.is_ascii_lowercase()), "{p}");
        }
    }

    #[test]
    fn removed_characters_never_drawn() {
        let removed = "abcdefghijklmnJKLMNOPQRSTUVWXYZ01234";
        let builder = GenerationConfig::builder(10).exclude_characters(removed.chars());
        for p in all(builder, 10_000) {
            assert!(p.chars().all(|c| !removed.contains(c)), "{p}");
        }
    }

    #[test]
    fn custom_pool_is_filtered_by_rejection() {
        let pool = CharacterPool::new("O0ab".chars()).unwrap();
        let config = GenerationConfig::builder(12)
            .exclude_ambiguous(true)
            .build()
            .unwrap();
        let mut generator = PasswordGenerator::new(pool, config, seeded()).unwrap();
        for p in generator.generate_many(1_000) {
            assert!(p.chars().all(|c| c == 'a' || c == 'b'), "{p}");
        }
    }

    #[test]
    fn fully_rejected_pool_is_an_error() {
        let pool = CharacterPool::new(AMBIGUOUS.chars()).unwrap();
        let config = GenerationConfig::builder(8)
            .exclude_ambiguous(true)
            .build()
            .unwrap();
        let err = PasswordGenerator::new(pool, config, seeded()).unwrap_err();
        assert!(matches!(err, Error::EmptyPool));
    }

    #[test]
    fn same_seed_same_sequence() {
        let builder = GenerationConfig::builder(5).include_symbols(true).force_one_symbol(true);
        let first = all(builder.clone(), 10_000);
        let second = all(builder, 10_000);
        assert_eq!(first, second);
    }

    #[test]
    fn secure_sources_are_not_reproducible() {
        let config = GenerationConfig::builder(100).count(100).build().unwrap();
        let mut a = PasswordGenerator::from_config(config.clone(), RandomSource::secure()).unwrap();
        let mut b = PasswordGenerator::from_config(config, RandomSource::secure()).unwrap();
        let first: Vec<Password> = a.passwords().collect();
        let second: Vec<Password> = b.passwords().collect();
        assert_ne!(first, second);
    }

    #[test]
    fn forced_characters_are_not_pinned_to_the_front() {
        let builder = GenerationConfig::builder(8)
            .force_one_symbol(true)
            .exclude_characters(SYMBOLS.chars());
        let moved = all(builder, 500)
            .iter()
            .filter(|p| !SYMBOLS.contains(p.chars().next().unwrap()))
            .count();
        assert!(moved > 0);
    }
}
