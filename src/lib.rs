//! Password generation from configurable character pools.
//!
//! A [`GenerationConfig`] selects the character classes and exclusions,
//! [`pass::charset::build`] turns it into a [`CharacterPool`], and a
//! [`PasswordGenerator`] draws passwords from that pool using a
//! [`RandomSource`]: either a deterministic stream fixed by a [`Seed`] or
//! operating-system entropy.
//!
//! ```
//! use pwgen::{GenerationConfig, PasswordGenerator, RandomSource, Seed};
//!
//! let config = GenerationConfig::builder(12)
//!     .count(3)
//!     .force_one_digit(true)
//!     .exclude_ambiguous(true)
//!     .build()?;
//! let rng = RandomSource::deterministic(&Seed::derive(b"my seed file"));
//! let mut generator = PasswordGenerator::from_config(config, rng)?;
//!
//! for password in generator.passwords() {
//!     assert_eq!(password.len(), 12);
//! }
//! # Ok::<(), pwgen::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod logger;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
pub use pass::{CharacterPool, Layout, Password, PasswordGenerator, Passwords};
pub use crate::rand::{RandomSource, Seed};
pub use settings::GenerationConfig;
