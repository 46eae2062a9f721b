//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::CharacterPool;
pub use generate::{Password, PasswordGenerator, Passwords};
pub use output::{Layout, write_passwords};
