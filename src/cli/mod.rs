mod context;
mod flags;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
