//! CLI context: settings file + flags, wired into the generator and output.

use std::fs;
use std::io::Write;

use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::error::{Error, Result};
use crate::pass::{Layout, PasswordGenerator, write_passwords};
use crate::rand::{RandomSource, SeedSpec};
use crate::settings::{GenerationConfig, LayoutKind, Settings};
use crate::terminal;

/// Application context for one CLI invocation.
#[derive(Debug)]
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Combine parsed flags with the settings file.
    pub fn new(flags: CliFlags) -> Result<Self> {
        let settings = Settings::load_from_file()?;
        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    /// Flags switch toggles on; positional arguments replace file values.
    pub fn config(&self) -> Result<GenerationConfig> {
        let (flags, settings) = (&self.flags, &self.settings);
        let symbols = flags.symbols || settings.symbols;

        let mut builder = GenerationConfig::builder(flags.length.unwrap_or(settings.length))
            .count(flags.count.unwrap_or(settings.count))
            .exclude_digits(flags.no_numerals || settings.no_numerals)
            .exclude_uppercase(flags.no_capitalize || settings.no_capitalize)
            .include_symbols(symbols)
            .force_one_symbol(symbols)
            .force_one_digit(flags.numerals || settings.numerals)
            .exclude_ambiguous(flags.ambiguous || settings.ambiguous)
            .exclude_vowel_like(flags.no_vowels || settings.no_vowels)
            .exclude_characters(settings.remove_chars.chars());

        if let Some(chars) = &flags.remove_chars {
            builder = builder.exclude_characters(chars.chars());
        }

        builder.build()
    }

    pub fn layout(&self) -> Layout {
        if self.flags.one_line {
            return Layout::Lines;
        }
        if self.flags.single_line {
            return Layout::SingleLine;
        }
        match self.settings.layout {
            LayoutKind::Lines => Layout::Lines,
            LayoutKind::SingleLine => Layout::SingleLine,
            LayoutKind::Columns => Layout::Columns {
                width: self
                    .flags
                    .width
                    .or(self.settings.width)
                    .unwrap_or_else(terminal::width),
            },
        }
    }

    /// Secure wins over a seed file; without either, a seedable generator
    /// is seeded from OS entropy.
    pub fn source(&self) -> Result<RandomSource> {
        if self.flags.secure || self.settings.secure {
            if self.flags.sha1.is_some() {
                prompts::seed_ignored();
            }
            return Ok(RandomSource::secure());
        }

        match &self.flags.sha1 {
            Some(arg) => {
                let spec = SeedSpec::parse(arg);
                let mut content = fs::read(&spec.path).map_err(|source| Error::SeedSource {
                    path: spec.path.clone(),
                    source,
                })?;
                let seed = spec.seed(&content);
                content.zeroize();
                debug!(
                    path = %spec.path.display(),
                    extra = spec.extra.is_some(),
                    "seeded from file"
                );
                Ok(RandomSource::deterministic(&seed))
            }
            None => Ok(RandomSource::from_entropy()),
        }
    }

    /// Generate the configured passwords into `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<usize> {
        let config = self.config()?;
        let length = config.length();
        let layout = self.layout();
        debug!(?layout, count = config.count(), length, "generating passwords");

        let mut generator = PasswordGenerator::from_config(config, self.source()?)?;
        let written = write_passwords(out, generator.passwords(), layout, length)?;
        Ok(written)
    }
}
