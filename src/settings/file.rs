//! Settings file lookup and parsing.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::{Error, Result};

pub const ENV_PATH: &str = "PWGEN_CONFIG";

pub fn path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(ENV_PATH) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("pwgen").join("config.toml"))
}

pub fn load(path: &Path) -> Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings = parse(&text).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(settings)
}

fn parse(text: &str) -> std::result::Result<Settings, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LayoutKind;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn keys_override_defaults() {
        let settings = parse(
            r#"
            length = 14
            count = 3
            symbols = true
            numerals = false
            remove_chars = "xyz"
            layout = "single-line"
            width = 120
            "#,
        )
        .unwrap();

        assert_eq!(settings.length, 14);
        assert_eq!(settings.count, 3);
        assert!(settings.symbols);
        assert!(!settings.numerals);
        assert_eq!(settings.remove_chars, "xyz");
        assert_eq!(settings.layout, LayoutKind::SingleLine);
        assert_eq!(settings.width, Some(120));
        assert!(!settings.secure);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("lenght = 10").is_err());
    }

    #[test]
    fn missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "length = \"long\"").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
