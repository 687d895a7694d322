//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.practica/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::messages::Locale;
use crate::core::validate::{DEFAULT_MAX_PRIME_SPAN, DEFAULT_MAX_PRIME_WORK, Limits};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PracticaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<Locale>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub max_prime_span: Option<u64>,
    pub max_prime_work: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub locale: Locale,
    pub limits: Limits,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.practica/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".practica").join("config.toml"))
}

/// Load config from `~/.practica/config.toml`.
pub fn load_config() -> Result<PracticaConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(PracticaConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default there and
/// returns `PracticaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<PracticaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PracticaConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: PracticaConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Practica Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en"                # "en" or "es"; or set PRACTICA_LOCALE

# [limits]
# max_prime_span = 1000000     # widest accepted range for the primes card
# max_prime_work = 500000000   # trial-division budget for one primes run
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PracticaConfig, cli_locale: Option<Locale>) -> ResolvedConfig {
    resolve_with_env(config, cli_locale, std::env::var("PRACTICA_LOCALE").ok())
}

fn resolve_with_env(
    config: &PracticaConfig,
    cli_locale: Option<Locale>,
    env_locale: Option<String>,
) -> ResolvedConfig {
    let env_locale = env_locale.and_then(|raw| {
        let parsed = Locale::parse(&raw);
        if parsed.is_none() {
            warn!("Ignoring unrecognized PRACTICA_LOCALE={:?}", raw);
        }
        parsed
    });

    // Locale: CLI → env → config → default
    let locale = cli_locale
        .or(env_locale)
        .or(config.general.locale)
        .unwrap_or_default();

    ResolvedConfig {
        locale,
        limits: Limits {
            max_prime_span: config
                .limits
                .max_prime_span
                .unwrap_or(DEFAULT_MAX_PRIME_SPAN),
            max_prime_work: config
                .limits
                .max_prime_work
                .unwrap_or(DEFAULT_MAX_PRIME_WORK),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PracticaConfig::default();
        let resolved = resolve_with_env(&config, None, None);
        assert_eq!(resolved.locale, Locale::En);
        assert_eq!(resolved.limits.max_prime_span, DEFAULT_MAX_PRIME_SPAN);
        assert_eq!(resolved.limits.max_prime_work, DEFAULT_MAX_PRIME_WORK);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PracticaConfig {
            general: GeneralConfig {
                locale: Some(Locale::Es),
            },
            limits: LimitsConfig {
                max_prime_span: Some(500),
                max_prime_work: Some(9000),
            },
        };
        let resolved = resolve_with_env(&config, None, None);
        assert_eq!(resolved.locale, Locale::Es);
        assert_eq!(resolved.limits.max_prime_span, 500);
        assert_eq!(resolved.limits.max_prime_work, 9000);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = PracticaConfig {
            general: GeneralConfig {
                locale: Some(Locale::En),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, Some("es".to_string()));
        assert_eq!(resolved.locale, Locale::Es);

        let resolved = resolve_with_env(&config, Some(Locale::En), Some("es".to_string()));
        assert_eq!(resolved.locale, Locale::En);
    }

    #[test]
    fn test_bad_env_locale_falls_through() {
        let config = PracticaConfig {
            general: GeneralConfig {
                locale: Some(Locale::Es),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, Some("klingon".to_string()));
        assert_eq!(resolved.locale, Locale::Es);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[limits]
max_prime_span = 10
"#;
        let config: PracticaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.limits.max_prime_span, Some(10));
        assert!(config.general.locale.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
locale = "es"

[limits]
max_prime_span = 2000
"#;
        let config: PracticaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.locale, Some(Locale::Es));
        assert_eq!(config.limits.max_prime_span, Some(2000));
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.locale.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.limits.max_prime_span.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nlocale = 42\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
