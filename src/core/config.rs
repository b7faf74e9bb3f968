//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.remcal/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::remind::{DEFAULT_EDITOR, DEFAULT_REMIND_BINARY, OutputFormat};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemcalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remind: RemindConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub today_pane: Option<bool>,
    pub debug_timing: Option<bool>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemindConfig {
    pub binary: Option<String>,
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub command: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 400;
const MIN_POLL_INTERVAL_MS: u64 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source_path: PathBuf,
    pub today_pane: bool,
    pub debug_timing: bool,
    pub poll_interval_ms: u64,
    pub remind_binary: String,
    pub output_format: OutputFormat,
    pub editor: String,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_path: PathBuf,
    pub today_pane: bool,
    pub debug: bool,
    pub remind_binary: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.remcal`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".remcal"))
}

/// Returns the path to `~/.remcal/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the path to `~/.remcal/remcal.log`.
pub fn log_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("remcal.log"))
}

/// Load config from `~/.remcal/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RemcalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RemcalConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RemcalConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<RemcalConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(RemcalConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RemcalConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# remcal configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# today_pane = false          # Show today's reminders under the calendar (--today)
# debug_timing = false        # Show how long remind took in the status bar (--debug)
# poll_interval_ms = 400      # Key wait before re-checking the terminal size

# [remind]
# binary = "remind"           # Or set REMCAL_REMIND, or pass --remind
# output = "json"             # "json" (remind -ppp) or "simple" (remind -s)

# [editor]
# command = "vim"             # $EDITOR wins over this setting
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RemcalConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Today pane: CLI → env → config → off
    let today_pane = cli.today_pane
        || env_flag("REMCAL_TODAY_PANE")
            .or(config.general.today_pane)
            .unwrap_or(false);

    let debug_timing = cli.debug || config.general.debug_timing.unwrap_or(false);

    // Remind binary: CLI → env → config → default
    let remind_binary = cli
        .remind_binary
        .clone()
        .or_else(|| std::env::var("REMCAL_REMIND").ok())
        .or_else(|| config.remind.binary.clone())
        .unwrap_or_else(|| DEFAULT_REMIND_BINARY.to_string());

    // Editor: env → config → default
    let editor = std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| config.editor.command.clone())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    ResolvedConfig {
        source_path: cli.source_path.clone(),
        today_pane,
        debug_timing,
        poll_interval_ms: config
            .general
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(MIN_POLL_INTERVAL_MS),
        remind_binary,
        output_format: config.remind.output.unwrap_or_default(),
        editor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> CliOverrides {
        CliOverrides {
            source_path: PathBuf::from("/tmp/reminders"),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = RemcalConfig::default();
        assert!(config.general.today_pane.is_none());
        assert!(config.remind.binary.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = RemcalConfig::default();
        let resolved = resolve(&config, &cli());
        assert_eq!(resolved.source_path, PathBuf::from("/tmp/reminders"));
        assert_eq!(resolved.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(resolved.output_format, OutputFormat::Json);
        assert!(!resolved.debug_timing);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RemcalConfig {
            general: GeneralConfig {
                today_pane: Some(true),
                debug_timing: Some(true),
                poll_interval_ms: Some(1000),
            },
            remind: RemindConfig {
                binary: None,
                output: Some(OutputFormat::Simple),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &cli());
        assert!(resolved.debug_timing);
        assert_eq!(resolved.poll_interval_ms, 1000);
        assert_eq!(resolved.output_format, OutputFormat::Simple);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = RemcalConfig {
            remind: RemindConfig {
                binary: Some("/opt/remind".to_string()),
                output: None,
            },
            ..Default::default()
        };
        let overrides = CliOverrides {
            today_pane: true,
            debug: true,
            remind_binary: Some("/usr/local/bin/remind".to_string()),
            ..cli()
        };
        let resolved = resolve(&config, &overrides);
        assert!(resolved.today_pane);
        assert!(resolved.debug_timing);
        assert_eq!(resolved.remind_binary, "/usr/local/bin/remind");
    }

    #[test]
    fn test_poll_interval_has_floor() {
        let config = RemcalConfig {
            general: GeneralConfig {
                poll_interval_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config, &cli()).poll_interval_ms, MIN_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
today_pane = true
poll_interval_ms = 250

[remind]
binary = "/usr/bin/remind"
output = "simple"

[editor]
command = "nano"
"#;
        let config: RemcalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.today_pane, Some(true));
        assert_eq!(config.general.poll_interval_ms, Some(250));
        assert_eq!(config.remind.binary.as_deref(), Some("/usr/bin/remind"));
        assert_eq!(config.remind.output, Some(OutputFormat::Simple));
        assert_eq!(config.editor.command.as_deref(), Some("nano"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[remind]
output = "json"
"#;
        let config: RemcalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remind.output, Some(OutputFormat::Json));
        assert!(config.general.today_pane.is_none());
        assert!(config.editor.command.is_none());
    }

    #[test]
    fn test_unknown_output_format_is_parse_error() {
        let toml_str = r#"
[remind]
output = "xml"
"#;
        assert!(toml::from_str::<RemcalConfig>(toml_str).is_err());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.today_pane.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [remind]"));
        // The generated file is all comments, so it parses back to defaults.
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.remind.binary.is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\ntoday_pane = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
