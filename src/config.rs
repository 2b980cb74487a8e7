//! Configuration for podtrack.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (PODTRACK_CONFIG, PODTRACK_NO_SEED)
//! 2. Config file (.podtrack/config.yaml)
//! 3. Defaults (seeded catalog, built-in mood table)
//!
//! Config file discovery:
//! - PODTRACK_CONFIG names the file explicitly
//! - Otherwise searches current directory and parents for .podtrack/config.yaml
//! - Finally falls back to ~/.podtrack/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::recommend::{default_moods, MoodEntry};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Lettered choices the interactive menu can offer (A-Z)
pub const MENU_CHOICES: usize = 26;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Replaces the built-in mood table when present
    #[serde(default)]
    pub moods: Option<Vec<MoodEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Load the startup records (default: true)
    pub seed: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Whether the catalog starts with the seed records
    pub seed: bool,
    /// Mood table for the recommendation index
    pub moods: Vec<MoodEntry>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            seed: true,
            moods: default_moods(),
        }
    }
}

/// Find config file: explicit env var, then current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    locate_config_file(
        std::env::var_os("PODTRACK_CONFIG").map(PathBuf::from),
        std::env::current_dir().ok(),
        dirs::home_dir(),
    )
}

/// Discovery order for the config file; an explicit path is taken as-is
fn locate_config_file(
    explicit: Option<PathBuf>,
    start: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    if let Some(mut current) = start {
        loop {
            let config_path = current.join(".podtrack").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    home.map(|home| home.join(".podtrack").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Read a boolean-ish environment flag
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

/// "1", "true" and "yes" (any case, surrounding whitespace ignored) are set
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Moods past the last menu letter; still reachable through `recommend`
fn moods_beyond_menu(moods: &[MoodEntry]) -> &[MoodEntry] {
    moods.get(MENU_CHOICES..).unwrap_or(&[])
}

/// Merge a parsed config file (if any) with environment overrides
fn resolve(config_file: Option<PathBuf>, file: Option<ConfigFile>, no_seed: bool) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let (seed, moods) = match file {
        Some(file) => {
            let moods = match file.moods {
                Some(moods) if moods.is_empty() => {
                    warn!("Config lists no moods, using built-in table");
                    defaults.moods
                }
                Some(moods) => moods,
                None => defaults.moods,
            };
            (file.catalog.seed.unwrap_or(defaults.seed), moods)
        }
        None => (defaults.seed, defaults.moods),
    };

    let hidden = moods_beyond_menu(&moods);
    if !hidden.is_empty() {
        let names: Vec<&str> = hidden.iter().map(|m| m.name.as_str()).collect();
        warn!(
            limit = MENU_CHOICES,
            hidden = %names.join(", "),
            "Mood table exceeds menu letters; extra moods cannot be picked from the menu"
        );
    }

    ResolvedConfig {
        config_file,
        seed: seed && !no_seed,
        moods,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let file = match config_file {
        Some(ref path) => {
            debug!(path = %path.display(), "Loading config file");
            Some(load_config_file(path)?)
        }
        None => None,
    };

    Ok(resolve(config_file, file, env_flag("PODTRACK_NO_SEED")))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".podtrack");
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        (temp, path)
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None, false);

        assert!(config.seed);
        assert!(config.config_file.is_none());
        assert_eq!(config.moods, default_moods());
    }

    #[test]
    fn test_config_file_parsing() {
        let (_temp, path) = write_config(
            r#"
version: "1.0"
catalog:
  seed: false
moods:
  - name: Focused
    recommended: [Deep Work, Flow State]
"#,
        );

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.version, "1.0");
        assert_eq!(file.catalog.seed, Some(false));

        let config = resolve(Some(path.clone()), Some(file), false);
        assert!(!config.seed);
        assert_eq!(config.config_file, Some(path));
        assert_eq!(config.moods.len(), 1);
        assert_eq!(config.moods[0].recommended, vec!["Deep Work", "Flow State"]);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let (_temp, path) = write_config(r#"version: "1.0""#);

        let file = load_config_file(&path).unwrap();
        let config = resolve(Some(path), Some(file), false);

        assert!(config.seed);
        assert_eq!(config.moods, default_moods());
    }

    #[test]
    fn test_empty_mood_list_uses_builtin_table() {
        let (_temp, path) = write_config("version: \"1.0\"\nmoods: []");

        let file = load_config_file(&path).unwrap();
        let config = resolve(Some(path), Some(file), false);

        assert_eq!(config.moods, default_moods());
    }

    #[test]
    fn test_no_seed_override_wins() {
        let (_temp, path) = write_config("version: \"1.0\"\ncatalog:\n  seed: true");

        let file = load_config_file(&path).unwrap();
        let config = resolve(Some(path), Some(file), true);

        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let (_temp, path) = write_config("moods: [unterminated");

        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_parse_flag_values() {
        for set in ["1", "true", "TRUE", "yes", "Yes", " 1 ", "true\n"] {
            assert!(parse_flag(set), "{:?} should be set", set);
        }
        for unset in ["", "0", "false", "no", "on", "2"] {
            assert!(!parse_flag(unset), "{:?} should be unset", unset);
        }
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let (temp, found) = write_config(r#"version: "1.0""#);
        let explicit = temp.path().join("elsewhere.yaml");

        let located = locate_config_file(
            Some(explicit.clone()),
            Some(temp.path().to_path_buf()),
            None,
        );
        assert_eq!(located, Some(explicit));

        let located = locate_config_file(None, Some(temp.path().to_path_buf()), None);
        assert_eq!(located, Some(found));
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let (temp, path) = write_config(r#"version: "1.0""#);
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(locate_config_file(None, Some(nested), None), Some(path));
    }

    #[test]
    fn test_home_config_fallback() {
        let work = TempDir::new().unwrap();
        let (home, path) = write_config(r#"version: "1.0""#);

        let located = locate_config_file(
            None,
            Some(work.path().to_path_buf()),
            Some(home.path().to_path_buf()),
        );
        assert_eq!(located, Some(path));

        let empty_home = TempDir::new().unwrap();
        let located = locate_config_file(
            None,
            Some(work.path().to_path_buf()),
            Some(empty_home.path().to_path_buf()),
        );
        assert_eq!(located, None);
    }

    #[test]
    fn test_moods_beyond_menu_letters() {
        let moods: Vec<MoodEntry> = (0..MENU_CHOICES + 2)
            .map(|i| MoodEntry::new(format!("Mood {}", i), &["Title"]))
            .collect();

        let hidden = moods_beyond_menu(&moods);
        assert_eq!(hidden.len(), 2);
        assert_eq!(hidden[0].name, "Mood 26");
        assert!(moods_beyond_menu(&default_moods()).is_empty());

        // The full table is still kept for lookups
        let config = resolve(
            None,
            Some(ConfigFile {
                version: "1.0".to_string(),
                catalog: CatalogConfig::default(),
                moods: Some(moods),
            }),
            false,
        );
        assert_eq!(config.moods.len(), MENU_CHOICES + 2);
    }
}
