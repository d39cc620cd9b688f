//! Build configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's `config.toml` in the project root; the file is
//! sparse, so it only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_root = "src/assets"   # Directory image references resolve against
//!
//! [links]
//! allowed_schemes = ["https", "http"]  # Schemes accepted for absolute hrefs
//! trailing_slash = true                # Warn on internal hrefs without a trailing `/`
//!
//! [assets]
//! extensions = ["svg", "png", "jpg", "jpeg", "webp"]
//! report_unused = true                 # Warn on files nothing references
//!
//! [check]
//! deny_warnings = false                # Treat warnings as failures
//!
//! [export]
//! output_dir = "dist/content"          # Where `export` writes JSON tables
//! pretty = true                        # Indented JSON
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory image references are relative to.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
    /// Href rules for menu, product and navigation entries.
    pub links: LinksConfig,
    /// Asset resolution settings.
    pub assets: AssetsConfig,
    /// Lint behaviour.
    pub check: CheckConfig,
    /// JSON export settings.
    pub export: ExportConfig,
}

fn default_assets_root() -> String {
    "src/assets".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            links: LinksConfig::default(),
            assets: AssetsConfig::default(),
            check: CheckConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_root must not be empty".into(),
            ));
        }
        if self.links.allowed_schemes.is_empty() {
            return Err(ConfigError::Validation(
                "links.allowed_schemes must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .links
            .allowed_schemes
            .iter()
            .find(|s| !is_scheme_name(s))
        {
            return Err(ConfigError::Validation(format!(
                "links.allowed_schemes: '{bad}' is not a lowercase URL scheme"
            )));
        }
        if self.assets.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "assets.extensions must not be empty".into(),
            ));
        }
        if self.export.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn is_scheme_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "+-.".contains(c))
}

/// Href rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// URL schemes accepted for absolute hrefs.
    pub allowed_schemes: Vec<String>,
    /// Internal paths are expected to end with `/`.
    pub trailing_slash: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: vec!["https".to_string(), "http".to_string()],
            trailing_slash: true,
        }
    }
}

/// Asset resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// File extensions considered images when looking for unused files.
    pub extensions: Vec<String>,
    /// Report image files under the assets root that no table references.
    pub report_unused: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            extensions: ["svg", "png", "jpg", "jpeg", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            report_unused: true,
        }
    }
}

/// Lint settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Fail the check on warnings, not only errors.
    pub deny_warnings: bool,
}

/// JSON export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub output_dir: String,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist/content".to_string(),
            pretty: true,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# distr-site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory that image references in the content tables are relative to.
assets_root = "src/assets"

# ---------------------------------------------------------------------------
# Links
# ---------------------------------------------------------------------------
[links]
# Schemes accepted for absolute hrefs. Internal hrefs start with "/".
allowed_schemes = ["https", "http"]

# Warn when an internal href does not end with "/".
trailing_slash = true

# ---------------------------------------------------------------------------
# Assets
# ---------------------------------------------------------------------------
[assets]
# Extensions treated as images when scanning the assets root.
extensions = ["svg", "png", "jpg", "jpeg", "webp"]

# Warn about image files no table references.
report_unused = true

# ---------------------------------------------------------------------------
# Check
# ---------------------------------------------------------------------------
[check]
# Fail on warnings as well as errors.
deny_warnings = false

# ---------------------------------------------------------------------------
# Export
# ---------------------------------------------------------------------------
[export]
# Directory the JSON tables are written to.
output_dir = "dist/content"

# Indent the JSON output.
pretty = true
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.assets_root, "src/assets");
        assert_eq!(config.links.allowed_schemes, vec!["https", "http"]);
        assert!(config.links.trailing_slash);
        assert!(config.assets.report_unused);
        assert!(!config.check.deny_warnings);
        assert_eq!(config.export.output_dir, "dist/content");
        assert!(config.export.pretty);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[links]
trailing_slash = false
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert!(!config.links.trailing_slash);
        // Unspecified values keep their defaults
        assert_eq!(config.links.allowed_schemes, vec!["https", "http"]);
        assert_eq!(config.assets_root, "src/assets");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.assets_root, "src/assets");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
assets_root = "public/images"

[check]
deny_warnings = true

[export]
output_dir = "build/json"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.assets_root, "public/images");
        assert!(config.check.deny_warnings);
        assert_eq!(config.export.output_dir, "build/json");
        assert!(config.export.pretty);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"pretty = true"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"pretty = false"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("pretty").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[links]
allowed_schemes = ["https"]
trailing_slash = true
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[links]
trailing_slash = false
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let links = merged.get("links").unwrap();
        assert_eq!(links.get("trailing_slash").unwrap().as_bool(), Some(false));
        assert_eq!(links.get("allowed_schemes").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str(r#"schemes = ["https", "http"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"schemes = ["mailto"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        let schemes = merged.get("schemes").unwrap().as_array().unwrap();
        assert_eq!(schemes.len(), 1);
        assert_eq!(schemes[0].as_str(), Some("mailto"));
    }

    // =========================================================================
    // Unknown keys
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"asset_root = "x""#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml = r#"
[export]
prety = false
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[render]\ntheme = \"dark\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_schemes() {
        let mut config = SiteConfig::default();
        config.links.allowed_schemes.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("allowed_schemes"));
    }

    #[test]
    fn validate_scheme_shape() {
        let mut config = SiteConfig::default();
        config.links.allowed_schemes = vec!["HTTPS".to_string()];
        assert!(config.validate().is_err());

        config.links.allowed_schemes = vec!["https://".to_string()];
        assert!(config.validate().is_err());

        config.links.allowed_schemes = vec!["git+ssh".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_paths() {
        let mut config = SiteConfig::default();
        config.assets_root = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.export.output_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_extensions() {
        let mut config = SiteConfig::default();
        config.assets.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[links]\nallowed_schemes = []\n",
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml / stock_defaults_value
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.assets_root, defaults.assets_root);
        assert_eq!(config.links.allowed_schemes, defaults.links.allowed_schemes);
        assert_eq!(config.assets.extensions, defaults.assets.extensions);
        assert_eq!(config.export.output_dir, defaults.export.output_dir);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[links]", "[assets]", "[check]", "[export]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for key in ["assets_root", "links", "assets", "check", "export"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
