//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `WAYMARK_TABLE_DIR`, `WAYMARK_STRICT`
//! 2. Project-local: `.waymark/config.toml`
//! 3. Global: `~/.waymark/config.toml`

use crate::import::ImportOptions;
use crate::types::{BezierSettings, PathKindName};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use waymark_core::{Result, Vec3, WaymarkError};

/// `[import]` section as written in a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSection {
    #[serde(default)]
    pub table_dir: Option<PathBuf>,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub path_kind: Option<PathKindName>,
}

/// `[bezier]` section as written in a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BezierSection {
    #[serde(default)]
    pub detail: Option<u32>,
    #[serde(default)]
    pub handle_offset: Option<f32>,
}

/// `[colliders]` section as written in a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColliderSection {
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub scale: Option<[f32; 3]>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaymarkConfigFile {
    #[serde(default)]
    pub import: ImportSection,
    #[serde(default)]
    pub bezier: BezierSection,
    #[serde(default)]
    pub colliders: ColliderSection,
}

/// Resolved configuration with every layer applied
#[derive(Debug, Clone, PartialEq)]
pub struct WaymarkConfig {
    pub table_dir: PathBuf,
    pub strict: bool,
    pub path_kind: PathKindName,
    pub bezier: BezierSettings,
    pub collider_parent: String,
    pub collider_scale: Vec3,
}

impl Default for WaymarkConfig {
    fn default() -> Self {
        Self {
            table_dir: PathBuf::from("table"),
            strict: false,
            path_kind: PathKindName::Standard,
            bezier: BezierSettings::default(),
            collider_parent: "WalkColliders".to_string(),
            collider_scale: Vec3::ONE,
        }
    }
}

impl WaymarkConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = WaymarkConfigFile::default();

        // Layer 1: Global config (~/.waymark/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 2: Project-local config (.waymark/config.toml)
        let local_path = PathBuf::from(".waymark/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        // Layer 3: Environment variable overrides
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        Ok(Self::resolve(config))
    }

    /// Load config from a specific file path only, plus env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(Self::resolve(config))
    }

    /// Import options derived from this config
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            strict: self.strict,
            kind: self.path_kind,
            bezier: self.bezier,
            ..Default::default()
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waymark").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<WaymarkConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            WaymarkError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut WaymarkConfigFile, overlay: WaymarkConfigFile) {
        if overlay.import.table_dir.is_some() {
            base.import.table_dir = overlay.import.table_dir;
        }
        if overlay.import.strict.is_some() {
            base.import.strict = overlay.import.strict;
        }
        if overlay.import.path_kind.is_some() {
            base.import.path_kind = overlay.import.path_kind;
        }
        if overlay.bezier.detail.is_some() {
            base.bezier.detail = overlay.bezier.detail;
        }
        if overlay.bezier.handle_offset.is_some() {
            base.bezier.handle_offset = overlay.bezier.handle_offset;
        }
        if overlay.colliders.parent.is_some() {
            base.colliders.parent = overlay.colliders.parent;
        }
        if overlay.colliders.scale.is_some() {
            base.colliders.scale = overlay.colliders.scale;
        }
    }

    fn apply_env_overrides<F>(config: &mut WaymarkConfigFile, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("WAYMARK_TABLE_DIR") {
            config.import.table_dir = Some(PathBuf::from(dir));
        }
        if let Some(strict) = lookup("WAYMARK_STRICT") {
            let strict = match strict.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(WaymarkError::ConfigError(format!(
                        "WAYMARK_STRICT must be true or false, got '{}'",
                        other
                    )))
                }
            };
            config.import.strict = Some(strict);
        }
        Ok(())
    }

    fn resolve(file: WaymarkConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            table_dir: file.import.table_dir.unwrap_or(defaults.table_dir),
            strict: file.import.strict.unwrap_or(defaults.strict),
            path_kind: file.import.path_kind.unwrap_or(defaults.path_kind),
            bezier: BezierSettings {
                detail: file.bezier.detail.unwrap_or(defaults.bezier.detail),
                handle_offset: file
                    .bezier
                    .handle_offset
                    .unwrap_or(defaults.bezier.handle_offset),
            },
            collider_parent: file.colliders.parent.unwrap_or(defaults.collider_parent),
            collider_scale: file
                .colliders
                .scale
                .map(Vec3::from_array)
                .unwrap_or(defaults.collider_scale),
        }
    }
}
