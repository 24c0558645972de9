use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use atelier_core::backup::EXPORT_FILENAME;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "atelier";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtelierConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// The catalog file.
    pub data_path: PathBuf,
    /// File name used when exporting a backup.
    pub export_filename: String,
    /// Where `seed` fetches sample works from. Added in v1.
    #[serde(default)]
    pub seed_url: Option<String>,
}

impl AtelierConfig {
    pub fn with_data_path(data_path: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_path,
            export_filename: EXPORT_FILENAME.to_string(),
            seed_url: None,
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

pub fn default_data_path() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR).join("works.json"))
}

/// Load the config at `path`, falling back to defaults when none exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<AtelierConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AtelierConfig::with_data_path(default_data_path()?));
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<AtelierConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        None => 0,
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!(
                "config_version {v} is newer than this build supports ({CURRENT_VERSION}). \
                 Please update atelier."
            )
        })?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: AtelierConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update atelier."
        ));
    }

    // v0 → v1: add seed_url, default export_filename
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("seed_url").or_insert(serde_json::Value::Null);
        obj.entry("export_filename")
            .or_insert(serde_json::Value::String(EXPORT_FILENAME.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added seed_url)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &AtelierConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
