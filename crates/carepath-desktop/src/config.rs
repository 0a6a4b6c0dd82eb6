use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_ID: &str = "com.carepath.desktop";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-5-haiku-20241022-v1:0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarepathConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// AWS region used for wellness-plan drafting.
    pub region: String,
    /// Shown in the header of the combined prescription.
    pub clinic_name: String,
    /// Bedrock model for wellness-plan drafting. Added in v1.
    pub model_id: String,
    /// Where selections and the archive are stored. `None` means the
    /// platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl Default for CarepathConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            clinic_name: String::new(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            data_dir: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl CarepathConfig {
    pub fn resolved_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .ok_or_else(|| eyre::eyre!("no data directory found"))?
                .join(APP_ID)),
        }
    }
}

/// Config summary safe to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub region: String,
    pub clinic_name: String,
    pub model_id: String,
    pub data_dir: String,
    pub created_at: String,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_ID))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<CarepathConfig> {
    load_config_from(&config_path()?)
}

/// Load the config, or defaults when none has been saved yet.
pub fn load_or_default() -> eyre::Result<CarepathConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::info!("no saved config, using defaults");
        Ok(CarepathConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<CarepathConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse raw config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<CarepathConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update CarePath."
        ));
    }

    // v0 → v1: add model_id
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added model_id)");
    }

    Ok(json)
}

pub fn save_config(config: &CarepathConfig) -> eyre::Result<()> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &CarepathConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &CarepathConfig) -> ConfigInfo {
    let data_dir = config
        .resolved_data_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|_| "(unavailable)".to_string());

    ConfigInfo {
        region: config.region.clone(),
        clinic_name: config.clinic_name.clone(),
        model_id: config.model_id.clone(),
        data_dir,
        created_at: config.created_at.to_string(),
    }
}
