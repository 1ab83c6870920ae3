use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AssemblyError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Thresholds and caps applied by the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// An authored summary is used verbatim only when its plain text is
    /// longer than this many characters.
    pub min_summary_chars: usize,
    /// Authored prompt count at which synthesis is skipped, for profiles
    /// that do not always top up.
    pub min_authored_prompts: usize,
    pub max_commands: usize,
    pub max_references: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            min_summary_chars: 120,
            min_authored_prompts: 3,
            max_commands: 10,
            max_references: 8,
        }
    }
}

/// Load a config file, migrating older versions.
pub fn load_config(path: &Path) -> Result<AssemblyConfig, AssemblyError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AssemblyError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "assembly config loaded");
    Ok(config)
}

/// Parse config JSON, migrating older versions before deserializing.
pub fn parse_config(contents: &str) -> Result<AssemblyConfig, AssemblyError> {
    let json: Value = serde_json::from_str(contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| AssemblyError::UnsupportedConfigVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    let mut config: AssemblyConfig = serde_json::from_value(migrated)?;
    config.config_version = CURRENT_VERSION;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: Value, from_version: u32) -> Result<Value, AssemblyError> {
    if from_version > CURRENT_VERSION {
        return Err(AssemblyError::UnsupportedConfigVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `max_prompts` renamed to `max_commands`
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(AssemblyError::ConfigShape)?;
        if let Some(max_prompts) = obj.remove("max_prompts") {
            obj.entry("max_commands").or_insert(max_prompts);
        }
        obj.insert("config_version".to_string(), Value::Number(1.into()));
        tracing::info!("migrated assembly config v0 → v1 (max_prompts → max_commands)");
    }

    Ok(json)
}
