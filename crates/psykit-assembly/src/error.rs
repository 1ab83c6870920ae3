use std::path::PathBuf;

use psykit_core::models::profile::Profile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("no builder registered for profile {0}")]
    MissingBuilder(Profile),

    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u64, supported: u32 },

    #[error("config is not a JSON object")]
    ConfigShape,
}
