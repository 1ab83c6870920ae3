//! psykit-assembly
//!
//! Classifies a content record into a presentation [`Profile`] and builds
//! its [`NormalizedBlock`]: authored content first, profile-specific
//! synthesis where authored content is missing or too thin.
//!
//! [`Profile`]: psykit_core::models::profile::Profile
//! [`NormalizedBlock`]: psykit_core::models::block::NormalizedBlock

pub mod assemble;
pub mod config;
pub mod detect;
pub mod error;
pub mod profiles;

pub use assemble::{assemble_catalogue, placeholder_block, Assembler, PLACEHOLDER_INFO};
pub use config::AssemblyConfig;
pub use detect::detect_profile;
pub use profiles::{ProfileBuilder, ProfileTable};
