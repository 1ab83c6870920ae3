//! psykit-bundle
//!
//! Fragment deduplication, template placeholder cleanup, and assembly of a
//! [`NormalizedBlock`](psykit_core::models::block::NormalizedBlock) from a
//! bundle of info sections, example markup, prompts and references.

pub mod normalize;
pub mod references;
pub mod text;

pub use normalize::{normalize, render_info, Bundle, InfoSection, GENERAL_PROMPTS};
pub use references::classify_reference;
pub use text::{dedupe_text, normalize_key, strip_placeholders};
