//! psykit-core
//!
//! Pure domain types shared by the content assembly pipeline: content
//! records as authored, the presentation profiles they classify into, and
//! the normalized block handed to the presentation layer.

pub mod catalogue;
pub mod error;
pub mod models;
