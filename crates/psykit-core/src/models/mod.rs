pub mod block;
pub mod profile;
pub mod record;
