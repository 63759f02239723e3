//! Per-type attribute sets for flat (non-nested) resources.
//!
//! Every struct deserializes with `#[serde(default)]` so partially filled
//! forms still produce a usable configuration.

pub mod compute;
pub mod database;
pub mod integration;
pub mod networking;
pub mod operations;
pub mod security;
pub mod storage;

pub use compute::*;
pub use database::*;
pub use integration::*;
pub use networking::*;
pub use operations::*;
pub use security::*;
pub use storage::*;
