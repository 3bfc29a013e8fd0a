//! Shared frontend utilities: configuration, errors, telemetry, theme classes
//! and build metadata. Nothing here stores secrets; configuration values are
//! public and may be overridden at runtime.

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod theme;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub use errors::AppError;
