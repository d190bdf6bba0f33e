/// Shared kernel - error types, path safety checks and the crate-wide Result alias
pub mod error;
pub mod security;

/// Result with `anyhow::Error`; typed failures are `error::MavenizeError`
/// values that callers can recover with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
