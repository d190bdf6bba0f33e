/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the mavenization services and reports their
/// diagnostics, talking to infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
