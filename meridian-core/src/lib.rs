//! # Meridian Core — Shared Platform Infrastructure
//!
//! Error taxonomy, typed configuration, and bounded containers shared by the
//! Meridian LMS service crates. Every service layer links against this
//! library.

pub mod bounded;
pub mod config;
pub mod error;

pub use bounded::BoundedLog;
pub use config::{AccessConfig, PlatformConfig};
pub use error::{CoreError, CoreResult};

/// Default bound on retained audit entries per service.
pub const DEFAULT_MAX_AUDIT_ENTRIES: usize = 1_000;
