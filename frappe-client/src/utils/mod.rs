//! Utility modules.

/// Date/time deserialization helpers for backend timestamps.
pub mod datetime;
