//! Utility modules.

/// Log sanitization so response bodies and record values are not logged in full.
pub mod log_sanitizer;
