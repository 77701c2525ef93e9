//! Remote record API implementations

/// Shared utilities used by transport implementations.
pub mod common;

mod dnspod;

pub use dnspod::DnspodTransport;
