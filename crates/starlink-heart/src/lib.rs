//! Public surface for the Starlink Heart safety and offline core.
//!
//! This crate re-exports the safety filter and offline cache worker and
//! provides a small initialization helper to keep host setup consistent.

/// Re-export for convenience.
pub use starlink_heart_offline as offline;
/// Re-export for convenience.
pub use starlink_heart_safety as safety;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Hosts are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
