//! Tracing and logging (shared setup).
//!
//! Domain crates only emit events through the `tracing` facade; binaries and
//! tests that want to see them call [`init`] once at startup:
//!
//! ```no_run
//! roster_observability::init();
//!
//! // With RUST_LOG=debug this logs the rejected field and reason as JSON.
//! let _ = roster_people::Person::new("", 1990);
//! ```

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
