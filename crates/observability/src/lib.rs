//! Shared tracing/logging setup for panel embedders.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Call once at panel startup; subsequent calls become no-ops, so tests may
/// call it freely.
pub fn init() {
    tracing::init();
}
