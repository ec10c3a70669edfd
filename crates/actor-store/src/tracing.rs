//! # Observability
//!
//! Tracing setup shared by every binary and integration test in the
//! workspace.
//!
//! The actor loop logs structured fields (`entity_type`, document ids,
//! collection size) at `info`, and full request payloads at `debug` via the
//! `?field` recorder. Client wrappers add `#[instrument]` spans, so a single
//! request reads as a hierarchy: client span, then the actor's log lines.
//!
//! Level selection is `RUST_LOG`-driven:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact workflow logs
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=actor_store=debug cargo run   # just the framework
//! ```

/// Initialize the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // Module paths add noise; the actor loop already tags entity_type.
        .with_target(false)
        .compact()
        .init();
}
