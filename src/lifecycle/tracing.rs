//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. The module path is hidden (`with_target(false)`); actor lines carry an
//! `actor` field instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Turn-level logs
//! RUST_LOG=info cargo run
//!
//! # Full actions, tool calls and extracted entries
//! RUST_LOG=debug cargo run
//!
//! # Only the reasoning backend
//! RUST_LOG=cafe_assistant::reasoning=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` per actor
//! - **Actions**: `Action ok` / `Action failed`, with the action itself at debug level
//! - **Conversation**: reply failures, tool rounds, extracted orders
//! - **Adapters**: store, speech and menu ingestion failures (logged, never fatal)
//!
//! With `RUST_LOG=info` a two-turn order looks like:
//!
//! ```text
//! INFO Actor started actor="OrderLedger"
//! INFO Actor started actor="Session"
//! INFO Action ok actor="Session"
//! INFO extract: Order extracted customer="Sam" total=4.50
//! INFO Action ok actor="OrderLedger"
//! INFO Order placed orders=1 customer=Sam
//! INFO Action ok actor="Session"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
