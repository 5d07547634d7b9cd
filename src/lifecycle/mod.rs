//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors, plus tracing setup.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorState for OrderLedger {
//!     type Context = LedgerContext;   // optional order store
//! }
//!
//! impl ActorState for Session {
//!     type Context = SessionContext;  // generator, extractor, LedgerClient
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for both actor tasks
//!
//! The session holds a `LedgerClient` in its context, but the dependency graph is acyclic,
//! so channel closure is enough.

pub mod cafe_system;
pub mod tracing;

pub use self::cafe_system::*;
pub use self::tracing::setup_tracing;
