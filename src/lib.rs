//! # Café Assistant
//!
//! > **A spoken-style ordering assistant for a café counter.**
//!
//! The assistant holds a free-form conversation with a customer, notices when the order is
//! complete ("... to go, please"), turns the whole conversation into a structured
//! [`OrderEntry`](model::OrderEntry) and records it in an order ledger. Replies can be
//! rendered as speech.
//!
//! ## Core Concepts
//!
//! ### One actor per piece of state
//! The conversation and the ledger each live inside a [`StateActor`](framework::StateActor)
//! running in its own Tokio task. Requests are processed one at a time, so a reply or an
//! extraction owns the conversation for its whole duration without a lock.
//!
//! ### Lenient extraction
//! The reasoning collaborator is asked for five labeled lines but never trusted to produce
//! them. [`parse_order_summary`](dialogue::extractor::parse_order_summary) keeps whatever
//! fields it can read and defaults the rest.
//!
//! ### No fatal errors in the conversation
//! A failed reply becomes a fixed apology and leaves the conversation untouched; a failed
//! extraction becomes an empty entry. Only channel failures surface as errors.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic [`StateActor`](framework::StateActor), [`StateClient`](framework::StateClient)
//! and the [`mock`](framework::mock) test helpers.
//!
//! ### 2. The Conversation ([`dialogue`], [`tools`], [`model`])
//! Completion gate, reply generation with menu tools, order extraction, and the plain data
//! types they work on.
//!
//! ### 3. The Actors ([`session_actor`], [`ledger_actor`]) and their [`clients`]
//! The session owns the conversation and the active menu; the ledger owns finalized orders.
//!
//! ### 4. The Collaborators ([`reasoning`], [`speech`], [`store`], [`ingest`])
//! Everything that leaves the process sits behind a trait.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CafeSystem`](lifecycle::CafeSystem) wires it all together from a
//! [`CafeConfig`](config::CafeConfig).
//!
//! ## Quick Start
//!
//! ```bash
//! # Talk to the assistant without a model endpoint
//! RUST_LOG=info cargo run -- --offline --menu menu.txt
//!
//! # Against an OpenAI-compatible endpoint
//! OPENAI_API_KEY=sk-... cargo run -- --menu menu.txt
//! ```

pub mod clients;
pub mod config;
pub mod dialogue;
pub mod framework;
pub mod ingest;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod reasoning;
pub mod session_actor;
pub mod speech;
pub mod store;
pub mod tools;
