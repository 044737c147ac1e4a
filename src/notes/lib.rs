//! # Notes Manager Architecture
//!
//! A small notes backend: validated create/read/update/delete over an
//! in-memory store. The library holds all behavior; the `notes` binary is one
//! client of it, and an HTTP server would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `notes` binary: cli/, args.rs, main.rs)        │
//! │  - Parses session commands, prints responses                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - JSON body → validated input → service call               │
//! │  - Answers with status + JSON body (201, 400, 404, ...)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service (service.rs)                                       │
//! │  - Sole owner of the notes, one lock around every operation │
//! │  - Injects the clock                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a NoteStore                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation (`validation.rs`) sits beside the API layer: it is the only
//! source of rejected input. Lookups of unknown ids are not errors anywhere;
//! they come back as `None` or `false`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and its HTTP-shaped responses
//! - [`service`]: The shared, lock-guarded notes service
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`validation`]: Create/update payload rules
//! - [`model`]: `Note` and the request/validated input types
//! - [`clock`]: Time source injected into the service
//! - [`config`]: Layered configuration
//! - [`logging`]: `tracing` subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
