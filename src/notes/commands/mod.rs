//! # Command Layer
//!
//! One module per note operation. Each command is a plain function over a
//! [`NoteStore`](crate::store::NoteStore): it takes regular Rust arguments and
//! returns regular Rust types. Commands never lock, log or read the clock; the
//! caller hands in `now`, which keeps them deterministic under test.
//!
//! "Not found" is an ordinary outcome here (`None` or `false`), never an error.
//! The only errors a command returns come from the store itself.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
