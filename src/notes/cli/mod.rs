//! Terminal client for the notes API: session loop and response printing.

pub mod print;
pub mod shell;
