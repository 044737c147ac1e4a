use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(version, about = "Minimal notes manager over an in-memory store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a configuration file (defaults to notes.toml in the config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default). Notes live until it ends.
    Shell,

    /// Run session commands from a file, one per line
    Run {
        /// Script path; blank lines and lines starting with `#` are skipped
        script: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Print a commented template of every setting instead
        #[arg(long)]
        template: bool,
    },
}

/// One command typed inside a session.
#[derive(Parser, Debug)]
#[command(name = "notes", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Create a note
    #[command(alias = "n")]
    Create {
        /// Title of the note (at most 100 characters)
        title: String,

        /// Content of the note
        content: String,
    },

    /// List all notes, newest first
    #[command(alias = "ls")]
    List,

    /// Show one note
    #[command(alias = "v")]
    Get {
        /// Note id
        id: String,
    },

    /// Change the title and/or content of a note
    #[command(alias = "e")]
    Update {
        /// Note id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note id
        id: String,
    },

    /// Report service health
    Health,

    /// End the session
    #[command(alias = "quit")]
    Exit,
}
