//! CLI definitions for tabfix.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tabfix CLI.
#[derive(Parser)]
#[command(name = "tabfix")]
#[command(about = "Reversible one-shot class fixes for the active browser tab")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.tabfix/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Remote debugging endpoint of the browser
    #[arg(short, long, global = true, env = "TABFIX_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List available tools
    Tools,

    /// Apply a tool to the active tab
    Run {
        /// Tool id (default: the active tool)
        #[arg(long)]
        tool: Option<String>,
    },

    /// Undo the last apply of a tool
    Undo {
        /// Tool id (default: the active tool)
        #[arg(long)]
        tool: Option<String>,
    },

    /// Fire a shortcut command
    Shortcut {
        /// Command identifier, e.g. trigger-update
        command: String,
    },

    /// Show or set the active tool
    Active {
        /// Tool id to make active
        tool: Option<String>,
    },

    /// Show whether undo data is stored
    Status {
        /// Tool id (default: the active tool)
        #[arg(long)]
        tool: Option<String>,
    },

    /// Dispatch one raw JSON message and print the reply
    Send {
        /// Message, e.g. '{"action":"getTools"}'
        message: String,
    },
}
