//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inkling CLI.
#[derive(Parser)]
#[command(name = "inkling")]
#[command(about = "Typing-aware prompt co-pilot")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "INKLING_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the configured qualification policy and print the spans as JSON
    Analyze {
        /// Text to analyze
        text: String,
    },

    /// List Gemini models and show which one would be used
    Models,

    /// Rewrite text once through the Gemini service
    Refine {
        /// Text to rewrite
        text: String,
    },

    /// Drive the whole interaction against an in-memory text field
    Demo {
        /// Text typed into the field
        text: String,

        /// Override the configured debounce delay
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}
