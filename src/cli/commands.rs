//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nota")]
#[command(about = "Personal note store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    Add {
        /// Note title
        title: String,

        /// Note body
        #[arg(default_value = "")]
        content: String,
    },

    /// List all notes
    List,

    /// Show a single note, by id or unique id prefix
    Show {
        /// Note id prefix
        id: String,
    },

    /// Edit a note's title and/or content, by id or unique id prefix
    Edit {
        /// Note id prefix
        id: String,

        /// New title (unchanged if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (unchanged if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note, by id or unique id prefix
    Rm {
        /// Note id prefix
        id: String,
    },

    /// Search notes by title or content (case-insensitive)
    Search {
        /// Text to look for
        query: String,
    },

    /// Run the local web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, default_value_t = 8099)]
        port: u16,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
