//! Error types for nota

use thiserror::Error;

/// Main error type for the nota application
#[derive(Debug, Error)]
pub enum NotaError {
    #[error("No note found matching '{0}'")]
    NoteNotFound(String),

    #[error("Note id prefix '{prefix}' is ambiguous: {} matches", .matches.len())]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("Note id prefix cannot be empty")]
    EmptyPrefix,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl NotaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotaError::NoteNotFound(_) => 2,
            NotaError::AmbiguousId { .. } => 3,
            NotaError::EmptyPrefix => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotaError::NoteNotFound(needle) => {
                format!(
                    "No note found matching '{}'\n\n\
                    Suggestions:\n\
                    • Run 'nota list' to see all notes and their ids\n\
                    • Ids are matched by prefix, so any unique leading part works\n\
                    • Prefix matching is case-sensitive (ids are lowercase hex)",
                    needle
                )
            }
            NotaError::AmbiguousId { prefix, matches } => {
                let mut msg = format!(
                    "Note id prefix '{}' matches {} notes:\n",
                    prefix,
                    matches.len()
                );
                for id in matches {
                    msg.push_str(&format!("  {}\n", id));
                }
                msg.push_str("\nUse a longer prefix to pick one of them.");
                msg
            }
            NotaError::EmptyPrefix => {
                "Note id prefix cannot be empty\n\n\
                Suggestions:\n\
                • Pass at least one character of the note id\n\
                • Run 'nota list' to see all notes and their ids"
                    .to_string()
            }
            NotaError::Config(msg) => {
                if msg.contains("storage") {
                    format!(
                        "{}\n\n\
                        Valid storage kinds: json, memory\n\
                        Example: nota config storage json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotaError
pub type Result<T> = std::result::Result<T, NotaError>;
