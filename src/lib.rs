//! nota - Personal note store
//!
//! A local note-taking application with swappable storage backends
//! (in-memory or a single JSON file), accessed from the command line
//! or through a small local web server.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod web;

pub use error::NotaError;
