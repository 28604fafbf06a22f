//! Main module for the index builders

pub mod ahlb;
pub mod books;
pub mod cli;
pub mod crossrefs;
pub mod error;
pub mod jobs;
pub mod keyed;
pub mod lexicon;
pub mod loader;
pub mod references;

pub use error::{Error, Result};
