//! Upload a single local file to an S3-compatible store (Cloudflare R2) and
//! report its public URL.

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod output;
pub mod services;
pub mod utils;

pub use error::{Result, UploadError};
