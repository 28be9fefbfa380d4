use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

/// Printed for `--help`; also lists the variables the uploader reads.
pub const HELP_TEXT: &str = "
sam-upload-file: Upload files to Cloudflare R2

Usage:
  sam-upload-file --file /path/to/file.png [options]

Options:
  --file <path>    Local file path (required)
  --key <name>     Custom object key (default: auto-generated)
  --bucket <name>  Override bucket name
  --json           Output as JSON
  --help           Show this help message

Environment Variables (in ~/.baoyu-skills/.env):
  R2_ACCESS_KEY_ID      Your R2 access key ID
  R2_SECRET_ACCESS_KEY  Your R2 secret access key
  R2_ENDPOINT           R2 endpoint URL
  R2_BUCKET             Default bucket name
  R2_PUBLIC_URL         Public URL prefix for uploaded files
";

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "sam-upload-file",
    about = "Upload files to Cloudflare R2",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct UploadOptions {
    /// Local file path (required). Kept raw so an empty value reaches the
    /// required-file check instead of failing to parse.
    #[arg(long, value_name = "path", value_parser = clap::value_parser!(OsString))]
    pub file: Option<OsString>,

    /// Custom object key (default: auto-generated)
    #[arg(long, value_name = "name")]
    pub key: Option<String>,

    /// Override bucket name
    #[arg(long, value_name = "name")]
    pub bucket: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show this help message
    #[arg(long)]
    pub help: bool,
}

impl UploadOptions {
    /// `--file`, treating an empty value as absent.
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }

    pub fn bucket_override(&self) -> Option<&str> {
        self.bucket.as_deref().filter(|b| !b.is_empty())
    }
}
