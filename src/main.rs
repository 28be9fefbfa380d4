use clap::Parser;
use sam_upload_file::cli::{HELP_TEXT, UploadOptions};
use sam_upload_file::config::{EnvSource, StorageConfig};
use sam_upload_file::infrastructure::storage;
use sam_upload_file::output::{self, Output};
use sam_upload_file::services::upload::{UploadResult, upload_file};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the URL or JSON result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sam_upload_file=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = match UploadOptions::try_parse() {
        Ok(options) => options,
        Err(e) => {
            if let Err(io) = e.print() {
                debug!("Could not print usage error: {}", io);
            }
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        println!("{}", HELP_TEXT);
        return ExitCode::SUCCESS;
    }

    if options.file_path().is_none() {
        eprintln!("Error: --file is required");
        return ExitCode::FAILURE;
    }

    match run(&options).await {
        Ok(result) => match output::render_success(&result, options.json) {
            Ok(out) => {
                out.emit();
                ExitCode::SUCCESS
            }
            Err(e) => {
                Output::Stderr(format!("Error: {}", e)).emit();
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            debug!("Upload failed: {:#}", e);
            output::render_error(&e.to_string(), options.json).emit();
            ExitCode::FAILURE
        }
    }
}

async fn run(options: &UploadOptions) -> anyhow::Result<UploadResult> {
    let env = EnvSource::load();
    let config = StorageConfig::from_env(&env, options.bucket_override())?;
    debug!(?config, "Loaded storage config");

    let store = storage::setup_storage(&config).await;
    let result = upload_file(options, &config, store.as_ref()).await?;
    Ok(result)
}
