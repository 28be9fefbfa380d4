use crate::services::upload::UploadResult;
use serde_json::json;

/// Text destined for one of the standard streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout(String),
    Stderr(String),
}

impl Output {
    pub fn emit(&self) {
        match self {
            Output::Stdout(text) => println!("{}", text),
            Output::Stderr(text) => eprintln!("{}", text),
        }
    }
}

/// Pretty JSON of the whole result, or just the URL.
pub fn render_success(result: &UploadResult, json: bool) -> serde_json::Result<Output> {
    if json {
        Ok(Output::Stdout(serde_json::to_string_pretty(result)?))
    } else {
        Ok(Output::Stdout(result.url.clone()))
    }
}

/// JSON failures go to stdout so callers parsing stdout always get an object back.
pub fn render_error(message: &str, json: bool) -> Output {
    if json {
        Output::Stdout(json!({ "error": message }).to_string())
    } else {
        Output::Stderr(format!("Error: {}", message))
    }
}
