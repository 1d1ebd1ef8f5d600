use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to read input: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Download failed: {url}")]
    DownloadError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid detector pattern for category '{category}': {source}")]
    InvalidPattern {
        category: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("No URLs with recognized extensions found in input")]
    NoUrlsFound,
}

pub type Result<T> = std::result::Result<T, AuditError>;
