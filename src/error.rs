use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file: {path}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to load config: {path} - {message}")]
    Config { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
