use crate::constants::exit_codes;
use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Local read or remote fetch of a config, data file or template failed.
    #[error("Cannot fetch '{source_path}': {e}")]
    SourceFetchError { source_path: String, e: String },

    #[error("HTTP request failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Cannot parse '{source_path}'. Original error: {e}")]
    YamlParseError { source_path: String, e: serde_yaml::Error },

    #[error("Cannot parse template '{name}'. Original error: {e}")]
    TemplateParseError { name: String, e: minijinja::Error },

    #[error("Cannot execute template '{name}'. Original error: {e}")]
    TemplateExecutionError { name: String, e: minijinja::Error },

    /// Directory creation, file creation or write failure for a generated file.
    #[error("Cannot write output '{path}'. Original error: {e}")]
    OutputError { path: String, e: std::io::Error },

    #[error("Cannot add autogenerated header comment: unknown comment sign for '{extension}' file extension")]
    UnknownExtensionError { extension: String },

    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Wraps a failure with the directive and template it happened in.
    #[error("Cannot render template {from_to}: {e}")]
    RenderError { from_to: String, e: Box<Error> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with our Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message, followed by its source chain, to stderr and exits
/// with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(exit_codes::FAILURE);
}
