use datagrid_lib::error::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Grid(#[from] GridError),

    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}
