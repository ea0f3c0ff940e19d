//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use datagrid_lib::config::GridConfig;

use crate::error::CliError;
use crate::pages;
use crate::pages::Page;

/// Drive a data grid from the terminal
#[derive(Parser, Debug)]
#[command(name = "datagrid", version, about = "Sort and edit a demo data grid from the terminal")]
pub struct CliArgs {
    /// Dataset to load
    #[arg(value_enum, default_value_t = PageKind::Tasks)]
    pub page: PageKind,

    /// Let the grid keep and edit its own copy of the rows
    #[arg(short, long)]
    pub uncontrolled: bool,

    /// Grid configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "FILE", default_value = "datagrid.log")]
    pub log_file: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Task management
    Tasks,
    /// User management
    Users,
}

impl PageKind {
    pub fn load(self) -> Page {
        match self {
            PageKind::Tasks => pages::tasks::page(),
            PageKind::Users => pages::users::page(),
        }
    }
}

impl CliArgs {
    /// Reads the grid configuration, or the defaults when none was given.
    pub fn grid_config(&self) -> Result<GridConfig, CliError> {
        let Some(path) = &self.config else {
            return Ok(GridConfig::default());
        };
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["datagrid"]);
        assert_eq!(args.page, PageKind::Tasks);
        assert!(!args.uncontrolled);
        assert_eq!(args.grid_config().unwrap(), GridConfig::default());
    }

    #[test]
    fn test_users_uncontrolled() {
        let args = CliArgs::parse_from(["datagrid", "users", "--uncontrolled"]);
        assert_eq!(args.page, PageKind::Users);
        assert!(args.uncontrolled);
    }
}
