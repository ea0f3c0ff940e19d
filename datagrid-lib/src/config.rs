//! Grid configuration

use serde::Deserialize;
use serde::Serialize;

/// Grid-wide settings.
///
/// # Example
///
/// ```
/// use datagrid_lib::config::GridConfig;
///
/// let config = GridConfig::default()
///     .with_default_min_width(120)
///     .with_report_format_errors(false);
///
/// assert_eq!(config.default_min_width, 120);
/// assert_eq!(config.date_format, "%Y-%m-%d");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Minimum width for columns that do not set one.
    ///
    /// Default: 200
    pub default_min_width: u32,

    /// Report unparsable values to the observer.
    ///
    /// They become `Null` either way.
    ///
    /// Default: true
    pub report_format_errors: bool,

    /// `chrono` format for date cells and the date editor.
    ///
    /// Default: `%Y-%m-%d`
    pub date_format: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_min_width: 200,
            report_format_errors: true,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl GridConfig {
    /// Creates a new grid config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default minimum column width.
    pub fn with_default_min_width(mut self, width: u32) -> Self {
        self.default_min_width = width;
        self
    }

    /// Enables or disables format error reporting.
    pub fn with_report_format_errors(mut self, report: bool) -> Self {
        self.report_format_errors = report;
        self
    }

    /// Sets the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"defaultMinWidth": 80}"#).unwrap();
        assert_eq!(config.default_min_width, 80);
        assert!(config.report_format_errors);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }
}
