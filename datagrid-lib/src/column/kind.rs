//! Column type tag and alignment.

use serde::Deserialize;
use serde::Serialize;

/// Declared data type of a column.
///
/// The set is closed on purpose: each variant selects a built-in display,
/// editor codec and default comparator. New behaviour is attached per column
/// through the override callbacks on [`Column`](super::Column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text, compared case-insensitively.
    String,
    /// Numeric values.
    Number,
    /// Calendar dates.
    Date,
    /// Anything else; displayed and edited through generic stringification.
    #[default]
    Default,
}

impl ColumnType {
    /// Alignment used when the column does not set one.
    pub fn default_align(self) -> Alignment {
        match self {
            ColumnType::Number => Alignment::Center,
            _ => Alignment::Left,
        }
    }

    /// Name used in format errors.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Default => "default",
        }
    }
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
