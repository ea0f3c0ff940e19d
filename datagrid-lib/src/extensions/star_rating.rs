//! Star ratings.

use crate::column::Alignment;
use crate::column::Column;
use crate::edit::CellEditor;
use crate::edit::EditorParams;
use crate::model::Row;
use crate::model::Value;
use crate::render::Icon;
use crate::render::Node;

/// Call to action under the rating editor.
pub const RATE_HINT: &str = "Click to rate";

fn stars(rating: f64, max: u32) -> Node {
    let icons = (1..=max)
        .map(|star| {
            if rating >= f64::from(star) {
                Node::Icon(Icon::Star)
            } else {
                Node::Icon(Icon::StarEmpty)
            }
        })
        .collect::<Vec<_>>();
    let glyphs: String = icons.iter().map(Node::to_plain_text).collect();
    Node::text_aligned(glyphs, Alignment::Center)
}

fn rating_of(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// Display of a rating as stars plus `(n/max)`.
///
/// # Example
///
/// ```
/// use datagrid_lib::extensions::star_rating::StarRatingCell;
/// use datagrid_lib::model::Value;
///
/// let node = StarRatingCell::default().render(&Value::from(4));
/// assert_eq!(node.to_plain_text(), "★★★★☆ (4/5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRatingCell {
    pub max: u32,
}

impl Default for StarRatingCell {
    fn default() -> Self {
        Self { max: 5 }
    }
}

impl StarRatingCell {
    pub fn render(&self, value: &Value) -> Node {
        let label = match value {
            Value::Null => "0".to_string(),
            other => other.to_string(),
        };
        Node::row_aligned(
            vec![
                stars(rating_of(value), self.max),
                Node::text(format!("({}/{})", label, self.max)),
            ],
            Alignment::Center,
        )
    }

    /// Adapts the cell for [`Column::render_cell`].
    pub fn renderer(self) -> impl Fn(&Value, &Row, &Column) -> Node + Send + Sync + 'static {
        move |value, _, _| self.render(value)
    }
}

/// Star picker for rating columns.
///
/// Picking a star saves right away; the front end converts the pick with
/// [`StarRatingEditor::rate`] and hands it to
/// [`DataGrid::save_value`](crate::grid::DataGrid::save_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRatingEditor {
    pub max: u32,
}

impl Default for StarRatingEditor {
    fn default() -> Self {
        Self { max: 5 }
    }
}

impl StarRatingEditor {
    /// Value saved for a pick, clamped to `0..=max`.
    pub fn rate(&self, stars: u32) -> Value {
        Value::Int(i64::from(stars.min(self.max)))
    }
}

impl CellEditor for StarRatingEditor {
    fn render(&self, params: EditorParams<'_>) -> Node {
        Node::column(vec![
            stars(rating_of(params.value), self.max),
            Node::text_aligned(RATE_HINT, Alignment::Center),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_rating_shows_zero() {
        let node = StarRatingCell::default().render(&Value::Null);
        assert_eq!(node.to_plain_text(), "☆☆☆☆☆ (0/5)");
    }

    #[test]
    fn test_editor_surface() {
        let row = Row::new(1);
        let column = Column::new("rating", "Rating");
        let node = StarRatingEditor::default().render(EditorParams {
            value: &Value::from(2),
            row: &row,
            column: &column,
        });
        assert_eq!(node.to_plain_text(), "★★☆☆☆ / Click to rate");
    }

    #[test]
    fn test_rate_clamps() {
        assert_eq!(StarRatingEditor::default().rate(9), Value::Int(5));
    }
}
