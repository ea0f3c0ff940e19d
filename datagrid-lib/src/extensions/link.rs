//! Hyperlink cells.

use crate::column::Column;
use crate::model::Row;
use crate::model::Value;
use crate::render::Node;

/// Display of a URL as a link.
///
/// # Example
///
/// ```
/// use datagrid_lib::extensions::link::LinkCell;
///
/// let node = LinkCell::new()
///     .with_tooltip("Open documentation in new tab")
///     .render("https://example.com/docs/auth");
/// assert_eq!(node.to_plain_text(), "https://example.com/docs/auth");
/// assert_eq!(node.hints(), vec!["Open documentation in new tab"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkCell {
    text: Option<String>,
    tooltip: Option<String>,
    last_segment_text: bool,
}

impl LinkCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed link text. Defaults to the URL.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Hover hint.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Uses the last path segment of the URL as text.
    pub fn with_last_segment_text(mut self) -> Self {
        self.last_segment_text = true;
        self
    }

    pub fn render(&self, href: &str) -> Node {
        let text = match &self.text {
            Some(text) => text.clone(),
            None if self.last_segment_text => last_segment(href).to_string(),
            None => href.to_string(),
        };
        let link = Node::link(href, text);
        match &self.tooltip {
            Some(hint) => Node::tooltip(link, hint.clone()),
            None => link,
        }
    }

    /// Adapts the cell for [`Column::render_cell`]. Empty values render
    /// `placeholder`.
    pub fn renderer(
        self,
        placeholder: impl Into<String>,
    ) -> impl Fn(&Value, &Row, &Column) -> Node + Send + Sync + 'static {
        let placeholder = placeholder.into();
        move |value, _, _| match value {
            Value::Null => Node::text(placeholder.clone()),
            Value::String(s) if s.is_empty() => Node::text(placeholder.clone()),
            other => self.render(&other.to_string()),
        }
    }
}

fn last_segment(href: &str) -> &str {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(href)
}
