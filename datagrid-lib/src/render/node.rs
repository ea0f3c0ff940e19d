//! Node types for the display tree.

use crate::column::Alignment;
use crate::column::ColumnType;

/// Icons a cell or header can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Editable column marker
    Pencil,
    /// Sortable, not sorted
    SortDefault,
    /// Sorted ascending
    SortAsc,
    /// Sorted descending
    SortDesc,
    /// Filled rating star
    Star,
    /// Empty rating star
    StarEmpty,
}

impl Icon {
    /// Plain-text glyph for text surfaces.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Pencil => "✎",
            Icon::SortDefault => "⇅",
            Icon::SortAsc => "↑",
            Icon::SortDesc => "↓",
            Icon::Star => "★",
            Icon::StarEmpty => "☆",
        }
    }
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A node in the display tree.
///
/// The engine never assumes a rendering technology: renderers produce nodes,
/// and a front end (the CLI table, a terminal UI, a web view) decides how to
/// draw them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, align: Alignment },

    /// Horizontal group
    Row { children: Vec<Node>, align: Alignment },

    /// Vertical group
    Column { children: Vec<Node> },

    /// Text input holding an edit draft
    Input {
        /// Element ID (`<row>:<field>`)
        id: String,
        /// Current draft
        value: String,
        /// Column type, selects the input flavour
        kind: ColumnType,
        align: Alignment,
        /// Validator rejected the last commit attempt
        invalid: bool,
    },

    /// Hyperlink
    Link { url: String, text: String },

    /// Icon glyph
    Icon(Icon),

    /// Content with a hover hint
    Tooltip { content: Box<Node>, hint: String },

    /// User avatar (image or initials)
    Avatar {
        initials: String,
        name: String,
        img_url: Option<String>,
    },

    /// Single or multi select control
    Select {
        options: Vec<SelectOption>,
        selected: Vec<String>,
        multiple: bool,
    },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a left-aligned text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            align: Alignment::Left,
        }
    }

    /// Create a text node with alignment
    pub fn text_aligned(content: impl Into<String>, align: Alignment) -> Self {
        Self::Text {
            content: content.into(),
            align,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            align: Alignment::Left,
        }
    }

    /// Create a row node with alignment
    pub fn row_aligned(children: Vec<Node>, align: Alignment) -> Self {
        Self::Row { children, align }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column { children }
    }

    /// Create a link node
    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            text: text.into(),
        }
    }

    /// Wrap a node with a hover hint
    pub fn tooltip(content: Node, hint: impl Into<String>) -> Self {
        Self::Tooltip {
            content: Box::new(content),
            hint: hint.into(),
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Horizontal alignment of the node, `Left` when it has none.
    pub fn align(&self) -> Alignment {
        match self {
            Self::Text { align, .. } | Self::Row { align, .. } | Self::Input { align, .. } => *align,
            Self::Tooltip { content, .. } => content.align(),
            _ => Alignment::Left,
        }
    }

    /// Get the current value of an input element by ID
    pub fn input_value(&self, target_id: &str) -> Option<&str> {
        match self {
            Self::Input { id, value, .. } if id == target_id => Some(value),
            Self::Row { children, .. } | Self::Column { children } => {
                children.iter().find_map(|c| c.input_value(target_id))
            }
            Self::Tooltip { content, .. } => content.input_value(target_id),
            _ => None,
        }
    }

    /// Collect all hover hints in tree order
    pub fn hints(&self) -> Vec<&str> {
        let mut hints = Vec::new();
        self.collect_hints(&mut hints);
        hints
    }

    fn collect_hints<'a>(&'a self, hints: &mut Vec<&'a str>) {
        match self {
            Self::Tooltip { content, hint } => {
                hints.push(hint);
                content.collect_hints(hints);
            }
            Self::Row { children, .. } | Self::Column { children } => {
                for child in children {
                    child.collect_hints(hints);
                }
            }
            _ => {}
        }
    }

    /// Flatten the node into a single line of text.
    ///
    /// Inputs render as `[draft]`, with a trailing `!` while invalid. Select
    /// controls list their options, marking the selected ones with `*`.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text { content, .. } => content.clone(),
            Self::Row { children, .. } => children
                .iter()
                .map(Node::to_plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Column { children } => children
                .iter()
                .map(Node::to_plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" / "),
            Self::Input { value, invalid, .. } => {
                if *invalid {
                    format!("[{}]!", value)
                } else {
                    format!("[{}]", value)
                }
            }
            Self::Link { text, .. } => text.clone(),
            Self::Icon(icon) => icon.glyph().to_string(),
            Self::Tooltip { content, .. } => content.to_plain_text(),
            Self::Avatar { initials, .. } => format!("({})", initials),
            Self::Select {
                options, selected, ..
            } => options
                .iter()
                .map(|o| {
                    if selected.contains(&o.value) {
                        format!("*{}", o.label)
                    } else {
                        o.label.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}
