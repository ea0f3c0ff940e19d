//! Assignee lists: users with avatars.

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::edit::CellEditor;
use crate::edit::EditorParams;
use crate::model::Row;
use crate::model::RowId;
use crate::model::Value;
use crate::render::Node;
use crate::render::SelectOption;

/// Placeholder for an empty assignee list.
pub const NO_ASSIGNEES: &str = "No assignees";

/// A user that can be assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RowId,
    pub name: String,
    #[serde(rename = "imgURL", default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

impl User {
    pub fn new(id: impl Into<RowId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img_url: None,
        }
    }

    /// Sets the avatar image URL.
    pub fn with_img_url(mut self, url: impl Into<String>) -> Self {
        self.img_url = Some(url.into());
        self
    }

    /// First letters of the first and last name, upper-cased.
    ///
    /// ```
    /// use datagrid_lib::extensions::assignee::User;
    ///
    /// assert_eq!(User::new(1, "Alex Johnson").initials(), "AJ");
    /// assert_eq!(User::new(2, "Melisandre").initials(), "M");
    /// assert_eq!(User::new(3, "Mary Jane Watson").initials(), "MW");
    /// ```
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.name.split(' ').filter(|p| !p.is_empty()).collect();
        let first_char = |s: &str| s.chars().next().map(|c| c.to_uppercase().collect::<String>());
        match parts.as_slice() {
            [] => String::new(),
            [only] => first_char(*only).unwrap_or_default(),
            [first, .., last] => {
                first_char(*first).unwrap_or_default() + &first_char(*last).unwrap_or_default()
            }
        }
    }

    /// Reads a user from a nested record value.
    pub fn from_value(value: &Value) -> Option<Self> {
        let row = value.as_record()?;
        let name = row.get_str("name").ok().flatten()?;
        let img_url = row.get_str("imgURL").ok().flatten().map(str::to_string);
        Some(Self {
            id: row.id().clone(),
            name: name.to_string(),
            img_url,
        })
    }

    /// Converts into a nested record value.
    pub fn to_value(&self) -> Value {
        let row = Row::new(self.id.clone()).set("name", self.name.as_str());
        match &self.img_url {
            Some(url) => Value::from(row.set("imgURL", url.as_str())),
            None => Value::from(row),
        }
    }

    fn avatar(&self) -> Node {
        Node::Avatar {
            initials: self.initials(),
            name: self.name.clone(),
            img_url: self.img_url.clone(),
        }
    }
}

/// Reads the users of a cell. `Null` and non-user items are skipped.
pub fn users_from_value(value: &Value) -> Vec<User> {
    match value {
        Value::List(items) => items.iter().filter_map(User::from_value).collect(),
        other => User::from_value(other).into_iter().collect(),
    }
}

/// Converts users into a list value.
pub fn users_to_value(users: &[User]) -> Value {
    Value::List(users.iter().map(User::to_value).collect())
}

/// Compact display of an assignee list.
///
/// The first `compact_limit` users show avatar and name; the rest collapse
/// into a `+N` badge whose hint lists their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssigneeCell {
    pub compact_limit: usize,
}

impl Default for AssigneeCell {
    fn default() -> Self {
        Self { compact_limit: 1 }
    }
}

impl AssigneeCell {
    pub fn new(compact_limit: usize) -> Self {
        Self { compact_limit }
    }

    pub fn render(&self, users: &[User]) -> Node {
        if users.is_empty() {
            return Node::text(NO_ASSIGNEES);
        }

        let shown = users.len().min(self.compact_limit);
        let mut children: Vec<Node> = users[..shown]
            .iter()
            .map(|user| Node::row(vec![user.avatar(), Node::text(user.name.clone())]))
            .collect();

        let remaining = &users[shown..];
        if !remaining.is_empty() {
            let names: Vec<&str> = remaining.iter().map(|u| u.name.as_str()).collect();
            children.push(Node::tooltip(
                Node::text(format!("+{}", remaining.len())),
                names.join(", "),
            ));
        }
        Node::row(children)
    }

    /// Adapts the cell for [`Column::render_cell`].
    pub fn renderer(self) -> impl Fn(&Value, &Row, &Column) -> Node + Send + Sync + 'static {
        move |value, _, _| self.render(&users_from_value(value))
    }
}

/// Select-based editor for assignee columns.
///
/// The surface lists every available user and marks the current ones. The
/// front end reports the picked ids back through [`AssigneeEditor::selection`]
/// and [`DataGrid::save_value`](crate::grid::DataGrid::save_value). The saved
/// value is always a list, even in single-select mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AssigneeEditor {
    available: Vec<User>,
    single_select: bool,
}

impl AssigneeEditor {
    pub fn new(available: Vec<User>) -> Self {
        Self {
            available,
            single_select: false,
        }
    }

    /// Allows one user only.
    pub fn single_select(mut self, single: bool) -> Self {
        self.single_select = single;
        self
    }

    pub fn available(&self) -> &[User] {
        &self.available
    }

    /// Builds the value to save for the picked user ids.
    ///
    /// Unknown ids are ignored. Single-select mode keeps the first pick.
    pub fn selection(&self, ids: &[RowId]) -> Value {
        let mut picked: Vec<User> = ids
            .iter()
            .filter_map(|id| self.available.iter().find(|u| &u.id == id).cloned())
            .collect();
        if self.single_select {
            picked.truncate(1);
        }
        users_to_value(&picked)
    }
}

impl CellEditor for AssigneeEditor {
    fn render(&self, params: EditorParams<'_>) -> Node {
        let mut selected: Vec<String> = users_from_value(params.value)
            .iter()
            .map(|u| u.id.to_string())
            .collect();
        if self.single_select {
            selected.truncate(1);
        }
        Node::Select {
            options: self
                .available
                .iter()
                .map(|u| SelectOption::new(u.id.to_string(), u.name.clone()))
                .collect(),
            selected,
            multiple: !self.single_select,
        }
    }
}
