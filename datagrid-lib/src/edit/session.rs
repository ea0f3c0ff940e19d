//! Edit session state machine.
//!
//! ```text
//! Viewing --begin--> Editing --commit (accepted)--> Saving ----> Viewing
//!                       |  ^                                       ^
//!                       |  +--commit (rejected): invalid           |
//!                       +-----cancel / blur / escape--> Cancelling-+
//! ```
//!
//! The grid owns at most one session. "Viewing" is the absence of one;
//! `Saving` and `Cancelling` are the last phase a session reaches before
//! the grid drops it.

use log::debug;

use super::codec;
use crate::column::Column;
use crate::config::GridConfig;
use crate::error::CellError;
use crate::model::RowId;
use crate::model::Value;
use crate::observe::GridObserver;

/// Address of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_id: RowId,
    pub field: String,
}

impl CellKey {
    pub fn new(row_id: RowId, field: impl Into<String>) -> Self {
        Self {
            row_id,
            field: field.into(),
        }
    }

    /// Element id of the cell's input (`<row>:<field>`).
    pub fn element_id(&self) -> String {
        format!("{}:{}", self.row_id, self.field)
    }
}

/// Lifecycle phase of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Viewing,
    Editing,
    Saving,
    Cancelling,
}

/// Who drives the edit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Built-in input with the column type's codec and validator.
    Default,
    /// The column's custom editor; it commits values itself.
    Delegated,
}

/// Keyboard signals the default input understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the draft.
    Enter,
    /// Discard the draft.
    Escape,
}

/// Result of a commit or cancel request.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The value was written back.
    Committed {
        row_id: RowId,
        field: String,
        value: Value,
    },
    /// The validator rejected the draft; the session stays open and invalid.
    Rejected,
    /// The draft was discarded.
    Cancelled,
}

/// Decision of [`EditSession::commit`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommitDecision {
    Accepted(Value),
    Rejected,
}

/// One in-progress cell edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    key: CellKey,
    editor: EditorKind,
    draft: String,
    invalid: bool,
    phase: EditPhase,
}

impl EditSession {
    /// Opens a session on a cell whose resolved value is `current`.
    ///
    /// Default-pipeline cells start with the formatted value as draft. A
    /// value the column type cannot format starts an empty draft and is
    /// reported as a format error when `config.report_format_errors` is set.
    pub fn open(
        row_id: RowId,
        column: &Column,
        current: &Value,
        config: &GridConfig,
        observer: &dyn GridObserver,
    ) -> Self {
        let key = CellKey::new(row_id, &column.field);
        let (editor, draft) = if column.editable_cell.is_some() {
            (EditorKind::Delegated, String::new())
        } else {
            let draft = codec::format(column.kind, current, &config.date_format)
                .unwrap_or_else(|err| {
                    if config.report_format_errors {
                        observer.on_cell_error(&err.in_field(&column.field));
                    }
                    String::new()
                });
            (EditorKind::Default, draft)
        };

        debug!("Editing {} ({:?} editor)", key.element_id(), editor);
        Self {
            key,
            editor,
            draft,
            invalid: false,
            phase: EditPhase::Editing,
        }
    }

    pub fn key(&self) -> &CellKey {
        &self.key
    }

    pub fn editor(&self) -> EditorKind {
        self.editor
    }

    pub fn is_delegated(&self) -> bool {
        self.editor == EditorKind::Delegated
    }

    /// The current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the last commit attempt was rejected.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Returns `true` if this session edits the given cell.
    pub fn is_for(&self, row_id: &RowId, field: &str) -> bool {
        &self.key.row_id == row_id && self.key.field == field
    }

    /// Replaces the draft.
    ///
    /// An invalid session turns valid again as soon as the new draft is
    /// accepted by the validator. A draft is never marked invalid here; only
    /// a commit attempt can do that.
    pub fn set_draft(&mut self, draft: impl Into<String>, column: &Column, config: &GridConfig) {
        self.draft = draft.into();
        if self.invalid {
            let parsed = codec::parse(column.kind, &self.draft, &config.date_format)
                .unwrap_or(Value::Null);
            if is_accepted(column, &parsed) {
                self.invalid = false;
            }
        }
    }

    /// Attempts to leave `Editing` through `Saving`.
    ///
    /// The draft is parsed under the column type; unparsable text becomes
    /// [`Value::Null`] and is reported. The validator then sees the parsed
    /// value. On rejection the session stays in `Editing`, marked invalid.
    pub fn commit(
        &mut self,
        column: &Column,
        config: &GridConfig,
        observer: &dyn GridObserver,
    ) -> CommitDecision {
        let parsed = codec::parse(column.kind, &self.draft, &config.date_format)
            .unwrap_or_else(|err| {
                if config.report_format_errors {
                    observer.on_cell_error(&err.in_field(&column.field));
                }
                Value::Null
            });

        if !is_accepted(column, &parsed) {
            self.invalid = true;
            observer.on_cell_error(&CellError::validation(
                self.key.row_id.clone(),
                &self.key.field,
            ));
            return CommitDecision::Rejected;
        }

        self.phase = EditPhase::Saving;
        CommitDecision::Accepted(parsed)
    }

    /// Marks a value supplied by a custom editor as being saved.
    pub fn accept(&mut self) {
        self.phase = EditPhase::Saving;
    }

    /// Leaves `Editing` through `Cancelling`.
    pub fn cancel(&mut self) {
        debug!("Cancelled edit of {}", self.key.element_id());
        self.phase = EditPhase::Cancelling;
    }
}

fn is_accepted(column: &Column, value: &Value) -> bool {
    column
        .value_validator
        .as_ref()
        .is_none_or(|validator| validator(value))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;

    use super::*;
    use crate::column::ColumnType;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<CellError>>);

    impl GridObserver for Recorder {
        fn on_cell_error(&self, error: &CellError) {
            self.0.lock().unwrap().push(error.clone());
        }
    }

    fn progress() -> Column {
        Column::new("progress", "Progress")
            .kind(ColumnType::Number)
            .editable(true)
            .value_validator(|v| v.as_f64().is_some_and(|n| (0.0..=100.0).contains(&n)))
    }

    #[test]
    fn test_open_formats_draft() {
        let column = Column::new("dueDate", "Due").kind(ColumnType::Date).editable(true);
        let due = Value::from(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        let session = EditSession::open(RowId::Int(1), &column, &due, &GridConfig::default(), &Recorder::default());

        assert_eq!(session.draft(), "2023-12-15");
        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.editor(), EditorKind::Default);
    }

    #[test]
    fn test_open_unformattable_date_reports() {
        let recorder = Recorder::default();
        let column = Column::new("dueDate", "Due").kind(ColumnType::Date).editable(true);
        let session = EditSession::open(RowId::Int(1), &column, &Value::from("soon"), &GridConfig::default(), &recorder);

        assert_eq!(session.draft(), "");
        assert!(matches!(&recorder.0.lock().unwrap()[0], CellError::Format { field, .. } if field == "dueDate"));
    }

    #[test]
    fn test_open_unformattable_date_silent_when_disabled() {
        let recorder = Recorder::default();
        let config = GridConfig::default().with_report_format_errors(false);
        let column = Column::new("dueDate", "Due").kind(ColumnType::Date).editable(true);
        EditSession::open(RowId::Int(1), &column, &Value::from("soon"), &config, &recorder);

        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_commit_stays_editing() {
        let config = GridConfig::default();
        let column = progress();
        let mut session = EditSession::open(RowId::Int(1), &column, &Value::from(60), &config, &Recorder::default());

        session.set_draft("150", &column, &config);
        assert_eq!(session.commit(&column, &config, &Recorder::default()), CommitDecision::Rejected);
        assert!(session.is_invalid());
        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.draft(), "150");
    }

    #[test]
    fn test_invalid_clears_on_accepted_draft() {
        let config = GridConfig::default();
        let column = progress();
        let mut session = EditSession::open(RowId::Int(1), &column, &Value::from(60), &config, &Recorder::default());

        session.set_draft("-5", &column, &config);
        session.commit(&column, &config, &Recorder::default());
        session.set_draft("101", &column, &config);
        assert!(session.is_invalid());
        session.set_draft("75", &column, &config);
        assert!(!session.is_invalid());
    }

    #[test]
    fn test_accepted_commit_parses() {
        let config = GridConfig::default();
        let column = progress();
        let mut session = EditSession::open(RowId::Int(1), &column, &Value::from(60), &config, &Recorder::default());

        session.set_draft("72.5", &column, &config);
        assert_eq!(
            session.commit(&column, &config, &Recorder::default()),
            CommitDecision::Accepted(Value::Float(72.5))
        );
        assert_eq!(session.phase(), EditPhase::Saving);
    }

    #[test]
    fn test_unparsable_draft_becomes_null() {
        let recorder = Recorder::default();
        let config = GridConfig::default();
        let column = Column::new("age", "Age").kind(ColumnType::Number).editable(true);
        let mut session = EditSession::open(RowId::Int(1), &column, &Value::from(30), &config, &recorder);

        session.set_draft("thirty", &column, &config);
        assert_eq!(session.commit(&column, &config, &recorder), CommitDecision::Accepted(Value::Null));
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_cancel_phase() {
        let column = progress();
        let mut session = EditSession::open(RowId::Int(1), &column, &Value::from(60), &GridConfig::default(), &Recorder::default());
        session.cancel();
        assert_eq!(session.phase(), EditPhase::Cancelling);
    }
}
