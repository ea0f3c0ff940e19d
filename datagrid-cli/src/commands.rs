//! Line commands driving the grid.

use datagrid_lib::edit::EditKey;
use datagrid_lib::edit::EditOutcome;
use datagrid_lib::error::GridError;
use datagrid_lib::extensions::assignee::AssigneeEditor;
use datagrid_lib::extensions::star_rating::StarRatingEditor;
use datagrid_lib::model::RowId;
use datagrid_lib::model::Value;
use log::debug;

use crate::demo::Demo;
use crate::error::CliError;

pub const HELP: &str = "\
Commands:
  sort <field>         activate a column header (asc, desc, off)
  edit <row> <field>   open an edit on a cell
  type <text>          replace the draft
  enter                commit the draft
  esc                  discard the draft
  blur                 leave the cell (discards the draft)
  set <json>           save a value from a custom editor
  show                 print the grid
  help                 print this help
  quit                 exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sort(String),
    Edit { row: RowId, field: String },
    Type(String),
    Enter,
    Escape,
    Blur,
    Set(serde_json::Value),
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match name {
            "sort" if !rest.is_empty() => Command::Sort(rest.to_string()),
            "sort" => return Err(CliError::Usage("sort <field>")),
            "edit" => {
                let (row, field) = rest
                    .split_once(' ')
                    .ok_or(CliError::Usage("edit <row> <field>"))?;
                Command::Edit {
                    row: parse_row_id(row),
                    field: field.trim().to_string(),
                }
            }
            "type" => Command::Type(rest.to_string()),
            "enter" => Command::Enter,
            "esc" | "escape" => Command::Escape,
            "blur" => Command::Blur,
            "set" => Command::Set(serde_json::from_str(rest)?),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_row_id(text: &str) -> RowId {
    text.parse::<i64>()
        .map(RowId::Int)
        .unwrap_or_else(|_| RowId::Text(text.to_string()))
}

/// Runs a command. Returns a message for the user, if any.
pub fn execute(demo: &mut Demo, command: Command) -> Result<Option<String>, CliError> {
    debug!("Executing {:?}", command);
    let message = match command {
        Command::Sort(field) => {
            let sort = demo.grid_mut().activate_header(&field)?;
            Some(match sort {
                Some(sort) => format!("Sorted by {} ({:?})", sort.field, sort.direction),
                None => "Sorting cleared".to_string(),
            })
        }
        Command::Edit { row, field } => {
            demo.grid_mut().begin_edit(&row, &field)?;
            None
        }
        Command::Type(text) => {
            demo.grid_mut().set_draft(text)?;
            None
        }
        Command::Enter => Some(describe(demo.grid_mut().handle_key(EditKey::Enter)?)),
        Command::Escape => Some(describe(demo.grid_mut().handle_key(EditKey::Escape)?)),
        Command::Blur => Some(describe(demo.grid_mut().blur()?)),
        Command::Set(json) => {
            let value = editor_value(demo, json)?;
            Some(describe(demo.grid_mut().save_value(value)?))
        }
        Command::Show => None,
        Command::Help => Some(HELP.to_string()),
        Command::Quit => None,
    };
    demo.sync()?;
    Ok(message)
}

/// Turns `set` input into the value the open custom editor would save.
///
/// Assignee editors take a list of user ids, rating editors a star count.
fn editor_value(demo: &Demo, json: serde_json::Value) -> Result<Value, CliError> {
    let session = demo
        .grid()
        .active_edit()
        .ok_or(GridError::NoActiveEdit)?;
    let value = match session.key().field.as_str() {
        "assignee" => {
            let ids: Vec<RowId> = json
                .as_array()
                .map(|items| items.iter().filter_map(RowId::from_json).collect())
                .unwrap_or_default();
            AssigneeEditor::new(demo.people().to_vec()).selection(&ids)
        }
        "rating" => {
            let stars = json.as_u64().unwrap_or(0);
            StarRatingEditor::default().rate(u32::try_from(stars).unwrap_or(u32::MAX))
        }
        _ => Value::from(json),
    };
    Ok(value)
}

fn describe(outcome: EditOutcome) -> String {
    match outcome {
        EditOutcome::Committed {
            row_id,
            field,
            value,
        } => format!("Saved {}.{} = {}", row_id, field, value),
        EditOutcome::Rejected => "Invalid value".to_string(),
        EditOutcome::Cancelled => "Edit cancelled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use datagrid_lib::config::GridConfig;

    use super::*;
    use crate::pages;

    fn demo() -> Demo {
        Demo::new(pages::tasks::page(), true, GridConfig::default()).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("sort status").unwrap(), Command::Sort("status".into()));
        assert_eq!(
            Command::parse("edit 3 title").unwrap(),
            Command::Edit {
                row: RowId::Int(3),
                field: "title".into()
            }
        );
        assert_eq!(Command::parse("type hello world").unwrap(), Command::Type("hello world".into()));
        assert_eq!(Command::parse("set [1, 2]").unwrap(), Command::Set(serde_json::json!([1, 2])));
        assert_eq!(Command::parse("esc").unwrap(), Command::Escape);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("sort"), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse("edit 3"), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse("fly"), Err(CliError::UnknownCommand(_))));
    }

    #[test]
    fn test_edit_title_through_owner() {
        let mut demo = demo();
        execute(&mut demo, Command::parse("edit 2 title").unwrap()).unwrap();
        execute(&mut demo, Command::parse("type Design the schema").unwrap()).unwrap();
        let message = execute(&mut demo, Command::Enter).unwrap();

        assert_eq!(message.as_deref(), Some("Saved 2.title = Design the schema"));
        let row = demo.grid().row(&RowId::Int(2)).unwrap();
        assert_eq!(row.get_str("title").unwrap(), Some("Design the schema"));
    }

    #[test]
    fn test_set_assignees() {
        let mut demo = demo();
        execute(&mut demo, Command::parse("edit 12 assignee").unwrap()).unwrap();
        execute(&mut demo, Command::parse("set [2, 8]").unwrap()).unwrap();

        let row = demo.grid().row(&RowId::Int(12)).unwrap();
        assert_eq!(row.get_list("assignee").unwrap().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_rejected_keeps_session() {
        let mut demo = demo();
        execute(&mut demo, Command::parse("edit 1 progress").unwrap()).unwrap();
        execute(&mut demo, Command::parse("type 500").unwrap()).unwrap();
        let message = execute(&mut demo, Command::Enter).unwrap();

        assert_eq!(message.as_deref(), Some("Invalid value"));
        assert!(demo.grid().active_edit().is_some());
    }
}
