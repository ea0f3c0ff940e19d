//! Task management dataset.

use chrono::DateTime;
use chrono::Utc;
use datagrid_lib::column::Alignment;
use datagrid_lib::column::Column;
use datagrid_lib::column::ColumnType;
use datagrid_lib::extensions::assignee::AssigneeCell;
use datagrid_lib::extensions::assignee::AssigneeEditor;
use datagrid_lib::extensions::assignee::User;
use datagrid_lib::extensions::assignee::users_to_value;
use datagrid_lib::extensions::date::date_of;
use datagrid_lib::extensions::date::is_overdue;
use datagrid_lib::extensions::date::short_date;
use datagrid_lib::extensions::link::LinkCell;
use datagrid_lib::model::Row;
use datagrid_lib::model::Value;
use datagrid_lib::render::Node;
use datagrid_lib::sort::as_timestamp;

use super::Page;
use super::by_count;
use super::by_order;

const STATUS_ORDER: [&str; 4] = ["To Do", "In Progress", "Blocked", "Done"];
const PRIORITY_ORDER: [&str; 4] = ["Low", "Medium", "High", "Critical"];
const PROGRESS_CELLS: usize = 10;

struct TaskSeed {
    id: i64,
    title: &'static str,
    description: &'static str,
    status: &'static str,
    priority: &'static str,
    due_date: &'static str,
    assignees: &'static [usize],
    tags: &'static [&'static str],
    created_at: &'static str,
    updated_at: &'static str,
    progress: i64,
    story_points: i64,
    documentation: &'static str,
}

impl TaskSeed {
    fn to_row(&self, people: &[User]) -> Row {
        let assignees: Vec<User> = self
            .assignees
            .iter()
            .filter_map(|&i| people.get(i).cloned())
            .collect();
        Row::new(self.id)
            .set("title", self.title)
            .set("description", self.description)
            .set("status", self.status)
            .set("priority", self.priority)
            .set("dueDate", self.due_date)
            .set("assignee", users_to_value(&assignees))
            .set("tags", self.tags.to_vec())
            .set("createdAt", self.created_at)
            .set("updatedAt", self.updated_at)
            .set("progress", self.progress)
            .set("storyPoints", self.story_points)
            .set("documentationLink", self.documentation)
    }
}

const TASKS: &[TaskSeed] = &[
    TaskSeed {
        id: 1,
        title: "Implement user authentication",
        description: "Add login, registration, and password reset functionality",
        status: "In Progress",
        priority: "High",
        due_date: "2023-12-15",
        assignees: &[0, 2],
        tags: &["Frontend", "Security"],
        created_at: "2023-11-20T09:00:00Z",
        updated_at: "2023-11-25T14:30:00Z",
        progress: 60,
        story_points: 8,
        documentation: "https://example.com/docs/auth",
    },
    TaskSeed {
        id: 2,
        title: "Design database schema",
        description: "Create ERD and define relationships between entities",
        status: "Done",
        priority: "High",
        due_date: "2023-11-10",
        assignees: &[1],
        tags: &["Database", "Architecture"],
        created_at: "2023-11-01T10:15:00Z",
        updated_at: "2023-11-10T16:45:00Z",
        progress: 100,
        story_points: 5,
        documentation: "https://example.com/docs/database-schema",
    },
    TaskSeed {
        id: 3,
        title: "Optimize API response time",
        description: "Improve performance of slow endpoints",
        status: "To Do",
        priority: "Medium",
        due_date: "2023-12-20",
        assignees: &[3, 4, 5],
        tags: &["Backend", "Performance"],
        created_at: "2023-11-22T11:30:00Z",
        updated_at: "2023-11-22T11:30:00Z",
        progress: 0,
        story_points: 3,
        documentation: "https://example.com/docs/api-optimization",
    },
    TaskSeed {
        id: 4,
        title: "Fix navigation bug on mobile",
        description: "Menu doesn't close after selection on small screens",
        status: "Blocked",
        priority: "Critical",
        due_date: "2023-11-30",
        assignees: &[0],
        tags: &["Frontend", "Bug", "Mobile"],
        created_at: "2023-11-15T13:45:00Z",
        updated_at: "2023-11-28T09:20:00Z",
        progress: 25,
        story_points: 2,
        documentation: "https://example.com/docs/mobile-nav-bug",
    },
    TaskSeed {
        id: 5,
        title: "Create user dashboard",
        description: "Design and implement main user dashboard with analytics",
        status: "In Progress",
        priority: "Medium",
        due_date: "2023-12-05",
        assignees: &[2, 7],
        tags: &["Frontend", "UI/UX"],
        created_at: "2023-11-10T09:30:00Z",
        updated_at: "2023-11-27T11:15:00Z",
        progress: 75,
        story_points: 13,
        documentation: "https://example.com/docs/user-dashboard",
    },
    TaskSeed {
        id: 6,
        title: "Write API documentation",
        description: "Document all endpoints using Swagger",
        status: "To Do",
        priority: "Low",
        due_date: "2023-12-30",
        assignees: &[6],
        tags: &["Documentation", "API"],
        created_at: "2023-11-25T15:00:00Z",
        updated_at: "2023-11-25T15:00:00Z",
        progress: 0,
        story_points: 3,
        documentation: "https://example.com/docs/api-docs",
    },
    TaskSeed {
        id: 7,
        title: "Implement file upload feature",
        description: "Add ability to upload and manage files",
        status: "In Progress",
        priority: "High",
        due_date: "2023-12-10",
        assignees: &[1, 3],
        tags: &["Backend", "Feature"],
        created_at: "2023-11-18T10:00:00Z",
        updated_at: "2023-11-26T14:20:00Z",
        progress: 40,
        story_points: 8,
        documentation: "https://example.com/docs/file-upload",
    },
    TaskSeed {
        id: 8,
        title: "Set up CI/CD pipeline",
        description: "Configure automated testing and deployment",
        status: "Done",
        priority: "High",
        due_date: "2023-11-15",
        assignees: &[4, 5],
        tags: &["DevOps", "Automation"],
        created_at: "2023-11-05T09:15:00Z",
        updated_at: "2023-11-15T10:30:00Z",
        progress: 100,
        story_points: 5,
        documentation: "https://example.com/docs/cicd",
    },
    TaskSeed {
        id: 9,
        title: "Refactor authentication service",
        description: "Improve code quality and add unit tests",
        status: "To Do",
        priority: "Medium",
        due_date: "2023-12-25",
        assignees: &[0, 2, 6],
        tags: &["Backend", "Refactoring", "Testing"],
        created_at: "2023-11-24T13:30:00Z",
        updated_at: "2023-11-24T13:30:00Z",
        progress: 0,
        story_points: 5,
        documentation: "https://example.com/docs/auth-refactor",
    },
    TaskSeed {
        id: 10,
        title: "Update dependencies",
        description: "Update all packages to latest versions",
        status: "Done",
        priority: "Low",
        due_date: "2023-11-20",
        assignees: &[7],
        tags: &["Maintenance"],
        created_at: "2023-11-15T11:00:00Z",
        updated_at: "2023-11-20T09:45:00Z",
        progress: 100,
        story_points: 2,
        documentation: "https://example.com/docs/dependencies",
    },
    TaskSeed {
        id: 11,
        title: "Create onboarding tutorial",
        description: "Design and implement interactive onboarding for new users",
        status: "In Progress",
        priority: "Medium",
        due_date: "2023-12-15",
        assignees: &[1, 7],
        tags: &["Frontend", "UX"],
        created_at: "2023-11-20T14:15:00Z",
        updated_at: "2023-11-28T10:30:00Z",
        progress: 50,
        story_points: 8,
        documentation: "https://example.com/docs/onboarding",
    },
    TaskSeed {
        id: 12,
        title: "Implement dark mode",
        description: "Add dark theme support across the application",
        status: "To Do",
        priority: "Low",
        due_date: "2023-12-30",
        assignees: &[],
        tags: &["Frontend", "UI"],
        created_at: "2023-11-27T09:00:00Z",
        updated_at: "2023-11-27T09:00:00Z",
        progress: 0,
        story_points: 5,
        documentation: "https://example.com/docs/dark-mode",
    },
];

fn people() -> Vec<User> {
    vec![
        User::new(1, "Alex Johnson").with_img_url("https://randomuser.me/api/portraits/men/32.jpg"),
        User::new(2, "Sarah Miller").with_img_url("https://randomuser.me/api/portraits/women/44.jpg"),
        User::new(3, "David Chen").with_img_url("https://randomuser.me/api/portraits/men/59.jpg"),
        User::new(4, "Emily Wilson").with_img_url("https://randomuser.me/api/portraits/women/17.jpg"),
        User::new(5, "Michael Brown").with_img_url("https://randomuser.me/api/portraits/men/81.jpg"),
        User::new(6, "Jessica Lee"),
        User::new(7, "Robert Taylor").with_img_url("https://randomuser.me/api/portraits/men/22.jpg"),
        User::new(8, "Lisa Garcia").with_img_url("https://randomuser.me/api/portraits/women/28.jpg"),
    ]
}

fn badge(value: &Value) -> Node {
    Node::text_aligned(value.to_string(), Alignment::Center)
}

fn progress_bar(value: &Value) -> Node {
    let progress = value.as_f64().unwrap_or(0.0);
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * PROGRESS_CELLS as f64).round() as usize;
    Node::row(vec![
        Node::text(format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_CELLS - filled))),
        Node::text(format!("{}%", progress)),
    ])
}

fn due_date(value: &Value, row: &Row) -> Node {
    let Some(due) = date_of(value) else {
        return Node::empty();
    };
    let done = row.get_str("status").ok().flatten() == Some("Done");
    if is_overdue(Some(due), done, Utc::now().date_naive()) {
        Node::tooltip(Node::text(format!("{} !", short_date(due))), "Overdue")
    } else {
        Node::text(short_date(due))
    }
}

/// `Today at 02:30 PM`, `Yesterday`, or `Nov 25`.
fn last_updated(value: &Value, now: DateTime<Utc>) -> String {
    let Some(at) = as_timestamp(value) else {
        return String::new();
    };
    match (now - at).num_days().abs() {
        0 => format!("Today at {}", at.format("%I:%M %p")),
        1 => "Yesterday".to_string(),
        _ => at.format("%b %-d").to_string(),
    }
}

fn tags(value: &Value) -> Node {
    let names: Vec<String> = value
        .as_list()
        .unwrap_or_default()
        .iter()
        .map(Value::to_string)
        .collect();
    if names.is_empty() {
        Node::text("No tags")
    } else {
        Node::text(names.join(", "))
    }
}

fn columns(people: &[User]) -> Vec<Column> {
    vec![
        Column::new("id", "ID").min_width(60).kind(ColumnType::Number).align(Alignment::Left),
        Column::new("title", "Task Title")
            .min_width(250)
            .editable(true)
            .render_cell(|value, row, _| {
                let description = row.get_str("description").ok().flatten().unwrap_or_default();
                Node::column(vec![Node::text(value.to_string()), Node::text(description)])
            }),
        Column::new("status", "Status")
            .min_width(120)
            .editable(true)
            .render_cell(|value, _, _| badge(value))
            .sort_comparator(by_order(&STATUS_ORDER)),
        Column::new("priority", "Priority")
            .min_width(100)
            .editable(true)
            .render_cell(|value, _, _| badge(value))
            .sort_comparator(by_order(&PRIORITY_ORDER)),
        Column::new("progress", "Progress")
            .min_width(150)
            .kind(ColumnType::Number)
            .editable(true)
            .render_cell(|value, _, _| progress_bar(value))
            .value_validator(|value| value.as_f64().is_some_and(|n| (0.0..=100.0).contains(&n))),
        Column::new("dueDate", "Due Date")
            .kind(ColumnType::Date)
            .editable(true)
            .render_cell(|value, row, _| due_date(value, row)),
        Column::new("assignee", "Assignees")
            .min_width(200)
            .editable(true)
            .render_cell(AssigneeCell::new(1).renderer())
            .editable_cell(AssigneeEditor::new(people.to_vec()))
            .sort_comparator(by_count),
        Column::new("tags", "Tags")
            .min_width(200)
            .sortable(false)
            .render_cell(|value, _, _| tags(value)),
        Column::new("storyPoints", "Points")
            .min_width(80)
            .kind(ColumnType::Number)
            .align(Alignment::Center)
            .editable(true)
            .value_validator(|value| value.as_f64().is_some_and(|n| n >= 0.0 && n.fract() == 0.0)),
        Column::new("documentationLink", "Documentation").render_cell(
            LinkCell::new()
                .with_last_segment_text()
                .with_tooltip("Open documentation in new tab")
                .renderer("No documentation"),
        ),
        Column::new("updatedAt", "Last Updated")
            .min_width(150)
            .render_cell(|value, _, _| Node::text(last_updated(value, Utc::now()))),
    ]
}

pub fn page() -> Page {
    let people = people();
    Page {
        title: "Task Management",
        columns: columns(&people),
        rows: TASKS.iter().map(|seed| seed.to_row(&people)).collect(),
        people,
        touch_field: Some("updatedAt"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use datagrid_lib::grid::DataGrid;
    use datagrid_lib::model::RowId;

    use super::*;

    fn grid() -> DataGrid {
        let page = page();
        DataGrid::uncontrolled(page.columns, page.rows).unwrap()
    }

    fn first_ids(grid: &DataGrid, n: usize) -> Vec<RowId> {
        grid.render().row_ids().into_iter().take(n).collect()
    }

    #[test]
    fn test_status_sorts_by_workflow() {
        let mut grid = grid();
        grid.activate_header("status").unwrap();
        let view = grid.render();
        let first = view.rows.first().unwrap().cell("status").unwrap();
        let last = view.rows.last().unwrap().cell("status").unwrap();
        assert_eq!(first.node.to_plain_text(), "To Do");
        assert_eq!(last.node.to_plain_text(), "Done");
    }

    #[test]
    fn test_priority_descending_starts_critical() {
        let mut grid = grid();
        grid.activate_header("priority").unwrap();
        grid.activate_header("priority").unwrap();
        assert_eq!(first_ids(&grid, 1), vec![RowId::Int(4)]);
    }

    #[test]
    fn test_assignees_sort_by_count() {
        let mut grid = grid();
        grid.activate_header("assignee").unwrap();
        assert_eq!(first_ids(&grid, 1), vec![RowId::Int(12)]);
    }

    #[test]
    fn test_progress_rejects_out_of_range() {
        let mut grid = grid();
        grid.begin_edit(&RowId::Int(1), "progress").unwrap();
        grid.set_draft("101").unwrap();
        assert!(grid.commit_edit().is_ok());
        assert!(grid.active_edit().unwrap().is_invalid());
    }

    #[test]
    fn test_story_points_must_be_whole() {
        let mut grid = grid();
        grid.begin_edit(&RowId::Int(1), "storyPoints").unwrap();
        grid.set_draft("2.5").unwrap();
        grid.commit_edit().unwrap();
        assert!(grid.active_edit().unwrap().is_invalid());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(&Value::from(60)).to_plain_text(), "██████░░░░ 60%");
        assert_eq!(progress_bar(&Value::Null).to_plain_text(), "░░░░░░░░░░ 0%");
    }

    #[test]
    fn test_last_updated() {
        let now = Utc.with_ymd_and_hms(2023, 11, 26, 18, 0, 0).unwrap();
        assert_eq!(last_updated(&Value::from("2023-11-26T14:30:00Z"), now), "Today at 02:30 PM");
        assert_eq!(last_updated(&Value::from("2023-11-25T14:30:00Z"), now), "Yesterday");
        assert_eq!(last_updated(&Value::from("2023-11-10T16:45:00Z"), now), "Nov 10");
    }

    #[test]
    fn test_documentation_link_text() {
        let grid = grid();
        let view = grid.render();
        let cell = view.rows[0].cell("documentationLink").unwrap();
        assert_eq!(cell.node.to_plain_text(), "auth");
    }
}
