//! User management dataset.

use std::cmp::Ordering;

use chrono::Utc;
use datagrid_lib::column::Alignment;
use datagrid_lib::column::Column;
use datagrid_lib::column::ColumnType;
use datagrid_lib::error::CallbackError;
use datagrid_lib::extensions::assignee::AssigneeCell;
use datagrid_lib::extensions::assignee::User;
use datagrid_lib::extensions::assignee::users_to_value;
use datagrid_lib::extensions::date::date_of;
use datagrid_lib::extensions::star_rating::StarRatingCell;
use datagrid_lib::extensions::star_rating::StarRatingEditor;
use datagrid_lib::model::Row;
use datagrid_lib::model::Value;
use datagrid_lib::render::Node;

use super::Page;
use super::by_count;
use super::directed;

const STATUS_ORDER: [&str; 4] = ["Minor", "Adult", "Senior", "Unknown"];

struct UserSeed {
    id: i64,
    last_name: &'static str,
    first_name: Option<&'static str>,
    age: Option<i64>,
    birth_date: &'static str,
    full_name: &'static str,
    rating: i64,
    assignees: &'static [usize],
}

impl UserSeed {
    fn to_row(&self, people: &[User]) -> Row {
        let assignees: Vec<User> = self
            .assignees
            .iter()
            .filter_map(|&i| people.get(i).cloned())
            .collect();
        Row::new(self.id)
            .set("lastName", self.last_name)
            .set("firstName", self.first_name)
            .set("age", self.age)
            .set("birthDate", self.birth_date)
            .set("fullName", self.full_name)
            .set("rating", self.rating)
            .set("assignee", users_to_value(&assignees))
    }
}

const USERS: &[UserSeed] = &[
    UserSeed { id: 8, last_name: "Wayne", first_name: Some("Bruce"), age: Some(31), birth_date: "1980-02-19", full_name: "Bruce Wayne", rating: 5, assignees: &[0, 1, 2] },
    UserSeed { id: 3, last_name: "Allen", first_name: Some("Barry"), age: Some(11), birth_date: "1995-01-20", full_name: "Barry Allen", rating: 4, assignees: &[3, 4] },
    UserSeed { id: 11, last_name: "Clifford", first_name: Some("Ferrara"), age: Some(44), birth_date: "1978-04-19", full_name: "Ferrara Clifford", rating: 3, assignees: &[5] },
    UserSeed { id: 5, last_name: "Kent", first_name: Some("Clark"), age: Some(14), birth_date: "1990-06-18", full_name: "Clark Kent", rating: 5, assignees: &[0, 2, 4, 6] },
    UserSeed { id: 14, last_name: "Targaryen", first_name: Some("Daenerys"), age: None, birth_date: "1992-05-12", full_name: "Daenerys Targaryen", rating: 4, assignees: &[] },
    UserSeed { id: 9, last_name: "Frances", first_name: Some("Rossini"), age: Some(36), birth_date: "1986-07-12", full_name: "Frances Rossini", rating: 2, assignees: &[1, 3] },
    UserSeed { id: 7, last_name: "Lannister", first_name: Some("Jaime"), age: Some(31), birth_date: "1980-06-23", full_name: "Jaime Lannister", rating: 3, assignees: &[7] },
    UserSeed { id: 4, last_name: "Snow", first_name: Some("Jon"), age: Some(14), birth_date: "1990-01-15", full_name: "Jon Snow", rating: 4, assignees: &[0, 1, 2, 3, 4] },
    UserSeed { id: 15, last_name: "Melisandre", first_name: None, age: Some(150), birth_date: "1870-01-01", full_name: "Melisandre", rating: 5, assignees: &[6] },
    UserSeed { id: 2, last_name: "Parker", first_name: Some("Peter"), age: Some(11), birth_date: "1995-05-15", full_name: "Peter Parker", rating: 4, assignees: &[0, 5] },
    UserSeed { id: 13, last_name: "Roxie", first_name: Some("Harvey"), age: Some(65), birth_date: "1957-12-25", full_name: "Roxie Harvey", rating: 1, assignees: &[] },
    UserSeed { id: 10, last_name: "Rogers", first_name: Some("Steve"), age: Some(36), birth_date: "1986-07-04", full_name: "Steve Rogers", rating: 5, assignees: &[2, 7] },
    UserSeed { id: 1, last_name: "Stark", first_name: Some("Arya"), age: Some(11), birth_date: "1995-03-10", full_name: "Arya Stark", rating: 4, assignees: &[1] },
    UserSeed { id: 12, last_name: "Stark", first_name: Some("Tony"), age: Some(44), birth_date: "1978-05-29", full_name: "Tony Stark", rating: 5, assignees: &[3, 4, 5] },
    UserSeed { id: 6, last_name: "Lannister", first_name: Some("Cersei"), age: Some(31), birth_date: "1980-06-23", full_name: "Cersei Lannister", rating: 2, assignees: &[0, 2] },
];

fn people() -> Vec<User> {
    vec![
        User::new(1, "Tony Stark").with_img_url("https://randomuser.me/api/portraits/men/1.jpg"),
        User::new(2, "Steve Rogers").with_img_url("https://randomuser.me/api/portraits/men/2.jpg"),
        User::new(3, "Bruce Banner").with_img_url("https://randomuser.me/api/portraits/men/3.jpg"),
        User::new(4, "Natasha Romanoff").with_img_url("https://randomuser.me/api/portraits/women/4.jpg"),
        User::new(5, "Clint Barton").with_img_url("https://randomuser.me/api/portraits/men/5.jpg"),
        User::new(6, "Thor Odinson"),
        User::new(7, "Peter Parker").with_img_url("https://randomuser.me/api/portraits/men/7.jpg"),
        User::new(8, "Wanda Maximoff").with_img_url("https://randomuser.me/api/portraits/women/8.jpg"),
    ]
}

fn age_of(row: &Row) -> Option<i64> {
    row.get_int("age").ok().flatten()
}

/// Age bracket: `Minor` under 18, `Senior` over 60, `Unknown` without an age.
fn status_of(row: &Row) -> &'static str {
    match age_of(row) {
        None => "Unknown",
        Some(age) if age < 18 => "Minor",
        Some(age) if age > 60 => "Senior",
        Some(_) => "Adult",
    }
}

fn status_rank(row: &Row) -> usize {
    let status = status_of(row);
    STATUS_ORDER.iter().position(|s| *s == status).unwrap_or(STATUS_ORDER.len())
}

fn full_name(row: &Row) -> String {
    row.get_str("fullName").ok().flatten().unwrap_or_default().to_lowercase()
}

/// By age, then by full name. Rows without an age go last when ascending.
fn by_age_then_name(a: &Row, b: &Row, _field: &str, ascending: bool) -> Result<Ordering, CallbackError> {
    let ordering = match (age_of(a), age_of(b)) {
        (None, Some(_)) => return Ok(directed(Ordering::Greater, ascending)),
        (Some(_), None) => return Ok(directed(Ordering::Less, ascending)),
        (None, None) => full_name(a).cmp(&full_name(b)),
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| full_name(a).cmp(&full_name(b))),
    };
    Ok(directed(ordering, ascending))
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").min_width(50).kind(ColumnType::Number).align(Alignment::Left),
        Column::new("firstName", "First name")
            .kind(ColumnType::String)
            .editable(true)
            .value_validator(|value| value.as_str().is_some_and(|s| !s.is_empty())),
        Column::new("lastName", "Last name")
            .kind(ColumnType::String)
            .align(Alignment::Center)
            .editable(true),
        Column::new("age", "Age")
            .kind(ColumnType::Number)
            .min_width(50)
            .editable(true)
            .render_cell(|value, _, column| Node::text_aligned(value.to_string(), column.effective_align()))
            .value_validator(|value| value.is_null() || value.as_f64().is_some_and(|n| n >= 0.0)),
        Column::new("fullName", "Full name")
            .render_cell(|_, row, _| {
                let first = row.get_str("firstName").ok().flatten().unwrap_or_default();
                let last = row.get_str("lastName").ok().flatten().unwrap_or_default();
                let name = Node::text(format!("{} {}", first, last).trim().to_string());
                match age_of(row) {
                    Some(age) if age != 0 => Node::row(vec![name, Node::text(format!("({} years old)", age))]),
                    _ => name,
                }
            })
            .sort_comparator(by_age_then_name),
        Column::new("status", "Status")
            .align(Alignment::Center)
            .value_getter(|row| Ok(Value::from(status_of(row))))
            .sort_comparator(|a, b, _, ascending| Ok(directed(status_rank(a).cmp(&status_rank(b)), ascending)))
            .render_cell(|value, _, column| Node::text_aligned(value.to_string(), column.effective_align())),
        Column::new("assignee", "Assignees")
            .min_width(300)
            .render_cell(AssigneeCell::new(1).renderer())
            .sort_comparator(by_count),
        Column::new("birthDate", "Birth Date")
            .kind(ColumnType::Date)
            .align(Alignment::Right)
            .editable(true)
            .value_validator(|value| value.is_null() || date_of(value).is_some_and(|d| d <= Utc::now().date_naive())),
        Column::new("rating", "Rating")
            .align(Alignment::Center)
            .min_width(180)
            .editable(true)
            .render_cell(StarRatingCell::default().renderer())
            .editable_cell(StarRatingEditor::default())
            .value_validator(|value| value.as_f64().is_some_and(|n| (0.0..=5.0).contains(&n))),
    ]
}

pub fn page() -> Page {
    let people = people();
    Page {
        title: "User Management",
        columns: columns(),
        rows: USERS.iter().map(|seed| seed.to_row(&people)).collect(),
        people,
        touch_field: None,
    }
}
