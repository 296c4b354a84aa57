//! The student roster shown by the students screen.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use hostelgrid::{Alignment, Cell, Column, Tone};
use hostelgrid_lib::model::{Row, Value};
use serde::Deserialize;

use crate::error::CliError;

const SAMPLE_ROSTER: &str = include_str!("../data/students.json");

/// One hostel resident.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub avatar: String,
    pub name: String,
    pub student_id: String,
    pub room_no: String,
    pub block: String,
    pub admission_date: NaiveDate,
    pub fee_status: String,
    pub pay_status: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Row for Student {
    fn field(&self, key: &str) -> Option<Value> {
        let value = match key {
            "id" => Value::from(&self.id),
            "avatar" => Value::from(&self.avatar),
            "name" => Value::from(&self.name),
            "studentId" => Value::from(&self.student_id),
            "roomNo" => Value::from(&self.room_no),
            "block" => Value::from(&self.block),
            "admissionDate" => Value::from(self.admission_date),
            "feeStatus" => Value::from(&self.fee_status),
            "payStatus" => Value::from(&self.pay_status),
            "email" => Value::from(self.email.clone()),
            "phone" => Value::from(self.phone.clone()),
            _ => return None,
        };
        Some(value)
    }
}

/// Parse a roster: a JSON array of student objects.
pub fn parse(text: &str, source: &Path) -> Result<Vec<Arc<Student>>, CliError> {
    let students: Vec<Student> =
        serde_json::from_str(text).map_err(|source_err| CliError::Roster {
            path: source.to_path_buf(),
            source: source_err,
        })?;
    Ok(students.into_iter().map(Arc::new).collect())
}

/// Load the roster at `path`, or the bundled sample roster.
pub fn load(path: Option<&Path>) -> Result<Vec<Arc<Student>>, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            parse(&text, path)
        }
        None => parse(SAMPLE_ROSTER, Path::new("<sample roster>")),
    }
}

/// Result count shown under the students table.
pub fn showing_label(visible: usize, total: usize) -> String {
    format!("Showing {} of {} students", visible, total)
}

/// Badge tone for a fee or payment status.
pub fn status_tone(status: &str) -> Tone {
    match status {
        "paid" | "current" => Tone::Success,
        "pending" => Tone::Warning,
        "overdue" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_badge(value: Option<&Value>) -> Cell {
    match value.and_then(Value::as_str) {
        Some(status) => Cell::badge(capitalize(status), status_tone(status)),
        None => Cell::Blank,
    }
}

/// Columns of the students screen.
pub fn columns() -> Vec<Column<Student>> {
    vec![
        Column::new("name", "Student")
            .sortable()
            .render(|_, student: &Student, _| {
                let mut lines = vec![format!("{} {}", student.avatar, student.name)];
                lines.extend(student.email.clone());
                Cell::Lines(lines)
            }),
        Column::new("studentId", "Student ID").sortable(),
        Column::new("roomNo", "Room No/Block").render(|_, student: &Student, _| {
            Cell::lines([student.room_no.as_str(), student.block.as_str()])
        }),
        Column::new("admissionDate", "Admission Date")
            .sortable()
            .render(|value, _, _| match value {
                Some(Value::Date(date)) => Cell::text(date.format("%b %-d, %Y").to_string()),
                _ => Cell::Blank,
            }),
        Column::new("feeStatus", "Fee Status")
            .align(Alignment::Center)
            .render(|value, _, _| status_badge(value)),
        Column::new("payStatus", "Pay Status")
            .align(Alignment::Center)
            .render(|value, _, _| status_badge(value)),
    ]
}

#[cfg(test)]
mod tests {
    use hostelgrid_lib::query::{SortDirective, distinct_values, query};

    use super::*;

    #[test]
    fn test_sample_roster_loads() {
        let students = load(None).unwrap();
        assert_eq!(students.len(), 6);
        assert_eq!(students[0].name, "Arun Kumar");
        assert_eq!(students[5].email, None);
    }

    #[test]
    fn test_row_fields() {
        let students = load(None).unwrap();
        let arun = &students[0];
        assert_eq!(arun.field("roomNo"), Some(Value::from("A101")));
        assert_eq!(
            arun.field("admissionDate"),
            Some(Value::Date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()))
        );
        assert_eq!(students[5].field("email"), Some(Value::Null));
        assert_eq!(arun.field("age"), None);
    }

    #[test]
    fn test_block_options_in_first_seen_order() {
        let students = load(None).unwrap();
        assert_eq!(
            distinct_values(&students, "block"),
            vec![
                Value::from("ADMIN BLOCK"),
                Value::from("SOUTH BLOCK"),
                Value::from("NORTH BLOCK"),
            ]
        );
    }

    #[test]
    fn test_sort_by_admission_date() {
        let students = load(None).unwrap();
        let sorted = query(
            &students,
            &["name"],
            "",
            &[],
            Some(&SortDirective::asc("admissionDate")),
        );
        let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ST003", "ST001", "ST005", "ST006", "ST002", "ST004"]);
    }

    #[test]
    fn test_showing_label_counts_filtered_rows() {
        let students = load(None).unwrap();
        let visible = query(&students, &["name", "studentId", "roomNo"], "a1", &[], None);
        assert_eq!(
            showing_label(visible.len(), students.len()),
            "Showing 1 of 6 students"
        );
    }

    #[test]
    fn test_invalid_roster() {
        let err = parse("{\"name\": 1}", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CliError::Roster { .. }));
    }

    #[test]
    fn test_columns_render() {
        let students = load(None).unwrap();
        let columns = columns();
        let priya = &students[1];

        assert_eq!(
            columns[0].cell(priya, 0),
            Cell::lines(["PS Priya Sharma", "priya.sharma@email.com"])
        );
        assert_eq!(columns[2].cell(priya, 0), Cell::lines(["B205", "SOUTH BLOCK"]));
        assert_eq!(columns[3].cell(priya, 0), Cell::text("Feb 20, 2023"));
        assert_eq!(
            columns[4].cell(priya, 0),
            Cell::badge("Pending", Tone::Warning)
        );
        assert_eq!(
            columns[5].cell(priya, 0),
            Cell::badge("Overdue", Tone::Danger)
        );
    }
}
