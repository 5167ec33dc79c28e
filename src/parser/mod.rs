// Roster loader for the pipe-delimited student record format:
//
//   name|age|gender|year|major|gpa|pref1,pref2|company1,company2
//
// List fields use "None" (or an empty field) for an empty list. After
// parsing, roommate preferences are filtered down to names that actually
// appear in the roster, so the algorithms downstream only ever see known
// identifiers.

use std::collections::HashSet;
use std::error::Error;
use std::fs;

use crate::models::{CampusError, Student};

/// Number of pipe-separated fields a roster record must have.
const RECORD_FIELDS: usize = 8;

/// Parses a whole roster from text. Blank lines are skipped; any malformed
/// line aborts the load with its line number.
pub fn parse_students_from_str(input: &str) -> Result<Vec<Student>, CampusError> {
    let mut students: Vec<Student> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let student = parse_record(line, idx + 1)?;
        if !seen.insert(student.name.clone()) {
            return Err(CampusError::DuplicateStudent(student.name));
        }
        students.push(student);
    }

    filter_unknown_preferences(&mut students);
    Ok(students)
}

/// File wrapper around [`parse_students_from_str`].
pub fn parse_students_from_file(path: &str) -> Result<Vec<Student>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read roster '{}': {}", path, e))?;
    Ok(parse_students_from_str(&contents)?)
}

fn parse_record(line: &str, line_no: usize) -> Result<Student, CampusError> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < RECORD_FIELDS {
        return Err(CampusError::MalformedRecord {
            line: line_no,
            detail: format!("expected {} fields, found {}", RECORD_FIELDS, parts.len()),
        });
    }

    let numeric = |field: &str, what: &str| -> Result<i32, CampusError> {
        field.parse::<i32>().map_err(|_| CampusError::MalformedRecord {
            line: line_no,
            detail: format!("invalid {} '{}'", what, field),
        })
    };

    let name = parts[0].to_string();
    if name.is_empty() {
        return Err(CampusError::MalformedRecord {
            line: line_no,
            detail: "empty student name".to_string(),
        });
    }
    let age = numeric(parts[1], "age")?;
    let gender = parts[2].to_string();
    let year = numeric(parts[3], "year")?;
    let major = parts[4].to_string();
    let gpa = parts[5]
        .parse::<f64>()
        .map_err(|_| CampusError::MalformedRecord {
            line: line_no,
            detail: format!("invalid gpa '{}'", parts[5]),
        })?;

    Ok(Student {
        name,
        age,
        gender,
        year,
        major,
        gpa,
        roommate_preferences: parse_list(parts[6]),
        internships: parse_list(parts[7]),
    })
}

/// Parses a comma-separated list; "None" or an empty field means empty.
fn parse_list(field: &str) -> Vec<String> {
    if field.is_empty() || field.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    field
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Drops preference entries that don't name anyone in the roster.
fn filter_unknown_preferences(students: &mut [Student]) {
    let known: HashSet<String> = students.iter().map(|s| s.name.clone()).collect();
    for student in students.iter_mut() {
        student
            .roommate_preferences
            .retain(|pref| known.contains(pref));
    }
}
