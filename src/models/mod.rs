// Core data structures shared by the parser, the algorithms and the API.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// A university student record. Identity is the `name` field: every map and
/// set in the crate is keyed by name, never by reference identity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Student {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub year: i32,
    pub major: String,
    pub gpa: f64,
    /// Preferred roommates, most preferred first (insertion order = rank).
    #[serde(default)]
    pub roommate_preferences: Vec<String>,
    /// Internship employers held by this student.
    #[serde(default)]
    pub internships: Vec<String>,
}

impl Student {
    pub fn has_internship(&self, company: &str) -> bool {
        self.internships.iter().any(|i| i == company)
    }
}

/// The roommate relation produced by the matcher: an external name -> name
/// mapping owned by the result, not mutual references inside `Student`.
///
/// Once a matching run completes the relation is symmetric:
/// `partner_of(a) == Some(b)` implies `partner_of(b) == Some(a)`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Matching {
    partners: HashMap<String, String>,
}

impl Matching {
    pub fn new() -> Self {
        Matching { partners: HashMap::new() }
    }

    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.partners.get(name).map(|s| s.as_str())
    }

    pub fn are_partners(&self, a: &str, b: &str) -> bool {
        self.partner_of(a) == Some(b) && self.partner_of(b) == Some(a)
    }

    /// Records `a` and `b` as each other's partner.
    pub fn pair(&mut self, a: &str, b: &str) {
        self.partners.insert(a.to_string(), b.to_string());
        self.partners.insert(b.to_string(), a.to_string());
    }

    /// Removes `name`'s side of the relation, returning its former partner.
    /// Mid-algorithm this is only done for the student currently being
    /// displaced; the caller immediately re-pairs the other side.
    pub fn unpair(&mut self, name: &str) -> Option<String> {
        self.partners.remove(name)
    }

    /// Number of students that currently have a partner.
    pub fn matched_count(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// All pairs exactly once, sorted by the lexicographically smaller member.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .partners
            .iter()
            .filter(|(a, b)| a.as_str() < b.as_str())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        out.sort();
        out
    }
}

/// Validation errors raised by the loader and the algorithms. These are all
/// local input problems, never transient conditions; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampusError {
    /// The same student name appeared twice in the population.
    DuplicateStudent(String),
    /// A referral start (or chat participant) names nobody in the population.
    UnknownStudent(String),
    /// Pod capacity must be at least 1.
    InvalidPodCapacity(usize),
    /// A roster line could not be parsed.
    MalformedRecord { line: usize, detail: String },
}

impl fmt::Display for CampusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampusError::DuplicateStudent(name) => {
                write!(f, "duplicate student name '{}'", name)
            }
            CampusError::UnknownStudent(name) => {
                write!(f, "unknown student '{}'", name)
            }
            CampusError::InvalidPodCapacity(cap) => {
                write!(f, "invalid pod capacity {} (must be >= 1)", cap)
            }
            CampusError::MalformedRecord { line, detail } => {
                write!(f, "malformed roster record at line {}: {}", line, detail)
            }
        }
    }
}

impl Error for CampusError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_pair_is_symmetric() {
        let mut m = Matching::new();
        m.pair("Alice", "Bob");
        assert!(m.are_partners("Alice", "Bob"));
        assert_eq!(m.partner_of("Bob"), Some("Alice"));
        assert_eq!(m.matched_count(), 2);
    }

    #[test]
    fn matching_pairs_lists_each_pair_once() {
        let mut m = Matching::new();
        m.pair("Carol", "Dan");
        m.pair("Alice", "Bob");
        assert_eq!(
            m.pairs(),
            vec![
                ("Alice".to_string(), "Bob".to_string()),
                ("Carol".to_string(), "Dan".to_string()),
            ]
        );
    }

    #[test]
    fn unpair_removes_one_side_only() {
        let mut m = Matching::new();
        m.pair("Alice", "Bob");
        let old = m.unpair("Alice");
        assert_eq!(old.as_deref(), Some("Bob"));
        // Bob's side still points at Alice until the algorithm re-pairs him.
        assert_eq!(m.partner_of("Bob"), Some("Alice"));
        assert_eq!(m.partner_of("Alice"), None);
    }
}
