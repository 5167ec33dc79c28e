// Connection strength scoring. The graph builder takes any
// `Fn(&Student, &Student) -> i32`, so scoring policy is injected rather than
// baked into the graph or a type hierarchy.

use crate::models::{Matching, Student};

/// Bonus when the pair are each other's assigned roommate.
pub const ROOMMATE_BONUS: i32 = 4;
/// Bonus per internship employer the pair have in common.
pub const SHARED_INTERNSHIP_BONUS: i32 = 3;
/// Bonus for an identical major.
pub const SAME_MAJOR_BONUS: i32 = 2;
/// Bonus for an identical age.
pub const SAME_AGE_BONUS: i32 = 1;

/// Points contributed by internships both students have held.
pub fn shared_internships(a: &Student, b: &Student) -> i32 {
    let shared = a
        .internships
        .iter()
        .filter(|company| b.has_internship(company))
        .count();
    shared as i32 * SHARED_INTERNSHIP_BONUS
}

/// The default scoring policy: roommates +4, +3 per shared internship,
/// same major +2, same age +1.
///
/// The roommate bonus depends on matching state, so the caller decides which
/// `Matching` snapshot (if any) the graph is built against. Rebuilding the
/// graph after a matching run is an explicit step, never implicit.
pub fn default_strength<'a>(
    matching: Option<&'a Matching>,
) -> impl Fn(&Student, &Student) -> i32 + Sync + 'a {
    move |a: &Student, b: &Student| {
        let mut score = 0;
        if let Some(m) = matching {
            if m.are_partners(&a.name, &b.name) {
                score += ROOMMATE_BONUS;
            }
        }
        score += shared_internships(a, b);
        if a.major == b.major {
            score += SAME_MAJOR_BONUS;
        }
        if a.age == b.age {
            score += SAME_AGE_BONUS;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, age: i32, major: &str, internships: &[&str]) -> Student {
        Student {
            name: name.to_string(),
            age,
            gender: "F".to_string(),
            year: 2,
            major: major.to_string(),
            gpa: 3.5,
            roommate_preferences: vec![],
            internships: internships.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn scores_accumulate_per_attribute() {
        let a = student("Alice", 20, "CS", &["Google", "Netflix"]);
        let b = student("Bob", 20, "CS", &["Google"]);
        let strength = default_strength(None);
        // shared internship (+3) + same major (+2) + same age (+1)
        assert_eq!(strength(&a, &b), 6);
    }

    #[test]
    fn each_shared_internship_counts() {
        let a = student("Alice", 20, "CS", &["Google", "Netflix"]);
        let b = student("Bob", 22, "Math", &["Google", "Netflix"]);
        assert_eq!(shared_internships(&a, &b), 6);
    }

    #[test]
    fn roommate_bonus_requires_matching_snapshot() {
        let a = student("Alice", 20, "CS", &[]);
        let b = student("Bob", 21, "Math", &[]);
        let without = default_strength(None);
        assert_eq!(without(&a, &b), 0);

        let mut m = Matching::new();
        m.pair("Alice", "Bob");
        let with = default_strength(Some(&m));
        assert_eq!(with(&a, &b), ROOMMATE_BONUS);
    }

    #[test]
    fn unrelated_students_score_zero() {
        let a = student("Alice", 20, "CS", &["Google"]);
        let b = student("Bob", 25, "Math", &["Netflix"]);
        let strength = default_strength(None);
        assert_eq!(strength(&a, &b), 0);
    }
}
