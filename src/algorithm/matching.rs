// Deferred-acceptance roommate assignment.
//
// This is a single-population proposal heuristic, not a verified solution to
// the stable-roommates problem: for mutually inconsistent preference sets it
// simply terminates with some students unmatched instead of detecting
// unsolvability. That behavior is intentional and must be preserved.

use std::collections::{HashMap, VecDeque};

use crate::models::{CampusError, Matching, Student};

/// Assigns roommates by deferred acceptance over each student's ordered
/// preference list and returns a fresh, symmetric `Matching`.
///
/// Each proposal permanently consumes one preference slot or permanently
/// retires a student, so the total number of proposals is bounded by the sum
/// of preference-list lengths and the loop always halts.
pub fn assign_roommates(students: &[Student]) -> Result<Matching, CampusError> {
    let mut by_name: HashMap<&str, &Student> = HashMap::new();
    for s in students {
        if by_name.insert(s.name.as_str(), s).is_some() {
            return Err(CampusError::DuplicateStudent(s.name.clone()));
        }
    }

    // Relation starts empty each run.
    let mut matching = Matching::new();

    // FIFO queue of free students that still have preferences to try.
    let mut free: VecDeque<&str> = students
        .iter()
        .filter(|s| !s.roommate_preferences.is_empty())
        .map(|s| s.name.as_str())
        .collect();

    // Next rank each student will propose to.
    let mut next_proposal: HashMap<&str, usize> =
        students.iter().map(|s| (s.name.as_str(), 0)).collect();

    while let Some(proposer_name) = free.pop_front() {
        // Already paired students can appear in the queue after a reciprocal
        // acceptance; drop them instead of letting them propose again.
        if matching.partner_of(proposer_name).is_some() {
            continue;
        }

        let proposer = by_name[proposer_name];
        let cursor = next_proposal[proposer_name];
        if cursor >= proposer.roommate_preferences.len() {
            // Preferences exhausted; this student stays unmatched for good.
            continue;
        }

        let target_name = proposer.roommate_preferences[cursor].as_str();
        *next_proposal.get_mut(proposer_name).unwrap() = cursor + 1;

        // Stale preference entries (validated upstream, but never trusted
        // here) are skipped; the proposer stays free and tries its next rank.
        let target = match by_name.get(target_name) {
            Some(&t) => t,
            None => {
                free.push_back(proposer_name);
                continue;
            }
        };

        match matching.partner_of(&target.name) {
            None => {
                matching.pair(proposer_name, &target.name);
            }
            Some(current_name) => {
                let current_name = current_name.to_string();
                if prefers(target, proposer_name, &current_name) {
                    // The displaced student goes back to the free queue and
                    // resumes from its next preference rank.
                    matching.unpair(&current_name);
                    matching.pair(proposer_name, &target.name);
                    free.push_back(by_name[current_name.as_str()].name.as_str());
                } else {
                    free.push_back(proposer_name);
                }
            }
        }
    }

    Ok(matching)
}

/// True when `candidate` appears strictly earlier than `current` in the
/// acceptor's preference list. A candidate absent from the list never wins.
fn prefers(acceptor: &Student, candidate: &str, current: &str) -> bool {
    let rank_of = |name: &str| {
        acceptor
            .roommate_preferences
            .iter()
            .position(|p| p == name)
    };
    match (rank_of(candidate), rank_of(current)) {
        (Some(c), Some(cur)) => c < cur,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
