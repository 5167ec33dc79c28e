// Referral path search: Dijkstra over inverted edge costs so that strongly
// connected students are "closer", stopping at the first student holding the
// target internship.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::algorithm::graph::StudentGraph;
use crate::models::{CampusError, Student};

/// Historical cost ceiling: an edge of weight `w` costs `100 - w`. Scores can
/// exceed 100 with enough shared internships, which would make inverted costs
/// negative, so the ceiling is raised to the maximum observed weight when
/// needed instead of being copied blindly.
const BASE_COST_CEILING: i32 = 100;

/// Finds the strongest-connection path from `start` to any student whose
/// internship list contains `internship`.
///
/// Returns the path in start -> target order, a single-element path when
/// `start` itself holds the internship, and an empty path when no holder is
/// reachable ("no path" is a normal outcome, not an error). An unknown
/// `start` is an error, distinct from the empty result.
pub fn find_referral_path(
    graph: &StudentGraph,
    students: &[Student],
    start: &str,
    internship: &str,
) -> Result<Vec<String>, CampusError> {
    if !graph.contains(start) {
        return Err(CampusError::UnknownStudent(start.to_string()));
    }

    let by_name: HashMap<&str, &Student> =
        students.iter().map(|s| (s.name.as_str(), s)).collect();
    let ceiling = BASE_COST_CEILING.max(graph.max_weight());

    let mut distances: HashMap<String, i32> = HashMap::new();
    let mut previous: HashMap<String, String> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();

    // Min-heap keyed by (distance, name); the name component makes frontier
    // pops reproducible when distances tie.
    let mut frontier: BinaryHeap<Reverse<(i32, String)>> = BinaryHeap::new();
    distances.insert(start.to_string(), 0);
    frontier.push(Reverse((0, start.to_string())));

    while let Some(Reverse((dist, current))) = frontier.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        let holds_target = by_name
            .get(current.as_str())
            .is_some_and(|s| s.has_internship(internship));
        if holds_target {
            return Ok(reconstruct_path(&previous, start, &current));
        }

        for (neighbor, weight) in graph.neighbors(&current) {
            if visited.contains(&neighbor) {
                continue;
            }
            let cost = ceiling - weight;
            let candidate = dist + cost;
            let best = distances.get(&neighbor).copied().unwrap_or(i32::MAX);
            if candidate < best {
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    // Frontier drained without reaching a holder.
    Ok(Vec::new())
}

/// Walks the predecessor map back from `target` and reverses into
/// start -> target order.
fn reconstruct_path(
    previous: &HashMap<String, String>,
    start: &str,
    target: &str,
) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != start {
        match previous.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
