// Greedy pod formation: seed each pod with the most connected unassigned
// student, then grow along the strongest available edge until capacity.

use std::collections::BTreeSet;

use crate::algorithm::graph::StudentGraph;
use crate::models::CampusError;

/// Partitions every student in the graph into pods of at most `capacity`
/// members. Every student lands in exactly one pod; isolated students become
/// singleton pods and undersized pods are never merged.
///
/// All tie-breaks (seed selection and growth) fall back to name order so the
/// partition is reproducible run to run.
pub fn form_pods(
    graph: &StudentGraph,
    capacity: usize,
) -> Result<Vec<Vec<String>>, CampusError> {
    if capacity == 0 {
        return Err(CampusError::InvalidPodCapacity(capacity));
    }

    // BTreeSet keeps unassigned iteration in name order.
    let mut unassigned: BTreeSet<String> = graph.nodes().into_iter().collect();
    let mut pods: Vec<Vec<String>> = Vec::new();

    while !unassigned.is_empty() {
        let seed = pick_strongest_seed(graph, &unassigned);
        unassigned.remove(&seed);
        let mut pod = vec![seed];

        while pod.len() < capacity {
            match best_unassigned_edge(graph, &pod, &unassigned) {
                Some(candidate) => {
                    unassigned.remove(&candidate);
                    pod.push(candidate);
                }
                // No pod member has an unassigned neighbor left; emit the
                // pod undersized rather than merging.
                None => break,
            }
        }

        pods.push(pod);
    }

    Ok(pods)
}

/// The unassigned student with the greatest total incident edge weight.
/// Name-order iteration plus strict comparison means ties go to the
/// lexicographically smallest name.
fn pick_strongest_seed(graph: &StudentGraph, unassigned: &BTreeSet<String>) -> String {
    let mut best: Option<(&str, i32)> = None;
    for name in unassigned {
        let sum = graph.incident_weight(name);
        if best.is_none() || sum > best.unwrap().1 {
            best = Some((name, sum));
        }
    }
    best.map(|(name, _)| name.to_string()).unwrap_or_default()
}

/// The endpoint of the single maximum-weight edge from any current pod member
/// to an unassigned student. Members are scanned in pod insertion order and
/// each member's neighbors come back strongest-first with name tie-breaks, so
/// strict improvement keeps the choice deterministic.
fn best_unassigned_edge(
    graph: &StudentGraph,
    pod: &[String],
    unassigned: &BTreeSet<String>,
) -> Option<String> {
    let mut best: Option<(String, i32)> = None;
    for member in pod {
        for (neighbor, weight) in graph.neighbors(member) {
            if !unassigned.contains(&neighbor) {
                continue;
            }
            let improves = match &best {
                None => true,
                Some((_, w)) => weight > *w,
            };
            if improves {
                best = Some((neighbor, weight));
            }
        }
    }
    best.map(|(name, _)| name)
}
