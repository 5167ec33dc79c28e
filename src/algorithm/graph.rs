// Weighted undirected student graph built with petgraph, with a name ->
// NodeIndex map for lookups by student name.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::models::{CampusError, Student};

/// Pair counts below this are scored on the calling thread; the split
/// overhead is not worth it for small rosters.
const PARALLEL_PAIR_THRESHOLD: usize = 2048;

/// Snapshot of the population's connection graph. An edge exists between two
/// students only when their strength score is strictly positive, with one
/// symmetric weight per unordered pair. The graph never updates itself after
/// construction; rebuild it if matching state or attributes change.
#[derive(Debug, Clone)]
pub struct StudentGraph {
    graph: UnGraph<String, i32>,
    index: HashMap<String, NodeIndex>,
}

impl StudentGraph {
    /// Builds the graph by scoring every unordered pair with `strength`.
    /// Duplicate student names are rejected, never silently overwritten.
    pub fn build<F>(students: &[Student], strength: F) -> Result<StudentGraph, CampusError>
    where
        F: Fn(&Student, &Student) -> i32 + Sync,
    {
        let mut graph = UnGraph::<String, i32>::new_undirected();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();

        for s in students {
            if index.contains_key(&s.name) {
                return Err(CampusError::DuplicateStudent(s.name.clone()));
            }
            let idx = graph.add_node(s.name.clone());
            index.insert(s.name.clone(), idx);
        }

        let n = students.len();
        let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(n.saturating_sub(1) * n / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
            }
        }

        // Pair scoring is independent per pair, so it can be split across
        // workers; edge insertion stays sequential and in pair order, which
        // keeps the result identical to the serial build.
        let weights = score_pairs(students, &pairs, &strength);

        for (&(i, j), w) in pairs.iter().zip(weights) {
            if w > 0 {
                let a = index[&students[i].name];
                let b = index[&students[j].name];
                graph.add_edge(a, b, w);
            }
        }

        Ok(StudentGraph { graph, index })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All student names in the graph, sorted so iteration is reproducible.
    pub fn nodes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Neighbors of `name` as `(neighbor, weight)`, strongest first (ties by
    /// name). An unknown name yields an empty list, not an error.
    pub fn neighbors(&self, name: &str) -> Vec<(String, i32)> {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => return Vec::new(),
        };
        let mut out: Vec<(String, i32)> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (self.graph[other].clone(), *e.weight())
            })
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    /// The edge weight between two students, if an edge exists.
    pub fn weight_between(&self, a: &str, b: &str) -> Option<i32> {
        let (&ia, &ib) = (self.index.get(a)?, self.index.get(b)?);
        self.graph
            .find_edge(ia, ib)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Total weight of all edges incident to `name`; 0 for isolated or
    /// unknown students.
    pub fn incident_weight(&self, name: &str) -> i32 {
        self.neighbors(name).iter().map(|(_, w)| w).sum()
    }

    /// The largest edge weight in the graph, or 0 when there are no edges.
    pub fn max_weight(&self) -> i32 {
        self.graph.edge_weights().copied().max().unwrap_or(0)
    }
}

/// Scores every pair, splitting the work across workers for large rosters.
fn score_pairs<F>(students: &[Student], pairs: &[(usize, usize)], strength: &F) -> Vec<i32>
where
    F: Fn(&Student, &Student) -> i32 + Sync,
{
    let workers = num_cpus::get();
    if pairs.len() < PARALLEL_PAIR_THRESHOLD || workers <= 1 {
        return pairs
            .iter()
            .map(|&(i, j)| strength(&students[i], &students[j]))
            .collect();
    }

    let chunk_size = pairs.len().div_ceil(workers);
    let mut weights = Vec::with_capacity(pairs.len());
    std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&(i, j)| strength(&students[i], &students[j]))
                        .collect::<Vec<i32>>()
                })
            })
            .collect();
        for handle in handles {
            // A worker can only panic if `strength` itself panics.
            weights.extend(handle.join().expect("pair scoring worker panicked"));
        }
    });
    weights
}
