use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::LookupError;
use crate::graph::{VertexId, WordGraph};

/// A path through the graph with its total edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Words from source to target, both included.
    pub words: Vec<String>,
    pub cost: f64,
}

impl Path {
    pub fn source(&self) -> &str {
        &self.words[0]
    }

    pub fn target(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.words.len() - 1
    }

    /// Consecutive word pairs, i.e. the edges to highlight when rendering.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

/// Outcome of a single-pair shortest path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PairPath {
    Found(Path),
    /// Source and target are the same word; single-vertex path of cost 0.
    SameWord(Path),
    NotFound { from: String, to: String },
}

impl fmt::Display for PairPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairPath::Found(p) => write!(
                f,
                "Shortest path from \"{}\" to \"{}\" is: {p}, the length is {}",
                p.source(),
                p.target(),
                p.cost
            ),
            PairPath::SameWord(p) => write!(
                f,
                "\"{}\" and \"{}\" are the same word, no path to compute.",
                p.source(),
                p.target()
            ),
            PairPath::NotFound { from, to } => {
                write!(f, "No path from \"{from}\" to \"{to}\"!")
            }
        }
    }
}

/// Shortest paths from one source to every reachable word.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub source: String,
    /// One path per reachable target, in vertex insertion order.
    pub paths: Vec<Path>,
}

impl ShortestPaths {
    pub fn get(&self, target: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.target() == target)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Outcome of a single-source (broadcast) shortest path query.
#[derive(Debug, Clone, PartialEq)]
pub enum AllPaths {
    Reached(ShortestPaths),
    /// No other word is reachable from the source.
    NoPaths { source: String },
}

impl fmt::Display for AllPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllPaths::Reached(sp) => {
                for (i, p) in sp.paths.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{} -> {}: {p} (length {})",
                        sp.source,
                        p.target(),
                        p.cost
                    )?;
                }
                Ok(())
            }
            AllPaths::NoPaths { source } => {
                write!(f, "No path from {source} to other words!")
            }
        }
    }
}

/// Outcome of the word-level shortest path entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum PathQuery {
    /// Neither word was given.
    EmptyInput,
    Pair(PairPath),
    All(AllPaths),
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathQuery::EmptyInput => f.write_str("No words given."),
            PathQuery::Pair(p) => write!(f, "{p}"),
            PathQuery::All(a) => write!(f, "{a}"),
        }
    }
}

/// Min-heap entry: reversed ordering on distance.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    dist: f64,
    vertex: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Distances and predecessor links produced by one Dijkstra run.
struct SearchTree {
    /// `f64::INFINITY` marks an unreached vertex.
    dist: Vec<f64>,
    prev: Vec<Option<VertexId>>,
}

impl SearchTree {
    fn reached(&self, v: VertexId) -> bool {
        self.prev[v as usize].is_some()
    }

    /// Walk predecessor links from `target` back to `source`.
    fn reconstruct(&self, graph: &WordGraph, source: VertexId, target: VertexId) -> Path {
        let mut words = Vec::new();
        let mut current = target;
        loop {
            words.push(graph.word(current).to_string());
            if current == source {
                break;
            }
            match self.prev[current as usize] {
                Some(p) => current = p,
                None => break,
            }
        }
        words.reverse();
        Path {
            words,
            cost: self.dist[target as usize],
        }
    }
}

/// Dijkstra from `source` over edge weights.
///
/// Improved vertices are pushed again instead of decreased in place; stale
/// heap entries are skipped when popped. With `stop_at`, the search ends as
/// soon as that vertex is settled.
fn dijkstra(graph: &WordGraph, source: VertexId, stop_at: Option<VertexId>) -> SearchTree {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source as usize] = 0.0;
    heap.push(Frontier {
        dist: 0.0,
        vertex: source,
    });

    let mut settled_count = 0usize;
    while let Some(Frontier { dist: d, vertex: u }) = heap.pop() {
        if settled[u as usize] {
            continue;
        }
        settled[u as usize] = true;
        settled_count += 1;

        if Some(u) == stop_at {
            break;
        }

        for edge in graph.neighbors_out(u) {
            let v = edge.target as usize;
            let candidate = d + edge.weight;
            if candidate < dist[v] {
                trace!(from = u, to = edge.target, dist = candidate, "relax");
                dist[v] = candidate;
                prev[v] = Some(u);
                heap.push(Frontier {
                    dist: candidate,
                    vertex: edge.target,
                });
            }
        }
    }

    debug!(source, settled = settled_count, "dijkstra finished");
    SearchTree { dist, prev }
}

/// Minimum-weight path between two vertices.
///
/// Returns `None` when `target` is unreachable or either id was not issued
/// by `graph`. `source == target` yields the single-vertex path without
/// searching. Among equal-cost paths, which
/// one is returned is unspecified.
pub fn shortest_path(graph: &WordGraph, source: VertexId, target: VertexId) -> Option<Path> {
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return None;
    }
    if source == target {
        return Some(Path {
            words: vec![graph.word(source).to_string()],
            cost: 0.0,
        });
    }

    let tree = dijkstra(graph, source, Some(target));
    if !tree.reached(target) {
        return None;
    }
    Some(tree.reconstruct(graph, source, target))
}

/// Minimum-weight paths from `source` to every other reachable vertex,
/// in vertex insertion order. Unreachable vertices and the source itself
/// are omitted; an unknown `source` yields no paths.
pub fn shortest_paths_from(graph: &WordGraph, source: VertexId) -> Vec<Path> {
    if !graph.contains_vertex(source) {
        return Vec::new();
    }
    let tree = dijkstra(graph, source, None);
    graph
        .vertex_ids()
        .filter(|&v| v != source && tree.reached(v))
        .map(|v| tree.reconstruct(graph, source, v))
        .collect()
}

/// Pair-mode query by word. If both words are absent the error names both.
pub fn solve_pair(graph: &WordGraph, from: &str, to: &str) -> Result<PairPath, LookupError> {
    let (source, target) = graph.require_pair(from, to)?;

    Ok(match shortest_path(graph, source, target) {
        Some(path) if source == target => PairPath::SameWord(path),
        Some(path) => PairPath::Found(path),
        None => not_found(from, to),
    })
}

fn not_found(from: &str, to: &str) -> PairPath {
    PairPath::NotFound {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Broadcast-mode query by word.
pub fn solve_all(graph: &WordGraph, from: &str) -> Result<AllPaths, LookupError> {
    let source = graph.require(from)?;
    let paths = shortest_paths_from(graph, source);

    if paths.is_empty() {
        return Ok(AllPaths::NoPaths {
            source: from.to_string(),
        });
    }
    Ok(AllPaths::Reached(ShortestPaths {
        source: from.to_string(),
        paths,
    }))
}

/// Word-level entry point: both words → pair mode; only one → broadcast
/// from that word; neither → `EmptyInput`. Empty strings count as absent.
///
/// Missing words are reported like bridge queries: both, else the first
/// missing one.
pub fn calc_shortest_path(
    graph: &WordGraph,
    word1: Option<&str>,
    word2: Option<&str>,
) -> Result<PathQuery, LookupError> {
    let word1 = word1.filter(|w| !w.is_empty());
    let word2 = word2.filter(|w| !w.is_empty());

    Ok(match (word1, word2) {
        (None, None) => PathQuery::EmptyInput,
        (Some(a), Some(b)) => PathQuery::Pair(solve_pair(graph, a, b)?),
        (Some(w), None) | (None, Some(w)) => PathQuery::All(solve_all(graph, w)?),
    })
}
