use std::collections::HashMap;

use tracing::debug;

use crate::error::LookupError;
use crate::tokenize::tokenize;

/// Dense vertex identifier, assigned in insertion order.
pub type VertexId = u32;

/// Identifier of a directed edge, unique for the lifetime of the graph.
pub type EdgeId = u32;

/// A weighted directed edge in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub target: VertexId,
    /// Number of times the target word immediately follows the source word.
    pub weight: f64,
}

/// Read-only view of one edge, resolved to words. Used by renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: f64,
}

/// In-memory word-adjacency graph: interned words + weighted out-edges.
///
/// Vertices are interned once and addressed by dense `VertexId`s, so
/// adjacency lives in a `Vec` indexed by vertex rather than a map.
/// There is at most one edge per ordered pair; repeated adjacency
/// increments the existing edge's weight.
///
/// Queries take `&WordGraph` and never mutate it, so a built graph can
/// be shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<String>,
    word_index: HashMap<String, VertexId>,
    outgoing: Vec<Vec<Edge>>,
    /// (source, target) → position of the edge in `outgoing[source]`.
    edge_index: HashMap<(VertexId, VertexId), usize>,
    edge_count: usize,
}

impl WordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a token sequence.
    ///
    /// Each adjacent pair `(t[i], t[i+1])` adds 1.0 to the weight of the
    /// edge `t[i] → t[i+1]`, creating it on first occurrence. A single
    /// token yields one vertex and no edges; no tokens yield an empty graph.
    /// Empty tokens are skipped, so they never become vertices.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        let mut prev: Option<VertexId> = None;

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            let current = graph.add_vertex(token);
            if let Some(p) = prev {
                graph.add_occurrence(p, current);
            }
            prev = Some(current);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }

    /// Tokenize `text` and build a graph from the result.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Intern a word, returning its id. Idempotent.
    fn add_vertex(&mut self, word: &str) -> VertexId {
        if let Some(&id) = self.word_index.get(word) {
            return id;
        }
        let id = self.words.len() as VertexId;
        self.words.push(word.to_string());
        self.word_index.insert(word.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Record one adjacency `from → to`: create the edge with weight 1.0,
    /// or add 1.0 to the existing edge. Both ids must come from `add_vertex`.
    fn add_occurrence(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        if let Some(&pos) = self.edge_index.get(&(from, to)) {
            let edge = &mut self.outgoing[from as usize][pos];
            edge.weight += 1.0;
            return edge.id;
        }

        let id = self.edge_count as EdgeId;
        let adj = &mut self.outgoing[from as usize];
        self.edge_index.insert((from, to), adj.len());
        adj.push(Edge {
            id,
            target: to,
            weight: 1.0,
        });
        self.edge_count += 1;
        id
    }

    /// Look up a word's vertex id.
    pub fn vertex_id(&self, word: &str) -> Option<VertexId> {
        self.word_index.get(word).copied()
    }

    /// Resolve a word, reporting it as missing if absent.
    pub fn require(&self, word: &str) -> Result<VertexId, LookupError> {
        self.vertex_id(word)
            .ok_or_else(|| LookupError::Missing(word.to_string()))
    }

    /// Resolve two words. If both are absent, the error names both;
    /// otherwise it names whichever one is missing (first word checked first).
    pub fn require_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(VertexId, VertexId), LookupError> {
        match (self.vertex_id(first), self.vertex_id(second)) {
            (Some(a), Some(b)) => Ok((a, b)),
            (None, None) => Err(LookupError::MissingBoth(
                first.to_string(),
                second.to_string(),
            )),
            (None, Some(_)) => Err(LookupError::Missing(first.to_string())),
            (Some(_), None) => Err(LookupError::Missing(second.to_string())),
        }
    }

    /// Whether `id` was issued by this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        (id as usize) < self.words.len()
    }

    /// The word stored at a vertex. Panics on an id not issued by this graph.
    pub fn word(&self, id: VertexId) -> &str {
        &self.words[id as usize]
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Outgoing edges of a vertex, in edge-creation order.
    pub fn neighbors_out(&self, id: VertexId) -> &[Edge] {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn out_degree(&self, id: VertexId) -> usize {
        self.neighbors_out(id).len()
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edge_index
            .get(&(from, to))
            .map(|&pos| &self.outgoing[from as usize][pos])
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_index.contains_key(&(from, to))
    }

    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.edge(from, to).map(|e| e.weight)
    }

    /// Edge weight looked up by words. `None` if either word or the edge is absent.
    pub fn word_edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.vertex_id(from)?;
        let to = self.vertex_id(to)?;
        self.edge_weight(from, to)
    }

    /// All vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        0..self.words.len() as VertexId
    }

    /// All words in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All edges, grouped by source vertex in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.outgoing.iter().enumerate().flat_map(move |(src, adj)| {
            adj.iter().map(move |e| EdgeView {
                source: &self.words[src],
                target: &self.words[e.target as usize],
                weight: e.weight,
            })
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.words.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all edge weights, i.e. the number of adjacent token pairs read.
    pub fn total_weight(&self) -> f64 {
        self.outgoing.iter().flatten().map(|e| e.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCIENTIST: [&str; 14] = [
        "the", "scientist", "carefully", "researched", "something", "to", "explore", "new",
        "discoveries", "the", "new", "invention", "is", "happening",
    ];

    fn id(g: &WordGraph, w: &str) -> VertexId {
        g.vertex_id(w).unwrap()
    }

    #[test]
    fn test_scientist_sentence() {
        let g = WordGraph::from_tokens(SCIENTIST);
        let the = id(&g, "the");
        assert_eq!(g.edge_weight(the, id(&g, "scientist")), Some(1.0));
        assert_eq!(g.edge_weight(the, id(&g, "new")), Some(1.0));
        assert_eq!(g.out_degree(the), 2);
        // 14 tokens, "the" and "new" repeat
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.edge_count(), 13);
        assert_eq!(g.total_weight(), 13.0);
    }

    #[test]
    fn test_repeated_pair_accumulates_weight() {
        let g = WordGraph::from_text("a b a b a b");
        let (a, b) = (id(&g, "a"), id(&g, "b"));
        assert_eq!(g.edge_weight(a, b), Some(3.0));
        assert_eq!(g.edge_weight(b, a), Some(2.0));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_degree(a), 1);
    }

    #[test]
    fn test_directed() {
        let g = WordGraph::from_text("hello world");
        let (h, w) = (id(&g, "hello"), id(&g, "world"));
        assert!(g.contains_edge(h, w));
        assert!(!g.contains_edge(w, h));
        assert_eq!(g.edge_weight(w, h), None);
    }

    #[test]
    fn test_single_token() {
        let g = WordGraph::from_tokens(["alone"]);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.contains_word("alone"));
    }

    #[test]
    fn test_empty_tokens() {
        let g = WordGraph::from_tokens(Vec::<String>::new());
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_empty_token_strings_are_skipped() {
        let g = WordGraph::from_tokens(["a", "", "b"]);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.word_edge_weight("a", "b"), Some(1.0));
    }

    #[test]
    fn test_self_loop() {
        let g = WordGraph::from_text("very very very good");
        let v = id(&g, "very");
        assert_eq!(g.edge_weight(v, v), Some(2.0));
        assert_eq!(g.out_degree(v), 2);
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let g = WordGraph::from_text("c a b a");
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_edges_view() {
        let g = WordGraph::from_text("x y x y z");
        let edges: Vec<_> = g
            .edges()
            .map(|e| (e.source, e.target, e.weight))
            .collect();
        assert_eq!(
            edges,
            vec![("x", "y", 2.0), ("y", "x", 1.0), ("y", "z", 1.0)]
        );
    }

    #[test]
    fn test_edge_ids_are_unique() {
        let g = WordGraph::from_text("a b c a b d");
        let mut ids: Vec<EdgeId> = g
            .vertex_ids()
            .flat_map(|v| g.neighbors_out(v).iter().map(|e| e.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..g.edge_count() as EdgeId).collect::<Vec<_>>());
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = WordGraph::new();
        let a = g.add_vertex("a");
        assert_eq!(g.add_vertex("a"), a);
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_repeated_word_interned_once() {
        let g = WordGraph::from_tokens(["a", "b", "a"]);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertex_id("a"), Some(0));
    }

    #[test]
    fn test_contains_vertex() {
        let g = WordGraph::from_text("a b c");
        assert!(g.contains_vertex(0));
        assert!(g.contains_vertex(2));
        assert!(!g.contains_vertex(3));
        assert!(!g.contains_vertex(99));
        assert!(!WordGraph::new().contains_vertex(0));
    }

    #[test]
    fn test_require_pair_priority() {
        let g = WordGraph::from_text("hurt deer owl");
        assert!(g.require_pair("hurt", "owl").is_ok());
        assert_eq!(
            g.require_pair("cat", "dog"),
            Err(LookupError::MissingBoth("cat".into(), "dog".into()))
        );
        assert_eq!(
            g.require_pair("cat", "owl"),
            Err(LookupError::Missing("cat".into()))
        );
        assert_eq!(
            g.require_pair("hurt", "river"),
            Err(LookupError::Missing("river".into()))
        );
        assert_eq!(
            g.require("river").unwrap_err().to_string(),
            "No \"river\" in the graph!"
        );
    }

    #[test]
    fn test_neighbors_of_unknown_id() {
        let g = WordGraph::from_text("a b");
        assert!(g.neighbors_out(99).is_empty());
    }
}
