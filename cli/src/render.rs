//! Graphviz DOT rendering of a word graph.
//!
//! Produces text only; turning it into an image is left to `dot -Tpng`.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use word_graph_core::{Path, WordGraph};

/// Render the graph with edge weights as labels. Edges on `highlight`
/// are drawn thick and red.
pub fn to_dot(graph: &WordGraph, highlight: Option<&Path>) -> String {
    let marked: HashSet<(&str, &str)> = highlight
        .map(|p| p.edges().collect())
        .unwrap_or_default();

    let mut out = String::from("digraph words {\n    rankdir=LR;\n");
    for word in graph.vertices() {
        let _ = writeln!(out, "    \"{word}\";");
    }
    for e in graph.edges() {
        let style = if marked.contains(&(e.source, e.target)) {
            ", color=red, penwidth=3"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{}\"{style}];",
            e.source, e.target, e.weight
        );
    }
    out.push_str("}\n");
    out
}

pub fn write_dot(path: &FsPath, graph: &WordGraph, highlight: Option<&Path>) -> Result<()> {
    fs::write(path, to_dot(graph, highlight))
        .with_context(|| format!("cannot write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_graph_core::shortest_path;

    #[test]
    fn test_dot_lists_vertices_and_weighted_edges() {
        let g = WordGraph::from_text("a b a b c");
        assert_eq!(
            to_dot(&g, None),
            "digraph words {\n    rankdir=LR;\n    \"a\";\n    \"b\";\n    \"c\";\n    \
             \"a\" -> \"b\" [label=\"2\"];\n    \"b\" -> \"a\" [label=\"1\"];\n    \
             \"b\" -> \"c\" [label=\"1\"];\n}\n"
        );
    }

    #[test]
    fn test_dot_highlights_path_edges() {
        let g = WordGraph::from_text("a b c a");
        let path = shortest_path(&g, 0, 2).unwrap();
        let dot = to_dot(&g, Some(&path));
        assert!(dot.contains("\"a\" -> \"b\" [label=\"1\", color=red, penwidth=3];"));
        assert!(dot.contains("\"b\" -> \"c\" [label=\"1\", color=red, penwidth=3];"));
        assert!(dot.contains("\"c\" -> \"a\" [label=\"1\"];"));
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(
            to_dot(&WordGraph::new(), None),
            "digraph words {\n    rankdir=LR;\n}\n"
        );
    }

    #[test]
    fn test_write_dot() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.dot");
        write_dot(&out, &WordGraph::from_text("x y"), None).unwrap();
        assert!(fs::read_to_string(&out).unwrap().starts_with("digraph words {"));
    }
}
