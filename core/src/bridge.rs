use std::fmt;

use crate::error::LookupError;
use crate::graph::{VertexId, WordGraph};

/// Bridge words found for an ordered word pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeWords {
    pub from: String,
    pub to: String,
    /// In outgoing-edge order of `from`, not sorted.
    pub words: Vec<String>,
}

impl BridgeWords {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (&self.from, &self.to);
        match self.words.as_slice() {
            [] => write!(f, "No bridge words from \"{from}\" to \"{to}\"!"),
            [only] => write!(f, "The bridge word from \"{from}\" to \"{to}\" is: {only}."),
            [init @ .., last] => {
                let sep = if init.len() > 1 { "," } else { "" };
                write!(
                    f,
                    "The bridge words from \"{from}\" to \"{to}\" are: {}{sep} and {last}.",
                    init.join(", ")
                )
            }
        }
    }
}

/// Vertices `w` with edges `a → w` and `w → b`, excluding `a` and `b`.
pub(crate) fn bridge_ids(
    graph: &WordGraph,
    a: VertexId,
    b: VertexId,
) -> impl Iterator<Item = VertexId> + '_ {
    graph
        .neighbors_out(a)
        .iter()
        .map(|e| e.target)
        .filter(move |&w| w != a && w != b && graph.contains_edge(w, b))
}

/// Bridge words between two words. Empty if either word is absent.
pub fn find_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> Vec<String> {
    match graph.require_pair(word1, word2) {
        Ok((a, b)) => bridge_ids(graph, a, b)
            .map(|w| graph.word(w).to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Bridge-word query that distinguishes missing words from an empty answer.
pub fn query_bridge_words(
    graph: &WordGraph,
    word1: &str,
    word2: &str,
) -> Result<BridgeWords, LookupError> {
    let (a, b) = graph.require_pair(word1, word2)?;
    Ok(BridgeWords {
        from: word1.to_string(),
        to: word2.to_string(),
        words: bridge_ids(graph, a, b)
            .map(|w| graph.word(w).to_string())
            .collect(),
    })
}

/// The user-facing message for a bridge-word query.
pub fn bridge_message(graph: &WordGraph, word1: &str, word2: &str) -> String {
    match query_bridge_words(graph, word1, word2) {
        Ok(bridges) => bridges.to_string(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> WordGraph {
        WordGraph::from_text(
            "Alex walks to the river. The hurt deer drinks clear water.",
        )
    }

    #[test]
    fn test_single_bridge_message() {
        let g = WordGraph::from_text("hurt deer owl");
        assert_eq!(
            bridge_message(&g, "hurt", "owl"),
            "The bridge word from \"hurt\" to \"owl\" is: deer."
        );
    }

    #[test]
    fn test_no_bridge_message() {
        let g = story();
        assert_eq!(
            bridge_message(&g, "alex", "clear"),
            "No bridge words from \"alex\" to \"clear\"!"
        );
    }

    #[test]
    fn test_missing_word_messages() {
        let g = story();
        assert_eq!(bridge_message(&g, "alex", "lake"), "No \"lake\" in the graph!");
        assert_eq!(bridge_message(&g, "lake", "alex"), "No \"lake\" in the graph!");
        assert_eq!(
            bridge_message(&g, "lake", "pond"),
            "No \"lake\" and \"pond\" in the graph!"
        );
        // Query words are taken verbatim, not tokenized
        assert_eq!(
            bridge_message(&g, "alex", "walks.deep"),
            "No \"walks.deep\" in the graph!"
        );
    }

    #[test]
    fn test_multiple_bridges_in_edge_order() {
        let g = WordGraph::from_text("a x b a y b a z b");
        let bridges = query_bridge_words(&g, "a", "b").unwrap();
        assert_eq!(bridges.words, vec!["x", "y", "z"]);
        assert_eq!(
            bridges.to_string(),
            "The bridge words from \"a\" to \"b\" are: x, y, and z."
        );
    }

    #[test]
    fn test_two_bridges_message() {
        let g = WordGraph::from_text("a x b a y b");
        assert_eq!(
            bridge_message(&g, "a", "b"),
            "The bridge words from \"a\" to \"b\" are: x and y."
        );
    }

    #[test]
    fn test_bridge_ignores_weight() {
        let g = WordGraph::from_text("a x b a x b a x b");
        assert_eq!(find_bridge_words(&g, "a", "b"), vec!["x"]);
    }

    #[test]
    fn test_bridge_is_directional() {
        let g = WordGraph::from_text("hurt deer owl");
        assert!(find_bridge_words(&g, "owl", "hurt").is_empty());
    }

    #[test]
    fn test_absent_words_yield_empty() {
        let g = story();
        assert!(find_bridge_words(&g, "alex", "lake").is_empty());
        assert!(find_bridge_words(&g, "lake", "pond").is_empty());
    }

    #[test]
    fn test_endpoints_never_bridge() {
        // a → a → b and a → b → b: the self loops would otherwise qualify
        let g = WordGraph::from_text("a a b b");
        assert!(find_bridge_words(&g, "a", "b").is_empty());
    }

    #[test]
    fn test_same_word_pair() {
        let g = WordGraph::from_text("a b a");
        assert_eq!(find_bridge_words(&g, "a", "a"), vec!["b"]);
    }
}
