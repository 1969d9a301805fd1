use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::bridge::bridge_ids;
use crate::graph::WordGraph;
use crate::tokenize::tokenize;

/// Result of rewriting text with bridge words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The text contained no words.
    Empty,
    /// Exactly one word: nothing to bridge, returned normalized.
    SingleWord(String),
    /// Normalized words with bridge words inserted between pairs.
    Rewritten { text: String, inserted: usize },
}

impl Rewrite {
    /// The output text (empty for `Empty`).
    pub fn text(&self) -> &str {
        match self {
            Rewrite::Empty => "",
            Rewrite::SingleWord(w) => w,
            Rewrite::Rewritten { text, .. } => text,
        }
    }
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Insert a random bridge word between every adjacent pair of words in `text`
/// that has one.
///
/// The text is normalized the same way as graph input. For each pair the
/// bridge word is drawn uniformly from the candidates using `rng`; pairs
/// without candidates (including pairs with a word absent from the graph)
/// are left as they are.
pub fn generate_new_text<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> Rewrite {
    let words = tokenize(text);
    let (last, _) = match words.split_last() {
        None => return Rewrite::Empty,
        Some((only, [])) => return Rewrite::SingleWord(only.clone()),
        Some(split) => split,
    };

    let mut out: Vec<&str> = Vec::with_capacity(words.len() * 2);
    let mut inserted = 0usize;
    let mut candidates = Vec::new();

    for pair in words.windows(2) {
        let (w1, w2) = (&pair[0], &pair[1]);
        out.push(w1);

        let (Some(a), Some(b)) = (graph.vertex_id(w1), graph.vertex_id(w2)) else {
            continue;
        };
        candidates.clear();
        candidates.extend(bridge_ids(graph, a, b));
        if let Some(&bridge) = candidates.choose(rng) {
            out.push(graph.word(bridge));
            inserted += 1;
        }
    }
    out.push(last);

    debug!(words = words.len(), inserted, "rewrote text");
    Rewrite::Rewritten {
        text: out.join(" "),
        inserted,
    }
}
