use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use word_graph_core::{tokenize_lines, TraversalRecord, WordGraph};

/// Read a text file line by line and build its word graph.
pub fn load_graph(path: &Path) -> Result<WordGraph> {
    let start = Instant::now();

    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .with_context(|| format!("cannot read {}", path.display()))?;

    let graph = WordGraph::from_tokens(tokenize_lines(&lines));

    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(graph)
}

/// Persist a finished walk as its space-joined path.
pub fn save_walk(path: &Path, record: &TraversalRecord) -> Result<()> {
    fs::write(path, record.joined())
        .with_context(|| format!("cannot write walk to {}", path.display()))?;
    info!(path = %path.display(), words = record.path.len(), "walk saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use word_graph_core::StopReason;

    #[test]
    fn test_load_graph_across_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "The hurt deer").unwrap();
        writeln!(file, "drinks; the hurt owl.").unwrap();
        let g = load_graph(file.path()).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.word_edge_weight("the", "hurt"), Some(2.0));
        assert_eq!(g.word_edge_weight("deer", "drinks"), Some(1.0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_graph(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_save_walk() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("random_walk.txt");
        let record = TraversalRecord {
            path: vec!["hello".into(), "world".into()],
            reason: StopReason::UserInterrupt,
        };
        save_walk(&out, &record).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello world");
    }
}
