use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::info;
use word_graph_core::{
    bridge_message, calc_shortest_path, generate_new_text, random_walk, PairPath, PathQuery,
    WalkOutcome, WalkPrompt, WordGraph,
};

use crate::load::save_walk;
use crate::render::write_dot;
use crate::settings::Settings;

/// A loaded graph plus everything the queries need from the outside:
/// output locations and the random source.
pub struct App {
    pub graph: WordGraph,
    pub settings: Settings,
    rng: StdRng,
}

impl App {
    pub fn new(graph: WordGraph, settings: Settings) -> Self {
        let rng = settings.rng();
        Self {
            graph,
            settings,
            rng,
        }
    }

    /// Statistics and the edge list; the DOT rendering goes to `dot_output`.
    pub fn show(&self, out: &mut impl Write) -> Result<()> {
        let g = &self.graph;
        writeln!(
            out,
            "{} words, {} edges, total weight {}",
            g.vertex_count(),
            g.edge_count(),
            g.total_weight()
        )?;
        for e in g.edges() {
            writeln!(out, "  {} -> {} ({})", e.source, e.target, e.weight)?;
        }
        write_dot(&self.settings.dot_output, g, None)?;
        writeln!(out, "Graph written to {}", self.settings.dot_output.display())?;
        Ok(())
    }

    pub fn bridge(&self, word1: &str, word2: &str, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", bridge_message(&self.graph, word1, word2))?;
        Ok(())
    }

    pub fn rewrite(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        let rewritten = generate_new_text(&self.graph, text, &mut self.rng);
        writeln!(out, "New text with bridge words: {rewritten}")?;
        Ok(())
    }

    /// Pair or broadcast shortest path. With `highlight`, a found pair path
    /// is also rendered to that file.
    pub fn path(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        highlight: Option<&std::path::Path>,
        out: &mut impl Write,
    ) -> Result<()> {
        match calc_shortest_path(&self.graph, from, to) {
            Err(missing) => writeln!(out, "{missing}")?,
            Ok(query) => {
                writeln!(out, "{query}")?;
                if let (Some(file), PathQuery::Pair(PairPath::Found(path))) = (highlight, &query) {
                    write_dot(file, &self.graph, Some(path))?;
                    writeln!(out, "Highlighted path written to {}", file.display())?;
                }
            }
        }
        Ok(())
    }

    /// Run a walk, persist its path to `walk_output`, and report it.
    pub fn walk<P: WalkPrompt + ?Sized>(
        &mut self,
        prompt: &mut P,
        out: &mut impl Write,
    ) -> Result<()> {
        match random_walk(&self.graph, &mut self.rng, prompt) {
            WalkOutcome::NoVertices => writeln!(out, "{}", WalkOutcome::NoVertices)?,
            WalkOutcome::Finished(record) => {
                info!(reason = %record.reason, words = record.path.len(), "walk finished");
                save_walk(&self.settings.walk_output, &record)?;
                writeln!(out, "{record}")?;
                writeln!(out, "Walk saved to {}", self.settings.walk_output.display())?;
            }
        }
        Ok(())
    }
}
