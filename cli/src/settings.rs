use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a word-adjacency graph from a text file and query it.
#[derive(Parser, Debug, Clone)]
#[command(name = "word-graph", version, about)]
pub struct Settings {
    /// Text file the graph is built from
    #[arg(short, long, env = "WORD_GRAPH_INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// Where a finished random walk is written
    #[arg(long, env = "WORD_GRAPH_WALK_OUTPUT", default_value = "random_walk.txt")]
    pub walk_output: PathBuf,

    /// Where `show` writes the Graphviz rendering
    #[arg(long, env = "WORD_GRAPH_DOT_OUTPUT", default_value = "graph.dot")]
    pub dot_output: PathBuf,

    /// Seed for bridge-word choice and random walks (random if unset)
    #[arg(long, env = "WORD_GRAPH_SEED")]
    pub seed: Option<u64>,

    /// Log more (-v info, -vv debug). WORD_GRAPH_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default)
    Menu,

    /// Print graph statistics and edges, and write the DOT file
    Show,

    /// Query bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },

    /// Insert bridge words into TEXT
    Rewrite { text: String },

    /// Shortest path from FROM to TO, or from FROM to every word
    Path {
        from: String,
        to: Option<String>,

        /// Write a DOT rendering with the path highlighted
        #[arg(long)]
        highlight: Option<PathBuf>,
    },

    /// Random walk from a random word
    Walk {
        /// Do not ask before each step
        #[arg(long)]
        auto: bool,
    },
}

impl Settings {
    pub fn command_or_menu(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        <Settings as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let s = Settings::try_parse_from(["word-graph"]).unwrap();
        assert_eq!(s.input, PathBuf::from("input.txt"));
        assert_eq!(s.walk_output, PathBuf::from("random_walk.txt"));
        assert_eq!(s.command_or_menu(), Command::Menu);
        assert_eq!(s.verbose, 0);
    }

    #[test]
    fn test_subcommands() {
        let s = Settings::try_parse_from(["word-graph", "-i", "story.txt", "bridge", "hurt", "owl"])
            .unwrap();
        assert_eq!(s.input, PathBuf::from("story.txt"));
        assert_eq!(
            s.command_or_menu(),
            Command::Bridge {
                word1: "hurt".into(),
                word2: "owl".into()
            }
        );

        let s = Settings::try_parse_from(["word-graph", "path", "a"]).unwrap();
        assert_eq!(
            s.command_or_menu(),
            Command::Path {
                from: "a".into(),
                to: None,
                highlight: None
            }
        );

        let s = Settings::try_parse_from(["word-graph", "-vv", "--seed", "9", "walk", "--auto"])
            .unwrap();
        assert_eq!(s.verbose, 2);
        assert_eq!(s.seed, Some(9));
        assert_eq!(s.command_or_menu(), Command::Walk { auto: true });
    }

    #[test]
    fn test_bridge_requires_two_words() {
        assert!(Settings::try_parse_from(["word-graph", "bridge", "only"]).is_err());
    }
}
