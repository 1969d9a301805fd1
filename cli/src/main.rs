//! word-graph: console front end for word-graph-core.
//!
//! Loads a text file into a word graph and answers bridge-word, rewrite,
//! shortest-path and random-walk queries, either as one-shot subcommands
//! or through the interactive menu.

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use word_graph_core::AutoContinue;

mod app;
mod load;
mod logging;
mod menu;
mod prompt;
mod render;
mod settings;

use app::App;
use prompt::ConsolePrompt;
use settings::{Command, Settings};

fn main() {
    let settings = Settings::parse();
    logging::init(settings.verbose);

    if let Err(e) = execute(settings) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn execute(settings: Settings) -> Result<()> {
    let graph = load::load_graph(&settings.input)?;
    let command = settings.command_or_menu();
    let mut app = App::new(graph, settings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Menu => menu::run(&mut app, &mut input, &mut out),
        Command::Show => app.show(&mut out),
        Command::Bridge { word1, word2 } => app.bridge(&word1, &word2, &mut out),
        Command::Rewrite { text } => app.rewrite(&text, &mut out),
        Command::Path {
            from,
            to,
            highlight,
        } => app.path(Some(from.as_str()), to.as_deref(), highlight.as_deref(), &mut out),
        Command::Walk { auto: true } => app.walk(&mut AutoContinue, &mut out),
        Command::Walk { auto: false } => {
            let mut report = Vec::new();
            app.walk(&mut ConsolePrompt::new(&mut input, &mut out), &mut report)?;
            writeln!(out)?;
            out.write_all(&report)?;
            Ok(())
        }
    }
}
