use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::app::App;
use crate::prompt::ConsolePrompt;

const MENU: &str = "\
Choose an option:
1. Show graph
2. Query bridge words
3. Generate new text
4. Shortest path
5. Random walk
6. Exit";

/// Interactive loop over `input`/`output`. Returns on `6` or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: &mut R, output: &mut W) -> Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = read_line(input)? else {
            return Ok(());
        };
        debug!(choice = %choice, "menu choice");

        match choice.as_str() {
            "1" => app.show(output)?,
            "2" => {
                let Some(word1) = ask(input, output, "First word:")? else {
                    return Ok(());
                };
                let Some(word2) = ask(input, output, "Second word:")? else {
                    return Ok(());
                };
                app.bridge(&word1, &word2, output)?;
            }
            "3" => {
                let Some(text) = ask(input, output, "Text:")? else {
                    return Ok(());
                };
                app.rewrite(&text, output)?;
            }
            "4" => {
                let Some(from) = ask(input, output, "Start word (blank for none):")? else {
                    return Ok(());
                };
                let Some(to) = ask(input, output, "Target word (blank for all):")? else {
                    return Ok(());
                };
                app.path(Some(from.as_str()), Some(to.as_str()), None, output)?;
            }
            "5" => {
                let mut prompt = ConsolePrompt::new(&mut *input, &mut *output);
                // the prompt owns the console until the walk ends
                let mut report = Vec::new();
                app.walk(&mut prompt, &mut report)?;
                writeln!(output)?;
                output.write_all(&report)?;
            }
            "6" => {
                writeln!(output, "Bye.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice, try again.")?,
        }
    }
}

/// One trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>> {
    writeln!(output, "{question}")?;
    output.flush()?;
    read_line(input)
}
