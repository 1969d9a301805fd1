use std::io::{BufRead, Write};

use tracing::warn;
use word_graph_core::{WalkDecision, WalkPrompt};

/// Asks on the console before every walk step: `q` stops, anything else
/// continues. End of input, a read error or a failed write stops the walk.
pub struct ConsolePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> ConsolePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> WalkPrompt for ConsolePrompt<'_, R, W> {
    fn ask_continue_or_stop(&mut self, current: &str) -> WalkDecision {
        let asked = write!(
            self.output,
            "Current word: {current}. Enter 'q' to stop, or press Enter to continue... "
        )
        .and_then(|()| self.output.flush());
        if let Err(e) = asked {
            warn!(error = %e, "cannot show walk prompt, stopping");
            return WalkDecision::Stop;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => WalkDecision::Stop,
            Ok(_) if line.trim().eq_ignore_ascii_case("q") => WalkDecision::Stop,
            Ok(_) => WalkDecision::Continue,
            Err(e) => {
                warn!(error = %e, "cannot read walk decision, stopping");
                WalkDecision::Stop
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_decisions() {
        let mut input = Cursor::new("\nr\nQ\n");
        let mut output = Vec::new();
        let mut prompt = ConsolePrompt::new(&mut input, &mut output);
        assert_eq!(prompt.ask_continue_or_stop("a"), WalkDecision::Continue);
        assert_eq!(prompt.ask_continue_or_stop("b"), WalkDecision::Continue);
        assert_eq!(prompt.ask_continue_or_stop("c"), WalkDecision::Stop);
        // input exhausted
        assert_eq!(prompt.ask_continue_or_stop("d"), WalkDecision::Stop);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Current word: a."));
        assert!(shown.contains("Current word: d."));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_stops_without_reading() {
        let mut input = Cursor::new("\n\n");
        let mut output = BrokenPipe;
        let mut prompt = ConsolePrompt::new(&mut input, &mut output);
        assert_eq!(prompt.ask_continue_or_stop("a"), WalkDecision::Stop);
        // the pending answer was left unread
        assert_eq!(input.position(), 0);
    }
}
