/// Split raw text into lowercase alphabetic tokens.
///
/// Every run of characters outside `a-z`/`A-Z` is a separator, so
/// punctuation, digits and non-Latin letters never produce empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    push_tokens(text, &mut tokens);
    tokens
}

/// Tokenize a sequence of lines, concatenating their tokens in order.
///
/// Line boundaries act as separators; a word never spans two lines.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        push_tokens(line.as_ref(), &mut tokens);
    }
    tokens
}

fn push_tokens(text: &str, out: &mut Vec<String>) {
    out.extend(
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_ascii_lowercase()),
    );
}
