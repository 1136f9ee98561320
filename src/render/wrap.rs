/*!
 * Greedy word wrapping on a character budget.
 */

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

const TAB_SIZE: usize = 8;

/// Wrap `text` into lines of at most `width` characters.
///
/// Words are separated by spaces and may also break after a hyphen inside a
/// word (`state-` / `of-the-art`). Spacing between words on a line is kept
/// as written; whitespace at a break is dropped. Tabs expand to 8-column
/// stops and other whitespace characters become spaces. Words longer than
/// `width` are cut into `width`-sized pieces. Blank input yields no lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let normalized = normalize_whitespace(text);
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::HyphenSplitter)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' | '\u{0b}' | '\u{0c}' => {
                out.push(' ');
                column += 1;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
