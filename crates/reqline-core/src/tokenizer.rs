//! Shell-style splitting of command arguments.
//!
//! The text after a command word is split the way a POSIX shell splits words,
//! without any expansion:
//!
//! - whitespace separates words
//! - `'single quotes'` group text literally
//! - `"double quotes"` group text; a backslash only escapes `$`, `` ` ``, `"`,
//!   `\` and newline inside them
//! - outside quotes a backslash escapes the next character
//! - adjacent pieces join into one word (`a"b c"d` is `ab cd`)
//!
//! Unlike a shell, `#` has no special meaning: `fragment-set #top` must keep
//! its argument.
//!
//! ```rust
//! use reqline_core::tokenizer::split;
//!
//! assert_eq!(split(r#"foo "bar baz" qu\ ux"#).unwrap(), vec!["foo", "bar baz", "qu ux"]);
//! assert!(split("'unterminated").is_err());
//! ```

use crate::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    SingleQuoted,
    DoubleQuoted,
}

/// Split `input` into words.
///
/// # Errors
///
/// Returns [`Error::UnclosedQuote`] when a single or double quote is not
/// closed before the end of the input.
pub fn split(input: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut mode = Mode::Normal;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match mode {
            Mode::Normal => match ch {
                '\'' => {
                    mode = Mode::SingleQuoted;
                    in_word = true;
                },
                '"' => {
                    mode = Mode::DoubleQuoted;
                    in_word = true;
                },
                '\\' => {
                    // A lone trailing backslash stays literal
                    current.push(chars.next().unwrap_or('\\'));
                    in_word = true;
                },
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                },
                c => {
                    current.push(c);
                    in_word = true;
                },
            },
            Mode::SingleQuoted => {
                if ch == '\'' {
                    mode = Mode::Normal;
                } else {
                    current.push(ch);
                }
            },
            Mode::DoubleQuoted => match ch {
                '"' => mode = Mode::Normal,
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '$' | '`' | '"' | '\\' | '\n') => {
                        current.push(next);
                        chars.next();
                    },
                    _ => current.push('\\'),
                },
                c => current.push(c),
            },
        }
    }

    if mode != Mode::Normal {
        return Err(Error::UnclosedQuote {
            input: input.to_string(),
        });
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        split(input).unwrap()
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(words("foo"), vec!["foo"]);
        assert_eq!(words("  foo   bar\tbaz "), vec!["foo", "bar", "baz"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_split_quotes_group_words() {
        assert_eq!(words("'foo bar' baz"), vec!["foo bar", "baz"]);
        assert_eq!(words(r#""foo bar" baz"#), vec!["foo bar", "baz"]);
        assert_eq!(words(r#"a"b c"d"#), vec!["ab cd"]);
        assert_eq!(words("''"), vec![""]);
        assert_eq!(words(r#"x "" y"#), vec!["x", "", "y"]);
    }

    #[test]
    fn test_split_backslash_escapes() {
        assert_eq!(words(r"foo\ bar"), vec!["foo bar"]);
        assert_eq!(words(r"\'quoted\'"), vec!["'quoted'"]);
        assert_eq!(words(r"trailing\"), vec!["trailing\\"]);
        assert_eq!(words(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(words(r#""C:\dir""#), vec![r"C:\dir"]);
        assert_eq!(words(r"'no \escapes'"), vec![r"no \escapes"]);
    }

    #[test]
    fn test_split_keeps_hash() {
        assert_eq!(words("#top"), vec!["#top"]);
        assert_eq!(words("a #b"), vec!["a", "#b"]);
    }

    #[test]
    fn test_split_unclosed_quote() {
        for input in ["\"unterminated", "'unterminated", r#"ok "still open"#, r#""esc\""#] {
            match split(input) {
                Err(Error::UnclosedQuote { input: reported }) => assert_eq!(reported, input),
                other => panic!("expected UnclosedQuote for {input:?}, got {other:?}"),
            }
        }
    }
}
