use crate::error::{ShellError, ShellResult};

/// Word-split a trimmed line with POSIX shell quoting rules. `#` is ordinary
/// text, never the start of a comment.
pub fn tokenize(line: &str) -> ShellResult<Vec<String>> {
    shlex::split(&escape_word_hashes(line)).ok_or(ShellError::Tokenize)
}

/// `shlex` drops everything from an unquoted word-initial `#` to the end of
/// the line. Backslash-escape those so they survive as literal text.
fn escape_word_hashes(line: &str) -> String {
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut escaped = String::with_capacity(line.len());
    let mut quote = Quote::None;
    let mut word_start = true;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                }
                escaped.push(c);
            }
            Quote::Double => {
                escaped.push(c);
                if c == '\\' {
                    escaped.extend(chars.next());
                } else if c == '"' {
                    quote = Quote::None;
                }
            }
            Quote::None => {
                match c {
                    '#' if word_start => escaped.push('\\'),
                    '\\' => {
                        escaped.push(c);
                        escaped.extend(chars.next());
                        word_start = false;
                        continue;
                    }
                    '\'' => quote = Quote::Single,
                    '"' => quote = Quote::Double,
                    _ => {}
                }
                escaped.push(c);
                word_start = matches!(c, ' ' | '\t' | '\n');
            }
        }
    }
    escaped
}

/// Lines carrying an output redirection are handed to `sh` untouched; there is
/// no redirection model of our own. `>` also covers `1>`, `>>` and `2>`.
pub fn is_redirection(line: &str) -> bool {
    line.contains('>')
}
