//! Splitting of free-form git argument strings.

/// Split `raw` into arguments the way a POSIX shell would for plain words.
///
/// Whitespace separates tokens except inside a single- or double-quoted run.
/// Delimiting quotes are dropped, and a backslash-escaped quote of the active
/// kind inside a run is kept as a literal quote. An unclosed run extends to
/// the end of the input.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                in_token = true;
                let quote = c;
                while let Some(ch) = chars.next() {
                    if ch == '\\' && chars.peek() == Some(&quote) {
                        current.push(quote);
                        chars.next();
                    } else if ch == quote {
                        break;
                    } else {
                        current.push(ch);
                    }
                }
            }
            '\\' if matches!(chars.peek(), Some(&n) if n == '"' || n == '\'' || n.is_whitespace()) => {
                in_token = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tracing::debug!(original = raw, parsed = ?tokens, "Git args parsed");
    tokens
}
