//! JSON with comments
//!
//! Editor settings files such as launch.json routinely carry `//` and `/* */` comments. They
//! are stripped before the content is handed to `serde_json`. Comments are not preserved when
//! a merged document is written back.

use serde_json::Value;

/// Parse JSON that may contain line and block comments.
pub fn parse_jsonc(content: &str) -> serde_json::Result<Value> {
    serde_json::from_str(&strip_json_comments(content))
}

/// Remove `//` and `/* */` comments outside of string literals.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if escape_next {
            result.push(c);
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            result.push(c);
            escape_next = true;
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            result.push(c);
            continue;
        }

        if !in_string && c == '/' {
            match chars.peek() {
                Some('/') => {
                    // Line comment; the newline is kept
                    while chars.next_if(|&ch| ch != '\n').is_some() {}
                    continue;
                }
                Some('*') => {
                    chars.next();
                    let mut previous = '\0';
                    for ch in chars.by_ref() {
                        if previous == '*' && ch == '/' {
                            break;
                        }
                        previous = ch;
                    }
                    // Keep tokens on either side of the comment apart
                    result.push(' ');
                    continue;
                }
                _ => {}
            }
        }

        result.push(c);
    }

    result
}
