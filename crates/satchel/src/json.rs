//! JSON pretty-printing with tab indentation.

use serde::de::IgnoredAny;

/// Re-indents JSON text with tabs. Input that is not valid JSON is returned
/// unchanged; no error is surfaced.
///
/// This works at the token level: object key order, number literals, and
/// string contents come through byte-for-byte, only the whitespace between
/// tokens is rewritten. Empty objects and arrays stay compact.
pub fn pretty_print(input: &str) -> String {
    if serde_json::from_str::<IgnoredAny>(input).is_err() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                while chars.peek().is_some_and(|n| n.is_whitespace()) {
                    chars.next();
                }
                let close = if c == '{' { '}' } else { ']' };
                if chars.peek() == Some(&close) {
                    chars.next();
                    out.push(close);
                } else {
                    depth += 1;
                    indent_to(&mut out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                indent_to(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                indent_to(&mut out, depth);
            }
            ':' => {
                out.push(c);
                out.push(' ');
            }
            c if c.is_whitespace() => {}
            _ => out.push(c),
        }
    }
    out
}

fn indent_to(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push('\t');
    }
}
