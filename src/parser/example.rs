//! `@example` and `@set` body normalization.
//!
//! Example bodies mix single-line snippets with multi-line function literals.
//! Lines carrying the `function` keyword open an accumulation that a `);`
//! line closes; everything else stands alone. The stored html keeps literal
//! `\n` escapes as line separators, with a `_NL_` sentinel shielding newline
//! escapes that sit inside quoted strings from later display splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Example;

/// Trailing `-> expected-result` annotation, documentation only.
static RE_RESULT_NOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+->.+$").unwrap());

/// Normalize the padded-stripped lines of an `@example` field.
///
/// Absent (`None`) when no example was ever emitted, so an all-blank body and
/// a missing tag look the same downstream.
pub fn parse_examples(lines: &[String]) -> Option<Vec<Example>> {
    let mut examples = Vec::new();
    let mut body = String::new();
    let mut force_result = false;

    for line in lines {
        let mut line = RE_RESULT_NOTE.replace(line, "").into_owned();
        if line.starts_with('+') {
            force_result = true;
            line.remove(0);
        }

        if line.contains("function") && !line.contains("isFunction") {
            body.push_str(&line);
        } else if line.ends_with(");") {
            // The closing line gets its braces broken onto their own display
            // lines; the separator before `}` doubles as the line break.
            body.push_str(&line.replace('}', "\\n}"));
            examples.push(Example {
                multi_line: true,
                force_result,
                html: protect_quoted_newlines(&body),
            });
            body.clear();
            force_result = false;
        } else if !body.is_empty() {
            body.push_str("\\n");
            body.push_str(&line);
        } else if !line.is_empty() {
            examples.push(Example {
                multi_line: false,
                force_result,
                html: line.replace("\\n", "_NL_"),
            });
            force_result = false;
        }
    }

    (!examples.is_empty()).then_some(examples)
}

/// Filter the padded-stripped lines of a `@set` field down to its entries.
/// Absent when nothing remains.
pub fn parse_set(lines: &[String]) -> Option<Vec<String>> {
    let set: Vec<String> = lines.iter().filter(|l| !l.is_empty()).cloned().collect();
    (!set.is_empty()).then_some(set)
}

/// Replace literal `\n` escapes inside quoted regions with the `_NL_`
/// sentinel. A region runs from a quote to the nearest same-kind quote at
/// least two characters later; a quote without a closer is plain text.
fn protect_quoted_newlines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' || c == '"' {
            if let Some(j) = (i + 2..chars.len()).find(|&j| chars[j] == c) {
                let inner: String = chars[i + 1..j].iter().collect();
                out.push(c);
                out.push_str(&inner.replace("\\n", "_NL_"));
                out.push(c);
                i = j + 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}
