//! Method signature parsing.
//!
//! An `@method` field carries a declaration like `Array.create(<obj>, [clone] =
//! false, ...)`. This module splits it into the method name, the class-method
//! flag (a dotted receiver), the parameter list with required/optional
//! brackets and typed defaults, and the trailing `...` variadic marker.

use std::sync::LazyLock;

use anyhow::{bail, Result};
use regex::Regex;

use crate::model::{ParamType, Parameter};

static RE_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+\.)?(.+)\((.+)?\)").unwrap());

/// A parsed method declaration.
#[derive(Debug)]
pub struct Signature {
    pub name: String,
    pub class_method: bool,
    pub params: Vec<Parameter>,
    pub accepts_unlimited_params: bool,
}

/// Parse an `@method` declaration. Malformed declarations abort the run.
pub fn parse(text: &str) -> Result<Signature> {
    let Some(caps) = RE_SIGNATURE.captures(text) else {
        bail!("malformed method signature {:?}", text);
    };
    let class_method = caps.get(1).is_some();
    let name = caps[2].to_string();

    let mut pieces = match caps.get(3) {
        Some(list) => split_params(list.as_str()),
        None => Vec::new(),
    };
    let accepts_unlimited_params = take_variadic(&mut pieces);

    let mut params = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        params.push(parse_param(piece, text)?);
    }

    Ok(Signature {
        name,
        class_method,
        params,
        accepts_unlimited_params,
    })
}

// -- Parameter list -----------------------------------------------------------

/// Split the parenthesized list on commas. A comma directly followed by a
/// single quote sits inside a quoted default (`[separator] = ','`) and does
/// not separate. Trailing empty pieces are dropped.
fn split_params(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ',' && chars.peek() != Some(&'\'') {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    pieces.push(current);
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Pop a final `...` piece and report it as the variadic marker. A quote
/// directly before the dots means a literal `'...'` default, not variadic.
fn take_variadic(pieces: &mut Vec<String>) -> bool {
    let Some(last) = pieces.last() else {
        return false;
    };
    let Some(stem) = last.trim_end().strip_suffix("...") else {
        return false;
    };
    if stem.ends_with('\'') || stem.ends_with('"') {
        return false;
    }
    pieces.pop();
    true
}

fn parse_param(piece: &str, signature: &str) -> Result<Parameter> {
    let (decl, default) = match piece.split_once(" = ") {
        Some((decl, default)) => (decl, Some(default)),
        None => (piece, None),
    };

    let decl = decl.trim();
    let (name, required) = if let Some(name) = strip_brackets(decl, '<', '>') {
        (name, true)
    } else if let Some(name) = strip_brackets(decl, '[', ']') {
        (name, false)
    } else {
        bail!("malformed parameter {:?} in signature {:?}", piece, signature);
    };

    let (kind, default) = match default {
        Some(raw) => {
            let kind = infer_type(raw);
            let default = if kind == Some(ParamType::String) {
                markup_string_default(raw)
            } else {
                raw.to_string()
            };
            (kind, Some(default))
        }
        None => (None, None),
    };

    Ok(Parameter {
        name: name.to_string(),
        required,
        kind,
        default,
    })
}

fn strip_brackets(decl: &str, open: char, close: char) -> Option<&str> {
    let inner = decl.strip_prefix(open)?.strip_suffix(close)?;
    (!inner.is_empty()).then_some(inner)
}

// -- Default value typing -----------------------------------------------------

/// Infer a default value's type from its literal shape. Checks run in a fixed
/// order, so `'a1'` is a string even though it carries a digit.
fn infer_type(default: &str) -> Option<ParamType> {
    if spans_pair(default, &['\'', '"'], 1) {
        Some(ParamType::String)
    } else if default.chars().any(|c| c.is_ascii_digit()) {
        Some(ParamType::Number)
    } else if spans_pair(default, &['/'], 2) {
        Some(ParamType::Regexp)
    } else if default == "null" {
        Some(ParamType::Null)
    } else if default.contains("true") || default.contains("false") {
        Some(ParamType::Boolean)
    } else if default.contains("{}") {
        Some(ParamType::Object)
    } else {
        None
    }
}

/// True when the text holds one of `delims` and another occurrence at least
/// `gap` characters later. `''` counts as a string pair; `//` is not a regex.
fn spans_pair(text: &str, delims: &[char], gap: usize) -> bool {
    match (text.find(delims), text.rfind(delims)) {
        (Some(i), Some(j)) => j >= i + gap,
        _ => false,
    }
}

/// Wrap a string default's quoted content in the monospace span the doc
/// renderer expects, quotes left outside. An empty literal stays untouched.
fn markup_string_default(default: &str) -> String {
    let quotes: &[char] = &['\'', '"'];
    if let (Some(i), Some(j)) = (default.find(quotes), default.rfind(quotes)) {
        if j > i + 1 {
            return format!(
                "{}{}<span class=\"monospace\">{}</span>{}{}",
                &default[..i],
                &default[i..=i],
                &default[i + 1..j],
                &default[j..=j],
                &default[j + 1..]
            );
        }
    }
    default.to_string()
}
