//! Block classification and method assembly.
//!
//! Each comment block is one of three things: a `@package` header (which also
//! names a module), a bare `Name module` declaration, or a method. Package and
//! module blocks pick the module that following method blocks land in; that
//! cursor lives in an explicit [`ParseContext`] handed along by the caller and
//! reset per source file.

use std::sync::LazyLock;

use anyhow::{bail, Result};
use regex::Regex;

use crate::model::{MethodDoc, PackageDoc};
use crate::parser::block::{strip_padding, Block};
use crate::parser::example::{parse_examples, parse_set};
use crate::parser::signature;

static RE_PACKAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@package (\w+)").unwrap());

static RE_MODULE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) module\s*$").unwrap());

/// Names rendered through the HTML-escaping code path on the site.
const ESCAPE_HTML_METHODS: [&str; 4] =
    ["stripTags", "removeTags", "escapeHTML", "unescapeHTML"];

/// Lines are padded five rows up for display, clamped at the top of the file.
const LINE_DISPLAY_OFFSET: u64 = 5;

/// Cursor for the module that method blocks get inserted into.
#[derive(Debug, Default)]
pub struct ParseContext {
    current_module: Option<String>,
}

/// Route one comment block into the package being built.
pub fn classify_block(
    block: &Block,
    package: &mut PackageDoc,
    ctx: &mut ParseContext,
) -> Result<()> {
    if block.is_blank() {
        return Ok(());
    }

    if let Some(caps) = RE_PACKAGE.captures(&block.text) {
        let name = caps[1].to_string();
        if let Some(dep) = block.field("dependency").filter(|v| !v.is_empty()) {
            package.dependency = Some(dep);
        }
        if let Some(desc) = block.field("description").filter(|v| !v.is_empty()) {
            package.description = Some(desc);
        }
        package.modules.entry(name.clone()).or_default();
        ctx.current_module = Some(name);
        return Ok(());
    }

    if let Some(name) = module_declaration(&block.text) {
        package.modules.entry(name.clone()).or_default();
        ctx.current_module = Some(name);
        return Ok(());
    }

    let (name, method) = build_method(block)?;
    let module = ctx
        .current_module
        .as_ref()
        .and_then(|m| package.modules.get_mut(m));
    match module {
        Some(module) => {
            module.insert(name, method);
            Ok(())
        }
        None => bail!(
            "method {:?} at line {} precedes any module declaration",
            name,
            block.line
        ),
    }
}

/// A line of the exact shape `Name module` declares (or switches to) a module.
fn module_declaration(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| RE_MODULE_DECL.captures(strip_padding(line)))
        .map(|caps| caps[1].to_string())
}

fn build_method(block: &Block) -> Result<(String, MethodDoc)> {
    let Some(raw) = block.field("method") else {
        bail!("block at line {} has no @method declaration", block.line);
    };
    let sig = signature::parse(&raw)?;

    let method = MethodDoc {
        class_method: sig.class_method,
        accepts_unlimited_params: sig.accepts_unlimited_params,
        params: sig.params,
        line: Some(block.line.saturating_sub(LINE_DISPLAY_OFFSET)),
        returns: block.field("returns"),
        short: block.field("short"),
        extra: block.field("extra"),
        set: block.multiline_field("set").and_then(|l| parse_set(&l)),
        examples: block
            .multiline_field("example")
            .and_then(|l| parse_examples(&l)),
        alias: block.field("alias"),
        escape_html: ESCAPE_HTML_METHODS.contains(&sig.name.as_str()),
    };

    // An alias keeps nothing but the pointer and a generated short.
    let method = match method.alias {
        Some(target) => MethodDoc::alias_record(target),
        None => method,
    };
    Ok((sig.name, method))
}
