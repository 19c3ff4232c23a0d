//! Serialized documentation model for the package/module/method tree.
//!
//! Field order here is output order. Sparse serialization: absent, false,
//! and empty values stay out of the JSON entirely, with two exceptions
//! (`PackageDoc::extra` and `Parameter::required` always appear).

use indexmap::IndexMap;
use serde::Serialize;

/// The full output document: package name → package record, in extraction
/// order.
pub type PackageIndex = IndexMap<String, PackageDoc>;

/// Methods of one module, in declaration order.
pub type ModuleDoc = IndexMap<String, MethodDoc>;

/// One distributable package with its size metrics and modules.
#[derive(Debug, Serialize)]
pub struct PackageDoc {
    /// Byte length of the uncompressed source file.
    pub size: u64,
    /// Gzipped size of the prebuilt minified artifact, offset-corrected.
    pub minified_size: u64,
    /// True for packages outside the default bundle.
    pub extra: bool,
    /// @dependency from the package block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,
    /// @description from the package block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub modules: IndexMap<String, ModuleDoc>,
}

/// A single documented method.
#[derive(Debug, Default, Serialize)]
pub struct MethodDoc {
    /// Declared with a `Class.` prefix.
    #[serde(skip_serializing_if = "is_false")]
    pub class_method: bool,
    /// Signature ended in a bare `...` parameter.
    #[serde(skip_serializing_if = "is_false")]
    pub accepts_unlimited_params: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    /// Source line of the block's opening marker, minus display padding.
    /// Absent only on alias records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    /// @returns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// @short
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// @extra
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// @set entries, blanks removed. Never `Some` and empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<Vec<String>>,
    /// @example entries. Never `Some` and empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    /// @alias target method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Set for the four HTML-escaping method names.
    #[serde(skip_serializing_if = "is_false")]
    pub escape_html: bool,
}

impl MethodDoc {
    /// An alias carries only the target and a generated short description;
    /// everything else is cleared even when the block populated it.
    pub fn alias_record(target: String) -> MethodDoc {
        MethodDoc {
            short: Some(format!("Alias for %{}%.", target)),
            alias: Some(target),
            ..MethodDoc::default()
        }
    }
}

/// One declared parameter of a method signature.
#[derive(Debug, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    /// Angle-bracket delimited (`<name>`) vs square (`[name]`).
    pub required: bool,
    /// Inferred from the default value; absent when there is no default or
    /// no pattern matched.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParamType>,
    /// Default text as displayed; string defaults carry inline monospace
    /// markup between the quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Default-value types the signature parser can infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Regexp,
    Null,
    Boolean,
    Object,
}

/// One usage example attached to a method.
#[derive(Debug, PartialEq, Serialize)]
pub struct Example {
    /// Built by multi-line accumulation (function body style).
    #[serde(skip_serializing_if = "is_false")]
    pub multi_line: bool,
    /// A leading `+` in the source requested result display.
    #[serde(skip_serializing_if = "is_false")]
    pub force_result: bool,
    /// Cleaned body; literal `\n` sequences separate lines, `_NL_` stands
    /// in for newline escapes that were inside quoted strings.
    pub html: String,
}

fn is_false(v: &bool) -> bool {
    !*v
}
