//! Output document rendering.
//!
//! The whole index is serialized as a single `LibraryPackages = {…};`
//! assignment statement for the documentation site to load as a script.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::PackageIndex;

const IDENTIFIER: &str = "LibraryPackages";

/// Render the assignment statement, compact JSON, newline-terminated.
pub fn render(packages: &PackageIndex) -> Result<String> {
    let json = serde_json::to_string(packages).context("failed to serialize package index")?;
    Ok(format!("{IDENTIFIER} = {json};\n"))
}

/// Write the rendered document, replacing any previous run's output. Parent
/// directories are not created.
pub fn write(path: &Path, packages: &PackageIndex) -> Result<()> {
    let doc = render(packages)?;
    fs::write(path, doc).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MethodDoc, PackageDoc};

    #[test]
    fn empty_index_renders_as_an_empty_object() {
        let out = render(&PackageIndex::default()).unwrap();
        assert_eq!(out, "LibraryPackages = {};\n");
    }

    #[test]
    fn package_fields_keep_declaration_order() {
        let mut packages = PackageIndex::default();
        let mut pkg = PackageDoc {
            size: 120,
            minified_size: 40,
            extra: true,
            dependency: Some("core".into()),
            description: None,
            modules: Default::default(),
        };
        pkg.modules.entry("Array".into()).or_default().insert(
            "sum".into(),
            MethodDoc {
                line: Some(3),
                ..MethodDoc::default()
            },
        );
        packages.insert("array".into(), pkg);

        let out = render(&packages).unwrap();
        assert_eq!(
            out,
            "LibraryPackages = {\"array\":{\"size\":120,\"minified_size\":40,\
             \"extra\":true,\"dependency\":\"core\",\"modules\":{\"Array\":\
             {\"sum\":{\"line\":3}}}}};\n"
        );
    }

    #[test]
    fn write_replaces_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.js");

        let mut packages = PackageIndex::default();
        packages.insert(
            "array".into(),
            PackageDoc {
                size: 1,
                minified_size: 1,
                extra: false,
                dependency: None,
                description: None,
                modules: Default::default(),
            },
        );
        write(&path, &packages).unwrap();
        write(&path, &PackageIndex::default()).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "LibraryPackages = {};\n");
    }
}
