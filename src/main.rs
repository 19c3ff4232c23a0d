//! pkgdoc generates the packages document from annotated library sources.
//!
//! Runs from the library checkout root: scans the `/*** … ***/` annotation
//! blocks of every package source under `lib/`, measures raw and gzipped
//! package sizes, bundles the locale files into a synthetic package, and
//! writes the whole tree as a single `LibraryPackages = {…};` statement for
//! the documentation site.

mod layout;
mod locales;
mod model;
mod output;
mod parser;
mod sizes;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use model::{PackageDoc, PackageIndex};

/// Extraction order, which is also the key order of the output document. The
/// locale bundle rides between the date packages it belongs with.
const PACKAGES: [&str; 13] = [
    "core",
    "es5",
    "array",
    "object",
    "date",
    "date_locales",
    "date_ranges",
    "function",
    "number",
    "regexp",
    "string",
    "inflections",
    "language",
];

/// Packages in the default distribution; everything else is marked `extra`.
const DEFAULT_PACKAGES: [&str; 10] = [
    "core", "es5", "array", "object", "date", "date_ranges", "function", "number", "regexp",
    "string",
];

#[derive(Parser)]
#[command(
    name = "pkgdoc",
    about = "Generate the packages document from annotated library sources"
)]
struct Cli {
    /// Destination path for the generated document
    #[arg(default_value = "docs/packages.js")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    locales::create_bundle()?;
    let version = layout::resolve_version()?;

    let mut packages = PackageIndex::default();
    for package in PACKAGES {
        let doc = extract_package(package, &version)
            .with_context(|| format!("failed to extract package {package}"))?;
        packages.insert(package.to_string(), doc);
    }

    locales::remove_bundle()?;
    output::write(&cli.out, &packages)?;
    println!("Done!");
    Ok(())
}

/// Build one package record: sizes first, then every annotation block of its
/// source file in order.
fn extract_package(package: &str, version: &str) -> Result<PackageDoc> {
    let mut doc = PackageDoc {
        size: sizes::source_size(package)?,
        minified_size: sizes::minified_size(version, package)?,
        extra: !DEFAULT_PACKAGES.contains(&package),
        dependency: None,
        description: None,
        modules: Default::default(),
    };

    let path = layout::lib_source(package);
    let source =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    parser::extract_source(&source, &mut doc)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_packages_are_a_subset_of_the_extraction_order() {
        for package in DEFAULT_PACKAGES {
            assert!(PACKAGES.contains(&package));
        }
    }

    #[test]
    fn locale_bundle_and_addons_are_extra() {
        for package in ["date_locales", "inflections", "language"] {
            assert!(PACKAGES.contains(&package));
            assert!(!DEFAULT_PACKAGES.contains(&package));
        }
    }
}
