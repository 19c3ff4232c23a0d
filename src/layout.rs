//! Library checkout layout and release version resolution.
//!
//! The tool runs from the checkout root: annotated sources under `lib/`,
//! locale definitions under `lib/locales/`, prebuilt minified artifacts under
//! `release/<version>/precompiled/minified/`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Glob pattern covering every locale definition file.
pub const LOCALES_PATTERN: &str = "lib/locales/*";

/// Where the synthetic locale bundle is written, named so it scans like any
/// other package source.
pub const LOCALE_BUNDLE: &str = "lib/date_locales.js";

const MANIFEST: &str = "package.json";

/// Annotated source file for one package.
pub fn lib_source(package: &str) -> PathBuf {
    PathBuf::from(format!("lib/{package}.js"))
}

/// Prebuilt minified artifact for one package at the released version.
pub fn minified_artifact(version: &str, package: &str) -> PathBuf {
    PathBuf::from(format!(
        "release/{version}/precompiled/minified/{package}.js"
    ))
}

#[derive(Deserialize)]
struct Manifest {
    version: String,
}

/// Read the release version from the project manifest. One trailing `.0`
/// segment is dropped to match the release directory naming.
pub fn resolve_version() -> Result<String> {
    let raw = fs::read_to_string(MANIFEST).with_context(|| format!("failed to read {MANIFEST}"))?;
    let manifest: Manifest =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {MANIFEST}"))?;
    Ok(trim_patch_zero(manifest.version))
}

fn trim_patch_zero(version: String) -> String {
    match version.strip_suffix(".0") {
        Some(stem) => stem.to_string(),
        None => version,
    }
}
