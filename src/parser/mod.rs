//! Parsing of annotation blocks into package documentation.

pub mod block;
pub mod classify;
pub mod example;
pub mod signature;

use anyhow::Result;

use crate::model::PackageDoc;
use classify::{classify_block, ParseContext};

/// Run every annotation block of one source file into the package. The module
/// cursor starts empty here, so it never carries over from another file.
pub fn extract_source(source: &str, package: &mut PackageDoc) -> Result<()> {
    let mut ctx = ParseContext::default();
    for block in block::scan_blocks(source) {
        classify_block(&block, package, &mut ctx)?;
    }
    Ok(())
}
