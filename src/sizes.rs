//! Package size measurement.
//!
//! Each package reports two numbers: the byte size of its annotated source
//! and the gzipped byte size of its prebuilt minified artifact.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::layout;

/// Gzipped sizes are offset against the combined-distribution measurement;
/// `regexp` is reported unadjusted.
const GZIP_SIZE_OFFSET: u64 = 190;

/// Byte size of a package's annotated source file.
pub fn source_size(package: &str) -> Result<u64> {
    let path = layout::lib_source(package);
    let meta = fs::metadata(&path).with_context(|| format!("failed to stat {}", path.display()))?;
    Ok(meta.len())
}

/// Gzipped byte size of a package's prebuilt minified artifact.
pub fn minified_size(version: &str, package: &str) -> Result<u64> {
    let path = layout::minified_artifact(version, package);
    let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let compressed =
        gzip_best(&bytes).with_context(|| format!("failed to compress {}", path.display()))?;
    Ok(adjusted(compressed.len() as u64, package))
}

fn gzip_best(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    encoder.finish()
}

fn adjusted(size: u64, package: &str) -> u64 {
    if package == "regexp" {
        size
    } else {
        size.saturating_sub(GZIP_SIZE_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_best_produces_a_gzip_stream() {
        let out = gzip_best(b"var x = 1;\n").unwrap();
        assert_eq!(&out[..2], &[0x1f, 0x8b]);
        assert!(!out.is_empty());
    }

    #[test]
    fn gzip_best_is_deterministic() {
        let body = b"function add(a, b) { return a + b; }\n".repeat(64);
        assert_eq!(gzip_best(&body).unwrap(), gzip_best(&body).unwrap());
    }

    #[test]
    fn every_package_but_regexp_gets_the_offset() {
        assert_eq!(adjusted(1000, "array"), 810);
        assert_eq!(adjusted(1000, "date"), 810);
        assert_eq!(adjusted(1000, "regexp"), 1000);
    }

    #[test]
    fn offset_saturates_at_zero() {
        assert_eq!(adjusted(120, "array"), 0);
    }
}
