//! Synthetic locale bundle.
//!
//! Locale definitions ship as separate files under `lib/locales/`. For
//! extraction they are concatenated into one scratch source behind a package
//! banner, scanned like any other package, and removed again afterwards.

use std::fs;

use anyhow::{Context, Result};
use glob::glob;

use crate::layout;

const BANNER: &str = "\
  /***
   * @package Date Locales
   * @dependency date
   * @description Locale definitions French (fr), Italian (it), Spanish (es), Portuguese (pt), German (de), Russian (ru), Polish (pl), Swedish (sv), Japanese (ja), Korean (ko), Simplified Chinese (zh-CN), and Traditional Chinese (zh-TW). Locales can also be included individually. See @date_locales for more.
   *
   ***/
";

/// Write the bundle: the banner followed by every locale file in alphabetical
/// order. A missing or empty locale directory yields a banner-only bundle.
pub fn create_bundle() -> Result<()> {
    let mut bundle = String::from(BANNER);
    for entry in glob(layout::LOCALES_PATTERN)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        bundle.push_str(&text);
    }
    fs::write(layout::LOCALE_BUNDLE, bundle)
        .with_context(|| format!("failed to write {}", layout::LOCALE_BUNDLE))
}

/// Delete the scratch bundle once extraction is done.
pub fn remove_bundle() -> Result<()> {
    fs::remove_file(layout::LOCALE_BUNDLE)
        .with_context(|| format!("failed to remove {}", layout::LOCALE_BUNDLE))
}
