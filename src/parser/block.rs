//! Comment-block walker and tag field extraction.
//!
//! Source files carry `/*** … ***/` annotation blocks. The walker splits a
//! file into those blocks line by line; `Block` then answers tag lookups
//! (`@tag value` single-line fields, and multi-line fields delimited by
//! asterisk padding lines).

// -- Walker -------------------------------------------------------------------

/// One delimited comment block.
#[derive(Debug)]
pub struct Block {
    /// Accumulated text, marker line included, newline-terminated lines.
    pub text: String,
    /// 1-based source line where this block's buffer started.
    pub line: u64,
}

/// Split a source file into comment blocks.
///
/// A line containing `/***` resets the buffer and records the line number; any
/// other line containing `***` finalizes the buffered block and starts a new
/// buffer at the same line. Every line joins the open buffer, so marker lines
/// are part of the accumulated text. Text never closed by a `***` line is
/// dropped.
pub fn scan_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut buffer = String::new();
    let mut start_line: u64 = 1;

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx as u64 + 1;
        if line.contains("/***") {
            buffer.clear();
            start_line = lineno;
        } else if line.contains("***") {
            blocks.push(Block {
                text: std::mem::take(&mut buffer),
                line: start_line,
            });
            start_line = lineno;
        }
        buffer.push_str(line);
        buffer.push('\n');
    }

    blocks
}

// -- Field extraction ---------------------------------------------------------

impl Block {
    /// True when the block holds nothing but whitespace (ignored entirely).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Single-line field: the rest of the first line containing `@tag `.
    /// Absence is the only failure signal; malformed tags never error.
    pub fn field(&self, tag: &str) -> Option<String> {
        let marker = format!("@{} ", tag);
        self.text
            .lines()
            .find_map(|line| line.find(&marker).map(|pos| line[pos + marker.len()..].to_string()))
    }

    /// Multi-line field: the lines between the `@tag` line and the next
    /// asterisk padding line, leading padding stripped.
    ///
    /// The tag line itself must carry nothing but padding after the tag (a
    /// prose mention of `@tag` mid-sentence does not open a field). Delimiter
    /// lines directly after the tag are skipped; a run that never reaches a
    /// closing delimiter yields `None`, same as an absent tag. The closing
    /// delimiter may be the block's final line with no trailing newline.
    /// Blank lines without an asterisk stay in the body.
    pub fn multiline_field(&self, tag: &str) -> Option<Vec<String>> {
        let marker = format!("@{}", tag);
        let mut lines = self.text.lines();

        loop {
            let line = lines.next()?;
            if let Some(pos) = line.find(&marker) {
                let rest = &line[pos + marker.len()..];
                if is_padding(rest) {
                    break;
                }
            }
        }

        let mut body = Vec::new();
        let mut in_body = false;
        for line in lines {
            if is_delimiter(line) {
                if in_body {
                    return Some(body);
                }
                continue;
            }
            in_body = true;
            body.push(strip_padding(line).to_string());
        }
        None
    }
}

/// Strip the leading whitespace/asterisk padding comment lines carry.
pub(crate) fn strip_padding(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || c == '*')
}

/// Whitespace and asterisks only (empty included).
fn is_padding(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '*')
}

/// A padding line carrying at least one asterisk closes a multi-line field.
/// Lines without an asterisk are body content even when blank, so downstream
/// parsers see and filter them.
fn is_delimiter(line: &str) -> bool {
    line.contains('*') && is_padding(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
var x = 1;
  /***
   * @method first()
   * @returns Object
   ***/
  function first() {}
  /***
   * @method last()
   ***/
  function last() {}
";

    #[test]
    fn scan_splits_on_markers() {
        let blocks = scan_blocks(SOURCE);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].text.contains("@method first()"));
        assert!(blocks[1].text.contains("@method last()"));
    }

    #[test]
    fn scan_records_opening_line_numbers() {
        let blocks = scan_blocks(SOURCE);
        assert_eq!(blocks[0].line, 2);
        assert_eq!(blocks[1].line, 7);
    }

    #[test]
    fn open_marker_line_is_part_of_block_text() {
        let blocks = scan_blocks(SOURCE);
        assert!(blocks[0].text.starts_with("  /***\n"));
    }

    #[test]
    fn close_marker_starts_the_next_buffer() {
        // The ***/ line and the code after it belong to the next (unclosed,
        // therefore discarded) buffer, never to the finished block.
        let blocks = scan_blocks(SOURCE);
        assert!(!blocks[0].text.contains("***/"));
        assert!(!blocks[0].text.contains("function first"));
    }

    #[test]
    fn trailing_text_after_last_close_is_dropped() {
        let blocks = scan_blocks("  /***\n   * @method a()\n   ***/\nleftover\n");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn field_returns_rest_of_line() {
        let blocks = scan_blocks(SOURCE);
        assert_eq!(blocks[0].field("method").as_deref(), Some("first()"));
        assert_eq!(blocks[0].field("returns").as_deref(), Some("Object"));
    }

    #[test]
    fn field_absent_when_tag_missing() {
        let blocks = scan_blocks(SOURCE);
        assert_eq!(blocks[1].field("returns"), None);
    }

    fn block(text: &str) -> Block {
        Block {
            text: text.to_string(),
            line: 1,
        }
    }

    #[test]
    fn multiline_field_strips_padding_and_stops_at_delimiter() {
        let b = block(
            "  /***\n   * @example\n   *\n   *   [1,2].sum()\n   *   [3].sum()\n   *\n",
        );
        let lines = b.multiline_field("example").unwrap();
        assert_eq!(lines, vec!["[1,2].sum()", "[3].sum()"]);
    }

    #[test]
    fn multiline_field_without_leading_blank_line() {
        let b = block("   * @set\n   *   Monday\n   *   Tuesday\n   *\n");
        let lines = b.multiline_field("set").unwrap();
        assert_eq!(lines, vec!["Monday", "Tuesday"]);
    }

    #[test]
    fn multiline_field_unterminated_is_absent() {
        let b = block("   * @example\n   *\n   *   [1,2].sum()\n");
        assert_eq!(b.multiline_field("example"), None);
    }

    #[test]
    fn multiline_field_tolerates_missing_trailing_newline() {
        let b = block("   * @example\n   *\n   *   [1,2].sum()\n   *");
        let lines = b.multiline_field("example").unwrap();
        assert_eq!(lines, vec!["[1,2].sum()"]);
    }

    #[test]
    fn multiline_field_keeps_interior_blanks_out_of_the_body() {
        // The first delimiter after content closes the field.
        let b = block("   * @example\n   *\n   *   a()\n   *\n   *   b()\n   *\n");
        let lines = b.multiline_field("example").unwrap();
        assert_eq!(lines, vec!["a()"]);
    }

    #[test]
    fn multiline_field_keeps_asteriskless_blank_lines_in_the_body() {
        let b = block("   * @set\n   *\n   *   Monday\n\n   *   Tuesday\n   *\n");
        let lines = b.multiline_field("set").unwrap();
        assert_eq!(lines, vec!["Monday", "", "Tuesday"]);
    }

    #[test]
    fn multiline_field_ignores_prose_mentions() {
        let b = block(
            "   * @short See the @example section below.\n   * @example\n   *\n   *   a()\n   *\n",
        );
        let lines = b.multiline_field("example").unwrap();
        assert_eq!(lines, vec!["a()"]);
    }

    #[test]
    fn multiline_field_absent_when_tag_missing() {
        let b = block("   * @short Nothing else.\n");
        assert_eq!(b.multiline_field("set"), None);
    }

    #[test]
    fn strip_padding_removes_whitespace_and_asterisks() {
        assert_eq!(strip_padding("   *   [1,2].sum()"), "[1,2].sum()");
        assert_eq!(strip_padding("   *"), "");
        assert_eq!(strip_padding("plain"), "plain");
    }
}
