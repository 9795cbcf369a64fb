//! Editing front end - in-place file rewrites and the stdin/stdout filter
//!
//! In-place mode reads a target fully, injects anchors and writes the
//! result back to the same path (no backup, no atomic rename). Stream
//! mode does the same between arbitrary reader and writer, which is how
//! the CLI wires up stdin/stdout.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::inject::inject_anchors;
use crate::rules::RuleSet;

/// Rewrite a single file in place, returning the number of anchors inserted.
///
/// With `dry_run` the rewritten content goes to stdout and the file is left
/// untouched. An unchanged file is not rewritten.
pub fn process_file(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (rewritten, inserted) = inject_anchors(&content, rules);

    if dry_run {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(rewritten.as_bytes())
            .context("Failed to write to standard output")?;
        out.flush().context("Failed to flush standard output")?;
    } else if inserted > 0 {
        fs::write(path, &rewritten)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(inserted)
}

/// Filter `input` to `output`, returning the number of anchors inserted.
pub fn process_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    rules: &RuleSet,
) -> Result<usize> {
    let mut content = String::new();
    input
        .read_to_string(&mut content)
        .context("Failed to read standard input")?;

    let (rewritten, inserted) = inject_anchors(&content, rules);

    output
        .write_all(rewritten.as_bytes())
        .context("Failed to write to standard output")?;
    output.flush().context("Failed to flush standard output")?;

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::HeadingRule;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn set(pairs: &[(&str, &str)]) -> RuleSet {
        RuleSet::new(pairs.iter().map(|(p, id)| HeadingRule::new(p, id))).unwrap()
    }

    #[test]
    fn test_process_file_rewrites_in_place() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("api.md");
        fs::write(&path, "### merge_insertion.T\nbody\n").unwrap();

        let inserted = process_file(&path, RuleSet::defaults(), false).unwrap();
        assert_eq!(inserted, 1);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "<a id=\"merge_insertion.T\"></a>\n\n### merge_insertion.T\nbody\n"
        );
    }

    #[test]
    fn test_process_file_no_match_leaves_file_alone() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("notes.md");
        fs::write(&path, "nothing relevant\n").unwrap();

        let inserted = process_file(&path, RuleSet::defaults(), false).unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nothing relevant\n");
    }

    #[test]
    fn test_process_file_dry_run_does_not_modify() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("api.md");
        let original = "### merge_insertion.Comparator\n";
        fs::write(&path, original).unwrap();

        let inserted = process_file(&path, RuleSet::defaults(), true).unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_process_file_missing_target_fails_with_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.md");

        let err = process_file(&path, RuleSet::defaults(), false).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_process_stream_filters() {
        let rules = set(&[("### h", "h")]);
        let mut out = Vec::new();

        let inserted =
            process_stream(Cursor::new("### h\nrest\n"), &mut out, &rules).unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<a id=\"h\"></a>\n\n### h\nrest\n"
        );
    }

    #[test]
    fn test_process_stream_identity_without_matches() {
        let rules = set(&[("### h", "h")]);
        let mut out = Vec::new();

        let inserted = process_stream(Cursor::new("plain\n"), &mut out, &rules).unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "plain\n");
    }
}
