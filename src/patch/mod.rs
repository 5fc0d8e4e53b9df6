//! Text-patch pipeline for the generated project files.
//!
//! The project-level `urls.py` and `settings.py` come out of the generator
//! in a stock form; this module transforms them into a working configuration
//! through an ordered sequence of named pattern-match-and-replace steps.
//! Order matters: later steps assume earlier substitutions already happened
//! (the docstring header is stripped before anything else is anchored, and
//! the app mounts are inserted into a list an earlier step already touched).
//!
//! Every anchored step asserts that its anchor text was found and fails with
//! a patch error naming the step and file otherwise. This replaces the
//! original silent no-op on mismatch, which left projects in an inconsistent
//! but not visibly broken state.
//!
//! The only unanchored steps are the locale/timezone overrides, which are
//! replace-all and may legitimately touch zero occurrences.

pub mod settings;
pub mod urls;

use crate::error::{DjstartError, Result};
use crate::fs::atomic_write_file;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Leading documentation block: shortest span between two triple-quote
/// markers, plus up to 5 trailing line breaks.
static DOC_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)""".*?"""\n{1,5}"#).expect("doc header regex is valid")
});

/// Build the error for a step whose anchor was not found.
pub(crate) fn step_error(step: &str, anchor: &str, file: &str) -> DjstartError {
    DjstartError::PatchError(format!(
        "step '{}' found no match for {} in {}: \
         the generator output does not have the expected shape",
        step, anchor, file
    ))
}

/// Step `strip-doc-header`: remove the generator's leading docstring.
pub(crate) fn strip_doc_header(text: &str, file: &str) -> Result<String> {
    match DOC_HEADER_RE.find(text) {
        Some(m) => Ok(format!("{}{}", &text[..m.start()], &text[m.end()..])),
        None => Err(step_error("strip-doc-header", "a triple-quoted header", file)),
    }
}

/// Replace the first occurrence of a literal anchor, erroring if absent.
pub(crate) fn replace_first_literal(
    text: &str,
    anchor: &str,
    replacement: &str,
    step: &str,
    file: &str,
) -> Result<String> {
    match text.find(anchor) {
        Some(idx) => Ok(format!(
            "{}{}{}",
            &text[..idx],
            replacement,
            &text[idx + anchor.len()..]
        )),
        None => Err(step_error(step, &format!("`{}`", anchor.escape_debug()), file)),
    }
}

/// Find the index of the `]` closing the list opened by the `[` at
/// `open_idx`, counting balanced brackets. Returns None if the text runs
/// out before the list closes.
pub(crate) fn list_close_index(text: &str, open_idx: usize) -> Option<usize> {
    debug_assert_eq!(&text[open_idx..open_idx + 1], "[");

    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open_idx..].iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_idx + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Read a generated file, run a patch function over its whole text, and
/// write the result back atomically.
///
/// A missing file almost always means the generator invocation failed (or
/// was skipped with --keep-going), so the error says so instead of a bare
/// not-found.
pub fn patch_file<P, F>(path: P, label: &str, patch: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&str) -> Result<String>,
{
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|e| {
        DjstartError::PatchError(format!(
            "cannot read {} at '{}': {} (did the project generator run successfully?)",
            label,
            path.display(),
            e
        ))
    })?;

    let patched = patch(&text)?;
    atomic_write_file(path, &patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_doc_header_removes_docstring_and_trailing_newlines() {
        let text = "\"\"\"\nGenerated header.\n\"\"\"\n\nfrom pathlib import Path\n";
        let stripped = strip_doc_header(text, "settings.py").unwrap();
        assert_eq!(stripped, "from pathlib import Path\n");
    }

    #[test]
    fn strip_doc_header_is_non_greedy() {
        // A second triple-quoted block later in the file must survive.
        let text = "\"\"\"header\"\"\"\nimport os\n\"\"\"keep me\"\"\"\n";
        let stripped = strip_doc_header(text, "urls.py").unwrap();
        assert!(stripped.starts_with("import os"));
        assert!(stripped.contains("keep me"));
    }

    #[test]
    fn strip_doc_header_errors_when_missing() {
        let err = strip_doc_header("import os\n", "urls.py").unwrap_err();
        assert!(err.to_string().contains("strip-doc-header"));
        assert!(err.to_string().contains("urls.py"));
    }

    #[test]
    fn replace_first_literal_replaces_only_first() {
        let out =
            replace_first_literal("a b a", "a", "X", "test-step", "test.py").unwrap();
        assert_eq!(out, "X b a");
    }

    #[test]
    fn replace_first_literal_errors_name_the_step() {
        let err = replace_first_literal("nothing here", "import path\n", "x", "inject-home-view", "urls.py")
            .unwrap_err();
        assert!(err.to_string().contains("inject-home-view"));
        assert!(err.to_string().contains("urls.py"));
    }

    #[test]
    fn list_close_index_skips_nested_lists() {
        let text = "urlpatterns = [\n    path('', x, name=[1, [2]]),\n]\n";
        let open = text.find('[').unwrap();
        let close = list_close_index(text, open).unwrap();
        assert_eq!(&text[close..close + 1], "]");
        assert_eq!(close, text.rfind(']').unwrap());
    }

    #[test]
    fn list_close_index_none_when_unbalanced() {
        let text = "urlpatterns = [\n    path('admin/'),\n";
        let open = text.find('[').unwrap();
        assert!(list_close_index(text, open).is_none());
    }

    #[test]
    fn patch_file_reads_patches_and_writes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("urls.py");
        std::fs::write(&path, "before").unwrap();

        patch_file(&path, "project urls.py", |text| {
            assert_eq!(text, "before");
            Ok("after".to_string())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "after");
    }

    #[test]
    fn patch_file_missing_file_mentions_generator() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = patch_file(temp_dir.path().join("urls.py"), "project urls.py", |t| {
            Ok(t.to_string())
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("project urls.py"));
        assert!(err.to_string().contains("generator"));
    }
}
