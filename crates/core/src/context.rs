//! Prompt-context assembly.
//!
//! Flattens a project and its files into the single text block that is
//! sent to the generation API alongside the user prompt. The block has
//! no parsing contract of its own.

/// Per-file content cap. Anything beyond this is cut and marked.
const MAX_FILE_CHARS: usize = 500;

/// A (path, content) pair as read from the file store.
#[derive(Debug, Clone)]
pub struct ContextFile {
    pub path: String,
    pub content: String,
}

/// Build the prompt-context blob for a project.
///
/// Starts with the project name and description, then each file's path
/// as a heading followed by up to the first [`MAX_FILE_CHARS`]
/// characters of its content, with a truncation marker when the content
/// was cut. File order follows the input slice (callers supply files
/// ordered by path).
pub fn build_project_context(name: &str, description: &str, files: &[ContextFile]) -> String {
    let mut context = format!("Project: {name}\nDescription: {description}\n\nExisting files:\n");

    for file in files {
        context.push_str(&format!("\n--- {} ---\n", file.path));

        // Character-counted, so multi-byte content never splits mid-char.
        let mut chars = file.content.chars();
        let head: String = chars.by_ref().take(MAX_FILE_CHARS).collect();
        context.push_str(&head);
        if chars.next().is_some() {
            context.push_str("\n... (truncated)");
        }
        context.push('\n');
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> ContextFile {
        ContextFile {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn header_has_name_and_description() {
        let ctx = build_project_context("Demo", "A demo site", &[]);
        assert!(ctx.starts_with("Project: Demo\nDescription: A demo site\n"));
        assert!(ctx.contains("Existing files:"));
    }

    #[test]
    fn short_content_is_not_truncated() {
        let ctx = build_project_context("P", "", &[file("src/App.tsx", "short")]);
        assert!(ctx.contains("--- src/App.tsx ---"));
        assert!(ctx.contains("short"));
        assert!(!ctx.contains("(truncated)"));
    }

    #[test]
    fn long_content_is_cut_at_500_chars() {
        let long = "x".repeat(501);
        let ctx = build_project_context("P", "", &[file("a.tsx", &long)]);
        assert!(ctx.contains(&"x".repeat(500)));
        assert!(!ctx.contains(&"x".repeat(501)));
        assert!(ctx.contains("... (truncated)"));
    }

    #[test]
    fn exactly_500_chars_is_kept_whole() {
        let exact = "y".repeat(500);
        let ctx = build_project_context("P", "", &[file("a.tsx", &exact)]);
        assert!(ctx.contains(&exact));
        assert!(!ctx.contains("(truncated)"));
    }

    #[test]
    fn multibyte_content_counts_chars_not_bytes() {
        // 500 Cyrillic chars are 1000 bytes; all of them must survive.
        let cyr = "ж".repeat(500);
        let ctx = build_project_context("P", "", &[file("a.tsx", &cyr)]);
        assert!(ctx.contains(&cyr));
        assert!(!ctx.contains("(truncated)"));
    }

    #[test]
    fn files_keep_input_order() {
        let ctx = build_project_context(
            "P",
            "",
            &[file("a.tsx", "1"), file("b.tsx", "2"), file("c.tsx", "3")],
        );
        let a = ctx.find("--- a.tsx ---").unwrap();
        let b = ctx.find("--- b.tsx ---").unwrap();
        let c = ctx.find("--- c.tsx ---").unwrap();
        assert!(a < b && b < c);
    }
}
