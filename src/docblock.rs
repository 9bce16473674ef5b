//! Doc-comment parsing for handler documentation.
//!
//! Handlers carry at most one raw doc comment, and the generated document only
//! needs three facts from it: the summary (first paragraph), the long description
//! (remaining paragraphs) and whether the handler is deprecated. Anything beyond
//! that — parameter tags, return tags, inline markup — is ignored.
//!
//! Parsing is fallible by contract. The document generator maps any failure to the
//! empty defaults rather than aborting the run, so a malformed comment degrades a
//! single operation's metadata and nothing else.

use crate::error::{Error, Result};

/// The parsed facts of one handler doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocBlock {
    /// First paragraph of the comment; empty when there is none
    pub summary: String,
    /// Remaining paragraphs, blank-line separated; empty when there are none
    pub description: String,
    /// Whether the comment carries a `@deprecated` tag
    pub deprecated: bool,
}

/// Parse a raw doc comment into a [`DocBlock`].
///
/// Accepts `/** ... */` block comments as well as `///` line comments; plain text
/// without comment markers is treated as already-stripped comment content.
///
/// # Errors
///
/// Returns an error if a block comment is left unterminated.
pub fn parse(raw: &str) -> Result<DocBlock> {
    let body = strip_markers(raw)?;

    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut deprecated = false;

    for line in body.lines() {
        let line = line.trim();

        if let Some(tag) = line.strip_prefix('@') {
            // Tag section: only the deprecation tag is meaningful here
            if tag == "deprecated" || tag.starts_with("deprecated ") {
                deprecated = true;
            }
            continue;
        }

        if line.is_empty() {
            if !paragraphs.last().map(|p| p.is_empty()).unwrap_or(true) {
                paragraphs.push(Vec::new());
            }
        } else {
            if paragraphs.is_empty() {
                paragraphs.push(Vec::new());
            }
            paragraphs.last_mut().unwrap().push(line);
        }
    }

    paragraphs.retain(|p| !p.is_empty());
    let mut joined = paragraphs.iter().map(|p| p.join(" "));

    Ok(DocBlock {
        summary: joined.next().unwrap_or_default(),
        description: joined.collect::<Vec<_>>().join("\n\n"),
        deprecated,
    })
}

/// Strip comment delimiters, leaving bare comment text.
fn strip_markers(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix("/*") {
        let body = rest
            .strip_suffix("*/")
            .ok_or_else(|| Error::DocBlockError("unterminated block comment".to_string()))?;

        let lines: Vec<String> = body
            .lines()
            .map(|line| {
                let line = line.trim_start();
                line.strip_prefix('*').unwrap_or(line).trim().to_string()
            })
            .collect();
        return Ok(lines.join("\n"));
    }

    let lines: Vec<String> = trimmed
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line
                .strip_prefix("///")
                .or_else(|| line.strip_prefix("//!"))
                .or_else(|| line.strip_prefix("//"))
                .unwrap_or(line);
            line.trim().to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_default() {
        let block = parse("").unwrap();
        assert_eq!(block, DocBlock::default());
    }

    #[test]
    fn test_single_line_block_comment() {
        let block = parse("/** Show a single user. */").unwrap();
        assert_eq!(block.summary, "Show a single user.");
        assert_eq!(block.description, "");
        assert!(!block.deprecated);
    }

    #[test]
    fn test_summary_and_description_paragraphs() {
        let raw = r#"/**
             * List all users.
             *
             * Returns every registered user,
             * paginated by the page query parameter.
             *
             * Results are cached for a minute.
             */"#;

        let block = parse(raw).unwrap();
        assert_eq!(block.summary, "List all users.");
        assert_eq!(
            block.description,
            "Returns every registered user, paginated by the page query parameter.\n\nResults are cached for a minute."
        );
    }

    #[test]
    fn test_deprecated_tag_is_detected() {
        let raw = r#"/**
             * Old endpoint.
             *
             * @deprecated use /v2/users instead
             */"#;

        let block = parse(raw).unwrap();
        assert_eq!(block.summary, "Old endpoint.");
        assert!(block.deprecated);
        // Tag lines never leak into the description
        assert!(!block.description.contains("deprecated"));
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let raw = r#"/**
             * Create a user.
             *
             * @param string $name
             * @return User
             */"#;

        let block = parse(raw).unwrap();
        assert_eq!(block.summary, "Create a user.");
        assert_eq!(block.description, "");
        assert!(!block.deprecated);
    }

    #[test]
    fn test_line_comment_style() {
        let raw = "/// Delete a user.\n///\n/// Irreversible.";
        let block = parse(raw).unwrap();
        assert_eq!(block.summary, "Delete a user.");
        assert_eq!(block.description, "Irreversible.");
    }

    #[test]
    fn test_unterminated_block_comment_is_an_error() {
        let result = parse("/** Show a user.");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unterminated"));
    }
}
