//! Frontmatter parser for command files
//!
//! A block is only recognised when the document opens with a `---` line at
//! byte 0 and a later line of exactly `---` is followed by a newline. The
//! first such closing line ends the block. Anything else is treated as a
//! plain template with no metadata.

use once_cell::sync::Lazy;
use plugkit_types::CommandFrontmatter;
use regex::Regex;

/// Opening delimiter, optional block lines, closing delimiter, body.
#[allow(clippy::expect_used)]
static FRONTMATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^---\n(?:([\s\S]*?)\n)??---\n([\s\S]*)$").expect("frontmatter pattern is valid")
});

/// Split a command document into its frontmatter and trimmed body.
///
/// Never fails: a missing or malformed block yields empty metadata and the
/// whole document (trimmed) as the body.
#[must_use]
pub fn parse_frontmatter(content: &str) -> (CommandFrontmatter, String) {
    let Some(captures) = FRONTMATTER_RE.captures(content) else {
        return (CommandFrontmatter::default(), content.trim().to_string());
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    (parse_block(block), body.trim().to_string())
}

/// Decode flat `key: value` lines. Later duplicates win.
fn parse_block(block: &str) -> CommandFrontmatter {
    let mut frontmatter = CommandFrontmatter::default();

    for line in block.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "description" => frontmatter.description = Some(value.to_string()),
            "agent" => frontmatter.agent = Some(value.to_string()),
            "model" => frontmatter.model = Some(value.to_string()),
            "subtask" => frontmatter.subtask = Some(value == "true"),
            _ => {}
        }
    }

    frontmatter
}
