//! Lightweight note rendering.
//!
//! Booking notes arrive as plain text using a handful of markdown-like
//! conventions (headings, bullets, numbered items, inline styling). The
//! functions here turn that text into an ordered list of display blocks a
//! UI layer can render directly. Rendering is pure and total: any input
//! produces a block list, and empty input produces an empty one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One renderable unit derived from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: usize, span: InlineSpan },
    Text { span: InlineSpan },
    LineBreak,
}

/// Inline-formatted text carried by a block.
///
/// The markup embeds the tags produced by the styling conventions
/// (`<strong>`, `<em>`, `<del>`, `<code>`). The original text is
/// entity-escaped before any convention is applied, so the five inserted
/// tags are the only markup the string can contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineSpan {
    pub markup: String,
}

impl InlineSpan {
    fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

static HASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+").expect("hash run pattern"));
static HASH_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*#+").expect("hash strip pattern"));
static NUMBERED_SPACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("spaced numbered pattern"));
static NUMBERED_UNSPACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\w").expect("unspaced numbered pattern"));
static NUMBERED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbered prefix pattern"));

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static UNDERSCORE_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.*?)__").expect("underscore italic pattern"));
static STRIKETHROUGH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--(.*?)--").expect("strikethrough pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));

/// Render note text into display blocks.
///
/// Lines are classified independently and in reading order; lines that turn
/// out to be degenerate bullet artifacts are dropped entirely.
pub fn render(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(Block::LineBreak);
    }

    // Headings are deliberately permissive: any run of `#` marks the line,
    // wherever it sits, and the first run decides the level.
    if let Some(run) = HASH_RUN.find(line) {
        let level = run.len();
        let content = HASH_STRIP.replace(line, "");
        return Some(Block::Heading {
            level,
            span: format_inline(content.trim()),
        });
    }

    if let Some(rest) = strip_bullet_marker(trimmed) {
        let rest = rest.trim();
        // Artifacts like a bare `-`, `--`, or `•` after the marker are
        // dropped without emitting a break or an empty paragraph.
        if rest.is_empty() || matches!(rest, "-" | "--" | "•") {
            return None;
        }
        return Some(Block::Text {
            span: format_inline(rest),
        });
    }

    if NUMBERED_SPACED.is_match(trimmed) || NUMBERED_UNSPACED.is_match(trimmed) {
        let rest = NUMBERED_PREFIX.replace(trimmed, "");
        return Some(Block::Text {
            span: format_inline(rest.trim()),
        });
    }

    Some(Block::Text {
        span: format_inline(trimmed),
    })
}

fn strip_bullet_marker(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix('•')
        .or_else(|| trimmed.strip_prefix('-'))
        .map(str::trim_start)
}

/// Apply the five inline styling conventions to a line's text.
///
/// The substitutions run as a strict sequential pipeline: the output of one
/// rule is the input of the next, so markup inserted by an earlier rule can
/// itself be matched by a later one. Bold runs before the single-asterisk
/// italic rule so `**x**` is never parsed as nested italics. Existing note
/// content depends on this ordering; do not reorder or fuse the passes.
pub fn format_inline(text: &str) -> InlineSpan {
    if text.is_empty() {
        return InlineSpan::new("");
    }

    let escaped = html_escape::encode_text(text);
    let bolded = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let underscored = UNDERSCORE_ITALIC.replace_all(&bolded, "<em>$1</em>");
    let asterisked = single_asterisk_italic(&underscored);
    let struck = STRIKETHROUGH.replace_all(&asterisked, "<del>$1</del>");
    let coded = INLINE_CODE.replace_all(&struck, "<code>$1</code>");

    InlineSpan::new(coded.into_owned())
}

/// Italicise `*text*` spans whose delimiters are not adjacent to another
/// asterisk on either side.
///
/// The regex crate has no lookaround, so lone asterisks are located by hand
/// and paired left to right; pairing consecutive lone positions reproduces
/// the non-greedy nearest-closing-delimiter behaviour.
fn single_asterisk_italic(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut lone = Vec::new();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'*' {
            continue;
        }
        let prev_is_star = index > 0 && bytes[index - 1] == b'*';
        let next_is_star = index + 1 < bytes.len() && bytes[index + 1] == b'*';
        if !prev_is_star && !next_is_star {
            lone.push(index);
        }
    }

    if lone.len() < 2 {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    for pair in lone.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        output.push_str(&input[cursor..open]);
        output.push_str("<em>");
        output.push_str(&input[open + 1..close]);
        output.push_str("</em>");
        cursor = close + 1;
    }
    output.push_str(&input[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_markup(block: &Block) -> &str {
        match block {
            Block::Text { span } => span.markup.as_str(),
            other => panic!("expected text block, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_renders_to_nothing() {
        assert!(render("").is_empty());
    }

    #[test]
    fn blank_lines_emit_one_break_each() {
        let blocks = render("   \n\t\n");
        assert_eq!(blocks, vec![Block::LineBreak, Block::LineBreak]);
    }

    #[test]
    fn leading_hash_run_becomes_heading() {
        let blocks = render("# Hi");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 1,
                span: InlineSpan::new("Hi"),
            }]
        );
    }

    #[test]
    fn mid_line_hash_run_still_classifies_as_heading() {
        let blocks = render("Hi ### there");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 3,
                span: InlineSpan::new("Hi there"),
            }]
        );
    }

    #[test]
    fn heading_level_comes_from_first_run() {
        let blocks = render("## Title # trailing");
        match &blocks[0] {
            Block::Heading { level, .. } => assert_eq!(*level, 2),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_bullets_are_omitted_entirely() {
        for input in ["- ", "-", "--", "• ", "•", "---", "- -", "- --"] {
            assert!(render(input).is_empty(), "input {input:?} should be dropped");
        }
    }

    #[test]
    fn bullet_content_becomes_text_block() {
        let blocks = render("• Visit the site\n- Check budget");
        assert_eq!(blocks.len(), 2);
        assert_eq!(text_markup(&blocks[0]), "Visit the site");
        assert_eq!(text_markup(&blocks[1]), "Check budget");
    }

    #[test]
    fn numbered_items_strip_their_prefix() {
        let blocks = render("1. Buy milk\n1.Buy milk");
        assert_eq!(blocks.len(), 2);
        assert_eq!(text_markup(&blocks[0]), "Buy milk");
        assert_eq!(text_markup(&blocks[1]), "Buy milk");
    }

    #[test]
    fn number_without_period_is_plain_text() {
        let blocks = render("42 is the answer");
        assert_eq!(text_markup(&blocks[0]), "42 is the answer");
    }

    #[test]
    fn plain_lines_pass_through_trimmed() {
        let blocks = render("  hello world  ");
        assert_eq!(text_markup(&blocks[0]), "hello world");
    }

    #[test]
    fn crlf_terminators_are_tolerated() {
        let blocks = render("first\r\nsecond");
        assert_eq!(blocks.len(), 2);
        assert_eq!(text_markup(&blocks[0]), "first");
        assert_eq!(text_markup(&blocks[1]), "second");
    }

    #[test]
    fn bold_and_italic_apply_in_order() {
        let span = format_inline("**bold** and *italic*");
        assert_eq!(span.markup, "<strong>bold</strong> and <em>italic</em>");
    }

    #[test]
    fn bold_wraps_before_inner_italic() {
        // The sequential pipeline applies bold across the whole span first,
        // then the single-asterisk rule over the already-wrapped result.
        let span = format_inline("**a*b*c**");
        assert_eq!(span.markup, "<strong>a<em>b</em>c</strong>");
    }

    #[test]
    fn underscore_italic_and_strikethrough_and_code() {
        let span = format_inline("__soft__ --gone-- `code`");
        assert_eq!(span.markup, "<em>soft</em> <del>gone</del> <code>code</code>");
    }

    #[test]
    fn adjacent_asterisks_do_not_match_single_italic() {
        let span = format_inline("a ** b");
        assert_eq!(span.markup, "a ** b");
    }

    #[test]
    fn unpaired_single_asterisk_is_preserved() {
        let span = format_inline("2 * 3 = 6");
        assert_eq!(span.markup, "2 * 3 = 6");
    }

    #[test]
    fn raw_angle_brackets_are_escaped() {
        let span = format_inline("<script>alert(1)</script>");
        assert_eq!(span.markup, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn styling_applies_inside_classified_lines() {
        let blocks = render("# **Big** news\n- *soon*");
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 1,
                span: InlineSpan::new("<strong>Big</strong> news"),
            }
        );
        assert_eq!(text_markup(&blocks[1]), "<em>soon</em>");
    }
}
