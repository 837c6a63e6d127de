//! Structural scanning of stylesheet text: comment stripping and `@media`
//! block location by brace counting.

use log::debug;
use std::borrow::Cow;

const MEDIA_KEYWORD: &str = "@media";

/// Deepest brace nesting accepted for a media block: the block's own braces
/// plus one selector block inside it.
pub const MAX_BLOCK_DEPTH: usize = 2;

/// A located `@media <condition> { <body> }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaBlock<'a> {
    /// Condition list between the keyword and the opening brace, trimmed.
    pub condition: &'a str,
    /// Everything between the block's braces, trimmed.
    pub body: &'a str,
}

/// Removes every `/* ... */` comment. An unterminated comment is left in place.
pub fn strip_comments(css: &str) -> Cow<'_, str> {
    if !css.contains("/*") {
        return Cow::Borrowed(css);
    }

    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        let Some(end) = rest[start + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Finds every `@media` block in `css`, in source order.
///
/// Blocks nesting deeper than [`MAX_BLOCK_DEPTH`] are skipped whole. Scanning
/// stops at the first block whose braces never balance.
pub fn scan_media_blocks(css: &str) -> Vec<MediaBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(found) = css[cursor..].find(MEDIA_KEYWORD) {
        let after_keyword = cursor + found + MEDIA_KEYWORD.len();

        // `@media-foo` or `@mediaquery` is some other at-rule.
        if css[after_keyword..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_')
        {
            cursor = after_keyword;
            continue;
        }

        let Some(open_offset) = css[after_keyword..].find('{') else {
            break;
        };
        let open = after_keyword + open_offset;
        let condition = css[after_keyword..open].trim();

        let Some((close, depth)) = match_braces(css, open) else {
            debug!("unterminated @media block for condition `{}`", condition);
            break;
        };

        if depth <= MAX_BLOCK_DEPTH {
            blocks.push(MediaBlock {
                condition,
                body: css[open + 1..close].trim(),
            });
        } else {
            debug!(
                "skipping @media `{}`: braces nest {} levels deep",
                condition, depth
            );
        }
        cursor = close + 1;
    }

    blocks
}

/// Given the index of a `{`, returns the index of its matching `}` and the
/// deepest nesting seen in between.
fn match_braces(css: &str, open: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut max_depth = 0usize;

    for (offset, byte) in css.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open + offset, max_depth));
                }
            }
            _ => {}
        }
    }
    None
}
