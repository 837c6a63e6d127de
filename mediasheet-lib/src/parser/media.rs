//! Turns stylesheet text into [`MediaRule`]s, one per `@media` condition branch.

use super::scanner::{scan_media_blocks, strip_comments};
use super::width::{condition_terms, parse_size_feature, parse_width, Bound};
use crate::style::media_rule::MediaRule;
use log::debug;

/// Parses every supported `@media` branch out of `css`, in source order.
///
/// A comma-separated condition list yields one rule per branch, all sharing
/// the block's body. Branches with a term other than a `px`/`rem`
/// `min-`/`max-` `width`/`height` check are dropped.
pub fn extract_rules(css: &str) -> Vec<MediaRule> {
    let css = strip_comments(css);
    let mut rules = Vec::new();

    for block in scan_media_blocks(&css) {
        for piece in split_commas(block.condition) {
            let branch = piece.trim();
            if has_unsupported_term(branch) {
                debug!("dropping unsupported media condition `{}`", branch);
                continue;
            }

            rules.push(MediaRule {
                has_condition: piece.starts_with('('),
                min_width: parse_width(Bound::Min, branch),
                max_width: parse_width(Bound::Max, branch),
                body: block.body.to_string(),
            });
        }
    }

    debug!("extracted {} media rules", rules.len());
    rules
}

fn has_unsupported_term(branch: &str) -> bool {
    condition_terms(branch).any(|term| parse_size_feature(term).is_none())
}

/// Splits a condition list on commas outside parentheses. Pieces keep their
/// surrounding whitespace.
fn split_commas(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, byte) in input.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(min: Option<&str>, max: Option<&str>, body: &str) -> MediaRule {
        MediaRule {
            has_condition: true,
            min_width: min.map(str::to_string),
            max_width: max.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_no_media_blocks() {
        let css = ".a { color: red; }\n#b { margin: 0; }";
        assert!(extract_rules(css).is_empty());
    }

    #[test]
    fn test_min_and_max_in_one_branch() {
        let css = "@media (min-width: 300px) and (max-width: 600px) { .a{color:red;} }";
        assert_eq!(
            extract_rules(css),
            vec![rule(Some("300px"), Some("600px"), ".a{color:red;}")]
        );
    }

    #[test]
    fn test_unsupported_condition_dropped() {
        let css = "@media (orientation: landscape) { .a{} }";
        assert!(extract_rules(css).is_empty());

        let mixed = "@media (min-width: 300px) and (orientation: landscape) { .a{} }";
        assert!(extract_rules(mixed).is_empty());

        let em = "@media (min-width: 30em) { .a{} }";
        assert!(extract_rules(em).is_empty());
    }

    #[test]
    fn test_comma_branches_share_body() {
        let css = "@media (max-width: 200px), (min-width: 800px) { .wide{display:none;} }";
        assert_eq!(
            extract_rules(css),
            vec![
                rule(None, Some("200px"), ".wide{display:none;}"),
                MediaRule {
                    has_condition: false,
                    ..rule(Some("800px"), None, ".wide{display:none;}")
                },
            ]
        );
    }

    #[test]
    fn test_has_condition_reads_untrimmed_branch() {
        let css = "@media (min-width: 1px),  (max-width: 2px),(max-width: 3px) { .a{} }";
        let flags: Vec<bool> = extract_rules(css).iter().map(|r| r.has_condition).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_only_unsupported_branch_is_dropped() {
        let css = "@media (hover: hover), (min-width: 500px) { .a{} }";
        assert_eq!(
            extract_rules(css),
            vec![MediaRule {
                has_condition: false,
                ..rule(Some("500px"), None, ".a{}")
            }]
        );
    }

    #[test]
    fn test_bare_media_always_recorded() {
        let rules = extract_rules("@media {}");
        assert_eq!(rules.len(), 1);
        assert!(!rules[0].has_condition);
        assert_eq!(rules[0].min_width, None);
        assert_eq!(rules[0].max_width, None);

        let screen = extract_rules("@media screen { .s{} }");
        assert_eq!(screen.len(), 1);
        assert!(!screen[0].has_condition);
    }

    #[test]
    fn test_media_type_with_width() {
        let rules = extract_rules("@media screen and (min-width: 10rem) { .s{} }");
        assert_eq!(rules.len(), 1);
        assert!(!rules[0].has_condition);
        assert_eq!(rules[0].min_width.as_deref(), Some("10rem"));
    }

    #[test]
    fn test_height_only_branch_has_no_bounds() {
        let rules = extract_rules("@media (min-height: 300px) { .h{} }");
        assert_eq!(rules, vec![rule(None, None, ".h{}")]);
    }

    #[test]
    fn test_commented_out_block_ignored() {
        let css = "/* @media (min-width: 1px) { .gone{} } */\n@media (max-width: 2px) { .kept{} }";
        assert_eq!(extract_rules(css), vec![rule(None, Some("2px"), ".kept{}")]);
    }

    #[test]
    fn test_source_order_preserved() {
        let css = "@media (min-width: 1px) { .one{} }\n.x{}\n@media (min-width: 2px) { .two{} }";
        let bodies: Vec<String> = extract_rules(css).into_iter().map(|r| r.body).collect();
        assert_eq!(bodies, vec![".one{}", ".two{}"]);
    }

    #[test]
    fn test_split_commas_respects_parentheses() {
        assert_eq!(split_commas("(a, b), (c)"), vec!["(a, b)", " (c)"]);
        assert_eq!(split_commas(""), vec![""]);
    }
}
