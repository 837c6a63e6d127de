//! Width matching of parsed media rules.

use super::media_rule::{MediaRule, RuleStore};
use crate::error::Result;

/// Returns true if `rule` admits `width`.
///
/// The lower bound is inclusive and the upper bound exclusive; a missing bound
/// does not constrain its side. `rem` thresholds are scaled by `rem_px`.
pub fn rule_matches(rule: &MediaRule, width: f32, rem_px: f32) -> Result<bool> {
    let min = rule.min_dimension()?;
    let max = rule.max_dimension()?;

    if let Some(min) = min {
        if width < min.to_px(rem_px) {
            return Ok(false);
        }
    }
    if let Some(max) = max {
        if width >= max.to_px(rem_px) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Filters `store` down to the rules active at `width`, keeping store order.
///
/// Any malformed width threshold in the store fails the whole pass.
pub fn active_rules(store: &RuleStore, width: f32, rem_px: f32) -> Result<Vec<&MediaRule>> {
    let mut active = Vec::new();
    for rule in store {
        if rule_matches(rule, width, rem_px)? {
            active.push(rule);
        }
    }
    Ok(active)
}

/// Joins rule bodies into one stylesheet, one body per line.
pub fn concat_bodies(rules: &[&MediaRule]) -> String {
    let mut sheet = String::new();
    for rule in rules {
        sheet.push_str(&rule.body);
        sheet.push('\n');
    }
    sheet
}
