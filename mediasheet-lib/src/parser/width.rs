//! Width-unit parsing for a single media condition branch.
//!
//! A condition is a sequence of parenthesized terms such as
//! `(min-width: 300px) and (max-width: 40rem)`. Only `min-`/`max-` `width` and
//! `height` terms with a `px` or `rem` value are recognized; the numeric part is
//! kept as text so unit handling happens at match time.

/// Which side of a range a size feature constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// One recognized `(min-width: 300px)` style term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeFeature {
    pub bound: Bound,
    pub axis: Axis,
    /// Number and unit as written, e.g. `"300px"` or `"25rem"`.
    pub literal: String,
}

/// Returns the inner text of every `( ... )` term in `condition`, left to right.
///
/// Terms do not nest: a term runs from a `(` to the next `)`. An unclosed `(`
/// ends the iteration.
pub fn condition_terms(condition: &str) -> ConditionTerms<'_> {
    ConditionTerms {
        input: condition,
        cursor: 0,
    }
}

pub struct ConditionTerms<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Iterator for ConditionTerms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let rest = &input[self.cursor..];
        let open = rest.find('(')?;
        let after_open = &rest[open + 1..];
        let close = after_open.find(')')?;
        self.cursor += open + 1 + close + 1;
        Some(&after_open[..close])
    }
}

/// Classifies the inner text of a single term.
///
/// Returns `None` for anything that is not exactly `<ws> m(in|ax)-(width|height)
/// <ws> : <ws> [0-9.]+ (px|rem) <ws>`.
pub fn parse_size_feature(term: &str) -> Option<SizeFeature> {
    let (name, value) = term.split_once(':')?;
    let (bound, axis) = match name.trim() {
        "min-width" => (Bound::Min, Axis::Width),
        "max-width" => (Bound::Max, Axis::Width),
        "min-height" => (Bound::Min, Axis::Height),
        "max-height" => (Bound::Max, Axis::Height),
        _ => return None,
    };

    let value = value.trim();
    let split = value
        .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    if number.is_empty() || !matches!(unit, "px" | "rem") {
        return None;
    }

    Some(SizeFeature {
        bound,
        axis,
        literal: format!("{}{}", number, unit),
    })
}

/// Extracts the first width threshold for `bound` from a condition branch.
///
/// The returned token is the number concatenated with its unit, e.g. `"300px"`.
/// Malformed numbers such as `1.2.3px` are returned as-is.
pub fn parse_width(bound: Bound, condition: &str) -> Option<String> {
    condition_terms(condition)
        .filter_map(parse_size_feature)
        .find(|feature| feature.axis == Axis::Width && feature.bound == bound)
        .map(|feature| feature.literal)
}
