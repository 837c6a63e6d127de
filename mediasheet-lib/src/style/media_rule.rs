use crate::error::{MediaError, Result};
use crate::parser::media::extract_rules;
use std::fmt;

/// One parsed `@media` condition branch and the body it guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRule {
    /// Whether the branch text, as split from its list without trimming,
    /// starts with `(`. Matching does not read it.
    pub has_condition: bool,
    /// Inclusive lower bound as written, e.g. `"300px"`.
    pub min_width: Option<String>,
    /// Exclusive upper bound as written.
    pub max_width: Option<String>,
    /// Rule text emitted verbatim while the branch is active.
    pub body: String,
}

impl MediaRule {
    pub fn min_dimension(&self) -> Result<Option<Dimension>> {
        self.min_width.as_deref().map(Dimension::parse).transpose()
    }

    pub fn max_dimension(&self) -> Result<Option<Dimension>> {
        self.max_width.as_deref().map(Dimension::parse).transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
}

/// A numeric width with its unit, not yet converted to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: Unit,
}

impl Dimension {
    /// Parses a width token such as `"300px"` or `"25rem"`.
    pub fn parse(literal: &str) -> Result<Self> {
        let (number, unit) = if let Some(number) = literal.strip_suffix("px") {
            (number, Unit::Px)
        } else if let Some(number) = literal.strip_suffix("rem") {
            (number, Unit::Rem)
        } else {
            return Err(MediaError::UnknownUnit {
                literal: literal.to_string(),
            });
        };

        let value = number
            .trim()
            .parse::<f32>()
            .map_err(|_| MediaError::MalformedWidth {
                literal: literal.to_string(),
            })?;
        Ok(Dimension { value, unit })
    }

    pub fn to_px(&self, rem_px: f32) -> f32 {
        match self.unit {
            Unit::Px => self.value,
            Unit::Rem => self.value * rem_px,
        }
    }
}

/// Media rules of every stylesheet on a surface, in source order.
///
/// Rules are only ever appended.
#[derive(Debug, Default, Clone)]
pub struct RuleStore {
    rules: Vec<MediaRule>,
}

impl RuleStore {
    pub fn new() -> Self {
        RuleStore { rules: Vec::new() }
    }

    /// Parses `css` and appends its rules. Returns how many were added.
    pub fn extend_from_source(&mut self, css: &str) -> usize {
        let parsed = extract_rules(css);
        let added = parsed.len();
        self.rules.extend(parsed);
        added
    }

    pub fn push(&mut self, rule: MediaRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[MediaRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleStore {
    type Item = &'a MediaRule;
    type IntoIter = std::slice::Iter<'a, MediaRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for MediaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} .. {}) {}",
            self.min_width.as_deref().unwrap_or("-"),
            self.max_width.as_deref().unwrap_or("-"),
            self.body
        )
    }
}
