use crate::config::MediaConfig;
use crate::error::Result;
use crate::style::matcher::{active_rules, concat_bodies};
use crate::style::media_rule::RuleStore;

pub mod media_sheet {
    use super::*;

    /// Builds the generated stylesheet for a fixed `width` without a host.
    ///
    /// Every source is scanned (there is no base sheet here). Returns `None`
    /// when no rule is active.
    pub fn generate(sources: &[&str], width: f32, config: &MediaConfig) -> Result<Option<String>> {
        let mut store = RuleStore::new();
        for css in sources {
            store.extend_from_source(css);
        }

        let active = active_rules(&store, width, config.rem_px)?;
        if active.is_empty() {
            return Ok(None);
        }
        Ok(Some(concat_bodies(&active)))
    }
}
