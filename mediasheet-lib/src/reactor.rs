//! The per-surface change loop: discovers media rules on the first tick, then
//! re-applies them whenever the surface size settles after a change.

use crate::config::MediaConfig;
use crate::error::{MediaErrorKind, Result};
use crate::host::{HostSurface, SheetFlags, Size, StylesheetArtifact};
use crate::style::compiler::StylesheetCompiler;
use crate::style::matcher::{active_rules, concat_bodies};
use crate::style::media_rule::RuleStore;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactorState {
    /// No tick observed yet; the rule store is empty.
    Uninitialized,
    /// Rules are loaded. `resizing` is set while the size keeps changing.
    Tracking { resizing: bool },
}

/// What a match-and-apply cycle did to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// No rule is active; the generated sheet was removed.
    Cleared,
    /// A new generated sheet built from `rules` active rules replaced the old one.
    Attached { rules: usize },
    /// The cycle failed and the surface was left untouched.
    Skipped {
        kind: MediaErrorKind,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Initialized(Emission),
    /// The size changed this tick; applying waits until it settles.
    Resizing,
    Applied(Emission),
    Idle,
}

/// Tracks one host surface. Call [`on_tick`](Self::on_tick) once per host
/// update; ticks must not overlap.
#[derive(Debug)]
pub struct MediaQueryReactor<C> {
    config: MediaConfig,
    compiler: C,
    store: RuleStore,
    state: ReactorState,
    last_size: Size,
}

impl<C: StylesheetCompiler> MediaQueryReactor<C> {
    pub fn new(compiler: C) -> Self {
        Self::with_config(compiler, MediaConfig::default())
    }

    pub fn with_config(compiler: C, config: MediaConfig) -> Self {
        MediaQueryReactor {
            config,
            compiler,
            store: RuleStore::new(),
            state: ReactorState::Uninitialized,
            last_size: Size::default(),
        }
    }

    pub fn state(&self) -> ReactorState {
        self.state
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    pub fn last_size(&self) -> Size {
        self.last_size
    }

    pub fn on_tick<H: HostSurface + ?Sized>(&mut self, host: &mut H) -> TickOutcome {
        let size = host.current_size();

        match self.state {
            ReactorState::Uninitialized => {
                self.last_size = size;
                self.state = ReactorState::Tracking { resizing: false };
                self.load_stylesheets(host);
                TickOutcome::Initialized(self.apply(host))
            }
            ReactorState::Tracking { .. } if size != self.last_size => {
                self.last_size = size;
                self.state = ReactorState::Tracking { resizing: true };
                TickOutcome::Resizing
            }
            ReactorState::Tracking { resizing: true } => {
                self.state = ReactorState::Tracking { resizing: false };
                TickOutcome::Applied(self.apply(host))
            }
            ReactorState::Tracking { resizing: false } => TickOutcome::Idle,
        }
    }

    fn load_stylesheets<H: HostSurface + ?Sized>(&mut self, host: &H) {
        let handles = host.attached_stylesheets();
        for handle in handles.iter().skip(self.config.base_sheets) {
            if handle.name == self.config.generated_name {
                continue;
            }
            match host.read_text(handle) {
                Ok(css) => {
                    let added = self.store.extend_from_source(&css);
                    debug!("{}: {} media rules", handle.name, added);
                }
                Err(e) => warn!("skipping stylesheet: {}", e),
            }
        }
        info!(
            "loaded {} media rules from {} stylesheets",
            self.store.len(),
            handles.len().saturating_sub(self.config.base_sheets)
        );
    }

    /// Matches the store against the last observed width and replaces the
    /// generated sheet. Failures are logged and leave the surface untouched.
    pub fn apply<H: HostSurface + ?Sized>(&self, host: &mut H) -> Emission {
        match self.try_apply(host) {
            Ok(emission) => emission,
            Err(e) => {
                warn!("media query update skipped: {}", e);
                Emission::Skipped {
                    kind: e.kind(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_apply<H: HostSurface + ?Sized>(&self, host: &mut H) -> Result<Emission> {
        let width = self.last_size.width;
        let active = active_rules(&self.store, width, self.config.rem_px)?;

        if active.is_empty() {
            host.detach(&self.config.generated_name);
            debug!("no media rules active at width {}", width);
            return Ok(Emission::Cleared);
        }

        for rule in &active {
            debug!("active: {}", rule);
        }
        let css = self.compiler.compile(&concat_bodies(&active))?;
        host.detach(&self.config.generated_name);
        host.attach(StylesheetArtifact {
            name: self.config.generated_name.clone(),
            css,
            flags: SheetFlags { non_editable: true },
        });
        info!("{} media rules active at width {}", active.len(), width);
        Ok(Emission::Attached {
            rules: active.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemorySurface;
    use crate::style::compiler::RawCompiler;

    const SHEET: &str = "@media (min-width: 400px) { .a{color:red;} }";

    fn surface(width: f32) -> MemorySurface {
        MemorySurface::new(Size::new(width, 300.0))
            .with_sheet("base.css", "@media (min-width: 0px) { .base{} }")
            .with_sheet("app.css", SHEET)
    }

    #[test]
    fn test_first_tick_initializes() {
        let mut host = surface(500.0);
        let mut reactor = MediaQueryReactor::new(RawCompiler);
        assert_eq!(reactor.state(), ReactorState::Uninitialized);

        let outcome = reactor.on_tick(&mut host);
        assert_eq!(outcome, TickOutcome::Initialized(Emission::Attached { rules: 1 }));
        assert_eq!(reactor.state(), ReactorState::Tracking { resizing: false });
        // The base sheet is never scanned.
        assert_eq!(reactor.store().len(), 1);
        assert_eq!(reactor.last_size(), Size::new(500.0, 300.0));
    }

    #[test]
    fn test_state_transitions() {
        let mut host = surface(500.0);
        let mut reactor = MediaQueryReactor::new(RawCompiler);
        reactor.on_tick(&mut host);

        assert_eq!(reactor.on_tick(&mut host), TickOutcome::Idle);

        host.set_width(300.0);
        assert_eq!(reactor.on_tick(&mut host), TickOutcome::Resizing);
        assert_eq!(reactor.state(), ReactorState::Tracking { resizing: true });

        assert_eq!(
            reactor.on_tick(&mut host),
            TickOutcome::Applied(Emission::Cleared)
        );
        assert_eq!(reactor.state(), ReactorState::Tracking { resizing: false });
        assert_eq!(reactor.on_tick(&mut host), TickOutcome::Idle);
    }

    #[test]
    fn test_height_change_also_debounces() {
        let mut host = surface(500.0);
        let mut reactor = MediaQueryReactor::new(RawCompiler);
        reactor.on_tick(&mut host);

        host.set_size(Size::new(500.0, 900.0));
        assert_eq!(reactor.on_tick(&mut host), TickOutcome::Resizing);
        assert_eq!(
            reactor.on_tick(&mut host),
            TickOutcome::Applied(Emission::Attached { rules: 1 })
        );
    }

    #[test]
    fn test_nan_size_never_settles() {
        let mut host = surface(500.0);
        let mut reactor = MediaQueryReactor::new(RawCompiler);
        reactor.on_tick(&mut host);

        host.set_width(f32::NAN);
        for _ in 0..3 {
            assert_eq!(reactor.on_tick(&mut host), TickOutcome::Resizing);
        }

        host.set_width(500.0);
        assert_eq!(reactor.on_tick(&mut host), TickOutcome::Resizing);
        assert_eq!(
            reactor.on_tick(&mut host),
            TickOutcome::Applied(Emission::Attached { rules: 1 })
        );
    }

    #[test]
    fn test_missing_compiler_skips() {
        let mut host = surface(500.0);
        let mut reactor = MediaQueryReactor::new(None::<RawCompiler>);
        match reactor.on_tick(&mut host) {
            TickOutcome::Initialized(Emission::Skipped { kind, .. }) => {
                assert_eq!(kind, MediaErrorKind::CompilerUnavailable)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(host.attach_count(), 0);
    }

    #[test]
    fn test_no_extra_sheets() {
        let mut host = MemorySurface::new(Size::new(500.0, 300.0)).with_sheet("base.css", SHEET);
        let mut reactor = MediaQueryReactor::new(RawCompiler);
        assert_eq!(
            reactor.on_tick(&mut host),
            TickOutcome::Initialized(Emission::Cleared)
        );
        assert!(reactor.store().is_empty());
        assert_eq!(host.attach_count(), 0);
    }
}
