//! A small media-query engine: parses `@media` width conditions out of
//! stylesheets and keeps a single generated stylesheet of the currently
//! active rule bodies installed on a host surface as it resizes.

pub mod config;
pub mod error;
pub mod host;
pub mod parser;
pub mod reactor;
pub mod sheet_generate;
pub mod style;

pub use config::MediaConfig;
pub use error::{MediaError, Result};
pub use host::{HostSurface, MemorySurface, Size};
pub use reactor::{Emission, MediaQueryReactor, TickOutcome};
pub use style::compiler::{LightningCompiler, RawCompiler, StylesheetCompiler};
