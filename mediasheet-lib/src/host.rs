//! The host surface a reactor observes and installs its generated sheet on.

use crate::error::{MediaError, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Container size in the host's pixel units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// Refers to one stylesheet attached to a surface, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetHandle {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SheetFlags {
    pub non_editable: bool,
}

/// A compiled stylesheet produced by the reactor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetArtifact {
    pub name: String,
    pub css: String,
    pub flags: SheetFlags,
}

/// Everything the reactor needs from its host.
pub trait HostSurface {
    /// Both dimensions must be finite; a NaN never compares equal, so the
    /// reactor would never see the size settle.
    fn current_size(&self) -> Size;

    /// Attached stylesheets in attachment order; the first is the base sheet.
    fn attached_stylesheets(&self) -> Vec<StylesheetHandle>;

    fn read_text(&self, handle: &StylesheetHandle) -> Result<String>;

    fn attach(&mut self, artifact: StylesheetArtifact);

    /// Removes every attached sheet called `name`.
    fn detach(&mut self, name: &str);
}

#[derive(Debug, Clone)]
enum SheetSource {
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
enum SurfaceSheet {
    Source { name: String, source: SheetSource },
    Generated(StylesheetArtifact),
}

impl SurfaceSheet {
    fn name(&self) -> &str {
        match self {
            SurfaceSheet::Source { name, .. } => name,
            SurfaceSheet::Generated(artifact) => &artifact.name,
        }
    }
}

/// A host surface kept entirely in memory. File-backed sheets are read when
/// the reactor asks for their text.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    size: Size,
    sheets: Vec<SurfaceSheet>,
    attach_count: usize,
}

impl MemorySurface {
    pub fn new(size: Size) -> Self {
        MemorySurface {
            size,
            sheets: Vec::new(),
            attach_count: 0,
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, css: impl Into<String>) -> Self {
        self.add_sheet(name, css);
        self
    }

    pub fn add_sheet(&mut self, name: impl Into<String>, css: impl Into<String>) {
        self.sheets.push(SurfaceSheet::Source {
            name: name.into(),
            source: SheetSource::Inline(css.into()),
        });
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.sheets.push(SurfaceSheet::Source {
            name: path.display().to_string(),
            source: SheetSource::File(path),
        });
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_width(&mut self, width: f32) {
        self.size.width = width;
    }

    /// The currently attached generated sheet called `name`, if any.
    pub fn generated(&self, name: &str) -> Option<&StylesheetArtifact> {
        self.sheets.iter().find_map(|sheet| match sheet {
            SurfaceSheet::Generated(artifact) if artifact.name == name => Some(artifact),
            _ => None,
        })
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(SurfaceSheet::name).collect()
    }

    /// How many times a sheet has been attached over the surface's lifetime.
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }
}

impl HostSurface for MemorySurface {
    fn current_size(&self) -> Size {
        self.size
    }

    fn attached_stylesheets(&self) -> Vec<StylesheetHandle> {
        self.sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| StylesheetHandle {
                index,
                name: sheet.name().to_string(),
            })
            .collect()
    }

    fn read_text(&self, handle: &StylesheetHandle) -> Result<String> {
        let missing = || MediaError::ReadStylesheet {
            name: handle.name.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such attached sheet"),
        };

        match self.sheets.get(handle.index).ok_or_else(missing)? {
            SurfaceSheet::Source {
                source: SheetSource::Inline(css),
                ..
            } => Ok(css.clone()),
            SurfaceSheet::Source {
                source: SheetSource::File(path),
                ..
            } => fs::read_to_string(path).map_err(|source| MediaError::ReadStylesheet {
                name: handle.name.clone(),
                source,
            }),
            SurfaceSheet::Generated(artifact) => Ok(artifact.css.clone()),
        }
    }

    fn attach(&mut self, artifact: StylesheetArtifact) {
        debug!("attaching `{}` ({} bytes)", artifact.name, artifact.css.len());
        self.attach_count += 1;
        self.sheets.push(SurfaceSheet::Generated(artifact));
    }

    fn detach(&mut self, name: &str) {
        self.sheets.retain(|sheet| sheet.name() != name);
    }
}
