/// Name the generated stylesheet is attached under on the host surface.
pub const GENERATED_SHEET_NAME: &str = "mediasheet.generated.css";

/// Pixels per `rem` when converting width thresholds.
pub const DEFAULT_REM_PX: f32 = 12.0;

/// Settings for a [`MediaQueryReactor`](crate::reactor::MediaQueryReactor).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaConfig {
    pub rem_px: f32,
    pub generated_name: String,
    /// Leading attached stylesheets that are never scanned for `@media` blocks.
    pub base_sheets: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            rem_px: DEFAULT_REM_PX,
            generated_name: GENERATED_SHEET_NAME.to_string(),
            base_sheets: 1,
        }
    }
}

impl MediaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rem_px(mut self, rem_px: f32) -> Self {
        self.rem_px = rem_px;
        self
    }

    pub fn with_generated_name(mut self, name: impl Into<String>) -> Self {
        self.generated_name = name.into();
        self
    }

    pub fn with_base_sheets(mut self, count: usize) -> Self {
        self.base_sheets = count;
        self
    }
}
