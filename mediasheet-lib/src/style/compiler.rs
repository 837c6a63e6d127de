//! Compilation of the generated stylesheet text into what gets attached to
//! the host surface.

use crate::error::{MediaError, Result};
use lightningcss::error::{Error as LcssError, ParserError};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};

/// Turns raw CSS text into the form a host surface accepts.
pub trait StylesheetCompiler {
    fn compile(&self, raw_css: &str) -> Result<String>;
}

impl<C: StylesheetCompiler + ?Sized> StylesheetCompiler for Box<C> {
    fn compile(&self, raw_css: &str) -> Result<String> {
        (**self).compile(raw_css)
    }
}

/// `None` stands for a host without a compiler; every compile fails.
impl<C: StylesheetCompiler> StylesheetCompiler for Option<C> {
    fn compile(&self, raw_css: &str) -> Result<String> {
        match self {
            Some(compiler) => compiler.compile(raw_css),
            None => Err(MediaError::CompilerUnavailable),
        }
    }
}

/// Hands the text through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCompiler;

impl StylesheetCompiler for RawCompiler {
    fn compile(&self, raw_css: &str) -> Result<String> {
        Ok(raw_css.to_string())
    }
}

/// Validates and re-prints the text with LightningCSS.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightningCompiler {
    pub minify: bool,
}

impl LightningCompiler {
    pub fn new() -> Self {
        LightningCompiler { minify: false }
    }

    pub fn minified() -> Self {
        LightningCompiler { minify: true }
    }
}

impl StylesheetCompiler for LightningCompiler {
    fn compile(&self, raw_css: &str) -> Result<String> {
        let sheet = LightningStyleSheet::parse(raw_css, ParserOptions::default())
            .map_err(|e: LcssError<ParserError<'_>>| MediaError::Compile(e.to_string()))?;

        let printer_opts = PrinterOptions {
            minify: self.minify,
            ..PrinterOptions::default()
        };
        let printed = sheet
            .to_css(printer_opts)
            .map_err(|e| MediaError::Compile(e.to_string()))?;
        Ok(printed.code)
    }
}
