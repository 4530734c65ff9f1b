//! User-chosen typography and paper options applied during document assembly.

use serde::{Deserialize, Serialize};

use crate::models::resume::ValidationError;

pub const MIN_FONT_SIZE: f32 = 10.0;
pub const MAX_FONT_SIZE: f32 = 14.0;
pub const MIN_LINE_SPACING: f32 = 1.0;
pub const MAX_LINE_SPACING: f32 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Times,
    Calibri,
    Arial,
    Garamond,
    Helvetica,
}

impl FontFamily {
    /// CSS `font-family` stack, most specific face first.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Times => "'Times New Roman', Times, serif",
            FontFamily::Calibri => "Calibri, Carlito, 'Segoe UI', Arial, sans-serif",
            FontFamily::Arial => "Arial, 'Liberation Sans', Helvetica, sans-serif",
            FontFamily::Garamond => "Garamond, 'EB Garamond', Georgia, serif",
            FontFamily::Helvetica => "Helvetica, 'Helvetica Neue', Arial, sans-serif",
        }
    }

    /// Average glyph advance in em, used for line-count estimates.
    pub fn average_char_width_em(self) -> f32 {
        match self {
            FontFamily::Times | FontFamily::Garamond => 0.45,
            FontFamily::Calibri => 0.47,
            FontFamily::Arial | FontFamily::Helvetica => 0.52,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    /// Page width and height as CSS lengths.
    pub fn css_dimensions(self) -> (&'static str, &'static str) {
        match self {
            PaperSize::Letter => ("8.5in", "11in"),
            PaperSize::A4 => ("210mm", "297mm"),
        }
    }

    /// Page width and height in inches.
    pub fn inches(self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::A4 => (8.27, 11.69),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Pdf,
    Docx,
    Txt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub font_size: f32,
    pub font_family: FontFamily,
    pub line_spacing: f32,
    pub auto_adjust: bool,
    pub ats_mode: bool,
    pub paper_size: PaperSize,
    pub file_format: FileFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            font_family: FontFamily::Times,
            line_spacing: 1.15,
            auto_adjust: false,
            ats_mode: false,
            paper_size: PaperSize::Letter,
            file_format: FileFormat::Pdf,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ValidationError::OutOfRange {
                field: "settings.fontSize",
                min: MIN_FONT_SIZE,
                max: MAX_FONT_SIZE,
            });
        }
        if !(MIN_LINE_SPACING..=MAX_LINE_SPACING).contains(&self.line_spacing) {
            return Err(ValidationError::OutOfRange {
                field: "settings.lineSpacing",
                min: MIN_LINE_SPACING,
                max: MAX_LINE_SPACING,
            });
        }
        Ok(())
    }
}
