//! One-page fit estimation for `autoAdjust`.
//!
//! Line counts come from an average-glyph-width model per font family. The
//! estimate is coarse; it only has to decide whether to step typography down.

use crate::models::settings::{MIN_FONT_SIZE, MIN_LINE_SPACING};
use crate::models::{RenderSettings, Resume};

/// Page margin on every side, in inches. Matches the `@page` rule and the PDF margins.
pub const PAGE_MARGIN_IN: f64 = 0.5;

const FONT_STEP: f32 = 0.5;
const SPACING_STEP: f32 = 0.05;
/// Name, title, and contact rows.
const HEADER_LINES: f32 = 4.0;
const SECTION_HEADING_LINES: f32 = 1.8;
const ENTRY_GAP_LINES: f32 = 0.5;

/// Estimated rendered height of `resume` at `settings`, in text lines.
pub fn estimate_lines(resume: &Resume, settings: &RenderSettings) -> f32 {
    let (width_in, _) = settings.paper_size.inches();
    let text_width_pt = ((width_in - 2.0 * PAGE_MARGIN_IN) * 72.0) as f32;
    let glyph_pt = settings.font_size * settings.font_family.average_char_width_em();
    let chars_per_line = (text_width_pt / glyph_pt).max(1.0);

    let wrap = |text: &str| -> f32 {
        let len = text.trim().chars().count() as f32;
        if len == 0.0 {
            0.0
        } else {
            (len / chars_per_line).ceil()
        }
    };

    let mut lines = HEADER_LINES;

    if !resume.summary.trim().is_empty() {
        lines += SECTION_HEADING_LINES + wrap(&resume.summary);
    }

    if !resume.experience.is_empty() {
        lines += SECTION_HEADING_LINES;
        for job in &resume.experience {
            lines += 2.0 + wrap(&job.description) + ENTRY_GAP_LINES;
            lines += job.achievements.iter().map(|a| wrap(a)).sum::<f32>();
        }
    }

    if !resume.education.is_empty() {
        lines += SECTION_HEADING_LINES;
        for school in &resume.education {
            lines += 2.0 + wrap(&school.additional_info) + ENTRY_GAP_LINES;
        }
    }

    if crate::render::html::any_present(&resume.skills) {
        lines += SECTION_HEADING_LINES + wrap(&resume.skills.join(", "));
    }

    if !resume.certifications.is_empty() {
        lines += SECTION_HEADING_LINES + resume.certifications.len() as f32;
    }

    lines
}

/// Number of text lines one page holds at `settings`.
pub fn page_capacity_lines(settings: &RenderSettings) -> f32 {
    let (_, height_in) = settings.paper_size.inches();
    let text_height_pt = ((height_in - 2.0 * PAGE_MARGIN_IN) * 72.0) as f32;
    text_height_pt / (settings.font_size * settings.line_spacing)
}

/// Steps font size, then line spacing, down until the resume fits one page or
/// both floors are reached. Returns the settings unchanged when they already fit.
pub fn fit_to_page(resume: &Resume, settings: &RenderSettings) -> RenderSettings {
    let mut fitted = settings.clone();

    while estimate_lines(resume, &fitted) > page_capacity_lines(&fitted) {
        if fitted.font_size > MIN_FONT_SIZE {
            fitted.font_size = (fitted.font_size - FONT_STEP).max(MIN_FONT_SIZE);
        } else if fitted.line_spacing > MIN_LINE_SPACING {
            let stepped = ((fitted.line_spacing - SPACING_STEP) * 100.0).round() / 100.0;
            fitted.line_spacing = stepped.max(MIN_LINE_SPACING);
        } else {
            break;
        }
    }

    if fitted != *settings {
        tracing::debug!(
            "Auto-adjusted typography to {}pt / {} line spacing",
            fitted.font_size,
            fitted.line_spacing
        );
    }
    fitted
}
