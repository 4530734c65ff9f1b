//! Document assembly: wraps a template fragment in a full HTML page carrying
//! the paper size, typography, and print-media rules.

use crate::models::{RenderSettings, Resume};
use crate::render::html::{escape, Html};
use crate::render::layout::{fit_to_page, PAGE_MARGIN_IN};
use crate::render::{render_fragment, TemplateId};

/// Appended when `atsMode` is set: flattens colour, backgrounds, and columns.
const ATS_OVERRIDES: &str = r#"
.resume-page * { color: #000 !important; background: none !important; border-color: #000 !important; box-shadow: none !important; }
.resume-page > div { display: block !important; }
.resume-page aside, .resume-page main { width: auto !important; padding: 0 !important; }
"#;

/// Builds the complete HTML document for `resume` in `template`.
///
/// `None` settings means the defaults (11pt Times, 1.15 spacing, US letter).
/// Pure: identical inputs produce byte-identical output.
pub fn assemble(resume: &Resume, template: TemplateId, settings: Option<&RenderSettings>) -> String {
    let defaults = RenderSettings::default();
    let requested = settings.unwrap_or(&defaults);
    let settings = if requested.auto_adjust {
        fit_to_page(resume, requested)
    } else {
        requested.clone()
    };

    let (page_width, page_height) = settings.paper_size.css_dimensions();
    let margin = format!("{PAGE_MARGIN_IN}in");

    let mut css = format!(
        "@page {{ size: {page_width} {page_height}; margin: {margin}; }}\n\
         html, body {{ margin: 0; padding: 0; background: #fff; }}\n\
         body {{ font-family: {font}; font-size: {size}pt; line-height: {spacing}; \
         -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n\
         .resume-page {{ width: {page_width}; min-height: {page_height}; padding: {margin}; \
         box-sizing: border-box; margin: 0 auto; }}\n\
         h1, h2, h3 {{ line-height: 1.2; }}\n\
         ul {{ page-break-inside: auto; }} li {{ page-break-inside: avoid; }}\n\
         @media print {{ .resume-page {{ width: auto; min-height: auto; padding: 0; margin: 0; }} }}\n",
        font = settings.font_family.css_stack(),
        size = settings.font_size,
        spacing = settings.line_spacing,
    );
    if settings.ats_mode {
        css.push_str(ATS_OVERRIDES);
    }

    let title = format!("{} - Resume", resume.personal_info.full_name());

    let mut html = Html::new();
    html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n")
        .raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")
        .raw("<title>")
        .raw(&escape(&title))
        .raw("</title>\n<style>\n")
        .raw(&css)
        .raw("</style>\n</head>\n<body>\n")
        .open("div", "resume-page")
        .raw(&render_fragment(resume, template))
        .close("div")
        .raw("\n</body>\n</html>\n");
    html.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{FileFormat, FontFamily, PaperSize};
    use crate::render::fixtures::jane_doe;

    #[test]
    fn test_title_contains_applicant_name_for_every_template() {
        let resume = jane_doe();
        for template in TemplateId::ALL {
            let doc = assemble(&resume, template, None);
            assert!(doc.starts_with("<!DOCTYPE html>"));
            assert!(doc.trim_end().ends_with("</html>"));
            assert!(doc.contains("<title>Jane Doe - Resume</title>"));
        }
    }

    #[test]
    fn test_title_is_escaped() {
        let mut resume = jane_doe();
        resume.personal_info.last_name = "<Doe>".to_string();
        let doc = assemble(&resume, TemplateId::Modern, None);
        assert!(doc.contains("<title>Jane &lt;Doe&gt; - Resume</title>"));
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let resume = Resume::sample();
        let settings = RenderSettings {
            auto_adjust: true,
            ..Default::default()
        };
        for template in TemplateId::ALL {
            assert_eq!(
                assemble(&resume, template, Some(&settings)),
                assemble(&resume, template, Some(&settings))
            );
        }
    }

    #[test]
    fn test_absent_settings_match_explicit_defaults() {
        let resume = Resume::sample();
        let explicit = RenderSettings {
            font_size: 11.0,
            font_family: FontFamily::Times,
            line_spacing: 1.15,
            paper_size: PaperSize::Letter,
            auto_adjust: false,
            ats_mode: false,
            file_format: FileFormat::Pdf,
        };
        assert_eq!(
            assemble(&resume, TemplateId::Modern, None),
            assemble(&resume, TemplateId::Modern, Some(&explicit))
        );
    }

    #[test]
    fn test_default_page_and_typography() {
        let doc = assemble(&jane_doe(), TemplateId::Classic, None);
        assert!(doc.contains("@page { size: 8.5in 11in; margin: 0.5in; }"));
        assert!(doc.contains("font-family: 'Times New Roman', Times, serif; font-size: 11pt; line-height: 1.15;"));
        assert!(doc.contains("@media print"));
    }

    #[test]
    fn test_a4_and_font_choice() {
        let settings = RenderSettings {
            paper_size: PaperSize::A4,
            font_family: FontFamily::Helvetica,
            font_size: 12.5,
            ..Default::default()
        };
        let doc = assemble(&jane_doe(), TemplateId::Minimal, Some(&settings));
        assert!(doc.contains("size: 210mm 297mm"));
        assert!(doc.contains("font-family: Helvetica, 'Helvetica Neue', Arial, sans-serif; font-size: 12.5pt;"));
    }

    #[test]
    fn test_ats_mode_appends_overrides() {
        let settings = RenderSettings {
            ats_mode: true,
            ..Default::default()
        };
        let plain = assemble(&jane_doe(), TemplateId::Creative, None);
        let ats = assemble(&jane_doe(), TemplateId::Creative, Some(&settings));
        assert!(!plain.contains("color: #000 !important"));
        assert!(ats.contains("color: #000 !important"));
    }
}
