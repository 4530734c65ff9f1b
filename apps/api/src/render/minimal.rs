//! Minimal: single column, no colour, generous whitespace.

use crate::models::Resume;
use crate::render::html::{any_present, present, Html};

const STYLE: &str = r#"<style>
.minimal-resume { color: #222; }
.minimal-name { font-size: 1.7em; font-weight: 400; margin: 0 0 0.1em; }
.minimal-contact { font-size: 0.88em; color: #555; margin-bottom: 1.1em; }
.minimal-section { margin-bottom: 1em; }
.minimal-section h2 { font-size: 0.95em; font-weight: 600; text-transform: uppercase; letter-spacing: 0.12em; color: #555; margin: 0 0 0.4em; }
.minimal-entry { margin-bottom: 0.6em; }
.minimal-meta { color: #666; font-size: 0.9em; }
.minimal-entry p { margin: 0.2em 0; }
.minimal-list { margin: 0.2em 0 0 1.1em; padding: 0; }
</style>"#;

pub fn render(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut html = Html::new();
    html.raw(STYLE).open("div", "minimal-resume");

    html.element("h1", "minimal-name", &info.full_name())
        .open("div", "minimal-contact")
        .joined(
            [
                info.title.as_str(),
                info.email.as_str(),
                info.phone.as_str(),
                info.location.as_str(),
                info.linkedin.as_deref().unwrap_or_default(),
                info.portfolio.as_deref().unwrap_or_default(),
            ],
            " / ",
        )
        .close("div");

    if present(&resume.summary) {
        html.open("section", "minimal-section")
            .element("h2", "", "Summary")
            .element("p", "", &resume.summary)
            .close("section");
    }

    if !resume.experience.is_empty() {
        html.open("section", "minimal-section")
            .element("h2", "", "Experience");
        for job in &resume.experience {
            html.open("div", "minimal-entry")
                .open("div", "")
                .element("strong", "", &job.title);
            if present(&job.company) {
                html.text(", ").text(&job.company);
            }
            html.close("div")
                .open("div", "minimal-meta")
                .joined([job.period.as_str(), job.location.as_str()], " \u{00b7} ")
                .close("div")
                .element_if("p", "", &job.description)
                .list("minimal-list", &job.achievements)
                .close("div");
        }
        html.close("section");
    }

    if !resume.education.is_empty() {
        html.open("section", "minimal-section")
            .element("h2", "", "Education");
        for school in &resume.education {
            html.open("div", "minimal-entry")
                .element("strong", "", &school.institution)
                .element("div", "", &school.degree_line())
                .open("div", "minimal-meta")
                .text(&school.period);
            if present(&school.gpa) {
                html.text(&format!(" \u{00b7} GPA {}", school.gpa.trim()));
            }
            html.close("div")
                .element_if("p", "", &school.additional_info)
                .close("div");
        }
        html.close("section");
    }

    if any_present(&resume.skills) {
        html.open("section", "minimal-section")
            .element("h2", "", "Skills")
            .list("minimal-list", &resume.skills)
            .close("section");
    }

    if !resume.certifications.is_empty() {
        html.open("section", "minimal-section")
            .element("h2", "", "Certifications");
        for cert in &resume.certifications {
            html.open("div", "minimal-entry")
                .element("strong", "", &cert.name)
                .open("div", "minimal-meta")
                .joined([cert.issuer.as_str(), cert.date.as_str()], " \u{00b7} ")
                .close("div")
                .close("div");
        }
        html.close("section");
    }

    html.close("div");
    html.finish()
}
