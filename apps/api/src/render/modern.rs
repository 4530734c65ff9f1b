//! Modern: two-tone header band, accent-coloured section rules.

use crate::models::Resume;
use crate::render::html::{any_present, present, Html};

const STYLE: &str = r#"<style>
.modern-resume { color: #1f2937; }
.modern-header { border-bottom: 3px solid #2563eb; padding-bottom: 0.6em; margin-bottom: 0.8em; }
.modern-name { font-size: 2em; font-weight: 700; margin: 0; color: #111827; }
.modern-title { font-size: 1.15em; color: #2563eb; margin: 0.15em 0 0.35em; }
.modern-contact { font-size: 0.9em; color: #4b5563; }
.modern-section { margin-bottom: 0.9em; }
.modern-section h2 { font-size: 1.1em; text-transform: uppercase; letter-spacing: 0.06em; color: #2563eb; border-bottom: 1px solid #dbeafe; padding-bottom: 0.15em; margin: 0 0 0.45em; }
.modern-entry { margin-bottom: 0.6em; }
.modern-entry-head { display: flex; justify-content: space-between; font-weight: 600; }
.modern-entry-sub { display: flex; justify-content: space-between; font-style: italic; color: #4b5563; }
.modern-entry p { margin: 0.2em 0; }
.modern-achievements { margin: 0.2em 0 0 1.2em; padding: 0; }
.modern-skills { display: flex; flex-wrap: wrap; gap: 0.35em; }
.modern-skill { background: #eff6ff; color: #1e40af; border-radius: 3px; padding: 0.1em 0.5em; font-size: 0.9em; }
</style>"#;

pub fn render(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut html = Html::new();
    html.raw(STYLE).open("div", "modern-resume");

    html.open("header", "modern-header")
        .element("h1", "modern-name", &info.full_name())
        .element_if("div", "modern-title", &info.title)
        .open("div", "modern-contact")
        .joined(
            [
                info.email.as_str(),
                info.phone.as_str(),
                info.location.as_str(),
                info.linkedin.as_deref().unwrap_or_default(),
                info.portfolio.as_deref().unwrap_or_default(),
            ],
            " | ",
        )
        .close("div")
        .close("header");

    if present(&resume.summary) {
        html.open("section", "modern-section")
            .element("h2", "", "Professional Summary")
            .element("p", "", &resume.summary)
            .close("section");
    }

    if !resume.experience.is_empty() {
        html.open("section", "modern-section")
            .element("h2", "", "Experience");
        for job in &resume.experience {
            html.open("div", "modern-entry")
                .open("div", "modern-entry-head")
                .element("span", "", &job.title)
                .element("span", "", &job.period)
                .close("div")
                .open("div", "modern-entry-sub")
                .element("span", "", &job.company)
                .element("span", "", &job.location)
                .close("div")
                .element_if("p", "", &job.description)
                .list("modern-achievements", &job.achievements)
                .close("div");
        }
        html.close("section");
    }

    if !resume.education.is_empty() {
        html.open("section", "modern-section")
            .element("h2", "", "Education");
        for school in &resume.education {
            html.open("div", "modern-entry")
                .open("div", "modern-entry-head")
                .element("span", "", &school.institution)
                .element("span", "", &school.period)
                .close("div")
                .open("div", "modern-entry-sub")
                .element("span", "", &school.degree_line());
            if present(&school.gpa) {
                html.element("span", "", &format!("GPA: {}", school.gpa.trim()));
            }
            html.close("div")
                .element_if("p", "", &school.additional_info)
                .close("div");
        }
        html.close("section");
    }

    if any_present(&resume.skills) {
        html.open("section", "modern-section")
            .element("h2", "", "Skills")
            .open("div", "modern-skills");
        for skill in resume.skills.iter().filter(|s| present(s)) {
            html.element("span", "modern-skill", skill);
        }
        html.close("div").close("section");
    }

    if !resume.certifications.is_empty() {
        html.open("section", "modern-section")
            .element("h2", "", "Certifications");
        for cert in &resume.certifications {
            html.open("div", "modern-entry-head")
                .open("span", "")
                .text(&cert.name);
            if present(&cert.issuer) {
                html.text(" - ").text(&cert.issuer);
            }
            html.close("span")
                .element("span", "", &cert.date)
                .close("div");
        }
        html.close("section");
    }

    html.close("div");
    html.finish()
}
