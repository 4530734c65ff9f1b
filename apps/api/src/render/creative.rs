//! Creative: coloured sidebar with contact, skills, and certifications beside
//! the main column.

use crate::models::Resume;
use crate::render::html::{any_present, present, Html};

const STYLE: &str = r#"<style>
.creative-resume { display: flex; min-height: 100%; color: #2d2d2d; }
.creative-sidebar { width: 32%; background: #312e81; color: #eef2ff; padding: 1.2em 1em; box-sizing: border-box; }
.creative-main { width: 68%; padding: 1.2em 1.3em; box-sizing: border-box; }
.creative-name { font-size: 1.8em; line-height: 1.1; margin: 0 0 0.2em; }
.creative-title { color: #a5b4fc; font-weight: 600; margin-bottom: 1em; }
.creative-sidebar h2 { font-size: 0.95em; text-transform: uppercase; letter-spacing: 0.1em; color: #c7d2fe; border-bottom: 1px solid #6366f1; margin: 1em 0 0.4em; }
.creative-contact div { font-size: 0.85em; margin-bottom: 0.25em; word-break: break-word; }
.creative-tags { list-style: none; margin: 0; padding: 0; }
.creative-tags li { display: inline-block; background: #4338ca; border-radius: 10px; padding: 0.1em 0.6em; margin: 0 0.25em 0.3em 0; font-size: 0.85em; }
.creative-main h2 { font-size: 1.15em; color: #4338ca; margin: 0 0 0.4em; }
.creative-section { margin-bottom: 1em; }
.creative-entry { border-left: 3px solid #c7d2fe; padding-left: 0.7em; margin-bottom: 0.7em; }
.creative-entry-title { font-weight: 700; }
.creative-entry-meta { font-size: 0.88em; color: #6b7280; }
.creative-entry p { margin: 0.2em 0; }
.creative-list { margin: 0.2em 0 0 1.1em; padding: 0; }
.creative-cert { font-size: 0.85em; margin-bottom: 0.4em; }
</style>"#;

pub fn render(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut html = Html::new();
    html.raw(STYLE).open("div", "creative-resume");

    // Sidebar
    html.open("aside", "creative-sidebar")
        .element("h1", "creative-name", &info.full_name())
        .element_if("div", "creative-title", &info.title)
        .element("h2", "", "Contact")
        .open("div", "creative-contact");
    for line in [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.linkedin.as_deref().unwrap_or_default(),
        info.portfolio.as_deref().unwrap_or_default(),
    ] {
        html.element_if("div", "", line);
    }
    html.close("div");

    if any_present(&resume.skills) {
        html.element("h2", "", "Skills")
            .list("creative-tags", &resume.skills);
    }

    if !resume.certifications.is_empty() {
        html.element("h2", "", "Certifications");
        for cert in &resume.certifications {
            html.open("div", "creative-cert")
                .element("strong", "", &cert.name)
                .open("div", "")
                .joined([cert.issuer.as_str(), cert.date.as_str()], ", ")
                .close("div")
                .close("div");
        }
    }
    html.close("aside");

    // Main column
    html.open("main", "creative-main");

    if present(&resume.summary) {
        html.open("section", "creative-section")
            .element("h2", "", "Profile")
            .element("p", "", &resume.summary)
            .close("section");
    }

    if !resume.experience.is_empty() {
        html.open("section", "creative-section")
            .element("h2", "", "Work Experience");
        for job in &resume.experience {
            html.open("div", "creative-entry")
                .open("div", "creative-entry-title")
                .text(&job.title);
            if present(&job.company) {
                html.text(" @ ").text(&job.company);
            }
            html.close("div")
                .open("div", "creative-entry-meta")
                .joined([job.period.as_str(), job.location.as_str()], " | ")
                .close("div")
                .element_if("p", "", &job.description)
                .list("creative-list", &job.achievements)
                .close("div");
        }
        html.close("section");
    }

    if !resume.education.is_empty() {
        html.open("section", "creative-section")
            .element("h2", "", "Education");
        for school in &resume.education {
            html.open("div", "creative-entry")
                .element("div", "creative-entry-title", &school.degree_line())
                .open("div", "creative-entry-meta")
                .joined([school.institution.as_str(), school.period.as_str()], " | ");
            if present(&school.gpa) {
                html.text(&format!(" | GPA {}", school.gpa.trim()));
            }
            html.close("div")
                .element_if("p", "", &school.additional_info)
                .close("div");
        }
        html.close("section");
    }

    html.close("main").close("div");
    html.finish()
}
