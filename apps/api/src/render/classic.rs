//! Classic: centred serif header, small-caps section titles, ruled dividers.

use crate::models::Resume;
use crate::render::html::{any_present, present, Html};

const STYLE: &str = r#"<style>
.classic-resume { color: #000; }
.classic-header { text-align: center; margin-bottom: 0.8em; }
.classic-name { font-size: 1.9em; font-variant: small-caps; letter-spacing: 0.04em; margin: 0; }
.classic-title { font-style: italic; margin: 0.1em 0; }
.classic-contact { font-size: 0.9em; }
.classic-section { margin-bottom: 0.8em; }
.classic-section h2 { font-size: 1.05em; font-variant: small-caps; border-bottom: 1px solid #000; margin: 0 0 0.4em; }
.classic-entry { margin-bottom: 0.55em; }
.classic-row { display: flex; justify-content: space-between; }
.classic-strong { font-weight: bold; }
.classic-em { font-style: italic; }
.classic-entry p { margin: 0.2em 0; }
.classic-list { margin: 0.2em 0 0 1.3em; padding: 0; }
.classic-skills { margin: 0; }
</style>"#;

pub fn render(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut html = Html::new();
    html.raw(STYLE).open("div", "classic-resume");

    html.open("div", "classic-header")
        .element("h1", "classic-name", &info.full_name())
        .element_if("div", "classic-title", &info.title)
        .open("div", "classic-contact")
        .joined(
            [
                info.location.as_str(),
                info.phone.as_str(),
                info.email.as_str(),
                info.linkedin.as_deref().unwrap_or_default(),
                info.portfolio.as_deref().unwrap_or_default(),
            ],
            " \u{2022} ",
        )
        .close("div")
        .close("div");

    if present(&resume.summary) {
        html.open("div", "classic-section")
            .element("h2", "", "Summary")
            .element("p", "", &resume.summary)
            .close("div");
    }

    if !resume.experience.is_empty() {
        html.open("div", "classic-section")
            .element("h2", "", "Professional Experience");
        for job in &resume.experience {
            html.open("div", "classic-entry")
                .open("div", "classic-row")
                .element("span", "classic-strong", &job.company)
                .element("span", "", &job.location)
                .close("div")
                .open("div", "classic-row")
                .element("span", "classic-em", &job.title)
                .element("span", "classic-em", &job.period)
                .close("div")
                .element_if("p", "", &job.description)
                .list("classic-list", &job.achievements)
                .close("div");
        }
        html.close("div");
    }

    if !resume.education.is_empty() {
        html.open("div", "classic-section")
            .element("h2", "", "Education");
        for school in &resume.education {
            html.open("div", "classic-entry")
                .open("div", "classic-row")
                .element("span", "classic-strong", &school.institution)
                .element("span", "", &school.period)
                .close("div")
                .open("div", "classic-em")
                .text(&school.degree_line());
            if present(&school.gpa) {
                html.text(&format!(", GPA {}", school.gpa.trim()));
            }
            html.close("div")
                .element_if("p", "", &school.additional_info)
                .close("div");
        }
        html.close("div");
    }

    if any_present(&resume.skills) {
        html.open("div", "classic-section")
            .element("h2", "", "Skills")
            .open("p", "classic-skills")
            .joined(resume.skills.iter().map(String::as_str), ", ")
            .close("p")
            .close("div");
    }

    if !resume.certifications.is_empty() {
        html.open("div", "classic-section")
            .element("h2", "", "Certifications")
            .open("ul", "classic-list");
        for cert in &resume.certifications {
            html.open("li", "")
                .element("span", "classic-strong", &cert.name);
            if present(&cert.issuer) || present(&cert.date) {
                html.text(", ")
                    .joined([cert.issuer.as_str(), cert.date.as_str()], ", ");
            }
            html.close("li");
        }
        html.close("ul").close("div");
    }

    html.close("div");
    html.finish()
}
