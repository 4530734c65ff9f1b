//! Jake Gutierrez: the LaTeX-style one-pager with ruled small-caps headings,
//! right-aligned dates, and a bucketed technical skills block.

use crate::models::Resume;
use crate::render::html::{any_present, present, Html};
use crate::render::skills::SkillCategories;

const STYLE: &str = r#"<style>
.jake-resume { font-family: 'Latin Modern Roman', 'CMU Serif', 'Times New Roman', serif; color: #000; }
.jake-heading { text-align: center; margin-bottom: 0.5em; }
.jake-name { font-size: 2.2em; font-variant: small-caps; font-weight: bold; margin: 0; }
.jake-contact { font-size: 0.9em; }
.jake-section { margin-top: 0.55em; }
.jake-section h2 { font-size: 1.15em; font-variant: small-caps; font-weight: normal; border-bottom: 0.8px solid #000; margin: 0 0 0.3em; padding-bottom: 0.05em; }
.jake-item { margin: 0 0 0.4em 0.6em; }
.jake-row { display: flex; justify-content: space-between; }
.jake-bold { font-weight: bold; }
.jake-italic { font-style: italic; font-size: 0.92em; }
.jake-item p { margin: 0.1em 0 0.1em 0.8em; font-size: 0.92em; }
.jake-bullets { margin: 0.1em 0 0 1.6em; padding: 0; font-size: 0.92em; }
.jake-bullets li { margin-bottom: 0.08em; }
.jake-skills { margin: 0 0 0 0.6em; font-size: 0.92em; }
.jake-skills div { margin-bottom: 0.1em; }
</style>"#;

pub fn render(resume: &Resume) -> String {
    render_with_categories(resume, &SkillCategories::default())
}

pub fn render_with_categories(resume: &Resume, categories: &SkillCategories) -> String {
    let info = &resume.personal_info;
    let mut html = Html::new();
    html.raw(STYLE).open("div", "jake-resume");

    html.open("div", "jake-heading")
        .element("h1", "jake-name", &info.full_name())
        .open("div", "jake-contact")
        .joined(
            [
                info.phone.as_str(),
                info.email.as_str(),
                info.location.as_str(),
                info.linkedin.as_deref().unwrap_or_default(),
                info.portfolio.as_deref().unwrap_or_default(),
            ],
            " | ",
        )
        .close("div")
        .close("div");

    if present(&resume.summary) {
        html.open("div", "jake-section")
            .element("h2", "", "Summary")
            .open("div", "jake-item")
            .text(&resume.summary)
            .close("div")
            .close("div");
    }

    if !resume.education.is_empty() {
        html.open("div", "jake-section")
            .element("h2", "", "Education");
        for school in &resume.education {
            html.open("div", "jake-item")
                .open("div", "jake-row")
                .element("span", "jake-bold", &school.institution)
                .element("span", "", &school.period)
                .close("div")
                .open("div", "jake-row jake-italic")
                .element("span", "", &school.degree_line());
            if present(&school.gpa) {
                html.element("span", "", &format!("GPA: {}", school.gpa.trim()));
            }
            html.close("div")
                .element_if("p", "", &school.additional_info)
                .close("div");
        }
        html.close("div");
    }

    if !resume.experience.is_empty() {
        html.open("div", "jake-section")
            .element("h2", "", "Experience");
        for job in &resume.experience {
            html.open("div", "jake-item")
                .open("div", "jake-row")
                .element("span", "jake-bold", &job.title)
                .element("span", "", &job.period)
                .close("div")
                .open("div", "jake-row jake-italic")
                .element("span", "", &job.company)
                .element("span", "", &job.location)
                .close("div")
                .element_if("p", "", &job.description)
                .list("jake-bullets", &job.achievements)
                .close("div");
        }
        html.close("div");
    }

    if any_present(&resume.skills) {
        html.open("div", "jake-section")
            .element("h2", "", "Technical Skills")
            .open("div", "jake-skills");
        for bucket in categories.bucket(&resume.skills) {
            if bucket.skills.is_empty() {
                continue;
            }
            html.open("div", "")
                .element("span", "jake-bold", &format!("{}: ", bucket.label))
                .joined(bucket.skills.iter().map(String::as_str), ", ")
                .close("div");
        }
        html.close("div").close("div");
    }

    if !resume.certifications.is_empty() {
        html.open("div", "jake-section")
            .element("h2", "", "Certifications");
        for cert in &resume.certifications {
            html.open("div", "jake-item jake-row")
                .open("span", "")
                .element("span", "jake-bold", &cert.name);
            if present(&cert.issuer) {
                html.text(&format!(", {}", cert.issuer.trim()));
            }
            html.close("span")
                .element("span", "", &cert.date)
                .close("div");
        }
        html.close("div");
    }

    html.close("div");
    html.finish()
}
