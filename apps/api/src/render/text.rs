//! Plain-text rendering for the `txt` export format. Section rules mirror the
//! HTML templates: empty collections produce no heading.

use std::fmt::Write;

use crate::models::Resume;
use crate::render::html::{any_present, present};

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title.to_uppercase(), "-".repeat(title.len()));
}

pub fn render_plain_text(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut out = String::new();

    let _ = writeln!(out, "{}", info.full_name());
    if present(&info.title) {
        let _ = writeln!(out, "{}", info.title.trim());
    }
    let contact: Vec<&str> = [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.linkedin.as_deref().unwrap_or_default(),
        info.portfolio.as_deref().unwrap_or_default(),
    ]
    .into_iter()
    .filter(|s| present(s))
    .collect();
    let _ = writeln!(out, "{}", contact.join(" | "));

    if present(&resume.summary) {
        heading(&mut out, "Summary");
        let _ = writeln!(out, "{}", resume.summary.trim());
    }

    if !resume.experience.is_empty() {
        heading(&mut out, "Experience");
        for job in &resume.experience {
            let _ = writeln!(out, "{}, {} ({})", job.title, job.company, job.period);
            if present(&job.location) {
                let _ = writeln!(out, "{}", job.location);
            }
            if present(&job.description) {
                let _ = writeln!(out, "{}", job.description.trim());
            }
            for achievement in job.achievements.iter().filter(|a| present(a)) {
                let _ = writeln!(out, "  - {}", achievement.trim());
            }
            out.push('\n');
        }
    }

    if !resume.education.is_empty() {
        heading(&mut out, "Education");
        for school in &resume.education {
            let _ = writeln!(out, "{} ({})", school.institution, school.period);
            let _ = writeln!(out, "{}", school.degree_line());
            if present(&school.gpa) {
                let _ = writeln!(out, "GPA: {}", school.gpa.trim());
            }
            if present(&school.additional_info) {
                let _ = writeln!(out, "{}", school.additional_info.trim());
            }
        }
    }

    if any_present(&resume.skills) {
        heading(&mut out, "Skills");
        let skills: Vec<&str> = resume
            .skills
            .iter()
            .map(String::as_str)
            .filter(|s| present(s))
            .collect();
        let _ = writeln!(out, "{}", skills.join(", "));
    }

    if !resume.certifications.is_empty() {
        heading(&mut out, "Certifications");
        for cert in &resume.certifications {
            let _ = writeln!(out, "{} - {} ({})", cert.name, cert.issuer, cert.date);
        }
    }

    out
}
