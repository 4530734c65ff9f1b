//! Template rendering: pure functions from a [`Resume`] to an HTML fragment
//! (a scoped `<style>` block followed by the content markup).

pub mod document;
pub mod html;
pub mod layout;
pub mod skills;
pub mod text;

mod classic;
mod creative;
mod jakegut;
mod minimal;
mod modern;

use serde::{Deserialize, Serialize};

use crate::models::Resume;

pub use document::assemble;

/// The closed set of visual templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    JakeGut,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::JakeGut,
    ];

    /// Resolves a client-supplied identifier, case-insensitively.
    ///
    /// Unknown identifiers resolve to `Modern`; this is the documented
    /// default-on-miss policy, not an error.
    pub fn resolve(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "modern" => TemplateId::Modern,
            "classic" => TemplateId::Classic,
            "minimal" => TemplateId::Minimal,
            "creative" => TemplateId::Creative,
            "jakegut" => TemplateId::JakeGut,
            other => {
                tracing::debug!("Unknown template '{other}', using modern");
                TemplateId::Modern
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::JakeGut => "jakegut",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern",
            TemplateId::Classic => "Classic",
            TemplateId::Minimal => "Minimal",
            TemplateId::Creative => "Creative",
            TemplateId::JakeGut => "Jake Gutierrez",
        }
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        TemplateId::resolve(&id)
    }
}

/// Renders the template fragment for `template`.
pub fn render_fragment(resume: &Resume, template: TemplateId) -> String {
    match template {
        TemplateId::Modern => modern::render(resume),
        TemplateId::Classic => classic::render(resume),
        TemplateId::Minimal => minimal::render(resume),
        TemplateId::Creative => creative::render(resume),
        TemplateId::JakeGut => jakegut::render(resume),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::resume::{Education, PersonalInfo, Resume};

    /// Jane Doe: education and skills only.
    pub fn jane_doe() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                title: "Engineer".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Boston, MA".to_string(),
                linkedin: None,
                portfolio: None,
            },
            summary: String::new(),
            experience: vec![],
            education: vec![Education {
                institution: "MIT".to_string(),
                degree: "BS".to_string(),
                field: "CS".to_string(),
                period: "2018-2022".to_string(),
                gpa: "3.9".to_string(),
                additional_info: String::new(),
            }],
            skills: vec!["Go".to_string(), "Rust".to_string()],
            certifications: vec![],
            target_job: None,
        }
    }

    /// A resume with every collection empty.
    pub fn empty_sections() -> Resume {
        Resume {
            education: vec![],
            skills: vec![],
            ..jane_doe()
        }
    }

    /// Section headings each template uses, for absence checks.
    pub const HEADINGS: [&str; 10] = [
        ">Summary<",
        ">Professional Summary<",
        ">Profile<",
        ">Experience<",
        ">Work Experience<",
        ">Professional Experience<",
        ">Education<",
        ">Skills<",
        ">Technical Skills<",
        ">Certifications<",
    ];
}
