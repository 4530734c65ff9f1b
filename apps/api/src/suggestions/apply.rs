//! Writes a suggested value back into the resume at a path such as
//! `experience[1].achievements`. Anything malformed leaves the resume untouched.

use serde_json::Value;

use crate::models::Resume;

/// Splits `experience[0].title` or `experience.0.title` into segments.
fn segments(path: &str) -> Vec<String> {
    path.replace('[', ".")
        .replace(']', "")
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Array of strings, or a string split on newlines (falling back to commas).
/// `None` when nothing non-blank remains.
fn as_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?,
        Value::String(s) if s.contains('\n') => s.lines().map(str::to_string).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        _ => return None,
    };

    let items: Vec<String> = items
        .iter()
        .map(|item| item.trim().trim_start_matches(['-', '*', '\u{2022}']).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

/// A blank value is malformed and leaves the field as it was.
fn set_text(slot: &mut String, value: &Value) -> bool {
    match as_text(value).filter(|text| !text.is_empty()) {
        Some(text) => {
            *slot = text;
            true
        }
        None => false,
    }
}

/// Optional text: a blank value clears the field.
fn set_optional(slot: &mut Option<String>, value: &Value) -> bool {
    match as_text(value) {
        Some(text) => {
            *slot = (!text.is_empty()).then_some(text);
            true
        }
        None => false,
    }
}

fn set_list(slot: &mut Vec<String>, value: &Value) -> bool {
    match as_list(value) {
        Some(items) => {
            *slot = items;
            true
        }
        None => false,
    }
}

/// Applies `value` at `path`. Returns whether the resume changed shape.
pub fn apply_suggestion(resume: &mut Resume, path: &str, value: &Value) -> bool {
    let segments = segments(path);
    let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

    match parts.as_slice() {
        ["summary"] => match as_text(value) {
            Some(text) => {
                resume.summary = text;
                true
            }
            None => false,
        },
        ["skills"] => set_list(&mut resume.skills, value),
        ["personalInfo", field] => {
            let info = &mut resume.personal_info;
            match *field {
                "firstName" => set_text(&mut info.first_name, value),
                "lastName" => set_text(&mut info.last_name, value),
                "title" => set_text(&mut info.title, value),
                "email" => set_text(&mut info.email, value),
                "phone" => set_text(&mut info.phone, value),
                "location" => set_text(&mut info.location, value),
                "linkedin" => set_optional(&mut info.linkedin, value),
                "portfolio" => set_optional(&mut info.portfolio, value),
                _ => false,
            }
        }
        ["experience", index, field] => {
            let Some(job) = index
                .parse::<usize>()
                .ok()
                .and_then(|i| resume.experience.get_mut(i))
            else {
                return false;
            };
            match *field {
                "company" => set_text(&mut job.company, value),
                "title" => set_text(&mut job.title, value),
                "location" => set_text(&mut job.location, value),
                "period" => set_text(&mut job.period, value),
                "description" => set_text(&mut job.description, value),
                "achievements" => set_list(&mut job.achievements, value),
                _ => false,
            }
        }
        ["education", index, field] => {
            let Some(school) = index
                .parse::<usize>()
                .ok()
                .and_then(|i| resume.education.get_mut(i))
            else {
                return false;
            };
            match *field {
                "institution" => set_text(&mut school.institution, value),
                "degree" => set_text(&mut school.degree, value),
                "field" => set_text(&mut school.field, value),
                "period" => set_text(&mut school.period, value),
                "gpa" => set_text(&mut school.gpa, value),
                "additionalInfo" => set_text(&mut school.additional_info, value),
                _ => false,
            }
        }
        ["certifications", index, field] => {
            let Some(cert) = index
                .parse::<usize>()
                .ok()
                .and_then(|i| resume.certifications.get_mut(i))
            else {
                return false;
            };
            match *field {
                "name" => set_text(&mut cert.name, value),
                "issuer" => set_text(&mut cert.issuer, value),
                "date" => set_text(&mut cert.date, value),
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_summary() {
        let mut resume = Resume::sample();
        assert!(apply_suggestion(&mut resume, "summary", &json!("  New summary. ")));
        assert_eq!(resume.summary, "New summary.");
    }

    #[test]
    fn test_apply_skills_from_array_and_string() {
        let mut resume = Resume::sample();
        assert!(apply_suggestion(&mut resume, "skills", &json!(["Rust", " Go "])));
        assert_eq!(resume.skills, vec!["Rust", "Go"]);

        assert!(apply_suggestion(&mut resume, "skills", &json!("SQL, Kafka,")));
        assert_eq!(resume.skills, vec!["SQL", "Kafka"]);
    }

    #[test]
    fn test_apply_indexed_experience_fields() {
        let mut resume = Resume::sample();
        assert!(apply_suggestion(
            &mut resume,
            "experience[1].description",
            &json!("Owned the reporting stack.")
        ));
        assert_eq!(resume.experience[1].description, "Owned the reporting stack.");

        assert!(apply_suggestion(
            &mut resume,
            "experience.0.achievements",
            &json!("- Cut costs 20%\n- Hired 3 engineers")
        ));
        assert_eq!(
            resume.experience[0].achievements,
            vec!["Cut costs 20%", "Hired 3 engineers"]
        );
    }

    #[test]
    fn test_apply_personal_info_and_education() {
        let mut resume = Resume::sample();
        assert!(apply_suggestion(&mut resume, "personalInfo.title", &json!("Staff Engineer")));
        assert_eq!(resume.personal_info.title, "Staff Engineer");
        assert!(apply_suggestion(&mut resume, "education[0].gpa", &json!(3.8)));
        assert_eq!(resume.education[0].gpa, "3.8");
    }

    #[test]
    fn test_malformed_input_leaves_resume_untouched() {
        let original = Resume::sample();
        let mut resume = original.clone();

        assert!(!apply_suggestion(&mut resume, "experience[9].title", &json!("x")));
        assert!(!apply_suggestion(&mut resume, "experience[a].title", &json!("x")));
        assert!(!apply_suggestion(&mut resume, "experience[0].salary", &json!("x")));
        assert!(!apply_suggestion(&mut resume, "summary", &json!(null)));
        assert!(!apply_suggestion(&mut resume, "summary", &json!({"text": "x"})));
        assert!(!apply_suggestion(&mut resume, "skills", &json!(["Rust", 7])));
        assert!(!apply_suggestion(&mut resume, "", &json!("x")));
        assert!(!apply_suggestion(&mut resume, "targetJob.title", &json!("x")));
        assert!(!apply_suggestion(&mut resume, "personalInfo.firstName", &json!("   ")));
        assert!(!apply_suggestion(&mut resume, "experience[0].company", &json!("")));
        assert!(!apply_suggestion(&mut resume, "skills", &json!("")));
        assert!(!apply_suggestion(&mut resume, "skills", &json!([" ", "-"])));
        assert!(!apply_suggestion(&mut resume, "experience[0].achievements", &json!([])));

        assert_eq!(resume, original);
    }

    #[test]
    fn test_optional_text_fields_can_be_cleared() {
        let mut resume = Resume::sample();
        resume.personal_info.linkedin = Some("linkedin.com/in/alex".to_string());

        assert!(apply_suggestion(&mut resume, "summary", &json!("")));
        assert!(resume.summary.is_empty());
        assert!(apply_suggestion(&mut resume, "personalInfo.linkedin", &json!("  ")));
        assert!(resume.personal_info.linkedin.is_none());
        assert!(resume.validate().is_ok());
    }
}
