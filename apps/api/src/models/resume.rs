//! The resume record submitted by the form UI and serialized wholesale on every
//! persist, export, and AI call.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Missing keys deserialize as blank so `Resume::validate` can name them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub additional_info: String,
}

impl Education {
    /// "BS in CS", or just the degree when no field of study is given.
    pub fn degree_line(&self) -> String {
        match (self.degree.trim(), self.field.trim()) {
            (degree, "") => degree.to_string(),
            ("", field) => field.to_string(),
            (degree, field) => format!("{degree} in {field}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetJob {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<Certification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_job: Option<TargetJob>,
}

impl Resume {
    /// Checks that every required personal-info field is non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let info = &self.personal_info;
        let required = [
            ("personalInfo.firstName", &info.first_name),
            ("personalInfo.lastName", &info.last_name),
            ("personalInfo.title", &info.title),
            ("personalInfo.email", &info.email),
            ("personalInfo.phone", &info.phone),
            ("personalInfo.location", &info.location),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        Ok(())
    }

    /// The populated record a new user starts editing from.
    pub fn sample() -> Self {
        Resume {
            personal_info: PersonalInfo {
                first_name: "Alex".to_string(),
                last_name: "Morgan".to_string(),
                title: "Senior Software Engineer".to_string(),
                email: "alex.morgan@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: Some("linkedin.com/in/alexmorgan".to_string()),
                portfolio: Some("alexmorgan.dev".to_string()),
            },
            summary: "Software engineer with 7 years of experience building reliable web \
                      services and data pipelines. Comfortable owning features from design \
                      through production support."
                .to_string(),
            experience: vec![
                Experience {
                    company: "Northwind Labs".to_string(),
                    title: "Senior Software Engineer".to_string(),
                    location: "San Francisco, CA".to_string(),
                    period: "2021 - Present".to_string(),
                    description: "Lead engineer on the billing platform team.".to_string(),
                    achievements: vec![
                        "Cut invoice generation time by 60% by batching database writes"
                            .to_string(),
                        "Mentored 4 engineers through their first on-call rotations".to_string(),
                    ],
                },
                Experience {
                    company: "Contoso".to_string(),
                    title: "Software Engineer".to_string(),
                    location: "Seattle, WA".to_string(),
                    period: "2017 - 2021".to_string(),
                    description: "Built internal tooling for the data warehouse.".to_string(),
                    achievements: vec![
                        "Shipped a self-serve reporting tool used by 300+ analysts".to_string(),
                    ],
                },
            ],
            education: vec![Education {
                institution: "University of Washington".to_string(),
                degree: "BS".to_string(),
                field: "Computer Science".to_string(),
                period: "2013 - 2017".to_string(),
                gpa: "3.7".to_string(),
                additional_info: String::new(),
            }],
            skills: vec![
                "TypeScript".to_string(),
                "Python".to_string(),
                "React".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ],
            certifications: vec![Certification {
                name: "AWS Certified Developer".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2022".to_string(),
            }],
            target_job: None,
        }
    }
}

/// Treats an explicit JSON `null` the same as a missing array.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_resume_is_valid() {
        assert!(Resume::sample().validate().is_ok());
    }

    #[test]
    fn test_blank_first_name_fails_validation() {
        let mut resume = Resume::sample();
        resume.personal_info.first_name = "   ".to_string();
        assert_eq!(
            resume.validate(),
            Err(ValidationError::MissingField {
                field: "personalInfo.firstName"
            })
        );
    }

    #[test]
    fn test_linkedin_and_portfolio_are_optional() {
        let mut resume = Resume::sample();
        resume.personal_info.linkedin = None;
        resume.personal_info.portfolio = None;
        assert!(resume.validate().is_ok());
    }

    #[test]
    fn test_null_and_missing_arrays_deserialize_as_empty() {
        let value = json!({
            "personalInfo": {
                "firstName": "Jane", "lastName": "Doe", "title": "Engineer",
                "email": "jane@example.com", "phone": "555", "location": "Boston"
            },
            "summary": "",
            "experience": null,
            "skills": ["Go"]
        });
        let resume: Resume = serde_json::from_value(value).unwrap();
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.certifications.is_empty());
        assert_eq!(resume.skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_missing_personal_fields_surface_as_validation_errors() {
        let value = json!({
            "personalInfo": {
                "firstName": "Jane", "lastName": "Doe", "title": "Engineer",
                "phone": "555", "location": "Boston"
            }
        });
        let resume: Resume = serde_json::from_value(value).unwrap();
        assert_eq!(
            resume.validate(),
            Err(ValidationError::MissingField {
                field: "personalInfo.email"
            })
        );

        let bare: Resume = serde_json::from_value(json!({ "skills": ["Go"] })).unwrap();
        assert_eq!(
            bare.validate(),
            Err(ValidationError::MissingField {
                field: "personalInfo.firstName"
            })
        );
    }

    #[test]
    fn test_camel_case_wire_format() {
        let value = serde_json::to_value(Resume::sample()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value["personalInfo"].get("firstName").is_some());
        assert!(value["education"][0].get("additionalInfo").is_some());
    }

    #[test]
    fn test_degree_line() {
        let education = Education {
            degree: "BS".to_string(),
            field: "CS".to_string(),
            ..Default::default()
        };
        assert_eq!(education.degree_line(), "BS in CS");

        let no_field = Education {
            degree: "MBA".to_string(),
            ..Default::default()
        };
        assert_eq!(no_field.degree_line(), "MBA");
    }
}
