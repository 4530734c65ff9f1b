//! Keyword bucketing of a flat skill list into the labelled rows used by the
//! Jake Gutierrez template.
//!
//! Matching is a case-insensitive substring test, so "java" also claims
//! "JavaScript" and "go" claims "Django". Categories are tried in order and the
//! first hit wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillBucket {
    pub label: String,
    pub skills: Vec<String>,
}

fn category(label: &str, keywords: &[&str]) -> SkillCategory {
    SkillCategory {
        label: label.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

impl Default for SkillCategories {
    fn default() -> Self {
        Self {
            categories: vec![
                category(
                    "Languages",
                    &[
                        "javascript", "typescript", "python", "java", "c++", "c#", "ruby",
                        "go", "rust", "php", "swift", "kotlin", "scala", "sql", "html", "css",
                    ],
                ),
                category(
                    "Frameworks",
                    &[
                        "react", "angular", "vue", "node", "express", "django", "flask",
                        "spring", "next", "rails", "laravel", "svelte", ".net", "fastapi",
                    ],
                ),
                category(
                    "Developer Tools",
                    &[
                        "git", "docker", "kubernetes", "aws", "azure", "gcp", "jenkins",
                        "jira", "figma", "linux", "postgres", "mysql", "mongodb", "redis",
                        "terraform", "vs code",
                    ],
                ),
            ],
        }
    }
}

impl SkillCategories {
    /// Buckets `skills` into one row per category, preserving input order.
    ///
    /// Skills matching no keyword join the last category. When no skill
    /// matches at all the list is split into consecutive thirds instead.
    pub fn bucket(&self, skills: &[String]) -> Vec<SkillBucket> {
        let mut buckets: Vec<SkillBucket> = self
            .categories
            .iter()
            .map(|c| SkillBucket {
                label: c.label.clone(),
                skills: Vec::new(),
            })
            .collect();
        if buckets.is_empty() {
            return buckets;
        }

        let skills: Vec<&String> = skills.iter().filter(|s| !s.trim().is_empty()).collect();
        let matches: Vec<Option<usize>> = skills.iter().map(|s| self.match_category(s)).collect();

        if matches.iter().all(Option::is_none) {
            let per_bucket = skills.len().div_ceil(buckets.len()).max(1);
            for (i, skill) in skills.into_iter().enumerate() {
                buckets[i / per_bucket].skills.push(skill.clone());
            }
            return buckets;
        }

        let last = buckets.len() - 1;
        for (skill, matched) in skills.into_iter().zip(matches) {
            buckets[matched.unwrap_or(last)].skills.push(skill.clone());
        }
        buckets
    }

    fn match_category(&self, skill: &str) -> Option<usize> {
        let skill = skill.to_lowercase();
        self.categories
            .iter()
            .position(|c| c.keywords.iter().any(|k| skill.contains(k.as_str())))
    }
}
