use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::format::{bullets_array_to_text, bullets_text_to_array, format_period};

use super::fields::{none_if_empty, optional_iso_date, optional_url};

/// One row of the `experiences` table. Dates travel as opaque ISO strings
/// so a malformed value degrades in display instead of failing the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "from")]
    pub from_date: Option<String>,
    #[serde(rename = "to")]
    pub to_date: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub company_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Experience {
    /// Newline-delimited bullets for the edit form.
    pub fn bullets_text(&self) -> String {
        bullets_array_to_text(&self.bullets)
    }
}

// ───── Input & Validation ───────────────────────────────────────────

/// Admin form submission. Empty strings mean "not set"; bullets arrive as
/// the newline-delimited editor text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    #[validate(custom(function = "optional_iso_date"))]
    pub from: String,

    #[serde(default)]
    #[validate(custom(function = "optional_iso_date"))]
    pub to: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub bullets_text: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub company_link: String,
}

impl ExperienceRequest {
    pub fn prepare_for_insert(&self) -> ExperiencePayload {
        ExperiencePayload {
            company: none_if_empty(&self.company),
            role: none_if_empty(&self.role),
            from: none_if_empty(&self.from),
            to: none_if_empty(&self.to),
            summary: none_if_empty(&self.summary),
            bullets: bullets_text_to_array(&self.bullets_text),
            company_link: none_if_empty(&self.company_link),
        }
    }

    pub fn prepare_for_update(&self) -> ExperiencePayload {
        self.prepare_for_insert()
    }
}

/// Insert/update body for the `experiences` table.
#[derive(Debug, Clone, Serialize)]
pub struct ExperiencePayload {
    pub company: Option<String>,
    pub role: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub summary: Option<String>,
    pub bullets: Vec<String>,
    pub company_link: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

/// Public timeline entry with the period pre-formatted for display.
#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub company: String,
    pub role: String,
    pub period: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub company_link: Option<String>,
}

impl From<&Experience> for ExperienceResponse {
    fn from(exp: &Experience) -> Self {
        ExperienceResponse {
            company: exp.company.clone().unwrap_or_default(),
            role: exp.role.clone().unwrap_or_default(),
            period: format_period(exp.from_date.as_deref(), exp.to_date.as_deref()),
            summary: exp.summary.clone().unwrap_or_default(),
            bullets: exp.bullets.clone(),
            company_link: exp.company_link.clone(),
        }
    }
}

/// Admin listing entry; carries the editable bullets text alongside the row.
#[derive(Debug, Serialize)]
pub struct ExperienceAdminResponse {
    #[serde(flatten)]
    pub experience: Experience,
    pub bullets_text: String,
    pub period: String,
}

impl From<Experience> for ExperienceAdminResponse {
    fn from(experience: Experience) -> Self {
        let bullets_text = experience.bullets_text();
        let period = format_period(
            experience.from_date.as_deref(),
            experience.to_date.as_deref(),
        );
        ExperienceAdminResponse {
            experience,
            bullets_text,
            period,
        }
    }
}
