use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::fields::non_blank;

/// One row of the `skills` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub skill: Option<String>,
}

/// Reduced projection used by the project form's tech-stack picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOption {
    pub id: Uuid,
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(custom(function = "non_blank", message = "Skill name cannot be empty"))]
    pub skill: String,
}

impl NewSkill {
    pub fn prepare_for_insert(&self) -> SkillInsert {
        SkillInsert {
            skill: self.skill.trim().to_string(),
        }
    }
}

/// Insert/update body for the `skills` table.
#[derive(Debug, Serialize)]
pub struct SkillInsert {
    pub skill: String,
}
