use actix_multipart::form::{json::Json as MpJson, tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::fields::{none_if_empty, optional_url};
use super::skill::SkillOption;

/// Raw `projects` row with the embedded `project_tech_stacks` join, exactly
/// as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub git_link: Option<String>,
    pub demo_link: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub project_tech_stacks: Vec<TechStackRow>,
}

/// One embedded join row; `skills` is null when the referenced skill has
/// been deleted out from under the join.
#[derive(Debug, Clone, Deserialize)]
pub struct TechStackRow {
    pub skill_id: Option<Uuid>,
    pub skills: Option<SkillOption>,
}

/// UI-ready project record: nulls flattened to empty strings, tech stack
/// resolved to parallel name/id lists.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub git_link: String,
    pub demo_link: String,
    pub created_at: DateTime<Utc>,
    pub tech_stack: Vec<String>,
    pub tech_stack_ids: Vec<Uuid>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let linked: Vec<SkillOption> = row
            .project_tech_stacks
            .into_iter()
            .filter_map(|pts| pts.skills)
            .collect();

        Project {
            id: row.id,
            title: row.title.unwrap_or_default(),
            thumbnail: row.thumbnail.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            git_link: row.git_link.unwrap_or_default(),
            demo_link: row.demo_link.unwrap_or_default(),
            created_at: row.created_at,
            tech_stack: linked
                .iter()
                .map(|s| s.skill.clone().unwrap_or_default())
                .collect(),
            tech_stack_ids: linked.iter().map(|s| s.id).collect(),
        }
    }
}

/// Public project card: empty links drop to null so the page can decide
/// which actions to render.
#[derive(Debug, Serialize)]
pub struct ProjectCardResponse {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub href: Option<String>,
    pub repo: Option<String>,
    pub image_src: Option<String>,
}

impl From<&Project> for ProjectCardResponse {
    fn from(project: &Project) -> Self {
        ProjectCardResponse {
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech_stack.clone(),
            href: none_if_empty(&project.demo_link),
            repo: none_if_empty(&project.git_link),
            image_src: none_if_empty(&project.thumbnail),
        }
    }
}

// ───── Input & Validation ───────────────────────────────────────────

/// Project form submission. The thumbnail field carries the already-durable
/// URL (existing or previously uploaded); a newly picked file travels
/// separately as a multipart part and is resolved before the row is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub thumbnail: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub git_link: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub demo_link: String,

    #[serde(default)]
    pub skill_ids: Vec<Uuid>,
}

impl ProjectRequest {
    /// Builds the row payload around the resolved thumbnail URL, which
    /// takes precedence over whatever the form carried.
    pub fn prepare_payload(&self, thumbnail: Option<String>) -> ProjectPayload {
        ProjectPayload {
            title: none_if_empty(&self.title),
            thumbnail: thumbnail.filter(|t| !t.is_empty()),
            description: none_if_empty(&self.description),
            git_link: none_if_empty(&self.git_link),
            demo_link: none_if_empty(&self.demo_link),
        }
    }
}

/// Multipart variant of a project save: the JSON metadata part plus the
/// newly picked thumbnail file.
#[derive(Debug, MultipartForm)]
pub struct ProjectUploadForm {
    #[multipart(rename = "thumbnail", limit = "5MB")]
    pub thumbnail: TempFile,

    #[multipart(rename = "metadata")]
    pub metadata: MpJson<ProjectRequest>,
}

/// Insert/update body for the `projects` table.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub git_link: Option<String>,
    pub demo_link: Option<String>,
}

/// One `project_tech_stacks` join row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTechStack {
    pub project_id: Uuid,
    pub skill_id: Uuid,
}
