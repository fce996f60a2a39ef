use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    constants::{PROJECTS_TABLE, PROJECT_TECH_STACKS_TABLE},
    entities::project::{ProjectPayload, ProjectRow, ProjectTechStack},
    errors::AppError,
    repositories::postgrest_repo::PostgrestProjectRepo,
    supabase::client::SupabaseClient,
};

/// Embedded-resource select for the project list: each row carries its
/// join rows with the linked skill resolved inline.
const PROJECT_LIST_COLUMNS: &str =
    "id, title, thumbnail, description, git_link, demo_link, created_at, \
     project_tech_stacks (skill_id, skills (id, skill))";

#[automock]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Reads the full table, newest project first, join embedded.
    async fn list_projects(&self) -> Result<Vec<ProjectRow>, AppError>;

    /// Inserts and returns the generated project id.
    async fn insert_project(&self, payload: &ProjectPayload) -> Result<Uuid, AppError>;

    async fn update_project(&self, id: Uuid, payload: &ProjectPayload) -> Result<(), AppError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), AppError>;
}

/// Join-table operations used by the tech-stack maintainer.
#[automock]
#[async_trait]
pub trait TechStackRepository: Send + Sync {
    /// Deletes every join row belonging to the project.
    async fn clear_tech_stack(&self, project_id: Uuid) -> Result<(), AppError>;

    /// Batch-inserts the selection as one call.
    async fn insert_tech_stack(&self, rows: &[ProjectTechStack]) -> Result<(), AppError>;
}

impl PostgrestProjectRepo {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        PostgrestProjectRepo { client }
    }
}

#[derive(Debug, Deserialize)]
struct InsertedProject {
    id: Uuid,
}

#[async_trait]
impl ProjectRepository for PostgrestProjectRepo {
    async fn list_projects(&self) -> Result<Vec<ProjectRow>, AppError> {
        self.client
            .table(PROJECTS_TABLE)
            .select(PROJECT_LIST_COLUMNS)
            .order("created_at", false)
            .fetch::<ProjectRow>()
            .await
            .map_err(|e| AppError::ReadFailed(format!("projects: {e}")))
    }

    async fn insert_project(&self, payload: &ProjectPayload) -> Result<Uuid, AppError> {
        let inserted = self.client
            .table(PROJECTS_TABLE)
            .insert(payload)
            .returning("id")
            .single::<InsertedProject>()
            .await
            .map_err(|e| AppError::write_failed("create project", e))?;

        Ok(inserted.id)
    }

    async fn update_project(&self, id: Uuid, payload: &ProjectPayload) -> Result<(), AppError> {
        self.client
            .table(PROJECTS_TABLE)
            .update(payload)
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("update project", e))
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), AppError> {
        self.client
            .table(PROJECTS_TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("delete project", e))
    }
}

#[async_trait]
impl TechStackRepository for PostgrestProjectRepo {
    async fn clear_tech_stack(&self, project_id: Uuid) -> Result<(), AppError> {
        self.client
            .table(PROJECT_TECH_STACKS_TABLE)
            .delete()
            .eq("project_id", project_id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("clear project tech stack", e))
    }

    async fn insert_tech_stack(&self, rows: &[ProjectTechStack]) -> Result<(), AppError> {
        self.client
            .table(PROJECT_TECH_STACKS_TABLE)
            .insert(&rows)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("save project tech stack", e))
    }
}
