use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    constants::SKILLS_TABLE,
    entities::skill::{Skill, SkillInsert, SkillOption},
    errors::AppError,
    repositories::postgrest_repo::PostgrestSkillRepo,
    supabase::client::SupabaseClient,
};

#[automock]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Reads the full table in creation order.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Name-ordered id/name pairs for the tech-stack picker.
    async fn list_skill_options(&self) -> Result<Vec<SkillOption>, AppError>;

    /// Inserts and returns the created row.
    async fn insert_skill(&self, payload: &SkillInsert) -> Result<Skill, AppError>;

    async fn update_skill(&self, id: Uuid, payload: &SkillInsert) -> Result<(), AppError>;

    async fn delete_skill(&self, id: Uuid) -> Result<(), AppError>;
}

impl PostgrestSkillRepo {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        PostgrestSkillRepo { client }
    }
}

#[async_trait]
impl SkillRepository for PostgrestSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.client
            .table(SKILLS_TABLE)
            .select("*")
            .order("created_at", true)
            .fetch::<Skill>()
            .await
            .map_err(|e| AppError::ReadFailed(format!("skills: {e}")))
    }

    async fn list_skill_options(&self) -> Result<Vec<SkillOption>, AppError> {
        self.client
            .table(SKILLS_TABLE)
            .select("id, skill")
            .order("skill", true)
            .fetch::<SkillOption>()
            .await
            .map_err(|e| AppError::ReadFailed(format!("skills: {e}")))
    }

    async fn insert_skill(&self, payload: &SkillInsert) -> Result<Skill, AppError> {
        self.client
            .table(SKILLS_TABLE)
            .insert(payload)
            .single::<Skill>()
            .await
            .map_err(|e| AppError::write_failed("create skill", e))
    }

    async fn update_skill(&self, id: Uuid, payload: &SkillInsert) -> Result<(), AppError> {
        self.client
            .table(SKILLS_TABLE)
            .update(payload)
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("update skill", e))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), AppError> {
        self.client
            .table(SKILLS_TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("delete skill", e))
    }
}
