use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    constants::EXPERIENCES_TABLE,
    entities::experience::{Experience, ExperiencePayload},
    errors::AppError,
    repositories::postgrest_repo::PostgrestExperienceRepo,
    supabase::client::SupabaseClient,
};

#[automock]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Reads the full table, newest start date first.
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;

    async fn insert_experience(&self, payload: &ExperiencePayload) -> Result<(), AppError>;

    async fn update_experience(&self, id: Uuid, payload: &ExperiencePayload) -> Result<(), AppError>;

    async fn delete_experience(&self, id: Uuid) -> Result<(), AppError>;
}

impl PostgrestExperienceRepo {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        PostgrestExperienceRepo { client }
    }
}

#[async_trait]
impl ExperienceRepository for PostgrestExperienceRepo {
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.client
            .table(EXPERIENCES_TABLE)
            .select("*")
            .order("from", false)
            .fetch::<Experience>()
            .await
            .map_err(|e| AppError::ReadFailed(format!("experiences: {e}")))
    }

    async fn insert_experience(&self, payload: &ExperiencePayload) -> Result<(), AppError> {
        self.client
            .table(EXPERIENCES_TABLE)
            .insert(payload)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("create experience", e))
    }

    async fn update_experience(&self, id: Uuid, payload: &ExperiencePayload) -> Result<(), AppError> {
        self.client
            .table(EXPERIENCES_TABLE)
            .update(payload)
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("update experience", e))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), AppError> {
        self.client
            .table(EXPERIENCES_TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await
            .map_err(|e| AppError::write_failed("delete experience", e))
    }
}
