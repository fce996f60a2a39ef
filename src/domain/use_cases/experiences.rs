use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::experience::{Experience, ExperienceRequest},
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

use super::content_list::ContentList;

/// Keeps the local experience timeline synchronized with the remote table.
///
/// Policy: create and update reload the full list after the remote write
/// (the write response carries no representation); delete filters the local
/// list by id once the remote delete has succeeded.
pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
    list: ContentList<Experience>,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler {
            experience_repo,
            list: ContentList::new(),
        }
    }

    /// Full reload, newest experience first. A failed read surfaces the
    /// error and leaves the previous list untouched.
    pub async fn reload(&self) -> Result<Vec<Experience>, AppError> {
        let experiences = self.experience_repo.list_experiences().await?;
        self.list.replace(experiences.clone());
        Ok(experiences)
    }

    pub fn current(&self) -> Vec<Experience> {
        self.list.snapshot()
    }

    pub fn is_saving(&self) -> bool {
        self.list.is_saving()
    }

    pub async fn create(&self, request: ExperienceRequest) -> Result<Vec<Experience>, AppError> {
        request.validate()?;
        let _guard = self.list.begin_write()?;

        let payload = request.prepare_for_insert();
        self.experience_repo.insert_experience(&payload).await?;

        self.reload().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: ExperienceRequest,
    ) -> Result<Vec<Experience>, AppError> {
        request.validate()?;
        let _guard = self.list.begin_write()?;

        let payload = request.prepare_for_update();
        self.experience_repo.update_experience(id, &payload).await?;

        self.reload().await
    }

    /// Callers must have confirmed the deletion before invoking this; the
    /// record stays in the local list unless the remote delete succeeds.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.list.begin_write()?;

        self.experience_repo.delete_experience(id).await?;
        self.list.retain(|exp| exp.id != id);

        Ok(())
    }
}
