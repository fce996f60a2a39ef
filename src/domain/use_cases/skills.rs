use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::skill::{NewSkill, Skill, SkillOption},
    errors::AppError,
    repositories::skill::SkillRepository,
};

use super::content_list::ContentList;

/// Keeps the local skill list synchronized with the remote table.
///
/// Skills are the one content type patched optimistically: the insert call
/// returns the full server row (so it is appended as-is), and rename and
/// delete only touch state the caller already holds.
pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
    list: ContentList<Skill>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler {
            skill_repo,
            list: ContentList::new(),
        }
    }

    /// Full reload in creation order.
    pub async fn reload(&self) -> Result<Vec<Skill>, AppError> {
        let skills = self.skill_repo.list_skills().await?;
        self.list.replace(skills.clone());
        Ok(skills)
    }

    pub fn current(&self) -> Vec<Skill> {
        self.list.snapshot()
    }

    pub fn is_saving(&self) -> bool {
        self.list.is_saving()
    }

    /// Validates before any remote call; a blank name never reaches the
    /// backend. On success the server-returned row is appended locally.
    pub async fn create(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;
        let _guard = self.list.begin_write()?;

        let inserted = self.skill_repo.insert_skill(&request.prepare_for_insert()).await?;
        self.list.push(inserted.clone());

        Ok(inserted)
    }

    pub async fn rename(&self, id: Uuid, request: NewSkill) -> Result<Vec<Skill>, AppError> {
        request.validate()?;
        let _guard = self.list.begin_write()?;

        let payload = request.prepare_for_insert();
        self.skill_repo.update_skill(id, &payload).await?;

        self.list.patch(|skill| {
            if skill.id == id {
                skill.skill = Some(payload.skill.clone());
            }
        });

        Ok(self.list.snapshot())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.list.begin_write()?;

        self.skill_repo.delete_skill(id).await?;
        self.list.retain(|skill| skill.id != id);

        Ok(())
    }

    /// Name-ordered id/name pairs for the project form's tech-stack picker.
    pub async fn options(&self) -> Result<Vec<SkillOption>, AppError> {
        self.skill_repo.list_skill_options().await
    }
}
