use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{Project, ProjectRequest, ProjectTechStack},
    errors::AppError,
    repositories::project::{ProjectRepository, TechStackRepository},
    repositories::thumbnail::ThumbnailStore,
    utils::storage_key::thumbnail_key,
};

use super::content_list::ContentList;

/// A newly picked thumbnail file, not yet uploaded. Any preview URL the
/// admin UI shows for it is cosmetic; only the uploaded key's public URL
/// is ever persisted.
#[derive(Debug)]
pub struct NewThumbnail {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Keeps the local project list synchronized with the remote table and
/// owns the two multi-step flows of a project save: resolving the
/// thumbnail to a durable URL before the row is written, and replacing the
/// tech-stack join rows after it.
pub struct ProjectHandler<R, J, S>
where
    R: ProjectRepository,
    J: TechStackRepository,
    S: ThumbnailStore,
{
    pub project_repo: R,
    pub tech_stack_repo: J,
    pub thumbnail_store: S,
    list: ContentList<Project>,
}

impl<R, J, S> ProjectHandler<R, J, S>
where
    R: ProjectRepository,
    J: TechStackRepository,
    S: ThumbnailStore,
{
    pub fn new(project_repo: R, tech_stack_repo: J, thumbnail_store: S) -> Self {
        ProjectHandler {
            project_repo,
            tech_stack_repo,
            thumbnail_store,
            list: ContentList::new(),
        }
    }

    /// Full reload, newest project first, with the tech-stack join
    /// embedded and flattened into UI-ready records.
    pub async fn reload(&self) -> Result<Vec<Project>, AppError> {
        let rows = self.project_repo.list_projects().await?;
        let projects: Vec<Project> = rows.into_iter().map(Project::from).collect();
        self.list.replace(projects.clone());
        Ok(projects)
    }

    pub fn current(&self) -> Vec<Project> {
        self.list.snapshot()
    }

    pub fn is_saving(&self) -> bool {
        self.list.is_saving()
    }

    pub async fn create(
        &self,
        request: ProjectRequest,
        new_thumbnail: Option<NewThumbnail>,
    ) -> Result<Vec<Project>, AppError> {
        self.save(None, request, new_thumbnail).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: ProjectRequest,
        new_thumbnail: Option<NewThumbnail>,
    ) -> Result<Vec<Project>, AppError> {
        self.save(Some(id), request, new_thumbnail).await
    }

    /// Shared save path for create and update:
    /// 1. a newly picked file is uploaded first - upload failure aborts
    ///    before any row is written;
    /// 2. the project row is inserted or updated;
    /// 3. the tech-stack join is replaced to match the selection;
    /// 4. the local list reloads so it reflects at least this save.
    async fn save(
        &self,
        id: Option<Uuid>,
        request: ProjectRequest,
        new_thumbnail: Option<NewThumbnail>,
    ) -> Result<Vec<Project>, AppError> {
        request.validate()?;
        let _guard = self.list.begin_write()?;

        let thumbnail = match new_thumbnail {
            Some(file) => Some(self.upload_thumbnail(file).await?),
            None => Some(request.thumbnail.clone()),
        };
        let payload = request.prepare_payload(thumbnail);

        let project_id = match id {
            Some(id) => {
                self.project_repo.update_project(id, &payload).await?;
                id
            }
            None => self.project_repo.insert_project(&payload).await?,
        };

        self.replace_tech_stack(project_id, &request.skill_ids).await?;

        self.reload().await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.list.begin_write()?;

        self.project_repo.delete_project(id).await?;
        self.list.retain(|project| project.id != id);

        Ok(())
    }

    /// Join maintainer: the `project_tech_stacks` rows for this project are
    /// fully replaced, not diffed. The delete step must succeed before any
    /// insert is attempted; an insert failure leaves the project with zero
    /// tech-stack rows and surfaces as an error.
    async fn replace_tech_stack(
        &self,
        project_id: Uuid,
        skill_ids: &[Uuid],
    ) -> Result<(), AppError> {
        self.tech_stack_repo.clear_tech_stack(project_id).await?;

        if skill_ids.is_empty() {
            return Ok(());
        }

        let rows: Vec<ProjectTechStack> = skill_ids
            .iter()
            .map(|&skill_id| ProjectTechStack {
                project_id,
                skill_id,
            })
            .collect();

        self.tech_stack_repo.insert_tech_stack(&rows).await
    }

    async fn upload_thumbnail(&self, file: NewThumbnail) -> Result<String, AppError> {
        let key = thumbnail_key(&file.file_name, Utc::now());
        self.thumbnail_store
            .upload(&key, file.bytes, file.content_type)
            .await?;
        Ok(self.thumbnail_store.public_url(&key))
    }
}
