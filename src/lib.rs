use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{supabase, utils};

use errors::AppError;
use repositories::postgrest_repo::{
    PostgrestExperienceRepo, PostgrestProjectRepo, PostgrestSkillRepo,
};
use repositories::thumbnail::SupabaseThumbnailStore;
use supabase::client::SupabaseClient;
use use_cases::{
    experiences::ExperienceHandler, projects::ProjectHandler, skills::SkillHandler,
};

pub struct AppState {
    pub experience_handler: AppExperienceHandler,
    pub skill_handler: AppSkillHandler,
    pub project_handler: AppProjectHandler,
    pub supabase: Arc<SupabaseClient>,
}

pub type AppExperienceHandler = ExperienceHandler<PostgrestExperienceRepo>;
pub type AppSkillHandler = SkillHandler<PostgrestSkillRepo>;
pub type AppProjectHandler =
    ProjectHandler<PostgrestProjectRepo, PostgrestProjectRepo, SupabaseThumbnailStore>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, AppError> {
        let supabase = Arc::new(
            SupabaseClient::new(config)
                .map_err(|e| AppError::InternalError(e.to_string()))?,
        );

        let experience_handler =
            ExperienceHandler::new(PostgrestExperienceRepo::new(supabase.clone()));
        let skill_handler = SkillHandler::new(PostgrestSkillRepo::new(supabase.clone()));
        let project_handler = ProjectHandler::new(
            PostgrestProjectRepo::new(supabase.clone()),
            PostgrestProjectRepo::new(supabase.clone()),
            SupabaseThumbnailStore::new(supabase.clone(), config.thumbnail_bucket.clone()),
        );

        Ok(AppState {
            experience_handler,
            skill_handler,
            project_handler,
            supabase,
        })
    }
}
