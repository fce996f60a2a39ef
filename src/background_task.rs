use std::sync::Arc;

use tokio::time::{interval, Duration};

use crate::AppState;

/// Periodically re-syncs the mirrored content lists with the backend. The
/// first tick fires immediately, which is what primes the caches at boot.
/// A failed refresh keeps the previous lists and is retried next interval.
pub async fn start_refresh_task(state: Arc<AppState>, refresh_secs: u64) {
    let mut interval = interval(Duration::from_secs(refresh_secs));

    loop {
        interval.tick().await;

        match state.experience_handler.reload().await {
            Ok(experiences) => tracing::debug!("Refreshed {} experiences", experiences.len()),
            Err(e) => tracing::error!("Experience refresh failed: {}", e)
        }

        match state.skill_handler.reload().await {
            Ok(skills) => tracing::debug!("Refreshed {} skills", skills.len()),
            Err(e) => tracing::error!("Skill refresh failed: {}", e)
        }

        match state.project_handler.reload().await {
            Ok(projects) => tracing::debug!("Refreshed {} projects", projects.len()),
            Err(e) => tracing::error!("Project refresh failed: {}", e)
        }
    }
}
