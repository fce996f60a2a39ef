use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const EXPERIENCES_TABLE: &str = "experiences";
pub const SKILLS_TABLE: &str = "skills";
pub const PROJECTS_TABLE: &str = "projects";
pub const PROJECT_TECH_STACKS_TABLE: &str = "project_tech_stacks";

/// Cache lifetime (seconds) stamped onto uploaded thumbnails.
pub const THUMBNAIL_CACHE_SECS: u32 = 3600;

/// Uploaded thumbnails larger than this are rejected before upload.
pub const MAX_THUMBNAIL_BYTES: usize = 5 * 1024 * 1024;
