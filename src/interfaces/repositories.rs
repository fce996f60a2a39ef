pub mod experience;
pub mod postgrest_repo;
pub mod project;
pub mod skill;
pub mod thumbnail;
