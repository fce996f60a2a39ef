use std::sync::Arc;

use crate::supabase::client::SupabaseClient;

#[derive(Clone)]
pub struct PostgrestExperienceRepo {
    pub client: Arc<SupabaseClient>,
}

#[derive(Clone)]
pub struct PostgrestSkillRepo {
    pub client: Arc<SupabaseClient>,
}

#[derive(Clone)]
pub struct PostgrestProjectRepo {
    pub client: Arc<SupabaseClient>,
}
