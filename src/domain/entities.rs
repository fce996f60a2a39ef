pub mod experience;
pub mod fields;
pub mod project;
pub mod skill;
