pub mod about;
pub mod render;
pub mod site;
pub mod skills;
pub mod work;

pub use crate::domain::model::{
    ExperienceEntry, ProfileEntry, ProjectEntry, Skill, SkillGroup, WorkRecord,
};
pub use crate::domain::ports::{ConfigProvider, ContentFetch};
pub use crate::utils::error::Result;
