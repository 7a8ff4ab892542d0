pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sanity::{resolve_image_url, SanityClient};
pub use crate::core::{
    about::AboutSection, site::Portfolio, skills::SkillsSection, work::WorkSection,
};
pub use domain::ports::{ConfigProvider, ContentFetch};
pub use utils::error::{ContentError, Result};
