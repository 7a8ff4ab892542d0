use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-content")]
#[command(about = "Fetches and shapes portfolio content from a headless CMS")]
pub struct CliConfig {
    #[arg(long, default_value = "https://demo.api.sanity.io")]
    pub api_base: String,

    #[arg(long, default_value = "demo")]
    pub project_id: String,

    #[arg(long, default_value = "production")]
    pub dataset: String,

    #[arg(long, default_value = "2022-02-01")]
    pub api_version: String,

    #[arg(long, default_value = "https://cdn.sanity.io")]
    pub cdn_base: String,

    #[arg(long, default_value = "500", help = "Filter transition delay in milliseconds")]
    pub transition_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn dataset(&self) -> &str {
        &self.dataset
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn cdn_base(&self) -> &str {
        &self.cdn_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_url("cdn_base", &self.cdn_base)?;
        validate_non_empty_string("project_id", &self.project_id)?;
        validate_non_empty_string("dataset", &self.dataset)?;
        validate_non_empty_string("api_version", &self.api_version)?;
        validate_range("transition_ms", self.transition_ms, 0, 10_000)?;
        Ok(())
    }
}
