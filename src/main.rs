use clap::Parser;
use folio_content::core::work::FilterPhase;
use folio_content::utils::{logger, validation::Validate};
use folio_content::{resolve_image_url, CliConfig, Portfolio, SanityClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio-content");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = SanityClient::new(&config)?;
    let mut portfolio =
        Portfolio::with_transition_delay(client, Duration::from_millis(config.transition_ms));

    portfolio.mount_all().await;

    println!("== About ==");
    for entry in portfolio.about.entries() {
        let image = resolve_image_url(&config, &entry.image)
            .unwrap_or_else(|_| "<unresolvable>".to_string());
        println!("  [{}] {} ({})", entry.order, entry.title, image);
    }

    println!("== Skills & Experience ==");
    for group in portfolio.skills.skill_groups() {
        println!("  {}:", group.name);
        for skill in portfolio.skills.skills_in_group(group) {
            println!("    {} ({:.0}%)", skill.name, skill.level_percent);
        }
    }
    for experience in portfolio.skills.experiences() {
        let month = experience.formatted_date.as_deref().unwrap_or("?");
        println!("  {}:", month);
        for work in &experience.works {
            println!("    {} @ {}", work.name, work.company);
        }
    }

    println!("== Work ==");
    println!("  Categories: {}", portfolio.work.categories().await.join(", "));
    for item in portfolio.work.items().await {
        println!("  {}", item.label);
    }

    // 示範一次分類過場：選第一個非 All 分類，等過場結束再列出可見項目
    let categories = portfolio.work.categories().await;
    if let Some(category) = categories.iter().find(|c| c.as_str() != "All") {
        println!("== Filter: {} ==", category);
        portfolio.work.select_category(category).await;
        tokio::time::sleep(Duration::from_millis(config.transition_ms + 50)).await;

        if portfolio.work.phase().await != FilterPhase::Idle {
            tracing::warn!("Filter transition still pending after delay");
        }
        for item in portfolio.work.visible_items().await {
            println!("  {}", item.title);
        }
    }

    tracing::info!("✅ Done");
    Ok(())
}
