use anyhow::Result;
use cardsense_core::config::AppConfig;
use cardsense_core::settings::recommend_for_label;
use colored::Colorize;

use super::utils;

pub fn run(label: &str, json: bool, config: &AppConfig) -> Result<()> {
    let settings = recommend_for_label(label);

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Recommended settings for: {}", label).bold()
    );
    utils::print_settings(&settings, &config.currency_symbol);
    Ok(())
}
