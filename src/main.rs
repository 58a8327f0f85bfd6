use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use coffee_perk_bot::bot::schema;
use coffee_perk_bot::config::BotConfig;
use coffee_perk_bot::content::ContentTable;
use coffee_perk_bot::navigator::Navigator;
use coffee_perk_bot::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = BotConfig::from_env();
    init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or_default())?;

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Refusing to start");
            std::process::exit(1);
        }
    };

    info!("Starting Coffee Perk Telegram bot");

    let content = match ContentTable::from_embedded() {
        Ok(content) => content,
        Err(e) => {
            error!(error = %e, "Failed to load bot content");
            std::process::exit(1);
        }
    };
    let navigator = Arc::new(Navigator::new(content));

    let bot = Bot::new(config.bot_token);

    info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![navigator])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
