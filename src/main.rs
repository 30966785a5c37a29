use market_insight_bot::{bot::run_dispatcher, config::Config, config::ConfigError};

#[tokio::main]
pub async fn main() -> Result<(), ConfigError> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting Market Insight bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Market Insight bot failed to start: {}", err);
            return Err(err);
        }
    };

    let bot = teloxide::Bot::new(config.token.clone());

    log::info!(
        "Market Insight bot started successfully! Linking to {}",
        config.base_url
    );

    run_dispatcher(bot, config).await;
    Ok(())
}
