use crate::utils::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_CONFIG_PATH};
use log::info;
use std::sync::Arc;

pub async fn init() -> crate::error::Result<Arc<AppConfig>> {
    // .env is optional
    dotenv::dotenv().ok();

    log4rs::init_file(DEFAULT_LOG_CONFIG_PATH, Default::default())?;

    let config_path =
        std::env::var("HELPBOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = AppConfig::load(&config_path)?;
    config.apply_env(|key| std::env::var(key).ok());
    config.validate()?;
    info!("Loaded application config from {}", config_path);

    rust_i18n::set_locale(&config.locales.default);
    info!("Default locale: {}", config.locales.default);
    info!("LLM model: {} ({})", config.llm.model, config.llm.base_url);
    info!("Allowed origins: {:?}", config.cors.allowed_origins);

    Ok(Arc::new(config))
}
