use anyhow::Result;
use rules_translator::{config, i18n::LocaleTable, pipeline, translation::GoogleTranslator};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rules_translator=info".parse()?),
        )
        .init();

    info!("Starting rule book translation");

    let config = config::Config::from_env()?;
    let locales = LocaleTable::default();
    let translator = GoogleTranslator::from_config(&config)?;

    pipeline::run(&config, &locales, &translator).await?;

    Ok(())
}
