use seo_landing::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (log_level, log_format) = logging::settings_from_env();
    logging::init_tracing(&log_level, &log_format);

    let config = config::load_from_env()?;
    config.print_summary();

    server::run(config).await
}
