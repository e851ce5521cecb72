use std::sync::Arc;

use clap::Parser;
use nt_core::Settings;
use nt_inference::{ArticleAnalyzer, Config};
use nt_scrappers::{Collector, CollectorConfig, HttpPageFetcher, NaverSearch, NewsManager, PressDetector};
use nt_storage::ReportPublisher;
use tracing::info;

mod logging;
mod scheduler;

use scheduler::{report_job, start_schedule, RunTrigger};

/// Collects keyword news, summarizes it and appends a dated report to Notion.
/// All settings come from the environment (or a `.env` file).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the pipeline once and exit
    Run,
    /// Run once now, then on the REPORT_SCHEDULE cron until interrupted (default)
    Schedule,
}

fn build_manager(settings: &Settings) -> anyhow::Result<NewsManager> {
    let search = NaverSearch::new(&settings.naver_client_id, &settings.naver_client_secret)?;
    let collector = Collector::new(Arc::new(search), CollectorConfig::from_settings(settings));

    let model = nt_inference::create_model(Config::from_settings(settings))?;
    info!("🧠 Inference model initialized (using {})", model.name());

    let press = PressDetector::new(Arc::new(HttpPageFetcher::new()?));

    let store = nt_storage::create_store(settings)?;
    info!("🗄️ Document store initialized (using {:?})", settings.store);
    let publisher = ReportPublisher::new(store, settings.notion_page_id.clone());

    Ok(NewsManager::new(
        collector,
        ArticleAnalyzer::new(model),
        press,
        publisher,
        settings.enrich_concurrency,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();
    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    info!("⚙️ Loaded settings: {:?}", settings);

    let trigger = RunTrigger::new(build_manager(&settings)?);

    match cli.command.unwrap_or(Commands::Schedule) {
        Commands::Run => {
            trigger.fire().await;
        }
        Commands::Schedule => {
            let job = report_job(trigger.clone(), &settings.schedule)?;

            info!("🦗 News bot starting, running once now");
            trigger.fire().await;

            let mut scheduler = start_schedule(job, &settings.schedule).await?;
            info!("⏰ Waiting for scheduled runs. Press Ctrl+C to stop.");
            tokio::signal::ctrl_c().await?;

            info!("🛑 Stopping scheduler...");
            if let Err(e) = scheduler.shutdown().await {
                tracing::warn!("⚠️ Scheduler did not shut down cleanly: {}", e);
            }
        }
    }

    Ok(())
}
