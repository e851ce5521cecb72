use std::sync::Arc;

use anyhow::anyhow;
use chrono::Local;
use nt_scrappers::{NewsManager, RunReport};
use nt_storage::PublishOutcome;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info, warn};

/// Starts pipeline runs and keeps them from overlapping.
#[derive(Clone)]
pub struct RunTrigger {
    manager: Arc<NewsManager>,
    running: Arc<Mutex<()>>,
}

impl RunTrigger {
    pub fn new(manager: NewsManager) -> Self {
        Self {
            manager: Arc::new(manager),
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Runs the pipeline once for today's local date. Returns `None` if a run
    /// is already in progress or the run failed; failures are logged, never
    /// propagated.
    pub async fn fire(&self) -> Option<RunReport> {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("⏳ Previous run still in progress, skipping this one");
            return None;
        };

        let started = Local::now();
        info!("{}", "=".repeat(50));
        info!("🚀 Run started at {}", started.format("%Y-%m-%d %H:%M:%S"));

        let result = self.manager.run(started.date_naive()).await;
        match result {
            Ok(report) => {
                match &report.outcome {
                    PublishOutcome::Published { container_id, blocks } => info!(
                        "✅ Run finished: {} articles, {} blocks under {}",
                        report.enriched, blocks, container_id
                    ),
                    PublishOutcome::Skipped => info!("✅ Run finished with nothing to publish"),
                }
                info!("{}", "=".repeat(50));
                Some(report)
            }
            Err(e) => {
                error!("❌ Run failed: {}", e);
                info!("{}", "=".repeat(50));
                None
            }
        }
    }
}

/// Binds the trigger to a cron expression evaluated in local time. Parsing
/// happens here, so a bad expression fails before anything runs.
pub fn report_job(trigger: RunTrigger, schedule: &str) -> anyhow::Result<Job> {
    Job::new_async_tz(schedule, Local, move |_uuid, _lock| {
        let trigger = trigger.clone();
        Box::pin(async move {
            trigger.fire().await;
        })
    })
    .map_err(|e| anyhow!("Invalid schedule '{}': {}", schedule, e))
}

pub async fn start_schedule(job: Job, schedule: &str) -> anyhow::Result<JobScheduler> {
    let mut scheduler = JobScheduler::new()
        .await
        .map_err(|e| anyhow!("Failed to create scheduler: {}", e))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| anyhow!("Failed to add report job: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| anyhow!("Failed to start scheduler: {}", e))?;

    info!("📅 Scheduled report runs [cron: {}]", schedule);
    Ok(scheduler)
}
