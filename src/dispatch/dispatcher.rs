use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::args::DispatchMode;
use crate::domain::run::RunConfig;
use crate::http::Transport;
use crate::metrics::{Aggregator, RequestOutcome, RunReport};

use super::batch::batch_ranges;

/// Runs `total_requests` GETs with at most `concurrency` outstanding.
pub struct Dispatcher<T> {
    transport: Arc<T>,
}

impl<T> Dispatcher<T>
where
    T: Transport + 'static,
{
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Dispatches every request of the run and returns the frozen report.
    ///
    /// Individual request failures never abort the run; they are classified
    /// into the report instead.
    pub async fn run(&self, config: &RunConfig) -> RunReport {
        let aggregator = Arc::new(Aggregator::new(config.total_requests()));
        let started = Instant::now();
        info!(
            url = config.target_url(),
            requests = config.total_requests(),
            concurrency = config.concurrency(),
            dispatch = config.dispatch().as_str(),
            "Starting run"
        );

        match config.dispatch() {
            DispatchMode::Batch => self.run_batches(config, &aggregator).await,
            DispatchMode::Pool => self.run_pool(config, &aggregator).await,
        }

        // Every reporting task has been joined above, so the counters are final.
        let report = aggregator.snapshot(started.elapsed());
        if !report.is_complete() {
            warn!(
                expected = report.total_requests,
                completed = report.completed_count(),
                "Some requests reported no outcome"
            );
        }
        info!(
            completed = report.completed_count(),
            elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            "Run finished"
        );
        report
    }

    async fn run_batches(&self, config: &RunConfig, aggregator: &Arc<Aggregator>) {
        let url = config.shared_target_url();
        for (index, batch) in batch_ranges(config.total_requests(), config.batch_size()).enumerate()
        {
            debug!(
                batch = index,
                size = batch.end.saturating_sub(batch.start),
                "Dispatching batch"
            );
            let handles: Vec<JoinHandle<()>> = batch
                .map(|_| {
                    spawn_request(
                        Arc::clone(&self.transport),
                        Arc::clone(&url),
                        Arc::clone(aggregator),
                    )
                })
                .collect();
            join_all(handles).await;
        }
    }

    async fn run_pool(&self, config: &RunConfig, aggregator: &Arc<Aggregator>) {
        let url = config.shared_target_url();
        let total = config.total_requests();
        let next_index = Arc::new(AtomicU64::new(0));
        let worker_count = usize::try_from(total)
            .map_or(config.concurrency(), |total| total.min(config.concurrency()));
        let mut worker_handles = Vec::with_capacity(worker_count);

        for _ in 0..worker_count {
            let transport = Arc::clone(&self.transport);
            let url = Arc::clone(&url);
            let aggregator = Arc::clone(aggregator);
            let next_index = Arc::clone(&next_index);

            worker_handles.push(tokio::spawn(async move {
                while next_index.fetch_add(1, Ordering::Relaxed) < total {
                    // One task per request so a panicking call only loses its own outcome.
                    let handle = spawn_request(
                        Arc::clone(&transport),
                        Arc::clone(&url),
                        Arc::clone(&aggregator),
                    );
                    if let Err(err) = handle.await {
                        error!("Request task failed: {}", err);
                    }
                }
            }));
        }

        join_all(worker_handles).await;
    }
}

fn spawn_request<T>(
    transport: Arc<T>,
    url: Arc<str>,
    aggregator: Arc<Aggregator>,
) -> JoinHandle<()>
where
    T: Transport + 'static,
{
    tokio::spawn(async move {
        report_one(transport.as_ref(), &url, &aggregator).await;
    })
}

async fn report_one<T>(transport: &T, url: &str, aggregator: &Aggregator)
where
    T: Transport + ?Sized,
{
    let result = transport.get_status(url).await;
    if let Err(err) = result.as_ref() {
        if err.is_construction() {
            error!("Error creating request: {}", err);
        } else {
            debug!("Connection error: {}", err);
        }
    }
    aggregator.report(RequestOutcome::from_result(&result));
}

async fn join_all(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if let Err(err) = handle.await {
            error!("Request task failed: {}", err);
        }
    }
}
