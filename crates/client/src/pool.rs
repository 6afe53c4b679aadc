//! Bounded-parallel classification of a year's dates.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use holidaysync_core::calendar::{classify_date, ResultDay, SourceIndex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::Result;

/// Classifies every date with at most `concurrency` tasks in flight.
///
/// The returned days are in the order of `dates`.
pub async fn classify_year(
    dates: &[DateTime<FixedOffset>],
    index: Arc<SourceIndex>,
    concurrency: usize,
) -> Result<Vec<ResultDay>> {
    let days = run_bounded(dates.to_vec(), concurrency, move |date| {
        let index = Arc::clone(&index);
        async move { classify_date(&date, &index) }
    })
    .await?;

    tracing::debug!(count = days.len(), concurrency, "classified dates");

    Ok(days)
}

/// Runs `work` once per item, admitting at most `concurrency` units at a time.
///
/// Each unit hands its output back with the index of its item, so results
/// are in input order whatever the completion order. Returns once every unit
/// has finished.
pub async fn run_bounded<I, T, F, Fut>(items: Vec<I>, concurrency: usize, work: F) -> Result<Vec<T>>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    let gate = Arc::new(Semaphore::new(concurrency.max(1)));
    let work = Arc::new(work);
    let mut tasks = JoinSet::new();
    let mut results: Vec<Option<T>> = (0..items.len()).map(|_| None).collect();

    for (position, item) in items.into_iter().enumerate() {
        let permit = Arc::clone(&gate).acquire_owned().await?;
        let work = Arc::clone(&work);

        tasks.spawn(async move {
            // Released on drop, including when the unit panics.
            let _permit = permit;
            (position, work(item).await)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (position, output) = joined?;
        results[position] = Some(output);
    }

    Ok(results.into_iter().flatten().collect())
}
