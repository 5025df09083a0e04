//! Data-fetching coordination for views: retry and stale-response guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway never retries. Views wrap read queries in [`with_retry`] and
//! tag each fetch with a [`FetchGeneration`] ticket so a response that lands
//! after the view was left, or after a newer fetch started, is dropped.
//! Requests themselves are never aborted.
//!
//! Tasks outlive the view that spawned them. Anything a task touches after
//! an await must either be owned by the task (the `ApiClient` is cloned in)
//! or be checked through a [`ViewScope`] first: view-owned signals and
//! callbacks are disposed on unmount and panic when read.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::fetch::FetchState;

/// How many extra attempts a read query gets after a retryable failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { retries: crate::config::DEFAULT_FETCH_RETRIES }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn none() -> Self {
        Self { retries: 0 }
    }
}

/// Run `op`, repeating it while it fails with a retryable error and the
/// policy still has attempts left. Non-retryable errors return at once.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut remaining = policy.retries;
    loop {
        match op().await {
            Err(err) if remaining > 0 && err.is_retryable() => {
                remaining -= 1;
                log::warn!("fetch: retrying after {err}");
            }
            result => return result,
        }
    }
}

/// Monotonic fetch counter shared between a view and its in-flight tasks.
#[derive(Clone, Debug, Default)]
pub struct FetchGeneration(Arc<AtomicU64>);

impl FetchGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; supersedes every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` still belongs to the latest fetch.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }

    /// Drop interest in every outstanding ticket. Called on view cleanup.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Await `op` under `policy`, then check `ticket` against `generation`.
/// `None` means the view lost interest while the request was in flight.
pub async fn settle<T, F, Fut>(
    generation: &FetchGeneration,
    ticket: u64,
    policy: RetryPolicy,
    op: F,
) -> Option<Result<T, ApiError>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let result = with_retry(policy, op).await;
    if generation.is_current(ticket) {
        Some(result)
    } else {
        log::debug!("fetch: dropped stale response for ticket {ticket}");
        None
    }
}

/// Run `fut` on the browser task queue. Native builds have no event loop
/// to drive view tasks, so the future is dropped unpolled.
pub fn spawn_task(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Liveness flag for a mounted view, shared with the tasks it spawns.
#[derive(Clone, Debug)]
pub struct ViewScope(Arc<AtomicBool>);

impl Default for ViewScope {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl ViewScope {
    /// An open scope that closes when the current reactive owner is cleaned up.
    #[must_use]
    pub fn mounted() -> Self {
        let scope = Self::default();
        let closer = scope.clone();
        on_cleanup(move || closer.close());
        scope
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn close(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Await `fut`. `None` when the view unmounted while it was pending, in
    /// which case nothing view-owned may be touched.
    pub async fn finish<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = fut.await;
        if self.is_open() {
            Some(output)
        } else {
            log::debug!("fetch: view unmounted before its request settled");
            None
        }
    }
}

/// The future behind [`run_query`]. Marks `target` loading right away; the
/// returned future runs `op` with retry and publishes the outcome unless a
/// newer fetch or cleanup superseded it. `op` receives its own clone of
/// `client` per attempt so a retry never reaches into view-owned storage.
pub fn query_task<T, C, F, Fut>(
    generation: &FetchGeneration,
    policy: RetryPolicy,
    target: RwSignal<FetchState<T>>,
    client: C,
    mut op: F,
) -> impl Future<Output = ()> + 'static
where
    T: Send + Sync + 'static,
    C: Clone + 'static,
    F: FnMut(C) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ticket = generation.begin();
    target.set(FetchState::Loading);
    let generation = generation.clone();
    async move {
        if let Some(result) = settle(&generation, ticket, policy, move || op(client.clone())).await {
            // Current ticket implies mounted; `try_set` covers a teardown in progress.
            let _ = target.try_set(FetchState::from_result(result));
        }
    }
}

/// Start a read query for a view on the browser task queue.
pub fn run_query<T, C, F, Fut>(
    generation: &FetchGeneration,
    policy: RetryPolicy,
    target: RwSignal<FetchState<T>>,
    client: C,
    op: F,
) where
    T: Send + Sync + 'static,
    C: Clone + 'static,
    F: FnMut(C) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_task(query_task(generation, policy, target, client, op));
}
