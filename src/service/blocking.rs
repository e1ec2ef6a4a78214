//! Worker thread and runtime behind the blocking facade methods.
//!
//! The future is moved to a scoped worker thread and driven there by a
//! small runtime owned by the facade, so the caller's thread never polls
//! it. Anything the future depends on must be driven by this runtime too:
//! the facade gives blocking calls their own sender, so no pooled
//! connection belongs to an executor whose thread is parked in `run`.

use super::error::SmsServiceError;
use std::future::Future;
use std::sync::OnceLock;
use std::thread;
use tokio::runtime::{Builder, Runtime};

const WORKER_THREAD_NAME: &str = "sportstiming-sms-blocking";

/// Lazily started runtime used by the blocking facade methods.
///
/// The runtime outlives single calls so pooled connections stay usable
/// between them.
#[derive(Debug, Default)]
pub(crate) struct BlockingRuntime {
    runtime: OnceLock<Runtime>,
}

impl BlockingRuntime {
    /// Run `future` to completion on a worker thread and return its output.
    pub(crate) fn run<F, T>(&self, future: F) -> Result<T, SmsServiceError>
    where
        F: Future<Output = Result<T, SmsServiceError>> + Send,
        T: Send,
    {
        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name(WORKER_THREAD_NAME.to_string())
                .spawn_scoped(scope, || {
                    let runtime = self.get_or_start()?;
                    runtime.block_on(future)
                })
                .map_err(SmsServiceError::BlockingRuntime)?;

            worker.join().map_err(|_| SmsServiceError::WorkerPanicked)?
        })
    }

    /// Called on the worker thread only, where building or dropping a
    /// runtime is allowed.
    fn get_or_start(&self) -> Result<&Runtime, SmsServiceError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name(WORKER_THREAD_NAME)
            .enable_all()
            .build()
            .map_err(SmsServiceError::BlockingRuntime)?;

        // A concurrent call may have won the race; the loser is dropped here.
        Ok(self.runtime.get_or_init(|| runtime))
    }
}

impl Drop for BlockingRuntime {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which panics inside async contexts.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
