//! Background execution for rex.
//!
//! [run_async] moves any unit of work onto its own thread and returns at once, so directory
//! scans never block the thread driving the interface. The returned [TaskHandle] can be dropped
//! (fire-and-forget) or kept to collect the result later.
//!
//! [Workers] builds on it: a long-lived I/O worker receives [WorkerTask] requests over a channel
//! and hands finished listings back as [WorkerResponse] values on a second channel.

use crate::core::error::{InspectError, TaskError};
use crate::core::{Formatter, Inspector, Listing};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, bounded, unbounded};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Handle to work started with [run_async].
///
/// Dropping the handle does not stop the work. A panic inside the work is logged either way.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: Receiver<Result<T, TaskError>>,
}

impl<T> TaskHandle<T> {
    /// Returns the outcome if the work has finished, without blocking.
    pub fn try_result(&self) -> Option<Result<T, TaskError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TaskError::Lost)),
        }
    }

    /// Blocks for at most `timeout`. `None` means the work is still running.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<T, TaskError>> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(TaskError::Lost)),
        }
    }

    /// Blocks until the work finishes.
    pub fn wait(self) -> Result<T, TaskError> {
        self.rx.recv().unwrap_or(Err(TaskError::Lost))
    }
}

/// Runs `work` on a new background thread and returns immediately.
///
/// The thread does not keep the process alive: it is never joined, and it ends with the process
/// once `main` returns.
pub fn run_async<F, T>(work: F) -> TaskHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = bounded(1);
    let task_tx = tx.clone();

    let spawned = thread::Builder::new()
        .name("rex-task".into())
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(work)).map_err(|payload| {
                let msg = panic_message(payload.as_ref());
                log::error!("background task panicked: {}", msg);
                TaskError::Panicked(msg)
            });
            // The caller may have dropped the handle
            let _ = task_tx.send(outcome);
        });

    if let Err(e) = spawned {
        log::error!("failed to spawn background task: {}", e);
        let _ = tx.send(Err(TaskError::Spawn(e.to_string())));
    }

    TaskHandle { rx }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Requests sent to the I/O worker.
#[derive(Debug)]
pub enum WorkerTask<C> {
    LoadListing {
        path: PathBuf,
        context: C,
        request_id: u64,
    },
}

/// Responses sent from the I/O worker back to the caller's thread.
#[derive(Debug)]
pub enum WorkerResponse<C> {
    ListingLoaded {
        path: PathBuf,
        listing: Listing<C>,
        request_id: u64,
    },
    Error {
        path: PathBuf,
        error: InspectError,
        request_id: u64,
    },
}

impl<C> WorkerResponse<C> {
    pub fn request_id(&self) -> u64 {
        match self {
            WorkerResponse::ListingLoaded { request_id, .. }
            | WorkerResponse::Error { request_id, .. } => *request_id,
        }
    }
}

/// Channels to the listing worker.
///
/// The worker thread exits once this value (and with it the task sender) is dropped.
pub struct Workers<C> {
    io_tx: Sender<WorkerTask<C>>,
    response_rx: Receiver<WorkerResponse<C>>,
}

impl<C> Workers<C>
where
    C: Clone + Send + 'static,
{
    /// Starts the I/O worker with its own copy of the inspector and listing rules.
    pub fn spawn(inspector: Inspector, formatter: Formatter) -> Self {
        let (io_tx, io_rx) = unbounded::<WorkerTask<C>>();
        let (res_tx, response_rx) = unbounded::<WorkerResponse<C>>();

        start_io_worker(io_rx, res_tx, inspector, formatter);

        Self { io_tx, response_rx }
    }

    /// Queues a listing of `path`. Returns false if the worker is gone.
    pub fn request_listing(&self, path: PathBuf, context: C, request_id: u64) -> bool {
        self.io_tx
            .send(WorkerTask::LoadListing {
                path,
                context,
                request_id,
            })
            .is_ok()
    }

    /// Accessor for the I/O worker task sender.
    pub fn io_tx(&self) -> &Sender<WorkerTask<C>> {
        &self.io_tx
    }

    /// Accessor for the worker response receiver.
    pub fn response_rx(&self) -> &Receiver<WorkerResponse<C>> {
        &self.response_rx
    }
}

/// Starts the I/O worker, which listens for [WorkerTask] and answers with [WorkerResponse].
///
/// Every request gets exactly one response, in the order the requests were queued.
fn start_io_worker<C>(
    task_rx: Receiver<WorkerTask<C>>,
    res_tx: Sender<WorkerResponse<C>>,
    inspector: Inspector,
    formatter: Formatter,
) where
    C: Clone + Send + 'static,
{
    // Detached; the loop ends when the task channel disconnects
    let _ = run_async(move || {
        while let Ok(task) = task_rx.recv() {
            let WorkerTask::LoadListing {
                path,
                context,
                request_id,
            } = task;
            log::debug!("listing request {}: {}", request_id, path.display());

            let response = match inspector.list_directory(context, &path, &formatter) {
                Ok(listing) => WorkerResponse::ListingLoaded {
                    path,
                    listing,
                    request_id,
                },
                Err(error) => WorkerResponse::Error {
                    path,
                    error,
                    request_id,
                },
            };

            if res_tx.send(response).is_err() {
                break;
            }
        }
        log::debug!("io worker stopped");
    });
}
