use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::submission::{self, DemoSubmission, SubmitError};

#[derive(Debug)]
pub(crate) struct SubmitJob {
    pub(crate) endpoint: String,
    pub(crate) submission: DemoSubmission,
}

#[derive(Debug)]
pub(crate) struct SubmitJobResult {
    pub(crate) result: Result<(), SubmitError>,
}

/// Background worker plumbing for the single in-flight submission.
pub(crate) struct SubmitJobs {
    message_tx: Sender<SubmitJobResult>,
    message_rx: Receiver<SubmitJobResult>,
    worker: Option<JoinHandle<()>>,
}

impl SubmitJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel();
        Self {
            message_tx,
            message_rx,
            worker: None,
        }
    }

    pub(crate) fn in_progress(&self) -> bool {
        self.worker.is_some()
    }

    /// Spawn the POST on a worker thread. Ignored while one is already running.
    pub(crate) fn begin_submit(&mut self, job: SubmitJob) -> bool {
        self.begin(move || submission::submit_demo(&job.endpoint, &job.submission))
    }

    pub(crate) fn begin<F>(&mut self, work: F) -> bool
    where
        F: FnOnce() -> Result<(), SubmitError> + Send + 'static,
    {
        if self.worker.is_some() {
            return false;
        }
        let tx = self.message_tx.clone();
        self.worker = Some(thread::spawn(move || {
            let _ = tx.send(SubmitJobResult { result: work() });
        }));
        true
    }

    /// The finished worker's result, if it has one.
    ///
    /// A worker that exited without sending (it panicked) yields
    /// [`SubmitError::Unknown`]. Either way the job is cleared.
    pub(crate) fn try_recv_result(&mut self) -> Option<Result<(), SubmitError>> {
        let worker = self.worker.as_ref()?;
        // Checked before receiving: a finished worker has already sent, if it ever will.
        let finished = worker.is_finished();
        let result = match self.message_rx.try_recv() {
            Ok(message) => message.result,
            Err(_) if finished => {
                tracing::error!("Submit worker exited without reporting a result");
                Err(SubmitError::Unknown)
            }
            Err(_) => return None,
        };
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        Some(result)
    }
}
