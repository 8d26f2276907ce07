use crate::models::{UploadJob, UploadProgress, UploadRequest, UploadStage};
use crate::services::latency::Latency;
use crate::utils::{is_video_content_type, now_millis, now_rfc3339, random_token_id, random_tx_hash};
use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub const FAILURE_MESSAGE: &str = "Upload failed. Please try again.";

/// Checkpoints of the publishing timeline with the pause that follows each.
const PIPELINE: [(UploadStage, u8, &str, u64); 5] = [
    (UploadStage::Uploading, 10, "Uploading to IPFS...", 1000),
    (UploadStage::Uploading, 40, "Processing video metadata...", 1500),
    (UploadStage::Processing, 70, "Generating video hash...", 1000),
    (UploadStage::Minting, 85, "Minting NFT...", 2000),
    (UploadStage::Complete, 100, "Upload complete!", 0),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadRejected {
    #[error("Please select a video file")]
    MissingFile,
    #[error("Please enter a video title")]
    MissingTitle,
    #[error("Please select a valid video file")]
    InvalidFileType,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot move upload from {from:?} to {to:?}")]
pub struct TransitionRefused {
    pub from: UploadStage,
    pub to: UploadStage,
}

impl UploadStage {
    pub fn successor(self) -> Option<UploadStage> {
        match self {
            UploadStage::Idle => Some(UploadStage::Uploading),
            UploadStage::Uploading => Some(UploadStage::Processing),
            UploadStage::Processing => Some(UploadStage::Minting),
            UploadStage::Minting => Some(UploadStage::Complete),
            UploadStage::Complete | UploadStage::Error => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStage::Complete | UploadStage::Error)
    }

    /// Stay, step to the direct successor, or fail. Terminal stages only
    /// leave through a reset.
    pub fn can_move_to(self, next: UploadStage) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == self || next == UploadStage::Error || self.successor() == Some(next)
    }
}

impl UploadProgress {
    pub fn idle() -> Self {
        UploadProgress {
            stage: UploadStage::Idle,
            progress: 0,
            message: String::new(),
        }
    }

    pub fn failed() -> Self {
        UploadProgress {
            stage: UploadStage::Error,
            progress: 0,
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    fn checkpoint(stage: UploadStage, progress: u8, message: &str) -> Self {
        UploadProgress {
            stage,
            progress,
            message: message.to_string(),
        }
    }
}

/// Checks a submit before any stage transition happens. File presence is
/// checked first, then the title.
pub fn validate_request(request: &UploadRequest) -> Result<(), UploadRejected> {
    let file = request.file.as_ref().ok_or(UploadRejected::MissingFile)?;
    if request.title.trim().is_empty() {
        return Err(UploadRejected::MissingTitle);
    }
    if !is_video_content_type(&file.content_type) {
        return Err(UploadRejected::InvalidFileType);
    }
    Ok(())
}

impl UploadJob {
    fn new(id: String, request: &UploadRequest) -> Self {
        UploadJob {
            id,
            title: request.title.trim().to_string(),
            file_name: request
                .file
                .as_ref()
                .map(|file| file.file_name.clone())
                .unwrap_or_default(),
            progress: UploadProgress::idle(),
            history: Vec::new(),
            ipfs_hash: None,
            nft_token_id: None,
            transaction_hash: None,
            created_at: now_rfc3339(),
            finished_at: None,
        }
    }

    /// Applies a checkpoint if the stage order allows it. Refused moves leave
    /// the job untouched.
    pub fn advance(&mut self, next: UploadProgress) -> Result<(), TransitionRefused> {
        if !self.progress.stage.can_move_to(next.stage) {
            return Err(TransitionRefused {
                from: self.progress.stage,
                to: next.stage,
            });
        }
        if next.stage.is_terminal() {
            self.finished_at = Some(now_rfc3339());
        }
        self.history.push(next.clone());
        self.progress = next;
        Ok(())
    }

    pub fn fail(&mut self) -> Result<(), TransitionRefused> {
        self.advance(UploadProgress::failed())
    }

    /// Back to a blank `idle` job.
    pub fn reset(&mut self) {
        self.progress = UploadProgress::idle();
        self.history.clear();
        self.ipfs_hash = None;
        self.nft_token_id = None;
        self.transaction_hash = None;
        self.finished_at = None;
    }
}

/// Registry of running and finished upload jobs.
pub struct UploadJobs {
    jobs: Arc<Mutex<HashMap<String, UploadJob>>>,
    counter: AtomicU64,
}

impl Default for UploadJobs {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadJobs {
    pub fn new() -> Self {
        UploadJobs {
            jobs: Arc::new(Mutex::new(HashMap::new())),
            counter: AtomicU64::new(0),
        }
    }

    pub fn create(&self, request: &UploadRequest) -> Option<UploadJob> {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("upload_{}_{}", now_millis(), sequence);
        let job = UploadJob::new(id.clone(), request);
        let mut jobs = self.jobs.lock().ok()?;
        jobs.insert(id, job.clone());
        Some(job)
    }

    pub fn get(&self, job_id: &str) -> Option<UploadJob> {
        self.jobs.lock().ok()?.get(job_id).cloned()
    }

    /// Runs `change` against a job. Returns `None` when the job is gone,
    /// e.g. after a reset forgot it.
    pub fn update<T>(&self, job_id: &str, change: impl FnOnce(&mut UploadJob) -> T) -> Option<T> {
        let mut jobs = self.jobs.lock().ok()?;
        jobs.get_mut(job_id).map(change)
    }

    pub fn forget(&self, job_id: &str) -> bool {
        match self.jobs.lock() {
            Ok(mut jobs) => jobs.remove(job_id).is_some(),
            Err(_) => false,
        }
    }

    /// Drops terminal jobs that finished more than `ttl` before `now`.
    /// Running jobs are never evicted. Returns the evicted ids.
    pub fn evict_finished(&self, now: DateTime<Utc>, ttl: Duration) -> Vec<String> {
        let Ok(mut jobs) = self.jobs.lock() else {
            return Vec::new();
        };
        let expired: Vec<String> = jobs
            .values()
            .filter(|job| {
                job.finished_at
                    .as_deref()
                    .and_then(|at| DateTime::parse_from_rfc3339(at).ok())
                    .is_some_and(|at| now.signed_duration_since(at) > ttl)
            })
            .map(|job| job.id.clone())
            .collect();
        for id in &expired {
            jobs.remove(id);
        }
        expired
    }

    pub fn len(&self) -> usize {
        self.jobs.lock().map(|jobs| jobs.len()).unwrap_or(0)
    }
}

/// Drives a validated job through the checkpoint timeline. The IPFS hash is
/// the content id pinned when the file was selected.
pub async fn run_pipeline(jobs: Arc<UploadJobs>, latency: Latency, job_id: String, cid: String) {
    info!("Starting upload pipeline for job {job_id}");

    for (stage, progress, message, pause_ms) in PIPELINE {
        let checkpoint = UploadProgress::checkpoint(stage, progress, message);
        let applied = jobs.update(&job_id, |job| {
            if stage == UploadStage::Minting {
                job.ipfs_hash = Some(cid.clone());
            }
            if stage == UploadStage::Complete {
                job.nft_token_id = Some(random_token_id());
                job.transaction_hash = Some(random_tx_hash());
            }
            job.advance(checkpoint)
        });

        match applied {
            None => {
                debug!("Upload job {job_id} was forgotten, dropping remaining checkpoints");
                return;
            }
            Some(Err(refused)) => {
                error!("Upload job {job_id} broke stage order: {refused}");
                if jobs.update(&job_id, |job| job.fail()).is_none() {
                    warn!("Upload job {job_id} vanished while failing");
                }
                return;
            }
            Some(Ok(())) => info!("Upload job {job_id}: {progress}% {message}"),
        }

        latency.wait(pause_ms).await;
    }

    info!("Upload job {job_id} complete");
}
