use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU32, Ordering},
    },
    time::Duration,
};

use crate::foundation::core::Resolution;
use crate::foundation::error::{GlassError, GlassResult};

/// Where folder images are routed during a batch step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageTarget {
    /// Full-canvas background pattern.
    #[default]
    Background,
    /// The template subject image; only honored when the active template
    /// supports one, otherwise the image is dropped for that step.
    #[serde(rename = "card")]
    Subject,
}

/// Timing knobs for the two designed suspension points of each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPacing {
    /// Upper bound on waiting for the surface's frame-ready signal before
    /// capturing anyway.
    pub settle_fallback: Duration,
    /// Unconditional delay between steps, keeping the surface responsive.
    pub inter_step: Duration,
}

impl Default for StepPacing {
    fn default() -> Self {
        Self {
            settle_fallback: Duration::from_millis(400),
            inter_step: Duration::from_millis(100),
        }
    }
}

/// Parameters and observable status of one batch generation run.
///
/// Progress and the running flag live behind shared atomics so a UI can poll
/// them from another thread via [`GenerationJob::status`]. The running flag
/// clears when the run ends, however many individual captures failed.
#[derive(Clone, Debug)]
pub struct GenerationJob {
    /// Capture pixel-density multiplier.
    pub resolution: Resolution,
    /// Where resolved images are routed.
    pub target: ImageTarget,
    /// Suspension-point timing.
    pub pacing: StepPacing,
    status: JobStatus,
}

impl Default for GenerationJob {
    fn default() -> Self {
        Self::new(Resolution::X2, ImageTarget::Background)
    }
}

impl GenerationJob {
    /// Build a job with default pacing.
    pub fn new(resolution: Resolution, target: ImageTarget) -> Self {
        Self {
            resolution,
            target,
            pacing: StepPacing::default(),
            status: JobStatus::new(),
        }
    }

    /// Shared, cloneable view of this job's progress and running flag.
    pub fn status(&self) -> JobStatus {
        self.status.clone()
    }

    /// Mark the job running; fails with [`GlassError::Busy`] if it already
    /// is, preventing re-entrant starts. The returned guard clears the flag
    /// and resets progress when dropped.
    pub(crate) fn start(&self) -> GlassResult<RunningGuard> {
        if self
            .status
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(GlassError::busy("generation is already running"));
        }
        self.status.progress.store(0, Ordering::Release);
        Ok(RunningGuard {
            status: self.status.clone(),
        })
    }

    pub(crate) fn set_progress(&self, completed: u32) {
        self.status.progress.store(completed, Ordering::Release);
    }
}

/// Poll-only view of a job's progress counter and running flag.
#[derive(Clone, Debug, Default)]
pub struct JobStatus {
    progress: Arc<AtomicU32>,
    running: Arc<AtomicBool>,
}

impl JobStatus {
    fn new() -> Self {
        Self::default()
    }

    /// Steps completed so far in the current run.
    pub fn progress(&self) -> u32 {
        self.progress.load(Ordering::Acquire)
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Clears the running flag when the run ends, on every exit path.
pub(crate) struct RunningGuard {
    status: JobStatus,
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.status.running.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
