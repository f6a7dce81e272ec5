use crate::{
    archive::zip::CardArchive,
    card::patch::RecordPatch,
    card::shared::SharedCardState,
    foundation::core::BatchRange,
    foundation::error::GlassResult,
    ingest::images::ImageSource,
    ingest::records::RecordIngest,
    pipeline::job::{GenerationJob, ImageTarget},
    pipeline::report::{BatchReport, StepStatus},
    render::canvas::{LiveCanvas, SettleOutcome},
};

/// Result of one batch run: the finalized archive (when serialization
/// succeeded) and the per-index report.
#[derive(Debug)]
pub struct BatchRun {
    /// ZIP bytes ready to be written out, or `None` when finalization
    /// failed; the failure is logged and reflected here rather than raised.
    pub archive: Option<Vec<u8>>,
    /// Per-index outcomes.
    pub report: BatchReport,
}

/// Drives the off-screen card surface through a sequence of data-bound
/// states and packages the captures.
///
/// Holds the two independent index-addressable sequences (records, images),
/// the shared card state it merges onto, and the canvas it captures from.
/// The generation loop is strictly sequential: every iteration mutates the
/// one shared state and paints the one canvas, so there is nothing to run in
/// parallel without racing both.
pub struct BulkGenerator {
    state: SharedCardState,
    canvas: Option<Box<dyn LiveCanvas>>,
    records: RecordIngest,
    images: Vec<ImageSource>,
}

impl BulkGenerator {
    /// Build a generator over the shared card state, with no canvas attached
    /// and empty sequences.
    pub fn new(state: SharedCardState) -> Self {
        Self {
            state,
            canvas: None,
            records: RecordIngest::new(),
            images: Vec::new(),
        }
    }

    /// Attach the live canvas captures are taken from.
    pub fn attach_canvas(&mut self, canvas: Box<dyn LiveCanvas>) {
        self.canvas = Some(canvas);
    }

    /// Whether a canvas is attached.
    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    /// Record ingestion state (file upload / pasted text).
    pub fn records(&self) -> &RecordIngest {
        &self.records
    }

    /// Mutable record ingestion state.
    pub fn records_mut(&mut self) -> &mut RecordIngest {
        &mut self.records
    }

    /// The ordered image sequence.
    pub fn images(&self) -> &[ImageSource] {
        &self.images
    }

    /// Replace the image sequence.
    pub fn set_images(&mut self, images: Vec<ImageSource>) {
        self.images = images;
    }

    /// `max(records, images)`: the bound both range ends clamp to.
    pub fn total_available(&self) -> usize {
        self.records.len().max(self.images.len())
    }

    /// The full default range for the current sequences.
    pub fn default_range(&self) -> BatchRange {
        BatchRange::default_for(self.total_available())
    }

    /// Run the sequential render-capture loop over `range`.
    ///
    /// Returns `Ok(None)` without touching any state when no canvas is
    /// attached or both sequences are empty. Otherwise the resolved range is
    /// iterated one index at a time: merge the record patch, route the
    /// resolved image, paint, wait for the frame to settle (bounded), then
    /// capture and archive (or log and skip on failure) and pace before the
    /// next step. The archive is finalized at the end; a serialization failure is
    /// logged and reported as `archive: None`. The job's running flag clears
    /// on every exit path.
    #[tracing::instrument(skip(self, job), fields(range = ?range))]
    pub fn generate(
        &mut self,
        range: BatchRange,
        job: &GenerationJob,
    ) -> GlassResult<Option<BatchRun>> {
        let total = self.total_available();
        let Some(canvas) = self.canvas.as_deref_mut() else {
            return Ok(None);
        };
        let Some(resolved) = range.resolve(total) else {
            return Ok(None);
        };

        let _running = job.start()?;
        let guard = self.state.lock_for_batch()?;

        let mut archive = CardArchive::new();
        let mut report = BatchReport::default();

        for (step, idx) in resolved.indices().enumerate() {
            let position = (idx + 1) as u32;

            let record = self
                .records
                .records()
                .get(idx)
                .cloned()
                .unwrap_or_else(RecordPatch::empty);
            // Past the end of a shorter image sequence, the final image
            // repeats rather than failing the step.
            let image = self.images.get(idx).or_else(|| self.images.last());

            // Routing consults the template as it stood before this step's
            // patch merged.
            let template_before = guard.template();
            let outcome = guard.apply_record(&record);
            if !outcome.discarded.is_empty() {
                tracing::debug!(position, discarded = outcome.discarded.len(), "patch keys discarded");
            }

            if let Some(source) = image {
                match job.target {
                    ImageTarget::Background => {
                        guard.set_background_image(source.data.clone());
                    }
                    ImageTarget::Subject if template_before.supports_subject_image() => {
                        guard.set_subject_image(source.data.clone());
                    }
                    ImageTarget::Subject => {
                        tracing::debug!(
                            position,
                            "subject target on a template without a subject image; image dropped"
                        );
                    }
                }
            }

            match capture_step(canvas, &guard.snapshot(), job, position) {
                Ok(bytes) => {
                    archive.insert(position, bytes);
                    report.record(position, StepStatus::Captured);
                }
                Err(reason) => report.record(position, StepStatus::Skipped(reason)),
            }

            job.set_progress((step + 1) as u32);
            std::thread::sleep(job.pacing.inter_step);
        }

        let archive = match archive.finalize() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::error!(error = %e, "archive serialization failed; no download offered");
                None
            }
        };

        Ok(Some(BatchRun { archive, report }))
    }
}

// The capture path for one step; failures are absorbed into the skip reason.
fn capture_step(
    canvas: &mut dyn LiveCanvas,
    state: &crate::card::model::CardState,
    job: &GenerationJob,
    position: u32,
) -> Result<Vec<u8>, String> {
    if let Err(e) = canvas.paint(state) {
        tracing::warn!(position, error = %e, "paint failed; skipping step");
        return Err(e.to_string());
    }

    if canvas.wait_ready(job.pacing.settle_fallback) == SettleOutcome::TimedOut {
        tracing::warn!(position, "frame-ready signal timed out; capturing current frame");
    }

    canvas.capture(job.resolution).map_err(|e| {
        tracing::warn!(position, error = %e, "capture failed; skipping step");
        e.to_string()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
