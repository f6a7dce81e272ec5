use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    card::model::{CardState, CardTemplate, ImageData},
    card::patch::{PatchOutcome, RecordPatch, apply_patch},
    foundation::error::{GlassError, GlassResult},
};

/// Shared, singly-owned card state with an exclusive batch token.
///
/// The interactive editor mutates the state through [`SharedCardState::edit`];
/// the bulk pipeline acquires a [`BatchGuard`] for the duration of a run.
/// While the token is held, editor mutations are rejected with
/// [`GlassError::Busy`] instead of racing the pipeline. The token is released
/// when the guard drops, on success and on error paths alike.
#[derive(Clone, Debug, Default)]
pub struct SharedCardState {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    state: Mutex<CardState>,
    batch_active: AtomicBool,
}

impl SharedCardState {
    /// Wrap an initial state.
    pub fn new(state: CardState) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                batch_active: AtomicBool::new(false),
            }),
        }
    }

    /// Apply an interactive edit.
    ///
    /// Fails with [`GlassError::Busy`] while a batch holds the token.
    pub fn edit(&self, f: impl FnOnce(&mut CardState)) -> GlassResult<()> {
        if self.inner.batch_active.load(Ordering::Acquire) {
            return Err(GlassError::busy(
                "card state is locked by a running batch generation",
            ));
        }
        f(&mut self.lock());
        Ok(())
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> CardState {
        self.lock().clone()
    }

    /// Acquire the exclusive batch token.
    ///
    /// Fails with [`GlassError::Busy`] if another batch already holds it.
    pub fn lock_for_batch(&self) -> GlassResult<BatchGuard> {
        if self
            .inner
            .batch_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(GlassError::busy("a batch generation is already running"));
        }
        Ok(BatchGuard {
            shared: self.clone(),
        })
    }

    /// Whether a batch currently holds the token.
    pub fn is_batch_active(&self) -> bool {
        self.inner.batch_active.load(Ordering::Acquire)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CardState> {
        // A poisoned lock means a panic mid-mutation; the state itself is
        // still structurally valid, so keep going with it.
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Exclusive mutation capability handed to the pipeline for one batch run.
///
/// Mutates the shared state through a merge-patch surface; never owns it.
#[derive(Debug)]
pub struct BatchGuard {
    shared: SharedCardState,
}

impl BatchGuard {
    /// The active template before any patch from the current step merges.
    pub fn template(&self) -> CardTemplate {
        self.shared.lock().template
    }

    /// Merge one record onto the state; patch fields win.
    pub fn apply_record(&self, patch: &RecordPatch) -> PatchOutcome {
        apply_patch(&mut self.shared.lock(), patch)
    }

    /// Route an image to the full-canvas background slot.
    pub fn set_background_image(&self, image: ImageData) {
        self.shared.lock().background_image = Some(image);
    }

    /// Route an image to the template subject slot.
    pub fn set_subject_image(&self, image: ImageData) {
        self.shared.lock().card_image = Some(image);
    }

    /// Clone the state as the pipeline will paint it.
    pub fn snapshot(&self) -> CardState {
        self.shared.snapshot()
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        self.shared
            .inner
            .batch_active
            .store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/shared.rs"]
mod tests;
