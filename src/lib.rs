//! Glasscard is a headless generator for templated "glass" cards.
//!
//! A card is described by a flat [`CardState`] (template, background,
//! typography, icon) and rendered off-screen to premultiplied RGBA8 pixels.
//! The core of the crate is the bulk pipeline: a strictly sequential
//! render-capture loop that merges data records onto the shared state one
//! index at a time, waits for the surface to settle, captures a PNG, and
//! packages the captures into a single ZIP archive.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: a JSON array of record patches ([`RecordIngest`]) and an
//!    ordered image folder ([`load_images_from_dir`]) become two independent
//!    index-addressable sequences.
//! 2. **Select**: a 1-based inclusive [`BatchRange`] is clamped against
//!    `max(records, images)`; an inverted span collapses instead of failing.
//! 3. **Generate**: [`BulkGenerator::generate`] iterates the range (merge
//!    patch, route image, paint, settle, capture, archive), skipping failed
//!    steps and reporting them in a [`BatchReport`].
//! 4. **Finalize**: the captures are serialized into one deflate ZIP.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Sequential by contract**: all iterations share one mutable state and
//!   one canvas; the loop never runs indices in parallel.
//! - **Exclusive batch access**: interactive edits are rejected while a run
//!   holds the [`BatchGuard`] token, released on drop.
//! - **Best-effort batch**: one failed capture never aborts the run.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod archive;
mod card;
mod foundation;
mod ingest;
mod pipeline;
mod render;

pub use archive::zip::{ARCHIVE_FILE_NAME, CardArchive, entry_name};
pub use card::gradients::{GRADIENTS, Gradient, gradient_at};
pub use card::icons::{ICON_NAMES, IconSet};
pub use card::model::{
    AspectRatio, CardState, CardTemplate, GlassMode, ImageData, ImagePosition, ImageShape,
};
pub use card::patch::{DiscardReason, PatchOutcome, RecordPatch, apply_patch};
pub use card::prompt::{ai_prompt, preview_json};
pub use card::shared::{BatchGuard, SharedCardState};
pub use foundation::core::{BatchRange, FrameRGBA, ResolvedRange, Resolution};
pub use foundation::error::{GlassError, GlassResult};
pub use ingest::images::{ImageSource, collect_image_files, decode_image, load_images_from_dir};
pub use ingest::records::{RecordIngest, RecordOrigin};
pub use pipeline::generate::{BatchRun, BulkGenerator};
pub use pipeline::job::{GenerationJob, ImageTarget, JobStatus, StepPacing};
pub use pipeline::report::{BatchReport, StepOutcome, StepStatus};
pub use render::canvas::{LiveCanvas, SettleOutcome};
pub use render::gradient::{fill_linear_135, sample_stops};
pub use render::offscreen::{OffscreenCanvas, encode_png};
pub use render::renderer::{CardRenderer, ContentBox, RendererOptions, cover_affine};
pub use render::text::{TextBrushRgba8, TextLayoutEngine};
