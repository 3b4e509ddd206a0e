//! comicbook is a page-flip engine for a paginated "comic book" presentation.
//!
//! A book is an ordered list of pages paired into physical sheets. Sheets lie on a right
//! (unflipped) or left (flipped) stack and turn one at a time around the spine.
//!
//! # Pipeline overview
//!
//! 1. **Pair**: `pages -> Vec<Sheet>` (see [`pair_sheets`])
//! 2. **Lay out**: `Viewport -> Dimensions` (see [`compute_dimensions`])
//! 3. **Drive**: [`FlipAnimator`] accepts navigation commands, runs one timed flip at a time
//!    through [`FlipAnimator::tick`], and notifies [`BookObserver`]s
//! 4. **Pose**: [`FlipAnimator::frame`] gives every sheet's rotation, z-index and transform
//!    for the host renderer (or [`render_preview`] for a flat debug image)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven time**: nothing sleeps or spawns; animation time only advances in `tick`.
//! - **Silent navigation**: out-of-range or busy commands are no-ops, never errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod book;
mod config;
mod foundation;
mod input;
mod render;
mod session;

pub use animation::ease::Ease;
pub use animation::timeline::{Timeline, TimelineStep};
pub use animation::tween::{Lerp, Tween};
pub use book::animator::{BookState, FLIPPED_DEG, FlipAnimator, FlipPhase, UNFLIPPED_DEG};
pub use book::events::{BookEvent, BookObserver, FlipDirection, SubscriptionId};
pub use book::layout::{LayoutConfig, compute_dimensions};
pub use book::pose::{BookFrame, FaceSide, SheetPose, spine_transform};
pub use book::sheet::{Face, Sheet, pair_sheets, sheet_count};
pub use book::zorder::{DEFAULT_Z_BOOST, flipping_z_index, resting_z_index, stack_z_indices};
pub use config::BookConfig;
pub use foundation::core::{
    Affine, Dimensions, PageIndex, Point, Rect, SheetIndex, Size, Vec2, Viewport,
};
pub use foundation::error::{BookError, BookResult};
pub use input::navigation::{
    FocusTarget, InputEvent, Key, ListenerId, ListenerKind, ListenerRegistry, NavCommand,
    NavigationAdapter, NavigationBinding, Side,
};
pub use render::preview::{PreviewOpts, face_colour, render_preview, save_png};
pub use session::script::{NavScript, ScriptStep};
pub use session::simulator::{Simulator, TimedEvent};
