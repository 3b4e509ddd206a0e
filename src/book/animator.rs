use std::time::Duration;

use crate::animation::timeline::{Timeline, TimelineStep};
use crate::animation::tween::Tween;
use crate::book::events::{BookEvent, BookObserver, FlipDirection, ObserverList, SubscriptionId};
use crate::book::sheet::{Sheet, pair_sheets};
use crate::book::zorder::{flipping_z_index, resting_z_index};
use crate::config::BookConfig;
use crate::foundation::core::{Dimensions, PageIndex, SheetIndex, Viewport};
use crate::foundation::error::BookResult;

/// Rotation of a sheet lying on the right stack, in degrees around the spine.
pub const UNFLIPPED_DEG: f64 = 0.0;
/// Rotation of a sheet lying on the left stack.
pub const FLIPPED_DEG: f64 = -180.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActiveFlip {
    sheet: usize,
    direction: FlipDirection,
}

/// Observable state of the flip state machine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FlipPhase {
    /// No flip in flight; commands are accepted.
    Idle,
    /// One sheet is turning; flip and jump commands are ignored.
    Animating {
        /// Sheet being turned.
        sheet: SheetIndex,
        /// Turn direction.
        direction: FlipDirection,
        /// Current rotation in degrees.
        rotation_deg: f64,
        /// Linear progress in `[0, 1]`.
        progress: f64,
    },
}

/// Serializable summary of the book for hosts and diagnostics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BookState {
    /// Boundary between the left and right stacks.
    pub current_sheet: usize,
    /// `current_sheet * 2`.
    pub current_page: usize,
    /// Number of sheets.
    pub total_sheets: usize,
    /// Number of content pages.
    pub total_pages: usize,
    /// True once the cover has been turned.
    pub is_open: bool,
    /// True while a flip is in flight.
    pub is_animating: bool,
    /// Applied page dimensions.
    pub dimensions: Dimensions,
}

/// Page-flip engine for a book of sheets.
///
/// Sheets with index `< current_sheet` lie flipped on the left stack, the rest on the right
/// stack. Flips are animated and driven by [`FlipAnimator::tick`]; jumps are instantaneous.
/// Commands that cannot run (book edge, flip already in flight, jump to the current sheet)
/// are ignored and return `false`.
#[derive(Debug)]
pub struct FlipAnimator<T> {
    sheets: Vec<Sheet<T>>,
    page_count: usize,
    config: BookConfig,
    current: usize,
    open: bool,
    timeline: Timeline<ActiveFlip>,
    queued: Option<FlipDirection>,
    dimensions: Dimensions,
    pending_dimensions: Option<Dimensions>,
    observers: ObserverList,
}

impl<T> FlipAnimator<T> {
    /// Build a book from an ordered page list.
    pub fn new(pages: impl IntoIterator<Item = T>, config: BookConfig) -> BookResult<Self> {
        config.validate()?;
        let pages: Vec<T> = pages.into_iter().collect();
        let page_count = pages.len();
        let sheets = pair_sheets(pages);
        let current = (config.start_page / 2).min(sheets.len());
        tracing::debug!(
            pages = page_count,
            sheets = sheets.len(),
            start_sheet = current,
            "book created"
        );
        Ok(Self {
            sheets,
            page_count,
            config,
            current,
            open: current > 0,
            timeline: Timeline::new(),
            queued: None,
            dimensions: Dimensions::default(),
            pending_dimensions: None,
            observers: ObserverList::default(),
        })
    }

    /// Register an observer. Events are delivered synchronously in emission order.
    pub fn subscribe(&mut self, observer: impl BookObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Turn the top sheet of the right stack onto the left stack.
    pub fn flip_next(&mut self) -> bool {
        self.request_flip(FlipDirection::Forward)
    }

    /// Turn the top sheet of the left stack back onto the right stack.
    pub fn flip_prev(&mut self) -> bool {
        self.request_flip(FlipDirection::Backward)
    }

    /// Jump, without animation, to the sheet carrying `page`.
    pub fn flip_to(&mut self, page: usize) -> bool {
        if self.timeline.is_busy() {
            tracing::trace!(page, "jump ignored: flip in flight");
            return false;
        }
        let target = (page / 2).min(self.sheets.len());
        if target == self.current {
            return false;
        }

        tracing::debug!(from = self.current, to = target, "jump");
        self.current = target;
        self.observers.emit(&BookEvent::PageChanged {
            page: self.current_page(),
        });
        self.sync_open_state();
        true
    }

    /// Jump to the cover.
    pub fn flip_to_first(&mut self) -> bool {
        self.flip_to(0)
    }

    /// Jump to the sheet carrying the last page.
    pub fn flip_to_last(&mut self) -> bool {
        self.flip_to(self.page_count.saturating_sub(1))
    }

    /// Advance the in-flight flip by `dt`. Returns `true` when a flip completed during this call.
    ///
    /// Completion updates the state and emits events before returning. Time left over past the
    /// end of a flip carries into a queued flip started on completion. With nothing in flight,
    /// any pending layout change is applied.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut dt = dt;
        let mut completed = false;
        loop {
            match self.timeline.advance(dt) {
                TimelineStep::Idle => {
                    self.apply_pending_layout();
                    return completed;
                }
                TimelineStep::Running { .. } => return completed,
                TimelineStep::Finished { key, overshoot, .. } => {
                    self.complete_flip(key);
                    completed = true;
                    // Zero-length flips would never consume the remainder.
                    if !self.timeline.is_busy() || overshoot.is_zero() || overshoot >= dt {
                        return true;
                    }
                    dt = overshoot;
                }
            }
        }
    }

    /// Recompute page geometry for a new viewport.
    ///
    /// While a flip is in flight the result is held and applied once the book is idle again.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Dimensions {
        let dims = self.config.layout.dimensions_for(viewport);
        if self.timeline.is_busy() {
            self.pending_dimensions = Some(dims);
        } else {
            self.pending_dimensions = None;
            self.apply_dimensions(dims);
        }
        dims
    }

    /// `current_sheet * 2`.
    pub fn current_page(&self) -> PageIndex {
        PageIndex(self.current * 2)
    }

    /// True once the cover has been turned.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a flip is in flight.
    pub fn is_animating(&self) -> bool {
        self.timeline.is_busy()
    }

    /// Boundary between the left and right stacks.
    pub fn current_sheet(&self) -> SheetIndex {
        SheetIndex(self.current)
    }

    /// Number of sheets.
    pub fn total_sheets(&self) -> usize {
        self.sheets.len()
    }

    /// Number of content pages the book was built from.
    pub fn total_pages(&self) -> usize {
        self.page_count
    }

    /// Whether [`FlipAnimator::flip_next`] would start a flip now.
    pub fn can_flip_next(&self) -> bool {
        !self.timeline.is_busy() && self.current + 1 < self.sheets.len()
    }

    /// Whether [`FlipAnimator::flip_prev`] would start a flip now.
    pub fn can_flip_prev(&self) -> bool {
        !self.timeline.is_busy() && self.current > 0
    }

    /// One-based page number and page total, for a "page N of M" indicator.
    pub fn page_indicator(&self) -> (usize, usize) {
        (self.current_page().0 + 1, self.page_count)
    }

    /// Current state of the state machine.
    pub fn phase(&self) -> FlipPhase {
        match (self.timeline.current(), self.timeline.progress()) {
            (Some((flip, rotation_deg)), Some(progress)) => FlipPhase::Animating {
                sheet: SheetIndex(flip.sheet),
                direction: flip.direction,
                rotation_deg,
                progress,
            },
            _ => FlipPhase::Idle,
        }
    }

    /// Sheets in book order.
    pub fn sheets(&self) -> &[Sheet<T>] {
        &self.sheets
    }

    /// Active configuration.
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Applied page dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// True when the sheet rests on the left stack. The sheet in flight keeps its pre-flip side.
    pub fn is_sheet_flipped(&self, sheet: usize) -> bool {
        sheet < self.current
    }

    /// Rotation of `sheet` in degrees at this instant.
    pub fn sheet_rotation(&self, sheet: usize) -> f64 {
        if let Some((flip, rotation)) = self.timeline.current()
            && flip.sheet == sheet
        {
            return rotation;
        }
        if self.is_sheet_flipped(sheet) {
            FLIPPED_DEG
        } else {
            UNFLIPPED_DEG
        }
    }

    /// Z-index of `sheet` at this instant.
    pub fn sheet_z_index(&self, sheet: usize) -> i32 {
        let total = self.sheets.len();
        if let Some((flip, _)) = self.timeline.current()
            && flip.sheet == sheet
        {
            return flipping_z_index(total, self.config.z_boost);
        }
        resting_z_index(sheet, self.is_sheet_flipped(sheet), total)
    }

    /// Z-index of every sheet, in book order.
    pub fn z_indices(&self) -> Vec<i32> {
        (0..self.sheets.len())
            .map(|i| self.sheet_z_index(i))
            .collect()
    }

    /// Serializable summary.
    pub fn snapshot(&self) -> BookState {
        BookState {
            current_sheet: self.current,
            current_page: self.current_page().0,
            total_sheets: self.sheets.len(),
            total_pages: self.page_count,
            is_open: self.open,
            is_animating: self.timeline.is_busy(),
            dimensions: self.dimensions,
        }
    }

    fn request_flip(&mut self, direction: FlipDirection) -> bool {
        if self.timeline.is_busy() {
            if self.config.queue_while_animating {
                tracing::trace!(?direction, "flip queued behind in-flight flip");
                self.queued = Some(direction);
            } else {
                tracing::trace!(?direction, "flip ignored: flip in flight");
            }
            return false;
        }
        self.start_flip(direction)
    }

    fn start_flip(&mut self, direction: FlipDirection) -> bool {
        let (sheet, from, to) = match direction {
            FlipDirection::Forward => {
                if self.current + 1 >= self.sheets.len() {
                    tracing::trace!(current = self.current, "flip ignored: last sheet");
                    return false;
                }
                (self.current, UNFLIPPED_DEG, FLIPPED_DEG)
            }
            FlipDirection::Backward => {
                if self.current == 0 {
                    tracing::trace!("flip ignored: cover");
                    return false;
                }
                (self.current - 1, FLIPPED_DEG, UNFLIPPED_DEG)
            }
        };

        let tween = Tween::new(from, to, self.config.flip_duration(), self.config.ease);
        if !self.timeline.start(ActiveFlip { sheet, direction }, tween) {
            return false;
        }
        tracing::debug!(sheet, ?direction, "flip started");
        self.observers.emit(&BookEvent::FlipStarted {
            sheet: SheetIndex(sheet),
            direction,
        });
        true
    }

    fn complete_flip(&mut self, flip: ActiveFlip) {
        self.current = match flip.direction {
            FlipDirection::Forward => flip.sheet + 1,
            FlipDirection::Backward => flip.sheet,
        };
        tracing::debug!(
            sheet = flip.sheet,
            direction = ?flip.direction,
            current = self.current,
            "flip completed"
        );

        self.observers.emit(&BookEvent::PageChanged {
            page: self.current_page(),
        });
        self.sync_open_state();
        self.observers.emit(&BookEvent::FlipCompleted {
            sheet: SheetIndex(flip.sheet),
            direction: flip.direction,
        });

        self.apply_pending_layout();
        if let Some(next) = self.queued.take() {
            self.start_flip(next);
        }
    }

    fn sync_open_state(&mut self) {
        let open = self.current > 0;
        if open == self.open {
            return;
        }
        self.open = open;
        if open {
            tracing::debug!("book opened");
            self.observers.emit(&BookEvent::BookOpened);
        } else {
            tracing::debug!("book closed");
            self.observers.emit(&BookEvent::BookClosed);
        }
    }

    fn apply_pending_layout(&mut self) {
        if let Some(dims) = self.pending_dimensions.take() {
            self.apply_dimensions(dims);
        }
    }

    fn apply_dimensions(&mut self, dims: Dimensions) {
        if dims == self.dimensions {
            return;
        }
        tracing::debug!(width = dims.width, height = dims.height, "layout changed");
        self.dimensions = dims;
        self.observers
            .emit(&BookEvent::LayoutChanged { dimensions: dims });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/animator.rs"]
mod tests;
