use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::book::animator::FlipAnimator;
use crate::book::events::BookEvent;
use crate::foundation::error::{BookError, BookResult};
use crate::session::script::{NavScript, ScriptStep};

/// An event together with the simulated time it was emitted at.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimedEvent {
    /// Milliseconds since the simulation started.
    pub at_ms: f64,
    /// The event.
    #[serde(flatten)]
    pub event: BookEvent,
}

/// Fixed-rate host loop around a [`FlipAnimator`].
///
/// Plays the role of the browser's animation-frame loop: every frame advances the animator by
/// the same step, and each navigation step waits for its flip to finish before the next one runs.
pub struct Simulator<T> {
    book: FlipAnimator<T>,
    frame_dt: Duration,
    clock: Rc<Cell<Duration>>,
    events: Rc<RefCell<Vec<TimedEvent>>>,
    frames: u64,
}

impl<T> Simulator<T> {
    /// Wrap `book`, ticking it `fps` times per simulated second.
    pub fn new(mut book: FlipAnimator<T>, fps: u32) -> BookResult<Self> {
        if fps == 0 {
            return Err(BookError::validation("simulator fps must be > 0"));
        }
        let frame_dt = Duration::from_secs(1) / fps;
        if frame_dt.is_zero() {
            return Err(BookError::validation(format!(
                "simulator fps {fps} is too high: frame step rounds to zero"
            )));
        }
        let clock = Rc::new(Cell::new(Duration::ZERO));
        let events = Rc::new(RefCell::new(Vec::new()));

        let (c, log) = (Rc::clone(&clock), Rc::clone(&events));
        book.subscribe(move |event: &BookEvent| {
            log.borrow_mut().push(TimedEvent {
                at_ms: c.get().as_secs_f64() * 1000.0,
                event: event.clone(),
            });
        });

        Ok(Self {
            book,
            frame_dt,
            clock,
            events,
            frames: 0,
        })
    }

    /// Run every step of `script` in order.
    #[tracing::instrument(skip_all, fields(steps = script.len()))]
    pub fn run(&mut self, script: &NavScript) {
        for step in &script.steps {
            self.run_step(step);
        }
        tracing::debug!(
            frames = self.frames,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "script finished"
        );
    }

    /// Run one step. Flip steps return once the book is idle again.
    pub fn run_step(&mut self, step: &ScriptStep) {
        match step {
            ScriptStep::Next => {
                self.book.flip_next();
            }
            ScriptStep::Prev => {
                self.book.flip_prev();
            }
            ScriptStep::First => {
                self.book.flip_to_first();
            }
            ScriptStep::Last => {
                self.book.flip_to_last();
            }
            ScriptStep::To(page) => {
                self.book.flip_to(*page);
            }
            ScriptStep::Wait(d) => {
                self.advance(*d);
                return;
            }
            ScriptStep::Resize(viewport) => {
                self.book.set_viewport(*viewport);
            }
        }
        self.settle();
    }

    /// Tick frames until no flip is in flight.
    pub fn settle(&mut self) {
        while self.book.is_animating() {
            self.step_frame(self.frame_dt);
        }
    }

    /// Let `d` of simulated time pass, one frame at a time. The last frame may be shorter.
    pub fn advance(&mut self, d: Duration) {
        let mut left = d;
        while !left.is_zero() {
            let dt = left.min(self.frame_dt);
            self.step_frame(dt);
            left -= dt;
        }
    }

    fn step_frame(&mut self, dt: Duration) {
        self.clock.set(self.clock.get() + dt);
        self.frames += 1;
        self.book.tick(dt);
    }

    /// Simulated time since construction.
    pub fn elapsed(&self) -> Duration {
        self.clock.get()
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<TimedEvent> {
        self.events.borrow().clone()
    }

    /// Borrow the book.
    pub fn book(&self) -> &FlipAnimator<T> {
        &self.book
    }

    /// Mutably borrow the book, e.g. to start a flip without settling it.
    pub fn book_mut(&mut self) -> &mut FlipAnimator<T> {
        &mut self.book
    }

    /// Give the book back.
    pub fn into_book(self) -> FlipAnimator<T> {
        self.book
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulator.rs"]
mod tests;
