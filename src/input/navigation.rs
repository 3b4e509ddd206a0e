use std::cell::RefCell;
use std::rc::Rc;

use crate::book::animator::FlipAnimator;
use crate::foundation::core::{Point, Rect};

/// Keyboard keys the navigation layer understands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowDown`.
    ArrowDown,
    /// Space bar.
    Space,
    /// `PageDown`.
    PageDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowUp`.
    ArrowUp,
    /// `PageUp`.
    PageUp,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// Any other key, by its DOM `key` value.
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowRight" => Self::ArrowRight,
            "ArrowDown" => Self::ArrowDown,
            " " | "Space" | "Spacebar" => Self::Space,
            "PageDown" => Self::PageDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowUp" => Self::ArrowUp,
            "PageUp" => Self::PageUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Half of the book area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left page (previous).
    Left,
    /// Right page (next).
    Right,
}

/// Element that had focus when a key was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// The page body or any non-editable element.
    Document,
    /// A text input or text area; navigation keys belong to it.
    TextInput,
    /// One of the two click zones over the book.
    ClickZone(Side),
}

/// Raw input delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    Key {
        /// Key pressed.
        key: Key,
        /// Focused element.
        target: FocusTarget,
    },
    /// A primary-button click, in the same coordinates as the book area.
    Pointer {
        /// Click position.
        position: Point,
    },
}

/// Navigation command derived from input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Turn forward one sheet.
    Next,
    /// Turn back one sheet.
    Prev,
    /// Jump to the cover.
    First,
    /// Jump to the last page.
    Last,
}

impl NavCommand {
    /// Run the command. Returns whatever the animator returned.
    pub fn apply<T>(self, book: &mut FlipAnimator<T>) -> bool {
        match self {
            Self::Next => book.flip_next(),
            Self::Prev => book.flip_prev(),
            Self::First => book.flip_to_first(),
            Self::Last => book.flip_to_last(),
        }
    }
}

/// Stateless key/pointer to command mapping.
///
/// Repeated input is not debounced here; the animator drops commands while a flip is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationAdapter {
    /// When false every event is ignored.
    pub enabled: bool,
    /// Book area in host coordinates, used to split pointer clicks into halves.
    pub book_area: Rect,
}

impl NavigationAdapter {
    /// Enabled adapter for a book occupying `book_area`.
    pub fn new(book_area: Rect) -> Self {
        Self {
            enabled: true,
            book_area,
        }
    }

    /// Command for `event`, if any.
    pub fn translate(&self, event: &InputEvent) -> Option<NavCommand> {
        if !self.enabled {
            return None;
        }
        match event {
            InputEvent::Key { key, target } => translate_key(key, *target),
            InputEvent::Pointer { position } => self.translate_pointer(*position),
        }
    }

    /// Translate `event` and run the resulting command on `book`.
    pub fn dispatch<T>(
        &self,
        event: &InputEvent,
        book: &mut FlipAnimator<T>,
    ) -> Option<NavCommand> {
        let cmd = self.translate(event)?;
        let ran = cmd.apply(book);
        tracing::trace!(?cmd, ran, "navigation input");
        Some(cmd)
    }

    fn translate_pointer(&self, position: Point) -> Option<NavCommand> {
        let area = self.book_area;
        if !area.contains(position) {
            return None;
        }
        if position.x < area.center().x {
            Some(NavCommand::Prev)
        } else {
            Some(NavCommand::Next)
        }
    }

    /// Acquire the key and pointer listeners from `registry` as one scoped pair.
    ///
    /// Both listeners are released when the returned binding is dropped.
    pub fn bind<R: ListenerRegistry>(registry: Rc<RefCell<R>>) -> NavigationBinding<R> {
        let (key, pointer) = {
            let mut r = registry.borrow_mut();
            (r.add(ListenerKind::KeyDown), r.add(ListenerKind::Pointer))
        };
        NavigationBinding {
            registry,
            key,
            pointer,
        }
    }
}

fn translate_key(key: &Key, target: FocusTarget) -> Option<NavCommand> {
    match target {
        FocusTarget::TextInput => None,
        FocusTarget::ClickZone(side) if *key == Key::Enter => Some(match side {
            Side::Left => NavCommand::Prev,
            Side::Right => NavCommand::Next,
        }),
        _ => match key {
            Key::ArrowRight | Key::ArrowDown | Key::Space | Key::PageDown => Some(NavCommand::Next),
            Key::ArrowLeft | Key::ArrowUp | Key::PageUp => Some(NavCommand::Prev),
            Key::Home => Some(NavCommand::First),
            Key::End => Some(NavCommand::Last),
            Key::Enter | Key::Other(_) => None,
        },
    }
}

/// Kind of host event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Window-level `keydown`.
    KeyDown,
    /// Click on the book area.
    Pointer,
}

/// Identifier of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host event-listener registration, e.g. a DOM window.
pub trait ListenerRegistry {
    /// Register a listener.
    fn add(&mut self, kind: ListenerKind) -> ListenerId;
    /// Remove a previously registered listener.
    fn remove(&mut self, id: ListenerId);
}

/// Scoped registration of the navigation listener pair.
pub struct NavigationBinding<R: ListenerRegistry> {
    registry: Rc<RefCell<R>>,
    key: ListenerId,
    pointer: ListenerId,
}

impl<R: ListenerRegistry> NavigationBinding<R> {
    /// Identifiers of the key and pointer listeners.
    pub fn listener_ids(&self) -> (ListenerId, ListenerId) {
        (self.key, self.pointer)
    }
}

impl<R: ListenerRegistry> Drop for NavigationBinding<R> {
    fn drop(&mut self) {
        match self.registry.try_borrow_mut() {
            Ok(mut r) => {
                r.remove(self.key);
                r.remove(self.pointer);
            }
            Err(_) => tracing::warn!(
                key = self.key.0,
                pointer = self.pointer.0,
                "listener registry busy: navigation listeners not released"
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/navigation.rs"]
mod tests;
