use std::collections::BTreeSet;

use super::*;
use crate::config::BookConfig;
use crate::foundation::core::SheetIndex;

fn adapter() -> NavigationAdapter {
    NavigationAdapter::new(Rect::new(0.0, 0.0, 800.0, 600.0))
}

fn key(k: &str) -> InputEvent {
    InputEvent::Key {
        key: Key::from_dom(k),
        target: FocusTarget::Document,
    }
}

#[test]
fn forward_and_backward_keys() {
    let a = adapter();
    for k in ["ArrowRight", "ArrowDown", " ", "PageDown"] {
        assert_eq!(a.translate(&key(k)), Some(NavCommand::Next), "{k}");
    }
    for k in ["ArrowLeft", "ArrowUp", "PageUp"] {
        assert_eq!(a.translate(&key(k)), Some(NavCommand::Prev), "{k}");
    }
    assert_eq!(a.translate(&key("Home")), Some(NavCommand::First));
    assert_eq!(a.translate(&key("End")), Some(NavCommand::Last));
    assert_eq!(a.translate(&key("x")), None);
    assert_eq!(a.translate(&key("Enter")), None);
}

#[test]
fn text_input_focus_swallows_navigation_keys() {
    let ev = InputEvent::Key {
        key: Key::ArrowRight,
        target: FocusTarget::TextInput,
    };
    assert_eq!(adapter().translate(&ev), None);
}

#[test]
fn enter_activates_focused_click_zone() {
    let a = adapter();
    let left = InputEvent::Key {
        key: Key::Enter,
        target: FocusTarget::ClickZone(Side::Left),
    };
    let right = InputEvent::Key {
        key: Key::Enter,
        target: FocusTarget::ClickZone(Side::Right),
    };
    assert_eq!(a.translate(&left), Some(NavCommand::Prev));
    assert_eq!(a.translate(&right), Some(NavCommand::Next));
}

#[test]
fn pointer_halves_map_to_directions() {
    let a = adapter();
    let click = |x, y| InputEvent::Pointer {
        position: Point::new(x, y),
    };
    assert_eq!(a.translate(&click(100.0, 300.0)), Some(NavCommand::Prev));
    assert_eq!(a.translate(&click(700.0, 300.0)), Some(NavCommand::Next));
    assert_eq!(a.translate(&click(900.0, 300.0)), None);
}

#[test]
fn disabled_adapter_ignores_everything() {
    let a = NavigationAdapter {
        enabled: false,
        ..adapter()
    };
    assert_eq!(a.translate(&key("ArrowRight")), None);
}

#[test]
fn dispatch_drives_the_book() {
    let mut book = FlipAnimator::new(0..8, BookConfig::default()).unwrap();
    let a = adapter();

    assert_eq!(a.dispatch(&key("ArrowRight"), &mut book), Some(NavCommand::Next));
    assert!(book.is_animating());
    // Second key press during the flip is dropped by the animator.
    a.dispatch(&key("ArrowRight"), &mut book);
    book.tick(std::time::Duration::from_secs(1));
    assert_eq!(book.current_sheet(), SheetIndex(1));

    a.dispatch(&key("End"), &mut book);
    assert_eq!(book.current_sheet(), SheetIndex(3));
}

#[derive(Default)]
struct FakeWindow {
    next: u64,
    live: BTreeSet<u64>,
}

impl ListenerRegistry for FakeWindow {
    fn add(&mut self, _kind: ListenerKind) -> ListenerId {
        self.next += 1;
        self.live.insert(self.next);
        ListenerId(self.next)
    }

    fn remove(&mut self, id: ListenerId) {
        self.live.remove(&id.0);
    }
}

#[test]
fn binding_releases_both_listeners_on_drop() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    {
        let binding = NavigationAdapter::bind(Rc::clone(&window));
        let (k, p) = binding.listener_ids();
        assert_ne!(k, p);
        assert_eq!(window.borrow().live.len(), 2);
    }
    assert!(window.borrow().live.is_empty());
}

#[test]
fn dropping_binding_while_registry_is_borrowed_does_not_panic() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    let binding = NavigationAdapter::bind(Rc::clone(&window));
    {
        let held = window.borrow();
        drop(binding);
        assert_eq!(held.live.len(), 2);
    }
    assert_eq!(window.borrow().live.len(), 2);
}
