use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn observers_receive_events_in_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut list = ObserverList::default();

    let a = Rc::clone(&log);
    list.subscribe(Box::new(move |e: &BookEvent| a.borrow_mut().push(("a", e.clone()))));
    let b = Rc::clone(&log);
    list.subscribe(Box::new(move |e: &BookEvent| b.borrow_mut().push(("b", e.clone()))));

    list.emit(&BookEvent::BookOpened);

    assert_eq!(
        *log.borrow(),
        vec![("a", BookEvent::BookOpened), ("b", BookEvent::BookOpened)]
    );
}

#[test]
fn unsubscribe_stops_delivery() {
    let hits = Rc::new(RefCell::new(0u32));
    let mut list = ObserverList::default();

    let h = Rc::clone(&hits);
    let id = list.subscribe(Box::new(move |_: &BookEvent| *h.borrow_mut() += 1));
    list.emit(&BookEvent::BookClosed);
    assert!(list.unsubscribe(id));
    assert!(!list.unsubscribe(id));
    list.emit(&BookEvent::BookClosed);

    assert_eq!(*hits.borrow(), 1);
    assert_eq!(list.len(), 0);
}

#[test]
fn events_serialize_with_snake_case_tags() {
    let json = serde_json::to_value(BookEvent::FlipStarted {
        sheet: SheetIndex(2),
        direction: FlipDirection::Forward,
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "event": "flip_started", "sheet": 2, "direction": "forward" })
    );
}
