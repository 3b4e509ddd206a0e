use crate::foundation::core::{Dimensions, PageIndex, SheetIndex};

/// Direction of a single flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipDirection {
    /// Right stack to left stack (next page).
    Forward,
    /// Left stack back to right stack (previous page).
    Backward,
}

/// Lifecycle notifications emitted by the flip animator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BookEvent {
    /// A flip animation began.
    FlipStarted {
        /// Sheet being turned.
        sheet: SheetIndex,
        /// Turn direction.
        direction: FlipDirection,
    },
    /// A flip animation finished and the book state was updated.
    FlipCompleted {
        /// Sheet that was turned.
        sheet: SheetIndex,
        /// Turn direction.
        direction: FlipDirection,
    },
    /// The visible page changed after a completed flip or a jump.
    PageChanged {
        /// New page index (`current_sheet * 2`).
        page: PageIndex,
    },
    /// The cover was turned: the book went from closed to open.
    BookOpened,
    /// The book went back to showing its cover.
    BookClosed,
    /// Page geometry was recomputed.
    LayoutChanged {
        /// New page dimensions.
        dimensions: Dimensions,
    },
}

/// Receiver of [`BookEvent`]s.
pub trait BookObserver {
    /// Called synchronously, in emission order.
    fn on_event(&mut self, event: &BookEvent);
}

impl<F> BookObserver for F
where
    F: FnMut(&BookEvent),
{
    fn on_event(&mut self, event: &BookEvent) {
        self(event)
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Ordered set of subscribed observers.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn BookObserver>)>,
}

impl ObserverList {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn BookObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(other, _)| *other != id);
        self.entries.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: &BookEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/events.rs"]
mod tests;
