//! Global listeners held while the panel is open.

/// Global events the open panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayEvent {
    /// Window scroll, capture phase so ancestor scrolls are seen too
    Scroll,
    Resize,
    /// Document pointer-down, for outside-interaction detection
    PointerDown,
}

impl OverlayEvent {
    pub const ALL: [OverlayEvent; 3] = [
        OverlayEvent::Scroll,
        OverlayEvent::Resize,
        OverlayEvent::PointerDown,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            OverlayEvent::Scroll => "scroll",
            OverlayEvent::Resize => "resize",
            OverlayEvent::PointerDown => "pointerdown",
        }
    }

    pub fn capture(self) -> bool {
        matches!(self, OverlayEvent::Scroll)
    }
}

/// Attaches global listeners.
///
/// Dropping a subscription detaches its listener.
pub trait ListenerHost {
    type Subscription;

    /// `None` when the event target is unavailable.
    fn subscribe(&self, event: OverlayEvent) -> Option<Self::Subscription>;
}

/// The set of subscriptions owned by one open panel.
///
/// `acquire` is idempotent while active; `release` drops everything that the
/// matching `acquire` attached.
pub struct OverlayListeners<S> {
    subscriptions: Vec<S>,
    active: bool,
}

impl<S> OverlayListeners<S> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn acquire<H>(&mut self, host: &H)
    where
        H: ListenerHost<Subscription = S>,
    {
        if self.active {
            return;
        }
        for event in OverlayEvent::ALL {
            match host.subscribe(event) {
                Some(sub) => self.subscriptions.push(sub),
                None => log::warn!("select: could not attach '{}' listener", event.dom_name()),
            }
        }
        self.active = true;
        log::debug!("select: {} overlay listeners attached", self.subscriptions.len());
    }

    pub fn release(&mut self) {
        if !self.active {
            return;
        }
        let count = self.subscriptions.len();
        self.subscriptions.clear();
        self.active = false;
        log::debug!("select: {} overlay listeners detached", count);
    }
}

impl<S> Default for OverlayListeners<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counting host used by the select tests
#[cfg(test)]
pub(crate) mod counting {
    use super::{ListenerHost, OverlayEvent};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct Counts {
        pub attached: HashMap<OverlayEvent, usize>,
        pub detached: HashMap<OverlayEvent, usize>,
    }

    impl Counts {
        pub fn total_attached(&self) -> usize {
            self.attached.values().sum()
        }

        pub fn total_detached(&self) -> usize {
            self.detached.values().sum()
        }

        pub fn live(&self) -> usize {
            self.total_attached() - self.total_detached()
        }
    }

    #[derive(Clone, Default)]
    pub struct CountingHost {
        pub counts: Rc<RefCell<Counts>>,
        /// Events whose target is "missing"
        pub unavailable: Vec<OverlayEvent>,
    }

    pub struct CountingSubscription {
        event: OverlayEvent,
        counts: Rc<RefCell<Counts>>,
    }

    impl Drop for CountingSubscription {
        fn drop(&mut self) {
            *self.counts.borrow_mut().detached.entry(self.event).or_default() += 1;
        }
    }

    impl ListenerHost for CountingHost {
        type Subscription = CountingSubscription;

        fn subscribe(&self, event: OverlayEvent) -> Option<CountingSubscription> {
            if self.unavailable.contains(&event) {
                return None;
            }
            *self.counts.borrow_mut().attached.entry(event).or_default() += 1;
            Some(CountingSubscription {
                event,
                counts: self.counts.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::counting::{CountingHost, CountingSubscription};
    use super::*;

    #[test]
    fn test_acquire_release_balanced() {
        let host = CountingHost::default();
        let mut listeners: OverlayListeners<CountingSubscription> = OverlayListeners::new();

        listeners.acquire(&host);
        assert!(listeners.is_active());
        assert_eq!(listeners.len(), 3);
        assert_eq!(host.counts.borrow().live(), 3);

        listeners.release();
        assert!(!listeners.is_active());
        assert_eq!(host.counts.borrow().live(), 0);
    }

    #[test]
    fn test_acquire_is_idempotent() {
        let host = CountingHost::default();
        let mut listeners = OverlayListeners::new();
        listeners.acquire(&host);
        listeners.acquire(&host);
        assert_eq!(host.counts.borrow().total_attached(), 3);
        listeners.release();
        listeners.release();
        assert_eq!(host.counts.borrow().total_detached(), 3);
    }

    #[test]
    fn test_drop_detaches() {
        let host = CountingHost::default();
        {
            let mut listeners = OverlayListeners::new();
            listeners.acquire(&host);
        }
        assert_eq!(host.counts.borrow().live(), 0);
    }

    #[test]
    fn test_missing_target_skipped() {
        let host = CountingHost {
            unavailable: vec![OverlayEvent::Resize],
            ..Default::default()
        };
        let mut listeners = OverlayListeners::new();
        listeners.acquire(&host);
        assert!(listeners.is_active());
        assert_eq!(listeners.len(), 2);
        listeners.release();
        assert_eq!(host.counts.borrow().live(), 0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(OverlayEvent::PointerDown.dom_name(), "pointerdown");
        assert!(OverlayEvent::Scroll.capture());
        assert!(!OverlayEvent::Resize.capture());
    }
}
