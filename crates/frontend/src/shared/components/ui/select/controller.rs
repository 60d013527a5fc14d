//! Open/close state machine of one select instance.
//!
//! DOM-free: trigger geometry comes in as [`TriggerBounds`], pointer targets as
//! [`PointerTarget`], and listeners are attached through a [`ListenerHost`].

use super::anchor::{track, AnchorRect, TriggerBounds};
use super::filter::filter_options;
use super::listeners::{ListenerHost, OverlayListeners};
use super::outside::PointerTarget;
use super::registry::{find_by_value, SelectItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    Closed,
    Open,
}

pub struct SelectController<S> {
    state: SelectState,
    query: String,
    anchor: Option<AnchorRect>,
    listeners: OverlayListeners<S>,
}

impl<S> SelectController<S> {
    pub fn new() -> Self {
        Self {
            state: SelectState::Closed,
            query: String::new(),
            anchor: None,
            listeners: OverlayListeners::new(),
        }
    }

    pub fn state(&self) -> SelectState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SelectState::Open
    }

    /// Search text; always empty while closed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn anchor(&self) -> Option<AnchorRect> {
        self.anchor
    }

    pub fn has_listeners(&self) -> bool {
        self.listeners.is_active()
    }

    /// Trigger click. The only way into `Open`.
    pub fn toggle<H>(&mut self, disabled: bool, trigger: Option<TriggerBounds>, host: &H) -> SelectState
    where
        H: ListenerHost<Subscription = S>,
    {
        if disabled {
            return self.state;
        }
        match self.state {
            SelectState::Closed => self.open(trigger, host),
            SelectState::Open => self.close(),
        }
        self.state
    }

    fn open<H>(&mut self, trigger: Option<TriggerBounds>, host: &H)
    where
        H: ListenerHost<Subscription = S>,
    {
        self.anchor = track(self.anchor, trigger);
        self.listeners.acquire(host);
        self.state = SelectState::Open;
        log::debug!("select: open");
    }

    /// Closes the panel, clears the query and detaches listeners.
    pub fn close(&mut self) {
        if self.state == SelectState::Closed {
            return;
        }
        self.state = SelectState::Closed;
        self.query.clear();
        self.listeners.release();
        log::debug!("select: closed");
    }

    /// Ignored while closed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.is_open() {
            self.query = query.into();
        }
    }

    /// Scroll/resize while open.
    pub fn reposition(&mut self, trigger: Option<TriggerBounds>) {
        if self.is_open() {
            self.anchor = track(self.anchor, trigger);
        }
    }

    /// Pointer-down while open; returns `true` when it closed the panel.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.is_open() && target.is_outside() {
            self.close();
            return true;
        }
        false
    }

    /// Disabling an open control closes it.
    pub fn sync_disabled(&mut self, disabled: bool) {
        if disabled {
            self.close();
        }
    }

    /// Row click.
    ///
    /// Emits `value` through `on_value_change` exactly once and closes, but
    /// only when the panel is open and `value` names an enabled option
    /// currently shown. Returns whether a selection happened.
    pub fn choose<F>(&mut self, options: &[SelectItem], value: &str, on_value_change: F) -> bool
    where
        F: FnOnce(String),
    {
        if !self.is_open() {
            return false;
        }
        let visible = filter_options(options, &self.query);
        let Some(item) = visible.into_iter().find(|item| item.value == value) else {
            return false;
        };
        if item.disabled {
            return false;
        }
        on_value_change(item.value.clone());
        self.close();
        true
    }

    /// Options shown in the panel for the current query
    pub fn visible<'a>(&self, options: &'a [SelectItem]) -> Vec<&'a SelectItem> {
        filter_options(options, &self.query)
    }
}

impl<S> Default for SelectController<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Option matching the committed value, if it is still in the list
pub fn selected_item<'a>(options: &'a [SelectItem], value: Option<&str>) -> Option<&'a SelectItem> {
    value.and_then(|v| find_by_value(options, v))
}
