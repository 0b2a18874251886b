//! Keyboard navigation over a grid of cards.
//!
//! The controller maps arrow keys to a new selection index, Enter to an
//! activation of the current cell, and Escape to an exit signal. It never owns
//! the selection: it asks the consumer to change it through `on_select_index`
//! and expects fresh props, including the new cell handle, through
//! [`GridNavigationController::update`] on the next render.
//!
//! Focus follows the selection. After a move the controller remembers the
//! target index and focuses the handle the consumer supplies for that index.
//! The handle captured when the key arrived belongs to the old cell and is
//! never focused on a move.

use crate::element::ElementRef;
use crate::keys;
use crate::source::{KeyEventSource, KeyListener, ListenerId};
use cardgrid_core::{GridError, GridLayout, GridResult, NavKey};
use crossterm::event::{KeyEvent, KeyEventKind};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SelectCallback = Rc<dyn Fn(usize)>;
pub type ExitCallback = Rc<dyn Fn()>;

/// What the consumer hands the controller on every render.
#[derive(Clone)]
pub struct GridNavProps {
    pub item_count: usize,
    pub column_count: usize,
    pub current_index: usize,
    pub current_element: Option<ElementRef>,
    pub on_select_index: SelectCallback,
    pub on_exit: ExitCallback,
}

impl GridNavProps {
    pub fn new(
        item_count: usize,
        column_count: usize,
        on_select_index: impl Fn(usize) + 'static,
        on_exit: impl Fn() + 'static,
    ) -> Self {
        Self {
            item_count,
            column_count,
            current_index: 0,
            current_element: None,
            on_select_index: Rc::new(on_select_index),
            on_exit: Rc::new(on_exit),
        }
    }

    pub fn with_current_index(mut self, index: usize) -> Self {
        self.current_index = index;
        self
    }

    pub fn with_element(mut self, element: ElementRef) -> Self {
        self.current_element = Some(element);
        self
    }

    fn layout(&self) -> GridResult<GridLayout> {
        let layout = GridLayout::new(self.item_count, self.column_count)?;
        if !layout.is_empty() && !layout.contains(self.current_index) {
            return Err(GridError::IndexOutOfRange {
                index: self.current_index,
                len: self.item_count,
            });
        }
        Ok(layout)
    }
}

/// Result of handling a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Selection change was requested.
    Moved { from: usize, to: usize },
    /// A navigation key that did not change the index (empty or single-item grid).
    Unchanged,
    Exited,
    Activated,
    /// Enter with no handle, or a handle whose cell is gone.
    ActivationSkipped,
    /// Not a navigation key, or a key release.
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

struct NavState {
    props: GridNavProps,
    layout: GridLayout,
    pending_focus: Option<usize>,
}

enum Effect {
    Select {
        callback: SelectCallback,
        from: usize,
        to: usize,
    },
    Exit(ExitCallback),
    Activate(Option<ElementRef>),
    Unchanged,
}

pub struct GridNavigationController {
    source: Rc<dyn KeyEventSource>,
    state: Rc<RefCell<NavState>>,
    listener: Option<ListenerId>,
}

impl GridNavigationController {
    /// Create a controller. It does not listen for keys until [`mount`](Self::mount).
    pub fn new(source: Rc<dyn KeyEventSource>, props: GridNavProps) -> GridResult<Self> {
        let layout = props.layout()?;
        Ok(Self {
            source,
            state: Rc::new(RefCell::new(NavState {
                props,
                layout,
                pending_focus: None,
            })),
            listener: None,
        })
    }

    /// Register the key listener. Mounting twice keeps a single listener.
    pub fn mount(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let state: Weak<RefCell<NavState>> = Rc::downgrade(&self.state);
        let listener: KeyListener = Rc::new(move |key: &KeyEvent| match state.upgrade() {
            Some(state) => dispatch(&state, key).is_consumed(),
            None => false,
        });
        let id = self.source.subscribe(listener);
        tracing::debug!(?id, "grid navigation mounted");
        self.listener = Some(id);
    }

    /// Remove the listener registered by [`mount`](Self::mount), if any.
    pub fn unmount(&mut self) {
        if let Some(id) = self.listener.take() {
            if !self.source.unsubscribe(id) {
                tracing::warn!(?id, "grid navigation listener was already removed");
            }
            tracing::debug!(?id, "grid navigation unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Supply fresh props for the current render.
    ///
    /// Invalid props are rejected and the previous props stay in effect.
    pub fn update(&self, props: GridNavProps) -> GridResult<()> {
        let layout = props.layout()?;
        let focus_target = {
            let mut state = self.state.borrow_mut();
            state.layout = layout;
            state.props = props;
            resolve_pending_focus(&mut state)
        };
        if let Some(element) = focus_target {
            element.focus();
        }
        Ok(())
    }

    /// Handle a key directly, as the mounted listener does.
    pub fn handle_key(&self, key: &KeyEvent) -> KeyOutcome {
        dispatch(&self.state, key)
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().props.current_index
    }

    pub fn layout(&self) -> GridLayout {
        self.state.borrow().layout
    }

    /// Index still waiting for its handle to be focused.
    pub fn pending_focus(&self) -> Option<usize> {
        self.state.borrow().pending_focus
    }
}

impl Drop for GridNavigationController {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Take the element to focus if the consumer has rendered the pending target.
fn resolve_pending_focus(state: &mut NavState) -> Option<ElementRef> {
    let target = state.pending_focus?;
    if state.props.current_index != target || !state.layout.contains(target) {
        state.pending_focus = None;
        return None;
    }
    match &state.props.current_element {
        Some(element) if element.is_mounted() => {
            state.pending_focus = None;
            Some(Rc::clone(element))
        }
        Some(_) => {
            tracing::warn!(index = target, "stale element handle, focus deferred");
            None
        }
        None => None,
    }
}

fn dispatch(state: &RefCell<NavState>, key: &KeyEvent) -> KeyOutcome {
    // Presses and repeats only, a release belongs to a key already handled.
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Ignored;
    }
    let Some(nav) = keys::nav_key(key) else {
        return KeyOutcome::Ignored;
    };

    // Callbacks run after the borrow is released so they can call `update`.
    let effect = {
        let mut state = state.borrow_mut();
        let current = state.props.current_index;
        match nav {
            NavKey::Cancel => Effect::Exit(Rc::clone(&state.props.on_exit)),
            NavKey::Activate => Effect::Activate(state.props.current_element.clone()),
            direction => match state.layout.next_index(current, direction) {
                Some(to) if to != current => {
                    state.pending_focus = Some(to);
                    Effect::Select {
                        callback: Rc::clone(&state.props.on_select_index),
                        from: current,
                        to,
                    }
                }
                _ => Effect::Unchanged,
            },
        }
    };

    match effect {
        Effect::Select { callback, from, to } => {
            tracing::debug!(from, to, "grid selection moved");
            callback(to);
            KeyOutcome::Moved { from, to }
        }
        Effect::Exit(callback) => {
            tracing::debug!("grid navigation exit requested");
            callback();
            KeyOutcome::Exited
        }
        Effect::Activate(Some(element)) if element.is_mounted() => {
            element.activate();
            KeyOutcome::Activated
        }
        Effect::Activate(Some(_)) => {
            tracing::warn!("stale element handle, activation skipped");
            KeyOutcome::ActivationSkipped
        }
        Effect::Activate(None) => KeyOutcome::ActivationSkipped,
        Effect::Unchanged => KeyOutcome::Unchanged,
    }
}
