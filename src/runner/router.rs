//! [`EventRouter`]: turns raw key/mouse events into routing decisions
//! against the element list registered during the most recent frame.
//!
//! The router decides *where* an event should go, not what happens when
//! it gets there — dispatching to an application's own widget tree is
//! left to the caller, which is what keeps this crate free of a
//! callback-registry singleton.

use crate::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::geometry::{Position, Rect};

use super::focus::FocusManager;

/// An in-progress left-button drag: which element it started on, where
/// the press and most recent positions were, and the delta callback to
/// drive as the pointer moves.
pub struct DragState {
    pub origin_id: String,
    pub press_position: Position,
    pub last_position: Position,
    drag_handler: Box<dyn FnMut(Position, Position)>,
}

impl std::fmt::Debug for DragState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragState")
            .field("origin_id", &self.origin_id)
            .field("press_position", &self.press_position)
            .field("last_position", &self.last_position)
            .finish_non_exhaustive()
    }
}

impl DragState {
    pub fn new(
        origin_id: impl Into<String>,
        press_position: Position,
        drag_handler: impl FnMut(Position, Position) + 'static,
    ) -> Self {
        Self {
            origin_id: origin_id.into(),
            press_position,
            last_position: press_position,
            drag_handler: Box::new(drag_handler),
        }
    }

    fn notify(&mut self, position: Position) {
        self.last_position = position;
        (self.drag_handler)(self.press_position, position);
    }
}

/// What a key event should do, per the rules in [`EventRouter::route_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    FocusNext,
    FocusPrevious,
    DragCancelled { origin_id: String },
    FocusCleared,
    /// Try the focused element first; if it doesn't claim the event,
    /// walk the rest in registration order.
    Dispatch { primary: Option<String>, fallback_order: Vec<String> },
    Unhandled,
}

/// What a mouse event should do, per the rules in
/// [`EventRouter::route_mouse`].
#[derive(Debug, Clone, PartialEq)]
pub enum MouseRoute {
    Dragging { origin_id: String },
    DragEnded { origin_id: String },
    Pressed { id: String },
    FocusCleared,
    Hover { id: String },
    Unhandled,
}

/// Routes key and mouse events against the elements registered for the
/// current frame, in top-most-first hit-test order.
#[derive(Default)]
pub struct EventRouter {
    elements: Vec<(String, Rect)>,
    drag: Option<DragState>,
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("elements", &self.elements)
            .field("dragging", &self.drag.is_some())
            .finish()
    }
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hit-testable element list for the current frame, in
    /// registration (bottom-most-first) order.
    pub fn set_elements(&mut self, elements: Vec<(String, Rect)>) {
        self.elements = elements;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn hit_test(&self, position: Position) -> Option<&str> {
        self.elements.iter().rev().find(|(_, rect)| rect.contains(position)).map(|(id, _)| id.as_str())
    }

    /// Tab / Shift+Tab advance or retreat focus; Escape cancels an
    /// active drag, else clears focus; any other key dispatches to the
    /// focused element first, then falls back to the rest in
    /// registration order.
    pub fn route_key(&mut self, event: KeyEvent, focus: &FocusManager) -> KeyRoute {
        if event.is_focus_next() {
            return KeyRoute::FocusNext;
        }
        if event.is_focus_previous() {
            return KeyRoute::FocusPrevious;
        }
        if event.is_escape() {
            if let Some(drag) = self.drag.take() {
                return KeyRoute::DragCancelled { origin_id: drag.origin_id };
            }
            if focus.focused().is_some() {
                return KeyRoute::FocusCleared;
            }
            return KeyRoute::Unhandled;
        }

        let primary = focus.focused().map(str::to_owned);
        let fallback_order = self
            .elements
            .iter()
            .map(|(id, _)| id.clone())
            .filter(|id| Some(id) != primary.as_ref())
            .collect();
        KeyRoute::Dispatch { primary, fallback_order }
    }

    /// Start tracking a drag originating from a left-button press on
    /// `id`, to be driven by `drag_handler(press_position, current_position)`
    /// on every subsequent move until release or an [`KeyRoute::DragCancelled`].
    pub fn start_drag(
        &mut self,
        id: impl Into<String>,
        press_position: Position,
        drag_handler: impl FnMut(Position, Position) + 'static,
    ) {
        self.drag = Some(DragState::new(id, press_position, drag_handler));
    }

    /// While a drag is active, every mouse event drives it; release ends
    /// it. Otherwise, hit-test top-most first: a left press sets focus
    /// and is reported as `Pressed` (the caller starts the drag via
    /// [`Self::start_drag`] if it wants one), a press or hover with no
    /// hit clears focus, and hover/scroll with a hit reports it without
    /// touching focus.
    pub fn route_mouse(&mut self, event: MouseEvent, focus: &mut FocusManager) -> MouseRoute {
        if let Some(drag) = &mut self.drag {
            let origin_id = drag.origin_id.clone();
            if event.is_release() {
                self.drag = None;
                return MouseRoute::DragEnded { origin_id };
            }
            drag.notify(event.position);
            return MouseRoute::Dragging { origin_id };
        }

        let hit = self.hit_test(event.position).map(str::to_owned);
        match (&event.kind, &hit) {
            (MouseEventKind::Press(MouseButton::Left), Some(id)) => {
                focus.set_focus(id.clone());
                MouseRoute::Pressed { id: id.clone() }
            }
            (MouseEventKind::Press(MouseButton::Left), None) => {
                focus.clear_focus();
                MouseRoute::FocusCleared
            }
            (MouseEventKind::Press(_), Some(id)) => MouseRoute::Pressed { id: id.clone() },
            (_, Some(id)) => MouseRoute::Hover { id: id.clone() },
            (_, None) => MouseRoute::Unhandled,
        }
    }
}
