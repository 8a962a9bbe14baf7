//! Event-driven interaction.
//!
//! The machine consumes pointer, wheel, and key events and drives the
//! viewport and the annotation store. Pointer positions arrive in display
//! space; mapping into image space happens at the moment something is
//! committed. Dispatch is total over the event set: events matching no
//! rule are ignored, never an error.
//!
//! Click-vs-drag disambiguation is structural, not timing-based: a
//! press/release pair with numerically identical coordinates is a click;
//! any difference, however small, is a drag.

mod point;
mod region;

use crate::config::EditConfig;
use crate::geometry::{BBox, Point};
use crate::store::AnnotationStore;
use crate::viewport::{Viewport, ZoomDirection};

/// Pointer buttons the machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Discrete commands. Decoding raw key codes into these belongs to the
/// embedding shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    NextSample,
    PrevSample,
    Save,
    Delete,
    FitView,
    ClearAll,
    CancelPending,
    Quit,
}

/// Input events consumed by the session and the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerDown { button: PointerButton, pos: Point },
    PointerUp { button: PointerButton, pos: Point },
    PointerMove { pos: Point },
    Wheel(ZoomDirection),
    Key(KeyCommand),
}

/// Which editing discipline the machine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPolicy {
    Points,
    Regions,
}

/// Observable machine phase, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PlacingFirstCorner,
    SelectingHover,
    PointerDown,
}

/// The interaction state machine. Memoryless across samples: [`reset`]
/// discards all transient state and runs on every sample change.
///
/// [`reset`]: Machine::reset
#[derive(Debug)]
pub struct Machine {
    policy: EditPolicy,
    config: EditConfig,
    /// Display-space rectangle under construction: the placement rubber
    /// band in region mode, the zoom drag in both modes. Only the first
    /// corner is set until the pointer moves.
    pending: Option<BBox>,
    /// True while the left button is held.
    button_down: bool,
    /// Last pointer position, for the crosshair overlay.
    cursor: Option<Point>,
}

impl Machine {
    pub fn new(policy: EditPolicy, config: EditConfig) -> Self {
        Self {
            policy,
            config,
            pending: None,
            button_down: false,
            cursor: None,
        }
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// Pending display-space rectangle for the rubber-band overlay. Not
    /// renderable until its second corner is set (`valid()`).
    pub fn pending(&self) -> Option<BBox> {
        self.pending
    }

    /// Display-space cursor position for the crosshair overlay.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn phase(&self, store: &AnnotationStore) -> Phase {
        if self.button_down {
            Phase::PointerDown
        } else if self.pending.is_some() {
            Phase::PlacingFirstCorner
        } else if store.selected().is_some() {
            Phase::SelectingHover
        } else {
            Phase::Idle
        }
    }

    /// Discard all transient state. Runs on every sample change.
    pub fn reset(&mut self) {
        self.pending = None;
        self.button_down = false;
        self.cursor = None;
    }

    /// Dispatch one event against the viewport and the store.
    pub fn handle(&mut self, event: Event, viewport: &mut Viewport, store: &mut AnnotationStore) {
        match event {
            Event::Wheel(direction) => viewport.zoom_by_wheel(direction),
            Event::PointerDown {
                button: PointerButton::Right,
                ..
            } => self.delete_selected(store),
            Event::Key(KeyCommand::Delete) => self.delete_selected(store),
            Event::Key(KeyCommand::ClearAll) => store.clear(),
            Event::Key(KeyCommand::CancelPending) => self.pending = None,
            Event::Key(_) => {}
            _ => match self.policy {
                EditPolicy::Points => self.handle_point_event(event, viewport, store),
                EditPolicy::Regions => self.handle_region_event(event, viewport, store),
            },
        }
    }

    /// Remove the current selection and drop pending/cursor state.
    fn delete_selected(&mut self, store: &mut AnnotationStore) {
        if let Some(id) = store.selected() {
            store.remove(id);
        }
        self.pending = None;
        self.cursor = None;
    }

    /// Anchor corner of the pending rectangle.
    fn pending_anchor(pending: &BBox) -> Point {
        Point::new(pending.x1, pending.y1)
    }

    /// Begin a pending rectangle: only the first corner is known, the
    /// second stays unset until the pointer moves.
    fn start_pending(&mut self, pos: Point) {
        self.pending = Some(BBox::new(pos.x, pos.y, -1, -1));
    }

    /// Track the moving pointer as the pending second corner.
    fn update_pending(&mut self, pos: Point) {
        if let Some(pending) = &mut self.pending {
            pending.x2 = pos.x;
            pending.y2 = pos.y;
        }
    }

    /// Close the pending rectangle at `pos` and request a zoom. The area
    /// gate lives in [`Viewport::zoom_to_region`], so an undersized drag
    /// is discarded there with no effect.
    fn finish_zoom_drag(&mut self, pos: Point, viewport: &mut Viewport) {
        if let Some(pending) = self.pending.take() {
            let rect = BBox::new(pending.x1, pending.y1, pos.x, pos.y);
            let mapped = viewport.rect_to_image(rect);
            viewport.zoom_to_region(mapped);
        }
    }
}
