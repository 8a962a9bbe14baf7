// Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use labeler::config::{AppConfig, EditConfig, ViewConfig};
use labeler::state::{EventSource, FrameView, Renderer, SampleStore};
use labeler::{
    AnnotationStore, BBox, EditPolicy, Entity, Event, KeyCommand, Machine, Point, PointerButton,
    SessionError, Viewport,
};

pub fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

pub fn bbox(x1: i32, y1: i32, x2: i32, y2: i32) -> BBox {
    BBox::new(x1, y1, x2, y2)
}

/// Viewport framing a full image at scale 1.0, so display and image
/// coordinates coincide until a zoom happens.
pub fn unit_viewport(width: u32, height: u32) -> Viewport {
    let mut viewport = Viewport::new(ViewConfig::default());
    viewport.reset_to_full_image(width, height);
    viewport
}

pub fn machine(policy: EditPolicy) -> Machine {
    Machine::new(policy, EditConfig::default())
}

// Event shorthands
pub fn down(x: i32, y: i32) -> Event {
    Event::PointerDown {
        button: PointerButton::Left,
        pos: pt(x, y),
    }
}

pub fn up(x: i32, y: i32) -> Event {
    Event::PointerUp {
        button: PointerButton::Left,
        pos: pt(x, y),
    }
}

pub fn mv(x: i32, y: i32) -> Event {
    Event::PointerMove { pos: pt(x, y) }
}

pub fn right_down(x: i32, y: i32) -> Event {
    Event::PointerDown {
        button: PointerButton::Right,
        pos: pt(x, y),
    }
}

pub fn key(command: KeyCommand) -> Event {
    Event::Key(command)
}

/// Feed a sequence of events straight into a machine.
pub fn drive(
    machine: &mut Machine,
    viewport: &mut Viewport,
    store: &mut AnnotationStore,
    events: &[Event],
) {
    for event in events {
        machine.handle(*event, viewport, store);
    }
}

/// Scripted event source replaying a fixed sequence.
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

/// Renderer that only counts presented frames.
#[derive(Default)]
pub struct NullRenderer {
    pub frames: usize,
}

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &FrameView<'_>) {
        self.frames += 1;
    }
}

/// In-memory sample store for session tests. Every sample shares the same
/// image dimensions.
pub struct MemSampleStore {
    pub dims: (u32, u32),
    pub annotations: RefCell<Vec<Vec<Entity>>>,
    pub snapshot: Cell<Option<usize>>,
    pub saves: Cell<usize>,
}

impl MemSampleStore {
    pub fn new(sample_count: usize, dims: (u32, u32)) -> Self {
        Self {
            dims,
            annotations: RefCell::new(vec![Vec::new(); sample_count]),
            snapshot: Cell::new(None),
            saves: Cell::new(0),
        }
    }

    pub fn with_annotations(annotations: Vec<Vec<Entity>>, dims: (u32, u32)) -> Self {
        Self {
            dims,
            annotations: RefCell::new(annotations),
            snapshot: Cell::new(None),
            saves: Cell::new(0),
        }
    }
}

impl SampleStore for MemSampleStore {
    fn len(&self) -> usize {
        self.annotations.borrow().len()
    }

    fn load_annotations(&self, sample_id: usize) -> Result<Vec<Entity>, SessionError> {
        Ok(self.annotations.borrow()[sample_id].clone())
    }

    fn save_annotations(&self, sample_id: usize, entities: &[Entity]) -> Result<(), SessionError> {
        self.annotations.borrow_mut()[sample_id] = entities.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn image_dimensions(&self, _sample_id: usize) -> Result<(u32, u32), SessionError> {
        Ok(self.dims)
    }

    fn load_snapshot(&self) -> Option<usize> {
        self.snapshot.get()
    }

    fn save_snapshot(&self, sample_id: usize) -> Result<(), SessionError> {
        self.snapshot.set(Some(sample_id));
        Ok(())
    }
}

pub fn default_config() -> AppConfig {
    AppConfig::default()
}
