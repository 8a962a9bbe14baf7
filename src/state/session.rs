//! Session controller: sample navigation, persistence, and the event loop.
//!
//! The session owns the annotation store, the viewport, and the machine
//! for the active sample, and talks to the outside world through three
//! narrow traits: [`SampleStore`] for persistence, [`EventSource`] for
//! input, and [`Renderer`] for output.

use crate::config::AppConfig;
use crate::geometry::{BBox, Point};
use crate::interact::{EditPolicy, Event, KeyCommand, Machine, Phase};
use crate::store::{AnnotationStore, Entity, EntityId};
use crate::viewport::Viewport;

use super::SessionError;

/// Persistence collaborator. Samples are addressed by their index in the
/// fixed ordered list.
pub trait SampleStore {
    fn len(&self) -> usize;
    /// Load a sample's annotations. A missing file is an empty set, not an
    /// error.
    fn load_annotations(&self, sample_id: usize) -> Result<Vec<Entity>, SessionError>;
    fn save_annotations(&self, sample_id: usize, entities: &[Entity]) -> Result<(), SessionError>;
    /// Pixel dimensions of the sample's image. A missing or unreadable
    /// image is fatal: without it there is no basis for editing.
    fn image_dimensions(&self, sample_id: usize) -> Result<(u32, u32), SessionError>;
    fn load_snapshot(&self) -> Option<usize>;
    fn save_snapshot(&self, sample_id: usize) -> Result<(), SessionError>;
}

/// Input collaborator: one event per poll, `None` once the source closes.
pub trait EventSource {
    fn next_event(&mut self) -> Option<Event>;
}

/// Rendering collaborator: receives a read-only frame view every loop
/// turn.
pub trait Renderer {
    fn present(&mut self, frame: &FrameView<'_>);
}

/// Read-only state handed to the renderer for overlay drawing.
pub struct FrameView<'a> {
    pub viewport: &'a Viewport,
    /// Entities in z-order.
    pub entities: &'a [(EntityId, Entity)],
    /// Hover/click selection, drawn with heavier stroke weight.
    pub selected: Option<EntityId>,
    /// Display-space rubber band of the in-progress placement or zoom
    /// drag. Not renderable until `valid()`.
    pub pending: Option<BBox>,
    /// Display-space crosshair position.
    pub cursor: Option<Point>,
    pub phase: Phase,
    /// `(current, total)`, current is 1-based.
    pub progress: (usize, usize),
}

/// One interactive labeling session over a sample store.
pub struct Session<S: SampleStore> {
    samples: S,
    sample_id: usize,
    image_size: (u32, u32),
    annotations: AnnotationStore,
    viewport: Viewport,
    machine: Machine,
    quit: bool,
}

impl<S: SampleStore> Session<S> {
    /// Open a session, resuming from the progress snapshot when it points
    /// at a valid sample.
    pub fn open(samples: S, policy: EditPolicy, config: &AppConfig) -> Result<Self, SessionError> {
        if samples.len() == 0 {
            return Err(SessionError::NoSamples);
        }
        let sample_id = samples
            .load_snapshot()
            .filter(|id| *id < samples.len())
            .unwrap_or(0);
        let mut session = Self {
            samples,
            sample_id,
            image_size: (0, 0),
            annotations: AnnotationStore::new(),
            viewport: Viewport::new(config.view.clone()),
            machine: Machine::new(policy, config.edit.clone()),
            quit: false,
        };
        session.load_current()?;
        Ok(session)
    }

    pub fn sample_id(&self) -> usize {
        self.sample_id
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Load the active sample: its annotations (or an empty set), its
    /// image dimensions, a freshly fitted viewport. Transient edit state
    /// never survives a sample change.
    fn load_current(&mut self) -> Result<(), SessionError> {
        let entities = self.samples.load_annotations(self.sample_id)?;
        let (width, height) = self.samples.image_dimensions(self.sample_id)?;
        self.image_size = (width, height);
        self.annotations.replace_all(entities);
        self.viewport.reset_to_full_image(width, height);
        self.machine.reset();
        Ok(())
    }

    /// Persist the active sample's annotations and the progress snapshot.
    pub fn save_current(&mut self) -> Result<(), SessionError> {
        self.samples
            .save_annotations(self.sample_id, &self.annotations.to_vec())?;
        self.samples.save_snapshot(self.sample_id)
    }

    /// Step forward or backward through the sample list. Past either end
    /// is a no-op with a diagnostic notice; otherwise the current sample
    /// is saved before the target is loaded, with no interleaving.
    pub fn move_by(&mut self, step: isize) -> Result<(), SessionError> {
        let target = self.sample_id as isize + step;
        if target < 0 {
            log::info!("Reached the beginning of the sample list.");
        } else if target >= self.samples.len() as isize {
            log::info!("Reached the end of the sample list.");
        } else {
            self.save_current()?;
            self.sample_id = target as usize;
            self.load_current()?;
        }
        Ok(())
    }

    /// Route one event: session-level commands here, everything else to
    /// the machine.
    pub fn handle_event(&mut self, event: Event) -> Result<(), SessionError> {
        if let Event::Key(command) = event {
            log::debug!("Key command: {command:?}");
        }
        match event {
            Event::Key(KeyCommand::NextSample) => self.move_by(1)?,
            Event::Key(KeyCommand::PrevSample) => self.move_by(-1)?,
            Event::Key(KeyCommand::Save) => self.save_current()?,
            Event::Key(KeyCommand::FitView) => {
                let (width, height) = self.image_size;
                self.viewport.reset_to_full_image(width, height);
            }
            Event::Key(KeyCommand::Quit) => {
                self.save_current()?;
                self.quit = true;
            }
            other => self
                .machine
                .handle(other, &mut self.viewport, &mut self.annotations),
        }
        Ok(())
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            viewport: &self.viewport,
            entities: self.annotations.entries(),
            selected: self.annotations.selected(),
            pending: self.machine.pending(),
            cursor: self.machine.cursor(),
            phase: self.machine.phase(&self.annotations),
            progress: (self.sample_id + 1, self.samples.len()),
        }
    }

    /// The cooperative loop: present a frame, poll one event, dispatch
    /// synchronously. Returns when the source closes or quit is
    /// requested, saving on the way out.
    pub fn run<E: EventSource, R: Renderer>(
        &mut self,
        events: &mut E,
        renderer: &mut R,
    ) -> Result<(), SessionError> {
        loop {
            renderer.present(&self.frame());
            let Some(event) = events.next_event() else {
                break;
            };
            self.handle_event(event)?;
            if self.quit {
                return Ok(());
            }
        }
        self.save_current()
    }
}
