//! Point-editing discipline.
//!
//! A click adds a point unless an existing point sits within the hit
//! threshold, in which case that point becomes the selection instead of a
//! near-duplicate. Points are immovable once placed: dragging never moves
//! them, it zooms the viewport. Pointer moves with no button held track
//! the nearest point as the hover selection.

use crate::geometry::Point;
use crate::store::{AnnotationStore, Entity};
use crate::viewport::Viewport;

use super::{Event, Machine, PointerButton};

impl Machine {
    pub(super) fn handle_point_event(
        &mut self,
        event: Event,
        viewport: &mut Viewport,
        store: &mut AnnotationStore,
    ) {
        match event {
            Event::PointerDown {
                button: PointerButton::Left,
                pos,
            } => {
                self.button_down = true;
                self.start_pending(pos);
            }
            Event::PointerUp {
                button: PointerButton::Left,
                pos,
            } => self.point_up(pos, viewport, store),
            Event::PointerMove { pos } => self.point_move(pos, viewport, store),
            _ => {}
        }
    }

    fn point_up(&mut self, pos: Point, viewport: &mut Viewport, store: &mut AnnotationStore) {
        self.button_down = false;
        let Some(pending) = self.pending else { return };
        if pos == Self::pending_anchor(&pending) {
            // A click: select a nearby existing point, or add a new one.
            self.pending = None;
            let image_pos = viewport.to_image(pos);
            match store.nearest_point_within(image_pos, self.config.point_hit_dist_sq) {
                Some(id) => store.select(Some(id)),
                None => {
                    store.add(Entity::Point(image_pos));
                }
            }
        } else {
            self.finish_zoom_drag(pos, viewport);
        }
    }

    fn point_move(&mut self, pos: Point, viewport: &Viewport, store: &mut AnnotationStore) {
        self.cursor = Some(pos);
        if self.button_down {
            self.update_pending(pos);
        } else {
            self.pending = None;
            let image_pos = viewport.to_image(pos);
            let hovered = store.nearest_point_within(image_pos, self.config.point_hit_dist_sq);
            store.select(hovered);
        }
    }
}
