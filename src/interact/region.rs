//! Region-editing discipline.
//!
//! Regions are placed with a two-click protocol: the first click anchors a
//! corner, pointer moves stretch the rubber band, the second click commits
//! if the mapped area clears the minimum. A press released away from its
//! anchor is a viewport zoom drag instead. While nothing is being placed,
//! pointer moves hover-select the region under the cursor.

use crate::geometry::{BBox, Point};
use crate::store::{AnnotationStore, Entity};
use crate::viewport::Viewport;

use super::{Event, Machine, PointerButton};

impl Machine {
    pub(super) fn handle_region_event(
        &mut self,
        event: Event,
        viewport: &mut Viewport,
        store: &mut AnnotationStore,
    ) {
        match event {
            Event::PointerDown {
                button: PointerButton::Left,
                pos,
            } => self.region_down(pos, viewport, store),
            Event::PointerUp {
                button: PointerButton::Left,
                pos,
            } => self.region_up(pos, viewport),
            Event::PointerMove { pos } => self.region_move(pos, viewport, store),
            _ => {}
        }
    }

    fn region_down(&mut self, pos: Point, viewport: &mut Viewport, store: &mut AnnotationStore) {
        self.button_down = true;
        match self.pending.take() {
            None => self.start_pending(pos),
            Some(pending) => {
                // Second click: close the rectangle and commit it unless
                // the mapped area is below the minimum.
                let rect = BBox::new(pending.x1, pending.y1, pos.x, pos.y);
                let mapped = viewport.rect_to_image(rect);
                if mapped.area() > self.config.min_region_area {
                    store.add(Entity::Region(mapped));
                }
            }
        }
    }

    fn region_up(&mut self, pos: Point, viewport: &mut Viewport) {
        self.button_down = false;
        let Some(pending) = self.pending else { return };
        if pos != Self::pending_anchor(&pending) {
            // Released away from the anchor: this was a zoom drag.
            self.finish_zoom_drag(pos, viewport);
        }
        // Released on the anchor: a click. The pending corner stays armed
        // for the second placement click.
    }

    fn region_move(&mut self, pos: Point, viewport: &Viewport, store: &mut AnnotationStore) {
        self.cursor = Some(pos);
        if self.pending.is_some() {
            self.update_pending(pos);
        } else {
            let hovered = store.region_at(viewport.to_image(pos));
            store.select(hovered);
        }
    }
}
