//! PadData: the per-frame view panels use to mutate the point list.
//!
//! Every mutation goes through here so that logging and event emission
//! happen in one place, whichever panel triggered it.

use crate::chart::{ChartAdapter, DragEvent, DragOutcome, DragPhase};
use crate::events::{EventController, EventKind, PadEvent, PointMeta};

use super::input::InputForm;
use super::point::{parse_hex_color, Point, DEFAULT_POINT_COLOR};
use super::points::PointStore;

pub struct PadData<'a> {
    pub store: &'a mut PointStore,
    pub adapter: &'a ChartAdapter,
    pub events: Option<&'a EventController>,
}

impl<'a> PadData<'a> {
    pub fn new(store: &'a mut PointStore, adapter: &'a ChartAdapter) -> Self {
        Self {
            store,
            adapter,
            events: None,
        }
    }

    pub fn with_events(mut self, events: Option<&'a EventController>) -> Self {
        self.events = events;
        self
    }

    /// Validate the form and append its point. Bad input is dropped silently.
    pub fn submit(&mut self, form: &mut InputForm) -> Option<usize> {
        match form.take_point() {
            Some(p) => Some(self.append(p.x, p.y, Some(&p.color))),
            None => {
                log::debug!(
                    "rejected point input x={:?} y={:?}",
                    form.x_text,
                    form.y_text
                );
                self.emit(PadEvent::new(EventKind::INPUT_REJECTED));
                None
            }
        }
    }

    pub fn append(&mut self, x: f64, y: f64, color: Option<&str>) -> usize {
        let index = self.store.append(x, y, color);
        if let Some(p) = self.store.get(index) {
            log::debug!("added point #{index} {} {}", p.label(), p.color);
            if let Err(e) = parse_hex_color(&p.color) {
                log::warn!("{e}, point #{index} will be drawn in {DEFAULT_POINT_COLOR}");
            }
            let meta = meta(index, p);
            self.emit(PadEvent::new(EventKind::POINT_ADDED).with_point(meta));
        }
        index
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        let removed = self.store.remove_at(index)?;
        log::debug!("removed point #{index} {}", removed.label());
        self.emit(PadEvent::new(EventKind::POINT_REMOVED).with_point(meta(index, &removed)));
        Some(removed)
    }

    pub fn clear(&mut self) {
        let n = self.store.len();
        self.store.clear();
        log::debug!("cleared {n} points");
        let mut evt = PadEvent::new(EventKind::POINTS_CLEARED);
        evt.cleared = Some(n);
        self.emit(evt);
    }

    /// Apply a drag update from the chart.
    pub fn apply_drag(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = self.adapter.apply_drag(self.store, event);
        match outcome {
            DragOutcome::Applied { .. } => {
                let mut kinds = EventKind::DRAG_IN_PROGRESS;
                if event.phase == DragPhase::Commit {
                    kinds |= EventKind::DRAG_COMMITTED;
                }
                if let Some(p) = self.store.get(event.point_index) {
                    if event.phase == DragPhase::Commit {
                        log::debug!("moved point #{} to {}", event.point_index, p.label());
                    }
                    let meta = meta(event.point_index, p);
                    self.emit(PadEvent::new(kinds).with_point(meta));
                }
            }
            DragOutcome::StaleIndex => {
                log::debug!(
                    "ignored drag for point #{} (list has {})",
                    event.point_index,
                    self.store.len()
                );
                let mut evt = PadEvent::new(EventKind::DRAG_IGNORED);
                evt.stale_index = Some(event.point_index);
                self.emit(evt);
            }
            DragOutcome::OtherDataset => {}
        }
        outcome
    }

    fn emit(&self, event: PadEvent) {
        if let Some(ctrl) = self.events {
            ctrl.emit(event);
        }
    }
}

fn meta(index: usize, p: &Point) -> PointMeta {
    PointMeta {
        index,
        x: p.x,
        y: p.y,
        color: p.color.clone(),
    }
}
