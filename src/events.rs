//! Pad events: every list mutation is published through [`EventController`].
//!
//! A subscriber's [`EventFilter`] is an OR mask over [`EventKind`] bits.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use web_time::Instant;

/// Categories an event belongs to, as bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    pub const POINT_ADDED: Self = Self(1 << 0);
    /// Later indices shifted down by one.
    pub const POINT_REMOVED: Self = Self(1 << 1);
    pub const POINTS_CLEARED: Self = Self(1 << 2);
    pub const DRAG_IN_PROGRESS: Self = Self(1 << 3);
    pub const DRAG_COMMITTED: Self = Self(1 << 4);
    /// A coordinate field did not parse; nothing was added.
    pub const INPUT_REJECTED: Self = Self(1 << 5);
    /// A drag update pointed at an index that no longer exists.
    pub const DRAG_IGNORED: Self = Self(1 << 6);
    pub const ALL: Self = Self(u64::MAX);

    const NAMES: [(Self, &'static str); 7] = [
        (Self::POINT_ADDED, "POINT_ADDED"),
        (Self::POINT_REMOVED, "POINT_REMOVED"),
        (Self::POINTS_CLEARED, "POINTS_CLEARED"),
        (Self::DRAG_IN_PROGRESS, "DRAG_IN_PROGRESS"),
        (Self::DRAG_COMMITTED, "DRAG_COMMITTED"),
        (Self::INPUT_REJECTED, "INPUT_REJECTED"),
        (Self::DRAG_IGNORED, "DRAG_IGNORED"),
    ];

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self(0) => return f.write_str("EMPTY"),
            Self::ALL => return f.write_str("ALL"),
            _ => {}
        }
        let mut names: Vec<String> = Self::NAMES
            .iter()
            .filter(|(kind, _)| self.contains(*kind))
            .map(|(_, name)| name.to_string())
            .collect();
        let known = Self::NAMES.iter().fold(0, |acc, (kind, _)| acc | kind.0);
        if self.0 & !known != 0 {
            names.push(format!("0x{:x}", self.0 & !known));
        }
        f.write_str(&names.join("|"))
    }
}

/// The point an event refers to, as it was when the event fired.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMeta {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// An event emitted by the pad.
#[derive(Debug, Clone)]
pub struct PadEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Seconds since the controller was created.
    pub timestamp: f64,
    pub point: Option<PointMeta>,
    /// Number of points removed by a clear.
    pub cleared: Option<usize>,
    /// Index a rejected drag update pointed at.
    pub stale_index: Option<usize>,
}

impl PadEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            point: None,
            cleared: None,
            stale_index: None,
        }
    }

    pub fn with_point(mut self, point: PointMeta) -> Self {
        self.point = Some(point);
        self
    }
}

/// Selects which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    pub fn matches(&self, event: &PadEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

struct Subscriber {
    filter: EventFilter,
    sender: Sender<PadEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: Instant,
}

/// Collects and distributes pad events to subscribers.
///
/// Put it in [`PadConfig`](crate::config::PadConfig) before launching the
/// UI, then call [`subscribe`](Self::subscribe) to receive events on an
/// `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<PadEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut inner) = self.inner.lock() {
            inner.subscribers.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<PadEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Send `event` to every subscriber whose filter matches.
    ///
    /// Subscribers whose receiver was dropped are pruned on the next
    /// matching send.
    pub fn emit(&self, mut event: PadEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0);
        f.debug_struct("EventController")
            .field("subscribers", &subscribers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let drag = EventKind::DRAG_IN_PROGRESS | EventKind::DRAG_COMMITTED;
        assert!(drag.contains(EventKind::DRAG_COMMITTED));
        assert!(drag.intersects(EventKind::DRAG_IN_PROGRESS));
        assert!(!EventKind::POINT_ADDED.intersects(drag));
        let mut kinds = EventKind::POINT_ADDED;
        kinds |= EventKind::POINT_REMOVED;
        assert_eq!(kinds, EventKind::POINT_ADDED | EventKind::POINT_REMOVED);
    }

    #[test]
    fn filter_routes_by_kind() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_drag = ctrl.subscribe(EventFilter::only(EventKind::DRAG_COMMITTED));
        let rx_add = ctrl.subscribe(EventFilter::only(EventKind::POINT_ADDED));

        ctrl.emit(PadEvent::new(
            EventKind::DRAG_IN_PROGRESS | EventKind::DRAG_COMMITTED,
        ));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_drag.try_recv().is_ok());
        assert!(rx_add.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();
        drop(rx1);

        ctrl.emit(PadEvent::new(EventKind::POINTS_CLEARED));
        assert!(rx2.try_recv().is_ok());
        assert!(format!("{ctrl:?}").contains("subscribers: 1"));
    }

    #[test]
    fn display_joins_names() {
        assert_eq!(format!("{}", EventKind::POINT_ADDED), "POINT_ADDED");
        assert_eq!(
            format!("{}", EventKind::DRAG_IN_PROGRESS | EventKind::DRAG_COMMITTED),
            "DRAG_IN_PROGRESS|DRAG_COMMITTED"
        );
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        assert_eq!(format!("{}", EventKind(0)), "EMPTY");
        assert!(format!("{}", EventKind(1 << 63)).starts_with("0x"));
    }
}
