// File: src/core/pad.rs
use crate::config::PadConfig;
use crate::core::connection::Connection;
use crate::core::symbol::{Draft, Symbol};
use crate::core::types::{GridPoint, PadGeometry, GRID_POINT_COUNT};

/// Notifications delivered synchronously after the mutation they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEvent {
    SymbolChanged,
    StrokeEnded,
}

/// How many more gestures the pad accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLimit {
    Unlimited,
    Remaining(u64),
}

impl From<i64> for StrokeLimit {
    /// Negative counts mean unlimited.
    fn from(count: i64) -> Self {
        u64::try_from(count).map_or(StrokeLimit::Unlimited, StrokeLimit::Remaining)
    }
}

impl StrokeLimit {
    pub fn as_i64(self) -> i64 {
        match self {
            StrokeLimit::Unlimited => -1,
            StrokeLimit::Remaining(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadState {
    Idle,
    /// `last` is the most recently touched grid point of this gesture.
    Dragging { last: Option<GridPoint> },
}

type Observer = Box<dyn FnMut(PadEvent, &Draft)>;

/// Turns press-drag-release gestures over the grid into a [`Draft`].
///
/// Every connection drawn is appended raw, so retracing a segment twice
/// records it twice and each can be undone separately.
pub struct InputPad {
    draft: Draft,
    state: PadState,
    stroke_limit: StrokeLimit,
    geometry: PadGeometry,
    observers: Vec<Observer>,
}

impl Default for InputPad {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPad {
    pub fn new() -> Self {
        Self::with_config(&PadConfig::default())
    }

    pub fn with_config(config: &PadConfig) -> Self {
        Self {
            draft: Draft::new(),
            state: PadState::Idle,
            stroke_limit: StrokeLimit::from(config.stroke_limit),
            geometry: config.geometry(),
            observers: Vec::new(),
        }
    }

    /// Registers a callback for every [`PadEvent`], in mutation order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(PadEvent, &Draft) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: PadEvent) {
        for observer in self.observers.iter_mut() {
            observer(event, &self.draft);
        }
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PadState::Dragging { .. })
    }

    pub fn geometry(&self) -> &PadGeometry {
        &self.geometry
    }

    /// Starts a gesture, optionally already over a grid point.
    /// Returns false if the pad is mid-gesture or out of strokes.
    pub fn begin_gesture(&mut self, start: Option<GridPoint>) -> bool {
        if self.is_dragging() {
            return false;
        }
        match self.stroke_limit {
            StrokeLimit::Remaining(0) => {
                log::debug!("gesture rejected: stroke limit reached");
                return false;
            }
            StrokeLimit::Remaining(n) => self.stroke_limit = StrokeLimit::Remaining(n - 1),
            StrokeLimit::Unlimited => {}
        }
        self.state = PadState::Dragging {
            last: start.filter(|&p| p < GRID_POINT_COUNT),
        };
        log::debug!("gesture started, limit now {:?}", self.stroke_limit);
        true
    }

    /// Pointer entered grid point `point` (None when over empty space).
    /// Returns whether a connection was drawn.
    pub fn point_moved(&mut self, point: Option<GridPoint>) -> bool {
        let PadState::Dragging { last } = self.state else {
            return false;
        };
        let Some(point) = point.filter(|&p| p < GRID_POINT_COUNT) else {
            return false;
        };
        if last == Some(point) {
            return false;
        }
        self.state = PadState::Dragging { last: Some(point) };

        let Some(previous) = last else {
            return false;
        };
        let connection = Connection::new(previous, point);
        if !connection.is_valid() {
            return false;
        }
        self.draft.add_connection_forced(connection);
        self.notify(PadEvent::SymbolChanged);
        true
    }

    /// Ends (or abandons) the gesture. Returns false when no gesture was active.
    pub fn end_gesture(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = PadState::Idle;
        self.notify(PadEvent::StrokeEnded);
        true
    }

    /// Pointer pressed at pad coordinates.
    pub fn press_at(&mut self, x: f64, y: f64) -> bool {
        let point = self.geometry.point_at(x, y);
        self.begin_gesture(point)
    }

    /// Pointer dragged to pad coordinates.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let point = self.geometry.point_at(x, y);
        self.point_moved(point)
    }

    /// Pointer released or left the pad.
    pub fn release(&mut self) -> bool {
        self.end_gesture()
    }

    /// The live shape, in stroke order.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Normalized copy of the live shape.
    pub fn symbol(&self) -> Symbol {
        self.draft.to_symbol()
    }

    pub fn set_symbol(&mut self, symbol: &Symbol) {
        self.draft = Draft::from(symbol);
        self.notify(PadEvent::SymbolChanged);
    }

    pub fn clear_symbol(&mut self) {
        self.draft = Draft::new();
        self.notify(PadEvent::SymbolChanged);
    }

    /// Undo. Fires a change only when something was removed.
    pub fn remove_last_connection(&mut self) -> Option<Connection> {
        let removed = self.draft.remove_last_connection()?;
        self.notify(PadEvent::SymbolChanged);
        Some(removed)
    }

    /// Remaining gesture budget; negative means unlimited.
    pub fn stroke_limit(&self) -> i64 {
        self.stroke_limit.as_i64()
    }

    pub fn set_stroke_limit(&mut self, count: i64) {
        self.stroke_limit = StrokeLimit::from(count);
    }
}
