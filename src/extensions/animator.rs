use std::time::Duration;

use crate::core::Point;
use crate::render::ElementId;

/// Duration of the eased selection-offset move.
pub const SELECTION_MOVE_DURATION: Duration = Duration::from_millis(150);

/// Animation hook for finished visual elements.
///
/// The engine fires these notifications and never awaits completion; the
/// implementation owns timing and easing. `appear` is sent for newly placed
/// elements (including labels the collision pass left unattached — see the
/// placement engine docs), `reposition` for selection-offset moves, which are
/// expected to ease over `duration`.
pub trait LayerAnimator {
    fn appear(&mut self, element: ElementId);
    fn reposition(&mut self, element: ElementId, to: Point, duration: Duration);
}

/// No-op animator used by tests and headless layer usage.
///
/// It records every notification so tests can assert what would have animated.
#[derive(Debug, Default)]
pub struct NullAnimator {
    pub appeared: Vec<ElementId>,
    pub repositioned: Vec<(ElementId, Point, Duration)>,
}

impl LayerAnimator for NullAnimator {
    fn appear(&mut self, element: ElementId) {
        self.appeared.push(element);
    }

    fn reposition(&mut self, element: ElementId, to: Point, duration: Duration) {
        self.repositioned.push((element, to, duration));
    }
}
