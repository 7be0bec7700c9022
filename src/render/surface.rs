use indexmap::IndexMap;

use crate::core::{Point, Rect};
use crate::render::{ElementId, LabelPrimitive, LineShape, MarkerDot};

/// Contract implemented by the host's visible surface.
///
/// The engine never stores a surface handle; every operation receives one, so
/// lifetime dependencies stay explicit and the engine cannot outlive the view
/// hierarchy it draws into.
///
/// Implementations must tolerate fire-and-forget usage: attaching an id that
/// is already present replaces its content, and `move_element`/`detach` on an
/// unknown id is a silent no-op (animations may still be running against
/// elements the engine already removed).
pub trait ChartSurface {
    fn attach_line(&mut self, id: ElementId, line: &LineShape);
    fn attach_label(&mut self, id: ElementId, label: &LabelPrimitive);
    fn attach_marker(&mut self, id: ElementId, marker: &MarkerDot);
    /// Moves an attached element so its center lands on `center`.
    fn move_element(&mut self, id: ElementId, center: Point);
    fn detach(&mut self, id: ElementId);
}

/// One attached visual element, as seen by the recording surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceElement {
    Line(LineShape),
    Label(LabelPrimitive),
    Marker(MarkerDot),
}

impl SurfaceElement {
    #[must_use]
    pub fn frame(&self) -> Rect {
        match self {
            Self::Line(line) => line.bounds(),
            Self::Label(label) => label.frame,
            Self::Marker(marker) => marker.frame(),
        }
    }

    fn move_center(&mut self, center: Point) {
        match self {
            Self::Line(line) => line.move_center(center),
            Self::Label(label) => label.frame = label.frame.with_center(center),
            Self::Marker(marker) => marker.center = center,
        }
    }
}

/// Headless surface used by tests and tools.
///
/// It validates every primitive on attach (recording violations instead of
/// failing, since the placement path is infallible) and keeps the element
/// tree in attach order for deterministic assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    elements: IndexMap<ElementId, SurfaceElement>,
    violations: Vec<String>,
    pub attach_calls: usize,
    pub move_calls: usize,
    pub detach_calls: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&SurfaceElement> {
        self.elements.get(&id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &SurfaceElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count_kind(|e| matches!(e, SurfaceElement::Line(_)))
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.count_kind(|e| matches!(e, SurfaceElement::Label(_)))
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.count_kind(|e| matches!(e, SurfaceElement::Marker(_)))
    }

    /// Validation failures observed on attach, in order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    fn count_kind(&self, matches: impl Fn(&SurfaceElement) -> bool) -> usize {
        self.elements.values().filter(|e| matches(e)).count()
    }

    fn record(&mut self, id: ElementId, element: SurfaceElement, validation: Result<(), String>) {
        self.attach_calls += 1;
        if let Err(message) = validation {
            self.violations.push(message);
        }
        self.elements.insert(id, element);
    }
}

impl ChartSurface for RecordingSurface {
    fn attach_line(&mut self, id: ElementId, line: &LineShape) {
        let validation = line.validate().map_err(|e| e.to_string());
        self.record(id, SurfaceElement::Line(*line), validation);
    }

    fn attach_label(&mut self, id: ElementId, label: &LabelPrimitive) {
        let validation = label.validate().map_err(|e| e.to_string());
        self.record(id, SurfaceElement::Label(label.clone()), validation);
    }

    fn attach_marker(&mut self, id: ElementId, marker: &MarkerDot) {
        let validation = marker.validate().map_err(|e| e.to_string());
        self.record(id, SurfaceElement::Marker(*marker), validation);
    }

    fn move_element(&mut self, id: ElementId, center: Point) {
        self.move_calls += 1;
        if let Some(element) = self.elements.get_mut(&id) {
            element.move_center(center);
        }
    }

    fn detach(&mut self, id: ElementId) {
        self.detach_calls += 1;
        self.elements.shift_remove(&id);
    }
}
