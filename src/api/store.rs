use indexmap::IndexMap;

use crate::core::SliceId;
use crate::render::{ChartSurface, ElementId, LabelPrimitive, LineShape, MarkerDot};

/// Stored line shape plus whether it ever reached the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub id: ElementId,
    pub shape: LineShape,
    pub attached: bool,
}

/// Stored label plus whether it ever reached the surface.
///
/// A label can legitimately stay unattached forever: the collision pass may
/// skip the title on every comparison, yet the label is still recorded (and
/// animated) for the slice.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub id: ElementId,
    pub label: LabelPrimitive,
    pub attached: bool,
}

/// Marker dots are always attached when created, so no flag is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerElement {
    pub id: ElementId,
    pub dot: MarkerDot,
}

/// What the placement engine actually produced for one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub line: LineElement,
    pub title: LabelElement,
    pub value: LabelElement,
}

/// Per-slice placement state, insertion-ordered so the collision loop walks
/// existing records in the order their slices were added.
///
/// Marker dots are not part of any record (a record is line + label pair);
/// they are tracked in a side list so teardown can remove every visible
/// element.
#[derive(Debug, Default)]
pub struct LayerStore {
    records: IndexMap<SliceId, PlacementRecord>,
    markers: Vec<MarkerElement>,
}

impl LayerStore {
    #[must_use]
    pub fn contains(&self, id: SliceId) -> bool {
        self.records.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: SliceId) -> Option<&PlacementRecord> {
        self.records.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: SliceId) -> Option<&mut PlacementRecord> {
        self.records.get_mut(&id)
    }

    /// Insert-if-absent: an existing record for the slice is never replaced.
    pub(crate) fn insert(&mut self, id: SliceId, record: PlacementRecord) {
        self.records.entry(id).or_insert(record);
    }

    pub(crate) fn push_marker(&mut self, marker: MarkerElement) {
        self.markers.push(marker);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SliceId, &PlacementRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    #[must_use]
    pub fn markers(&self) -> &[MarkerElement] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Teardown: detach every element that reached the surface (lines, label
    /// pairs, marker dots), then forget all placement state.
    pub(crate) fn clear_elements<S: ChartSurface>(&mut self, surface: &mut S) {
        for (_, record) in self.records.drain(..) {
            if record.line.attached {
                surface.detach(record.line.id);
            }
            if record.title.attached {
                surface.detach(record.title.id);
            }
            if record.value.attached {
                surface.detach(record.value.id);
            }
        }
        for marker in self.markers.drain(..) {
            surface.detach(marker.id);
        }
    }
}
