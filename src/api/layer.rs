use tracing::{debug, trace, warn};

use crate::core::{LeaderLine, PieSlice, SliceId, calculate_position};
use crate::error::LayerResult;
use crate::extensions::{LayerAnimator, NullAnimator, SELECTION_MOVE_DURATION};
use crate::render::{CharAdvanceMeasurer, ChartSurface, ElementId, LineShape, TextMeasurer};

use super::store::{LabelElement, LayerStore, LineElement, MarkerElement, PlacementRecord};
use super::{LabelRole, LineTextLayerSettings, build_label};

/// Collision-aware placement engine for leader-line slice annotations.
///
/// Slices are placed one at a time, each candidate tested against the labels
/// already placed, in insertion order. The first collision latches the engine
/// into marker mode: from then on every placed slice also gets a marker dot
/// at its line origin, for the lifetime of this value (`clear` resets the
/// placement state but not the latch).
///
/// The comparison loop deliberately reproduces the legacy per-record
/// semantics, asymmetries included:
/// - a title collision skips attaching the title for that comparison but the
///   loop keeps going, so a later comparison can still attach it;
/// - the first comparison whose value label is collision-free attaches the
///   line and value label and stops the loop, leaving later records
///   unchecked;
/// - a title label that never found a collision-free comparison stays
///   unattached, yet is still recorded and handed to the animator.
pub struct LineTextLayer<A: LayerAnimator = NullAnimator> {
    settings: LineTextLayerSettings,
    animator: A,
    measurer: Box<dyn TextMeasurer + Send + Sync>,
    store: LayerStore,
    marker_mode: bool,
    next_element: u64,
}

impl LineTextLayer<NullAnimator> {
    /// Creates a layer with validated settings and a no-op animator.
    pub fn new(settings: LineTextLayerSettings) -> LayerResult<Self> {
        Self::with_animator(settings, NullAnimator::default())
    }
}

impl<A: LayerAnimator> LineTextLayer<A> {
    /// Creates a layer with validated settings and the given animation hook.
    pub fn with_animator(settings: LineTextLayerSettings, animator: A) -> LayerResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            animator,
            measurer: Box::new(CharAdvanceMeasurer::default()),
            store: LayerStore::default(),
            marker_mode: false,
            next_element: 0,
        })
    }

    /// Replaces the text measurer (e.g. with a host font-backed one).
    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + Send + Sync + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &LineTextLayerSettings {
        &self.settings
    }

    /// Whether a collision has latched the engine into marker mode.
    #[must_use]
    pub fn marker_mode(&self) -> bool {
        self.marker_mode
    }

    #[must_use]
    pub fn placed_len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn record(&self, slice: SliceId) -> Option<&PlacementRecord> {
        self.store.get(slice)
    }

    #[must_use]
    pub fn store(&self) -> &LayerStore {
        &self.store
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Entry point for hosts that defer placement until the slice's own
    /// entrance animation has finished.
    pub fn on_end_animation(&mut self, surface: &mut impl ChartSurface, slice: &PieSlice) {
        self.add_items(surface, slice);
    }

    /// Places the leader line, title label, and value label for one slice.
    ///
    /// No-op when the slice already has a placement record. The very first
    /// slice is placed in full without any collision check.
    pub fn add_items(&mut self, surface: &mut impl ChartSurface, slice: &PieSlice) {
        if self.store.contains(slice.id) {
            trace!(slice = slice.id.raw(), "slice already placed, skipping");
            return;
        }

        let line = LeaderLine::compute(
            &slice.geometry,
            self.settings.chart_offset,
            self.settings.segment1_length,
            self.settings.segment2_length,
        );
        let shape = LineShape::new(
            line.p1,
            line.p2,
            line.p3,
            self.settings.line_width,
            self.settings.line_color,
        );
        let value = build_label(
            slice,
            LabelRole::Value,
            &line,
            &self.settings.value_label,
            self.settings.label_x_offset,
            self.settings.label_y_offset,
            self.measurer.as_ref(),
        );
        let title = build_label(
            slice,
            LabelRole::Title,
            &line,
            &self.settings.title_label,
            self.settings.label_x_offset,
            self.settings.label_y_offset,
            self.measurer.as_ref(),
        );

        let line_id = self.next_id();
        let value_id = self.next_id();
        let title_id = self.next_id();

        let mut line_attached = false;
        let mut value_attached = false;
        let mut title_attached = false;

        if self.store.is_empty() {
            surface.attach_label(title_id, &title);
            title_attached = true;
            surface.attach_line(line_id, &shape);
            self.animator.appear(line_id);
            surface.attach_label(value_id, &value);
            line_attached = true;
            value_attached = true;
        } else {
            for (_, existing) in self.store.iter() {
                if existing.title.label.frame.intersects(title.frame) {
                    self.marker_mode = true;
                    continue;
                }
                if !title_attached {
                    surface.attach_label(title_id, &title);
                    title_attached = true;
                }

                if existing.value.label.frame.intersects(value.frame) {
                    self.marker_mode = true;
                    continue;
                }
                surface.attach_line(line_id, &shape);
                self.animator.appear(line_id);
                surface.attach_label(value_id, &value);
                line_attached = true;
                value_attached = true;
                break;
            }
        }

        if self.marker_mode && self.settings.marker.enabled {
            let dot = self.settings.marker.dot_at(line.p1);
            let dot_id = self.next_id();
            surface.attach_marker(dot_id, &dot);
            self.store.push_marker(MarkerElement { id: dot_id, dot });
        }

        // Labels animate unconditionally, an unattached title included.
        self.animator.appear(value_id);
        self.animator.appear(title_id);

        debug!(
            slice = slice.id.raw(),
            line_attached,
            title_attached,
            value_attached,
            marker_mode = self.marker_mode,
            "placed slice annotations"
        );

        self.store.insert(
            slice.id,
            PlacementRecord {
                line: LineElement {
                    id: line_id,
                    shape,
                    attached: line_attached,
                },
                title: LabelElement {
                    id: title_id,
                    label: title,
                    attached: title_attached,
                },
                value: LabelElement {
                    id: value_id,
                    label: value,
                    attached: value_attached,
                },
            },
        );
    }

    /// Shifts the slice's line and label pair outward (selection) or back
    /// inward (deselection) along its mid-angle, by the slice's selection
    /// offset, easing over [`SELECTION_MOVE_DURATION`].
    ///
    /// Existing positions are translated; geometry is never recomputed, so a
    /// select/deselect pair restores the original placement.
    pub fn on_selected(&mut self, surface: &mut impl ChartSurface, slice: &PieSlice, selected: bool) {
        let Some(record) = self.store.get_mut(slice.id) else {
            warn!(
                slice = slice.id.raw(),
                "selection change for slice without placement record"
            );
            return;
        };

        let offset = if selected {
            slice.geometry.selected_offset
        } else {
            -slice.geometry.selected_offset
        };
        let angle = slice.geometry.mid_angle;

        for element in [&mut record.title, &mut record.value] {
            let to = calculate_position(angle, element.label.frame.center(), offset);
            element.label.frame = element.label.frame.with_center(to);
            if element.attached {
                surface.move_element(element.id, to);
            }
            self.animator
                .reposition(element.id, to, SELECTION_MOVE_DURATION);
        }

        let to = calculate_position(angle, record.line.shape.center(), offset);
        record.line.shape.move_center(to);
        if record.line.attached {
            surface.move_element(record.line.id, to);
        }
        self.animator
            .reposition(record.line.id, to, SELECTION_MOVE_DURATION);

        trace!(slice = slice.id.raw(), selected, "repositioned slice annotations");
    }

    /// Detaches every placed element (lines, label pairs, marker dots) and
    /// forgets all placement state. The marker latch is not reset.
    pub fn clear(&mut self, surface: &mut impl ChartSurface) {
        let removed = self.store.len();
        self.store.clear_elements(surface);
        debug!(removed, "cleared line-text layer");
    }

    fn next_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_element);
        self.next_element += 1;
        id
    }
}
