use scrubber_core::markers::{Marker, PlacedMarker, place_markers};
use scrubber_core::position::ChapterPosition;
use scrubber_core::scrubber::{Anchor, LabelPanel, ScrubberController, TrackGeometry};
use tracing::trace;

/// Size of the scrubber canvas as last reported by the window or the canvas itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub(in crate::app) height: f32,
}

impl TrackGeometry for SurfaceGeometry {
    fn surface_height(&self) -> f32 {
        self.height
    }

    /// The panel is drawn inside the canvas, starting at its left edge.
    fn anchor(&self) -> Anchor {
        Anchor::default()
    }
}

pub struct ScrubberState {
    pub(in crate::app) controller: ScrubberController,
    pub(in crate::app) geometry: SurfaceGeometry,
    /// Last committed label panel; `None` while the labels are hidden.
    pub(in crate::app) panel: Option<LabelPanel>,
    /// Reading position when the current drag started.
    pub(in crate::app) drag_origin: Option<ChapterPosition>,
}

impl ScrubberState {
    pub(in crate::app) fn new(controller: ScrubberController, surface_height: f32) -> Self {
        Self {
            controller,
            geometry: SurfaceGeometry {
                height: surface_height.max(0.0),
            },
            panel: None,
            drag_origin: None,
        }
    }

    /// Records a new surface height. Returns true when it changed.
    pub(in crate::app) fn set_surface_height(&mut self, height: f32) -> bool {
        if !height.is_finite() || (self.geometry.height - height).abs() < 0.5 {
            return false;
        }
        trace!(from = self.geometry.height, to = height, "Scrubber surface resized");
        self.geometry.height = height.max(0.0);
        true
    }

    pub(in crate::app) fn present_panel(&mut self, panel: LabelPanel) {
        self.panel = Some(panel);
    }

    pub(in crate::app) fn dismiss_panel(&mut self) {
        self.panel = None;
    }

    pub(in crate::app) fn placed_markers(&self, markers: &[Marker]) -> Vec<PlacedMarker> {
        place_markers(markers, self.controller.track_span(&self.geometry))
    }
}
