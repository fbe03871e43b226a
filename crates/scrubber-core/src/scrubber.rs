//! Pointer interaction for the chapter scrubber.
//!
//! [`ScrubberController`] owns all interaction state (hover, drag, hovered
//! label, drag de-duplication) and is mutated only through its transition
//! methods. Every transition returns the [`ScrubberEffect`]s the host must
//! carry out; the controller never calls back into the host directly.
//!
//! Label layout depends on pixel geometry that is only final after the host
//! has committed a frame, so the controller asks for it with
//! [`ScrubberEffect::ScheduleLabelLayout`] and computes the panel when the
//! host answers through [`ScrubberController::commit_label_layout`]. Only the
//! newest request is honoured.

use crate::canon;
use crate::error::PositionError;
use crate::layout::{LabelLayout, label_scale, overshoot_px};
use crate::position::{
    self, BookRange, ChapterPosition, book_index_at_fraction, book_ranges, chapter_position,
    global_index_for_fraction,
};
use tracing::{debug, trace};

/// Host-reported geometry of the scrubber surface.
pub trait TrackGeometry {
    /// Full pixel height of the scrubber surface, insets included.
    fn surface_height(&self) -> f32;
    /// Point the label panel hangs from, in the host's coordinate space.
    fn anchor(&self) -> Anchor;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

/// Static tuning for the scrubber surface and its label panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubberSettings {
    /// Empty space above and below the track inside the surface.
    pub track_inset: f32,
    pub panel_width: f32,
    /// Horizontal distance between the anchor and the panel.
    pub panel_gap: f32,
    pub label_min_gap_px: f32,
    pub label_font_size: f32,
}

impl Default for ScrubberSettings {
    fn default() -> Self {
        Self {
            track_inset: 20.0,
            panel_width: 140.0,
            panel_gap: 4.0,
            label_min_gap_px: 12.0,
            label_font_size: 8.0,
        }
    }
}

/// Vertical extent of the track within the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSpan {
    pub top: f32,
    pub height: f32,
}

impl TrackSpan {
    pub fn new(surface_height: f32, inset: f32) -> Self {
        let surface_height = if surface_height.is_finite() {
            surface_height.max(0.0)
        } else {
            0.0
        };
        Self {
            top: inset,
            height: (surface_height - inset * 2.0).max(0.0),
        }
    }

    /// Track fraction under `y`, clamped to `[0, 1]`. A collapsed track maps everything to 0.
    pub fn fraction_at(&self, y: f32) -> f32 {
        if self.height <= 0.0 || !y.is_finite() {
            return 0.0;
        }
        ((y - self.top) / self.height).clamp(0.0, 1.0)
    }

    pub fn y_at(&self, fraction: f32) -> f32 {
        self.top + fraction * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    HoveredOnly,
    Dragging,
}

/// Work the host performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrubberEffect {
    /// Move the reading pane to this chapter.
    Navigate(ChapterPosition),
    /// Call [`ScrubberController::commit_label_layout`] with this generation
    /// once the current frame has been laid out.
    ScheduleLabelLayout { generation: u64 },
    HideLabels,
}

/// One label in a computed panel. `center_y` is in panel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLabel {
    pub index: usize,
    pub name: &'static str,
    pub center_y: f32,
    pub scale: f32,
    pub font_size: f32,
    pub emphasized: bool,
}

/// Logical geometry of the label panel, ready for the host to present.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPanel {
    /// Top-left corner in the host's coordinate space.
    pub origin: Anchor,
    pub width: f32,
    pub height: f32,
    pub buffer_top: f32,
    pub buffer_bottom: f32,
    /// Offset applied to the whole stack to line the focused label up with the thumb.
    pub shift: f32,
    /// Thumb position in panel coordinates.
    pub thumb_y: f32,
    pub labels: Vec<PanelLabel>,
}

impl LabelPanel {
    /// Label whose row contains `y` (panel coordinates).
    pub fn label_at(&self, y: f32) -> Option<usize> {
        self.labels
            .iter()
            .map(|label| (label, (label.center_y - y).abs()))
            .filter(|(label, distance)| *distance <= label.font_size.max(1.0) * 0.75)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(label, _)| label.index)
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Observed {
    visible: bool,
    fraction: f32,
    hovered_book: Option<usize>,
}

pub struct ScrubberController {
    settings: ScrubberSettings,
    ranges: Vec<BookRange>,
    reading_index: usize,
    hovered: bool,
    dragging: bool,
    drag_fraction: f32,
    last_emitted_index: Option<usize>,
    hovered_book: Option<usize>,
    layout_generation: u64,
    pending_layout: Option<u64>,
}

impl ScrubberController {
    pub fn new(settings: ScrubberSettings, position: &ChapterPosition) -> Result<Self, PositionError> {
        Ok(Self::at_index(settings, position.global_index()?))
    }

    /// Controller parked on a global chapter index, clamped into the canon.
    pub fn at_index(settings: ScrubberSettings, global_index: usize) -> Self {
        let last = canon::total_chapters().saturating_sub(1) as usize;
        Self {
            settings,
            ranges: book_ranges(),
            reading_index: global_index.min(last),
            hovered: false,
            dragging: false,
            drag_fraction: 0.0,
            last_emitted_index: None,
            hovered_book: None,
            layout_generation: 0,
            pending_layout: None,
        }
    }

    pub fn settings(&self) -> &ScrubberSettings {
        &self.settings
    }

    pub fn book_ranges(&self) -> &[BookRange] {
        &self.ranges
    }

    pub fn phase(&self) -> Phase {
        if self.dragging {
            Phase::Dragging
        } else if self.hovered {
            Phase::HoveredOnly
        } else {
            Phase::Idle
        }
    }

    pub fn labels_visible(&self) -> bool {
        self.hovered || self.dragging
    }

    pub fn hovered_book(&self) -> Option<usize> {
        self.hovered_book
    }

    pub fn reading_position(&self) -> ChapterPosition {
        chapter_position(self.reading_index as i64)
    }

    /// Thumb fraction: the pointer while dragging, otherwise the reading position.
    pub fn current_fraction(&self) -> f32 {
        if self.dragging {
            self.drag_fraction
        } else {
            position::track_fraction(self.reading_index)
        }
    }

    pub fn track_span(&self, geometry: &impl TrackGeometry) -> TrackSpan {
        TrackSpan::new(geometry.surface_height(), self.settings.track_inset)
    }

    pub fn thumb_y(&self, geometry: &impl TrackGeometry) -> f32 {
        self.track_span(geometry).y_at(self.current_fraction())
    }

    /// Visible chapter reported by the reading pane.
    pub fn set_reading_position(
        &mut self,
        position: &ChapterPosition,
    ) -> Result<Vec<ScrubberEffect>, PositionError> {
        let index = position.global_index()?;
        Ok(self.transition(|this, _| {
            if this.reading_index != index {
                trace!(%position, index, "Scrubber follows reading position");
                this.reading_index = index;
            }
        }))
    }

    pub fn pointer_entered(&mut self) -> Vec<ScrubberEffect> {
        self.transition(|this, _| this.hovered = true)
    }

    pub fn pointer_left(&mut self) -> Vec<ScrubberEffect> {
        self.transition(|this, _| {
            this.hovered = false;
            this.hovered_book = None;
        })
    }

    /// Pointer pressed on the track. A press without movement still navigates.
    pub fn drag_began(&mut self, pointer_y: f32, geometry: &impl TrackGeometry) -> Vec<ScrubberEffect> {
        let span = self.track_span(geometry);
        self.transition(|this, effects| {
            if !this.dragging {
                debug!("Scrubber drag started");
            }
            this.dragging = true;
            this.drag_to(span.fraction_at(pointer_y), effects);
        })
    }

    pub fn drag_moved(&mut self, pointer_y: f32, geometry: &impl TrackGeometry) -> Vec<ScrubberEffect> {
        if !self.dragging {
            return Vec::new();
        }
        let span = self.track_span(geometry);
        self.transition(|this, effects| this.drag_to(span.fraction_at(pointer_y), effects))
    }

    pub fn drag_ended(&mut self) -> Vec<ScrubberEffect> {
        if !self.dragging {
            return Vec::new();
        }
        self.transition(|this, _| {
            this.dragging = false;
            this.last_emitted_index = None;
            debug!(index = this.reading_index, "Scrubber drag ended");
        })
    }

    /// Pointer over a label row, or `None` when it leaves every label.
    pub fn hover_label(&mut self, index: Option<usize>) -> Vec<ScrubberEffect> {
        let index = index.filter(|idx| *idx < self.ranges.len());
        self.transition(|this, _| this.hovered_book = index)
    }

    /// Pointer left the label panel.
    pub fn label_panel_left(&mut self) -> Vec<ScrubberEffect> {
        self.hover_label(None)
    }

    /// Jump to chapter 1 of the tapped book, independent of the thumb.
    pub fn tap_label(&mut self, index: usize) -> Vec<ScrubberEffect> {
        match self.ranges.get(index) {
            Some(range) => {
                debug!(book = range.name, "Book label tapped");
                vec![ScrubberEffect::Navigate(ChapterPosition::new(range.name, 1))]
            }
            None => Vec::new(),
        }
    }

    /// Answers a [`ScrubberEffect::ScheduleLabelLayout`]. Returns `None` when a
    /// newer request superseded `generation` or the labels have been hidden since.
    pub fn commit_label_layout(
        &mut self,
        generation: u64,
        geometry: &impl TrackGeometry,
    ) -> Option<LabelPanel> {
        if self.pending_layout != Some(generation) {
            trace!(generation, pending = ?self.pending_layout, "Dropping superseded label layout");
            return None;
        }
        self.pending_layout = None;
        if !self.labels_visible() {
            return None;
        }
        Some(self.label_panel(geometry))
    }

    /// Lays out the label panel for the current state.
    pub fn label_panel(&self, geometry: &impl TrackGeometry) -> LabelPanel {
        let span = self.track_span(geometry);
        let thumb = self.current_fraction();
        let mids: Vec<f32> = self.ranges.iter().map(BookRange::mid_fraction).collect();
        let layout = LabelLayout::compute(&mids, self.settings.label_min_gap_px, span.height);

        let focused = book_index_at_fraction(&self.ranges, thumb);
        let shift = focused
            .map(|idx| layout.alignment_shift_px(idx, thumb, span.height))
            .unwrap_or(0.0);
        let (buffer_top, buffer_bottom) = overshoot_px(&layout.fractions, shift, span.height);

        let labels = self
            .ranges
            .iter()
            .zip(&layout.fractions)
            .enumerate()
            .map(|(index, (range, fraction))| {
                let hovered = self.hovered_book == Some(index);
                let scale = label_scale(range.mid_fraction(), thumb, hovered);
                PanelLabel {
                    index,
                    name: range.name,
                    center_y: buffer_top + span.y_at(*fraction) + shift,
                    scale,
                    font_size: self.settings.label_font_size * scale,
                    emphasized: hovered || range.contains(thumb),
                }
            })
            .collect();

        let anchor = geometry.anchor();
        LabelPanel {
            origin: Anchor {
                x: anchor.x + self.settings.panel_gap,
                y: anchor.y - buffer_top,
            },
            width: self.settings.panel_width,
            height: geometry.surface_height().max(0.0) + buffer_top + buffer_bottom,
            buffer_top,
            buffer_bottom,
            shift,
            thumb_y: buffer_top + span.y_at(thumb),
            labels,
        }
    }

    fn drag_to(&mut self, fraction: f32, effects: &mut Vec<ScrubberEffect>) {
        self.drag_fraction = fraction;
        let index = global_index_for_fraction(fraction);
        if self.last_emitted_index == Some(index) {
            return;
        }
        self.last_emitted_index = Some(index);
        let target = chapter_position(index as i64);
        trace!(fraction, index, %target, "Scrubber drag crossed a chapter");
        effects.push(ScrubberEffect::Navigate(target));
    }

    fn observe(&self) -> Observed {
        Observed {
            visible: self.labels_visible(),
            fraction: self.current_fraction(),
            hovered_book: self.hovered_book,
        }
    }

    /// Runs `change`, then recomputes the label panel if anything it depends on moved.
    fn transition(
        &mut self,
        change: impl FnOnce(&mut Self, &mut Vec<ScrubberEffect>),
    ) -> Vec<ScrubberEffect> {
        let before = self.observe();
        let mut effects = Vec::new();
        change(self, &mut effects);
        self.recompute_if_visible(before, &mut effects);
        effects
    }

    fn recompute_if_visible(&mut self, before: Observed, effects: &mut Vec<ScrubberEffect>) {
        let after = self.observe();
        if !after.visible {
            if before.visible {
                self.pending_layout = None;
                effects.push(ScrubberEffect::HideLabels);
            }
            return;
        }
        if before == after {
            return;
        }
        self.layout_generation = self.layout_generation.wrapping_add(1);
        self.pending_layout = Some(self.layout_generation);
        effects.push(ScrubberEffect::ScheduleLabelLayout {
            generation: self.layout_generation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSET: f32 = 20.0;

    /// Surface whose track is exactly 1188px tall, so `y = INSET + index` hits chapter `index`.
    struct FixedGeometry {
        height: f32,
    }

    impl FixedGeometry {
        fn one_pixel_per_chapter() -> Self {
            Self {
                height: 1188.0 + INSET * 2.0,
            }
        }
    }

    impl TrackGeometry for FixedGeometry {
        fn surface_height(&self) -> f32 {
            self.height
        }

        fn anchor(&self) -> Anchor {
            Anchor { x: 300.0, y: 50.0 }
        }
    }

    fn controller_at(book: &str, chapter: u32) -> ScrubberController {
        ScrubberController::new(ScrubberSettings::default(), &ChapterPosition::new(book, chapter))
            .expect("valid start position")
    }

    fn navigations(effects: &[ScrubberEffect]) -> Vec<ChapterPosition> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                ScrubberEffect::Navigate(position) => Some(position.clone()),
                _ => None,
            })
            .collect()
    }

    fn scheduled_generation(effects: &[ScrubberEffect]) -> Option<u64> {
        effects.iter().rev().find_map(|effect| match effect {
            ScrubberEffect::ScheduleLabelLayout { generation } => Some(*generation),
            _ => None,
        })
    }

    #[test]
    fn hover_and_drag_walk_through_the_phases() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);
        assert_eq!(scrubber.phase(), Phase::Idle);

        scrubber.pointer_entered();
        assert_eq!(scrubber.phase(), Phase::HoveredOnly);

        scrubber.drag_began(INSET + 10.0, &geometry);
        assert_eq!(scrubber.phase(), Phase::Dragging);

        scrubber.drag_ended();
        assert_eq!(scrubber.phase(), Phase::HoveredOnly);

        scrubber.pointer_left();
        assert_eq!(scrubber.phase(), Phase::Idle);
    }

    #[test]
    fn parked_controller_clamps_past_the_last_chapter() {
        let scrubber = ScrubberController::at_index(ScrubberSettings::default(), 5000);
        assert_eq!(scrubber.reading_position(), ChapterPosition::new("Revelation", 22));
        let rejected =
            ScrubberController::new(ScrubberSettings::default(), &ChapterPosition::new("Jude", 2));
        assert!(rejected.is_err());
    }

    #[test]
    fn jittery_drag_only_navigates_on_index_changes() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);

        let mut emitted = Vec::new();
        emitted.extend(navigations(&scrubber.drag_began(INSET + 5.0, &geometry)));
        for index in [5.0, 6.0, 6.0, 5.0] {
            emitted.extend(navigations(&scrubber.drag_moved(INSET + index, &geometry)));
        }

        assert_eq!(
            emitted,
            vec![
                ChapterPosition::new("Genesis", 6),
                ChapterPosition::new("Genesis", 7),
                ChapterPosition::new("Genesis", 6),
            ]
        );
    }

    #[test]
    fn a_new_gesture_emits_again_after_drag_end() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);

        assert_eq!(navigations(&scrubber.drag_began(INSET + 40.0, &geometry)).len(), 1);
        scrubber.drag_ended();
        assert_eq!(navigations(&scrubber.drag_began(INSET + 40.0, &geometry)).len(), 1);
    }

    #[test]
    fn click_navigates_immediately() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);

        let effects = scrubber.drag_began(INSET + 594.0, &geometry);
        assert_eq!(navigations(&effects), vec![ChapterPosition::new("Psalms", 117)]);
    }

    #[test]
    fn pointer_outside_the_track_clamps_to_the_ends() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("John", 3);

        let effects = scrubber.drag_began(-400.0, &geometry);
        assert_eq!(navigations(&effects), vec![ChapterPosition::new("Genesis", 1)]);
        let effects = scrubber.drag_moved(10_000.0, &geometry);
        assert_eq!(navigations(&effects), vec![ChapterPosition::new("Revelation", 22)]);
        assert_eq!(scrubber.current_fraction(), 1.0);
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);
        assert!(scrubber.drag_moved(INSET + 100.0, &geometry).is_empty());
        assert!(scrubber.drag_ended().is_empty());
    }

    #[test]
    fn drag_fraction_overrides_reading_position_until_release() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Revelation", 22);
        assert_eq!(scrubber.current_fraction(), 1.0);

        scrubber.drag_began(INSET + 297.0, &geometry);
        assert!((scrubber.current_fraction() - 0.25).abs() < 1e-6);

        scrubber.drag_ended();
        assert_eq!(scrubber.current_fraction(), 1.0);
    }

    #[test]
    fn tapping_a_label_opens_its_first_chapter() {
        let mut scrubber = controller_at("Genesis", 17);
        let john = scrubber
            .book_ranges()
            .iter()
            .position(|range| range.name == "John")
            .unwrap();

        let effects = scrubber.tap_label(john);
        assert_eq!(effects, vec![ScrubberEffect::Navigate(ChapterPosition::new("John", 1))]);
        assert!(scrubber.tap_label(66).is_empty());
    }

    #[test]
    fn labels_follow_visibility() {
        let mut scrubber = controller_at("Genesis", 1);

        let shown = scrubber.pointer_entered();
        assert!(scheduled_generation(&shown).is_some());
        assert!(scrubber.labels_visible());

        let hidden = scrubber.pointer_left();
        assert_eq!(hidden, vec![ScrubberEffect::HideLabels]);
        assert!(!scrubber.labels_visible());
    }

    #[test]
    fn hover_changes_relayout_only_while_visible() {
        let mut scrubber = controller_at("Genesis", 1);
        assert!(scrubber.hover_label(Some(3)).is_empty());

        scrubber.pointer_entered();
        let effects = scrubber.hover_label(Some(4));
        assert!(scheduled_generation(&effects).is_some());
        assert!(scrubber.hover_label(Some(4)).is_empty());
    }

    #[test]
    fn leaving_the_track_clears_the_hovered_book() {
        let mut scrubber = controller_at("Genesis", 1);
        scrubber.pointer_entered();
        scrubber.hover_label(Some(10));
        scrubber.pointer_left();
        assert_eq!(scrubber.hovered_book(), None);
    }

    #[test]
    fn reading_position_updates_relayout_visible_labels() {
        let mut scrubber = controller_at("Genesis", 1);
        let effects = scrubber
            .set_reading_position(&ChapterPosition::new("Exodus", 2))
            .unwrap();
        assert!(effects.is_empty());

        scrubber.pointer_entered();
        let effects = scrubber
            .set_reading_position(&ChapterPosition::new("Exodus", 3))
            .unwrap();
        assert!(scheduled_generation(&effects).is_some());
        assert!(
            scrubber
                .set_reading_position(&ChapterPosition::new("Psalm", 3))
                .is_err()
        );
    }

    #[test]
    fn only_the_newest_layout_request_is_committed() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);

        let first = scheduled_generation(&scrubber.pointer_entered()).unwrap();
        let second = scheduled_generation(&scrubber.hover_label(Some(2))).unwrap();
        assert_ne!(first, second);

        assert!(scrubber.commit_label_layout(first, &geometry).is_none());
        assert!(scrubber.commit_label_layout(second, &geometry).is_some());
        assert!(scrubber.commit_label_layout(second, &geometry).is_none());
    }

    #[test]
    fn hidden_labels_drop_pending_layout() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Genesis", 1);
        let generation = scheduled_generation(&scrubber.pointer_entered()).unwrap();
        scrubber.pointer_left();
        assert!(scrubber.commit_label_layout(generation, &geometry).is_none());
    }

    #[test]
    fn panel_emphasizes_thumb_book_and_hovered_book() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let mut scrubber = controller_at("Psalms", 23);
        scrubber.pointer_entered();
        scrubber.hover_label(Some(0));

        let panel = scrubber.label_panel(&geometry);
        let emphasized: Vec<&str> = panel
            .labels
            .iter()
            .filter(|label| label.emphasized)
            .map(|label| label.name)
            .collect();
        assert_eq!(emphasized, vec!["Genesis", "Psalms"]);
        assert_eq!(panel.labels[0].scale, 2.0);
        assert_eq!(panel.labels[0].font_size, 16.0);
    }

    #[test]
    fn focused_label_sits_on_the_thumb() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let scrubber = controller_at("Isaiah", 40);
        let panel = scrubber.label_panel(&geometry);
        let isaiah = panel
            .labels
            .iter()
            .find(|label| label.name == "Isaiah")
            .unwrap();
        assert!((isaiah.center_y - panel.thumb_y).abs() < 1e-2);
        assert!((panel.thumb_y - panel.buffer_top - scrubber.thumb_y(&geometry)).abs() < 1e-3);
        assert_eq!(panel.origin.x, 304.0);
        assert_eq!(panel.origin.y, 50.0 - panel.buffer_top);
        assert!(
            (panel.height - geometry.height - panel.buffer_top - panel.buffer_bottom).abs() < 1e-3
        );
    }

    #[test]
    fn label_rows_are_hit_tested_by_y() {
        let geometry = FixedGeometry::one_pixel_per_chapter();
        let scrubber = controller_at("Genesis", 1);
        let panel = scrubber.label_panel(&geometry);
        let exodus = &panel.labels[1];
        assert_eq!(panel.label_at(exodus.center_y), Some(1));
    }

    #[test]
    fn enlarged_hovered_label_does_not_swallow_its_neighbour() {
        let geometry = FixedGeometry { height: 768.0 };
        let mut scrubber = controller_at("Genesis", 1);
        scrubber.pointer_entered();
        for hovered in 0..65 {
            scrubber.hover_label(Some(hovered));
            let panel = scrubber.label_panel(&geometry);
            let below = &panel.labels[hovered + 1];
            assert_eq!(panel.label_at(below.center_y), Some(hovered + 1), "below {}", below.name);
            assert_eq!(panel.label_at(panel.labels[hovered].center_y), Some(hovered));
        }
    }

    #[test]
    fn collapsed_surface_is_a_valid_degenerate_input() {
        let geometry = FixedGeometry { height: 0.0 };
        let mut scrubber = controller_at("Genesis", 1);
        let effects = scrubber.drag_began(250.0, &geometry);
        assert_eq!(navigations(&effects), vec![ChapterPosition::new("Genesis", 1)]);
        let panel = scrubber.label_panel(&geometry);
        assert_eq!(panel.labels.len(), 66);
        assert!(panel.labels.iter().all(|label| label.center_y.is_finite()));
    }

    #[test]
    fn leaving_the_panel_clears_the_hovered_book() {
        let mut scrubber = controller_at("Genesis", 1);
        scrubber.pointer_entered();
        scrubber.hover_label(Some(7));
        assert_eq!(scrubber.hovered_book(), Some(7));

        let effects = scrubber.label_panel_left();
        assert_eq!(scrubber.hovered_book(), None);
        assert!(scheduled_generation(&effects).is_some());
    }
}
