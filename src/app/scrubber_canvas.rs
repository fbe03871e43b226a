//! Canvas program for the scrubber: the track, thumb and marker glyphs in the
//! right-hand column, and the book label panel to its left while visible.

use super::messages::Message;
use super::state::ScrubberState;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, event};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};
use scrubber_core::markers::{MarkerKind, PlacedMarker};
use scrubber_core::scrubber::LabelPanel;

const TRACK_WIDTH: f32 = 2.0;
const THUMB_SIZE: f32 = 8.0;
const LABEL_PADDING_X: f32 = 6.0;

pub(super) struct ScrubberCanvas<'a> {
    pub(super) scrubber: &'a ScrubberState,
    pub(super) markers: Vec<PlacedMarker>,
    pub(super) scrubber_width: f32,
    pub(super) marker_size: f32,
}

/// What the pointer was last reported over, so only changes become messages.
#[derive(Debug, Default)]
pub(super) struct PointerState {
    over_track: bool,
    label: Option<usize>,
    pressed: bool,
}

impl ScrubberCanvas<'_> {
    fn track_column_left(&self, bounds: Rectangle) -> f32 {
        (bounds.width - self.scrubber_width).max(0.0)
    }

    fn in_track_column(&self, x: f32, bounds: Rectangle) -> bool {
        x >= self.track_column_left(bounds) && x <= bounds.width
    }

    fn panel(&self) -> Option<&LabelPanel> {
        self.scrubber.panel.as_ref()
    }

    fn over_panel(&self, point: Point) -> bool {
        self.panel().is_some_and(|panel| {
            point.x >= panel.origin.x && point.x <= panel.origin.x + panel.width
        })
    }

    fn label_at(&self, point: Point) -> Option<usize> {
        if !self.over_panel(point) {
            return None;
        }
        self.panel()
            .and_then(|panel| panel.label_at(point.y - panel.origin.y))
    }

    fn hover_update(
        &self,
        state: &mut PointerState,
        local: Option<Point>,
        bounds: Rectangle,
    ) -> (event::Status, Option<Message>) {
        let over_track = local
            .is_some_and(|point| self.in_track_column(point.x, bounds) || self.over_panel(point));
        let label = local.and_then(|point| self.label_at(point));
        if over_track == state.over_track && label == state.label {
            return (event::Status::Ignored, None);
        }
        state.over_track = over_track;
        state.label = label;
        (
            event::Status::Ignored,
            Some(Message::ScrubberHover {
                over_track,
                label,
                surface_height: bounds.height,
            }),
        )
    }

    fn marker_color(&self, kind: MarkerKind, theme: &Theme) -> Color {
        match kind {
            MarkerKind::Highlight(color) => {
                let [r, g, b, a] = color.scrubber_rgba();
                Color::from_rgba(r, g, b, a)
            }
            MarkerKind::Bookmark => theme.palette().danger,
            MarkerKind::Note => theme.palette().success,
        }
    }
}

impl canvas::Program<Message> for ScrubberCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let canvas::Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };

        match mouse_event {
            mouse::Event::CursorMoved { position } => {
                if state.pressed {
                    return (
                        event::Status::Captured,
                        Some(Message::ScrubberDragged {
                            y: position.y - bounds.y,
                            surface_height: bounds.height,
                        }),
                    );
                }
                self.hover_update(state, cursor.position_in(bounds), bounds)
            }
            mouse::Event::CursorLeft => self.hover_update(state, None, bounds),
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(local) = cursor.position_in(bounds) else {
                    return (event::Status::Ignored, None);
                };
                if self.in_track_column(local.x, bounds) {
                    state.pressed = true;
                    return (
                        event::Status::Captured,
                        Some(Message::ScrubberPressed {
                            y: local.y,
                            surface_height: bounds.height,
                        }),
                    );
                }
                match self.label_at(local) {
                    Some(idx) => (event::Status::Captured, Some(Message::LabelTapped(idx))),
                    None => (event::Status::Ignored, None),
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if state.pressed => {
                state.pressed = false;
                (event::Status::Captured, Some(Message::ScrubberReleased))
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.palette();
        let controller = &self.scrubber.controller;
        let span = controller.track_span(&self.scrubber.geometry);
        let track_x = self.track_column_left(bounds) + self.scrubber_width / 2.0;

        frame.fill_rectangle(
            Point::new(track_x - TRACK_WIDTH / 2.0, span.top),
            Size::new(TRACK_WIDTH, span.height),
            Color {
                a: 0.3,
                ..palette.text
            },
        );

        let radius = self.marker_size / 2.0;
        for marker in &self.markers {
            let center = Point::new(track_x + marker.x_offset, marker.y);
            frame.fill(&Path::circle(center, radius), self.marker_color(marker.kind, theme));
        }

        let thumb = Point::new(track_x, controller.thumb_y(&self.scrubber.geometry));
        frame.fill(&Path::circle(thumb, THUMB_SIZE / 2.0), palette.primary);

        if let Some(panel) = self.panel() {
            frame.fill_rectangle(
                Point::new(panel.origin.x, 0.0),
                Size::new(panel.width, bounds.height),
                Color {
                    a: 0.85,
                    ..palette.background
                },
            );
            for label in &panel.labels {
                let y = panel.origin.y + label.center_y;
                let row_height = label.font_size + 2.0;
                if y + row_height < 0.0 || y - row_height > bounds.height {
                    continue;
                }
                if label.emphasized {
                    frame.fill_rectangle(
                        Point::new(panel.origin.x, y - row_height / 2.0),
                        Size::new(panel.width, row_height),
                        Color {
                            a: 0.15,
                            ..palette.primary
                        },
                    );
                }
                let prominent = label.emphasized || label.scale > 1.3;
                frame.fill_text(canvas::Text {
                    content: label.name.to_string(),
                    position: Point::new(panel.origin.x + LABEL_PADDING_X, y),
                    color: if prominent {
                        palette.text
                    } else {
                        Color {
                            a: 0.55,
                            ..palette.text
                        }
                    },
                    size: Pixels(label.font_size),
                    horizontal_alignment: Horizontal::Left,
                    vertical_alignment: Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(point) if self.in_track_column(point.x, bounds) => mouse::Interaction::Grab,
            Some(point) if self.label_at(point).is_some() => mouse::Interaction::Pointer,
            _ => mouse::Interaction::default(),
        }
    }
}
