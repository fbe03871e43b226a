use super::messages::Message;
use super::scrubber_canvas::ScrubberCanvas;
use super::state::App;
use iced::alignment::Vertical;
use iced::widget::{Column, button, canvas, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};
use scrubber_core::canon;
use scrubber_core::position::{next_chapter, previous_chapter, track_fraction};

const HISTORY_PANEL_WIDTH: f32 = 220.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut content = row![self.reading_pane()].height(Length::Fill);
        if self.history.visible {
            content = content.push(self.history_panel());
        }
        content.push(self.scrubber_view()).into()
    }

    fn reading_pane(&self) -> Element<'_, Message> {
        let position = &self.reader.position;

        let prev_button = button("Previous")
            .on_press_maybe(previous_chapter(position).map(|_| Message::PreviousChapter));
        let next_button =
            button("Next").on_press_maybe(next_chapter(position).map(|_| Message::NextChapter));
        let bookmark_toggle = button(if self.reader.is_bookmarked() {
            "Remove Bookmark"
        } else {
            "Bookmark"
        })
        .on_press(Message::ToggleBookmark);
        let history_toggle = button(if self.history.visible {
            "Hide History"
        } else {
            "History"
        })
        .on_press(Message::ToggleHistory);
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let theme_toggle = button(theme_label).on_press(Message::ToggleTheme);

        let controls = row![
            prev_button,
            next_button,
            horizontal_space(),
            bookmark_toggle,
            history_toggle,
            theme_toggle
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let book_idx = canon::book_index(&position.book_name).unwrap_or(0);
        let chapter_count = canon::chapter_count(&position.book_name).unwrap_or(0);
        let testament = if canon::is_old_testament(book_idx) {
            "Old Testament"
        } else {
            "New Testament"
        };
        let global_index = position.global_index().unwrap_or(0);

        let details = column![
            text(position.to_string()).size(40),
            text(format!(
                "{testament} · Book {} of {} · Chapter {} of {}",
                book_idx + 1,
                canon::BOOKS.len(),
                position.chapter_number,
                chapter_count
            ))
            .size(16),
            text(format!(
                "Chapter {} of {} ({:.1}% through)",
                global_index + 1,
                canon::total_chapters(),
                track_fraction(global_index) * 100.0
            ))
            .size(14),
        ]
        .spacing(8);

        container(column![controls, details].spacing(24))
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn history_panel(&self) -> Element<'_, Message> {
        let header = row![
            text("History").size(18),
            horizontal_space(),
            button("Clear").on_press_maybe(
                (!self.history.entries.is_empty()).then_some(Message::ClearHistory)
            )
        ]
        .align_y(Vertical::Center);

        let entries = if self.history.entries.is_empty() {
            Column::new().push(text("No history yet").size(14))
        } else {
            self.history
                .entries
                .entries()
                .enumerate()
                .fold(Column::new().spacing(4), |list, (idx, entry)| {
                    list.push(
                        button(text(entry.label.clone()).size(14))
                            .on_press(Message::OpenHistoryEntry(idx))
                            .width(Length::Fill),
                    )
                })
        };

        container(column![header, scrollable(entries).height(Length::Fill)].spacing(12))
            .padding(12)
            .width(Length::Fixed(HISTORY_PANEL_WIDTH))
            .height(Length::Fill)
            .into()
    }

    fn scrubber_view(&self) -> Element<'_, Message> {
        canvas(ScrubberCanvas {
            scrubber: &self.scrubber,
            markers: self.scrubber.placed_markers(&self.reader.markers),
            scrubber_width: self.config.scrubber_width,
            marker_size: self.config.marker_size,
        })
        .width(Length::Fixed(self.config.scrubber_surface_width()))
        .height(Length::Fill)
        .into()
    }
}
