// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! A [`Toaster`] draws the active toasts as a stacked overlay anchored to one
//! corner. Each toast is delegated to a render function; [`default_toast`]
//! draws a card with a kind-colored accent and a dismiss button.

use crate::config::ToastPosition;
use crate::toast::{ToastEntry, ToastId};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::fmt;

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss affordance of a toast was pressed.
    Dismiss(ToastId),
}

/// Signature of a per-toast render function.
pub type RenderToast = dyn for<'a> Fn(&'a ToastEntry) -> Element<'a, Message>;

/// Presentation settings for the toast overlay.
pub struct Toaster {
    render: Box<RenderToast>,
    position: ToastPosition,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            render: Box::new(default_toast),
            position: ToastPosition::default(),
        }
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl Toaster {
    /// Creates a toaster using [`default_toast`] in the bottom-right corner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the per-toast render function.
    #[must_use]
    pub fn with_renderer<F>(mut self, render: F) -> Self
    where
        F: for<'a> Fn(&'a ToastEntry) -> Element<'a, Message> + 'static,
    {
        self.render = Box::new(render);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn current_position(&self) -> ToastPosition {
        self.position
    }

    /// Renders one toast with the configured render function.
    pub fn view_toast<'a>(&self, entry: &'a ToastEntry) -> Element<'a, Message> {
        (self.render)(entry)
    }

    /// Renders all `entries` (newest first) stacked in the configured corner.
    pub fn view<'a>(&self, entries: &'a [ToastEntry]) -> Element<'a, Message> {
        if entries.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor(self.position);
        let toasts: Vec<Element<'a, Message>> =
            entries.iter().map(|entry| self.view_toast(entry)).collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Maps a corner to the overlay alignment.
fn anchor(position: ToastPosition) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal, Vertical};

    match position {
        ToastPosition::TopLeft => (Horizontal::Left, Vertical::Top),
        ToastPosition::TopRight => (Horizontal::Right, Vertical::Top),
        ToastPosition::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        ToastPosition::BottomRight => (Horizontal::Right, Vertical::Bottom),
    }
}

/// Default toast card: `[KIND] [message] [x]`.
///
/// Unknown kinds get no accent color and a thin neutral outline.
pub fn default_toast(entry: &ToastEntry) -> Element<'_, Message> {
    let accent = entry.kind().color();

    let label = Text::new(entry.kind().as_str().to_uppercase())
        .size(typography::CAPTION)
        .style(move |theme: &Theme| text::Style {
            color: Some(accent.unwrap_or(theme.palette().text)),
        });

    let message = Text::new(entry.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("\u{00d7}").size(typography::BODY))
        .on_press(Message::Dismiss(entry.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(label).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

fn toast_container_style(theme: &Theme, accent: Option<Color>) -> container::Style {
    let palette = theme.extended_palette();
    let (border_color, border_width) = match accent {
        Some(color) => (color, border::WIDTH_MD),
        None => (palette.background.strong.color, border::WIDTH_SM),
    };

    container::Style {
        background: Some(iced::Background::Color(palette.background.base.color)),
        border: iced::Border {
            color: border_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
