// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::toast::{ToastEntry, ToastKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast::Toaster;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toaster: &'a Toaster,
    pub visible: &'a [ToastEntry],
    pub dismiss_time_ms: u128,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Toast playground").size(typography::TITLE_MD);
    let hint = Text::new(format!(
        "Toasts disappear after {} ms unless dismissed.",
        ctx.dismiss_time_ms
    ))
    .size(typography::CAPTION);

    let kind_buttons = [
        ("Success", ToastKind::Success),
        ("Info", ToastKind::Info),
        ("Warning", ToastKind::Warning),
        ("Error", ToastKind::Error),
        ("Unknown kind", ToastKind::Other("custom".to_string())),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (label, kind)| {
        row.push(demo_button(label, Message::Show(kind)))
    });

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(kind_buttons)
        .push(demo_button("Long toast", Message::ShowLong));

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(content)
        .push(ctx.toaster.view(ctx.visible).map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn demo_button(label: &str, message: Message) -> Element<'_, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::SM])
    .on_press(message)
    .into()
}
