/// Landing screen: title, blurb, navigation into the two workflows
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::{Message, Screen};

pub fn view() -> Element<'static, Message> {
    let feature = |title: &'static str, body: &'static str| {
        container(column![text(title).size(18), text(body).size(13)].spacing(8))
            .style(container::rounded_box)
            .padding(20)
            .width(Length::Fill)
    };

    let content = column![
        text("🐶 PawMatch").size(48),
        text("Upload dog photos and get predictions and identity matches from the PawMatch inference service.").size(16),
        row![
            button(text("Go to Dashboard 🚀"))
                .on_press(Message::Navigate(Screen::Dashboard))
                .padding(12),
            button(text("Single-Image Predictor"))
                .on_press(Message::Navigate(Screen::Predictor))
                .padding(12)
                .style(button::secondary),
        ]
        .spacing(15),
        row![
            feature("⚡ Fast", "Results in a few seconds per comparison."),
            feature("🔒 Private", "Images go straight to your configured backend."),
            feature("📊 Smart", "Multiple models cross-checked for reliable output."),
        ]
        .spacing(20),
    ]
    .spacing(30)
    .padding(40)
    .align_x(Alignment::Center)
    .max_width(800);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
