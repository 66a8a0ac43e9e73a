/// Dashboard screen: header card with quick stats, plus the comparator
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::state::comparator::ComparatorForm;
use crate::{Message, Screen};

use super::comparator;

pub fn view(form: &ComparatorForm) -> Element<'_, Message> {
    let stat = |value: &'static str, label: &'static str| {
        container(
            column![text(value).size(24), text(label).size(11)]
                .spacing(4)
                .align_x(Alignment::Center),
        )
        .style(container::rounded_box)
        .padding(12)
        .width(Length::Fill)
    };

    let header = container(
        column![
            text("🐶 Dog Face Comparison").size(30),
            text("AI-powered facial recognition to compare dog images using deep learning")
                .size(14),
            row![
                stat("2", "PAIRS"),
                stat("4", "IMAGES"),
                stat("<3s", "SPEED"),
            ]
            .spacing(10),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(20)
    .width(Length::Fixed(540.0));

    let content = column![
        row![
            button(text("← Back")).on_press(Message::Navigate(Screen::Home)).style(button::text),
        ],
        header,
        comparator::view(form),
    ]
    .spacing(20)
    .padding(30)
    .align_x(Alignment::Center);

    scrollable(
        container(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
