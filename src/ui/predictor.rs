/// Single-image predictor screen
use iced::widget::{button, column, container, image, progress_bar, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::predictor::PredictorForm;
use crate::{Message, Screen};

pub fn view(form: &PredictorForm) -> Element<'_, Message> {
    let slot_content: Element<Message> = match form.slot.preview() {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(240.0))
            .into(),
        None => text("📤 Click to upload image").size(16).into(),
    };

    let upload_box = button(
        container(slot_content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::PredictorPick)
    .style(button::secondary)
    .width(Length::Fixed(340.0))
    .height(Length::Fixed(260.0));

    let submit_label = if form.in_flight {
        "⏳ Predicting..."
    } else {
        "🚀 Predict"
    };
    let submit = button(text(submit_label))
        .on_press_maybe(form.can_submit().then_some(Message::PredictorSubmit))
        .padding(12);

    let mut content: Column<Message> = column![
        row![
            button(text("← Back")).on_press(Message::Navigate(Screen::Home)).style(button::text),
            text("ML Prediction").size(28),
        ]
        .spacing(15)
        .align_y(Alignment::Center),
        upload_box,
        submit,
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    if form.in_flight && form.progress.value() > 0.0 {
        content = content.push(
            progress_bar(0.0..=100.0, form.progress.value())
                .width(Length::Fixed(340.0))
                .height(Length::Fixed(8.0)),
        );
    }

    if let Some(error) = &form.error {
        content = content.push(text(format!("⚠️ {}", error.message)).size(14));
    }

    if let Some(result) = &form.result {
        content = content.push(
            container(
                column![
                    text("🧠 Prediction Result").size(20),
                    text(format!(
                        "Model 1: {}",
                        result.model1_prediction.as_deref().unwrap_or("-")
                    )),
                    text(format!(
                        "Model 2: {}",
                        result.model2_prediction.as_deref().unwrap_or("-")
                    )),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .style(container::rounded_box)
            .padding(20),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
