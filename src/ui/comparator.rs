/// Four-image comparator form and its results
use iced::widget::{button, column, container, image, progress_bar, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::api::types::{Analysis, MatchDetails, Summary};
use crate::state::comparator::{ComparatorForm, SlotKey};
use crate::Message;

use super::tier_color;

pub fn view(form: &ComparatorForm) -> Element<'_, Message> {
    let pair1 = row![
        slot_view(form, SlotKey::Muzzle1),
        slot_view(form, SlotKey::Face1),
    ]
    .spacing(15);

    let pair2 = row![
        slot_view(form, SlotKey::Muzzle2),
        slot_view(form, SlotKey::Face2),
    ]
    .spacing(15);

    let compare_label = if form.in_flight {
        "⏳ Analyzing..."
    } else {
        "Compare"
    };
    let mut buttons = row![].spacing(15);
    if form.has_any_image() {
        buttons = buttons.push(
            button(text("Clear"))
                .on_press_maybe((!form.in_flight).then_some(Message::ComparatorClear))
                .style(button::danger)
                .padding(12),
        );
    }
    buttons = buttons.push(
        button(text(compare_label))
            .on_press_maybe(form.can_submit().then_some(Message::ComparatorSubmit))
            .padding(12),
    );

    let mut content: Column<Message> = column![pair1, pair2, buttons]
        .spacing(15)
        .align_x(Alignment::Center);

    if form.in_flight && form.progress.value() > 0.0 {
        content = content.push(
            progress_bar(0.0..=100.0, form.progress.value())
                .width(Length::Fixed(320.0))
                .height(Length::Fixed(8.0)),
        );
    }

    if let Some(error) = &form.error {
        content = content.push(text(format!("⚠️ {}", error.message)).size(14));
    }

    if let Some(result) = &form.result {
        content = content.push(text("Results").size(22));
        content = content.push(
            row![pair_card(&result.pair1), pair_card(&result.pair2)]
                .spacing(15)
                .width(Length::Fixed(480.0)),
        );
        if let Some(analysis) = &result.analysis {
            content = content.push(analysis_view(analysis, result.summary.as_ref()));
        }
    }

    container(content)
        .style(container::rounded_box)
        .padding(25)
        .into()
}

fn slot_view(form: &ComparatorForm, key: SlotKey) -> Element<'_, Message> {
    let icon = match key.label() {
        "Muzzle" => "👃",
        _ => "🐕",
    };

    let inner: Element<Message> = match form.slot(key).preview() {
        Some(handle) => column![
            text(key.badge()).size(12),
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(110.0)),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into(),
        None => column![text(icon).size(32), text(key.label()).size(14)]
            .spacing(6)
            .align_x(Alignment::Center)
            .into(),
    };

    button(
        container(inner)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::ComparatorPick(key))
    .style(button::secondary)
    .width(Length::Fixed(150.0))
    .height(Length::Fixed(155.0))
    .into()
}

fn pair_card(details: &MatchDetails) -> Element<'_, Message> {
    let color = tier_color(&details.color);

    container(
        column![
            text(details.label.clone().unwrap_or_default()).size(12),
            text(format!("{}%", details.similarity_percentage))
                .size(28)
                .style(move |_theme| text::Style { color: Some(color) }),
            text(details.match_status.clone())
                .size(14)
                .style(move |_theme| text::Style { color: Some(color) }),
            progress_bar(0.0..=100.0, details.similarity_percentage as f32)
                .height(Length::Fixed(6.0)),
            text(details.recommendation.clone()).size(12),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(16)
    .width(Length::Fill)
    .into()
}

fn analysis_view<'a>(analysis: &'a Analysis, summary: Option<&'a Summary>) -> Element<'a, Message> {
    let stat = |label: &'static str, value: String| {
        column![text(label).size(11), text(value).size(16)]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Length::Fill)
    };

    let mut stats = row![
        stat("AVG", format!("{}%", analysis.average_similarity)),
        stat("CONSISTENCY", analysis.consistency.clone()),
        stat("DIFF", format!("{}%", analysis.similarity_difference)),
    ]
    .spacing(10);

    if let Some(summary) = summary {
        stats = stats.push(stat("CONFIDENCE", summary.overall_confidence.clone()));
    }

    container(column![text("Analysis").size(14), stats].spacing(10).align_x(Alignment::Center))
        .style(container::rounded_box)
        .padding(16)
        .width(Length::Fixed(480.0))
        .into()
}
