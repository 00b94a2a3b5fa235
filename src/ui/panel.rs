// SPDX-License-Identifier: MPL-2.0
//! Panel view: header, scale readout, slider, presets and actions.

use crate::app::Message;
use crate::panel::scale::Preset;
use crate::panel::PanelController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{
    button as button_styles, container as container_styles, slider as slider_styles, tooltip,
};
use iced::widget::tooltip::Position;
use iced::widget::{button, slider, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the visible panel, centered in the window.
pub fn view(panel: &PanelController) -> Element<'_, Message> {
    let texts = panel.texts();

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header(panel))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(texts.label.as_str()).size(typography::BODY))
                .push(Text::new(texts.description.as_str()).size(typography::CAPTION)),
        )
        .push(readout(panel))
        .push(scale_slider(panel));

    if let Some(presets) = presets(panel) {
        content = content.push(presets);
    }

    content = content
        .push(actions(panel))
        .push(Text::new(texts.help.as_str()).size(typography::CAPTION));

    let card = Container::new(content)
        .width(Length::Fixed(panel.layout().panel_width()))
        .padding(spacing::LG)
        .style(container_styles::panel);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn header(panel: &PanelController) -> Element<'_, Message> {
    let texts = panel.texts();
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(texts.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(texts.subtitle.as_str()).size(typography::BODY_SM));

    let close = button(Text::new("×").size(sizing::ICON_MD))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(button_styles::close);

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(titles).width(Length::Fill))
        .push(tooltip::styled(close, &texts.tooltip_close, Position::Left))
        .into()
}

fn readout(panel: &PanelController) -> Element<'_, Message> {
    let value = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Bottom)
        .push(Text::new(panel.readout()).size(typography::DISPLAY))
        .push(Text::new(panel.texts().scale_unit.as_str()).size(typography::BODY));

    Container::new(value)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .style(container_styles::readout)
        .into()
}

fn scale_slider(panel: &PanelController) -> Element<'_, Message> {
    let texts = panel.texts();
    let bounds = panel.bounds();
    // An inverted range pins every value to `min`; keep the widget range valid.
    let upper = bounds.max.max(bounds.min);

    let control = slider(bounds.min..=upper, panel.scale(), Message::SliderChanged)
        .step(panel.config().scale_step)
        .style(slider_styles::scale);

    let labels = Row::new()
        .push(Text::new(texts.slider_min.as_str()).size(typography::CAPTION))
        .push(Container::new(text("")).width(Length::Fill))
        .push(Text::new(texts.slider_max.as_str()).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::XXS)
        .push(tooltip::styled(control, &texts.tooltip_slider, Position::Top))
        .push(labels)
        .into()
}

fn presets<'a>(panel: &'a PanelController) -> Option<Element<'a, Message>> {
    let presets: Vec<(Preset, bool)> = panel.presets().collect();
    if presets.is_empty() {
        return None;
    }
    let texts = panel.texts();

    let rows = presets
        .chunks(panel.layout().presets_per_row())
        .map(|chunk| -> Element<'a, Message> {
            chunk
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, (preset, active)| {
                    let label =
                        Container::new(Text::new(texts.preset_label(preset)).size(typography::BODY_SM))
                            .width(Length::Fill)
                            .align_x(alignment::Horizontal::Center);
                    let preset_button = button(label)
                        .width(Length::Fill)
                        .padding(spacing::XS)
                        .on_press(Message::PresetSelected(*preset))
                        .style(button_styles::preset(*active));
                    row.push(tooltip::styled(preset_button, &texts.tooltip_preset, Position::Top))
                })
                .into()
        });

    Some(Column::with_children(rows).spacing(spacing::XS).into())
}

fn actions(panel: &PanelController) -> Element<'_, Message> {
    let texts = panel.texts();
    let label = panel.apply_label();

    let reset = button(
        Container::new(Text::new(texts.reset.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press(Message::Reset)
    .style(button_styles::secondary);

    let apply = button(
        Container::new(Text::new(label.text).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::FillPortion(2))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press(Message::Apply)
    .style(button_styles::apply(label.has_info));

    Row::new()
        .spacing(spacing::SM)
        .push(tooltip::styled(reset, &texts.tooltip_reset, Position::Top))
        .push(tooltip::styled(apply, &texts.tooltip_apply, Position::Top))
        .into()
}
