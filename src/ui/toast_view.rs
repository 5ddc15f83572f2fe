// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toast stack.
//!
//! Toasts are drawn as cards with a status-colored border, stacked at the
//! configured anchor. Text, icon and button labels all come from the
//! [`ToastPresentation`] model so the headless and Iced renderings agree.

use crate::toast::presentation::{IconGlyph, IconSlot};
use crate::toast::{Alignment, Position, ToastPresentation, ToastRecord, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::theming::ColorScheme;
use crate::ui::toaster::{Message, Toaster};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders every visible toast at the toaster's anchor.
pub fn view_overlay(toaster: &Toaster) -> Element<'_, Message> {
    let scheme = ColorScheme::for_mode(toaster.theme());
    let position = toaster.config().position;

    let toasts: Vec<Element<'_, Message>> = toaster
        .entries()
        .map(|(record, presentation)| view_toast(record, presentation, &scheme, toaster))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let (horizontal, vertical) = anchor(position);
    let stack = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

fn view_toast<'a>(
    record: &'a ToastRecord,
    presentation: ToastPresentation,
    scheme: &ColorScheme,
    toaster: &Toaster,
) -> Element<'a, Message> {
    let id = record.id().clone();
    let exiting = toaster
        .lifecycle(&id)
        .is_some_and(|lifecycle| lifecycle.is_exiting());
    let active = presentation.z_index == crate::toast::presentation::ACTIVE_Z_INDEX;
    let fade = if exiting { opacity::EXITING } else { opacity::OPAQUE };

    let primary = faded(scheme.text_primary, fade);
    let secondary = faded(scheme.text_secondary, fade);

    let mut body = Column::new().spacing(spacing::XXS).push(
        Text::new(presentation.text)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(primary),
            }),
    );
    if let Some(description) = presentation.description {
        body = body.push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(secondary),
                }),
        );
    }

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = presentation.icon {
        content = content.push(Container::new(icon_widget(&icon, primary, fade)).padding(spacing::XXS));
    }
    content = content.push(
        Container::new(body)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
    );

    let mut actions = Row::new().spacing(spacing::XXS);
    if let Some(action) = presentation.action_button {
        actions = actions.push(
            button(Text::new(action.label).size(typography::BODY_SM))
                .on_press(Message::ActionPressed(id.clone()))
                .padding(spacing::XXS)
                .style(action_button_style),
        );
    }
    actions = actions.push(
        button(Text::new(presentation.close_button.label).size(typography::BODY_SM))
            .on_press(Message::CloseRequested(id.clone()))
            .padding(spacing::XXS)
            .style(dismiss_button_style),
    );
    content = content.push(actions);

    let accent = presentation.status.and_then(accent_color);
    let surface = scheme.clone();
    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_container_style(&surface, accent, active, fade));

    mouse_area(card)
        .on_enter(Message::Hovered(id.clone(), true))
        .on_exit(Message::Hovered(id, false))
        .into()
}

fn icon_widget<'a>(icon: &IconSlot, text_color: Color, fade: f32) -> Element<'a, Message> {
    let (glyph, color) = match &icon.glyph {
        IconGlyph::Builtin(variant) => (
            builtin_glyph(*variant).to_string(),
            accent_color(*variant).unwrap_or(text_color),
        ),
        IconGlyph::Custom(glyph) => (glyph.clone(), text_color),
    };
    let color = faded(color, fade);
    Text::new(glyph)
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}

fn builtin_glyph(variant: Variant) -> &'static str {
    match variant {
        Variant::Success => "\u{2714}",
        Variant::Error => "\u{2716}",
        Variant::Warning => "\u{26a0}",
        Variant::Info => "\u{2139}",
        Variant::Loading => "\u{25cc}",
    }
}

/// Status color for borders and icons. Loading follows the text color.
fn accent_color(variant: Variant) -> Option<Color> {
    match variant {
        Variant::Success => Some(palette::SUCCESS),
        Variant::Error => Some(palette::ERROR),
        Variant::Warning => Some(palette::WARNING),
        Variant::Info => Some(palette::INFO),
        Variant::Loading => None,
    }
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position.alignment() {
        Alignment::Left => alignment::Horizontal::Left,
        Alignment::Center => alignment::Horizontal::Center,
        Alignment::Right => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(
    scheme: &ColorScheme,
    accent: Option<Color>,
    active: bool,
    fade: f32,
) -> container::Style {
    let width = if active {
        border::WIDTH_MD
    } else {
        border::WIDTH_SM
    };

    container::Style {
        background: Some(iced::Background::Color(faded(scheme.surface, fade))),
        border: iced::Border {
            color: faded(accent.unwrap_or(scheme.border), fade),
            width,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(faded(scheme.text_primary, fade)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Pressed {
                    opacity::OVERLAY_MEDIUM
                } else {
                    opacity::OVERLAY_SUBTLE
                },
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
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

/// Style function for the action button: outlined, otherwise like close.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let style = dismiss_button_style(theme, status);

    button::Style {
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_style_uses_status_accent() {
        let scheme = ColorScheme::light();
        let style = toast_container_style(&scheme, Some(palette::SUCCESS), true, opacity::OPAQUE);

        assert_eq!(style.border.color, palette::SUCCESS);
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert!(style.background.is_some());
    }

    #[test]
    fn container_style_without_status_uses_scheme_border() {
        let scheme = ColorScheme::dark();
        let style = toast_container_style(&scheme, None, false, opacity::OPAQUE);

        assert_eq!(style.border.color, scheme.border);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn exiting_toast_is_faded() {
        let scheme = ColorScheme::light();
        let style = toast_container_style(&scheme, None, true, opacity::EXITING);

        assert!((style.border.color.a - opacity::EXITING).abs() < f32::EPSILON);
    }

    #[test]
    fn loading_has_no_accent() {
        assert_eq!(accent_color(Variant::Loading), None);
        for variant in [Variant::Success, Variant::Error, Variant::Warning, Variant::Info] {
            assert!(accent_color(variant).is_some());
        }
    }

    #[test]
    fn anchors_map_to_alignment() {
        assert_eq!(
            anchor(Position::TopCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn action_button_is_outlined() {
        let style = action_button_style(&Theme::Light, button::Status::Active);
        assert!((style.border.width - border::WIDTH_SM).abs() < f32::EPSILON);
    }
}
