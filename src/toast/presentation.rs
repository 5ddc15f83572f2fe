// SPDX-License-Identifier: MPL-2.0
//! Headless description of how a toast should be presented.
//!
//! This is what an HTML host needs to render toasts against the stock
//! stylesheet: class lists per region, accessibility ids, z-order, button
//! labels, and the text currently shown. The Iced surface uses the same
//! model for its text and icon decisions.

use super::classes::{self, ClassList};
use super::lifecycle::{LoadingState, Resolution, ToastLifecycle};
use super::record::ToastRecord;
use super::types::{Position, Variant};
use crate::config::{ToastOptions, CLOSE_BUTTON_TITLE, SECTION_LABEL};
use crate::ui::theming::ThemeMode;

/// z-index of the toast drawn on top.
pub const ACTIVE_Z_INDEX: u16 = 1000;
/// z-index of every other toast.
pub const INACTIVE_Z_INDEX: u16 = 999;

/// Icon fill for a variant, as a CSS color.
#[must_use]
pub fn icon_color(variant: Variant) -> &'static str {
    match variant {
        Variant::Success => "#22c55e",
        Variant::Error => "#ef4444",
        Variant::Warning => "#eab308",
        Variant::Info => "#3b82f6",
        Variant::Loading => "currentColor",
    }
}

/// Toaster-wide settings that affect presentation.
#[derive(Debug, Clone, Copy)]
pub struct PresentationContext<'a> {
    pub position: Position,
    pub theme: ThemeMode,
    pub options: &'a ToastOptions,
    pub reduced_motion: bool,
}

/// The `<section>` holding the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPresentation {
    pub class: ClassList,
    pub aria_label: &'static str,
    pub role: &'static str,
    pub aria_live: &'static str,
}

impl SectionPresentation {
    #[must_use]
    pub fn new(position: Position, options: &ToastOptions) -> Self {
        let class = ClassList::new()
            .with(classes::TOASTS)
            .with(classes::position_class(position))
            .with(options.font.as_deref().unwrap_or(classes::DEFAULT_FONT));
        Self {
            class,
            aria_label: SECTION_LABEL,
            role: "alert",
            aria_live: "polite",
        }
    }
}

/// What goes in the icon slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconGlyph {
    /// Built-in icon for the variant currently shown.
    Builtin(Variant),
    /// Caller or toaster supplied glyph.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlot {
    /// Class of the slot wrapper.
    pub class: ClassList,
    /// Class of the glyph itself (`t_loading` spins it).
    pub glyph_class: ClassList,
    pub glyph: IconGlyph,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPresentation {
    pub class: ClassList,
    pub label: String,
    pub title: String,
}

/// Everything needed to draw one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastPresentation {
    pub root: ClassList,
    /// Inline style from `attrs["style"]`.
    pub style: Option<String>,
    pub z_index: u16,
    /// Tooltip: the request text, even once a loading outcome is shown.
    pub title: String,
    pub title_id: String,
    pub description_id: String,
    pub container: ClassList,
    pub icon: Option<IconSlot>,
    pub content: ClassList,
    /// Text currently shown (a settled loading toast shows its outcome text).
    pub text: String,
    pub description: Option<String>,
    pub actions: ClassList,
    pub action_button: Option<ButtonPresentation>,
    pub close_button: ButtonPresentation,
    /// Variant currently shown.
    pub status: Option<Variant>,
}

impl ToastPresentation {
    #[must_use]
    pub fn describe(
        record: &ToastRecord,
        lifecycle: &ToastLifecycle,
        active: bool,
        ctx: &PresentationContext<'_>,
    ) -> Self {
        let options = ctx.options;
        let styled = !options.headless;
        let names = &options.class_names;
        let status = lifecycle.status(record.variant);

        let mut root = ClassList::new();
        if !ctx.reduced_motion {
            root.push(classes::animation_class(
                lifecycle.is_exiting(),
                options.animation_on_close,
                ctx.position,
            ));
        }
        let root = root
            .with_if(styled, ctx.theme.class())
            .with_if(styled, classes::GLOBAL)
            .with_opt(names.toast.as_deref())
            .with_opt(record.attr("class"));

        let region = |base: &str, extra: Option<&String>| {
            ClassList::new()
                .with_if(styled, base)
                .with_opt(extra.map(String::as_str))
        };

        let icon = icon_slot(record, lifecycle, status, options)
            .map(|(glyph, color)| IconSlot {
                class: region(classes::ICON, names.icon.as_ref()),
                glyph_class: ClassList::new()
                    .with(classes::ICON)
                    .with_if(lifecycle.is_pending(), classes::LOADING),
                glyph,
                color,
            });

        let action_button = record.action.as_ref().map(|action| {
            let label = action
                .content
                .clone()
                .unwrap_or_else(|| options.action_content().to_string());
            ButtonPresentation {
                class: ClassList::new().with_opt(names.actions.action_btn.as_deref()),
                title: action
                    .content
                    .clone()
                    .unwrap_or_else(|| "Action Button".to_string()),
                label,
            }
        });

        Self {
            root,
            style: record.attr("style").map(str::to_string),
            z_index: if active {
                ACTIVE_Z_INDEX
            } else {
                INACTIVE_Z_INDEX
            },
            title: record.text.clone(),
            title_id: format!("toast-title-{}", record.id()),
            description_id: format!("toast-description-{}", record.id()),
            container: region(classes::CONTAINER, names.container.as_ref()),
            icon,
            content: region(classes::CONTENT, names.content.as_ref()),
            text: displayed_text(record, lifecycle).to_string(),
            description: record.description.clone(),
            actions: region(classes::ACTIONS, names.actions.container.as_ref()),
            action_button,
            close_button: ButtonPresentation {
                class: ClassList::new().with_opt(names.actions.close_btn.as_deref()),
                label: options.close_content().to_string(),
                title: CLOSE_BUTTON_TITLE.to_string(),
            },
            status,
        }
    }
}

/// Text shown right now: the loading outcome text once settled.
#[must_use]
pub fn displayed_text<'a>(record: &'a ToastRecord, lifecycle: &ToastLifecycle) -> &'a str {
    let outcome_text = match (lifecycle.loading(), record.loading.as_ref()) {
        (Some(LoadingState::Resolved(Resolution::Success)), Some(options)) => {
            options.success.as_deref()
        }
        (Some(LoadingState::Resolved(Resolution::Error)), Some(options)) => {
            options.error.as_deref()
        }
        _ => None,
    };
    outcome_text.unwrap_or(&record.text)
}

/// A record with a variant shows the variant icon (or the toaster's
/// replacement) unless it carries its own glyph; a record without a
/// variant only shows its own glyph.
fn icon_slot(
    record: &ToastRecord,
    lifecycle: &ToastLifecycle,
    status: Option<Variant>,
    options: &ToastOptions,
) -> Option<(IconGlyph, &'static str)> {
    if let Some(glyph) = &record.icon {
        let color = status.map_or("currentColor", icon_color);
        return Some((IconGlyph::Custom(glyph.clone()), color));
    }
    if record.variant.is_none() {
        return None;
    }
    let shown = status.unwrap_or(Variant::Info);
    let color = if lifecycle.is_pending() {
        icon_color(Variant::Loading)
    } else {
        icon_color(shown)
    };
    let glyph = match options.icons.get(shown) {
        Some(custom) => IconGlyph::Custom(custom.to_string()),
        None => IconGlyph::Builtin(shown),
    };
    Some((glyph, color))
}
