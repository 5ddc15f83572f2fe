// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every toast variant.
//!
//! The window is a column of buttons; each opens a toast through the
//! mounted toaster's [`Dispatcher`] (or the facade). The toaster itself is
//! embedded the way any host would: messages forwarded, subscription
//! mapped, view stacked over the content.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::toast::{facade, Action, Dispatcher, Loading, ToastRequest, Variant};
use crate::ui::design_tokens::spacing;
use crate::ui::toaster::Toaster;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
const PINNED_ID: &str = "pinned";
const LOADING_DURATION: Duration = Duration::from_secs(2);

pub struct App {
    toaster: Toaster,
    toasts: Dispatcher,
    opened: u32,
    pinned_revision: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toaster", &self.toaster)
            .field("opened", &self.opened)
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        if let Some(position) = flags.position {
            config.position = position;
        }
        if let Some(max_toasts) = flags.max_toasts {
            config.max_toasts = max_toasts;
        }
        if let Some(theme) = flags.theme {
            config.theme = theme;
        }
        if flags.reduced_motion {
            config.reduced_motion = Some(true);
        }

        let (toaster, toasts) = Toaster::mount_global(config);
        if let Some(warning) = config_warning {
            warn!(%warning, "using default toaster configuration");
            toasts.warning(
                ToastRequest::new("Configuration could not be loaded")
                    .description(warning)
                    .delay(Duration::ZERO),
            );
        }
        info!("demo started");

        let app = Self {
            toaster,
            toasts,
            opened: 0,
            pinned_revision: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn theme(&self) -> Theme {
        self.toaster.theme().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toaster)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(variant) => {
                self.opened += 1;
                let label = variant.map_or("Plain", |v| v.as_str());
                let request = ToastRequest::new(format!("{label} toast #{}", self.opened))
                    .description("Hover to pause the countdown.");
                match variant {
                    Some(variant) => self.toasts.open(request.variant(variant)),
                    None => self.toasts.default(request),
                };
            }
            Message::StartLoading { fail } => {
                let options = Loading::from_factory(move || async move {
                    tokio::time::sleep(LOADING_DURATION).await;
                    if fail {
                        Err(String::from("network unreachable"))
                    } else {
                        Ok(LOADING_DURATION.as_secs())
                    }
                })
                .success("Upload finished")
                .error("Upload failed")
                .auto_dismiss(true)
                .on_success(|secs, id| info!(%id, secs, "upload finished"))
                .on_error(|err, id| warn!(%id, %err, "upload failed"));

                self.toasts
                    .loading(ToastRequest::new("Uploading..."), options);
            }
            Message::UpsertPinned => {
                self.pinned_revision += 1;
                let toasts = self.toasts.clone();
                self.toasts.info(
                    ToastRequest::new(format!("Pinned toast, revision {}", self.pinned_revision))
                        .id(PINNED_ID)
                        .delay(Duration::ZERO)
                        .action(
                            Action::new(move || toasts.close(PINNED_ID)).content("Dismiss"),
                        ),
                );
            }
            Message::ClosePinned => self.toasts.close(PINNED_ID),
            Message::ShowViaFacade => {
                facade::success(ToastRequest::new("Sent through the facade"));
            }
            Message::Toaster(message) => {
                return self.toaster.update(message).map(Message::Toaster);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let variants = Row::new()
            .spacing(spacing::XS)
            .push(demo_button("Plain", Message::Show(None)))
            .push(demo_button("Success", Message::Show(Some(Variant::Success))))
            .push(demo_button("Error", Message::Show(Some(Variant::Error))))
            .push(demo_button("Warning", Message::Show(Some(Variant::Warning))))
            .push(demo_button("Info", Message::Show(Some(Variant::Info))));

        let loading = Row::new()
            .spacing(spacing::XS)
            .push(demo_button(
                "Loading (succeeds)",
                Message::StartLoading { fail: false },
            ))
            .push(demo_button(
                "Loading (fails)",
                Message::StartLoading { fail: true },
            ));

        let pinned = Row::new()
            .spacing(spacing::XS)
            .push(demo_button("Open / update pinned", Message::UpsertPinned))
            .push(demo_button("Close pinned", Message::ClosePinned))
            .push(demo_button("Via facade", Message::ShowViaFacade));

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text(format!(
                "Anchor: {}  |  Max toasts: {}",
                self.toaster.config().position,
                self.toaster.config().max_visible()
            )))
            .push(variants)
            .push(loading)
            .push(pinned);

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(self.toaster.view().map(Message::Toaster))
            .into()
    }
}

fn demo_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label)).on_press(message).padding(spacing::XS).into()
}
