// SPDX-License-Identifier: GPL-3.0-only

//! Demo application.
//!
//! Two text fields with the keyboard between them. Clicking a field focuses
//! it; Tab on a layout that has one cycles between the fields.

use crate::app_settings;
use crate::config::Config;
use crate::focus::{FocusHost, FocusNotifier, TargetId};
use crate::input::{TextField, TextTarget};
use crate::layout::load_or_builtin;
use crate::renderer::{render_keyboard, KeyboardMessage, KeyboardWidget};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Padding, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, button, container};

/// Number of text fields in the demo.
pub const FIELD_COUNT: usize = 2;

/// Caret marker drawn inside the focused field.
const CARET: char = '|';

/// The demo's text fields and which of them has focus.
#[derive(Debug, Default)]
pub struct DemoFields {
    fields: [TextField; FIELD_COUNT],
    focused: Option<TargetId>,
}

impl DemoFields {
    pub fn field(&self, index: usize) -> Option<&TextField> {
        self.fields.get(index)
    }

    pub fn focused(&self) -> Option<TargetId> {
        self.focused
    }

    fn index(id: TargetId) -> Option<usize> {
        let index = id.0 as usize;
        (index < FIELD_COUNT).then_some(index)
    }
}

impl FocusHost for DemoFields {
    fn text_target(&mut self, id: TargetId) -> Option<&mut dyn TextTarget> {
        let index = Self::index(id)?;
        Some(&mut self.fields[index])
    }

    fn next_focusable(&self, id: TargetId) -> Option<TargetId> {
        let index = Self::index(id)?;
        Some(TargetId(((index + 1) % FIELD_COUNT) as u32))
    }

    fn request_focus(&mut self, id: TargetId) {
        if Self::index(id).is_some() {
            self.focused = Some(id);
        }
    }
}

/// Returns `text` with the caret marker inserted at char offset `caret`.
pub fn with_caret(text: &str, caret: usize) -> String {
    let mut shown: String = text.chars().take(caret).collect();
    shown.push(CARET);
    shown.extend(text.chars().skip(caret));
    shown
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    /// The on-screen keyboard.
    keyboard: KeyboardWidget,
    /// Focus reports for the keyboard.
    notifier: FocusNotifier,
    /// Text fields the keyboard types into.
    fields: DemoFields,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A demo field was clicked.
    FocusField(usize),
    /// The keyboard emitted a message.
    Keyboard(KeyboardMessage),
    /// Configuration was updated externally.
    UpdateConfig(Config),
}

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Message;

    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, _flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for err in errors {
                        tracing::warn!("Config: {:?}", err);
                    }
                    config
                }
            })
            .unwrap_or_default();

        let keyboard = KeyboardWidget::build(load_or_builtin(&config.layout_path));
        let notifier = keyboard.focus_notifier();

        let mut app = AppModel {
            core,
            config,
            keyboard,
            notifier,
            fields: DemoFields::default(),
        };
        app.focus_field(0);

        (app, Task::none())
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = self.config.spacing();
        let keyboard = render_keyboard(&self.keyboard, spacing, app_settings::DEFAULT_PADDING)
            .map(Message::Keyboard);

        let content = widget::column::column()
            .spacing(spacing)
            .push(self.render_field(0))
            .push(keyboard)
            .push(self.render_field(1));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::from(app_settings::DEFAULT_PADDING))
            .into()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::FocusField(index) => self.focus_field(index),
            Message::Keyboard(message) => self.keyboard.update(message, &mut self.fields),
            Message::UpdateConfig(config) => self.apply_config(config),
        }

        Task::none()
    }
}

impl AppModel {
    fn focus_field(&mut self, index: usize) {
        let id = TargetId(index as u32);
        self.fields.request_focus(id);
        self.notifier.focus_changed(self.fields.focused());
    }

    fn apply_config(&mut self, config: Config) {
        if config.layout_path != self.config.layout_path {
            tracing::info!("Layout path changed to '{}'", config.layout_path);
            self.keyboard = KeyboardWidget::build(load_or_builtin(&config.layout_path));
            self.notifier = self.keyboard.focus_notifier();
            self.keyboard.set_active_target(self.fields.focused());
        }
        self.config = config;
    }

    fn render_field(&self, index: usize) -> Element<'_, Message> {
        let focused = self.fields.focused() == Some(TargetId(index as u32));
        let shown = match self.fields.field(index) {
            Some(field) if focused => with_caret(field.text(), field.caret()),
            Some(field) => field.text().to_string(),
            None => String::new(),
        };

        button::custom(container(widget::text::body(shown)).width(Length::Fill))
            .on_press(Message::FocusField(index))
            .class(if focused {
                cosmic::style::Button::Suggested
            } else {
                cosmic::style::Button::Standard
            })
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::KeyCode;

    #[test]
    fn test_caret_marker() {
        assert_eq!(with_caret("", 0), "|");
        assert_eq!(with_caret("abc", 3), "abc|");
        assert_eq!(with_caret("aéc", 1), "a|éc");
    }

    #[test]
    fn test_fields_form_a_ring() {
        let fields = DemoFields::default();
        assert_eq!(fields.next_focusable(TargetId(0)), Some(TargetId(1)));
        assert_eq!(fields.next_focusable(TargetId(1)), Some(TargetId(0)));
        assert_eq!(fields.next_focusable(TargetId(9)), None);
    }

    #[test]
    fn test_unknown_ids_are_not_targets() {
        let mut fields = DemoFields::default();
        assert!(fields.text_target(TargetId(0)).is_some());
        assert!(fields.text_target(TargetId(FIELD_COUNT as u32)).is_none());

        fields.request_focus(TargetId(5));
        assert_eq!(fields.focused(), None);
    }

    #[test]
    fn test_keyboard_types_into_demo_fields() {
        let mut keyboard = KeyboardWidget::new();
        let mut fields = DemoFields::default();
        let notifier = keyboard.focus_notifier();

        fields.request_focus(TargetId(1));
        notifier.focus_changed(fields.focused());

        for code in ["shift", "o", "dead_tilde", "a", "o"] {
            keyboard.update(KeyboardMessage::KeyPressed(KeyCode::new(code)), &mut fields);
        }

        assert_eq!(fields.field(1).unwrap().text(), "Oão");
        assert_eq!(fields.field(0).unwrap().text(), "");
        assert_eq!(fields.focused(), Some(TargetId(1)));
    }

    #[test]
    fn test_message_variants() {
        assert!(matches!(Message::FocusField(1), Message::FocusField(1)));
        assert!(matches!(
            Message::UpdateConfig(Config::default()),
            Message::UpdateConfig(_)
        ));
        let pressed = Message::Keyboard(KeyboardMessage::KeyPressed(KeyCode::new("a")));
        assert!(matches!(pressed, Message::Keyboard(KeyboardMessage::KeyPressed(_))));
    }
}
