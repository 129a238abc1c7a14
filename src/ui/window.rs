use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::direction::{self, Direction};

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub input_view: gtk4::TextView,
    pub direction_dropdown: gtk4::DropDown,
    pub translate_button: gtk4::Button,
    pub spinner: gtk4::Spinner,
    pub result_label: gtk4::Label,
    pub audio_button: gtk4::Button,
    pub copy_button: gtk4::Button,
    pub speak_button: gtk4::Button,
    pub share_button: gtk4::Button,
    pub theme_button: gtk4::Button,
}

impl WindowWidgets {
    pub fn input_text(&self) -> String {
        let buffer = self.input_view.buffer();
        buffer
            .text(&buffer.start_iter(), &buffer.end_iter(), false)
            .to_string()
    }

    pub fn selected_direction(&self) -> Direction {
        Direction::from_index(self.direction_dropdown.selected())
    }

    pub fn show_translation(&self, text: &str) {
        self.result_label.remove_css_class("error");
        self.result_label.set_text(text);
    }

    pub fn show_error(&self, message: &str) {
        self.result_label.add_css_class("error");
        self.result_label.set_text(message);
    }

    /// Toggle the loading state: submit sensitivity, spinner, and (when
    /// entering) clearing the previous output.
    pub fn set_loading(&self, loading: bool) {
        self.translate_button.set_sensitive(!loading);
        self.spinner.set_visible(loading);
        if loading {
            self.spinner.start();
            self.result_label.remove_css_class("error");
            self.result_label.set_text("");
        } else {
            self.spinner.stop();
        }
    }

    pub fn set_audio_visible(&self, visible: bool) {
        self.audio_button.set_visible(visible);
    }
}

/// Build the main window.
pub fn build_window(app: &libadwaita::Application, initial_text: &str) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Japan Assist")
        .default_width(480)
        .default_height(560)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let theme_button = gtk4::Button::from_icon_name("weather-clear-night-symbolic");
    theme_button.set_tooltip_text(Some("Cambiar tema"));
    header.pack_end(&theme_button);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Input area ---
    let input_view = gtk4::TextView::new();
    input_view.set_wrap_mode(gtk4::WrapMode::WordChar);
    input_view.set_top_margin(8);
    input_view.set_bottom_margin(8);
    input_view.set_left_margin(8);
    input_view.set_right_margin(8);
    input_view.buffer().set_text(initial_text);

    let input_scroll = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .min_content_height(110)
        .child(&input_view)
        .build();
    input_scroll.add_css_class("card");
    content.append(&input_scroll);

    // --- Direction selector + submit ---
    let labels: Vec<&str> = direction::ALL.iter().map(|d| d.label()).collect();
    let direction_dropdown = gtk4::DropDown::from_strings(&labels);
    direction_dropdown.set_hexpand(true);

    let translate_button = gtk4::Button::builder()
        .label("Traducir")
        .valign(gtk4::Align::Center)
        .build();
    translate_button.add_css_class("suggested-action");

    let controls = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    controls.append(&direction_dropdown);
    controls.append(&translate_button);
    content.append(&controls);

    // --- Loading indicator ---
    let spinner = gtk4::Spinner::new();
    spinner.set_visible(false);
    content.append(&spinner);

    // --- Result area ---
    let result_label = gtk4::Label::new(None);
    result_label.set_wrap(true);
    result_label.set_selectable(true);
    result_label.set_xalign(0.0);
    result_label.set_valign(gtk4::Align::Start);
    result_label.set_vexpand(true);

    let result_scroll = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .min_content_height(140)
        .child(&result_label)
        .build();
    result_scroll.add_css_class("card");
    content.append(&result_scroll);

    // --- Action row ---
    let audio_button = gtk4::Button::from_icon_name("media-playback-start-symbolic");
    audio_button.set_tooltip_text(Some("Reproducir audio"));
    audio_button.set_visible(false);

    let copy_button = gtk4::Button::from_icon_name("edit-copy-symbolic");
    copy_button.set_tooltip_text(Some("Copiar"));

    let speak_button = gtk4::Button::from_icon_name("audio-volume-high-symbolic");
    speak_button.set_tooltip_text(Some("Leer en voz alta"));

    let share_button = gtk4::Button::from_icon_name("send-to-symbolic");
    share_button.set_tooltip_text(Some("Compartir en LINE"));

    let actions = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    actions.set_halign(gtk4::Align::End);
    actions.append(&audio_button);
    actions.append(&copy_button);
    actions.append(&speak_button);
    actions.append(&share_button);
    content.append(&actions);

    toolbar_view.set_content(Some(&content));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        input_view,
        direction_dropdown,
        translate_button,
        spinner,
        result_label,
        audio_button,
        copy_button,
        speak_button,
        share_button,
        theme_button,
    }
}
