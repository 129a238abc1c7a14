mod app;
mod clipboard;
mod config;
mod direction;
mod playback;
mod share;
mod speech;
mod translator;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4::prelude::*;
use gtk4::{gdk, glib};
use libadwaita::prelude::*;

use app::{AppState, BackendEvent};
use config::{FileStore, Theme};
use direction::Direction;

const SEED_TEXT: &str = "Hola, me encanta la cultura japonesa.";

fn main() {
    env_logger::init();
    log::info!("Japan Assist starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.japan-assist")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    let state = Rc::new(RefCell::new(AppState::new(
        backend_tx,
        Box::new(FileStore),
    )));

    // Build UI
    let widgets = ui::window::build_window(app, SEED_TEXT);

    // Wire up the translate button
    {
        let state_clone = state.clone();
        widgets.translate_button.connect_clicked(move |_| {
            app::submit_translation(&state_clone);
        });
    }

    // Ctrl+Enter submits through the same guarded path as the button
    {
        let state_clone = state.clone();
        let key_controller = gtk4::EventControllerKey::new();
        key_controller.connect_key_pressed(move |_, key, _, modifiers| {
            let is_enter = key == gdk::Key::Return || key == gdk::Key::KP_Enter;
            if is_enter && modifiers.contains(gdk::ModifierType::CONTROL_MASK) {
                app::submit_translation(&state_clone);
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });
        widgets.input_view.add_controller(key_controller);
    }

    // Wire up the copy button, with a transient check-mark on success
    {
        let result_label = widgets.result_label.clone();
        widgets.copy_button.connect_clicked(move |btn| {
            let displayed = result_label.text().to_string();
            match clipboard::copy_result(&displayed) {
                Ok(true) => {
                    btn.set_icon_name("object-select-symbolic");
                    btn.add_css_class("success");
                    let btn = btn.clone();
                    glib::timeout_add_local_once(Duration::from_secs(2), move || {
                        btn.set_icon_name("edit-copy-symbolic");
                        btn.remove_css_class("success");
                    });
                }
                Ok(false) => {}
                Err(e) => log::warn!("Clipboard copy failed: {e}"),
            }
        });
    }

    // Wire up text-to-speech fallback
    {
        let result_label = widgets.result_label.clone();
        let dropdown = widgets.direction_dropdown.clone();
        widgets.speak_button.connect_clicked(move |_| {
            let displayed = result_label.text().to_string();
            if !clipboard::is_copyable(&displayed) {
                return;
            }
            let locale = Direction::from_index(dropdown.selected()).speech_locale();
            if let Err(e) = speech::speak(&displayed, locale) {
                log::warn!("Speech synthesis failed: {e}");
            }
        });
    }

    // Wire up the LINE share button
    {
        let result_label = widgets.result_label.clone();
        let win = widgets.window.clone();
        widgets.share_button.connect_clicked(move |_| {
            let displayed = result_label.text().to_string();
            if !clipboard::is_copyable(&displayed) {
                return;
            }
            let url = share::line_share_url(&displayed);
            gtk4::UriLauncher::new(&url).launch(
                Some(&win),
                gtk4::gio::Cancellable::NONE,
                |result| {
                    if let Err(e) = result {
                        log::warn!("Failed to open share link: {e}");
                    }
                },
            );
        });
    }

    // Wire up audio replay
    {
        let state_clone = state.clone();
        widgets.audio_button.connect_clicked(move |_| {
            app::replay_audio(&state_clone);
        });
    }

    // Wire up the theme toggle
    {
        let state_clone = state.clone();
        widgets.theme_button.connect_clicked(move |btn| {
            let s = &mut *state_clone.borrow_mut();
            s.config.theme = s.config.theme.toggled();
            apply_theme(s.config.theme, btn);
            if let Err(e) = s.store.save(&s.config) {
                log::warn!("Failed to save config: {e}");
            }
        });
    }

    // Apply the persisted theme
    apply_theme(state.borrow().config.theme, &widgets.theme_button);

    // Store UI handles in state and show the window
    state.borrow_mut().window = Some(widgets);
    state.borrow().window.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }
}

/// Apply a theme application-wide and swap the toggle icon: the light
/// theme shows a moon (click for dark), the dark theme a sun.
fn apply_theme(theme: Theme, button: &gtk4::Button) {
    let scheme = if theme.is_dark() {
        libadwaita::ColorScheme::ForceDark
    } else {
        libadwaita::ColorScheme::ForceLight
    };
    libadwaita::StyleManager::default().set_color_scheme(scheme);

    let icon = if theme.is_dark() {
        "weather-clear-symbolic"
    } else {
        "weather-clear-night-symbolic"
    };
    button.set_icon_name(icon);
}
