use std::cell::RefCell;
use std::rc::Rc;

use super::state::{AppState, AppStatus, BackendEvent, VALIDATION_MSG};

/// The trimmed text to send, or `None` when the submission must
/// short-circuit to the validation message without any network call.
pub(crate) fn prepare_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Handle a submission from the translate button or Ctrl+Enter. Runs the
/// HTTP call on the tokio runtime and reports back over the event channel.
pub fn submit_translation(state: &Rc<RefCell<AppState>>) {
    if state.borrow().status == AppStatus::Translating {
        log::info!("Ignoring submission while a request is in flight");
        return;
    }

    let (raw, direction) = {
        let s = state.borrow();
        let Some(ref win) = s.window else { return };
        (win.input_text(), win.selected_direction())
    };

    let Some(text) = prepare_input(&raw) else {
        let s = state.borrow();
        if let Some(ref win) = s.window {
            win.show_error(VALIDATION_MSG);
            win.set_audio_visible(false);
        }
        return;
    };
    let lang = direction.lang();

    // Enter the loading state and invalidate any outcome still in flight.
    let seq = {
        let s = &mut *state.borrow_mut();
        s.status = AppStatus::Translating;
        s.request_seq += 1;
        s.last_audio = None;
        s.player = None;
        if let Some(ref win) = s.window {
            win.set_loading(true);
            win.set_audio_visible(false);
        }
        s.request_seq
    };

    let s = state.borrow();
    let translator = s.translator.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match translator.translate(&text, lang).await {
            Ok(translation) => {
                let _ = sender
                    .send(BackendEvent::TranslationComplete { seq, translation })
                    .await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::TranslationFailed {
                        seq,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};

    struct NullStore;

    impl ConfigStore for NullStore {
        fn load(&self) -> Config {
            Config::default()
        }

        fn save(&self, _config: &Config) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
    }

    fn headless_state() -> Rc<RefCell<AppState>> {
        let (tx, _rx) = async_channel::unbounded();
        Rc::new(RefCell::new(AppState::new(tx, Box::new(NullStore))))
    }

    #[test]
    fn empty_and_whitespace_input_short_circuits() {
        assert_eq!(prepare_input(""), None);
        assert_eq!(prepare_input("   \n\t "), None);
    }

    #[test]
    fn input_is_trimmed_before_dispatch() {
        assert_eq!(prepare_input("  hola  ").as_deref(), Some("hola"));
    }

    #[test]
    fn submission_is_ignored_while_one_is_in_flight() {
        let state = headless_state();
        {
            let mut s = state.borrow_mut();
            s.status = AppStatus::Translating;
            s.request_seq = 7;
        }

        submit_translation(&state);

        let s = state.borrow();
        assert_eq!(s.request_seq, 7);
        assert_eq!(s.status, AppStatus::Translating);
    }
}
