use std::cell::RefCell;
use std::rc::Rc;

use super::state::{AppState, AppStatus, BackendEvent, GENERIC_ERROR_MSG};
use crate::playback;

/// Handle a backend event on the GTK main thread.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    match event {
        BackendEvent::TranslationComplete { seq, translation } => {
            let s = &mut *state.borrow_mut();
            if seq != s.request_seq {
                log::info!("Dropping stale translation result (seq {seq})");
                return;
            }
            s.status = AppStatus::Idle;

            if let Some(ref win) = s.window {
                win.set_loading(false);
                win.show_translation(&translation.text);
                win.set_audio_visible(translation.audio.is_some());
            }

            // Autoplay the clip; a replay stays available from the button.
            if let Some(audio) = translation.audio {
                s.player = Some(playback::play_clip(&audio));
                s.last_audio = Some(audio);
            }
        }
        BackendEvent::TranslationFailed { seq, error } => {
            log::error!("Translation failed: {error}");
            let s = &mut *state.borrow_mut();
            if seq != s.request_seq {
                log::info!("Dropping stale translation error (seq {seq})");
                return;
            }
            s.status = AppStatus::Idle;

            if let Some(ref win) = s.window {
                win.set_loading(false);
                win.show_error(GENERIC_ERROR_MSG);
                win.set_audio_visible(false);
            }
        }
    }
}

/// Replay the clip from the last translation, if any.
pub fn replay_audio(state: &Rc<RefCell<AppState>>) {
    let s = &mut *state.borrow_mut();
    if let Some(ref audio) = s.last_audio {
        s.player = Some(playback::play_clip(audio));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crate::translator::Translation;

    struct NullStore;

    impl ConfigStore for NullStore {
        fn load(&self) -> Config {
            Config::default()
        }

        fn save(&self, _config: &Config) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
    }

    fn translating_state(seq: u64) -> Rc<RefCell<AppState>> {
        let (tx, _rx) = async_channel::unbounded();
        let state = Rc::new(RefCell::new(AppState::new(tx, Box::new(NullStore))));
        {
            let mut s = state.borrow_mut();
            s.status = AppStatus::Translating;
            s.request_seq = seq;
        }
        state
    }

    #[test]
    fn stale_error_does_not_overwrite_newer_state() {
        let state = translating_state(2);

        handle_backend_event(
            &state,
            BackendEvent::TranslationFailed {
                seq: 1,
                error: "late".into(),
            },
        );

        // The in-flight request still owns the UI.
        assert_eq!(state.borrow().status, AppStatus::Translating);
        assert_eq!(state.borrow().request_seq, 2);
    }

    #[test]
    fn stale_result_does_not_stash_its_audio() {
        let state = translating_state(2);

        handle_backend_event(
            &state,
            BackendEvent::TranslationComplete {
                seq: 1,
                translation: Translation {
                    text: "superseded".into(),
                    audio: Some(vec![1, 2, 3]),
                },
            },
        );

        let s = state.borrow();
        assert_eq!(s.status, AppStatus::Translating);
        assert!(s.last_audio.is_none());
        assert!(s.player.is_none());
    }
}
