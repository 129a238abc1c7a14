mod event_handler;
mod state;
mod translation;

pub use event_handler::{handle_backend_event, replay_audio};
pub use state::{AppState, AppStatus, BackendEvent, GENERIC_ERROR_MSG, VALIDATION_MSG};
pub use translation::submit_translation;
