use std::sync::Arc;

use crate::config::{Config, ConfigStore};
use crate::translator::{Translation, Translator};
use crate::ui::window::WindowWidgets;

/// Shown inline when the user submits empty input. Also the marker the
/// copy/speak/share guards check for.
pub const VALIDATION_MSG: &str = "Por favor, escribe algo para traducir.";

/// The one message shown for every network, backend, or parse failure.
pub const GENERIC_ERROR_MSG: &str =
    "Lo siento, no pude procesar tu solicitud. Inténtalo de nuevo.";

/// Events sent from the network task back to the GTK main thread.
/// `seq` identifies the submission the outcome belongs to.
#[derive(Debug)]
pub enum BackendEvent {
    TranslationComplete { seq: u64, translation: Translation },
    TranslationFailed { seq: u64, error: String },
}

/// Application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    Translating,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub status: AppStatus,
    pub config: Config,
    pub store: Box<dyn ConfigStore>,
    pub translator: Arc<Translator>,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,

    /// Bumped on every submission; responses carrying an older value are
    /// dropped instead of overwriting newer UI state.
    pub request_seq: u64,

    /// Decoded clip from the last successful translation, kept for the
    /// replay button.
    pub last_audio: Option<Vec<u8>>,
    /// Live media handle; playback stops if this is dropped.
    pub player: Option<gtk4::MediaFile>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(
        sender: async_channel::Sender<BackendEvent>,
        store: Box<dyn ConfigStore>,
    ) -> Self {
        let config = store.load();
        let tokio_rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        Self {
            status: AppStatus::Idle,
            config,
            store,
            translator: Arc::new(Translator::new()),
            tokio_rt,
            backend_sender: sender,
            request_seq: 0,
            last_audio: None,
            player: None,
            window: None,
        }
    }
}
