use gtk4::prelude::*;
use gtk4::{gio, glib};

/// Start playing a decoded audio clip. Returns the media handle, which
/// the caller must keep alive for the duration of playback. Failures
/// surface through the error signal and are only logged.
pub fn play_clip(bytes: &[u8]) -> gtk4::MediaFile {
    let stream = gio::MemoryInputStream::from_bytes(&glib::Bytes::from(bytes));
    let media = gtk4::MediaFile::for_input_stream(&stream);

    media.connect_error_notify(|media| {
        if let Some(e) = media.error() {
            log::warn!("Audio playback failed: {e}");
        }
    });

    media.play();
    media
}
