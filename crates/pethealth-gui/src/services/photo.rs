//! Background photo loading.
//!
//! The file dialog runs on the UI thread; the read itself happens on a
//! spawned thread that sends a [`PhotoEvent`] back over a channel and
//! requests a repaint. Fire-and-forget: there is no cancellation, and an
//! event arriving after its modal closed lands in a discarded draft.

use crossbeam_channel::Sender;
use pethealth_model::PhotoRef;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest photo file the app will embed.
pub const MAX_PHOTO_BYTES: u64 = 8 * 1024 * 1024;

/// File extensions the egui image loaders handle.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Which form draft a finished photo read belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoTarget {
    Pet,
    Food,
}

/// Why a photo could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoLoadError {
    #[error("could not read the file: {0}")]
    Io(String),

    #[error("unsupported image type \".{0}\" (use png, jpg, gif, webp or bmp)")]
    UnsupportedExtension(String),

    #[error("file is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: u64, max: u64 },
}

/// Result of a background photo read.
#[derive(Debug, Clone)]
pub struct PhotoEvent {
    pub target: PhotoTarget,
    pub result: Result<PhotoRef, PhotoLoadError>,
}

/// Check the extension against the loader-supported set.
fn validate_extension(path: &Path) -> Result<(), PhotoLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(PhotoLoadError::UnsupportedExtension(ext))
    }
}

fn read_photo(path: &Path) -> Result<PhotoRef, PhotoLoadError> {
    validate_extension(path)?;

    let size = std::fs::metadata(path)
        .map_err(|e| PhotoLoadError::Io(e.to_string()))?
        .len();
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoLoadError::TooLarge {
            size,
            max: MAX_PHOTO_BYTES,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| PhotoLoadError::Io(e.to_string()))?;
    Ok(PhotoRef::from_bytes(bytes))
}

/// Read `path` on a background thread and deliver the result to `sender`.
///
/// Requests a repaint when done so the frame that applies the event runs
/// promptly even while the UI is idle.
pub fn spawn_photo_read(
    path: PathBuf,
    target: PhotoTarget,
    sender: Sender<PhotoEvent>,
    ctx: egui::Context,
) {
    std::thread::spawn(move || {
        let result = read_photo(&path);
        if let Err(ref e) = result {
            tracing::warn!(path = %path.display(), error = %e, "photo load failed");
        }
        let _ = sender.send(PhotoEvent { target, result });
        ctx.request_repaint();
    });
}
