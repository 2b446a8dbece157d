//! Background services.
//!
//! One service exists: reading a user-chosen photo file off the UI
//! thread. Results come back over a channel drained by `App::update`.

mod photo;

pub use photo::{
    MAX_PHOTO_BYTES, PhotoEvent, PhotoLoadError, PhotoTarget, SUPPORTED_EXTENSIONS,
    spawn_photo_read,
};
