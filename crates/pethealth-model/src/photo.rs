use sha2::{Digest, Sha256};
use std::sync::Arc;

/// An image attached to a pet or food entry.
///
/// `Embedded` holds the raw encoded bytes together with a content-derived
/// uri, so identical images resolve to the same texture in the renderer.
/// `Placeholder` renders as a generic glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhotoRef {
    #[default]
    Placeholder,
    Embedded { uri: String, bytes: Arc<[u8]> },
}

impl PhotoRef {
    /// Wrap encoded image bytes, deriving the uri from a content hash.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let digest = Sha256::digest(bytes.as_ref());
        let uri = format!("bytes://photo-{}", hex::encode(&digest[..8]));
        Self::Embedded { uri, bytes }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}
