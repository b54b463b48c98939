//! Image attachments

/// Raw bytes of an image the user attached to a turn.
///
/// The bytes are kept in their original container format (PNG, JPEG, ...);
/// re-encoding for the wire happens in the gateway adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl From<Vec<u8>> for ImageAttachment {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
