#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }
}

/// Encoded image as read from or written to the clipboard device.
///
/// `bytes` always holds the encoded file (PNG), never raw pixels, so the
/// fingerprint of a payload equals the fingerprint of the file saved for it.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Content currently held by the clipboard device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Text(String),
    Image(ImagePayload),
}

impl ClipboardPayload {
    pub fn kind(&self) -> ContentKind {
        match self {
            ClipboardPayload::Text(_) => ContentKind::Text,
            ClipboardPayload::Image(_) => ContentKind::Image,
        }
    }

    /// Bytes fed to the content hasher.
    pub fn hash_input(&self) -> &[u8] {
        match self {
            ClipboardPayload::Text(text) => text.as_bytes(),
            ClipboardPayload::Image(image) => &image.bytes,
        }
    }
}
