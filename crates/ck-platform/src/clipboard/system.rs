use std::sync::{Mutex, MutexGuard};

use ck_core::ports::{ClipboardDevicePort, ClipboardDeviceError};
use ck_core::{ImageFormat, ImagePayload};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};

/// The OS clipboard through `clipboard-rs`.
///
/// Images are exchanged as PNG. Reading re-encodes the clipboard bitmap, so
/// the same pixels always produce the same bytes and the same fingerprint.
pub struct SystemClipboard {
    inner: Mutex<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardDeviceError> {
        let context =
            ClipboardContext::new().map_err(|e| ClipboardDeviceError::Unavailable(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardDeviceError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardDeviceError::Unavailable("clipboard context poisoned".into()))
    }
}

impl ClipboardDevicePort for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardDeviceError> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        ctx.get_text()
            .map(Some)
            .map_err(|e| ClipboardDeviceError::Read(e.to_string()))
    }

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardDeviceError> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = ctx
            .get_image()
            .map_err(|e| ClipboardDeviceError::Read(e.to_string()))?;
        let (width, height) = image.get_size();
        let png = image
            .to_png()
            .map_err(|e| ClipboardDeviceError::Image(e.to_string()))?;

        Ok(Some(ImagePayload {
            width,
            height,
            format: ImageFormat::Png,
            bytes: png.get_bytes().to_vec(),
        }))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardDeviceError> {
        self.context()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardDeviceError::Write(e.to_string()))
    }

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardDeviceError> {
        let decoded = match image.format {
            ImageFormat::Png => RustImageData::from_bytes(&image.bytes)
                .map_err(|e| ClipboardDeviceError::Image(e.to_string()))?,
        };
        self.context()?
            .set_image(decoded)
            .map_err(|e| ClipboardDeviceError::Write(e.to_string()))
    }
}
