use super::ClipboardDeviceError;
use crate::clipboard::{ClipboardPayload, ImagePayload};

/// The OS clipboard, seen as a synchronous read/write device.
///
/// `Ok(None)` means the clipboard holds nothing of the requested kind.
pub trait ClipboardDevicePort: Send + Sync {
    fn read_text(&self) -> Result<Option<String>, ClipboardDeviceError>;

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardDeviceError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardDeviceError>;

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardDeviceError>;

    /// Current content, image preferred over text.
    fn read_payload(&self) -> Result<Option<ClipboardPayload>, ClipboardDeviceError> {
        if let Some(image) = self.read_image()? {
            return Ok(Some(ClipboardPayload::Image(image)));
        }
        Ok(self.read_text()?.map(ClipboardPayload::Text))
    }

    fn write_payload(&self, payload: &ClipboardPayload) -> Result<(), ClipboardDeviceError> {
        match payload {
            ClipboardPayload::Text(text) => self.write_text(text),
            ClipboardPayload::Image(image) => self.write_image(image),
        }
    }
}
