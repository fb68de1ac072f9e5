use ck_core::ports::{ClipboardDevicePort, ClipboardDeviceError};
use ck_core::ImagePayload;

/// Stand-in used when the OS clipboard cannot be opened.
///
/// Every call fails with [`ClipboardDeviceError::Unavailable`], so the rest
/// of the application keeps working on an empty history.
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ClipboardDeviceError {
        ClipboardDeviceError::Unavailable(self.reason.clone())
    }
}

impl ClipboardDevicePort for UnavailableClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardDeviceError> {
        Err(self.error())
    }

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardDeviceError> {
        Err(self.error())
    }

    fn write_text(&self, _text: &str) -> Result<(), ClipboardDeviceError> {
        Err(self.error())
    }

    fn write_image(&self, _image: &ImagePayload) -> Result<(), ClipboardDeviceError> {
        Err(self.error())
    }
}
