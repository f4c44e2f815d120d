// src/cli/clipboard.rs
use std::time::Duration;

use crate::cli::CliError;

/// Somewhere a generated password can be copied to.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), CliError>;
}

/// The system clipboard.
///
/// On X11 and Wayland the owning process serves the clipboard contents, so
/// the handle has to outlive the copy. The interactive menu keeps one
/// `SystemClipboard` for the whole session; a one-shot copy sets `hold` so
/// the process stays around until another program takes the selection or
/// the hold runs out.
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new(hold: Option<Duration>) -> Self {
        Self { clipboard: None, hold }
    }

    // Opened lazily so a missing display only matters when copying
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, CliError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        self.clipboard
            .as_mut()
            .ok_or(CliError::Clipboard(arboard::Error::ClipboardNotSupported))
    }
}

impl ClipboardWriter for SystemClipboard {
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
    fn write_text(&mut self, text: &str) -> Result<(), CliError> {
        use arboard::SetExtLinux;

        let hold = self.hold;
        let clipboard = self.handle()?;
        match hold {
            Some(hold) => {
                log::info!("Serving clipboard for up to {}s", hold.as_secs());
                clipboard
                    .set()
                    .wait_until(std::time::Instant::now() + hold)
                    .text(text.to_owned())?;
            }
            None => clipboard.set_text(text.to_owned())?,
        }
        Ok(())
    }

    #[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
    fn write_text(&mut self, text: &str) -> Result<(), CliError> {
        // Other platforms keep clipboard contents after the process exits
        let _ = self.hold;
        self.handle()?.set_text(text.to_owned())?;
        Ok(())
    }
}
