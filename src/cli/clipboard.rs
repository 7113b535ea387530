// src/cli/clipboard.rs
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    ManualSelection,
}

/// Somewhere a password can be placed for pasting.
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the platform clipboard open for the lifetime of the shell.
///
/// Some platforms drop clipboard contents when their owner goes away.
#[derive(Default)]
pub struct ClipboardShell {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text`, falling back to writing it to `fallback` for manual selection.
    pub fn copy<W: Write>(&mut self, text: &str, fallback: &mut W) -> Option<CopyOutcome> {
        copy_with_fallback(self, text, fallback)
    }
}

impl TextClipboard for ClipboardShell {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(e) = clipboard.set_text(text.to_owned()) {
                // A broken handle is not reused
                self.clipboard = None;
                return Err(e.into());
            }
        }
        Ok(())
    }
}

/// Place `text` on `clipboard`, or write it to `fallback` when that fails.
///
/// Returns `None` when both mechanisms failed; failures are only logged.
pub fn copy_with_fallback<C, W>(clipboard: &mut C, text: &str, fallback: &mut W) -> Option<CopyOutcome>
where
    C: TextClipboard + ?Sized,
    W: Write,
{
    match clipboard.set_text(text) {
        Ok(()) => Some(CopyOutcome::Clipboard),
        Err(e) => {
            log::error!("Failed to copy password: {}", e);

            match print_for_manual_selection(fallback, text) {
                Ok(()) => Some(CopyOutcome::ManualSelection),
                Err(e) => {
                    log::error!("Fallback copy failed: {}", e);
                    None
                }
            }
        }
    }
}

pub fn print_for_manual_selection<W: Write>(out: &mut W, text: &str) -> Result<(), ClipboardError> {
    writeln!(out, "Clipboard unavailable. Select and copy the password below:")?;
    writeln!(out)?;
    writeln!(out, "    {}", text)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Confirmation for a copy made by a process that exits right after.
///
/// On Linux the selection belongs to this process, so the text only outlives
/// it when a clipboard manager takes ownership.
pub fn one_shot_copy_message() -> &'static str {
    if cfg!(target_os = "linux") {
        "✅ Password placed on the clipboard (kept after exit only if a clipboard manager is running)"
    } else {
        "✅ Password copied to clipboard"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct MissingClipboard;

    impl TextClipboard for MissingClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::IoError(io::Error::new(io::ErrorKind::NotFound, "no display")))
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingClipboard {
        pub(crate) contents: Option<String>,
    }

    impl TextClipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn manual_selection_prints_the_password_on_its_own_line() {
        let mut out = Vec::new();
        print_for_manual_selection(&mut out, "Zp9#Zp9#").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line.trim() == "Zp9#Zp9#"));
    }

    #[test]
    fn manual_selection_surfaces_write_errors() {
        let result = print_for_manual_selection(&mut BrokenWriter, "secret");
        assert!(matches!(result, Err(ClipboardError::IoError(_))));
    }

    #[test]
    fn failed_copy_writes_only_to_the_given_fallback() {
        let mut fallback = Vec::new();
        let outcome = copy_with_fallback(&mut MissingClipboard, "Zp9#Zp9#", &mut fallback);

        assert_eq!(outcome, Some(CopyOutcome::ManualSelection));
        let text = String::from_utf8(fallback).unwrap();
        assert!(text.contains("Zp9#Zp9#"));
    }

    #[test]
    fn successful_copy_leaves_fallback_untouched() {
        let mut clipboard = RecordingClipboard::default();
        let mut fallback = Vec::new();

        let outcome = copy_with_fallback(&mut clipboard, "Zp9#Zp9#", &mut fallback);

        assert_eq!(outcome, Some(CopyOutcome::Clipboard));
        assert_eq!(clipboard.contents.as_deref(), Some("Zp9#Zp9#"));
        assert!(fallback.is_empty());
    }

    #[test]
    fn both_mechanisms_failing_yields_none() {
        assert_eq!(copy_with_fallback(&mut MissingClipboard, "secret", &mut BrokenWriter), None);
    }

    #[test]
    fn one_shot_message_is_honest_about_linux_ownership() {
        let message = one_shot_copy_message();
        if cfg!(target_os = "linux") {
            assert!(message.contains("clipboard manager"));
        } else {
            assert!(message.contains("copied"));
        }
    }
}
