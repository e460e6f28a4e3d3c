//! URL delivery.
//!
//! The default target is the system browser; `--print` and `--copy`
//! substitute stdout and the clipboard.

use anyhow::Result;

use crate::url::TargetUrl;

/// Hands a composed URL to its destination.
pub trait UrlOpener {
    fn open(&self, url: &TargetUrl) -> Result<()>;
}

/// Opens the URL with the platform's default browser handler.
pub struct Browser;

impl UrlOpener for Browser {
    fn open(&self, url: &TargetUrl) -> Result<()> {
        let url = url.to_string();

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open").arg(&url).spawn()?;
        }

        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open").arg(&url).spawn()?;
        }

        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/c", "start", &url])
                .spawn()?;
        }

        Ok(())
    }
}

/// Prints the URL to stdout instead of opening it.
pub struct Printer;

impl UrlOpener for Printer {
    fn open(&self, url: &TargetUrl) -> Result<()> {
        println!("{url}");
        Ok(())
    }
}

/// Puts the URL on the clipboard instead of opening it.
pub struct ClipboardCopy;

impl UrlOpener for ClipboardCopy {
    fn open(&self, url: &TargetUrl) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("Failed to access clipboard: {}", e))?;
        clipboard
            .set_text(url.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {}", e))?;
        Ok(())
    }
}
