#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use caption_chrome::{logging, ChromeConfig};

#[cfg(windows)]
fn main() -> Result<()> {
    logging::init_default();

    let config = ChromeConfig::new().with_top_resize_band(true);
    caption_chrome::win32::run(config, "Caption Chrome")
}

#[cfg(not(windows))]
fn main() -> Result<()> {
    logging::init_default();

    let config = ChromeConfig::new();
    tracing::error!(?config, "caption-chrome needs a Win32 host");
    Err(anyhow::anyhow!("caption-chrome only runs on Windows"))
}
