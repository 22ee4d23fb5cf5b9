//! Tunable chrome metrics.
//!
//! Every length here is in 96-DPI units and goes through
//! [`scale`](crate::geometry::scale) before use, except
//! [`maximized_button_offset`](ChromeConfig::maximized_button_offset),
//! which is applied in raw pixels.

/// Layout and behavior settings for the custom caption.
///
/// ```
/// use caption_chrome::ChromeConfig;
///
/// let config = ChromeConfig::new()
///     .with_button_width(46)
///     .with_top_resize_band(true);
/// assert_eq!(config.button_width, 46);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeConfig {
    pub button_width: i32,
    // 1px top + 1px bottom on top of the theme caption height
    pub border_allowance: i32,
    pub fake_shadow_height: i32,
    /// Pixels every button moves right and down while maximized.
    pub maximized_button_offset: i32,
    pub title_text_padding: i32,
    pub glyph_size: i32,
    /// Lets the top `frame + padded border` caption rows of a restored
    /// window resize instead of drag.
    pub top_resize_band: bool,
    pub help_caption: String,
    pub help_text: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeConfig {
    pub fn new() -> Self {
        Self {
            button_width: 47,
            border_allowance: 2,
            fake_shadow_height: 1,
            maximized_button_offset: 2,
            title_text_padding: 10,
            glyph_size: 10,
            top_resize_band: false,
            help_caption: "Help".to_owned(),
            help_text: "Help Button Clicked!".to_owned(),
        }
    }

    pub fn with_button_width(mut self, width: i32) -> Self {
        self.button_width = width.max(0);
        self
    }

    pub fn with_border_allowance(mut self, allowance: i32) -> Self {
        self.border_allowance = allowance.max(0);
        self
    }

    pub fn with_fake_shadow_height(mut self, height: i32) -> Self {
        self.fake_shadow_height = height.max(0);
        self
    }

    pub fn with_maximized_button_offset(mut self, offset: i32) -> Self {
        self.maximized_button_offset = offset;
        self
    }

    pub fn with_title_text_padding(mut self, padding: i32) -> Self {
        self.title_text_padding = padding.max(0);
        self
    }

    pub fn with_top_resize_band(mut self, enabled: bool) -> Self {
        self.top_resize_band = enabled;
        self
    }

    pub fn with_help_message(mut self, caption: impl Into<String>, text: impl Into<String>) -> Self {
        self.help_caption = caption.into();
        self.help_text = text.into();
        self
    }
}
