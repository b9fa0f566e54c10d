/// Widget-based rendering infrastructure for the TUI
///
/// Widgets render themselves directly to a ratatui Buffer. Small pickers and
/// buttons are plain render functions; larger pieces implement
/// [`RenderableWidget`].

#[cfg(test)]
pub mod testing;

pub mod arrow_button;
pub use arrow_button::ArrowButton;

pub mod article;
pub use article::ArticleView;

pub mod button;
pub use button::render_button;

pub mod frame;
pub use frame::render_frame;

pub mod radio_group;
pub use radio_group::render_radio_group;

pub mod select;
pub use select::render_select;

pub mod separator;
pub use separator::render_horizontal_separator;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
