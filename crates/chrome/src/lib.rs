//! Screen furniture for EDM screens.
//!
//! Everything here dresses or rewrites screens built on `edlkit-model`:
//! [`Widgets`] constructs the standard building blocks (labels, monitors,
//! related displays, raised circles), [`add_titlebar`] injects the header
//! strip and exit button, [`resize_screen`] rescales a screen including
//! its fonts, [`flip_horizontal`] mirrors one, and [`EmbedSubstituter`]
//! inlines embedded windows ahead of time.

pub mod embed;
pub mod error;
pub mod flip;
pub mod resize;
pub mod titlebar;
pub mod widgets;

pub use self::embed::{EmbedLimits, EmbedSubstituter};
pub use self::error::ChromeError;
pub use self::flip::flip_horizontal;
pub use self::resize::{new_font_size, resize_screen};
pub use self::titlebar::{ButtonStyle, HeaderStyle, TitlebarOptions, add_titlebar};
pub use self::widgets::{FlipDirection, Widgets, can_optimise};
