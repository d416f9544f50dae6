//! Toolkit for generating EDM `.edl` screen files.
//!
//! EDM is the display manager used on EPICS beamlines; its screens are
//! plain-text `.edl` files describing a tree of widgets with absolute
//! pixel coordinates. This crate bundles the three layers of the toolkit:
//!
//! - [`model`]: the widget tree ([`EdmObject`]), the `.edl` grammar
//!   (parse and serialize), macro substitution and the defaults table.
//! - [`layout`]: grid and bin-packing auto-layout resolving to absolute
//!   coordinates, and [`generic_screen`] for one-call screen assembly.
//! - [`chrome`]: screen furniture, that is the standard widget constructors,
//!   titlebar injection, proportional resize, horizontal flip and
//!   embedded-window substitution.

pub use edlkit_chrome as chrome;
pub use edlkit_layout as layout;
pub use edlkit_model as model;

pub use edlkit_chrome::{
    ButtonStyle, ChromeError, EmbedLimits, EmbedSubstituter, FlipDirection, HeaderStyle,
    TitlebarOptions, Widgets, add_titlebar, flip_horizontal, resize_screen,
};
pub use edlkit_layout::{
    CellOptions, EdmTable, GenericOptions, HJustify, LayoutError, TableChild, Tiler, VJustify,
    generic_screen,
};
pub use edlkit_model::{
    ColourMap, DefaultsTable, EdmObject, ObjectError, ParseError, PropValue, PropertyMap,
    parse_object, parse_screen, quote_list_string, quote_string, unquote_string,
};
