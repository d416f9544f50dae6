//! Auto-layout for EDM screens.
//!
//! Widgets carry absolute pixel coordinates, so anything that assembles a
//! screen programmatically needs layout help. This crate provides three
//! layers of it: [`EdmTable`], a virtual grid container that resolves cell
//! positions to absolute coordinates; [`Tiler`], a bin-packing grid that
//! packs same-sized widgets into a bounded box with nested overflow grids
//! for the stragglers; and [`generic_screen`], which turns a flat list of
//! pre-built widgets into a finished screen with a sensible aspect ratio.

pub mod error;
pub mod generic;
pub mod table;
pub mod tiler;

pub use self::error::LayoutError;
pub use self::generic::{GenericOptions, generic_screen};
pub use self::table::{CellOptions, EdmTable, HJustify, TableChild, VJustify};
pub use self::tiler::{Tiler, borders_for_level};
