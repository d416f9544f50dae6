//! Bin-packing of same-sized widgets into a bounded grid.
//!
//! A [`Tiler`] is a grid sized to hold a fixed number of cells of one size
//! class. Smaller widgets spill into a nested tiler that itself occupies
//! one cell, so mixed sizes pack without fragmenting the outer grid.

use edlkit_model::EdmObject;

use crate::error::LayoutError;
use crate::table::{EdmTable, TableChild};

/// Cell spacing for a tiler nesting level: roomy at the top, tight for
/// deeply nested grids.
pub fn borders_for_level(level: u32) -> (i64, i64) {
    match level {
        0 => (15, 10),
        1 => (10, 10),
        _ => (5, 5),
    }
}

#[derive(Debug, Clone)]
pub struct Tiler {
    table: EdmTable,
    cell_w: i64,
    cell_h: i64,
    num_w: i64,
    num_h: i64,
    level: u32,
    filled: i64,
    /// Entry index of the active overflow tiler, if one exists. The
    /// overflow tiler lives in the grid like any other child; the index
    /// only marks which one still accepts delegated inserts.
    overflow: Option<usize>,
}

impl Tiler {
    /// A tiler covering a `tiler_w` x `tiler_h` box with cells of the
    /// given size class. Capacity per axis is however many cells plus
    /// borders fit in the box.
    pub fn new(tiler_w: i64, tiler_h: i64, cell_w: i64, cell_h: i64, level: u32) -> Self {
        let (xborder, yborder) = borders_for_level(level);
        Tiler {
            table: EdmTable::with_borders(xborder, yborder),
            cell_w,
            cell_h,
            num_w: (tiler_w + xborder) / (cell_w + xborder),
            num_h: (tiler_h + yborder) / (cell_h + yborder),
            level,
            filled: 0,
            overflow: None,
        }
    }

    pub fn capacity(&self) -> i64 {
        self.num_w * self.num_h
    }

    pub fn dimensions(&self) -> (i64, i64) {
        self.table.dimensions()
    }

    fn overflow_tiler(&self) -> Option<&Tiler> {
        let index = self.overflow?;
        match &self.table.entries.get(index)?.1 {
            TableChild::Tiler(t) => Some(t),
            _ => None,
        }
    }

    fn overflow_tiler_mut(&mut self) -> Option<&mut Tiler> {
        let index = self.overflow?;
        match &mut self.table.entries.get_mut(index)?.1 {
            TableChild::Tiler(t) => Some(t),
            _ => None,
        }
    }

    /// Whether `ob` can still be placed here, directly or in an overflow
    /// tiler. Objects larger than the cell class never fit; an exact-size
    /// object fits while unfilled cells remain; smaller objects may fit in
    /// the overflow tiler.
    pub fn has_space(&self, ob: &EdmObject) -> Result<bool, LayoutError> {
        let (w, h) = ob.dimensions()?;
        if w > self.cell_w || h > self.cell_h {
            return Ok(false);
        }
        if self.capacity() - self.filled > 0 {
            return Ok(true);
        }
        if (w, h) == (self.cell_w, self.cell_h) {
            return Ok(false);
        }
        match self.overflow_tiler() {
            Some(t) => t.has_space(ob),
            None => Ok(false),
        }
    }

    /// Place `ob` in the next free cell. A smaller-than-class object gets
    /// a fresh overflow tiler occupying one cell; later inserts delegate
    /// to it while it has room. Fails if [`Tiler::has_space`] is false.
    pub fn add_object(&mut self, ob: EdmObject) -> Result<(), LayoutError> {
        if !self.has_space(&ob)? {
            let (w, h) = ob.dimensions()?;
            return Err(LayoutError::TilerFull { w, h });
        }
        if let Some(t) = self.overflow_tiler_mut()
            && t.has_space(&ob)?
        {
            return t.add_object(ob);
        }
        let (w, h) = ob.dimensions()?;
        let child = if (w, h) != (self.cell_w, self.cell_h) {
            let mut t = Tiler::new(self.cell_w, self.cell_h, w, h, self.level + 1);
            t.add_object(ob)?;
            self.overflow = Some(self.table.entries.len());
            TableChild::from(t)
        } else {
            TableChild::from(ob)
        };
        self.table.add(child)?;
        let max_row = (self.num_h - 1).max(0) as usize;
        self.table.next_cell(Some(max_row));
        self.filled += 1;
        Ok(())
    }

    pub fn autofit_dimensions(&mut self) -> Result<(), LayoutError> {
        self.table.autofit_dimensions()
    }

    pub fn set_position(&mut self, x: i64, y: i64) -> Result<(), LayoutError> {
        self.table.set_position(x, y)
    }

    pub fn shift(&mut self, dx: i64, dy: i64) -> Result<(), LayoutError> {
        self.table.shift(dx, dy)
    }

    pub fn export_group(&self) -> Result<EdmObject, LayoutError> {
        self.table.export_group()
    }

    pub fn into_table(self) -> EdmTable {
        self.table
    }
}
