//! A virtual grid container.
//!
//! An [`EdmTable`] never appears in a serialized screen. It holds children
//! in named grid cells together with per-cell placement records, and on
//! resolution assigns every child an absolute position. The output is
//! either a plain `Group` ([`EdmTable::export_group`]) or the bare
//! positioned children ([`EdmTable::into_objects`]).

use edlkit_model::{EdmObject, ObjectError};

use crate::error::LayoutError;
use crate::tiler::Tiler;

/// Horizontal placement of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HJustify {
    #[default]
    Left,
    Centre,
    Right,
}

/// Vertical placement of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VJustify {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Per-child overrides for [`EdmTable::add_with`]. Unset fields fall back
/// to the table's cursor and defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellOptions {
    pub column: Option<usize>,
    pub row: Option<usize>,
    pub xoff: Option<i64>,
    pub yoff: Option<i64>,
    pub xjustify: Option<HJustify>,
    pub yjustify: Option<VJustify>,
}

/// The resolved placement record kept alongside each child.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellAssign {
    column: usize,
    row: usize,
    xoff: i64,
    yoff: i64,
    xjustify: HJustify,
    yjustify: VJustify,
}

/// A grid child: a plain widget, a nested table, or a tiler.
#[derive(Debug, Clone)]
pub enum TableChild {
    Object(EdmObject),
    Table(Box<EdmTable>),
    Tiler(Box<Tiler>),
}

impl From<EdmObject> for TableChild {
    fn from(ob: EdmObject) -> Self {
        TableChild::Object(ob)
    }
}

impl From<EdmTable> for TableChild {
    fn from(table: EdmTable) -> Self {
        TableChild::Table(Box::new(table))
    }
}

impl From<Tiler> for TableChild {
    fn from(tiler: Tiler) -> Self {
        TableChild::Tiler(Box::new(tiler))
    }
}

impl TableChild {
    fn dimensions(&self) -> Result<(i64, i64), ObjectError> {
        match self {
            TableChild::Object(ob) => ob.dimensions(),
            TableChild::Table(t) => Ok(t.dimensions()),
            TableChild::Tiler(t) => Ok(t.dimensions()),
        }
    }

    fn autofit(&mut self) -> Result<(), LayoutError> {
        match self {
            TableChild::Object(ob) => ob.autofit_dimensions(10, 10).map_err(Into::into),
            TableChild::Table(t) => t.autofit_dimensions(),
            TableChild::Tiler(t) => t.autofit_dimensions(),
        }
    }

    fn set_position(&mut self, x: i64, y: i64) -> Result<(), LayoutError> {
        match self {
            TableChild::Object(ob) => ob.set_position(x, y).map_err(Into::into),
            TableChild::Table(t) => t.set_position(x, y),
            TableChild::Tiler(t) => t.set_position(x, y),
        }
    }

    fn shift(&mut self, dx: i64, dy: i64) -> Result<(), LayoutError> {
        match self {
            TableChild::Object(ob) => ob.shift(dx, dy).map_err(Into::into),
            TableChild::Table(t) => t.shift(dx, dy),
            TableChild::Tiler(t) => t.shift(dx, dy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EdmTable {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    cursor_column: usize,
    cursor_row: usize,
    def_xoff: i64,
    def_yoff: i64,
    xborder: i64,
    yborder: i64,
    xjustify: HJustify,
    yjustify: VJustify,
    pub(crate) entries: Vec<(CellAssign, TableChild)>,
}

impl Default for EdmTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EdmTable {
    pub fn new() -> Self {
        EdmTable {
            x: 0,
            y: 0,
            w: 100,
            h: 100,
            cursor_column: 0,
            cursor_row: 0,
            def_xoff: 0,
            def_yoff: 0,
            xborder: 10,
            yborder: 10,
            xjustify: HJustify::Left,
            yjustify: VJustify::Top,
            entries: Vec::new(),
        }
    }

    pub fn with_borders(xborder: i64, yborder: i64) -> Self {
        let mut table = Self::new();
        table.xborder = xborder;
        table.yborder = yborder;
        table
    }

    /// Default in-cell justification for subsequently added children.
    pub fn set_justify(&mut self, xjustify: HJustify, yjustify: VJustify) {
        self.xjustify = xjustify;
        self.yjustify = yjustify;
    }

    /// Default in-cell offsets for subsequently added children.
    pub fn set_offsets(&mut self, xoff: i64, yoff: i64) {
        self.def_xoff = xoff;
        self.def_yoff = yoff;
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    pub fn dimensions(&self) -> (i64, i64) {
        (self.w, self.h)
    }

    /// Target dimensions for resolution. Cells stretch to fill anything
    /// beyond the grid minimum, unless justification is left/top.
    pub fn set_frame_size(&mut self, w: i64, h: i64) {
        self.w = w;
        self.h = h;
    }

    /// Add a child to the cursor cell.
    pub fn add(&mut self, child: impl Into<TableChild>) -> Result<(), LayoutError> {
        self.add_with(child, CellOptions::default())
    }

    /// Add a child, overriding cell and placement defaults per `opts`.
    pub fn add_with(
        &mut self,
        child: impl Into<TableChild>,
        opts: CellOptions,
    ) -> Result<(), LayoutError> {
        let child = child.into();
        if let TableChild::Object(ob) = &child
            && ob.is_screen()
        {
            return Err(ObjectError::ScreenChild("EdmTable".to_string()).into());
        }
        let cell = CellAssign {
            column: opts.column.unwrap_or(self.cursor_column),
            row: opts.row.unwrap_or(self.cursor_row),
            xoff: opts.xoff.unwrap_or(self.def_xoff),
            yoff: opts.yoff.unwrap_or(self.def_yoff),
            xjustify: opts.xjustify.unwrap_or(self.xjustify),
            yjustify: opts.yjustify.unwrap_or(self.yjustify),
        };
        self.entries.push((cell, child));
        Ok(())
    }

    /// Move the cursor one row down. With a row limit, wrap to the top of
    /// the next column once the limit row is reached.
    pub fn next_cell(&mut self, max_row: Option<usize>) {
        match max_row {
            Some(limit) if self.cursor_row >= limit => self.next_col(),
            _ => self.cursor_row += 1,
        }
    }

    /// Move the cursor to the top of the next column.
    pub fn next_col(&mut self) {
        self.cursor_row = 0;
        self.cursor_column += 1;
    }

    pub fn set_position(&mut self, x: i64, y: i64) -> Result<(), LayoutError> {
        let dx = x - self.x;
        let dy = y - self.y;
        self.x = x;
        self.y = y;
        for (_, child) in &mut self.entries {
            child.shift(dx, dy)?;
        }
        Ok(())
    }

    pub fn shift(&mut self, dx: i64, dy: i64) -> Result<(), LayoutError> {
        self.set_position(self.x + dx, self.y + dy)
    }

    /// Per-column widths and per-row heights: the maximum of child size
    /// plus in-cell offset over each column/row, zero for empty ones.
    fn dim_lists(&mut self) -> Result<(Vec<i64>, Vec<i64>), LayoutError> {
        fn grow(list: &mut Vec<i64>, index: usize, val: i64) {
            if list.len() <= index {
                list.resize(index + 1, 0);
            }
            list[index] = list[index].max(val);
        }
        let mut ws = vec![0];
        let mut hs = vec![0];
        for (cell, child) in &mut self.entries {
            child.autofit()?;
            let (w, h) = child.dimensions()?;
            grow(&mut ws, cell.column, w + cell.xoff);
            grow(&mut hs, cell.row, h + cell.yoff);
        }
        Ok((ws, hs))
    }

    /// Resolve the grid: compute column/row extents, stretch them if the
    /// frame is larger than the minimum (and justification wants it), and
    /// move every child to its absolute position.
    pub fn autofit_dimensions(&mut self) -> Result<(), LayoutError> {
        let (mut ws, mut hs) = self.dim_lists()?;
        let minw = ws.iter().sum::<i64>() + (ws.len() as i64 - 1) * self.xborder;
        let minh = hs.iter().sum::<i64>() + (hs.len() as i64 - 1) * self.yborder;
        let stretch = |list: &mut Vec<i64>, frame: i64, min: i64| {
            let sum: i64 = list.iter().sum();
            if sum > 0 {
                let ratio = (frame - min) as f64 / sum as f64 + 1.0;
                for v in list.iter_mut() {
                    *v = (0.5 + *v as f64 * ratio) as i64;
                }
            }
        };
        if self.w > minw && self.xjustify != HJustify::Left {
            stretch(&mut ws, self.w, minw);
        } else {
            self.w = minw;
        }
        if self.h > minh && self.yjustify != VJustify::Top {
            stretch(&mut hs, self.h, minh);
        } else {
            self.h = minh;
        }
        for (cell, child) in &mut self.entries {
            let (w, h) = child.dimensions()?;
            let mut valx = cell.xoff;
            let deltax = ws[cell.column] - cell.xoff - w;
            match cell.xjustify {
                HJustify::Left => {}
                HJustify::Right => valx += deltax,
                HJustify::Centre => valx += deltax / 2,
            }
            valx += self.x
                + ws[..cell.column].iter().sum::<i64>()
                + cell.column as i64 * self.xborder;
            let mut valy = cell.yoff;
            let deltay = hs[cell.row] - cell.yoff - h;
            match cell.yjustify {
                VJustify::Top => {}
                VJustify::Bottom => valy += deltay,
                VJustify::Middle => valy += deltay / 2,
            }
            valy += self.y + hs[..cell.row].iter().sum::<i64>() + cell.row as i64 * self.yborder;
            child.set_position(valx, valy)?;
        }
        Ok(())
    }

    /// Resolve a copy of the grid and return it as a plain `Group`, with
    /// nested tables and tilers exported recursively.
    pub fn export_group(&self) -> Result<EdmObject, LayoutError> {
        let mut copy = self.clone();
        for (_, child) in &mut copy.entries {
            let group = match child {
                TableChild::Object(_) => continue,
                TableChild::Table(t) => t.export_group()?,
                TableChild::Tiler(t) => t.export_group()?,
            };
            *child = TableChild::Object(group);
        }
        copy.autofit_dimensions()?;
        let mut group = EdmObject::new("Group");
        for (_, child) in copy.entries {
            if let TableChild::Object(ob) = child {
                group.add_object(ob)?;
            }
        }
        group.autofit_dimensions(10, 10)?;
        Ok(group)
    }

    /// Serialize via the group representation. A table has no direct
    /// textual form of its own.
    pub fn to_edl(&self) -> Result<String, LayoutError> {
        Ok(self.export_group()?.to_edl())
    }

    /// Resolve the grid and return the positioned children, recursively
    /// discarding every table and tiler wrapper.
    pub fn into_objects(mut self) -> Result<Vec<EdmObject>, LayoutError> {
        self.autofit_dimensions()?;
        Ok(self.collect_objects())
    }

    pub(crate) fn collect_objects(self) -> Vec<EdmObject> {
        let mut out = Vec::new();
        for (_, child) in self.entries {
            match child {
                TableChild::Object(ob) => out.push(ob),
                TableChild::Table(t) => out.extend(t.collect_objects()),
                TableChild::Tiler(t) => out.extend(t.into_table().collect_objects()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(w: i64, h: i64) -> EdmObject {
        let mut ob = EdmObject::new("Rectangle");
        ob.set_frame_size(w, h);
        ob
    }

    fn positions(table: &EdmTable) -> Vec<(i64, i64)> {
        table
            .entries
            .iter()
            .map(|(_, child)| match child {
                TableChild::Object(ob) => ob.position().unwrap(),
                _ => panic!("expected plain objects"),
            })
            .collect()
    }

    #[test]
    fn next_cell_builds_a_column() {
        let mut table = EdmTable::new();
        for _ in 0..3 {
            table.add(sized(30, 20)).unwrap();
            table.next_cell(None);
        }
        table.autofit_dimensions().unwrap();
        assert_eq!(positions(&table), vec![(0, 0), (0, 30), (0, 60)]);
        assert_eq!(table.dimensions(), (30, 80));
    }

    #[test]
    fn next_col_starts_a_new_column() {
        let mut table = EdmTable::new();
        table.add(sized(30, 20)).unwrap();
        table.next_col();
        table.add(sized(30, 20)).unwrap();
        table.autofit_dimensions().unwrap();
        assert_eq!(positions(&table), vec![(0, 0), (40, 0)]);
    }

    #[test]
    fn next_cell_wraps_at_the_row_limit() {
        let mut table = EdmTable::new();
        for _ in 0..4 {
            table.add(sized(10, 10)).unwrap();
            table.next_cell(Some(1));
        }
        table.autofit_dimensions().unwrap();
        assert_eq!(positions(&table), vec![(0, 0), (0, 20), (20, 0), (20, 20)]);
    }

    #[test]
    fn column_width_is_the_widest_member() {
        let mut table = EdmTable::new();
        table.add(sized(30, 20)).unwrap();
        table.next_cell(None);
        table.add(sized(50, 20)).unwrap();
        table.next_col();
        table.add(sized(10, 10)).unwrap();
        table.autofit_dimensions().unwrap();
        // second column starts after the widest first-column member
        assert_eq!(positions(&table)[2], (60, 0));
    }

    #[test]
    fn justification_places_within_the_cell() {
        let mut table = EdmTable::new();
        table.add(sized(50, 50)).unwrap();
        table.next_cell(None);
        table
            .add_with(
                sized(10, 10),
                CellOptions {
                    xjustify: Some(HJustify::Right),
                    ..CellOptions::default()
                },
            )
            .unwrap();
        table.next_cell(None);
        table
            .add_with(
                sized(10, 10),
                CellOptions {
                    xjustify: Some(HJustify::Centre),
                    ..CellOptions::default()
                },
            )
            .unwrap();
        table.autofit_dimensions().unwrap();
        let pos = positions(&table);
        assert_eq!(pos[1].0, 40);
        assert_eq!(pos[2].0, 20);
    }

    #[test]
    fn offsets_add_to_cell_position() {
        let mut table = EdmTable::new();
        table
            .add_with(
                sized(10, 10),
                CellOptions {
                    xoff: Some(5),
                    yoff: Some(7),
                    ..CellOptions::default()
                },
            )
            .unwrap();
        table.autofit_dimensions().unwrap();
        assert_eq!(positions(&table), vec![(5, 7)]);
        // the cell grows to hold size plus offset
        assert_eq!(table.dimensions(), (15, 17));
    }

    #[test]
    fn left_top_tables_shrink_to_minimum() {
        let mut table = EdmTable::new();
        table.set_frame_size(500, 500);
        table.add(sized(30, 20)).unwrap();
        table.autofit_dimensions().unwrap();
        assert_eq!(table.dimensions(), (30, 20));
    }

    #[test]
    fn stretch_distributes_slack_proportionally() {
        let mut table = EdmTable::new();
        table.set_justify(HJustify::Centre, VJustify::Middle);
        table.add(sized(20, 20)).unwrap();
        table.next_col();
        table.add(sized(20, 20)).unwrap();
        // minimum is 20+10+20 = 50 wide; ask for 90
        table.set_frame_size(90, 20);
        table.autofit_dimensions().unwrap();
        // each column stretches from 20 to 40, children centre in them
        let pos = positions(&table);
        assert_eq!(pos[0], (10, 0));
        assert_eq!(pos[1], (60, 0));
        assert_eq!(table.dimensions(), (90, 20));
    }

    #[test]
    fn screens_cannot_enter_a_table() {
        let mut table = EdmTable::new();
        assert!(matches!(
            table.add(EdmObject::new("Screen")),
            Err(LayoutError::Object(ObjectError::ScreenChild(_)))
        ));
    }

    #[test]
    fn set_position_moves_every_child() {
        let mut table = EdmTable::new();
        table.add(sized(10, 10)).unwrap();
        table.next_cell(None);
        table.add(sized(10, 10)).unwrap();
        table.autofit_dimensions().unwrap();
        table.set_position(100, 50).unwrap();
        assert_eq!(positions(&table), vec![(100, 50), (100, 70)]);
    }

    #[test]
    fn export_group_is_deterministic() {
        let build = || {
            let mut table = EdmTable::new();
            let mut nested = EdmTable::new();
            nested.add(sized(10, 10)).unwrap();
            nested.next_cell(None);
            nested.add(sized(20, 10)).unwrap();
            table.add(nested).unwrap();
            table.next_col();
            table.add(sized(30, 40)).unwrap();
            table.to_edl().unwrap()
        };
        let first = build();
        assert_eq!(first, build());
        assert!(first.contains("# (Group)"));
    }

    #[test]
    fn into_objects_leaves_no_wrappers() {
        let mut table = EdmTable::new();
        let mut nested = EdmTable::new();
        nested.add(sized(10, 10)).unwrap();
        table.add(nested).unwrap();
        table.next_cell(None);
        table.add(sized(20, 20)).unwrap();
        let obs = table.into_objects().unwrap();
        assert_eq!(obs.len(), 2);
        assert!(obs.iter().all(|ob| ob.kind() == "Rectangle"));
        // nested table content at the table origin, sibling below it
        assert_eq!(obs[0].position().unwrap(), (0, 0));
        assert_eq!(obs[1].position().unwrap(), (0, 20));
    }
}
