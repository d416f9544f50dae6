//! Automatic screen assembly from a flat list of widgets.
//!
//! The widgets are grouped by size, packed class by class into tilers the
//! size of the largest class, and the tilers laid out on a grid whose row
//! limit is chosen to approximate a target aspect ratio. The finished
//! screen contains only plain widgets at absolute positions.

use edlkit_model::{DefaultsTable, EdmObject};
use indexmap::IndexMap;
use itertools::Itertools;

use crate::error::LayoutError;
use crate::table::EdmTable;
use crate::tiler::{Tiler, borders_for_level};

/// Desktop the screen position is chosen within.
const DISPLAY_W: i64 = 1280;
const DISPLAY_H: i64 = 1024;

#[derive(Debug, Clone, Default)]
pub struct GenericOptions {
    /// Derive a deterministic screen position from this string, so screens
    /// generated for different devices land at different desktop spots.
    pub position_seed: Option<String>,
    /// Target width/height ratio for the assembled grid. Without it a
    /// ratio is picked from the dominant cell shape.
    pub ideal_aspect: Option<f64>,
    /// Cap on grid rows. Without it the row count is derived from the
    /// aspect ratio target.
    pub max_rows: Option<usize>,
}

/// Pack `obs` onto a fresh screen and return it.
pub fn generic_screen(
    obs: Vec<EdmObject>,
    opts: &GenericOptions,
    defaults: &DefaultsTable,
) -> Result<EdmObject, LayoutError> {
    if obs.is_empty() {
        return Err(LayoutError::NoObjects);
    }
    // group into size classes, keeping first-appearance order per class
    let mut classes: IndexMap<(i64, i64), Vec<EdmObject>> = IndexMap::new();
    for ob in obs {
        classes.entry(ob.dimensions()?).or_default().push(ob);
    }
    let max_w = classes.keys().map(|&(w, _)| w).max().unwrap_or(0);
    let max_h = classes.keys().map(|&(_, h)| h).max().unwrap_or(0);

    // pack each class, largest area first, into a chain of tilers sized
    // for the largest class
    let mut tilers: Vec<Tiler> = Vec::new();
    let order: Vec<(i64, i64)> = classes
        .keys()
        .copied()
        .sorted_by_key(|&(w, h)| w * h)
        .rev()
        .collect();
    for key in order {
        for ob in classes.shift_remove(&key).unwrap_or_default() {
            let fits = match tilers.last() {
                Some(t) => t.has_space(&ob)?,
                None => false,
            };
            if let Some(t) = tilers.last_mut().filter(|_| fits) {
                t.add_object(ob)?;
            } else {
                let (w, h) = key;
                let mut t = Tiler::new(max_w, max_h, w, h, 1);
                t.add_object(ob)?;
                tilers.push(t);
            }
        }
    }

    // row limit from the target aspect ratio unless the caller fixed one
    let max_row = match opts.max_rows {
        Some(rows) => rows.saturating_sub(1),
        None => {
            let a_r = max_w as f64 / max_h as f64;
            let ideal = opts.ideal_aspect.unwrap_or(if a_r < 2.0 && tilers.len() > 3 {
                2.0
            } else {
                3.5
            });
            (tilers.len() as f64 * a_r / ideal).sqrt() as usize
        }
    };

    // lay the tilers on the master grid and flatten everything onto the
    // screen
    let (xborder, yborder) = borders_for_level(0);
    let mut layout = EdmTable::with_borders(xborder, yborder);
    for t in tilers {
        layout.add(t)?;
        layout.next_cell(Some(max_row));
    }
    let mut screen = EdmObject::with_defaults("Screen", defaults);
    for ob in layout.into_objects()? {
        screen.add_object(ob)?;
    }
    screen.autofit_dimensions(10, 10)?;

    if let Some(seed) = &opts.position_seed {
        let (w, h) = screen.dimensions()?;
        let (free_w, free_h) = (DISPLAY_W - w, DISPLAY_H - h);
        if free_w > 0 && free_h > 0 {
            let sum: i64 = seed.chars().map(|c| c as i64).sum();
            screen.set_position((53 * sum) % free_w, (30 * sum) % free_h)?;
        } else {
            log::warn!("screen {w}x{h} fills the desktop, leaving it at the origin");
        }
    }
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(w: i64, h: i64) -> EdmObject {
        let mut ob = EdmObject::new("Rectangle");
        ob.set_frame_size(w, h);
        ob
    }

    fn overlaps(a: (i64, i64, i64, i64), b: (i64, i64, i64, i64)) -> bool {
        a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
    }

    #[test]
    fn empty_input_is_an_error() {
        let defaults = DefaultsTable::builtin();
        assert!(matches!(
            generic_screen(Vec::new(), &GenericOptions::default(), &defaults),
            Err(LayoutError::NoObjects)
        ));
    }

    #[test]
    fn screen_holds_only_plain_widgets() {
        let defaults = DefaultsTable::builtin();
        let obs = (0..5).map(|_| sized(100, 50)).collect();
        let screen = generic_screen(obs, &GenericOptions::default(), &defaults).unwrap();
        assert_eq!(screen.kind(), "Screen");
        let leaves: Vec<_> = screen.flatten(false);
        assert_eq!(leaves.len() - 1, 5); // the screen plus its widgets
        assert!(
            screen
                .children()
                .iter()
                .all(|ob| ob.kind() == "Rectangle")
        );
    }

    #[test]
    fn widgets_do_not_overlap() {
        let defaults = DefaultsTable::builtin();
        let mut obs: Vec<EdmObject> = (0..5).map(|_| sized(100, 50)).collect();
        obs.extend((0..6).map(|_| sized(40, 20)));
        let screen = generic_screen(obs, &GenericOptions::default(), &defaults).unwrap();
        let boxes: Vec<(i64, i64, i64, i64)> = screen
            .children()
            .iter()
            .map(|ob| {
                let (x, y) = ob.position().unwrap();
                let (w, h) = ob.dimensions().unwrap();
                (x, y, w, h)
            })
            .collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!overlaps(*a, *b), "{a:?} overlaps {b:?}");
            }
        }
        // everything clears the screen border
        assert!(boxes.iter().all(|&(x, y, _, _)| x >= 10 && y >= 10));
    }

    #[test]
    fn position_seed_is_deterministic_and_on_screen() {
        let defaults = DefaultsTable::builtin();
        let build = || {
            let obs = (0..4).map(|_| sized(100, 50)).collect();
            let opts = GenericOptions {
                position_seed: Some("SR01C-VA-IONP-01".to_string()),
                ..GenericOptions::default()
            };
            generic_screen(obs, &opts, &defaults).unwrap()
        };
        let a = build();
        let b = build();
        assert_eq!(a.position().unwrap(), b.position().unwrap());
        let (x, y) = a.position().unwrap();
        let (w, h) = a.dimensions().unwrap();
        assert!(x >= 0 && x + w <= DISPLAY_W);
        assert!(y >= 0 && y + h <= DISPLAY_H);
    }

    #[test]
    fn max_rows_caps_the_grid_height() {
        let defaults = DefaultsTable::builtin();
        let obs = (0..6).map(|_| sized(50, 50)).collect();
        let opts = GenericOptions {
            max_rows: Some(1),
            ..GenericOptions::default()
        };
        let screen = generic_screen(obs, &opts, &defaults).unwrap();
        // a single row: every widget at the same y
        let ys: Vec<i64> = screen
            .children()
            .iter()
            .map(|ob| ob.position().unwrap().1)
            .collect();
        assert!(ys.iter().all(|&y| y == ys[0]));
    }
}
