//! Horizontal screen mirroring.
//!
//! Every top-level object is mirrored across the vertical centre line.
//! Groups stay intact unless asked otherwise; beam axis markers are swapped
//! for their opposite-direction counterpart, and symbols and images are
//! swapped for pre-flipped files when one exists on the search paths.

use std::fs;
use std::path::PathBuf;

use edlkit_model::{DefaultsTable, EdmObject, PropValue, quote_string};

use crate::error::ChromeError;
use crate::widgets::{FlipDirection, Widgets};

/// Mirror `screen` horizontally. `paths` are searched for `-flipped`
/// symbol and image files; `flip_group_contents` also mirrors inside
/// groups instead of moving them whole.
pub fn flip_horizontal(
    screen: &mut EdmObject,
    paths: &[PathBuf],
    flip_group_contents: bool,
    defaults: &DefaultsTable,
) -> Result<(), ChromeError> {
    if !screen.is_screen() {
        return Err(ChromeError::NotAScreen(screen.kind().to_string()));
    }
    let (screen_w, _) = screen.dimensions()?;
    let controller = defaults.colour("Controller")?.to_string();
    let widgets = Widgets::new(defaults);

    let mut files: Vec<String> = Vec::new();
    for p in paths {
        match fs::read_dir(p) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if name.ends_with(".png") || name.contains("symbol") {
                        files.push(name);
                    }
                }
            }
            Err(e) => log::warn!("cannot list {} ({e}), skipping it", p.display()),
        }
    }

    for i in 0..screen.children().len() {
        screen.children_mut()[i].autofit_dimensions(10, 10)?;
        let (kind, vis_pv, x, y, w) = {
            let ob = &screen.children()[i];
            let vis_pv = ob
                .get("visPv")
                .and_then(PropValue::as_str)
                .map(|s| s.trim_matches('"').to_string())
                .unwrap_or_default();
            let (x, y) = ob.position()?;
            let (w, _) = ob.dimensions()?;
            (ob.kind().to_string(), vis_pv, x, y, w)
        };

        // axis markers are rebuilt pointing the other way, not mirrored
        if kind == "Group" && vis_pv.starts_with("#<AXIS_") {
            let direction = if vis_pv.starts_with("#<AXIS_RIGHT") {
                FlipDirection::Left
            } else {
                FlipDirection::Right
            };
            let mut axis = widgets.flip_axis(direction)?;
            axis.set_position(screen_w - x - w, y)?;
            screen.replace_object(i, axis)?;
            continue;
        }

        let ob = &mut screen.children_mut()[i];
        if kind == "Group" {
            if vis_pv.starts_with("#<") {
                swap_flipped_symbols(ob, &files);
            }
            let symbol_files: Vec<String> = ob
                .children()
                .iter()
                .filter(|c| c.kind() == "Symbol")
                .map(|c| c.string("file").unwrap_or_default())
                .collect();
            let first_is_filter = symbol_files.first().is_some_and(|f| f.contains("filter"));
            if flip_group_contents || symbol_files.is_empty() || first_is_filter {
                // mirror the contents within the group frame
                let flip_points = symbol_files.is_empty() || flip_group_contents;
                for ob2 in ob.children_mut() {
                    let (ob2x, ob2y) = ob2.position()?;
                    let (ob2w, _) = ob2.dimensions()?;
                    ob2.set_position(x + w - (ob2x - x + ob2w), ob2y)?;
                    if flip_points && ob2.kind() == "Lines" {
                        flip_lines(ob2)?;
                    }
                }
            }
        } else if kind == "Lines" {
            if ob.get("lineColor").and_then(PropValue::as_str) == Some(controller.as_str()) {
                flip_lines(ob)?;
            }
        } else if kind == "PNG Image" || kind == "Image" {
            if let Some(file) = ob.get("file").and_then(PropValue::as_str) {
                let flipped = format!(
                    "{}-flipped.png",
                    file.trim_matches('"').trim_end_matches(".png")
                );
                if files.contains(&flipped) {
                    ob.set("file", quote_string(flipped.trim_end_matches(".png")));
                }
            }
        }

        screen.children_mut()[i].set_position(screen_w - (x + w), y)?;
    }
    Ok(())
}

/// Swap every symbol file in the subtree for its `-flipped-symbol`
/// counterpart when one exists.
fn swap_flipped_symbols(ob: &mut EdmObject, files: &[String]) {
    if ob.kind() == "Symbol"
        && let Some(file) = ob.get("file").and_then(PropValue::as_str)
    {
        let mut flipped = file.trim_matches('"').replace("-symbol", "-flipped-symbol");
        if !flipped.ends_with(".edl") {
            flipped.push_str(".edl");
        }
        if files.contains(&flipped) {
            ob.set("file", quote_string(flipped.trim_end_matches(".edl")));
        }
    }
    for child in ob.children_mut() {
        swap_flipped_symbols(child, files);
    }
}

/// Reflect the x points of a `Lines` object within its own frame.
fn flip_lines(ob: &mut EdmObject) -> Result<(), ChromeError> {
    if ob
        .get("xPoints")
        .and_then(PropValue::as_map)
        .is_none_or(|m| m.is_empty())
    {
        return Ok(());
    }
    let (x, _) = ob.position()?;
    let (w, _) = ob.dimensions()?;
    if let Some(map) = ob
        .properties_mut()
        .get_mut("xPoints")
        .and_then(PropValue::as_map_mut)
    {
        for px in map.values_mut() {
            let p: i64 = px.parse().unwrap_or(0);
            *px = (x + w - (p - x)).to_string();
        }
    }
    Ok(())
}
