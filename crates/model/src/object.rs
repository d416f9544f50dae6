//! The widget tree.
//!
//! An [`EdmObject`] is one widget of a screen: a type tag, an ordered
//! property map and, for `Group` and `Screen` containers, an owned list of
//! children. Ownership is strictly top-down; tree edits go through the
//! parent by child index, so a child can never be in two containers at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::{ColourMap, DefaultsTable};
use crate::error::ObjectError;
use crate::properties::PropertyMap;
use crate::value::{PropValue, quote_string, unquote_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdmObject {
    kind: String,
    properties: PropertyMap,
    children: Vec<EdmObject>,
}

impl EdmObject {
    /// Create an object with the synthetic defaults every widget type
    /// shares: a class name derived from the type tag, version 4.0.0 and a
    /// 100x100 box at the origin.
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let mut properties = PropertyMap::new();
        if kind != "Screen" {
            properties.set("object", format!("active{}Class", kind.replace(' ', "")));
        }
        properties.set("major", 4);
        properties.set("minor", 0);
        properties.set("release", 0);
        properties.set("x", 0);
        properties.set("y", 0);
        properties.set("w", 100);
        properties.set("h", 100);
        EdmObject {
            kind,
            properties,
            children: Vec::new(),
        }
    }

    /// Create an object with no properties at all. The parser starts here
    /// so that files round-trip without picking up synthetic keys.
    pub fn bare(kind: impl Into<String>) -> Self {
        EdmObject {
            kind: kind.into(),
            properties: PropertyMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an object pre-populated from a defaults table, falling back
    /// to the synthetic defaults for types the table does not know.
    pub fn with_defaults(kind: impl Into<String>, defaults: &DefaultsTable) -> Self {
        let mut ob = EdmObject::new(kind);
        if let Some(props) = defaults.properties_for(&ob.kind) {
            for (k, v) in props.iter() {
                ob.properties.set(k, v.clone());
            }
        }
        ob
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_screen(&self) -> bool {
        self.kind == "Screen"
    }

    /// Containers are the only types that may hold children.
    pub fn is_container(&self) -> bool {
        self.kind == "Group" || self.kind == "Screen"
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.properties.set(key, value);
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.properties.remove(key)
    }

    pub fn int(&self, key: &str) -> Result<i64, ObjectError> {
        self.properties.int(key)
    }

    pub fn string(&self, key: &str) -> Result<String, ObjectError> {
        self.properties.string(key)
    }

    // ----- tree edits ------------------------------------------------------

    pub fn children(&self) -> &[EdmObject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [EdmObject] {
        &mut self.children
    }

    /// Append a child. Only `Group` and `Screen` hold children, and a
    /// `Screen` can never be a child.
    pub fn add_object(&mut self, ob: EdmObject) -> Result<(), ObjectError> {
        if !self.is_container() {
            return Err(ObjectError::NotAContainer(self.kind.clone()));
        }
        if ob.is_screen() {
            return Err(ObjectError::ScreenChild(self.kind.clone()));
        }
        self.children.push(ob);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ObjectError> {
        if index >= self.children.len() {
            return Err(ObjectError::NoSuchChild {
                index,
                len: self.children.len(),
            });
        }
        Ok(())
    }

    /// Remove and return the child at `index`.
    pub fn remove_object(&mut self, index: usize) -> Result<EdmObject, ObjectError> {
        self.check_index(index)?;
        Ok(self.children.remove(index))
    }

    /// Replace the child at `index`, returning the old child.
    pub fn replace_object(
        &mut self,
        index: usize,
        new_ob: EdmObject,
    ) -> Result<EdmObject, ObjectError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.children[index], new_ob))
    }

    /// Move the child at `index` to the end of the list, drawing it in
    /// front of its siblings.
    pub fn raise_object(&mut self, index: usize) -> Result<(), ObjectError> {
        self.check_index(index)?;
        let ob = self.children.remove(index);
        self.children.push(ob);
        Ok(())
    }

    /// Move the child at `index` to the start of the list, drawing it
    /// behind its siblings.
    pub fn lower_object(&mut self, index: usize) -> Result<(), ObjectError> {
        self.check_index(index)?;
        let ob = self.children.remove(index);
        self.children.insert(0, ob);
        Ok(())
    }

    /// Splice the children of the group at `index` into this object at the
    /// group's position, discarding the group wrapper itself.
    pub fn ungroup(&mut self, index: usize) -> Result<(), ObjectError> {
        self.check_index(index)?;
        let group = self.children.remove(index);
        self.children.splice(index..index, group.children);
        Ok(())
    }

    /// Depth-first list of this object and everything below it. With
    /// `include_groups` false the `Group` wrappers are skipped but their
    /// contents are kept.
    pub fn flatten(&self, include_groups: bool) -> Vec<&EdmObject> {
        let mut out = Vec::new();
        if include_groups || self.kind != "Group" {
            out.push(self);
        }
        for ob in &self.children {
            out.extend(ob.flatten(include_groups));
        }
        out
    }

    // ----- geometry --------------------------------------------------------

    pub fn position(&self) -> Result<(i64, i64), ObjectError> {
        Ok((self.int("x")?, self.int("y")?))
    }

    pub fn dimensions(&self) -> Result<(i64, i64), ObjectError> {
        Ok((self.int("w")?, self.int("h")?))
    }

    /// Move to an absolute position. `Group` children move with the frame;
    /// `Lines` points shift by the same delta.
    pub fn set_position(&mut self, x: i64, y: i64) -> Result<(), ObjectError> {
        let (oldx, oldy) = self.position()?;
        self.move_by(x, y, x - oldx, y - oldy)
    }

    /// Move by a delta, children and points included.
    pub fn shift(&mut self, dx: i64, dy: i64) -> Result<(), ObjectError> {
        let (oldx, oldy) = self.position()?;
        self.move_by(oldx + dx, oldy + dy, dx, dy)
    }

    /// Move the frame only, leaving children and points in place.
    pub fn set_origin(&mut self, x: i64, y: i64) {
        self.set("x", x);
        self.set("y", y);
    }

    fn move_by(&mut self, newx: i64, newy: i64, dx: i64, dy: i64) -> Result<(), ObjectError> {
        if self.kind == "Group" {
            for ob in &mut self.children {
                ob.shift(dx, dy)?;
            }
        } else if self.kind == "Lines" && self.has_points() {
            self.shift_points("xPoints", dx)?;
            self.shift_points("yPoints", dy)?;
        }
        self.set_origin(newx, newy);
        Ok(())
    }

    /// Resize to an absolute size, scaling children proportionally.
    pub fn set_dimensions(&mut self, w: i64, h: i64) -> Result<(), ObjectError> {
        let (oldw, oldh) = self.dimensions()?;
        let fw = if oldw != 0 { w as f64 / oldw as f64 } else { 1.0 };
        let fh = if oldh != 0 { h as f64 / oldh as f64 } else { 1.0 };
        self.resize(w, h, fw, fh, true)
    }

    /// Resize by width and height factors, scaling children proportionally.
    pub fn scale(&mut self, fw: f64, fh: f64) -> Result<(), ObjectError> {
        let (oldw, oldh) = self.dimensions()?;
        let w = (fw * oldw as f64) as i64;
        let h = (fh * oldh as f64) as i64;
        self.resize(w, h, fw, fh, true)
    }

    /// Resize the frame only, leaving children and points alone.
    pub fn set_frame_size(&mut self, w: i64, h: i64) {
        self.set("w", w);
        self.set("h", h);
    }

    fn resize(
        &mut self,
        w: i64,
        h: i64,
        fw: f64,
        fh: f64,
        resize_children: bool,
    ) -> Result<(), ObjectError> {
        // Screens anchor their children at the origin regardless of x/y.
        let (x, y) = if self.is_screen() {
            (0, 0)
        } else {
            self.position()?
        };
        if resize_children {
            if self.is_container() {
                for ob in &mut self.children {
                    let (obx, oby) = ob.position()?;
                    ob.set_position(
                        (fw * (obx - x) as f64) as i64 + x,
                        (fh * (oby - y) as f64) as i64 + y,
                    )?;
                    ob.scale(fw, fh)?;
                }
            } else if self.kind == "Lines" && self.has_points() {
                self.scale_points("xPoints", fw, x)?;
                self.scale_points("yPoints", fh, y)?;
            } else if self.kind.contains("Image") {
                let file = self.string("file").unwrap_or_default();
                log::warn!(
                    "image container for {file} resized, the image may not display properly"
                );
            }
        }
        self.set_frame_size(w, h);
        Ok(())
    }

    fn has_points(&self) -> bool {
        self.get("xPoints")
            .and_then(PropValue::as_map)
            .is_some_and(|m| !m.is_empty())
    }

    fn shift_points(&mut self, key: &str, delta: i64) -> Result<(), ObjectError> {
        let Some(v) = self.properties.get_mut(key) else {
            return Ok(());
        };
        let map = v.as_map_mut().ok_or_else(|| ObjectError::WrongShape {
            key: key.to_string(),
            expected: "a map",
        })?;
        for point in map.values_mut() {
            *point = (toint(point) + delta).to_string();
        }
        Ok(())
    }

    fn scale_points(&mut self, key: &str, factor: f64, origin: i64) -> Result<(), ObjectError> {
        let Some(v) = self.properties.get_mut(key) else {
            return Ok(());
        };
        let map = v.as_map_mut().ok_or_else(|| ObjectError::WrongShape {
            key: key.to_string(),
            expected: "a map",
        })?;
        for point in map.values_mut() {
            let p: i64 = point.parse().map_err(|_| ObjectError::WrongShape {
                key: key.to_string(),
                expected: "an integer point",
            })?;
            *point = ((factor * (p - origin) as f64) as i64 + origin).to_string();
        }
        Ok(())
    }

    /// Fit dimensions to content.
    ///
    /// Children are fitted first. A `Screen` then grows to hold everything
    /// plus a border on every side, shifting children out of the border
    /// zone if needed. A `Group` shrinks its frame onto the bounding box of
    /// its contents without moving them. `Lines` recomputes its box from
    /// its points. Everything else is left alone.
    pub fn autofit_dimensions(&mut self, xborder: i64, yborder: i64) -> Result<(), ObjectError> {
        let mut maxx = 0;
        let mut minx = 100_000;
        let mut maxy = 0;
        let mut miny = 100_000;
        for ob in &mut self.children {
            // Menu mux PVs are invisible helpers, not content.
            if ob.kind == "Menu Mux PV" {
                continue;
            }
            ob.autofit_dimensions(10, 10)?;
            let (x, y) = ob.position()?;
            let (w, h) = ob.dimensions()?;
            maxx = maxx.max(x + w);
            maxy = maxy.max(y + h);
            minx = minx.min(x);
            miny = miny.min(y);
        }
        if self.is_screen() {
            let dx = (xborder - minx).max(0);
            let dy = (yborder - miny).max(0);
            if dx + dy > 0 {
                for ob in &mut self.children {
                    ob.shift(dx, dy)?;
                }
            }
            self.set_frame_size(maxx + dx + xborder, maxy + dy + yborder);
        } else if self.kind == "Group" {
            self.set_frame_size(maxx - minx, maxy - miny);
            self.set_origin(minx, miny);
        } else if self.kind == "Lines" && self.has_points() {
            let bounds = |key: &str| -> Result<(i64, i64), ObjectError> {
                let map = self
                    .get(key)
                    .and_then(PropValue::as_map)
                    .ok_or_else(|| ObjectError::WrongShape {
                        key: key.to_string(),
                        expected: "a map",
                    })?;
                let mut lo = i64::MAX;
                let mut hi = i64::MIN;
                for p in map.values() {
                    let p: i64 = p.parse().map_err(|_| ObjectError::WrongShape {
                        key: key.to_string(),
                        expected: "an integer point",
                    })?;
                    lo = lo.min(p);
                    hi = hi.max(p);
                }
                Ok((lo, hi))
            };
            let (minx, maxx) = bounds("xPoints")?;
            let (miny, maxy) = bounds("yPoints")?;
            self.set_origin(minx, miny);
            self.set_frame_size(maxx - minx, maxy - miny);
        }
        Ok(())
    }

    // ----- text substitution -----------------------------------------------

    /// Replace `old_text` with `new_text` in every string-bearing property
    /// of this object and its children. The replacement `''` means the
    /// empty string, matching EDM macro conventions; substitutions into a
    /// `symbols` table requote macros that became empty so EDM still sees
    /// them as defined.
    pub fn substitute(&mut self, old_text: &str, new_text: &str) {
        let new = if new_text == "''" { "" } else { new_text };
        let mut symbol_fixes: Vec<(i64, String)> = Vec::new();
        for (key, value) in self.properties.iter_mut() {
            match value {
                PropValue::Str(s) => *s = s.replace(old_text, new),
                PropValue::List(items) => {
                    for item in items {
                        *item = item.replace(old_text, new);
                    }
                }
                PropValue::Map(map) => {
                    for (k, v) in map.iter_mut() {
                        let result = v.replace(old_text, new);
                        if key == "symbols" {
                            symbol_fixes.push((*k, requote_symbols(&result)));
                        } else {
                            *v = result;
                        }
                    }
                }
                PropValue::Bool(_) | PropValue::Int(_) => {}
            }
        }
        if !symbol_fixes.is_empty()
            && let Some(map) = self
                .properties
                .get_mut("symbols")
                .and_then(PropValue::as_map_mut)
        {
            for (k, v) in symbol_fixes {
                map.insert(k, v);
            }
        }
        for ob in &mut self.children {
            ob.substitute(old_text, new_text);
        }
    }

    /// Set the shadow colours to the standard bevel pair.
    pub fn set_shadows(&mut self, colours: &ColourMap) -> Result<(), ObjectError> {
        let top = colours.lookup("Top Shadow")?.to_string();
        let bottom = colours.lookup("Bottom Shadow")?.to_string();
        self.set("topShadowColor", top);
        self.set("botShadowColor", bottom);
        Ok(())
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let x = self.int("x").unwrap_or(0);
        let y = self.int("y").unwrap_or(0);
        writeln!(f, "{}-{} at ({},{})", " |".repeat(level), self.kind, x, y)?;
        for ob in &self.children {
            ob.fmt_tree(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for EdmObject {
    /// An indented tree dump, one widget per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Best-effort integer from a point value that may carry stray characters.
fn toint(s: &str) -> i64 {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Requote a macro list so empty substitutions stay visibly defined, turning
/// `a=1,b=` into `"a=1,b=''"`.
fn requote_symbols(result: &str) -> String {
    let unquoted = unquote_string(result);
    let fixed: Vec<String> = unquoted
        .split(',')
        .map(|pair| {
            let bits: Vec<&str> = pair.split('=').collect();
            if bits.len() > 1 && bits[1].is_empty() {
                format!("{}=''", bits[0])
            } else {
                pair.to_string()
            }
        })
        .collect();
    quote_string(&fixed.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rect_at(x: i64, y: i64, w: i64, h: i64) -> EdmObject {
        let mut ob = EdmObject::new("Rectangle");
        ob.set_origin(x, y);
        ob.set_frame_size(w, h);
        ob
    }

    fn lines_with_points(xs: &[i64], ys: &[i64]) -> EdmObject {
        let mut ob = EdmObject::new("Lines");
        let to_map = |pts: &[i64]| -> BTreeMap<i64, String> {
            pts.iter()
                .enumerate()
                .map(|(i, p)| (i as i64, p.to_string()))
                .collect()
        };
        ob.set("xPoints", to_map(xs));
        ob.set("yPoints", to_map(ys));
        ob
    }

    #[test]
    fn new_object_predicts_class_name() {
        let ob = EdmObject::new("Related Display");
        assert_eq!(
            ob.string("object").unwrap(),
            "activeRelatedDisplayClass".to_string()
        );
        assert_eq!(ob.dimensions().unwrap(), (100, 100));
    }

    #[test]
    fn screen_has_no_class_name() {
        let ob = EdmObject::new("Screen");
        assert!(ob.get("object").is_none());
    }

    #[test]
    fn only_containers_take_children() {
        let mut rect = rect_at(0, 0, 10, 10);
        assert!(matches!(
            rect.add_object(EdmObject::new("Circle")),
            Err(ObjectError::NotAContainer(_))
        ));
        let mut group = EdmObject::new("Group");
        assert!(matches!(
            group.add_object(EdmObject::new("Screen")),
            Err(ObjectError::ScreenChild(_))
        ));
        group.add_object(rect).unwrap();
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn raise_and_lower_reorder_children() {
        let mut screen = EdmObject::new("Screen");
        screen.add_object(rect_at(1, 0, 10, 10)).unwrap();
        screen.add_object(rect_at(2, 0, 10, 10)).unwrap();
        screen.add_object(rect_at(3, 0, 10, 10)).unwrap();
        screen.raise_object(0).unwrap();
        let xs: Vec<i64> = screen
            .children()
            .iter()
            .map(|ob| ob.int("x").unwrap())
            .collect();
        assert_eq!(xs, vec![2, 3, 1]);
        screen.lower_object(2).unwrap();
        let xs: Vec<i64> = screen
            .children()
            .iter()
            .map(|ob| ob.int("x").unwrap())
            .collect();
        assert_eq!(xs, vec![1, 2, 3]);
    }

    #[test]
    fn ungroup_splices_in_place() {
        let mut screen = EdmObject::new("Screen");
        screen.add_object(rect_at(1, 0, 10, 10)).unwrap();
        let mut group = EdmObject::new("Group");
        group.add_object(rect_at(2, 0, 10, 10)).unwrap();
        group.add_object(rect_at(3, 0, 10, 10)).unwrap();
        screen.add_object(group).unwrap();
        screen.add_object(rect_at(4, 0, 10, 10)).unwrap();
        screen.ungroup(1).unwrap();
        let xs: Vec<i64> = screen
            .children()
            .iter()
            .map(|ob| ob.int("x").unwrap())
            .collect();
        assert_eq!(xs, vec![1, 2, 3, 4]);
    }

    #[test]
    fn tree_edits_check_bounds() {
        let mut screen = EdmObject::new("Screen");
        assert!(matches!(
            screen.remove_object(0),
            Err(ObjectError::NoSuchChild { index: 0, len: 0 })
        ));
    }

    #[test]
    fn group_moves_with_children() {
        let mut group = EdmObject::new("Group");
        group.set_origin(10, 10);
        group.set_frame_size(50, 50);
        group.add_object(rect_at(20, 30, 10, 10)).unwrap();
        group.set_position(110, 10).unwrap();
        assert_eq!(group.position().unwrap(), (110, 10));
        assert_eq!(group.children()[0].position().unwrap(), (120, 30));
    }

    #[test]
    fn group_scales_children_about_its_origin() {
        let mut group = EdmObject::new("Group");
        group.set_origin(10, 10);
        group.set_frame_size(100, 100);
        group.add_object(rect_at(20, 30, 10, 10)).unwrap();
        group.set_dimensions(200, 200).unwrap();
        let child = &group.children()[0];
        assert_eq!(child.position().unwrap(), (30, 50));
        assert_eq!(child.dimensions().unwrap(), (20, 20));
    }

    #[test]
    fn scaling_truncates_toward_zero() {
        let mut rect = rect_at(0, 0, 25, 25);
        rect.scale(0.5, 0.5).unwrap();
        assert_eq!(rect.dimensions().unwrap(), (12, 12));
    }

    #[test]
    fn lines_points_shift_with_position() {
        let mut lines = lines_with_points(&[10, 30], &[20, 40]);
        lines.set_origin(10, 20);
        lines.set_frame_size(20, 20);
        lines.set_position(110, 20).unwrap();
        let xs = lines.get("xPoints").unwrap().as_map().unwrap();
        assert_eq!(xs.get(&0).map(String::as_str), Some("110"));
        assert_eq!(xs.get(&1).map(String::as_str), Some("130"));
        let ys = lines.get("yPoints").unwrap().as_map().unwrap();
        assert_eq!(ys.get(&0).map(String::as_str), Some("20"));
    }

    #[test]
    fn lines_autofit_recomputes_box_from_points() {
        let mut lines = lines_with_points(&[10, 30], &[20, 60]);
        lines.autofit_dimensions(10, 10).unwrap();
        assert_eq!(lines.position().unwrap(), (10, 20));
        assert_eq!(lines.dimensions().unwrap(), (20, 40));
    }

    #[test]
    fn screen_autofit_adds_borders_both_sides() {
        let mut screen = EdmObject::new("Screen");
        screen.add_object(rect_at(0, 0, 120, 120)).unwrap();
        screen.autofit_dimensions(10, 10).unwrap();
        // the child moves out of the border zone and a border is added on
        // the far side too
        assert_eq!(screen.children()[0].position().unwrap(), (10, 10));
        assert_eq!(screen.dimensions().unwrap(), (140, 140));
    }

    #[test]
    fn group_autofit_frames_children_without_moving_them() {
        let mut group = EdmObject::new("Group");
        group.add_object(rect_at(20, 30, 10, 10)).unwrap();
        group.add_object(rect_at(50, 70, 10, 10)).unwrap();
        group.autofit_dimensions(10, 10).unwrap();
        assert_eq!(group.position().unwrap(), (20, 30));
        assert_eq!(group.dimensions().unwrap(), (40, 50));
        assert_eq!(group.children()[0].position().unwrap(), (20, 30));
    }

    #[test]
    fn substitute_walks_strings_lists_and_maps() {
        let mut group = EdmObject::new("Group");
        group.set("controlPv", "$(P):STATUS");
        group.set(
            "value",
            vec![r#""$(P) ok""#.to_string(), r#""plain""#.to_string()],
        );
        let mut child = EdmObject::new("Text");
        child.set("value", vec![r#""$(P)""#.to_string()]);
        group.add_object(child).unwrap();
        group.substitute("$(P)", "SR01");
        assert_eq!(group.string("controlPv").unwrap(), "SR01:STATUS");
        assert_eq!(
            group.get("value").unwrap().as_list().unwrap()[0],
            r#""SR01 ok""#
        );
        assert_eq!(
            group.children()[0].get("value").unwrap().as_list().unwrap()[0],
            r#""SR01""#
        );
    }

    #[test]
    fn substitute_two_quotes_means_empty() {
        let mut ob = EdmObject::new("Text");
        ob.set("controlPv", "$(P):STATUS");
        ob.substitute("$(P)", "''");
        assert_eq!(ob.string("controlPv").unwrap(), ":STATUS");
    }

    #[test]
    fn substitute_requotes_empty_symbols() {
        let mut ob = EdmObject::new("Embedded Window");
        let mut symbols = BTreeMap::new();
        symbols.insert(0, quote_string("P=$(P),M=motor"));
        ob.set("symbols", symbols);
        ob.substitute("$(P)", "''");
        let map = ob.get("symbols").unwrap().as_map().unwrap();
        assert_eq!(map.get(&0).map(String::as_str), Some(r#""P='',M=motor""#));
    }

    #[test]
    fn display_is_an_indented_tree() {
        let mut screen = EdmObject::new("Screen");
        let mut group = EdmObject::new("Group");
        group.set_origin(5, 6);
        group.add_object(rect_at(7, 8, 10, 10)).unwrap();
        screen.add_object(group).unwrap();
        let out = screen.to_string();
        assert_eq!(out, "-Screen at (0,0)\n |-Group at (5,6)\n | |-Rectangle at (7,8)\n");
    }
}
