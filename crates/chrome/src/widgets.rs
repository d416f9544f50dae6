//! Constructors for the standard screen building blocks.
//!
//! [`Widgets`] is a factory bound to a defaults table, so every widget it
//! builds resolves colour names against the same palette. Positions and
//! sizes are in screen pixels; colour arguments are palette names such as
//! `"Black"` or `"Controller"`.

use std::collections::BTreeMap;

use edlkit_model::{
    DefaultsTable, EdmObject, quote_list_string, quote_string,
};

use crate::error::ChromeError;

/// Whether a screen name belongs to a family that the generators are
/// allowed to rebuild in place.
pub fn can_optimise(name: &str) -> bool {
    (name.contains("camera") && !name.contains("2cam") && name != "camera")
        || name.contains("autogen")
        || name.contains("slit")
        || name.contains("mirror")
}

fn map0(value: String) -> BTreeMap<i64, String> {
    BTreeMap::from([(0, value)])
}

/// Widget factory bound to a colour and defaults table.
pub struct Widgets<'a> {
    defaults: &'a DefaultsTable,
}

impl<'a> Widgets<'a> {
    pub fn new(defaults: &'a DefaultsTable) -> Self {
        Widgets { defaults }
    }

    pub fn defaults(&self) -> &DefaultsTable {
        self.defaults
    }

    fn colour(&self, name: &str) -> Result<String, ChromeError> {
        Ok(self.defaults.colour(name)?.to_string())
    }

    fn framed(&self, kind: &str, x: i64, y: i64, w: i64, h: i64) -> EdmObject {
        let mut ob = EdmObject::with_defaults(kind, self.defaults);
        ob.set_origin(x, y);
        ob.set_frame_size(w, h);
        ob
    }

    /// A Static Text box in arial medium 10.
    pub fn label(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
        font_align: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Static Text", x, y, w, h);
        ob.set("font", quote_string("arial-medium-r-10.0"));
        ob.set("fgColor", self.colour("Black")?);
        ob.set("useDisplayBg", true);
        ob.set("value", quote_list_string(text));
        ob.set("fontAlign", quote_string(font_align));
        Ok(ob)
    }

    /// A Text Monitor on `pv` in arial medium 10.
    pub fn text_monitor(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        pv: &str,
        show_units: bool,
        font_align: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Text Monitor", x, y, w, h);
        ob.set("controlPv", quote_string(pv));
        ob.set("font", quote_string("arial-medium-r-10.0"));
        ob.set("fgColor", self.colour("Black")?);
        ob.set("useDisplayBg", true);
        ob.set("precision", 3);
        ob.set("fontAlign", quote_string(font_align));
        ob.set("smartRefresh", true);
        ob.set("fastUpdate", true);
        ob.set("showUnits", show_units);
        ob.set("limitsFromDb", false);
        ob.set("newPos", true);
        Ok(ob)
    }

    /// An invisible placeholder rectangle.
    pub fn dummy(&self, x: i64, y: i64, w: i64, h: i64) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Rectangle", x, y, w, h);
        ob.set("lineColor", self.colour("Canvas")?);
        ob.set("invisible", true);
        Ok(ob)
    }

    /// A filled rectangle.
    pub fn rectangle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        line_colour: &str,
        fill_colour: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Rectangle", x, y, w, h);
        ob.set("lineColor", self.colour(line_colour)?);
        ob.set("fill", true);
        ob.set("fillColor", self.colour(fill_colour)?);
        Ok(ob)
    }

    /// An invisible related display that pops up a tooltip screen with the
    /// given text on right click.
    pub fn tooltip(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Related Display", x, y, w, h);
        ob.set("yPosOffset", h.max(22) + 8);
        ob.set("xPosOffset", w / 2 - 100);
        ob.set("button3Popup", true);
        ob.set("invisible", true);
        ob.set("buttonLabel", quote_string("tooltip"));
        ob.set("numPvs", 4);
        ob.set("numDsps", 1);
        ob.set("displayFileName", map0(quote_string("symbols-tooltip-symbol")));
        ob.set("setPosition", map0(quote_string("button")));
        ob.set("symbols", map0(quote_string(&format!("text={text}"))));
        Ok(ob)
    }

    /// An invisible related display. Empty `filename` makes a display with
    /// no target; empty `symbols` passes no macros.
    pub fn rd(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        filename: &str,
        symbols: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Related Display", x, y, w, h);
        ob.set("invisible", true);
        ob.set("buttonLabel", quote_string("device screen"));
        ob.set("numPvs", 4);
        if filename.is_empty() {
            ob.set("numDsps", 0);
        } else {
            ob.set("displayFileName", map0(quote_string(filename)));
            ob.set("numDsps", 1);
            if !symbols.is_empty() {
                ob.set("symbols", map0(quote_string(symbols)));
            }
        }
        Ok(ob)
    }

    /// An invisible shell command button.
    pub fn shell(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        command: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Shell Command", x, y, w, h);
        ob.set("invisible", true);
        ob.set("buttonLabel", quote_string("Shell Command"));
        ob.set("numCmds", 1);
        ob.set("command", map0(quote_string(command)));
        Ok(ob)
    }

    /// A visible shell command button labelled `text`.
    pub fn shell_visible(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
        command: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Shell Command", x, y, w, h);
        ob.set("buttonLabel", quote_string(text));
        ob.set("numCmds", 1);
        ob.set("command", map0(quote_string(command)));
        ob.set("fgColor", self.colour("Related display")?);
        ob.set("bgColor", self.colour("Canvas")?);
        ob.set("font", quote_string("arial-bold-r-14.0"));
        ob.set_shadows(self.defaults.colours())?;
        Ok(ob)
    }

    /// A visible related display labelled `text`.
    pub fn rd_visible(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
        filename: &str,
        symbols: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Related Display", x, y, w, h);
        ob.set("buttonLabel", quote_string(text));
        ob.set("numPvs", 4);
        ob.set("numDsps", 1);
        ob.set("displayFileName", map0(quote_string(filename)));
        if !symbols.is_empty() {
            ob.set("symbols", map0(quote_string(symbols)));
        }
        ob.set("fgColor", self.colour("Related display")?);
        ob.set("bgColor", self.colour("Canvas")?);
        ob.set("font", quote_string("arial-bold-r-14.0"));
        ob.set_shadows(self.defaults.colours())?;
        Ok(ob)
    }

    /// A symbol driven by `pv`: state `i` covers values `i-1` to `i`, or a
    /// truth table when `truth` is set.
    pub fn symbol(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        filename: &str,
        pv: &str,
        nstates: i64,
        truth: bool,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Symbol", x, y, w, h);
        ob.set("file", quote_string(filename));
        ob.set("truthTable", truth);
        ob.set("numStates", nstates);
        let mut min_values = BTreeMap::new();
        let mut max_values = BTreeMap::new();
        for i in 1..nstates {
            if i > 1 {
                min_values.insert(i, (i - 1).to_string());
            }
            max_values.insert(i, i.to_string());
        }
        ob.set("minValues", min_values);
        ob.set("maxValues", max_values);
        ob.set("controlPvs", map0(quote_string(pv)));
        ob.set("numPvs", 1);
        ob.set("useOriginalColors", true);
        Ok(ob)
    }

    /// The five-state status symbol used for beamline components, driven by
    /// a status PV and a severity PV.
    pub fn component_symbol(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        status_pv: &str,
        sevr_pv: &str,
        filename: &str,
    ) -> Result<EdmObject, ChromeError> {
        let sevr_pv = if sevr_pv.starts_with("LOC") || sevr_pv.starts_with("CALC") {
            sevr_pv.to_string()
        } else {
            let record = sevr_pv.split('.').next().unwrap_or(sevr_pv);
            format!("{record}.SEVR")
        };
        let mut ob = self.framed("Symbol", x, y, w, h);
        ob.set("file", quote_string(filename));
        ob.set("numStates", 5);
        let to_map = |pairs: [(i64, i64); 5]| -> BTreeMap<i64, String> {
            pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect()
        };
        ob.set("minValues", to_map([(0, 6), (1, 0), (2, 2), (3, 4), (4, 1)]));
        ob.set("maxValues", to_map([(0, 8), (1, 1), (2, 4), (3, 6), (4, 2)]));
        ob.set(
            "controlPvs",
            BTreeMap::from([(0, quote_string(status_pv)), (1, quote_string(&sevr_pv))]),
        );
        ob.set("numPvs", 2);
        ob.set("shiftCount", BTreeMap::from([(1, "1".to_string())]));
        ob.set("useOriginalColors", true);
        Ok(ob)
    }

    /// A circle with a raised 3d look. `ta` is the technical area whose
    /// title and help colours fill it, for example `"CO"` or `"VA"`.
    pub fn raised_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = EdmObject::with_defaults("Group", self.defaults);
        let mut top_shadow = self.framed("Circle", x, y, w - 2, h - 1);
        top_shadow.set("lineColor", self.colour("Top Shadow")?);
        top_shadow.set("lineWidth", 2);
        group.add_object(top_shadow)?;
        let mut bottom_shadow = self.framed("Circle", x + 2, y + 2, w - 2, h - 1);
        bottom_shadow.set("lineColor", self.colour("Bottom Shadow")?);
        bottom_shadow.set("lineWidth", 2);
        group.add_object(bottom_shadow)?;
        let mut base = self.framed("Circle", x + 2, y + 2, w - 3, h - 3);
        base.set("lineColor", self.colour(&format!("{ta} help"))?);
        base.set("fillColor", self.colour(&format!("{ta} title"))?);
        base.set("lineWidth", 3);
        base.set("fill", true);
        group.add_object(base)?;
        let mut sparkle = self.framed("Circle", x + 12, y + 6, 4, 3);
        sparkle.set("lineColor", self.colour("Top Shadow")?);
        sparkle.set("fillColor", self.colour("White")?);
        sparkle.set("lineWidth", 2);
        sparkle.set("fill", true);
        group.add_object(sparkle)?;
        group.set_origin(x, y);
        group.set_frame_size(w, h);
        Ok(group)
    }

    /// A raised circle with a centred text label.
    pub fn raised_text_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_circle(x, y, w, h, ta)?;
        let mut text_label = self.label(x, y, w, h, text, "center")?;
        text_label.set("font", quote_string("arial-bold-r-14.0"));
        group.add_object(text_label)?;
        Ok(group)
    }

    /// A raised circle acting as a button for the given screen.
    pub fn raised_button_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        filename: &str,
        symbols: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_circle(x, y, w, h, ta)?;
        group.add_object(self.rd(4, 4, 42, 24, filename, symbols)?)?;
        group.lower_object(group.children().len() - 1)?;
        Ok(group)
    }

    /// A raised circle button with a centred text label.
    pub fn raised_text_button_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        text: &str,
        filename: &str,
        symbols: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_button_circle(x, y, w, h, filename, symbols, ta)?;
        let mut text_label = self.label(x, y, w, h, text, "center")?;
        text_label.set("font", quote_string("arial-bold-r-14.0"));
        group.add_object(text_label)?;
        Ok(group)
    }

    /// A raised circle with a centred PV monitor.
    pub fn raised_pv_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        pv: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_circle(x, y, w, h, ta)?;
        let mut monitor = self.text_monitor(x, y, w, h, pv, false, "left")?;
        monitor.set("font", quote_string("arial-bold-r-14.0"));
        monitor.set("fontAlign", quote_string("center"));
        group.add_object(monitor)?;
        Ok(group)
    }

    /// A raised PV circle that opens a help screen when pressed.
    pub fn raised_pv_button_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        pv: &str,
        filename: &str,
        symbols: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_pv_circle(x, y, w, h, pv, ta)?;
        group.add_object(self.rd(x + 4, y + 4, w - 8, h - 6, filename, symbols)?)?;
        group.lower_object(group.children().len() - 1)?;
        Ok(group)
    }

    /// A raised PV circle that runs a shell command when pressed.
    pub fn raised_pv_shell_circle(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        pv: &str,
        command: &str,
        ta: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = self.raised_pv_circle(x, y, w, h, pv, ta)?;
        group.add_object(self.shell(x + 4, y + 4, w - 8, h - 6, command)?)?;
        group.lower_object(group.children().len() - 1)?;
        Ok(group)
    }

    /// An embedded window showing `filename`.
    pub fn embed(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        filename: &str,
        symbols: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.framed("Embedded Window", x, y, w, h);
        ob.set("displaySource", quote_string("menu"));
        ob.set("filePv", quote_string(r"LOC\dummy=i:0"));
        ob.set("numDsps", 1);
        ob.set("displayFileName", map0(quote_string(filename)));
        if !symbols.is_empty() {
            ob.set("symbols", map0(quote_string(symbols)));
        }
        ob.set("noScroll", true);
        Ok(ob)
    }

    /// The standard EXIT button.
    pub fn exit_button(&self, x: i64, y: i64, w: i64, h: i64) -> Result<EdmObject, ChromeError> {
        let mut button = self.framed("Exit Button", x, y, w, h);
        button.set("fgColor", self.colour("Exit/Quit/Kill")?);
        button.set("bgColor", self.colour("Canvas")?);
        button.set_shadows(self.defaults.colours())?;
        button.set("label", quote_string("EXIT"));
        button.set("font", quote_string("arial-medium-r-16.0"));
        button.set("3d", true);
        Ok(button)
    }

    /// A polyline through the given points, sized to their bounding box.
    pub fn lines(
        &self,
        points: &[(i64, i64)],
        colour: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = EdmObject::with_defaults("Lines", self.defaults);
        ob.set("lineColor", self.colour(colour)?);
        ob.set("numPoints", points.len() as i64);
        let coord_map = |pick: fn(&(i64, i64)) -> i64| -> BTreeMap<i64, String> {
            points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as i64, pick(p).to_string()))
                .collect()
        };
        ob.set("xPoints", coord_map(|p| p.0));
        ob.set("yPoints", coord_map(|p| p.1));
        ob.autofit_dimensions(10, 10)?;
        Ok(ob)
    }

    /// An arrow from `(x0,y0)` to `(x1,y1)`.
    pub fn arrow(
        &self,
        x0: i64,
        x1: i64,
        y0: i64,
        y1: i64,
        colour: &str,
    ) -> Result<EdmObject, ChromeError> {
        let mut ob = self.lines(&[(x0, y0), (x1, y1)], colour)?;
        ob.set("arrows", quote_string("to"));
        Ok(ob)
    }

    /// A button that changes colour with the status and severity of the
    /// device behind it. With `edl` set it opens a related display,
    /// otherwise it runs `filename` as a shell command.
    pub fn colour_changing_rd(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        name: &str,
        status_pv: &str,
        sevr_pv: &str,
        filename: &str,
        symbols: &str,
        edl: bool,
    ) -> Result<EdmObject, ChromeError> {
        let mut group = EdmObject::with_defaults("Group", self.defaults);
        if edl {
            group.add_object(self.rd_visible(x, y, w, h, "", filename, symbols)?)?;
        } else {
            group.add_object(self.shell_visible(x, y, w, h, "", filename)?)?;
        }
        let mut text = self.label(x + 2, y + 2, w - 4, h - 4, name, "center")?;
        text.set("font", quote_string("arial-bold-r-14.0"));
        text.set("fgColor", self.colour("Related display")?);
        text.set("bgAlarm", true);
        text.set("alarmPv", quote_string(sevr_pv));
        text.set("visPv", quote_string(status_pv));
        text.set("visMin", quote_string("1"));
        text.set("visMax", quote_string("2"));
        text.set("useDisplayBg", false);
        let mut text2 = text.clone();
        text.set("visInvert", true);
        text2.set("bgColor", self.colour("Monitor: NORMAL")?);
        group.add_object(text)?;
        group.add_object(text2)?;
        group.autofit_dimensions(10, 10)?;
        Ok(group)
    }

    /// The beam axis marker for a beam travelling left or right.
    pub fn flip_axis(&self, direction: FlipDirection) -> Result<EdmObject, ChromeError> {
        let mut group = EdmObject::with_defaults("Group", self.defaults);
        let bold_label = |x, y, w, h, text: &str| -> Result<EdmObject, ChromeError> {
            let mut lab = self.label(x, y, w, h, text, "center")?;
            lab.set("font", quote_string("arial-bold-r-14.0"));
            Ok(lab)
        };
        match direction {
            FlipDirection::Left => {
                group.add_object(bold_label(50, 50, 10, 20, "Z")?)?;
                group.add_object(self.arrow(5, 45, 60, 60, "grey-13")?)?;
                group.add_object(self.arrow(5, 5, 60, 20, "grey-13")?)?;
                group.add_object(bold_label(0, 0, 10, 16, "Y")?)?;
                group.add_object(bold_label(40, 20, 77, 32, "X (into \n    screen)")?)?;
                group.add_object(self.arrow(5, 35, 60, 45, "Black")?)?;
            }
            FlipDirection::Right => {
                group.add_object(bold_label(5, 25, 10, 15, "Z")?)?;
                group.add_object(self.arrow(40, 0, 45, 45, "Black")?)?;
                group.add_object(self.arrow(40, 40, 45, 5, "Black")?)?;
                group.add_object(bold_label(15, 0, 20, 20, "Y")?)?;
                group.add_object(bold_label(50, 30, 69, 32, "X (out of  \n   screen)")?)?;
                group.add_object(self.arrow(40, 70, 45, 65, "grey-13")?)?;
            }
        }
        group.autofit_dimensions(10, 10)?;
        Ok(group)
    }
}

/// Which way the beam travels across a flipped screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Left,
    Right,
}
