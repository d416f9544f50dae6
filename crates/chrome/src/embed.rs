//! Embedded-window substitution.
//!
//! EDM renders an `Embedded Window` by loading another screen file at
//! runtime, which costs a file open per widget per screen. The substituter
//! inlines those windows ahead of time: the target screen is parsed once,
//! cached, and its contents dropped into a group where the window was.
//! Objects the source screen parked outside its own frame ("outsiders",
//! usually menu muxes holding macro state) are re-attached to the host
//! screen, and single-state muxes are merged to keep the widget count down.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use edlkit_model::{EdmObject, ObjectError, PropValue, parse_screen, quote_string};
use regex::Regex;

use crate::error::ChromeError;

/// How many temperature, waterflow and current embeds to keep. Embeds
/// beyond the limit are removed instead of substituted.
#[derive(Debug, Clone)]
pub struct EmbedLimits {
    pub ntemp: i64,
    pub nflow: i64,
    pub ncurr: i64,
}

impl Default for EmbedLimits {
    fn default() -> Self {
        EmbedLimits {
            ntemp: 99,
            nflow: 99,
            ncurr: 99,
        }
    }
}

enum Verdict {
    Replace,
    Remove,
    Nothing,
}

/// Inlines embedded windows into host screens, caching parsed targets
/// across calls.
pub struct EmbedSubstituter {
    paths: Vec<PathBuf>,
    limits: EmbedLimits,
    ungroup: bool,
    additional_macros: HashMap<String, String>,
    cache: HashMap<String, EdmObject>,
    counter: u64,
    calc: Regex,
}

impl EmbedSubstituter {
    /// A substituter searching `paths` for embedded screen files.
    pub fn new(paths: Vec<PathBuf>) -> Result<Self, ChromeError> {
        Ok(EmbedSubstituter {
            paths,
            limits: EmbedLimits::default(),
            ungroup: false,
            additional_macros: HashMap::new(),
            cache: HashMap::new(),
            counter: 0,
            calc: Regex::new(r"A>=(\d+)\?1:0")?,
        })
    }

    pub fn limits(mut self, limits: EmbedLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Splice substituted contents directly into the parent instead of
    /// wrapping them in a group.
    pub fn ungroup(mut self, ungroup: bool) -> Self {
        self.ungroup = ungroup;
        self
    }

    /// A macro substituted into every inlined screen, on top of the macros
    /// each embed carries in its `symbols`.
    pub fn macro_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_macros.insert(key.into(), value.into());
        self
    }

    /// Substitute every embedded window under `screen` in place.
    pub fn substitute_screen(&mut self, screen: &mut EdmObject) -> Result<(), ChromeError> {
        if !screen.is_screen() {
            return Err(ChromeError::NotAScreen(screen.kind().to_string()));
        }
        let outsiders = self.substitute_in(screen)?;
        let (screen_w, screen_h) = screen.dimensions()?;

        // single-state muxes parked off screen get merged; everything else
        // is re-attached as is
        let mut menu_muxes = Vec::new();
        let mut menu_mux_pvs = Vec::new();
        for ob in outsiders {
            let single = num_items(&ob) <= 1;
            if single && (ob.kind() == "Menu Mux" || ob.kind() == "Menu Mux PV") {
                let (x, y) = ob.position()?;
                if x > screen_w || y > screen_h {
                    if ob.kind() == "Menu Mux" {
                        menu_muxes.push(ob);
                    } else {
                        menu_mux_pvs.push(ob);
                    }
                    continue;
                }
            }
            screen.add_object(ob)?;
        }
        merge_muxes(screen, "Menu Mux", menu_muxes)?;
        merge_muxes(screen, "Menu Mux PV", menu_mux_pvs)?;
        Ok(())
    }

    /// Walk the subtree replacing or removing embedded windows, returning
    /// the outsiders collected from every inlined screen. Inlined content
    /// is not rescanned, so an embed inside a substituted screen stays.
    fn substitute_in(&mut self, node: &mut EdmObject) -> Result<Vec<EdmObject>, ChromeError> {
        let mut outsiders = Vec::new();
        let mut i = 0;
        while i < node.children().len() {
            if node.children()[i].kind() != "Embedded Window" {
                if node.children()[i].is_container() {
                    let nested = self.substitute_in(&mut node.children_mut()[i])?;
                    outsiders.extend(nested);
                }
                i += 1;
                continue;
            }
            match self.check_embed(&node.children()[i])? {
                Verdict::Nothing => i += 1,
                Verdict::Remove => {
                    node.remove_object(i)?;
                }
                Verdict::Replace => {
                    let (filename, macros) = embed_target(&node.children()[i])?;
                    let Some((mut group, mut new_outsiders)) =
                        self.group_from_screen(&filename, &macros)?
                    else {
                        i += 1;
                        continue;
                    };
                    let (x, y) = node.children()[i].position()?;
                    group.shift(x, y)?;
                    for ob in &mut new_outsiders {
                        ob.shift(x, y)?;
                    }
                    let group_len = group.children().len();
                    node.replace_object(i, group)?;
                    if self.ungroup {
                        node.ungroup(i)?;
                        i += group_len;
                    } else {
                        i += 1;
                    }
                    outsiders.extend(new_outsiders);
                }
            }
        }
        Ok(outsiders)
    }

    /// Load `filename` from the search paths (or the cache) and turn it
    /// into a group plus its outsiders, with macros substituted. `None`
    /// when the file is on none of the paths.
    fn group_from_screen(
        &mut self,
        filename: &str,
        macros: &HashMap<String, String>,
    ) -> Result<Option<(EdmObject, Vec<EdmObject>)>, ChromeError> {
        let filename = format!("{}.edl", filename.trim_matches('"').trim_end_matches(".edl"));
        let mut screen = match self.cache.get(&filename) {
            Some(screen) => screen.clone(),
            None => {
                let Some(path) = self
                    .paths
                    .iter()
                    .map(|p| p.join(&filename))
                    .find(|p| p.is_file())
                else {
                    return Ok(None);
                };
                let text = fs::read_to_string(&path).map_err(|source| ChromeError::Io {
                    path: path.clone(),
                    source,
                })?;
                let screen = parse_screen(&text)?;
                self.cache.insert(filename.clone(), screen.clone());
                screen
            }
        };
        let (screen_w, screen_h) = screen.dimensions()?;
        let mut group = EdmObject::new("Group");
        group.set_frame_size(screen_w, screen_h);
        self.counter += 1;
        let mut outsiders = Vec::new();
        while !screen.children().is_empty() {
            let mut ob = screen.remove_object(0)?;
            // keep generated labels unique across instances
            ob.substitute("auto-label", &format!("label{}", self.counter));
            let (x, y) = ob.position()?;
            if x < screen_w && y < screen_h {
                group.add_object(ob)?;
            } else {
                outsiders.push(ob);
            }
        }
        let mut all_macros = self.additional_macros.clone();
        all_macros.extend(macros.iter().map(|(k, v)| (k.clone(), v.clone())));
        for (key, value) in &all_macros {
            let target = format!("$({key})");
            group.substitute(&target, value);
            for ob in &mut outsiders {
                ob.substitute(&target, value);
            }
        }
        Ok(Some((group, outsiders)))
    }

    /// Triage an embedded window by its `filePv`: a local dummy PV means
    /// always inline; a temperature/flow/current CALC expression inlines
    /// while its threshold is within the limits and removes beyond them.
    fn check_embed(&self, ob: &EdmObject) -> Result<Verdict, ChromeError> {
        let file_pv = ob.string("filePv")?;
        if file_pv.contains("dummy") {
            return Ok(Verdict::Replace);
        }
        for (marker, limit) in [
            ("NTEMP", self.limits.ntemp),
            ("NFLOW", self.limits.nflow),
            ("NCURR", self.limits.ncurr),
        ] {
            if file_pv.contains(marker) && file_pv.contains("CALC") {
                if let Some(caps) = self.calc.captures(&file_pv)
                    && let Ok(threshold) = caps[1].parse::<i64>()
                    && threshold <= limit
                {
                    return Ok(Verdict::Replace);
                }
                return Ok(Verdict::Remove);
            }
        }
        Ok(Verdict::Nothing)
    }
}

/// The target filename and macro map of an embedded window, taken from the
/// highest display slot.
fn embed_target(ob: &EdmObject) -> Result<(String, HashMap<String, String>), ChromeError> {
    let files = ob.properties().require("displayFileName")?;
    let files = files.as_map().ok_or_else(|| ObjectError::WrongShape {
        key: "displayFileName".to_string(),
        expected: "a map",
    })?;
    let slot = files.keys().max().copied().unwrap_or(0);
    let filename = files.get(&slot).cloned().unwrap_or_default();
    let mut macros = HashMap::new();
    if let Some(symbols) = ob
        .get("symbols")
        .and_then(PropValue::as_map)
        .and_then(|m| m.get(&slot))
    {
        for pair in symbols.trim_matches('"').split(',') {
            let parts: Vec<&str> = pair.split('=').map(str::trim).collect();
            if parts.len() == 2 {
                macros.insert(parts[0].to_string(), parts[1].to_string());
            }
        }
    }
    Ok((filename, macros))
}

fn num_items(ob: &EdmObject) -> i64 {
    match ob.get("numItems") {
        Some(PropValue::Int(n)) => *n,
        Some(PropValue::Str(s)) => s.trim_matches('"').parse().unwrap_or(0),
        _ => 0,
    }
}

fn map_entry0(value: Option<&PropValue>) -> Option<String> {
    value.and_then(PropValue::as_map).and_then(|m| m.get(&0)).cloned()
}

/// Merge single-state muxes into combined muxes with up to four symbol
/// slots each, attaching the results to `screen`.
fn merge_muxes(
    screen: &mut EdmObject,
    kind: &str,
    muxes: Vec<EdmObject>,
) -> Result<(), ChromeError> {
    let mut merged = EdmObject::new(kind);
    for ob in muxes {
        let max_slot = ob
            .properties()
            .keys()
            .filter_map(|k| k.strip_prefix("symbol"))
            .filter(|rest| rest.len() == 1)
            .filter_map(|rest| rest.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        // flush when this mux cannot fit in the remaining slots
        if max_slot > 3 || merged.get(&format!("symbol{}", 3 - max_slot)).is_some() {
            screen.add_object(merged)?;
            merged = EdmObject::new(kind);
        }
        merged.set("numItems", 1);
        merged.set("symbolTag", BTreeMap::from([(0, quote_string("."))]));
        let (x, y) = ob.position()?;
        merged.set_origin(x, y);
        let (w, h) = ob.dimensions()?;
        merged.set_frame_size(w, h);
        for i in 0..3 {
            let Some(symbol) = map_entry0(ob.get(&format!("symbol{i}"))) else {
                continue;
            };
            let mut slot = i;
            while merged.get(&format!("symbol{slot}")).is_some() {
                slot += 1;
            }
            merged.set(format!("symbol{slot}"), BTreeMap::from([(0, symbol)]));
            for prefix in ["PV", "value"] {
                if let Some(v) = map_entry0(ob.get(&format!("{prefix}{i}"))) {
                    merged.set(format!("{prefix}{slot}"), BTreeMap::from([(0, v)]));
                }
            }
        }
    }
    if merged.get("symbol0").is_some() {
        screen.add_object(merged)?;
    }
    Ok(())
}
