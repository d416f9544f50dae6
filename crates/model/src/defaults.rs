//! The defaults table: per-type default properties and the colour index
//! lookup, loaded from a JSON cache built out-of-band against an EDM
//! installation.
//!
//! The table is an ordinary value passed into whatever constructs objects,
//! so tests and hosts control exactly which table is in effect.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DefaultsError, ObjectError};
use crate::properties::PropertyMap;
use crate::value::quote_string;

/// Colour name to `index N` lookup, mirroring an EDM `colors.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColourMap {
    colours: HashMap<String, String>,
}

impl ColourMap {
    /// The `index N` token for a named colour.
    pub fn lookup(&self, name: &str) -> Result<&str, ObjectError> {
        self.colours
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ObjectError::UnknownColour(name.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, index: u32) {
        self.colours.insert(name.into(), format!("index {index}"));
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsTable {
    colours: ColourMap,
    properties: HashMap<String, PropertyMap>,
}

impl DefaultsTable {
    /// Load a defaults cache from JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefaultsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a defaults cache, degrading to the built-in table when the
    /// cache is absent or unreadable.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(table) => table,
            Err(e) => {
                log::warn!(
                    "defaults cache {} unusable ({e}), using built-in defaults",
                    path.as_ref().display()
                );
                Self::builtin()
            }
        }
    }

    /// A small built-in table: the standard screen properties and the
    /// colour names the stock widgets rely on. Types not listed fall back
    /// to the synthetic defaults of [`EdmObject::new`].
    ///
    /// [`EdmObject::new`]: crate::object::EdmObject::new
    pub fn builtin() -> Self {
        let mut colours = ColourMap::default();
        for (name, index) in [
            ("White", 0),
            ("Top Shadow", 1),
            ("Canvas", 3),
            ("Button: On", 5),
            ("Bottom Shadow", 11),
            ("grey-13", 13),
            ("Black", 14),
            ("Monitor: NORMAL", 16),
            ("Related display", 18),
            ("Exit/Quit/Kill", 20),
            ("Controller", 25),
            ("CO title", 53),
            ("CO help", 54),
            ("MO title", 55),
            ("MO help", 56),
            ("VA title", 57),
            ("VA help", 58),
            ("DI title", 59),
            ("DI help", 60),
        ] {
            colours.insert(name, index);
        }

        let mut screen = PropertyMap::new();
        screen.set("major", 4);
        screen.set("minor", 0);
        screen.set("release", 1);
        screen.set("x", 0);
        screen.set("y", 0);
        screen.set("w", 500);
        screen.set("h", 600);
        screen.set("font", quote_string("arial-medium-r-14.0"));
        screen.set("ctlFont", quote_string("arial-bold-r-14.0"));
        screen.set("btnFont", quote_string("arial-bold-r-14.0"));
        screen.set("fgColor", "index 14");
        screen.set("bgColor", "index 3");
        screen.set("textColor", "index 14");
        screen.set("ctlFgColor1", "index 25");
        screen.set("ctlFgColor2", "index 0");
        screen.set("ctlBgColor1", "index 3");
        screen.set("ctlBgColor2", "index 14");
        screen.set("topShadowColor", "index 1");
        screen.set("botShadowColor", "index 11");
        screen.set("showGrid", true);
        screen.set("snapToGrid", true);

        let mut properties = HashMap::new();
        properties.insert("Screen".to_string(), screen);
        DefaultsTable {
            colours,
            properties,
        }
    }

    pub fn colours(&self) -> &ColourMap {
        &self.colours
    }

    pub fn colour(&self, name: &str) -> Result<&str, ObjectError> {
        self.colours.lookup(name)
    }

    /// The cached default properties for a widget type, if any.
    pub fn properties_for(&self, kind: &str) -> Option<&PropertyMap> {
        self.properties.get(kind)
    }

    pub fn set_properties_for(&mut self, kind: impl Into<String>, props: PropertyMap) {
        self.properties.insert(kind.into(), props);
    }
}
