//! Titlebar and exit-button injection.
//!
//! [`add_titlebar`] dresses a finished screen: content is shifted down to
//! make room for a 30px header strip with a tooltip and bevel shadows, a
//! circular technical-area button goes top left, and an exit button lands
//! in the first free bottom-right corner.

use edlkit_model::{DefaultsTable, EdmObject, quote_list_string, quote_string};

use crate::error::ChromeError;
use crate::widgets::Widgets;

const HEADER_HEIGHT: i64 = 30;
const X_SPACER: i64 = 10;
const Y_SPACER: i64 = 10;
const EXIT_W: i64 = 90;
const EXIT_H: i64 = 20;
const MIN_TITLE_WIDTH: i64 = 210;

/// What the circular button at the top left shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// The button text itself.
    Text,
    /// The live value of the button PV.
    Pv,
    /// The PV value, with a related display behind it opening the help
    /// screen.
    PvButton,
    /// The PV value, with a shell command behind it opening the help page.
    PvShell,
}

/// What the header strip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Text,
    Pv,
}

#[derive(Debug, Clone)]
pub struct TitlebarOptions {
    /// Technical area code selecting the colour scheme, for example `"CO"`
    /// or `"VA"`.
    pub technical_area: String,
    pub button: ButtonStyle,
    /// Text or PV for the circular button, per `button`.
    pub button_text: String,
    pub header: HeaderStyle,
    /// Text or PV for the header strip, per `header`.
    pub header_text: String,
    /// Filename of the tooltip screen behind the header.
    pub tooltip: String,
    /// Window title.
    pub title: String,
}

impl Default for TitlebarOptions {
    fn default() -> Self {
        TitlebarOptions {
            technical_area: "CO".to_string(),
            button: ButtonStyle::Text,
            button_text: "$(dom)".to_string(),
            header: HeaderStyle::Text,
            header_text: "Temperature Summary".to_string(),
            tooltip: "generic-tooltip".to_string(),
            title: "Temperatures - $(dom)".to_string(),
        }
    }
}

/// The bare header strip: bevel rectangles plus the right-click tooltip.
fn titlebar_group(
    defaults: &DefaultsTable,
    width: i64,
    tooltip_file: &str,
) -> Result<EdmObject, ChromeError> {
    let mut group = EdmObject::with_defaults("Group", defaults);

    let mut top_shadow = EdmObject::with_defaults("Rectangle", defaults);
    top_shadow.set_origin(0, 2);
    top_shadow.set_frame_size(width - 2, 25);
    top_shadow.set("lineColor", defaults.colour("Top Shadow")?.to_string());
    group.add_object(top_shadow)?;

    let mut bottom_shadow = EdmObject::with_defaults("Rectangle", defaults);
    bottom_shadow.set_origin(1, 3);
    bottom_shadow.set_frame_size(width - 2, 25);
    bottom_shadow.set("lineColor", defaults.colour("Bottom Shadow")?.to_string());
    group.add_object(bottom_shadow)?;

    let mut tooltip = EdmObject::with_defaults("Related Display", defaults);
    tooltip.set_origin(1, 3);
    tooltip.set_frame_size(width - 2, 24);
    tooltip.set("xPosOffset", 5);
    tooltip.set("yPosOffset", 5);
    tooltip.set("button3Popup", true);
    tooltip.set("invisible", true);
    tooltip.set("buttonLabel", quote_string("tooltip"));
    tooltip.set(
        "displayFileName",
        std::collections::BTreeMap::from([(0, quote_string(tooltip_file))]),
    );
    tooltip.set(
        "setPosition",
        std::collections::BTreeMap::from([(0, quote_string("button"))]),
    );
    tooltip.set("font", quote_string("arial-bold-r-14.0"));
    tooltip.set("numDsps", 1);
    group.add_object(tooltip)?;

    group.set_origin(0, 0);
    group.set_frame_size(width, HEADER_HEIGHT);
    Ok(group)
}

fn pv_titlebar(
    defaults: &DefaultsTable,
    width: i64,
    pv: &str,
    tooltip_file: &str,
    ta: &str,
) -> Result<EdmObject, ChromeError> {
    let mut group = titlebar_group(defaults, width, tooltip_file)?;
    let mut monitor = EdmObject::with_defaults("Textupdate", defaults);
    monitor.set_origin(1, 3);
    monitor.set_frame_size(width + 40, 25);
    monitor.set("font", quote_string("arial-bold-r-16.0"));
    monitor.set("fontAlign", quote_string("center"));
    monitor.set("fgColor", defaults.colour("Black")?.to_string());
    monitor.set("bgColor", defaults.colour(&format!("{ta} title"))?.to_string());
    monitor.set("fill", true);
    monitor.set("controlPv", quote_string(pv));
    group.add_object(monitor)?;
    Ok(group)
}

fn text_titlebar(
    defaults: &DefaultsTable,
    width: i64,
    text: &str,
    tooltip_file: &str,
    ta: &str,
) -> Result<EdmObject, ChromeError> {
    let mut group = titlebar_group(defaults, width, tooltip_file)?;
    let mut label = EdmObject::with_defaults("Static Text", defaults);
    label.set_origin(1, 3);
    label.set_frame_size(width + 40, 25);
    label.set("font", quote_string("arial-bold-r-16.0"));
    label.set("fontAlign", quote_string("center"));
    label.set("bgColor", defaults.colour(&format!("{ta} title"))?.to_string());
    label.set("fgColor", defaults.colour("Black")?.to_string());
    label.set("value", quote_list_string(text));
    group.add_object(label)?;
    Ok(group)
}

/// Add a titlebar, left button and exit button to `screen`, resizing it to
/// fit, and set the window title.
pub fn add_titlebar(
    screen: &mut EdmObject,
    opts: &TitlebarOptions,
    defaults: &DefaultsTable,
) -> Result<(), ChromeError> {
    if !screen.is_screen() {
        return Err(ChromeError::NotAScreen(screen.kind().to_string()));
    }
    let widgets = Widgets::new(defaults);
    let ta = opts.technical_area.as_str();

    // first pass over the content to find its extent
    screen.autofit_dimensions(X_SPACER, Y_SPACER)?;
    let mut maxx = 0;
    let mut maxy = 0;
    let mut corners = Vec::new();
    for ob in screen.children() {
        if ob.kind() == "Menu Mux PV" {
            continue;
        }
        let (x, y) = ob.position()?;
        let (w, h) = ob.dimensions()?;
        maxx = maxx.max(x + w);
        maxy = maxy.max(y + h + HEADER_HEIGHT);
        corners.push((x + w, y + h + HEADER_HEIGHT));
    }

    // drop the exit button below anything occupying its corner
    let exit_x = maxx.max(MIN_TITLE_WIDTH - X_SPACER) + X_SPACER - EXIT_W - 10;
    let mut exit_y = maxy + Y_SPACER - EXIT_H - 10;
    for (x, y) in corners {
        if x > exit_x - X_SPACER && y > exit_y - Y_SPACER {
            exit_y = y + Y_SPACER;
        }
    }
    let w = exit_x + EXIT_W + 10;
    let h = exit_y + EXIT_H + 10;
    screen.set_frame_size(w, h);

    // make room for the header
    for ob in screen.children_mut() {
        if ob.kind() != "Menu Mux PV" {
            ob.shift(0, HEADER_HEIGHT)?;
        }
    }

    let left = match opts.button {
        ButtonStyle::Text => widgets.raised_text_circle(0, 0, 50, 30, &opts.button_text, ta)?,
        ButtonStyle::Pv => widgets.raised_pv_circle(0, 0, 50, 30, &opts.button_text, ta)?,
        ButtonStyle::PvButton => widgets.raised_pv_button_circle(
            0,
            0,
            50,
            30,
            &opts.button_text,
            "generic-help",
            "draw=$(P).png",
            ta,
        )?,
        ButtonStyle::PvShell => widgets.raised_pv_shell_circle(
            0,
            0,
            50,
            30,
            &opts.button_text,
            "firefox $(autogen)/documentation/$(P)-help.html",
            ta,
        )?,
    };
    screen.add_object(left)?;

    let middle = match opts.header {
        HeaderStyle::Text => text_titlebar(defaults, w, &opts.header_text, &opts.tooltip, ta)?,
        HeaderStyle::Pv => pv_titlebar(defaults, w, &opts.header_text, &opts.tooltip, ta)?,
    };
    screen.add_object(middle)?;
    screen.lower_object(screen.children().len() - 1)?;

    screen.add_object(widgets.exit_button(exit_x, exit_y, EXIT_W, EXIT_H)?)?;
    screen.set("title", quote_string(&opts.title));
    Ok(())
}
