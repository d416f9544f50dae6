//! Proportional screen resizing with font snapping.

use edlkit_model::{EdmObject, PropValue};

use crate::error::ChromeError;

/// The point sizes (in tenths) the EDM font server actually has.
const FONT_SIZES: [i64; 22] = [
    80, 100, 120, 140, 160, 180, 200, 240, 280, 320, 360, 420, 480, 600, 720, 960, 1200, 1680,
    2160, 3120, 4080, 5040,
];

/// Scale the size embedded in a font name by `factor`, snapping to the
/// nearest available size. `None` when the font name carries no parseable
/// size.
pub fn new_font_size(factor: f64, font: &str) -> Option<String> {
    let last = font.rsplit('-').next()?;
    let size: i64 = last.trim_end_matches('"').trim_end_matches(".0").parse().ok()?;
    let target = (size as f64 * factor * 10.0) as i64;
    let snapped = FONT_SIZES
        .iter()
        .copied()
        .min_by_key(|s| (s - target).abs())?;
    Some(font.replace(&format!("-{size}"), &format!("-{}", snapped / 10)))
}

fn rescale_fonts(ob: &mut EdmObject, factor: f64) {
    if let Some(font) = ob.get("font").and_then(PropValue::as_str).map(str::to_string) {
        match new_font_size(factor, &font) {
            Some(new_font) => ob.set("font", new_font),
            None => log::warn!("font {font} has no parseable size, leaving it alone"),
        }
    }
    for child in ob.children_mut() {
        rescale_fonts(child, factor);
    }
}

/// Resize `screen` to `width` x `height`, scaling its contents and
/// snapping every font to the nearest available size. The font factor
/// follows the width change.
pub fn resize_screen(
    screen: &mut EdmObject,
    width: i64,
    height: i64,
) -> Result<(), ChromeError> {
    if !screen.is_screen() {
        return Err(ChromeError::NotAScreen(screen.kind().to_string()));
    }
    let (old_width, _) = screen.dimensions()?;
    let factor = width as f64 / old_width as f64;
    screen.set_dimensions(width, height)?;
    rescale_fonts(screen, factor);
    Ok(())
}
