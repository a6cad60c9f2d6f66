// File: crates/chart-core/src/theme.rs
// Summary: Chart color theme and named colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White figure with black text and spines.
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            title: skia::Color::BLACK,
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }
}

/// CSS/X11 named colors commonly used for bar fills.
pub fn named_color(name: &str) -> Option<skia::Color> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => skia::Color::from_rgb(0, 0, 0),
        "white" => skia::Color::from_rgb(255, 255, 255),
        "red" => skia::Color::from_rgb(255, 0, 0),
        "green" => skia::Color::from_rgb(0, 128, 0),
        "blue" => skia::Color::from_rgb(0, 0, 255),
        "yellow" => skia::Color::from_rgb(255, 255, 0),
        "skyblue" => skia::Color::from_rgb(135, 206, 235),
        "orange" => skia::Color::from_rgb(255, 165, 0),
        "purple" => skia::Color::from_rgb(128, 0, 128),
        "pink" => skia::Color::from_rgb(255, 192, 203),
        "gray" | "grey" => skia::Color::from_rgb(128, 128, 128),
        _ => return None,
    };
    Some(c)
}
