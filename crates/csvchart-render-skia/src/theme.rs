// File: crates/csvchart-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub bar_fill: skia::Color,
    pub line_stroke: skia::Color,
    pub point_fill: skia::Color,
    /// Slice colors for pie charts, cycled when there are more slices.
    pub palette: [skia::Color; 8],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 225, 225, 232),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 10, 10, 20),
            tick: skia::Color::from_argb(255, 90, 90, 100),
            bar_fill: skia::Color::from_argb(255, 220, 70, 70),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            point_fill: skia::Color::from_argb(255, 30, 60, 230),
            palette: [
                skia::Color::from_argb(255, 255, 85, 85),
                skia::Color::from_argb(255, 85, 85, 255),
                skia::Color::from_argb(255, 85, 200, 85),
                skia::Color::from_argb(255, 250, 210, 60),
                skia::Color::from_argb(255, 255, 150, 60),
                skia::Color::from_argb(255, 160, 90, 220),
                skia::Color::from_argb(255, 60, 200, 200),
                skia::Color::from_argb(255, 150, 150, 150),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_fill: skia::Color::from_argb(255, 96, 156, 255),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            point_fill: skia::Color::from_argb(255, 255, 230, 70),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 190, 120, 255),
                skia::Color::from_argb(255, 255, 150, 60),
                skia::Color::from_argb(255, 80, 220, 220),
                skia::Color::from_argb(255, 170, 170, 180),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            bar_fill: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            line_stroke: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            point_fill: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
                skia::Color::from_argb(255, 0xd3, 0x36, 0x82), // magenta
            ],
        }
    }

    pub fn slice_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
