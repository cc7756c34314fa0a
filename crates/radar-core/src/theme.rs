// File: crates/radar-core/src/theme.rs
// Summary: Color type and theme presets for chart rendering.

/// 8-bit ARGB color, backend-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub marker: Color,
    pub polygon: Color,
    pub label: Color,
}

impl Theme {
    /// The original palette: white surface, black grid and markers, red data
    /// polygon.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::from_rgb(255, 255, 255),
            grid: Color::from_rgb(0, 0, 0),
            marker: Color::from_rgb(0, 0, 0),
            polygon: Color::from_rgb(255, 0, 0),
            label: Color::from_rgb(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(110, 110, 120),
            marker: Color::from_rgb(200, 200, 210),
            polygon: Color::from_rgb(235, 70, 70),
            label: Color::from_rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::classic()
}
