/// Map color theme. Dark mode also switches the basemap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xFF);
    pub const ORANGE: Rgb = Rgb(0xFF, 0xA5, 0x00);
    pub const GRAY: Rgb = Rgb(0x80, 0x80, 0x80);
    pub const SKY_BLUE: Rgb = Rgb(0x87, 0xCE, 0xEB);

    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Outline style of a parcel polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Line width in pixels.
    pub weight: f32,
}

pub const BASE_WEIGHT: f32 = 2.0;
pub const HOVER_WEIGHT: f32 = 4.0;

impl StrokeStyle {
    pub const fn new(color: Rgb, weight: f32) -> Self {
        Self { color, weight }
    }

    /// Resting style: selected parcels are blue, the rest follow the theme.
    pub fn resting(selected: bool, theme: Theme) -> Self {
        let color = if selected {
            Rgb::BLUE
        } else if theme.is_dark() {
            Rgb::SKY_BLUE
        } else {
            Rgb::GRAY
        };
        Self::new(color, BASE_WEIGHT)
    }

    /// Hover wins over selection; leaving hover restores [`StrokeStyle::resting`].
    pub fn for_parcel(selected: bool, hovered: bool, theme: Theme) -> Self {
        if hovered {
            return Self::new(Rgb::ORANGE, HOVER_WEIGHT);
        }
        Self::resting(selected, theme)
    }
}
