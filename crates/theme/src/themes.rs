use egui::Color32;

/// The colors for a theme variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub text: Color32,
    pub subtext: Color32,
    pub accent: Color32,
    pub folder: Color32,
    pub file: Color32,
    pub danger: Color32,
    pub highlight: Color32,
    pub surface: Color32,
    pub base: Color32,
    pub mantle: Color32,
    pub crust: Color32,
}

pub const GITHUB_LIGHT: Theme = Theme {
    dark: false,
    text: Color32::from_rgb(36, 41, 46),      // fg.default
    subtext: Color32::from_rgb(110, 118, 129), // fg.subtle
    accent: Color32::from_rgb(56, 139, 253),
    folder: Color32::from_rgb(243, 185, 95),
    file: Color32::from_rgb(100, 125, 135),
    danger: Color32::from_rgb(255, 87, 87),
    highlight: Color32::from_rgb(221, 239, 255),
    surface: Color32::from_rgb(246, 248, 250),
    base: Color32::from_rgb(255, 255, 255), // canvas.default
    mantle: Color32::from_rgb(246, 248, 250), // canvas.subtle
    crust: Color32::from_rgb(240, 240, 240),
};

pub const GITHUB_DARK: Theme = Theme {
    dark: true,
    text: Color32::from_rgb(201, 209, 217),   // fg.default
    subtext: Color32::from_rgb(139, 148, 158), // fg.muted
    accent: Color32::from_rgb(88, 166, 255),
    folder: Color32::from_rgb(243, 185, 95),
    file: Color32::from_rgb(125, 150, 160),
    danger: Color32::from_rgb(248, 81, 73),
    highlight: Color32::from_rgb(33, 54, 82),
    surface: Color32::from_rgb(33, 38, 45),
    base: Color32::from_rgb(13, 17, 23), // canvas.default
    mantle: Color32::from_rgb(22, 27, 34), // canvas.subtle
    crust: Color32::from_rgb(1, 4, 9),
};
