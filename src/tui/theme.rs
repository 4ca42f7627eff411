use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// One color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub done: Color,
    pub danger: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Theme {
    /// Light palette (default)
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF4, 0xF4, 0xF8),
            text: Color::Rgb(0x33, 0x33, 0x44),
            text_bright: Color::Rgb(0x11, 0x11, 0x1A),
            highlight: Color::Rgb(0x4A, 0x5C, 0xFF),
            dim: Color::Rgb(0x88, 0x88, 0x99),
            done: Color::Rgb(0x9A, 0x9A, 0xAA),
            danger: Color::Rgb(0xD9, 0x3B, 0x3B),
            selection_bg: Color::Rgb(0xDD, 0xE2, 0xFF),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x1C),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0xC0, 0x2D),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            done: Color::Rgb(0x5C, 0x5C, 0x70),
            danger: Color::Rgb(0xFF, 0x55, 0x55),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x40),
            input_bg: Color::Rgb(0x1E, 0x1E, 0x2C),
        }
    }

    /// Apply `key = "#RRGGBB"` overrides. Unknown keys and bad hex are skipped.
    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "highlight" => self.highlight = color,
                "dim" => self.dim = color,
                "done" => self.done = color,
                "danger" => self.danger = color,
                "selection_bg" => self.selection_bg = color,
                "input_bg" => self.input_bg = color,
                _ => {}
            }
        }
    }
}

/// Both palettes; the dark-mode flag picks one at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        ThemeSet {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl ThemeSet {
    /// Build palettes from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut set = ThemeSet::default();
        set.light.apply_overrides(&ui.colors.light);
        set.dark.apply_overrides(&ui.colors.dark);
        set
    }

    pub fn pick(&self, dark_mode: bool) -> &Theme {
        if dark_mode { &self.dark } else { &self.light }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
