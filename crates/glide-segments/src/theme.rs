//! Palette and label styling
//!
//! Colors are resolved from an explicit [`ThemeMode`]; nothing here reads
//! ambient platform state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SegmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

/// 8-bit RGBA color, written as `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl std::str::FromStr for Color {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SegmentError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// How a segment label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub weight: FontWeight,
    pub color: Color,
}

/// Colors for each semantic role of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Track behind the label row
    pub track: Color,
    /// Sliding indicator
    pub indicator: Color,
    /// Text of the selected label
    pub selected_text: Color,
    /// Text of every other label
    pub unselected_text: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                track: Color::rgb(0xF3, 0xF3, 0xF3),
                indicator: Color::rgb(0xFF, 0xFF, 0xFF),
                selected_text: Color::rgb(0x2E, 0x31, 0x37),
                unselected_text: Color::rgb(0x5A, 0x5F, 0x69),
            },
            ThemeMode::Dark => Self {
                track: Color::rgb(0xEA, 0x6D, 0x1F),
                indicator: Color::rgb(0xFF, 0xFF, 0xFF),
                selected_text: Color::rgb(0x2E, 0x31, 0x37),
                unselected_text: Color::rgb(0xFF, 0xFF, 0xFF),
            },
        }
    }

    pub fn label_style(&self, selected: bool) -> LabelStyle {
        if selected {
            LabelStyle {
                weight: FontWeight::Bold,
                color: self.selected_text,
            }
        } else {
            LabelStyle {
                weight: FontWeight::Regular,
                color: self.unselected_text,
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}
