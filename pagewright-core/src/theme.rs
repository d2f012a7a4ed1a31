//! Named color palettes for the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EditorError;

/// Colors of one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub bg: &'static str,
    /// Surface color for cards, bars and inputs.
    pub surface: &'static str,
    /// Hairline border color.
    pub border: &'static str,
    /// Accent color.
    pub accent: &'static str,
    /// Default text color.
    pub text: &'static str,
    /// Display name.
    pub label: &'static str,
}

/// Page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Near-black with purple accent.
    #[default]
    Dark,
    /// Light gray with indigo accent.
    Light,
    /// Deep purple with pink accent.
    Purple,
    /// Navy with sky accent.
    Ocean,
    /// Brown with orange accent.
    Sunset,
    /// Translucent with cyan accent.
    Glass,
}

impl Theme {
    /// All themes in picker order.
    pub const ALL: [Theme; 6] = [
        Self::Dark,
        Self::Light,
        Self::Purple,
        Self::Ocean,
        Self::Sunset,
        Self::Glass,
    ];

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Purple => "purple",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Glass => "glass",
        }
    }

    /// The palette for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: "#0A0A0B",
                surface: "#0D0D0F",
                border: "rgba(255,255,255,0.05)",
                accent: "#a855f7",
                text: "#ffffff",
                label: "Dark",
            },
            Self::Light => Palette {
                bg: "#f4f4f5",
                surface: "#ffffff",
                border: "rgba(0,0,0,0.08)",
                accent: "#6366f1",
                text: "#09090b",
                label: "Light",
            },
            Self::Purple => Palette {
                bg: "#120820",
                surface: "#1a0d2e",
                border: "rgba(168,85,247,0.15)",
                accent: "#e879f9",
                text: "#ffffff",
                label: "Purple",
            },
            Self::Ocean => Palette {
                bg: "#071520",
                surface: "#0c1f30",
                border: "rgba(56,189,248,0.12)",
                accent: "#38bdf8",
                text: "#ffffff",
                label: "Ocean",
            },
            Self::Sunset => Palette {
                bg: "#180c08",
                surface: "#221209",
                border: "rgba(251,146,60,0.15)",
                accent: "#fb923c",
                text: "#ffffff",
                label: "Sunset",
            },
            Self::Glass => Palette {
                bg: "rgba(10,10,11,0.9)",
                surface: "rgba(255,255,255,0.05)",
                border: "rgba(255,255,255,0.1)",
                accent: "#06b6d4",
                text: "#ffffff",
                label: "Glass",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| EditorError::UnknownTheme(s.to_string()))
    }
}
