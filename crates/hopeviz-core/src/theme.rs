use serde::{Deserialize, Serialize};

/// Color palette for the diagram surface.
///
/// This is opaque configuration: the core substitutes these values into
/// drawables and never validates or transforms them. Defaults match the
/// shipped dark theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub bg: String,
    pub surface: String,
    pub surface_light: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub fast: String,
    pub fast_glow: String,
    pub medium: String,
    pub medium_glow: String,
    pub slow: String,
    pub slow_glow: String,
    pub accent: String,
    pub accent_glow: String,
    pub danger: String,
    pub danger_glow: String,
    pub white: String,
}

impl Theme {
    /// Monospace family used for annotations, sublabels and code-ish text.
    pub const FONT_MONO: &'static str = "'JetBrains Mono', monospace";
    /// Display family used for titles and section headers.
    pub const FONT_DISPLAY: &'static str = "'Space Grotesk', sans-serif";
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#0a0e1a".to_string(),
            surface: "#111827".to_string(),
            surface_light: "#1a2235".to_string(),
            border: "#2a3450".to_string(),
            text: "#e2e8f0".to_string(),
            text_muted: "#8892a8".to_string(),
            fast: "#f59e0b".to_string(),
            fast_glow: "rgba(245,158,11,0.15)".to_string(),
            medium: "#3b82f6".to_string(),
            medium_glow: "rgba(59,130,246,0.15)".to_string(),
            slow: "#8b5cf6".to_string(),
            slow_glow: "rgba(139,92,246,0.15)".to_string(),
            accent: "#10b981".to_string(),
            accent_glow: "rgba(16,185,129,0.15)".to_string(),
            danger: "#ef4444".to_string(),
            danger_glow: "rgba(239,68,68,0.12)".to_string(),
            white: "#ffffff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).expect("serialize");
        let back: Theme = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(theme, back);
    }

    #[test]
    fn partial_theme_overrides_fall_back_to_defaults() {
        let theme: Theme =
            serde_json::from_str(r##"{"accent":"#00ff00"}"##).expect("deserialize");
        assert_eq!(theme.accent, "#00ff00");
        assert_eq!(theme.surface, Theme::default().surface);
    }
}
