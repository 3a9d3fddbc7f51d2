//! Theme for the countdown display.
//!
//! Defines the CountdownTheme structure with light and dark palettes and
//! applies them to the egui context.

use egui::Color32;

/// Colors used by the countdown display.
#[derive(Debug, Clone)]
pub struct CountdownTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of the stat panels
    pub panel_background: Color32,

    /// Unfilled ring track color
    pub ring_track: Color32,

    /// Progress color for the days ring
    pub ring_days: Color32,

    /// Progress color for the hours ring
    pub ring_hours: Color32,

    /// Progress color for the minutes ring
    pub ring_minutes: Color32,

    /// Progress color for the seconds ring
    pub ring_seconds: Color32,

    /// Accent for the arrived presentation
    pub arrived_accent: Color32,

    /// Primary text color (headings, ring values)
    pub text_primary: Color32,

    /// Secondary text color (labels, footer)
    pub text_secondary: Color32,
}

impl CountdownTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            panel_background: Color32::from_rgb(255, 255, 255),
            ring_track: Color32::from_rgb(215, 215, 220),
            ring_days: Color32::from_rgb(190, 50, 160),
            ring_hours: Color32::from_rgb(60, 120, 230),
            ring_minutes: Color32::from_rgb(30, 160, 120),
            ring_seconds: Color32::from_rgb(230, 150, 40),
            arrived_accent: Color32::from_rgb(20, 150, 100),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 24, 27),
            panel_background: Color32::from_rgb(39, 39, 42),
            ring_track: Color32::from_rgb(64, 64, 64),
            ring_days: Color32::from_rgb(217, 70, 190),
            ring_hours: Color32::from_rgb(96, 165, 250),
            ring_minutes: Color32::from_rgb(52, 211, 153),
            ring_seconds: Color32::from_rgb(251, 191, 36),
            arrived_accent: Color32::from_rgb(52, 211, 153),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(161, 161, 170),
        }
    }

    /// Resolve a configured theme name, consulting the system preference
    /// for anything other than an explicit "light" or "dark".
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = CountdownTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CountdownTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(24, 24, 27));
    }

    #[test]
    fn test_from_name_resolves_explicit_themes() {
        assert!(CountdownTheme::from_name("dark").is_dark);
        assert!(CountdownTheme::from_name("Dark").is_dark);
        assert!(!CountdownTheme::from_name("light").is_dark);
    }
}
