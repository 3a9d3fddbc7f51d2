//! Persistence for per-user session state (window placement).
//!
//! A small JSON snapshot so the display reopens where it was last left.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Window geometry we persist between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowGeometry {
    /// Check whether this geometry is worth restoring: finite values, a
    /// usable size, and a position that is not absurdly off-screen.
    pub fn is_plausible(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 200.0
            && self.height >= 160.0
            && self.x.abs() < 10_000.0
            && self.y.abs() < 10_000.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub window_geometry: Option<WindowGeometry>,
}

pub fn load_session(path: &Path) -> Result<SessionState> {
    if !path.exists() {
        return Ok(SessionState::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read session state from {}", path.display()))?;
    let session = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize session state from {}", path.display()))?;
    Ok(session)
}

pub fn save_session(path: &Path, session: &SessionState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(session)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write session state to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_reload_geometry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = SessionState {
            window_geometry: Some(WindowGeometry {
                x: 120.0,
                y: 80.0,
                width: 760.0,
                height: 560.0,
            }),
        };
        save_session(&path, &session).unwrap();

        let loaded = load_session(&path).unwrap();
        assert_eq!(loaded.window_geometry, session.window_geometry);
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempdir().unwrap();
        let loaded = load_session(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.window_geometry.is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_session(&path).is_err());
    }

    #[test]
    fn test_plausibility_rejects_bad_geometry() {
        let good = WindowGeometry {
            x: 0.0,
            y: 0.0,
            width: 760.0,
            height: 560.0,
        };
        assert!(good.is_plausible());

        let tiny = WindowGeometry {
            width: 10.0,
            height: 10.0,
            ..good
        };
        assert!(!tiny.is_plausible());

        let off_screen = WindowGeometry {
            x: 50_000.0,
            ..good
        };
        assert!(!off_screen.is_plausible());

        let nan = WindowGeometry {
            y: f32::NAN,
            ..good
        };
        assert!(!nan.is_plausible());
    }
}
