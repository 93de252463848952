use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The assertion host: whatever object owns the browser session the failing
/// assertion ran against. The guard only needs two capabilities from it.
pub trait AssertionHost {
    /// Reload the current page on this host's browser session.
    fn refresh(&mut self) -> Result<()>;

    /// Snapshot the diagnostic artifacts currently available, e.g. a saved
    /// page-markup file and a screenshot. Called once per failed attempt and
    /// once more for the terminal success-after-failure record.
    fn capture_state(&mut self) -> CapturedArtifacts;
}

/// Opaque handles produced by the capture mechanism, keyed by label
/// (`"html"` → path, `"image"` → path, ...).
///
/// Stored as a `BTreeMap` so the pretty-printed report dump has a stable
/// field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapturedArtifacts {
    handles: BTreeMap<String, String>,
}

impl CapturedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, handle: impl Into<String>) -> Self {
        self.handles.insert(label.into(), handle.into());
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, handle: impl Into<String>) {
        self.handles.insert(label.into(), handle.into());
    }

    pub fn handle(&self, label: &str) -> Option<&str> {
        self.handles.get(label).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_handles_round_trip() {
        let artifacts = CapturedArtifacts::new()
            .with("html", "/tmp/shot.html")
            .with("image", "/tmp/shot.png");

        assert_eq!(artifacts.handle("html"), Some("/tmp/shot.html"));
        assert_eq!(artifacts.handle("image"), Some("/tmp/shot.png"));
        assert_eq!(artifacts.handle("video"), None);
        assert!(!artifacts.is_empty());
    }

    #[test]
    fn test_artifacts_serialize_as_flat_map() {
        let artifacts = CapturedArtifacts::new().with("image", "shot.png");
        let json = serde_json::to_string(&artifacts).unwrap();
        assert_eq!(json, r#"{"image":"shot.png"}"#);
    }
}
