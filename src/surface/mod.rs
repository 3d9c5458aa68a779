//! Host display surface contract and the chart artifacts mounted into it.

mod artifact;
mod memory;
mod slot;

pub use artifact::{ArtifactId, ChartArtifact, Legend, LegendEntry, Tooltip};
pub use memory::{ControlState, ElementContent, MemorySurface};
pub use slot::ArtifactSlot;

/// What a chart region can display.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceContent {
    Artifact(ChartArtifact),
    Text(String),
}

/// Input event forwarded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A control's value changed.
    Change { element_id: String },
    /// A button was clicked.
    Click { element_id: String },
}

impl SurfaceEvent {
    #[must_use]
    pub fn change(element_id: impl Into<String>) -> Self {
        Self::Change {
            element_id: element_id.into(),
        }
    }

    #[must_use]
    pub fn click(element_id: impl Into<String>) -> Self {
        Self::Click {
            element_id: element_id.into(),
        }
    }
}

/// Element tree the charts draw into, provided by the host.
///
/// Calls naming an unknown element are no-ops.
pub trait DisplaySurface {
    fn contains(&self, element_id: &str) -> bool;

    /// Replaces every child of `element_id` with `content`.
    fn replace_children(&mut self, element_id: &str, content: SurfaceContent);

    /// Detaches a previously mounted artifact, returning it when it was found.
    fn remove_artifact(&mut self, element_id: &str, artifact_id: ArtifactId)
    -> Option<ChartArtifact>;

    fn set_text_content(&mut self, element_id: &str, text: &str);

    /// Current raw value of a select-like control.
    fn control_value(&self, control_id: &str) -> Option<String>;

    fn set_control_value(&mut self, control_id: &str, value: &str);

    /// Option marked as default for the control, else its first option.
    fn default_control_value(&self, control_id: &str) -> Option<String>;
}
