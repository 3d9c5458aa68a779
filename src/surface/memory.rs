use indexmap::IndexMap;

use super::{ArtifactId, ChartArtifact, DisplaySurface, SurfaceContent};

/// Content currently held by an element of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ElementContent {
    #[default]
    Empty,
    Text(String),
    Artifact(ChartArtifact),
}

/// Select-like control with a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub value: String,
    pub options: Vec<String>,
    pub default_option: Option<String>,
}

/// In-memory display surface for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: IndexMap<String, ElementContent>,
    controls: IndexMap<String, ControlState>,
    removed_artifacts: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty container element.
    #[must_use]
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.elements
            .insert(element_id.into(), ElementContent::Empty);
        self
    }

    /// Adds a select control holding its default option, else its first one.
    #[must_use]
    pub fn with_select<I, S>(
        mut self,
        control_id: impl Into<String>,
        options: I,
        default_option: Option<&str>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let default_option = default_option
            .filter(|default| options.iter().any(|option| option == default))
            .map(str::to_owned);
        let value = default_option
            .clone()
            .or_else(|| options.first().cloned())
            .unwrap_or_default();
        let control_id = control_id.into();
        self.elements
            .insert(control_id.clone(), ElementContent::Empty);
        self.controls.insert(
            control_id,
            ControlState {
                value,
                options,
                default_option,
            },
        );
        self
    }

    #[must_use]
    pub fn content(&self, element_id: &str) -> Option<&ElementContent> {
        self.elements.get(element_id)
    }

    #[must_use]
    pub fn text_content(&self, element_id: &str) -> Option<&str> {
        match self.elements.get(element_id)? {
            ElementContent::Text(text) => Some(text),
            ElementContent::Empty | ElementContent::Artifact(_) => None,
        }
    }

    #[must_use]
    pub fn artifact(&self, element_id: &str) -> Option<&ChartArtifact> {
        match self.elements.get(element_id)? {
            ElementContent::Artifact(artifact) => Some(artifact),
            ElementContent::Empty | ElementContent::Text(_) => None,
        }
    }

    /// Number of artifacts mounted across every element.
    #[must_use]
    pub fn live_artifact_count(&self) -> usize {
        self.elements
            .values()
            .filter(|content| matches!(content, ElementContent::Artifact(_)))
            .count()
    }

    #[must_use]
    pub fn removed_artifact_count(&self) -> usize {
        self.removed_artifacts
    }

    #[must_use]
    pub fn control(&self, control_id: &str) -> Option<&ControlState> {
        self.controls.get(control_id)
    }

    /// Simulates the user picking `value`; values outside the option list are
    /// accepted so hosts can exercise boundary validation.
    pub fn select(&mut self, control_id: &str, value: &str) {
        self.set_control_value(control_id, value);
    }
}

impl DisplaySurface for MemorySurface {
    fn contains(&self, element_id: &str) -> bool {
        self.elements.contains_key(element_id)
    }

    fn replace_children(&mut self, element_id: &str, content: SurfaceContent) {
        if let Some(slot) = self.elements.get_mut(element_id) {
            *slot = match content {
                SurfaceContent::Artifact(artifact) => ElementContent::Artifact(artifact),
                SurfaceContent::Text(text) => ElementContent::Text(text),
            };
        }
    }

    fn remove_artifact(
        &mut self,
        element_id: &str,
        artifact_id: ArtifactId,
    ) -> Option<ChartArtifact> {
        let slot = self.elements.get_mut(element_id)?;
        let mounted = matches!(slot, ElementContent::Artifact(artifact) if artifact.id() == artifact_id);
        if !mounted {
            return None;
        }
        self.removed_artifacts += 1;
        match std::mem::take(slot) {
            ElementContent::Artifact(artifact) => Some(artifact),
            ElementContent::Empty | ElementContent::Text(_) => None,
        }
    }

    fn set_text_content(&mut self, element_id: &str, text: &str) {
        if let Some(slot) = self.elements.get_mut(element_id) {
            *slot = ElementContent::Text(text.to_owned());
        }
    }

    fn control_value(&self, control_id: &str) -> Option<String> {
        self.controls
            .get(control_id)
            .map(|control| control.value.clone())
    }

    fn set_control_value(&mut self, control_id: &str, value: &str) {
        if let Some(control) = self.controls.get_mut(control_id) {
            control.value = value.to_owned();
        }
    }

    fn default_control_value(&self, control_id: &str) -> Option<String> {
        let control = self.controls.get(control_id)?;
        control
            .default_option
            .clone()
            .or_else(|| control.options.first().cloned())
    }
}
