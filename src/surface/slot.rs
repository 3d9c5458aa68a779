use tracing::trace;

use super::{ArtifactId, ChartArtifact, DisplaySurface, SurfaceContent};

/// Owner of the single live artifact of one chart region.
///
/// Every install path releases the previous artifact first, including the
/// placeholder path that installs no artifact at all.
#[derive(Debug)]
pub struct ArtifactSlot {
    element_id: String,
    current: Option<ArtifactId>,
    next_id: u64,
}

impl ArtifactSlot {
    #[must_use]
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            current: None,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn current(&self) -> Option<ArtifactId> {
        self.current
    }

    /// Reserves the id for the next artifact built for this slot.
    pub fn next_artifact_id(&mut self) -> ArtifactId {
        let id = ArtifactId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes the live artifact from the surface, if any.
    pub fn release<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(id) = self.current.take() {
            let removed = surface.remove_artifact(&self.element_id, id);
            trace!(
                element_id = %self.element_id,
                artifact_id = id.get(),
                found = removed.is_some(),
                "release chart artifact"
            );
        }
    }

    pub fn install<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, artifact: ChartArtifact) {
        self.release(surface);
        self.current = Some(artifact.id());
        surface.replace_children(&self.element_id, SurfaceContent::Artifact(artifact));
    }

    pub fn show_placeholder<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, text: &str) {
        self.release(surface);
        surface.replace_children(&self.element_id, SurfaceContent::Text(text.to_owned()));
    }
}
