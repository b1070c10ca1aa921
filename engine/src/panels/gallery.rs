//! Image gallery state.

use std::time::SystemTime;

use maquette_types::{GeneratedImage, IdGen, ImageId, NonEmptyText};

/// A generation in flight. Existence of this value is the busy flag: while
/// it is present, further generate requests are dropped, not queued.
#[derive(Debug)]
pub struct ActiveGeneration {
    prompt: NonEmptyText,
    started_at: SystemTime,
    pub(crate) seq: u64,
}

impl ActiveGeneration {
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }
}

/// The gallery list (most recent first) plus the in-flight generation slot.
#[derive(Debug, Default)]
pub struct GalleryPanel {
    images: Vec<GeneratedImage>,
    ids: IdGen,
    active: Option<ActiveGeneration>,
}

impl GalleryPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a generation as in flight. Callers check [`is_generating`]
    /// first; a second start while busy replaces nothing and is a bug.
    ///
    /// [`is_generating`]: Self::is_generating
    pub(crate) fn start(&mut self, prompt: NonEmptyText, seq: u64, started_at: SystemTime) {
        debug_assert!(self.active.is_none(), "generation already in flight");
        self.active = Some(ActiveGeneration {
            prompt,
            started_at,
            seq,
        });
    }

    /// Complete the in-flight generation: prepend the image and clear busy.
    pub(crate) fn finish(
        &mut self,
        prompt: NonEmptyText,
        url: String,
        timestamp: SystemTime,
    ) -> ImageId {
        let id = ImageId::new(self.ids.next());
        self.images
            .insert(0, GeneratedImage::new(id, prompt, url, timestamp));
        self.active = None;
        id
    }

    /// Drop the in-flight generation without producing an image.
    pub(crate) fn cancel(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveGeneration> {
        self.active.as_ref()
    }

    /// Gallery entries, most recent first.
    #[must_use]
    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use maquette_types::NonEmptyText;

    use super::GalleryPanel;

    #[test]
    fn finish_prepends_and_clears_busy() {
        let mut panel = GalleryPanel::new();
        let now = SystemTime::UNIX_EPOCH;
        let prompt = |s: &str| NonEmptyText::new(s).expect("non-blank");

        panel.start(prompt("first"), 0, now);
        panel.finish(prompt("first"), "url-a".to_string(), now);
        panel.start(prompt("second"), 1, now);
        panel.finish(prompt("second"), "url-b".to_string(), now);

        assert!(!panel.is_generating());
        let prompts: Vec<_> = panel.images().iter().map(|i| i.prompt()).collect();
        assert_eq!(prompts, ["second", "first"]);
    }
}
