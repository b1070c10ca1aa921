//! Uploaded-files state.

use maquette_types::{FileDescriptor, FileId, IdGen, UploadedFile};

/// The uploaded-file list. Descriptor bookkeeping only: no dedup, no
/// content inspection.
#[derive(Debug, Default)]
pub struct DocumentsPanel {
    files: Vec<UploadedFile>,
    ids: IdGen,
}

impl DocumentsPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every descriptor in order. Returns how many were added.
    pub fn attach(&mut self, descriptors: Vec<FileDescriptor>) -> usize {
        let added = descriptors.len();
        for descriptor in descriptors {
            let id = FileId::new(self.ids.next());
            self.files.push(UploadedFile::new(id, descriptor));
        }
        added
    }

    /// Remove one entry by identity.
    pub fn remove(&mut self, id: FileId) -> Option<UploadedFile> {
        let index = self.files.iter().position(|file| file.id() == id)?;
        Some(self.files.remove(index))
    }

    #[must_use]
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use maquette_types::FileDescriptor;

    use super::DocumentsPanel;

    #[test]
    fn attach_preserves_name_and_size() {
        let mut panel = DocumentsPanel::new();
        let added = panel.attach(vec![
            FileDescriptor::new("report.pdf", 1024),
            FileDescriptor::new("notes.txt", 12),
        ]);
        assert_eq!(added, 2);
        assert_eq!(panel.files()[0].name(), "report.pdf");
        assert_eq!(panel.files()[0].size_bytes(), 1024);
        assert_eq!(panel.files()[1].name(), "notes.txt");
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut panel = DocumentsPanel::new();
        panel.attach(vec![
            FileDescriptor::new("a", 1),
            FileDescriptor::new("b", 2),
            FileDescriptor::new("c", 3),
        ]);
        let target = panel.files()[1].id();
        let removed = panel.remove(target).expect("entry exists");
        assert_eq!(removed.name(), "b");
        let names: Vec<_> = panel.files().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["a", "c"]);
        assert!(panel.remove(target).is_none());
    }
}
