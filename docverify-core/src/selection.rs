use crate::domain::FileHandle;

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    current: Option<FileHandle>,
}

impl SelectionState {
    /// Replaces whatever was held; no validation.
    pub fn select(&mut self, file: FileHandle) {
        tracing::debug!(name = %file.name, size = file.size, "file selected");
        self.current = Some(file);
    }

    pub fn has_selection(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&FileHandle> {
        self.current.as_ref()
    }
}
