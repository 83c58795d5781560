use crate::content::{project_by_id, Project};

/// The project shown in the detail overlay. A single optional id, so two
/// overlays can never be open at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<u32>,
}

impl ProjectSelection {
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.selected.and_then(project_by_id)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_select_replaces() {
        let mut selection = ProjectSelection::default();
        assert!(!selection.is_open());

        selection.select(PROJECTS[0].id);
        assert_eq!(selection.project().map(|p| p.id), Some(PROJECTS[0].id));

        selection.select(PROJECTS[2].id);
        assert_eq!(selection.selected_id(), Some(PROJECTS[2].id));
        assert_eq!(selection.project().map(|p| p.title), Some(PROJECTS[2].title));
    }

    #[test]
    fn test_close_clears() {
        let mut selection = ProjectSelection::default();
        selection.select(PROJECTS[1].id);
        selection.close();
        assert_eq!(selection.selected_id(), None);
        assert!(selection.project().is_none());
    }

    #[test]
    fn test_unknown_id_renders_nothing() {
        let mut selection = ProjectSelection::default();
        selection.select(999);
        assert!(selection.is_open());
        assert!(selection.project().is_none());
    }
}
