//! Personal / per-project show-hide switches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::project::ProjectSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityToggles {
    pub personal: bool,
    /// Projects missing from this map are hidden.
    #[serde(default)]
    pub projects: HashMap<String, bool>,
}

impl Default for VisibilityToggles {
    fn default() -> Self {
        Self {
            personal: true,
            projects: HashMap::new(),
        }
    }
}

impl VisibilityToggles {
    /// Initial state: personal events and every known project visible.
    pub fn from_projects(projects: &[ProjectSummary]) -> Self {
        Self {
            personal: true,
            projects: projects
                .iter()
                .map(|project| (project.id.clone(), true))
                .collect(),
        }
    }

    pub fn is_project_visible(&self, project_id: &str) -> bool {
        self.projects.get(project_id).copied().unwrap_or(false)
    }

    pub fn set_personal(&mut self, visible: bool) {
        self.personal = visible;
    }

    pub fn set_project(&mut self, project_id: impl Into<String>, visible: bool) {
        self.projects.insert(project_id.into(), visible);
    }

    /// Flip a project's switch. Unknown projects become visible.
    pub fn toggle_project(&mut self, project_id: &str) -> bool {
        let visible = !self.is_project_visible(project_id);
        self.projects.insert(project_id.to_string(), visible);
        visible
    }

    pub fn show_all(&mut self) {
        self.set_all(true);
    }

    pub fn hide_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, visible: bool) {
        self.personal = visible;
        for value in self.projects.values_mut() {
            *value = visible;
        }
    }

    pub fn visible_project_count(&self) -> usize {
        self.projects.values().filter(|visible| **visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventColor;

    fn projects() -> Vec<ProjectSummary> {
        vec![
            ProjectSummary::new("alpha", "Alpha", EventColor::Green),
            ProjectSummary::new("beta", "Beta", EventColor::Red),
        ]
    }

    #[test]
    fn test_from_projects_defaults_visible() {
        let toggles = VisibilityToggles::from_projects(&projects());
        assert!(toggles.personal);
        assert!(toggles.is_project_visible("alpha"));
        assert!(toggles.is_project_visible("beta"));
        assert_eq!(toggles.visible_project_count(), 2);
    }

    #[test]
    fn test_unknown_project_hidden() {
        let toggles = VisibilityToggles::from_projects(&projects());
        assert!(!toggles.is_project_visible("gamma"));
    }

    #[test]
    fn test_toggle_project() {
        let mut toggles = VisibilityToggles::from_projects(&projects());
        assert!(!toggles.toggle_project("alpha"));
        assert!(!toggles.is_project_visible("alpha"));
        assert!(toggles.toggle_project("gamma"));
        assert!(toggles.is_project_visible("gamma"));
    }

    #[test]
    fn test_hide_all_then_show_all() {
        let mut toggles = VisibilityToggles::from_projects(&projects());
        toggles.hide_all();
        assert!(!toggles.personal);
        assert_eq!(toggles.visible_project_count(), 0);

        toggles.show_all();
        assert!(toggles.personal);
        assert_eq!(toggles.visible_project_count(), 2);
    }
}
