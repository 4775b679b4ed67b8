//! The project session object.

use std::path::{Path, PathBuf};

use swath_model::SwathGroup;

use crate::autosave::{AutoSavePolicy, ChangeTracker};
use crate::error::{ProjectError, Result};
use crate::io::{read_project, write_project};

/// In-memory project: an ordered list of uniquely named swath groups, the
/// file it belongs to, and whether it has unsaved changes.
///
/// Reads hand out shared references only. Every write path goes through a
/// method that marks the project dirty, so [`ProjectStore::has_unsaved_changes`]
/// cannot miss an edit.
#[derive(Debug, Default)]
pub struct ProjectStore {
    groups: Vec<SwathGroup>,
    current_path: Option<PathBuf>,
    tracker: ChangeTracker,
}

impl ProjectStore {
    /// Create an empty, clean project with no file.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // FILE OPERATIONS
    // =========================================================================

    /// Replace all groups with the contents of a project file.
    ///
    /// The file is parsed completely before anything is replaced; on error
    /// the groups, path and dirty state are exactly as before. Returns the
    /// number of groups loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let groups = read_project(path).inspect_err(|e| {
            tracing::warn!("Rejected project {}: {}", path.display(), e);
        })?;

        self.groups = groups;
        self.current_path = Some(path.to_path_buf());
        self.tracker.mark_saved();

        tracing::info!(
            "Loaded {} swath groups from {}",
            self.groups.len(),
            path.display()
        );
        Ok(self.groups.len())
    }

    /// Write all groups to `path` and make it the current file.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_project(&self.groups, path)?;

        self.current_path = Some(path.to_path_buf());
        self.tracker.mark_saved();

        tracing::info!(
            "Saved {} swath groups to {}",
            self.groups.len(),
            path.display()
        );
        Ok(())
    }

    /// Write to the current file.
    ///
    /// Fails with [`ProjectError::NoCurrentPath`] if nothing was ever loaded
    /// or saved.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .current_path
            .clone()
            .ok_or(ProjectError::NoCurrentPath)?;
        self.save_to(path)
    }

    /// Write to a new file, whether or not there are unsaved changes.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(path)
    }

    /// The file last loaded from or saved to.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Check if there are changes not yet written to the current file.
    pub fn has_unsaved_changes(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Change tracking details (revision, timing).
    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// Check if the auto-save policy says it is time to save.
    ///
    /// Always false for a project without a current file.
    pub fn should_auto_save(&self, policy: &AutoSavePolicy) -> bool {
        self.current_path.is_some() && self.tracker.should_auto_save(policy)
    }

    /// Save to the current file if the policy says it is due.
    ///
    /// Returns whether a save happened.
    pub fn auto_save(&mut self, policy: &AutoSavePolicy) -> Result<bool> {
        if !self.should_auto_save(policy) {
            return Ok(false);
        }
        tracing::debug!("Auto-saving after {} changes", self.tracker.revision());
        self.save()?;
        Ok(true)
    }

    // =========================================================================
    // GROUP OPERATIONS
    // =========================================================================

    /// Append a group. Fails if the name is taken.
    pub fn add(&mut self, group: SwathGroup) -> Result<()> {
        if self.contains(&group.name) {
            return Err(ProjectError::DuplicateGroup { name: group.name });
        }
        tracing::debug!("Adding swath group '{}'", group.name);
        self.groups.push(group);
        self.tracker.mark_dirty();
        Ok(())
    }

    /// Remove a group by name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<SwathGroup> {
        let index = self.position(name)?;
        tracing::debug!("Removing swath group '{name}'");
        let removed = self.groups.remove(index);
        self.tracker.mark_dirty();
        Ok(removed)
    }

    /// Replace a group in place.
    ///
    /// The replacement may carry a different name, which renames the group.
    /// The new name is not checked against the other groups.
    pub fn update(&mut self, name: &str, group: SwathGroup) -> Result<()> {
        let index = self.position(name)?;
        tracing::debug!("Updating swath group '{name}'");
        self.groups[index] = group;
        self.tracker.mark_dirty();
        Ok(())
    }

    /// Look up a group by name.
    pub fn find(&self, name: &str) -> Option<&SwathGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Edit a group in place through a closure.
    ///
    /// Marks the project dirty whether or not the closure changed anything.
    pub fn modify<R>(&mut self, name: &str, edit: impl FnOnce(&mut SwathGroup) -> R) -> Result<R> {
        let index = self.position(name)?;
        let result = edit(&mut self.groups[index]);
        self.tracker.mark_dirty();
        Ok(result)
    }

    /// Check whether a group with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Copy of all groups in order.
    pub fn list(&self) -> Vec<SwathGroup> {
        self.groups.clone()
    }

    /// Iterate over the groups in order.
    pub fn iter(&self) -> impl Iterator<Item = &SwathGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Remove every group. Marks dirty only if something was removed.
    pub fn clear(&mut self) {
        if !self.groups.is_empty() {
            self.groups.clear();
            self.tracker.mark_dirty();
        }
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.groups
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| ProjectError::GroupNotFound {
                name: name.to_string(),
            })
    }
}
