//! Subcommand implementations.
//!
//! Each function loads the project, performs one operation and, for editing
//! commands, writes it back. Output text is returned rather than printed so
//! the commands can be driven from tests.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use swath_model::SwathGroup;
use swath_persistence::{ProjectError, ProjectStore};

use crate::summary::summary_table;

/// Load a project file into a fresh store.
pub fn open_project(path: &Path) -> Result<ProjectStore> {
    let mut store = ProjectStore::new();
    store
        .load(path)
        .with_context(|| format!("load project {}", path.display()))?;
    Ok(store)
}

/// Render a project as a summary table, or as JSON when `json` is set.
pub fn show_project(path: &Path, json: bool) -> Result<String> {
    let store = open_project(path)?;
    if json {
        let groups: Vec<&SwathGroup> = store.iter().collect();
        return serde_json::to_string_pretty(&groups).context("serialize project");
    }
    let table = summary_table(store.iter());
    Ok(format!(
        "Project: {}\nGroups: {}\n{table}",
        path.display(),
        store.len()
    ))
}

/// Add a group, starting a new project if the file does not exist yet.
pub fn add_group(path: &Path, group: SwathGroup) -> Result<()> {
    let mut store = if path.exists() {
        open_project(path)?
    } else {
        info!("Starting new project at {}", path.display());
        ProjectStore::new()
    };
    let name = group.name.clone();
    store
        .add(group)
        .with_context(|| format!("add swath group '{name}'"))?;
    write_back(&mut store, path)
}

pub fn remove_group(path: &Path, name: &str) -> Result<()> {
    let mut store = open_project(path)?;
    store
        .remove(name)
        .with_context(|| format!("remove swath group '{name}'"))?;
    write_back(&mut store, path)
}

/// Rename a group without moving it. The new name must not be taken.
pub fn rename_group(path: &Path, from: &str, to: &str) -> Result<()> {
    let mut store = open_project(path)?;
    let context = || format!("rename swath group '{from}' to '{to}'");

    let mut group = store
        .find(from)
        .cloned()
        .ok_or_else(|| ProjectError::GroupNotFound {
            name: from.to_string(),
        })
        .with_context(context)?;
    if from != to && store.contains(to) {
        return Err(ProjectError::DuplicateGroup {
            name: to.to_string(),
        })
        .with_context(context);
    }

    group.name = to.to_string();
    store.update(from, group).with_context(context)?;
    write_back(&mut store, path)
}

/// Load `input` and write it to `output`, normalising the document.
pub fn save_as(input: &Path, output: &Path) -> Result<usize> {
    let mut store = open_project(input)?;
    store
        .save_as(output)
        .with_context(|| format!("save project to {}", output.display()))?;
    Ok(store.len())
}

fn write_back(store: &mut ProjectStore, path: &Path) -> Result<()> {
    store
        .save_to(path)
        .with_context(|| format!("save project {}", path.display()))
}
