//! Library side of the `gamedoc` binary.
//!
//! Each subcommand is a function taking paths and returning plain data, so
//! the binary only parses arguments, installs logging and prints.

use anyhow::{Context, Result};
use gamedoc_metadata::PlatformRegistry;
use gamedoc_project::{Diagnostic, LoadOrder, LoadReport, Project};
use gamedoc_types::DocumentVersion;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Registry used when no `--registry` file is given.
pub const DEFAULT_REGISTRY: &str = include_str!("../registry.toml");

/// Loads the platform registry.
///
/// An explicitly requested file must exist and parse; without one the
/// embedded default registry is used.
pub fn load_registry(path: Option<&Path>) -> Result<Arc<PlatformRegistry>> {
    let registry = match path {
        Some(path) => PlatformRegistry::read_from(path)
            .with_context(|| format!("Failed to load registry {}", path.display()))?,
        None => PlatformRegistry::from_toml_str(DEFAULT_REGISTRY)
            .context("Failed to parse the built-in registry")?,
    };
    info!(platforms = registry.len(), "Platform registry ready");
    Ok(Arc::new(registry))
}

/// What `gamedoc inspect` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub document_version: String,
    pub platforms: Vec<String>,
    pub current_platform: Option<String>,
    pub first_layout: String,
    pub objects: usize,
    pub layouts: Vec<String>,
    pub external_events: usize,
    pub external_layouts: usize,
    pub extensions: Vec<String>,
    pub load_order: Vec<String>,
    pub unresolved_extensions: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

#[must_use]
pub fn summarize(project: &Project, report: LoadReport) -> ProjectSummary {
    let name_list = |names: Vec<&str>| -> Vec<String> {
        names.into_iter().map(str::to_string).collect()
    };
    ProjectSummary {
        name: project.name().to_string(),
        document_version: project.document_version().to_string(),
        platforms: project
            .platforms()
            .map(|platform| platform.name().to_string())
            .collect(),
        current_platform: project
            .platforms()
            .next()
            .and_then(|_| project.current_platform())
            .map(|platform| platform.name().to_string()),
        first_layout: project.first_layout().to_string(),
        objects: project.objects().objects().len(),
        layouts: name_list(project.layouts().names()),
        external_events: project.external_events().len(),
        external_layouts: project.external_layouts().len(),
        extensions: name_list(project.extensions().names()),
        load_order: report.load_order,
        unresolved_extensions: report.unresolved_extensions,
        diagnostics: report.diagnostics,
    }
}

fn load(
    path: &Path,
    registry: Arc<PlatformRegistry>,
    tool_version: DocumentVersion,
) -> Result<(Project, LoadReport)> {
    Project::load_file(path, registry, tool_version)
        .with_context(|| format!("Failed to load project {}", path.display()))
}

/// Loads `path` and summarizes it.
pub fn inspect(
    path: &Path,
    registry: Arc<PlatformRegistry>,
    tool_version: DocumentVersion,
) -> Result<ProjectSummary> {
    let (project, report) = load(path, registry, tool_version)?;
    Ok(summarize(&project, report))
}

/// Order in which the extensions of `path` are implemented when it loads.
pub fn load_order(
    path: &Path,
    registry: Arc<PlatformRegistry>,
    tool_version: DocumentVersion,
) -> Result<LoadOrder> {
    let (_, report) = load(path, registry, tool_version)?;
    Ok(LoadOrder {
        order: report.load_order,
        unresolved: report.unresolved_extensions,
    })
}

/// Loads `input` and saves it to `output`, stamped with `tool_version`.
pub fn resave(
    input: &Path,
    output: &Path,
    registry: Arc<PlatformRegistry>,
    tool_version: DocumentVersion,
) -> Result<LoadReport> {
    let (project, mut report) = load(input, registry, tool_version)?;
    project
        .save_file(output)
        .with_context(|| format!("Failed to save project to {}", output.display()))?;
    report.diagnostics.extend(project.diagnostics().take());
    info!(output = %output.display(), "Project saved");
    Ok(report)
}
