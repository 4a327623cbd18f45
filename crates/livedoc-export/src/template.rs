//! Template lookup chain.
//!
//! Templates are addressed by relative, `/`-separated names. A resolver
//! consults an optional override directory first and the built-in set
//! second, per name, so a caller can replace a single sub-template (the
//! cover page, say) while everything else keeps resolving to the built-ins.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::error::TemplateError;

/// Name of the template every render starts from.
pub const ROOT_TEMPLATE: &str = "main.html";

/// Templates compiled into the binary.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("main.html", include_str!("../templates/main.html")),
    ("cover.html", include_str!("../templates/cover.html")),
    ("toc.html", include_str!("../templates/toc.html")),
    ("story.html", include_str!("../templates/story.html")),
];

/// File extensions picked up from an override directory. Anything else
/// (stylesheets, notes, images) is left alone and never compiled.
const TEMPLATE_EXTENSIONS: &[&str] = &["html", "htm", "tera"];

/// Where a resolved template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Override(PathBuf),
    Builtin,
}

/// A template body plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub name: String,
    pub body: String,
    pub origin: TemplateOrigin,
}

/// One entry of the lookup chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRoot {
    Directory(PathBuf),
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolver {
    roots: Vec<TemplateRoot>,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateResolver {
    /// Resolver over the built-in templates only.
    pub fn builtin() -> Self {
        Self {
            roots: vec![TemplateRoot::Builtin],
        }
    }

    /// Resolver with an optional override directory in front of the
    /// built-ins. A directory that does not exist is dropped with a warning.
    pub fn new(override_root: Option<&Path>) -> Self {
        let Some(dir) = override_root else {
            return Self::builtin();
        };

        if !dir.is_dir() {
            tracing::warn!(
                template_dir = %dir.display(),
                "custom template directory does not exist, using built-in templates"
            );
            return Self::builtin();
        }

        tracing::info!(
            template_dir = %dir.display(),
            "using custom templates with built-in fallback"
        );
        Self {
            roots: vec![TemplateRoot::Directory(dir.to_path_buf()), TemplateRoot::Builtin],
        }
    }

    pub fn roots(&self) -> &[TemplateRoot] {
        &self.roots
    }

    /// Resolve `name` against the chain, first hit wins.
    pub fn resolve(&self, name: &str) -> Result<ResolvedTemplate, TemplateError> {
        for root in &self.roots {
            if let Some(resolved) = resolve_in(root, name)? {
                tracing::debug!(template = name, origin = ?resolved.origin, "resolved template");
                return Ok(resolved);
            }
        }
        Err(TemplateError::NotFound {
            name: name.to_string(),
        })
    }

    /// Every name resolvable through the chain.
    pub fn names(&self) -> Result<BTreeSet<String>, TemplateError> {
        let mut names = BTreeSet::new();
        for root in &self.roots {
            match root {
                TemplateRoot::Builtin => {
                    names.extend(BUILTIN_TEMPLATES.iter().map(|(name, _)| name.to_string()));
                }
                TemplateRoot::Directory(dir) => collect_names(dir, dir, &mut names)?,
            }
        }
        Ok(names)
    }
}

fn resolve_in(root: &TemplateRoot, name: &str) -> Result<Option<ResolvedTemplate>, TemplateError> {
    match root {
        TemplateRoot::Builtin => Ok(BUILTIN_TEMPLATES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(name, body)| ResolvedTemplate {
                name: name.to_string(),
                body: body.to_string(),
                origin: TemplateOrigin::Builtin,
            })),
        TemplateRoot::Directory(dir) => {
            let Some(relative) = safe_relative(name) else {
                return Ok(None);
            };
            let path = dir.join(relative);
            if !path.is_file() {
                return Ok(None);
            }
            let body = std::fs::read_to_string(&path).map_err(|source| TemplateError::Unreadable {
                name: name.to_string(),
                source,
            })?;
            Ok(Some(ResolvedTemplate {
                name: name.to_string(),
                body,
                origin: TemplateOrigin::Override(path),
            }))
        }
    }
}

/// Only plain relative names may touch the filesystem.
fn safe_relative(name: &str) -> Option<&Path> {
    let path = Path::new(name);
    path.components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then_some(path)
        .filter(|p| !p.as_os_str().is_empty())
}

fn collect_names(base: &Path, dir: &Path, names: &mut BTreeSet<String>) -> Result<(), TemplateError> {
    let unreadable = |source: std::io::Error| TemplateError::Unreadable {
        name: dir.display().to_string(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_dir() {
            collect_names(base, &path, names)?;
            continue;
        }
        let is_template = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext));
        if !is_template {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(base) {
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            names.insert(name);
        }
    }
    Ok(())
}
