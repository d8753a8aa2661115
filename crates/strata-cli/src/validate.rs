//! # Validate Subcommand
//!
//! Content entry validation against collection schemas. The first line of
//! defense for a content tree: every frontmatter block must conform to
//! its collection's schema before the site pipeline consumes it.
//!
//! Failures are collected, never fail-fast: a sweep reports every invalid
//! entry with field-level detail so one broken post does not mask
//! another.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use strata_core::{FsResolver, ImageResolver, PermissiveResolver};
use strata_schema::{collections, EntryValidator, Registry, SchemaContext};

use crate::config::SiteConfig;

/// Arguments for the `strata validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate every entry of every registered collection under the
    /// content directory.
    #[arg(long)]
    pub all: bool,

    /// Collection to validate against. Defaults to the entry's parent
    /// directory name.
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,

    /// Check image references against this asset directory instead of
    /// accepting any non-empty reference. Overrides `assets_dir` from
    /// strata.yaml.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Validate a specific entry file (.md, .yaml, .json).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_validate(args: &ValidateArgs, site_root: &Path) -> Result<u8> {
    let config = SiteConfig::load(site_root)?;
    let ctx = schema_context(args, &config, site_root);
    let registry = collections(&ctx).context("failed to build collection registry")?;

    tracing::info!(
        collections = registry.len(),
        "loaded collection registry"
    );

    let mut had_failures = false;

    if args.all {
        let content_dir = site_root.join(&config.content_dir);
        had_failures |= validate_all_collections(&registry, &ctx, &content_dir)?;
    }

    if let Some(ref path) = args.path {
        let resolved = crate::resolve_path(path, site_root);
        had_failures |= validate_single_entry(&registry, &ctx, &resolved, args.collection.as_deref())?;
    }

    // If nothing was requested, print a usage hint.
    if !args.all && args.path.is_none() {
        println!("Usage: strata validate [--all] [--collection NAME] [PATH]");
        return Ok(1);
    }

    if had_failures {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Pick the image-resolution capability for this invocation.
///
/// Priority: `--assets` flag, then `assets_dir` from strata.yaml, then
/// the permissive resolver.
fn schema_context(args: &ValidateArgs, config: &SiteConfig, site_root: &Path) -> SchemaContext {
    let assets = args
        .assets
        .clone()
        .or_else(|| config.assets_dir.clone())
        .map(|dir| crate::resolve_path(&dir, site_root));

    let resolver: Arc<dyn ImageResolver> = match assets {
        Some(dir) => {
            tracing::debug!(assets = %dir.display(), "checking image references on disk");
            Arc::new(FsResolver::new(dir))
        }
        None => Arc::new(PermissiveResolver),
    };
    SchemaContext::new(resolver)
}

/// Validate every collection's entries under the content directory.
///
/// Each collection reads from the directory carrying its exact name.
/// Prints a summary per collection and full detail for every failure.
fn validate_all_collections(
    registry: &Registry,
    ctx: &SchemaContext,
    content_dir: &Path,
) -> Result<bool> {
    if !content_dir.is_dir() {
        println!(
            "WARN: content directory not found at {}",
            content_dir.display()
        );
        return Ok(false);
    }

    let mut total_failed = 0usize;

    for descriptor in registry.iter() {
        let name = descriptor.name().as_str();
        let validator = EntryValidator::for_collection(registry, name, ctx)
            .with_context(|| format!("failed to build validator for collection '{name}'"))?;

        let collection_dir = content_dir.join(name);
        if !collection_dir.is_dir() {
            println!("{name}: no entries (no {name}/ directory)");
            continue;
        }

        let report = validator.validate_dir(&collection_dir);
        println!("{name}: {}/{} passed", report.passed, report.total);

        for failure in &report.failures {
            let rel = failure
                .path
                .strip_prefix(content_dir)
                .unwrap_or(&failure.path);
            println!("  FAIL: {}\n{}", rel.display(), indent(&failure.error));
        }

        total_failed += report.failed();
    }

    if total_failed > 0 {
        println!("\n{total_failed} entry(s) failed validation.");
    }

    Ok(total_failed > 0)
}

/// Validate a single entry file against a named or inferred collection.
fn validate_single_entry(
    registry: &Registry,
    ctx: &SchemaContext,
    path: &Path,
    collection: Option<&str>,
) -> Result<bool> {
    if !path.exists() {
        println!("ERROR: path does not exist: {}", path.display());
        return Ok(true);
    }

    let name = match collection {
        Some(name) => name.to_string(),
        None => match infer_collection(registry, path) {
            Some(name) => name,
            None => {
                println!(
                    "ERROR: cannot infer a collection for {}; pass --collection",
                    path.display()
                );
                return Ok(true);
            }
        },
    };

    let validator = EntryValidator::for_collection(registry, &name, ctx)
        .with_context(|| format!("failed to build validator for collection '{name}'"))?;

    match validator.validate_file(path) {
        Ok(()) => {
            println!("OK: {} ({name})", path.display());
            Ok(false)
        }
        Err(e) => {
            println!("FAIL: {}\n{}", path.display(), indent(&e.to_string()));
            Ok(true)
        }
    }
}

/// Infer the collection from the entry's parent directory name.
///
/// Entries live under `content/<collection>/`, possibly nested deeper;
/// the nearest ancestor directory matching a registered collection wins.
fn infer_collection(registry: &Registry, path: &Path) -> Option<String> {
    let mut dir = path.parent();
    while let Some(d) = dir {
        if let Some(name) = d.file_name().and_then(|n| n.to_str()) {
            if registry.get(name).is_some() {
                return Some(name.to_string());
            }
        }
        dir = d.parent();
    }
    None
}

/// Indent a multi-line error for display under its FAIL line.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
