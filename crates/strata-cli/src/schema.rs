//! # Schema Subcommand
//!
//! Inspect and export the compiled collection schemas. The exported
//! JSON Schema documents are what external tooling (editor plugins, CI
//! checks outside this toolchain) consumes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use strata_schema::{collections, Registry, SchemaContext};

/// Arguments for the `strata schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

/// Schema inspection operations.
#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// List registered collections.
    List,

    /// Print the compiled JSON Schema for one collection.
    Show {
        /// Collection name.
        name: String,
    },

    /// Write every collection's JSON Schema to a directory.
    Export {
        /// Output directory for `<name>.schema.json` files.
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

/// Execute the schema subcommand.
///
/// Returns exit code: 0 on success, 1 on a missing collection.
pub fn run_schema(args: &SchemaArgs, site_root: &Path) -> Result<u8> {
    // Schema inspection never touches assets; the permissive capability
    // is enough to construct the registry.
    let registry = collections(&SchemaContext::permissive())
        .context("failed to build collection registry")?;

    match &args.command {
        SchemaCommand::List => {
            list_collections(&registry);
            Ok(0)
        }
        SchemaCommand::Show { name } => show_collection(&registry, name),
        SchemaCommand::Export { out_dir } => {
            // Output paths anchor at the site root; resolve_path would
            // fall back to the CWD for a directory that does not exist yet.
            let resolved = if out_dir.is_absolute() {
                out_dir.clone()
            } else {
                site_root.join(out_dir)
            };
            export_collections(&registry, &resolved)?;
            Ok(0)
        }
    }
}

fn list_collections(registry: &Registry) {
    for descriptor in registry.iter() {
        let fields = descriptor.schema().fields();
        let required = fields.iter().filter(|f| f.required).count();
        println!(
            "{:<12} {:<8} {} fields ({} required)",
            descriptor.name(),
            descriptor.kind(),
            fields.len(),
            required,
        );
    }
}

fn show_collection(registry: &Registry, name: &str) -> Result<u8> {
    match registry.get(name) {
        Some(descriptor) => {
            let document = serde_json::to_string_pretty(&descriptor.to_json_schema())?;
            println!("{document}");
            Ok(0)
        }
        None => {
            println!("ERROR: collection '{name}' is not registered");
            println!("Registered collections: {}", registry.names().join(", "));
            Ok(1)
        }
    }
}

fn export_collections(registry: &Registry, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    for descriptor in registry.iter() {
        let path = out_dir.join(format!("{}.schema.json", descriptor.name()));
        let document = serde_json::to_string_pretty(&descriptor.to_json_schema())?;
        std::fs::write(&path, document + "\n")
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
