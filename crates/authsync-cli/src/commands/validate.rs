//! `authsync validate` - parse a manifest and summarize its contents.

use anyhow::Context;
use std::path::Path;

use authsync_core::Manifest;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let manifest = Manifest::from_file(path)
        .with_context(|| format!("failed to load manifest {}", path.display()))?;

    println!("✔ Manifest is valid.");
    println!("  - applications: {}", manifest.applications.len());
    println!("  - permissions:  {}", manifest.permission_count());
    println!("  - roles:        {}", manifest.role_count());
    println!("  - groups:       {}", manifest.groups.len());

    Ok(())
}
