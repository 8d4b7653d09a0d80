use std::{env, fs, path::PathBuf};

use anyhow::{bail, Context};
use model::{Platform, Target};

const DEFAULT_PRODUCT_TAG: &str = "Go Go C Container";

/// Resolves the platform labels for the compile target and the product tag,
/// and emits them as constants in `$OUT_DIR`.
fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=HELLO_PRODUCT_TAG");

    let tag = match env::var("HELLO_PRODUCT_TAG") {
        Ok(tag) => tag,
        Err(env::VarError::NotPresent) => DEFAULT_PRODUCT_TAG.to_owned(),
        Err(env::VarError::NotUnicode(_)) => bail!("HELLO_PRODUCT_TAG is not valid unicode"),
    };
    model::check_tag(&tag).context("HELLO_PRODUCT_TAG must be a single non-empty line")?;

    let target = Target {
        triple: env::var("TARGET").context("TARGET is not set")?,
        arch: cfg_var("CARGO_CFG_TARGET_ARCH"),
        os: cfg_var("CARGO_CFG_TARGET_OS"),
        families: cfg_var("CARGO_CFG_TARGET_FAMILY")
            .split(',')
            .filter(|family| !family.is_empty())
            .map(str::to_owned)
            .collect(),
    };

    let platform = Platform::select(&target);

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let path = out_dir.join("platform.rs");
    fs::write(&path, platform.to_const_item("PLATFORM"))
        .with_context(|| format!("failed to write {}", path.display()))?;

    let path = out_dir.join("product_tag.rs");
    fs::write(&path, format!("pub const PRODUCT_TAG: &str = {tag:?};\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

/// Reads a target cfg value, treating an absent value as empty.
///
/// Missing values only narrow what the rules can match.
fn cfg_var(key: &str) -> String {
    env::var(key).unwrap_or_default()
}
