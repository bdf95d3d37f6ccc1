//! Front matter serialization for the publishing pipeline.

use std::fs;
use std::path::Path;

use crate::book::FrontMatter;
use crate::error::Result;

/// Serialize front matter to `{outdir}/metadata.yaml`.
///
/// The YAML body is wrapped in leading and trailing `---` delimiters so
/// Pandoc-style tooling recognizes it as a metadata block. Empty fields
/// are omitted.
pub fn write_metadata(front_matter: &FrontMatter, outdir: impl AsRef<Path>) -> Result<()> {
    let body = serde_yaml::to_string(front_matter)?;
    let mut contents = String::with_capacity(body.len() + 8);
    contents.push_str("---\n");
    contents.push_str(&body);
    contents.push_str("---\n");
    fs::write(outdir.as_ref().join("metadata.yaml"), contents)?;
    Ok(())
}
