//! Manuscript assembly: scene files in, per-chapter Markdown out.
//!
//! [`assemble_markdown`] drives the whole pass: it clears and recreates
//! the output directory, loads the book, and writes one Markdown file per
//! resolved chapter plus a `metadata.yaml` for downstream tooling. The
//! first error anywhere aborts the run; chapter files already written
//! stay on disk.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::book::load_book;
use crate::book::FrontMatter;
use crate::error::Result;
use crate::metadata::write_metadata;

/// Parameters for assembling a manuscript.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Path to the book YAML file.
    pub input_file: PathBuf,
    /// Directory to write chapter files and metadata into. Cleared
    /// before assembly.
    pub output_dir: PathBuf,
    /// Report per-scene word counts.
    pub word_count: bool,
    /// Write a `##` sub-heading before each scene.
    pub scene_headings: bool,
}

/// Word count for a single scene file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountResult {
    /// Scene file name, extension included.
    pub scene: String,
    pub count: usize,
}

impl fmt::Display for WordCountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} words", self.scene, self.count)
    }
}

/// Assemble a book's scenes into per-chapter Markdown files and write a
/// `metadata.yaml` for the publishing pipeline.
///
/// Returns the parsed front matter and, when `config.word_count` is set,
/// one [`WordCountResult`] per scene in assembly order.
pub fn assemble_markdown(config: &AssemblyConfig) -> Result<(FrontMatter, Vec<WordCountResult>)> {
    match fs::remove_dir_all(&config.output_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(&config.output_dir)?;

    let (front_matter, book) = load_book(&config.input_file)?;

    let mut counts = Vec::new();
    for (index, chapter) in book.resolve_chapters().enumerate() {
        chapter.validate()?;

        let out_path = config
            .output_dir
            .join(format!("{:03}-{}.md", index + 1, chapter.slug()));
        let mut writer = BufWriter::new(File::create(&out_path)?);

        if !chapter.heading.is_empty() {
            write!(writer, "# {}\n\n", chapter.heading)?;
        }
        if config.word_count {
            for scene in &chapter.scenes {
                counts.push(WordCountResult {
                    scene: file_name(scene),
                    count: scene_word_count(scene)?,
                });
            }
        }
        write_scenes(&mut writer, &chapter.scenes, config.scene_headings)?;
        writer.flush()?;
    }

    write_metadata(&front_matter, &config.output_dir)?;
    Ok((front_matter, counts))
}

/// Write scene file contents to `writer` in order, with the scene break
/// marker strictly between consecutive scenes.
///
/// With `scene_headings`, each scene is preceded by a `##` heading naming
/// the scene file's stem.
pub fn write_scenes<W: Write>(writer: &mut W, scenes: &[PathBuf], scene_headings: bool) -> Result<()> {
    for (i, scene) in scenes.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n\n***\n\n")?;
        }
        if scene_headings {
            write!(writer, "## {}\n\n", file_stem(scene))?;
        }
        writer.write_all(&fs::read(scene)?)?;
    }
    Ok(())
}

/// Count the whitespace-delimited words in a scene file.
pub fn scene_word_count(path: impl AsRef<Path>) -> Result<usize> {
    let text = fs::read_to_string(path)?;
    Ok(text.split_whitespace().count())
}

/// Sorted list of assembled chapter files in the output directory.
pub fn output_files(output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        let name = file_name(&path);
        if name.ends_with(".md") && name.starts_with(|c: char| c.is_ascii_digit()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
