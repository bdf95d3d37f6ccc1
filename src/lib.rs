//! # binder
//!
//! Assemble a manuscript of scene text files into per-chapter Markdown,
//! ready for a Pandoc-style document pipeline.
//!
//! A book lives in one YAML file holding two documents: front matter
//! (author/contact metadata) followed by the book structure — a base
//! directory and an ordered list of chapters, each an ordered list of
//! scene file names. Chapters may carry an explicit name, be flagged as
//! unnumbered interludes, or be auto-numbered ("Chapter One", "Chapter
//! Two", ...).
//!
//! ## Quick Start
//!
//! ```no_run
//! use binder::{assemble_markdown, AssemblyConfig};
//!
//! let config = AssemblyConfig {
//!     input_file: "book.yaml".into(),
//!     output_dir: "build".into(),
//!     word_count: true,
//!     scene_headings: false,
//! };
//! let (front_matter, counts) = assemble_markdown(&config).unwrap();
//! println!("assembled {}", front_matter.title);
//! for wc in &counts {
//!     println!("{wc}");
//! }
//! ```
//!
//! The output directory is cleared, then filled with one
//! `{NNN}-{slug}.md` file per chapter plus a `metadata.yaml` front
//! matter block.

pub mod assemble;
pub mod book;
pub mod error;
pub mod metadata;
pub mod words;

pub use assemble::{
    assemble_markdown, output_files, scene_word_count, write_scenes, AssemblyConfig,
    WordCountResult,
};
pub use book::{load_book, Book, Chapter, ChapterIter, FrontMatter, ResolvedChapter};
pub use error::{Error, Result};
pub use metadata::write_metadata;
