//! Book structure: front matter, declared chapters, and chapter resolution.
//!
//! A book is declared in a single YAML file holding two documents: the
//! front matter (author/contact metadata) followed by the book structure
//! under a `book` key. Declared chapters are plain configuration; the
//! [`ChapterIter`] returned by [`Book::resolve_chapters`] turns them into
//! [`ResolvedChapter`] values one at a time, computing headings and full
//! scene file paths on demand. Nothing is cached, so iteration is
//! restartable and stopping early does no wasted work.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::words::{number_to_words, title_case};

/// Author and contact metadata from the first YAML document.
///
/// Every field is optional; empty fields are omitted when the front
/// matter is serialized back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_lastname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_city_state_zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_email: String,
}

/// A declared chapter: an ordered list of scene identifiers plus
/// presentation hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    /// Explicit chapter name. Named chapters do not consume an
    /// auto-number.
    #[serde(default)]
    pub name: String,
    /// Interludes get no heading and no auto-number.
    #[serde(default)]
    pub interlude: bool,
    /// Subdirectory under the book's base directory holding this
    /// chapter's scenes.
    #[serde(default)]
    pub subdir: String,
    /// Scene file names without the `.md` extension, in reading order.
    pub scenes: Vec<String>,
}

/// The declared book structure from the second YAML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Directory holding the scene files.
    pub base_dir: PathBuf,
    /// Chapters in reading order.
    pub chapters: Vec<Chapter>,
}

/// Wrapper for the second YAML document's top-level `book` key.
#[derive(Debug, Deserialize)]
struct BookFile {
    book: Book,
}

/// A chapter resolved for assembly: computed heading and full scene
/// file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChapter {
    /// Heading text, or empty for interludes.
    pub heading: String,
    /// Fully-qualified scene file paths in reading order.
    pub scenes: Vec<PathBuf>,
}

impl ResolvedChapter {
    /// Check that every scene file exists, failing on the first that
    /// doesn't. An empty scene list is valid.
    pub fn validate(&self) -> Result<()> {
        for scene in &self.scenes {
            match fs::metadata(scene) {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(Error::SceneNotFound(scene.clone()));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Filesystem-safe form of the heading for output filenames:
    /// lowercased with spaces replaced by hyphens, or `"interlude"` when
    /// the heading is empty.
    pub fn slug(&self) -> String {
        if self.heading.is_empty() {
            "interlude".to_string()
        } else {
            self.heading.to_lowercase().replace(' ', "-")
        }
    }
}

/// Lazy iterator over a book's chapters in declaration order.
///
/// Created by [`Book::resolve_chapters`]. Each call to `next` resolves
/// one chapter; the auto-number counter advances only past unnamed,
/// non-interlude chapters.
#[derive(Debug, Clone)]
pub struct ChapterIter<'a> {
    book: &'a Book,
    index: usize,
    number: usize,
}

impl<'a> Iterator for ChapterIter<'a> {
    type Item = ResolvedChapter;

    fn next(&mut self) -> Option<ResolvedChapter> {
        let chapter = self.book.chapters.get(self.index)?;
        self.index += 1;

        let base_dir = if chapter.subdir.is_empty() {
            self.book.base_dir.clone()
        } else {
            self.book.base_dir.join(&chapter.subdir)
        };

        let heading = if !chapter.name.is_empty() {
            title_case(&chapter.name)
        } else if chapter.interlude {
            String::new()
        } else {
            let heading = format!("Chapter {}", title_case(&number_to_words(self.number)));
            self.number += 1;
            heading
        };

        let scenes = chapter
            .scenes
            .iter()
            .map(|scene| base_dir.join(format!("{scene}.md")))
            .collect();

        Some(ResolvedChapter { heading, scenes })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.book.chapters.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for ChapterIter<'a> {}

impl Book {
    /// Iterate over the book's chapters, resolving each on demand.
    pub fn resolve_chapters(&self) -> ChapterIter<'_> {
        ChapterIter {
            book: self,
            index: 0,
            number: 1,
        }
    }
}

/// Load front matter and book structure from a two-document YAML file.
///
/// The declared `base_dir` is tried relative to the input file's
/// directory first: if that joined path is a directory on disk, it
/// replaces the declared value. Otherwise the declared value stands, so
/// a base directory relative to the working directory keeps working.
pub fn load_book(path: impl AsRef<Path>) -> Result<(FrontMatter, Book)> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;

    let mut documents = serde_yaml::Deserializer::from_str(&text);
    let front_matter = FrontMatter::deserialize(
        documents
            .next()
            .ok_or(Error::MissingDocument("front matter"))?,
    )?;
    let wrapper = BookFile::deserialize(documents.next().ok_or(Error::MissingDocument("book"))?)?;
    let mut book = wrapper.book;

    let input_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let relative_dir = input_dir.join(&book.base_dir);
    match fs::metadata(&relative_dir) {
        Ok(info) if info.is_dir() => book.base_dir = relative_dir,
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    Ok((front_matter, book))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(scenes: &[&str]) -> Chapter {
        Chapter {
            scenes: scenes.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_chapters_auto_numbered() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![
                chapter(&["scene1", "scene2"]),
                chapter(&["scene3"]),
                chapter(&["scene4", "scene5", "scene6"]),
            ],
        };

        let chapters: Vec<_> = book.resolve_chapters().collect();
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].heading, "Chapter One");
        assert_eq!(chapters[1].heading, "Chapter Two");
        assert_eq!(chapters[2].heading, "Chapter Three");

        assert_eq!(
            chapters[0].scenes,
            vec![
                PathBuf::from("manuscript/scene1.md"),
                PathBuf::from("manuscript/scene2.md"),
            ]
        );
        assert_eq!(chapters[1].scenes, vec![PathBuf::from("manuscript/scene3.md")]);
    }

    #[test]
    fn test_resolve_chapters_named_chapters_skip_numbering() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![
                Chapter {
                    name: "prologue".to_string(),
                    scenes: vec!["intro".to_string()],
                    ..Default::default()
                },
                chapter(&["middle"]),
                Chapter {
                    name: "epilogue".to_string(),
                    scenes: vec!["outro".to_string()],
                    ..Default::default()
                },
            ],
        };

        let headings: Vec<_> = book.resolve_chapters().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["Prologue", "Chapter One", "Epilogue"]);
    }

    #[test]
    fn test_resolve_chapters_interludes_skip_numbering() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![
                chapter(&["a"]),
                Chapter {
                    interlude: true,
                    scenes: vec!["b".to_string()],
                    ..Default::default()
                },
                chapter(&["c"]),
            ],
        };

        let headings: Vec<_> = book.resolve_chapters().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["Chapter One", "", "Chapter Two"]);
    }

    #[test]
    fn test_resolve_chapters_subdirs() {
        let book = Book {
            base_dir: PathBuf::from("base"),
            chapters: vec![
                Chapter {
                    subdir: "part1".to_string(),
                    scenes: vec!["scene1".to_string(), "scene2".to_string()],
                    ..Default::default()
                },
                Chapter {
                    subdir: "part2".to_string(),
                    scenes: vec!["scene3".to_string()],
                    ..Default::default()
                },
                chapter(&["scene4"]),
            ],
        };

        let chapters: Vec<_> = book.resolve_chapters().collect();
        assert_eq!(
            chapters[0].scenes,
            vec![
                PathBuf::from("base/part1/scene1.md"),
                PathBuf::from("base/part1/scene2.md"),
            ]
        );
        assert_eq!(chapters[1].scenes, vec![PathBuf::from("base/part2/scene3.md")]);
        assert_eq!(chapters[2].scenes, vec![PathBuf::from("base/scene4.md")]);
    }

    #[test]
    fn test_resolve_chapters_empty_book() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![],
        };
        assert_eq!(book.resolve_chapters().count(), 0);
    }

    #[test]
    fn test_resolve_chapters_empty_scenes() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![chapter(&[])],
        };

        let chapters: Vec<_> = book.resolve_chapters().collect();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].heading, "Chapter One");
        assert!(chapters[0].scenes.is_empty());
    }

    #[test]
    fn test_resolve_chapters_restartable() {
        let book = Book {
            base_dir: PathBuf::from("manuscript"),
            chapters: vec![chapter(&["a"]), chapter(&["b"])],
        };

        let first: Vec<_> = book.resolve_chapters().take(1).map(|c| c.heading).collect();
        assert_eq!(first, vec!["Chapter One"]);

        // A fresh iterator starts the numbering over.
        let second: Vec<_> = book.resolve_chapters().map(|c| c.heading).collect();
        assert_eq!(second, vec!["Chapter One", "Chapter Two"]);
    }

    #[test]
    fn test_slug_from_heading() {
        let resolved = ResolvedChapter {
            heading: "Chapter Twenty-One".to_string(),
            scenes: vec![],
        };
        assert_eq!(resolved.slug(), "chapter-twenty-one");
    }

    #[test]
    fn test_slug_empty_heading() {
        let resolved = ResolvedChapter {
            heading: String::new(),
            scenes: vec![],
        };
        assert_eq!(resolved.slug(), "interlude");
    }

    #[test]
    fn test_front_matter_deserialize() {
        let yaml = "\
title: Benthamville
short_title: Benthamville
author: Kevin Smith
author_lastname: Smith
contact_name: Kevin Smith
contact_address: 6513 Rainbow Court
contact_city_state_zip: Raleigh, NC 27612
contact_phone: (919) 345-4521
contact_email: kevin@poiesic.com
";
        let fm: FrontMatter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fm.title, "Benthamville");
        assert_eq!(fm.author, "Kevin Smith");
        assert_eq!(fm.author_lastname, "Smith");
        assert_eq!(fm.contact_city_state_zip, "Raleigh, NC 27612");
        assert_eq!(fm.contact_email, "kevin@poiesic.com");
    }

    #[test]
    fn test_front_matter_partial_fields() {
        let fm: FrontMatter = serde_yaml::from_str("title: My Novel\nauthor: Jane Doe\n").unwrap();
        assert_eq!(fm.title, "My Novel");
        assert_eq!(fm.author, "Jane Doe");
        assert!(fm.short_title.is_empty());
        assert!(fm.contact_phone.is_empty());
    }

    #[test]
    fn test_book_deserialize() {
        let yaml = "\
base_dir: manuscript
chapters:
  - scenes:
      - chapter1_scene1
      - chapter1_scene2
  - scenes:
      - chapter2_scene1
";
        let book: Book = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(book.base_dir, PathBuf::from("manuscript"));
        assert_eq!(book.chapters.len(), 2);
        assert_eq!(
            book.chapters[0].scenes,
            vec!["chapter1_scene1", "chapter1_scene2"]
        );
        assert_eq!(book.chapters[1].scenes, vec!["chapter2_scene1"]);
    }

    #[test]
    fn test_chapter_deserialize_flags() {
        let yaml = "\
name: the reckoning
interlude: false
subdir: part2
scenes:
  - opening
  - conflict
  - resolution
";
        let ch: Chapter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ch.name, "the reckoning");
        assert!(!ch.interlude);
        assert_eq!(ch.subdir, "part2");
        assert_eq!(ch.scenes, vec!["opening", "conflict", "resolution"]);
    }

    #[test]
    fn test_chapter_missing_scenes_is_error() {
        let result: std::result::Result<Chapter, _> = serde_yaml::from_str("name: broken\n");
        assert!(result.is_err());
    }
}
