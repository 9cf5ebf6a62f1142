use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TocError {
    #[error("Chapter number must be positive (chapter titled '{title}')")]
    ZeroChapterNumber { title: String },
    #[error("Chapter {number} is declared more than once")]
    DuplicateChapter { number: u32 },
}

/// A single question/answer pair embedded in a chapter's flashcards notebook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<String>, // Ordered; position + 1 is the section index
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

impl Chapter {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            sections: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.extend(sections.into_iter().map(Into::into));
        self
    }

    pub fn with_cards(mut self, cards: Vec<Flashcard>) -> Self {
        self.cards = cards;
        self
    }

    /// Iterates sections paired with their 1-based index.
    pub fn indexed_sections(&self) -> impl Iterator<Item = (usize, &str)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, title)| (i + 1, title.as_str()))
    }
}

/// Chapters in declaration order.
///
/// Declaration order is significant and is never re-sorted by chapter number: a table
/// declared as `[3, 1, 2]` is walked as `[3, 1, 2]`. Chapter numbers are unique and
/// positive; both properties are enforced on construction and deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Chapter>")]
pub struct TableOfContents {
    chapters: Vec<Chapter>,
}

impl TableOfContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chapter: Chapter) -> Result<(), TocError> {
        if chapter.number == 0 {
            return Err(TocError::ZeroChapterNumber {
                title: chapter.title,
            });
        }
        if self.chapters.iter().any(|c| c.number == chapter.number) {
            return Err(TocError::DuplicateChapter {
                number: chapter.number,
            });
        }
        self.chapters.push(chapter);
        Ok(())
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn get(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|c| c.sections.len()).sum()
    }
}

impl TryFrom<Vec<Chapter>> for TableOfContents {
    type Error = TocError;

    fn try_from(chapters: Vec<Chapter>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(chapters.len());
        for chapter in &chapters {
            if chapter.number == 0 {
                return Err(TocError::ZeroChapterNumber {
                    title: chapter.title.clone(),
                });
            }
            if !seen.insert(chapter.number) {
                return Err(TocError::DuplicateChapter {
                    number: chapter.number,
                });
            }
        }
        Ok(Self { chapters })
    }
}

/// One book of the series: its number, topic, and table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Volume {
    pub number: u32,
    pub topic: String,
    /// Overrides the slug derived from `topic` when naming the volume directory.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub chapters: TableOfContents,
}

impl Volume {
    pub fn new(number: u32, topic: impl Into<String>, chapters: TableOfContents) -> Self {
        Self {
            number,
            topic: topic.into(),
            slug: None,
            chapters,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}
