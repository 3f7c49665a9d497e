//! Story data source: the read-only page corpus a session reads from.
//!
//! Stories are supplied externally; the core only reads them at page-load
//! time. A built-in story ships with the binary, and additional stories can
//! be loaded from JSON files in a configured directory.

use crate::defaults;
use crate::error::{ReadalongError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One page of a story: raw text plus an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "PageNumber")]
    pub number: u32,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Text")]
    pub text: String,
}

/// A story: id, title, and an ordered sequence of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Pages")]
    pub pages: Vec<Page>,
}

impl Story {
    /// Page at `index`, or a `PageOutOfRange` error.
    pub fn page(&self, index: usize) -> Result<&Page> {
        self.pages
            .get(index)
            .ok_or_else(|| ReadalongError::PageOutOfRange {
                title: self.title.clone(),
                page: index,
                pages: self.pages.len(),
            })
    }
}

/// Trait for looking up stories by id.
///
/// Implementations are synchronous and total for valid ids; an unknown id is
/// a `StoryNotFound` error.
pub trait StorySource {
    /// Fetch a story by id.
    fn story(&self, id: u32) -> Result<Story>;

    /// List `(id, title, page count)` for every available story.
    fn list(&self) -> Vec<(u32, String, usize)>;
}

/// The bundled story catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStories;

impl StorySource for BuiltinStories {
    fn story(&self, id: u32) -> Result<Story> {
        if id == defaults::DEFAULT_STORY_ID {
            Ok(mias_adventure())
        } else {
            Err(ReadalongError::StoryNotFound { id })
        }
    }

    fn list(&self) -> Vec<(u32, String, usize)> {
        let story = mias_adventure();
        vec![(story.id, story.title, story.pages.len())]
    }
}

/// Story source backed by `story-<id>.json` files in a directory.
///
/// Falls back to the builtin catalog for ids without a file, so the bundled
/// story stays available alongside user-provided ones.
#[derive(Debug, Clone)]
pub struct FileStorySource {
    dir: PathBuf,
}

impl FileStorySource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, id: u32) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", defaults::STORY_FILE_PREFIX, id))
    }
}

impl StorySource for FileStorySource {
    fn story(&self, id: u32) -> Result<Story> {
        let path = self.path_for(id);
        if !path.exists() {
            return BuiltinStories.story(id);
        }
        let contents = std::fs::read_to_string(&path)?;
        let story: Story = serde_json::from_str(&contents)?;
        Ok(story)
    }

    fn list(&self) -> Vec<(u32, String, usize)> {
        let mut entries = BuiltinStories.list();
        let Ok(dir) = std::fs::read_dir(&self.dir) else {
            return entries;
        };
        for entry in dir.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(id) = name
                .strip_prefix(defaults::STORY_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(".json"))
                .and_then(|id| id.parse::<u32>().ok())
            else {
                continue;
            };
            if let Ok(story) = self.story(id) {
                entries.retain(|(existing, _, _)| *existing != id);
                entries.push((story.id, story.title, story.pages.len()));
            }
        }
        entries.sort_by_key(|(id, _, _)| *id);
        entries
    }
}

/// The bundled three-page story.
fn mias_adventure() -> Story {
    Story {
        id: defaults::DEFAULT_STORY_ID,
        title: "Mia's Adventure".to_string(),
        pages: vec![
            Page {
                number: 1,
                image: "forest_hero.jpg".to_string(),
                text: "Mia woke up early and ran outside to see the bright morning sun. \
                       She loved to explore the forest near her home, listening to birds \
                       and spotting little creatures. That day, she noticed a new path \
                       lined with shiny stones. She felt excited and a little nervous, \
                       but she followed the stones into the forest."
                    .to_string(),
            },
            Page {
                number: 2,
                image: "pond_hero.jpg".to_string(),
                text: "Soon, Mia found a hidden pond. It shimmered like a mirror, and \
                       tall trees stood guard around it. She saw a turtle resting on a \
                       log. Gently, she touched the turtle\u{2019}s shell. It blinked and \
                       started walking toward a large rock. Mia felt a burst of curiosity \
                       and followed."
                    .to_string(),
            },
            Page {
                number: 3,
                image: "box_hero.jpg".to_string(),
                text: "Behind the rock, Mia discovered a small wooden box. Carefully, \
                       she opened it and found a note that read, \u{201c}Always be kind \
                       and brave.\u{201d} Mia smiled and tucked the note in her pocket. \
                       Heading home, she knew her forest adventure would not be her last, \
                       and she felt proud of her courage and kindness."
                    .to_string(),
            },
        ],
    }
}
