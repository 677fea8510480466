//! ASCII-art frames: geometry and loading from disk.
//!
//! A frame is a multi-line text block. Spaces are transparent when drawn, so
//! its footprint is the bounding box of its lines.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::types::FrameCategory;

/// Rows and columns occupied by a multi-line text block.
///
/// Columns are counted in characters, not bytes.
pub fn frame_size(text: &str) -> (usize, usize) {
    let rows = text.lines().count();
    let columns = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    (rows, columns)
}

/// An ASCII-art block with its measured size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String,
    rows: usize,
    columns: usize,
}

impl Frame {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (rows, columns) = frame_size(&text);
        Self {
            text,
            rows,
            columns,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("frame directory {path} for category `{category}` is missing or unreadable")]
    MissingCategory {
        category: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read frame file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frame file {path} is empty")]
    EmptyFrame { path: PathBuf },
    #[error("category `{category}` has no frames under {path}")]
    NoFrames {
        category: &'static str,
        path: PathBuf,
    },
}

/// Load every frame of one category, ordered by file name.
///
/// Frames live in `<root>/<category>/`; every regular file in that directory
/// is one frame. Hidden files are skipped.
pub fn load_frames(root: &Path, category: FrameCategory) -> Result<Vec<Frame>, AssetError> {
    let dir = root.join(category.as_str());
    let entries = fs::read_dir(&dir).map_err(|source| AssetError::MissingCategory {
        category: category.as_str(),
        path: dir.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssetError::Unreadable {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if path.is_file() && !hidden {
            paths.push(path);
        }
    }
    paths.sort();

    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let text =
            fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
                path: path.clone(),
                source,
            })?;
        let frame = Frame::new(text);
        if frame.is_empty() {
            return Err(AssetError::EmptyFrame { path });
        }
        frames.push(frame);
    }

    if frames.is_empty() {
        return Err(AssetError::NoFrames {
            category: category.as_str(),
            path: dir,
        });
    }

    tracing::debug!(
        category = category.as_str(),
        count = frames.len(),
        "loaded frames"
    );
    Ok(frames)
}

/// All frame categories the game needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct FrameLibrary {
    pub craft: Rc<[Frame]>,
    pub obstacles: Rc<[Rc<Frame>]>,
    pub obstacle_variants: Rc<[Rc<Frame>]>,
}

impl FrameLibrary {
    /// Load every category from `root`. Any missing category is fatal.
    pub fn load(root: &Path) -> Result<Self, AssetError> {
        let craft = load_frames(root, FrameCategory::Craft)?;
        let obstacles = load_frames(root, FrameCategory::Obstacle)?;
        let variants = load_frames(root, FrameCategory::ObstacleVariant2)?;
        Ok(Self::from_frames(craft, obstacles, variants))
    }

    pub fn from_frames(
        craft: Vec<Frame>,
        obstacles: Vec<Frame>,
        obstacle_variants: Vec<Frame>,
    ) -> Self {
        Self {
            craft: craft.into(),
            obstacles: obstacles.into_iter().map(Rc::new).collect(),
            obstacle_variants: obstacle_variants.into_iter().map(Rc::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_uses_longest_line() {
        assert_eq!(frame_size("  .\n /|\\\n/___\\"), (3, 5));
        assert_eq!(frame_size(""), (0, 0));
        assert_eq!(frame_size("*"), (1, 1));
    }

    #[test]
    fn frame_size_counts_chars_not_bytes() {
        assert_eq!(frame_size("░░\n█"), (2, 2));
    }

    #[test]
    fn load_frames_sorts_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let craft = dir.path().join("craft");
        fs::create_dir(&craft).unwrap();
        fs::write(craft.join("b.txt"), "B").unwrap();
        fs::write(craft.join("a.txt"), "A\nA").unwrap();
        fs::write(craft.join(".hidden"), "X").unwrap();

        let frames = load_frames(dir.path(), FrameCategory::Craft).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].text(), "A\nA");
        assert_eq!(frames[1].text(), "B");
    }

    #[test]
    fn missing_category_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_frames(dir.path(), FrameCategory::Obstacle).unwrap_err();
        assert!(matches!(err, AssetError::MissingCategory { .. }));
    }

    #[test]
    fn empty_category_and_empty_frame_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let obstacle = dir.path().join("obstacle");
        fs::create_dir(&obstacle).unwrap();
        let err = load_frames(dir.path(), FrameCategory::Obstacle).unwrap_err();
        assert!(matches!(err, AssetError::NoFrames { .. }));

        fs::write(obstacle.join("blank.txt"), "").unwrap();
        let err = load_frames(dir.path(), FrameCategory::Obstacle).unwrap_err();
        assert!(matches!(err, AssetError::EmptyFrame { .. }));
    }
}
