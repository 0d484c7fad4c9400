// src/input.rs
//! Replayable line sources for edge lists.
//!
//! Graph construction reads its input twice, so every source must be able to
//! hand out a fresh line iterator on demand. Files are re-opened; gzip input
//! is detected by extension or magic bytes and decoded transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::{LinkRankError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Boxed iterator over the lines of one pass.
pub type Lines<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// A source of edge lines that can be read more than once.
pub trait EdgeSource {
    /// Opens a fresh pass over the lines, starting from the first.
    ///
    /// # Errors
    /// Returns error if the underlying stream cannot be opened.
    fn lines(&self) -> Result<Lines<'_>>;
}

/// One directed edge as borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Splits a line into exactly two non-empty tab-separated tokens.
///
/// `line_no` is 1-based and only used for the error.
///
/// # Errors
/// Returns `MalformedEdge` if the line has fewer or more than two tokens, or
/// if either token is empty.
pub fn parse_edge(line_no: usize, line: &str) -> Result<Edge<'_>> {
    let mut tokens = line.split('\t');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) if !source.is_empty() && !target.is_empty() => {
            Ok(Edge { source, target })
        }
        _ => Err(LinkRankError::MalformedEdge {
            line: line_no,
            content: line.to_string(),
        }),
    }
}

/// Edge list stored on disk, plain or gzip-compressed.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> LinkRankError {
        LinkRankError::Io {
            source,
            path: self.path.clone(),
        }
    }

    fn reader(&self) -> Result<Box<dyn BufRead>> {
        let file = File::open(&self.path).map_err(|e| self.io_err(e))?;
        let mut reader = BufReader::new(file);
        let by_name = self.path.extension().is_some_and(|ext| ext == "gz");
        let by_magic = reader
            .fill_buf()
            .map_err(|e| self.io_err(e))?
            .starts_with(&GZIP_MAGIC);
        if by_name || by_magic {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
        } else {
            Ok(Box::new(reader))
        }
    }
}

impl EdgeSource for FileSource {
    fn lines(&self) -> Result<Lines<'_>> {
        let reader = self.reader()?;
        Ok(Box::new(
            reader.lines().map(move |line| line.map_err(|e| self.io_err(e))),
        ))
    }
}

/// Edge list held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Builds a source from `(source, target)` pairs.
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(s, t)| format!("{s}\t{t}"))
                .collect(),
        )
    }

    /// Splits a text blob on `\n` or `\r\n`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }
}

impl EdgeSource for MemorySource {
    fn lines(&self) -> Result<Lines<'_>> {
        Ok(Box::new(self.lines.iter().cloned().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_tokens() {
        let edge = parse_edge(1, "a\tb").unwrap();
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let edge = parse_edge(1, " a \tB").unwrap();
        assert_eq!(edge.source, " a ");
        assert_eq!(edge.target, "B");
    }

    #[test]
    fn rejects_single_token() {
        let err = parse_edge(7, "lonely").unwrap_err();
        assert!(matches!(err, LinkRankError::MalformedEdge { line: 7, .. }));
    }

    #[test]
    fn rejects_three_tokens_and_empty_tokens() {
        assert!(parse_edge(1, "a\tb\tc").is_err());
        assert!(parse_edge(1, "a\t").is_err());
        assert!(parse_edge(1, "\tb").is_err());
        assert!(parse_edge(1, "").is_err());
    }

    #[test]
    fn memory_source_replays() {
        let src = MemorySource::from_pairs([("a", "b"), ("b", "c")]);
        let first: Vec<_> = src.lines().unwrap().map(|l| l.unwrap()).collect();
        let second: Vec<_> = src.lines().unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["a\tb", "b\tc"]);
    }

    #[test]
    fn from_text_strips_crlf() {
        let src = MemorySource::from_text("a\tb\r\nc\td\n");
        let lines: Vec<_> = src.lines().unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a\tb", "c\td"]);
    }
}
