//! `.docx` extraction.
//!
//! A `.docx` file is a zip container. The body lives in `word/document.xml`
//! and reviewer comments, when there are any, in `word/comments.xml`. The
//! body marks what each comment covers with `w:commentRangeStart` /
//! `w:commentRangeEnd` pairs, and the comment itself with a
//! `w:commentReference` run.

mod body;
mod comments;
mod xml;


use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use anyhow::{Context, Result};
use zip::{ZipArchive, result::ZipError};

use crate::annotate::{AuthorMode, annotate};
use crate::types::ExtractedDocument;

pub use body::parse_body;
pub use comments::parse_comments;

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const COMMENTS_PART: &str = "word/comments.xml";

/// Anything that can produce the text, comments and ranges of a document.
pub trait CommentSource {
    fn extract(&mut self) -> Result<ExtractedDocument>;
}

/// Reads comments and body text out of a `.docx` archive.
pub struct DocxParser<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl DocxParser<BufReader<File>> {
    /// Open a `.docx` file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Not a valid .docx file: {}", path.display()))
    }
}

impl<R: Read + Seek> DocxParser<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).context("Failed to read zip archive")?;
        Ok(Self { archive })
    }

    /// Read a part as UTF-8, or `None` if the archive does not contain it.
    fn read_part(&mut self, name: &str) -> Result<Option<String>> {
        match self.archive.by_name(name) {
            Ok(mut file) => {
                let mut content = String::new();
                file.read_to_string(&mut content)
                    .with_context(|| format!("Failed to read {}", name))?;
                Ok(Some(content))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", name)),
        }
    }
}

impl<R: Read + Seek> CommentSource for DocxParser<R> {
    fn extract(&mut self) -> Result<ExtractedDocument> {
        let document = self
            .read_part(DOCUMENT_PART)?
            .with_context(|| format!("Archive has no {}", DOCUMENT_PART))?;
        let (text, ranges) = parse_body(&document)?;

        let comments = match self.read_part(COMMENTS_PART)? {
            Some(xml) => parse_comments(&xml)?,
            None => Vec::new(),
        };

        Ok(ExtractedDocument {
            text,
            comments,
            ranges,
        })
    }
}

/// Extract text, comments and ranges from a `.docx` file on disk.
pub fn extract_docx(path: &Path) -> Result<ExtractedDocument> {
    DocxParser::open(path)?.extract()
}

/// Extract a `.docx` file and return its text with comments inlined.
pub fn process_docx(path: &Path, mode: AuthorMode) -> Result<String> {
    let ExtractedDocument {
        text,
        comments,
        ranges,
    } = extract_docx(path)?;

    Ok(annotate(&text, &comments, &ranges, mode))
}
