use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;
use zip::{ZipWriter, write::FileOptions};

mod errors;

const BIN_NAME: &str = "docx-comments";

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A comment to place in a generated `.docx`.
pub struct FixtureComment<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub text: &'a str,
}

pub fn comment<'a>(id: &'a str, author: &'a str, text: &'a str) -> FixtureComment<'a> {
    FixtureComment { id, author, text }
}

/// Plain run of text.
pub fn run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, text)
}

/// Text covered by comment `id`.
pub fn commented(id: &str, text: &str) -> String {
    format!(
        r#"<w:commentRangeStart w:id="{id}"/>{}<w:commentRangeEnd w:id="{id}"/><w:r><w:commentReference w:id="{id}"/></w:r>"#,
        run(text)
    )
}

/// Comment `id` anchored at a point.
pub fn point(id: &str) -> String {
    format!(r#"<w:r><w:commentReference w:id="{id}"/></w:r>"#)
}

pub fn paragraph(content: &[String]) -> String {
    format!("<w:p>{}</w:p>", content.concat())
}

pub fn docx_bytes(paragraphs: &[String], comments: &[FixtureComment<'_>]) -> Result<Vec<u8>> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{}</w:body></w:document>"#,
        paragraphs.concat()
    );

    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer.start_file("[Content_Types].xml", FileOptions::default())?;
    writer.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)?;
    writer.start_file("word/document.xml", FileOptions::default())?;
    writer.write_all(document.as_bytes())?;

    if !comments.is_empty() {
        let body: String = comments
            .iter()
            .map(|c| {
                format!(
                    r#"<w:comment w:id="{}" w:author="{}"><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:comment>"#,
                    c.id, c.author, c.text
                )
            })
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:comments xmlns:w="{W_NS}">{body}</w:comments>"#
        );
        writer.start_file("word/comments.xml", FileOptions::default())?;
        writer.write_all(xml.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the temp dir.
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_docx(
        path: &str,
        paragraphs: &[String],
        comments: &[FixtureComment<'_>],
    ) -> Result<Self> {
        let test = Self::new()?;
        test.write_bytes(path, &docx_bytes(paragraphs, comments)?)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and return (exit code, stdout, stderr).
pub fn output(mut cmd: Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output()?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}
