use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, output};

#[test]
fn test_missing_input() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("missing.docx");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Input file not found: missing.docx
    ");

    Ok(())
}

#[test]
fn test_not_a_docx() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("notes.docx", "this is not a zip archive")?;

    let mut cmd = test.command();
    cmd.arg("notes.docx");
    let (code, stdout, stderr) = output(cmd)?;

    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Error processing file: Not a valid .docx file: notes.docx"));

    Ok(())
}

#[test]
fn test_archive_without_document() -> Result<()> {
    let test = CliTest::new()?;
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer.start_file("hello.txt", zip::write::FileOptions::default())?;
    let bytes = writer.finish()?.into_inner();
    test.write_bytes("empty.docx", &bytes)?;

    let mut cmd = test.command();
    cmd.arg("empty.docx");
    let (code, _, stderr) = output(cmd)?;

    assert_eq!(code, 1);
    assert_eq!(
        stderr,
        "Error processing file: Archive has no word/document.xml\n"
    );

    Ok(())
}

#[test]
fn test_invalid_authors_value() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["review.docx", "--authors", "sometimes"]);
    let (code, _, stderr) = output(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("invalid value 'sometimes'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = output(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("--authors <AUTHORS>"));
    for mode in ["never", "always", "auto"] {
        assert!(stdout.contains(mode));
    }
    assert!(stdout.contains("-o, --output <OUTPUT>"));

    Ok(())
}
