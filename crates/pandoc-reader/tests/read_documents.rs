//! End-to-end reading of documents from disk.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use std::sync::Arc;

use common::{SAMPLE_POST, UppercaseConverter, write_doc};
use pandoc_reader::content::{FieldProcessors, MetadataSplitter, split_comma_list};
use pandoc_reader::{Error, MetaValue, PandocReader, Reader, ReaderConfig, ReaderRegistry};
use tempfile::TempDir;

fn uppercase_reader() -> (PandocReader, Arc<UppercaseConverter>) {
    let converter = Arc::new(UppercaseConverter::default());
    let reader = PandocReader::new(MetadataSplitter::default(), converter.clone());
    (reader, converter)
}

#[test]
fn reads_sample_post() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "post.md", SAMPLE_POST);
    let (reader, converter) = uppercase_reader();
    let reader = reader.with_processor(FieldProcessors::new().with("tags", split_comma_list));

    let doc = reader.read(&path).unwrap();

    assert_eq!(doc.metadata["title"], MetaValue::from("Splitting Metadata"));
    assert_eq!(doc.metadata["date"], MetaValue::from("2024-03-01"));
    assert_eq!(doc.metadata["tags"], MetaValue::from(vec!["rust", "parsing"]));
    assert_eq!(doc.metadata["authors"], MetaValue::from(vec!["Ada", "Grace"]));
    assert_eq!(
        doc.metadata["summary"],
        MetaValue::from("A SHORT NOTE\n\n\nON LINE-ORIENTED METADATA.")
    );
    assert_eq!(
        doc.output,
        "\n# HEADING\n\nBODY TEXT WITH A # THAT STAYS."
    );

    let calls = converter.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
}

#[test]
fn reads_document_without_metadata() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "plain.md", "\nJust a body.\n");
    let (reader, _) = uppercase_reader();

    let doc = reader.read(&path).unwrap();
    assert!(doc.metadata.is_empty());
    assert_eq!(doc.output, "\nJUST A BODY.");
}

#[test]
fn reads_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "empty.md", "");
    let (reader, _) = uppercase_reader();

    let doc = reader.read(&path).unwrap();
    assert!(doc.metadata.is_empty());
    assert_eq!(doc.output, "");
}

#[test]
fn byte_order_mark_does_not_hide_first_field() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "bom.md", "\u{feff}title: X\ndate: 2024\n\nbody");
    let (reader, _) = uppercase_reader();

    let doc = reader.read(&path).unwrap();
    assert_eq!(doc.metadata["title"], MetaValue::from("X"));
    assert_eq!(doc.metadata["date"], MetaValue::from("2024"));
    assert_eq!(doc.output, "\nBODY");
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let (reader, _) = uppercase_reader();

    let err = reader.read(&dir.path().join("absent.md")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.md"));
}

#[test]
fn registry_dispatches_by_extension() {
    let dir = TempDir::new().unwrap();
    let md = write_doc(&dir, "post.MKD", "title: X\n\nbody");
    let txt = write_doc(&dir, "notes.txt", "title: X\n\nbody");

    let (reader, _) = uppercase_reader();
    let mut registry = ReaderRegistry::new();
    registry.register(Arc::new(reader));

    let doc = registry.read(&md).unwrap();
    assert_eq!(doc.output, "\nBODY");
    assert!(matches!(
        registry.read(&txt),
        Err(Error::UnsupportedExtension { .. })
    ));
}

#[test]
fn read_output_serializes_to_json() {
    let (reader, _) = uppercase_reader();
    let doc = reader.read_str("title: X\ntags: a\nb\n\nbody").unwrap();

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["output"], "\nBODY");
    assert_eq!(json["metadata"]["title"], "X");
    assert_eq!(json["metadata"]["tags"], serde_json::json!(["a", "b"]));
}

#[cfg(unix)]
mod with_fake_pandoc {
    use super::*;
    use crate::common::fake_pandoc;

    fn config_for(program: &std::path::Path) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        config.pandoc.program = program.to_string_lossy().into_owned();
        config.pandoc.args = vec!["--toc".to_string()];
        config.pandoc.extensions = pandoc_reader::core::Extensions::List(vec![
            "+smart".to_string(),
            "-citations".to_string(),
        ]);
        config
    }

    #[test]
    fn passes_flags_and_stdin() {
        let dir = TempDir::new().unwrap();
        let program = fake_pandoc(dir.path(), "pandoc", "printf 'ARGS:%s\\n' \"$*\"\ncat");
        let path = write_doc(&dir, "post.md", "title: X\n\nHello");

        let reader = PandocReader::from_config(&config_for(&program)).unwrap();
        let doc = reader.read(&path).unwrap();

        assert_eq!(
            doc.output,
            "ARGS:--from=markdown+smart-citations --to=html5 --toc\n\nHello"
        );
        assert_eq!(doc.metadata["title"], MetaValue::from("X"));
    }

    #[test]
    fn failure_carries_diagnostics() {
        let dir = TempDir::new().unwrap();
        let program = fake_pandoc(
            dir.path(),
            "pandoc",
            "cat >/dev/null\necho 'pandoc: unknown extension' >&2\nexit 3",
        );
        let path = write_doc(&dir, "post.md", "title: X\n\nHello");

        let reader = PandocReader::from_config(&config_for(&program)).unwrap();
        let err = reader.read(&path).unwrap_err();

        let Error::Conversion { status, stderr, .. } = err else {
            unreachable!("Expected Conversion error variant");
        };
        assert_eq!(status.code(), Some(3));
        assert_eq!(stderr.trim(), "pandoc: unknown extension");
    }

    #[test]
    fn summary_goes_through_converter() {
        let dir = TempDir::new().unwrap();
        let program = fake_pandoc(dir.path(), "pandoc", "sed 's/^/> /'");
        let path = write_doc(&dir, "post.md", "summary: one\ntwo\n\nbody");

        let reader = PandocReader::from_config(&config_for(&program)).unwrap();
        let doc = reader.read(&path).unwrap();

        // sed may or may not add a trailing newline depending on platform
        let summary = doc.metadata["summary"].as_str().unwrap();
        assert_eq!(summary.trim_end(), "> one\n> two");
        assert_eq!(doc.output.trim_end(), "> \n> body");
    }
}
