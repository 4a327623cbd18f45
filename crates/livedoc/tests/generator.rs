use std::path::Path;

use livedoc::{GenerateError, Generator, GeneratorConfig};
use serde_json::{Value, json};

fn valid_document() -> Value {
    json!({
        "schema_version": "1.0",
        "meta": {
            "document_title": "Release Notes",
            "document_version": "2.1.0",
            "generated_at": "2026-01-21T12:00:00Z",
            "source_set": ["github:acme/widgets"],
            "selection_summary": {"total_items": 1, "included_items": 1, "excluded_items": 0}
        },
        "content": {
            "user_stories": [{
                "id": "acme/widgets#7",
                "title": "Export widgets",
                "state": "closed",
                "tags": ["export"],
                "url": "https://github.com/acme/widgets/issues/7",
                "timestamps": {
                    "created": "2026-01-10T09:00:00Z",
                    "updated": "2026-01-20T17:45:00Z"
                },
                "sections": {"description": "Widgets can be **exported**."}
            }]
        }
    })
}

fn write_input(dir: &Path, data: &Value) -> std::path::PathBuf {
    let path = dir.join("pdf_ready.json");
    std::fs::write(&path, serde_json::to_string_pretty(data).unwrap()).unwrap();
    path
}

fn config_in(dir: &Path, data: &Value) -> GeneratorConfig {
    GeneratorConfig {
        output_path: dir.join("out/living-doc.pdf"),
        ..GeneratorConfig::new(write_input(dir, data))
    }
}

#[test]
fn generates_pdf_at_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), &valid_document());

    let path = Generator::new(config.clone()).generate().unwrap();
    assert_eq!(path, config.output_path);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert!(!livedoc_export::output::debug_html_path(&path).exists());
}

#[test]
fn debug_html_is_written_next_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        debug_html: true,
        ..config_in(dir.path(), &valid_document())
    };

    let path = Generator::new(config).generate().unwrap();
    let html = std::fs::read_to_string(livedoc_export::output::debug_html_path(&path)).unwrap();
    assert!(html.contains("Release Notes"));
    assert!(html.contains("<strong>exported</strong>"));
}

#[test]
fn rendered_html_is_the_emitted_text() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), &valid_document());

    let path = Generator::new(config).generate().unwrap();
    let bytes = std::fs::read(path).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Export widgets"));
}

#[test]
fn schema_violation_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = valid_document();
    data["schema_version"] = json!("2.0");
    let config = config_in(dir.path(), &data);

    let err = Generator::new(config.clone()).generate().unwrap_err();
    assert!(matches!(err, GenerateError::Validation(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("expected '1.0', got '2.0'"));
    assert!(!config.output_path.exists());
}

#[test]
fn missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path().join("absent.json"));

    let err = Generator::new(config).generate().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("not found"));
}

#[test]
fn broken_override_template_exits_with_three() {
    let dir = tempfile::tempdir().unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(templates.join("cover.html"), "{% if %}").unwrap();

    let config = GeneratorConfig {
        template_dir: Some(templates),
        ..config_in(dir.path(), &valid_document())
    };

    let err = Generator::new(config.clone()).generate().unwrap_err();
    assert!(matches!(err, GenerateError::Template(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(!config.output_path.exists());
}

#[test]
fn missing_template_dir_falls_back_to_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        template_dir: Some(dir.path().join("no-such-templates")),
        ..config_in(dir.path(), &valid_document())
    };

    assert!(Generator::new(config).generate().is_ok());
}

#[test]
fn output_into_a_directory_is_an_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let occupied = dir.path().join("occupied.pdf");
    std::fs::create_dir(&occupied).unwrap();
    let config = GeneratorConfig {
        output_path: occupied,
        ..GeneratorConfig::new(write_input(dir.path(), &valid_document()))
    };

    let err = Generator::new(config).generate().unwrap_err();
    assert!(matches!(err, GenerateError::Export(_)));
    assert_eq!(err.exit_code(), 1);
}
