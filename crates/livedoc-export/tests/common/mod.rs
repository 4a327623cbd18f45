#![allow(dead_code)]

use livedoc_core::SchemaDocument;
use livedoc_core::validate::validate_value;
use serde_json::json;

pub fn minimal_document() -> SchemaDocument {
    validate_value(json!({
        "schema_version": "1.0",
        "meta": {
            "document_title": "Test Document",
            "document_version": "1.0.0",
            "generated_at": "2026-01-21T12:00:00Z",
            "source_set": ["github:test/repo"],
            "selection_summary": {"total_items": 0, "included_items": 0, "excluded_items": 0}
        },
        "content": {"user_stories": []}
    }))
    .expect("minimal document is valid")
}

pub fn full_document() -> SchemaDocument {
    validate_value(json!({
        "schema_version": "1.0",
        "meta": {
            "document_title": "Test Document",
            "document_version": "1.0.0",
            "generated_at": "2026-01-21T12:00:00Z",
            "source_set": ["github:test/repo"],
            "selection_summary": {"total_items": 1, "included_items": 1, "excluded_items": 0},
            "run_context": {"ci_run_id": "run-77"}
        },
        "content": {
            "user_stories": [
                {
                    "id": "test-1",
                    "title": "Test Story",
                    "state": "open",
                    "tags": ["test", "priority:high"],
                    "url": "https://example.com/issue/1",
                    "timestamps": {
                        "created": "2026-01-21T12:00:00Z",
                        "updated": "2026-01-22T08:30:00Z"
                    },
                    "sections": {
                        "description": "## Description\n\nThis is a test story.",
                        "business_value": "High value for testing",
                        "preconditions": null,
                        "acceptance_criteria": "- [ ] Test passes\n- [x] Code works",
                        "user_guide": null,
                        "connections": null,
                        "last_edited": null
                    }
                }
            ]
        }
    }))
    .expect("full document is valid")
}
