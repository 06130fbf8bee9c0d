use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use serde_json::json;

use crate::client::BoxError;
use crate::constants::{METADATA_FILE_NAME, REPORT_FILE_NAME, REPORT_PAGE_NAME};
use crate::render;

/// Default location for report artifacts, next to the project like the
/// rest of the tool's outputs.
pub fn default_output_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("research_results")
}

/// Writes the artifacts for one research run into a fresh timestamped
/// directory under `base`: the markdown exactly as received, the rendered
/// HTML page, and a small metadata record. Returns the directory path.
pub fn write_outputs(
    topic: &str,
    research_steps: Option<u32>,
    markdown: &str,
    base: &Path,
) -> Result<String, BoxError> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let dir = base.join(format!("{}_{}", topic_slug(topic), timestamp));
    fs::create_dir_all(&dir)?;

    fs::write(dir.join(REPORT_FILE_NAME), markdown)?;
    fs::write(
        dir.join(REPORT_PAGE_NAME),
        render::render_report_page(topic, markdown),
    )?;

    let metadata = json!({
        "topic": topic,
        "research_steps": research_steps,
        "generated_at": Utc::now().to_rfc3339(),
        "report_file": REPORT_FILE_NAME,
        "report_page": REPORT_PAGE_NAME,
    });
    fs::write(
        dir.join(METADATA_FILE_NAME),
        serde_json::to_string_pretty(&metadata)?,
    )?;

    Ok(dir.to_string_lossy().to_string())
}

/// Filesystem-safe directory stem derived from the topic.
fn topic_slug(topic: &str) -> String {
    let mut slug = String::new();
    for ch in topic.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
        if slug.len() >= 40 {
            break;
        }
    }

    let slug = slug.trim_matches('_').to_string();
    if slug.is_empty() {
        "research".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("researchdesk_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn slugs_are_filesystem_safe() {
        assert_eq!(topic_slug("Rust async runtimes"), "rust_async_runtimes");
        assert_eq!(topic_slug("  C++ vs. Rust?!  "), "c_vs_rust");
        assert_eq!(topic_slug("///"), "research");
    }

    #[test]
    fn slug_length_is_bounded() {
        let long = "a".repeat(200);
        assert!(topic_slug(&long).len() <= 40);
    }

    #[test]
    fn written_markdown_round_trips_exactly() {
        let base = scratch_dir("roundtrip");
        let markdown = "# Title\n\nBody with trailing newline\n";
        let dir = write_outputs("Rust futures", Some(3), markdown, &base).expect("write");

        let stored =
            fs::read_to_string(Path::new(&dir).join(REPORT_FILE_NAME)).expect("read report");
        assert_eq!(stored, markdown);

        let page = fs::read_to_string(Path::new(&dir).join(REPORT_PAGE_NAME)).expect("read page");
        assert!(page.contains("<h1>Title</h1>"));

        let metadata: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(Path::new(&dir).join(METADATA_FILE_NAME)).expect("read metadata"),
        )
        .expect("metadata json");
        assert_eq!(metadata["topic"], "Rust futures");
        assert_eq!(metadata["research_steps"], 3);

        let _ = fs::remove_dir_all(&base);
    }
}
