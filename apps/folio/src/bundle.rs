use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::sections::SectionKind;

/// Reads `<key>.json` for every section from `data_dir` and writes them to
/// `output` as one compact JSON object keyed by section name.
///
/// Missing documents are skipped with a warning. Returns how many were bundled.
pub async fn write_bundle(data_dir: &Path, output: &Path) -> Result<usize> {
    let mut bundle = Map::new();
    for kind in SectionKind::ALL {
        let path = data_dir.join(format!("{}.json", kind.key()));
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("{} not found", path.display());
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        let document: Value = serde_json::from_slice(&raw)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        bundle.insert(kind.key().to_string(), document);
    }

    if bundle.is_empty() {
        bail!("No content documents found in {}", data_dir.display());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let count = bundle.len();
    tokio::fs::write(output, serde_json::to_vec(&Value::Object(bundle))?)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Bundled {count} documents into {}", output.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentSource, EmbeddedSource};
    use crate::fixtures::sample_document;

    #[tokio::test]
    async fn test_bundle_skips_missing_and_round_trips_through_source() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        for kind in [SectionKind::About, SectionKind::Skills] {
            std::fs::write(
                data.join(format!("{}.json", kind.key())),
                serde_json::to_string_pretty(&sample_document(kind)).unwrap(),
            )
            .unwrap();
        }
        let output = dir.path().join("out/bundle.json");

        assert_eq!(write_bundle(&data, &output).await.unwrap(), 2);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains('\n'));

        let source = EmbeddedSource::from_file(&output).await.unwrap();
        assert_eq!(
            source.fetch("data/skills.json").await.unwrap(),
            sample_document(SectionKind::Skills)
        );
        assert!(source.fetch("data/projects.json").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_data_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_bundle(dir.path(), &dir.path().join("bundle.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No content documents"));
    }

    #[tokio::test]
    async fn test_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("about.json"), "{").unwrap();
        let err = write_bundle(dir.path(), &dir.path().join("bundle.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("about.json"));
    }
}
