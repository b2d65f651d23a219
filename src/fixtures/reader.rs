use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{parse_context, read_context};

/// Locations of the JSON fixtures describing one playoff
#[derive(Debug, Clone)]
pub struct FixturePaths {
    pub tournament: PathBuf,
    pub players: PathBuf,
    pub games: PathBuf,
    pub pairings: PathBuf,
    pub ratings: Option<PathBuf>,
}

/// Read and deserialize one fixture file
pub fn read_json<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    let json = fs::read_to_string(path).with_context(|| read_context(kind, path))?;

    let data = serde_json::from_str(&json).with_context(|| {
        format!(
            "{}. First 200 chars: {}",
            parse_context(kind, path),
            json.chars().take(200).collect::<String>()
        )
    })?;

    info!("Loaded {} from {}", kind, path.display());
    Ok(data)
}

/// Read an optional fixture; a missing path yields `None`
pub fn read_json_opt<T: DeserializeOwned>(path: Option<&Path>, kind: &str) -> Result<Option<T>> {
    match path {
        Some(path) => read_json(path, kind).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: String,
    }

    #[test]
    fn test_read_json_and_report_errors() {
        let temp_dir = std::env::temp_dir().join("playoff_site_reader_test");
        fs::create_dir_all(&temp_dir).unwrap();

        let good = temp_dir.join("good.json");
        fs::write(&good, r#"{"value": "ok"}"#).unwrap();
        let loaded: Sample = read_json(&good, "sample").unwrap();
        assert_eq!(loaded.value, "ok");

        let bad = temp_dir.join("bad.json");
        fs::write(&bad, "not json").unwrap();
        let err = read_json::<Sample>(&bad, "sample").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse sample"));

        let missing = read_json::<Sample>(&temp_dir.join("missing.json"), "sample").unwrap_err();
        assert!(missing.to_string().contains("Failed to read sample"));

        assert!(read_json_opt::<Sample>(None, "sample").unwrap().is_none());

        fs::remove_dir_all(&temp_dir).unwrap();
    }
}
