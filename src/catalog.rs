use crate::error::{GamedlError, Result};
use crate::models::CatalogEntry;
use log::debug;
use std::fs;
use std::path::Path;

/// Loads the game catalog, a JSON array of `{GameName, DownloadLink}`
/// objects. Entries come back in file order. An empty (or whitespace-only)
/// file is a valid empty catalog.
pub fn load(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|source| GamedlError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&content).map_err(|source| GamedlError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_entries_in_file_order() {
        let file = catalog_file(
            r#"[
                {"GameName": "Beta", "DownloadLink": "https://host/b.zip"},
                {"GameName": "Alpha", "DownloadLink": "https://host/a.zip"},
                {"GameName": "Gamma", "DownloadLink": "https://host/g.zip"}
            ]"#,
        );

        let entries = load(file.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Beta");
        assert_eq!(entries[1].name, "Alpha");
        assert_eq!(entries[2].name, "Gamma");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("/nonexistent/games.json")).unwrap_err();
        assert!(matches!(err, GamedlError::CatalogRead { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = catalog_file("not json at all");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, GamedlError::CatalogParse { .. }));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let file = catalog_file(r#"{"GameName": "not a list"}"#);
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, GamedlError::CatalogParse { .. }));
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        let file = catalog_file("");
        assert!(load(file.path()).unwrap().is_empty());

        let file = catalog_file("   \n");
        assert!(load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let file = catalog_file("[]");
        assert!(load(file.path()).unwrap().is_empty());
    }
}
