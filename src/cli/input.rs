//! WMO map file handling
//!
//! The WMO map is a small whitespace-separated file pairing each READER
//! WMO code with the station's data-file URL (or filename), one pair per
//! line. Station names and data filenames are resolved to WMO codes by
//! matching against the URL's stem, the text before its first `.`.

use crate::{Error, Result};
use std::path::Path;

/// Parsed WMO code to data URL mapping
#[derive(Debug, Clone, Default)]
pub struct WmoMap {
    entries: Vec<(String, String)>,
}

impl WmoMap {
    /// Parse map content, one `wmo url` pair per line.
    ///
    /// Blank lines are skipped; a line without exactly two fields is
    /// malformed.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(wmo), Some(url), None) => {
                    entries.push((wmo.to_string(), url.to_string()));
                }
                _ => return Err(Error::malformed_field("WMO map line", line)),
            }
        }
        Ok(Self { entries })
    }

    /// Load a map from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read WMO map {}", path.display()), e))?;
        Self::parse(&content)
    }

    /// Resolve a station name (or data filename) to its WMO code.
    ///
    /// Matches the name against each URL's stem; e.g. name `Rothera` and
    /// filename `Rothera.All.temperature.txt` both match the entry whose
    /// URL is `Rothera.All.temperature.html`.
    pub fn find_wmo(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, url)| {
                let stem = url.split('.').next().unwrap_or(url);
                !stem.is_empty() && name.starts_with(stem)
            })
            .map(|(wmo, _)| wmo.as_str())
    }

    /// Number of map entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, u)| (w.as_str(), u.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let map = WmoMap::parse(
            "89009 Amundsen-Scott.All.temperature.html\n\
             89062 Rothera.All.temperature.html\n",
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.find_wmo("Rothera"), Some("89062"));
        assert_eq!(map.find_wmo("Rothera.All.temperature.txt"), Some("89062"));
        assert_eq!(map.find_wmo("Vostok"), None);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let map = WmoMap::parse("\n89009 Amundsen-Scott.All.temperature.html\n\n").unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_malformed_line_rejected() {
        assert!(WmoMap::parse("89009\n").is_err());
        assert!(WmoMap::parse("89009 url extra\n").is_err());
    }
}
