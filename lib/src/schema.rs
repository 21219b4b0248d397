//! Typed model of the input document: two top-level mappings, `classes` and
//! `properties`, each from a name to a definition with optional fields.
//! Field absence suppresses the corresponding triple; it is never an error.

use crate::errors::LoadError;
use anyhow::Result;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub classes: BTreeMap<String, ClassDef>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClassDef {
    pub label: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "subClassOf")]
    pub sub_class_of: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertyDef {
    pub label: Option<String>,
    pub comment: Option<String>,
    pub range: Option<Vec<String>>,
    pub domain: Option<Vec<String>>,
}

impl SchemaDocument {
    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }
}

/// Reads and parses the schema description at `path`. Any failure here is
/// fatal to the conversion: no graph may be built from a partially-loaded
/// document.
pub fn load_document(path: &Path) -> Result<SchemaDocument> {
    let file = File::open(path).map_err(|e| LoadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let reader = BufReader::new(file);
    let document: SchemaDocument = serde_yaml::from_reader(reader).map_err(|e| LoadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        "Loaded schema description from {} ({} classes, {} properties)",
        path.display(),
        document.classes.len(),
        document.properties.len()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_fields() {
        let doc = SchemaDocument::from_yaml_str(
            r#"
classes:
  Book:
    label: Book
    subClassOf:
      - CreativeWork
properties:
  author:
    range:
      - Person
"#,
        )
        .unwrap();
        let book = &doc.classes["Book"];
        assert_eq!(book.label.as_deref(), Some("Book"));
        assert!(book.comment.is_none());
        assert_eq!(book.sub_class_of.as_deref(), Some(&["CreativeWork".to_string()][..]));
        let author = &doc.properties["author"];
        assert_eq!(author.range.as_deref(), Some(&["Person".to_string()][..]));
        assert!(author.domain.is_none());
    }

    #[test]
    fn missing_top_level_sections_are_empty() {
        let doc = SchemaDocument::from_yaml_str("classes: {}").unwrap();
        assert!(doc.classes.is_empty());
        assert!(doc.properties.is_empty());
    }
}
