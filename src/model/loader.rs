// Wed Jan 21 2026 - Alex

use crate::model::{ClassDecl, Classpath, ClspClass, ModelError, RootNode};
use crate::xref::XRef;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk program description: declared classes, classpath metadata and the
/// references found while decoding method bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramDescription {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub classpath: Vec<ClspClass>,
    #[serde(default)]
    pub references: Vec<XRef>,
}

impl ProgramDescription {
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the program model. References are handed back untouched.
    pub fn into_root(self) -> Result<(RootNode, Vec<XRef>), ModelError> {
        let classpath: Classpath = self.classpath.into_iter().collect();
        let root = RootNode::build(self.classes, classpath)?;
        Ok((root, self.references))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PROGRAM: &str = r#"{
        "classes": [
            {"name": "a.A", "methods": [{"name": "m1"}]},
            {"name": "a.B", "fields": [{"name": "f", "type": {"object": {"name": "a.A"}}}]}
        ],
        "classpath": [{"name": "org.apache.http.HttpEntity", "source": "apache_http_legacy_client"}],
        "references": [
            {"kind": "field_use", "from": {"method": {"class": "a.A", "name": "m1"}},
             "field": {"class": "a.B", "name": "f"}}
        ]
    }"#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PROGRAM.as_bytes()).unwrap();

        let desc = ProgramDescription::from_file(file.path()).unwrap();
        assert_eq!(desc.classes.len(), 2);
        assert_eq!(desc.references.len(), 1);

        let (root, refs) = desc.into_root().unwrap();
        assert_eq!(root.classes().len(), 2);
        assert_eq!(root.classpath().len(), 1);
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(ProgramDescription::from_json("{"), Err(ModelError::ParseError(_))));
    }
}
