// Tue Jan 20 2026 - Alex

use crate::model::ArgType;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Where an external (non-decompiled) class comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClspSource {
    Android,
    Java,
    /// `org.apache.http` classes removed from the Android SDK; apps using them
    /// need `useLibrary 'org.apache.http.legacy'` in their build script.
    ApacheHttpLegacyClient,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClspClass {
    pub name: String,
    #[serde(default)]
    pub source: ClspSource,
}

impl ClspClass {
    pub fn new(name: &str, source: ClspSource) -> Self {
        Self {
            name: name.to_string(),
            source,
        }
    }
}

/// Metadata for classes known from the platform classpath.
#[derive(Debug, Clone, Default)]
pub struct Classpath {
    classes: AHashMap<String, ClspClass>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cls: ClspClass) {
        self.classes.insert(cls.name.clone(), cls);
    }

    pub fn class_details(&self, ty: &ArgType) -> Option<&ClspClass> {
        ty.object_name().and_then(|name| self.classes.get(name))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClspClass> for Classpath {
    fn from_iter<I: IntoIterator<Item = ClspClass>>(iter: I) -> Self {
        let mut clsp = Classpath::new();
        for cls in iter {
            clsp.add(cls);
        }
        clsp
    }
}
