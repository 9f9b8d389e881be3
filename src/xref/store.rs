// Wed Jan 21 2026 - Alex

use crate::model::{ClassNode, FieldNode, MethodNode, RootNode};
use crate::xref::{UsageInfo, UsageInfoVisitor, XRefError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Usage data keyed by entity names, so it can be stored and applied to a
/// later build of the same program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub version: u32,
    #[serde(default)]
    pub use_apache_http_legacy: bool,
    #[serde(default)]
    pub class_deps: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub class_usage: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub class_use_in_methods: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub field_usage: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub method_usage: IndexMap<String, Vec<String>>,
}

impl UsageSnapshot {
    pub fn from_usage(usage: &UsageInfo<'_>) -> Self {
        let mut collector = SnapshotCollector::new();
        usage.visit_usage_data(&mut collector);
        let mut snapshot = collector.into_snapshot();
        snapshot.use_apache_http_legacy = usage.build_hints().use_apache_http_legacy();
        snapshot
    }

    pub fn write_json(&self, path: &Path, pretty: bool) -> Result<(), XRefError> {
        let mut writer = BufWriter::new(File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self, XRefError> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Self = serde_json::from_reader(reader)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(XRefError::StaleSnapshot(format!(
                "snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }

    /// Stores the snapshot onto the matching entities. Every name must exist
    /// in `root`; nothing is written when one does not.
    pub fn restore(&self, root: &RootNode) -> Result<usize, XRefError> {
        let class_deps = resolve_entries(&self.class_deps, |n| root.class_by_name(n), |n| root.class_by_name(n))?;
        let class_usage = resolve_entries(&self.class_usage, |n| root.class_by_name(n), |n| root.class_by_name(n))?;
        let class_use_in_mth = resolve_entries(
            &self.class_use_in_methods,
            |n| root.class_by_name(n),
            |n| root.method_by_full_id(n),
        )?;
        let field_usage = resolve_entries(
            &self.field_usage,
            |n| root.field_by_full_id(n),
            |n| root.method_by_full_id(n),
        )?;
        let method_usage = resolve_entries(
            &self.method_usage,
            |n| root.method_by_full_id(n),
            |n| root.method_by_full_id(n),
        )?;

        let mut applied = 0;
        for (cls, deps) in class_deps {
            root.class(cls).set_dependencies(deps);
            applied += 1;
        }
        for (cls, usage) in class_usage {
            root.class(cls).set_use_in(usage);
            applied += 1;
        }
        for (cls, methods) in class_use_in_mth {
            root.class(cls).set_use_in_mth(methods);
            applied += 1;
        }
        for (fld, methods) in field_usage {
            root.field(fld).set_use_in(methods);
            applied += 1;
        }
        for (mth, methods) in method_usage {
            root.method(mth).set_use_in(methods);
            applied += 1;
        }
        log::debug!("Restored {} usage entries from snapshot", applied);
        Ok(applied)
    }
}

fn resolve_entries<K, V, FK, FV>(
    entries: &IndexMap<String, Vec<String>>,
    resolve_key: FK,
    resolve_value: FV,
) -> Result<Vec<(K, Vec<V>)>, XRefError>
where
    V: Ord,
    FK: Fn(&str) -> Option<K>,
    FV: Fn(&str) -> Option<V>,
{
    entries
        .iter()
        .map(|(key, values)| {
            let owner = resolve_key(key).ok_or_else(|| XRefError::StaleSnapshot(key.clone()))?;
            let mut uses = values
                .iter()
                .map(|v| resolve_value(v).ok_or_else(|| XRefError::StaleSnapshot(v.clone())))
                .collect::<Result<Vec<V>, XRefError>>()?;
            uses.sort();
            Ok((owner, uses))
        })
        .collect()
}

/// Visitor that turns streamed usage data into a [`UsageSnapshot`].
#[derive(Debug, Default)]
pub struct SnapshotCollector {
    snapshot: UsageSnapshot,
    complete: bool,
}

impl SnapshotCollector {
    pub fn new() -> Self {
        Self {
            snapshot: UsageSnapshot {
                version: SNAPSHOT_VERSION,
                ..UsageSnapshot::default()
            },
            complete: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn into_snapshot(self) -> UsageSnapshot {
        self.snapshot
    }
}

fn class_names(classes: &[&ClassNode]) -> Vec<String> {
    classes.iter().map(|c| c.full_name().to_string()).collect()
}

fn method_ids(methods: &[&MethodNode]) -> Vec<String> {
    methods.iter().map(|m| m.full_id().to_string()).collect()
}

impl UsageInfoVisitor for SnapshotCollector {
    fn visit_class_deps(&mut self, cls: &ClassNode, deps: &[&ClassNode]) {
        self.snapshot
            .class_deps
            .insert(cls.full_name().to_string(), class_names(deps));
    }

    fn visit_class_usage(&mut self, cls: &ClassNode, usage: &[&ClassNode]) {
        self.snapshot
            .class_usage
            .insert(cls.full_name().to_string(), class_names(usage));
    }

    fn visit_class_use_in_methods(&mut self, cls: &ClassNode, methods: &[&MethodNode]) {
        self.snapshot
            .class_use_in_methods
            .insert(cls.full_name().to_string(), method_ids(methods));
    }

    fn visit_fields_usage(&mut self, fld: &FieldNode, methods: &[&MethodNode]) {
        self.snapshot
            .field_usage
            .insert(fld.full_id().to_string(), method_ids(methods));
    }

    fn visit_methods_usage(&mut self, mth: &MethodNode, methods: &[&MethodNode]) {
        self.snapshot
            .method_usage
            .insert(mth.full_id().to_string(), method_ids(methods));
    }

    fn visit_complete(&mut self) {
        self.complete = true;
    }
}
