// Tue Jan 13 2026 - Alex

use crate::model::{ClassId, FieldId, MethodId, RootNode};
use crate::xref::UsageInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationStats {
    pub owners: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    class_deps: RelationStats,
    class_usage: RelationStats,
    class_use_in_mth: RelationStats,
    field_usage: RelationStats,
    mth_usage: RelationStats,
    use_apache_http_legacy: bool,
}

impl UsageStats {
    pub fn from_usage(usage: &UsageInfo<'_>) -> Self {
        Self {
            class_deps: RelationStats {
                owners: usage.cls_deps().len(),
                edges: usage.cls_deps().edge_count(),
            },
            class_usage: RelationStats {
                owners: usage.cls_usage().len(),
                edges: usage.cls_usage().edge_count(),
            },
            class_use_in_mth: RelationStats {
                owners: usage.cls_use_in_mth().len(),
                edges: usage.cls_use_in_mth().edge_count(),
            },
            field_usage: RelationStats {
                owners: usage.field_usage().len(),
                edges: usage.field_usage().edge_count(),
            },
            mth_usage: RelationStats {
                owners: usage.mth_usage().len(),
                edges: usage.mth_usage().edge_count(),
            },
            use_apache_http_legacy: usage.build_hints().use_apache_http_legacy(),
        }
    }

    pub fn rows(&self) -> [(&'static str, RelationStats); 5] {
        [
            ("class dependencies", self.class_deps),
            ("class usage", self.class_usage),
            ("class use in methods", self.class_use_in_mth),
            ("field usage", self.field_usage),
            ("method usage", self.mth_usage),
        ]
    }

    pub fn total_edges(&self) -> usize {
        self.rows().iter().map(|(_, r)| r.edges).sum()
    }

    pub fn use_apache_http_legacy(&self) -> bool {
        self.use_apache_http_legacy
    }
}

/// Entities nobody outside their own top-level class refers to. Only
/// meaningful after usage data was applied to the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedEntities {
    pub classes: Vec<ClassId>,
    pub methods: Vec<MethodId>,
    pub fields: Vec<FieldId>,
}

impl UnusedEntities {
    pub fn find(root: &RootNode) -> Self {
        let classes = root
            .classes()
            .iter()
            .filter(|cls| {
                let top = cls.top_parent_class();
                cls.use_in().iter().all(|&user| root.top_parent_class(user) == top)
            })
            .map(|cls| cls.id())
            .collect();
        let methods = root
            .methods()
            .iter()
            .filter(|mth| mth.use_in().is_empty())
            .map(|mth| mth.id())
            .collect();
        let fields = root
            .fields()
            .iter()
            .filter(|fld| fld.use_in().is_empty())
            .map(|fld| fld.id())
            .collect();
        Self { classes, methods, fields }
    }

    pub fn total(&self) -> usize {
        self.classes.len() + self.methods.len() + self.fields.len()
    }
}
