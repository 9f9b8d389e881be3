// Tue Jan 20 2026 - Alex

use crate::model::{ClassNode, FieldNode, MethodNode};

/// Receives finalized usage data, one call per owner and relation kind.
///
/// Calls arrive grouped by relation in this order: class dependencies, class
/// usage, class use in methods, field usage, method usage. `visit_complete`
/// comes last.
pub trait UsageInfoVisitor {
    fn visit_class_deps(&mut self, cls: &ClassNode, deps: &[&ClassNode]);

    fn visit_class_usage(&mut self, cls: &ClassNode, usage: &[&ClassNode]);

    fn visit_class_use_in_methods(&mut self, cls: &ClassNode, methods: &[&MethodNode]);

    fn visit_fields_usage(&mut self, fld: &FieldNode, methods: &[&MethodNode]);

    fn visit_methods_usage(&mut self, mth: &MethodNode, methods: &[&MethodNode]);

    fn visit_complete(&mut self) {}
}
