// Tue Jan 20 2026 - Alex

use crate::model::{ArgType, ClassId, ClspSource, RootNode};
use bitflags::bitflags;

bitflags! {
    /// Facts about the program found while walking types, consumed later when
    /// the build script for the decompiled project is generated. Flags are only
    /// ever added.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BuildHints: u32 {
        const USE_APACHE_HTTP_LEGACY = 1 << 0;
    }
}

impl BuildHints {
    pub fn use_apache_http_legacy(self) -> bool {
        self.contains(Self::USE_APACHE_HTTP_LEGACY)
    }
}

/// Visits every local class reachable from `ty`: array element types, generic
/// arguments, type variable bounds and wildcard bounds.
///
/// Outer types of nested generics (`Outer<T>.Inner`) are not walked.
pub fn process_type<F>(root: &RootNode, ty: &ArgType, hints: &mut BuildHints, consumer: &mut F)
where
    F: FnMut(ClassId),
{
    if ty.is_unbounded_object() {
        return;
    }
    if ty.is_array() {
        process_type(root, ty.array_root_element(), hints, consumer);
        return;
    }
    if !ty.is_object() {
        return;
    }

    if let Some(details) = root.classpath().class_details(ty) {
        if details.source == ClspSource::ApacheHttpLegacyClient && !hints.use_apache_http_legacy() {
            log::debug!("Apache HTTP legacy client class in use: {}", details.name);
            hints.insert(BuildHints::USE_APACHE_HTTP_LEGACY);
        }
    }
    match root.resolve_class(ty) {
        Some(cls) => consumer(cls),
        None => log::trace!("Type not resolved to a local class: {}", ty),
    }
    for generic in ty.generic_types() {
        process_type(root, generic, hints, consumer);
    }
    for extend in ty.extend_types() {
        process_type(root, extend, hints, consumer);
    }
    if let Some(wildcard) = ty.wildcard_type() {
        process_type(root, wildcard, hints, consumer);
    }
}

/// Collects the classes `process_type` reports, in visit order.
pub fn collect_classes(root: &RootNode, ty: &ArgType, hints: &mut BuildHints) -> Vec<ClassId> {
    let mut classes = Vec::new();
    process_type(root, ty, hints, &mut |cls| classes.push(cls));
    classes
}
