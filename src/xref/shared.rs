// Tue Jan 13 2026 - Alex

use crate::model::{ArgType, ClassId, FieldId, MethodId};
use crate::xref::{BuildHints, CodeNode, Reference, UsageInfo, XRefError};
use parking_lot::Mutex;

/// `UsageInfo` behind a single lock, for passes that decode methods on
/// several threads. Every call holds the lock for the whole operation.
pub struct SharedUsageInfo<'a> {
    inner: Mutex<UsageInfo<'a>>,
}

impl<'a> SharedUsageInfo<'a> {
    pub fn new(usage: UsageInfo<'a>) -> Self {
        Self {
            inner: Mutex::new(usage),
        }
    }

    pub fn record(&self, reference: &Reference<'_>) -> Result<(), XRefError> {
        self.inner.lock().record(reference)
    }

    pub fn cls_use_type(&self, cls: ClassId, use_type: &ArgType) {
        self.inner.lock().cls_use_type(cls, use_type);
    }

    pub fn node_use_type(&self, node: &CodeNode, use_type: &ArgType) -> Result<(), XRefError> {
        self.inner.lock().node_use_type(node, use_type)
    }

    pub fn method_use(&self, mth: MethodId, use_mth: MethodId) {
        self.inner.lock().method_use(mth, use_mth);
    }

    pub fn field_use(&self, mth: MethodId, use_fld: FieldId) {
        self.inner.lock().field_use(mth, use_fld);
    }

    pub fn build_hints(&self) -> BuildHints {
        self.inner.lock().build_hints()
    }

    pub fn into_inner(self) -> UsageInfo<'a> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::sample_program;
    use rayon::prelude::*;

    #[test]
    fn test_parallel_recording_matches_sequential() {
        let fx = sample_program();
        let callers = vec![fx.mth("a.A", "m1"), fx.mth("a.A", "self_ref"), fx.mth("a.A$In", "inner")];
        let m2 = fx.mth("b.B", "m2");
        let items = fx.fld("b.B", "items");

        let shared = SharedUsageInfo::new(UsageInfo::new(&fx.root));
        callers.par_iter().for_each(|&mth| {
            shared.method_use(mth, m2);
            shared.field_use(mth, items);
        });
        let parallel = shared.into_inner();

        let mut sequential = UsageInfo::new(&fx.root);
        for &mth in callers.iter().rev() {
            sequential.field_use(mth, items);
            sequential.method_use(mth, m2);
        }

        let b = fx.cls("b.B");
        assert_eq!(parallel.cls_usage().sorted(&b), sequential.cls_usage().sorted(&b));
        assert_eq!(parallel.mth_usage().sorted(&m2), sequential.mth_usage().sorted(&m2));
        assert_eq!(parallel.field_usage().sorted(&items).len(), 3);
    }
}
