// Tue Jan 13 2026 - Alex

use crate::model::RootNode;
use crate::utils::logging::ScopedTimer;
use crate::xref::{Reference, SharedUsageInfo, UsageInfo, XRef, XRefError};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Feeds reported references into a fresh `UsageInfo`.
pub struct UsageAnalyzer<'a> {
    root: &'a RootNode,
    parallel: bool,
    max_threads: usize,
}

impl<'a> UsageAnalyzer<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self {
            root,
            parallel: false,
            max_threads: num_cpus::get(),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads.max(1);
        self
    }

    /// References whose owner or target is not part of the program are
    /// skipped. An owner of an unsupported kind aborts the pass.
    pub fn analyze(&self, refs: &[XRef]) -> Result<UsageInfo<'a>, XRefError> {
        let _timer = ScopedTimer::new("usage analysis");
        let skipped = AtomicUsize::new(0);

        let usage = if self.parallel && refs.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.max_threads)
                .build()?;
            let shared = SharedUsageInfo::new(UsageInfo::new(self.root));
            pool.install(|| {
                refs.par_iter().try_for_each(|xref| match self.resolve(xref) {
                    Some(reference) => shared.record(&reference),
                    None => {
                        skipped.fetch_add(1, Ordering::Relaxed);
                        Ok(())
                    }
                })
            })?;
            shared.into_inner()
        } else {
            let mut usage = UsageInfo::new(self.root);
            for xref in refs {
                match self.resolve(xref) {
                    Some(reference) => usage.record(&reference)?,
                    None => {
                        skipped.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
            usage
        };

        let skipped = skipped.into_inner();
        log::info!(
            "Recorded {} references ({} skipped)",
            refs.len() - skipped,
            skipped
        );
        Ok(usage)
    }

    fn resolve<'r>(&self, xref: &'r XRef) -> Option<Reference<'r>> {
        match xref.resolve(self.root) {
            Ok(reference) => Some(reference),
            Err(e) => {
                log::warn!("Skipping reference `{}`: {}", xref, e);
                None
            }
        }
    }
}
