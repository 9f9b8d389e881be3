// Tue Jan 20 2026 - Alex

use std::fmt;

macro_rules! node_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                Self(index as u32)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

// Ids are handed out by `RootNode::build` in name order, so the derived `Ord`
// is the natural order of the entities.
node_id!(ClassId, "cls");
node_id!(MethodId, "mth");
node_id!(FieldId, "fld");
