//! Strongly typed, zero-cost identifier wrappers.
//!
//! Two distinct id spaces exist in this workspace and must never be mixed:
//!
//! - [`AgentId`] — the *global* agent identifier assigned by the simulation.
//!   Arbitrary `u64` values, unique across every process dump of one run.
//! - [`VertexId`] — the *dense* vertex index inside one built graph,
//!   sequential from 0.  Valid only for the graph that issued it.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into adjacency `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Globally unique agent identifier, as emitted by the simulation.
    /// The merge assumes uniqueness across *all* process dumps of one run,
    /// not per-process uniqueness.
    pub struct AgentId(u64);
}

typed_id! {
    /// Dense index of a vertex in one built interaction graph.
    /// Max ~4.3 billion vertices.
    pub struct VertexId(u32);
}

typed_id! {
    /// Rank of the simulation process that owned an agent.
    pub struct Rank(u32);
}
