//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; callers
//! indexing a `Vec` should prefer the `.index()` helper.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
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

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a bot inside a simulation.
    pub struct BotId(u32);
}

typed_id! {
    /// Skeleton joint index understood by the host embodiment.
    ///
    /// Joint numbering belongs to the host's default skeleton; the behavior
    /// only ever touches a handful of them (see `bot_behavior::joints`).
    pub struct JointId(u16);
}

typed_id! {
    /// Monotonic counter identifying one waving episode of one bot.
    ///
    /// Deferred stop-wave timers carry the episode they were scheduled for so
    /// a late timer can never stop a newer episode.
    pub struct EpisodeId(u64);
}

impl EpisodeId {
    /// The episode after `self`.
    #[inline]
    pub fn next(self) -> EpisodeId {
        EpisodeId(self.0.wrapping_add(1))
    }
}
