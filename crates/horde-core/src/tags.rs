//! Bit-flag view over an entity's marker components.
//!
//! Markers are stored as zero-sized components; `TagSet` packs the ones
//! an entity carries into a single byte so pairs can be matched against
//! tables without repeated archetype lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: TagSet = TagSet(0);
    pub const BULLET: TagSet = TagSet(1 << 0);
    pub const ENEMY: TagSet = TagSet(1 << 1);
    pub const PLAYER: TagSet = TagSet(1 << 2);
    pub const MOVE_FORWARD: TagSet = TagSet(1 << 3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: TagSet) -> TagSet {
        TagSet(self.0 | other.0)
    }

    /// True when every flag in `other` is also set here.
    pub const fn contains(self, other: TagSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: TagSet) {
        self.0 |= other.0;
    }
}

impl std::ops::BitOr for TagSet {
    type Output = TagSet;

    fn bitor(self, rhs: TagSet) -> TagSet {
        self.union(rhs)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(TagSet, &str); 4] = [
            (TagSet::BULLET, "Bullet"),
            (TagSet::ENEMY, "Enemy"),
            (TagSet::PLAYER, "Player"),
            (TagSet::MOVE_FORWARD, "MoveForward"),
        ];
        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}
