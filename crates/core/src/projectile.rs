//! Projectile pool and trail ring.
//!
//! Both are fixed-capacity arrays indexed by slot, so firing never allocates.

use crate::types::{PROJECTILE_CAPACITY, PROJECTILE_SPEED, TRAIL_LEN, TRAIL_SPACING};

/// Ring of the last `TRAIL_LEN` positions. Pushing overwrites the oldest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail {
    samples: [(f32, f32); TRAIL_LEN],
    /// Slot the next push writes to (the oldest sample once full)
    head: usize,
    len: usize,
}

impl Trail {
    pub const fn new() -> Self {
        Self {
            samples: [(0.0, 0.0); TRAIL_LEN],
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, pos: (f32, f32)) {
        self.samples[self.head] = pos;
        self.head = (self.head + 1) % TRAIL_LEN;
        if self.len < TRAIL_LEN {
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples from newest to oldest, with their age (0 = newest).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, (f32, f32))> + '_ {
        (0..self.len).map(move |age| {
            let idx = (self.head + TRAIL_LEN - 1 - age) % TRAIL_LEN;
            (age, self.samples[idx])
        })
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub active: bool,
    pub trail: Trail,
}

impl Projectile {
    pub const fn inactive() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            active: false,
            trail: Trail::new(),
        }
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::inactive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { slot: usize },
    PoolFull,
}

impl FireOutcome {
    pub fn fired(self) -> bool {
        matches!(self, FireOutcome::Fired { .. })
    }
}

/// Fixed pool of projectile slots
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectilePool {
    slots: [Projectile; PROJECTILE_CAPACITY],
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self {
            slots: [Projectile::inactive(); PROJECTILE_CAPACITY],
        }
    }

    pub const fn capacity(&self) -> usize {
        PROJECTILE_CAPACITY
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Claim the lowest free slot and launch along `heading`.
    ///
    /// The trail is pre-seeded with points behind the origin so the first frame
    /// already shows a tail. A full pool leaves every slot untouched.
    pub fn fire(&mut self, origin_x: f32, origin_y: f32, heading: f32) -> FireOutcome {
        let Some(slot) = self.slots.iter().position(|p| !p.active) else {
            return FireOutcome::PoolFull;
        };

        let (s, c) = heading.sin_cos();
        let p = &mut self.slots[slot];
        p.x = origin_x;
        p.y = origin_y;
        p.dx = s * PROJECTILE_SPEED;
        p.dy = c * PROJECTILE_SPEED;
        p.active = true;

        p.trail.clear();
        // Oldest first so the newest sample ends up nearest the origin.
        for k in (1..=TRAIL_LEN).rev() {
            let back = k as f32 * TRAIL_SPACING;
            p.trail.push((origin_x - s * back, origin_y - c * back));
        }

        FireOutcome::Fired { slot }
    }

    pub fn get(&self, slot: usize) -> Option<&Projectile> {
        self.slots.get(slot)
    }

    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}
