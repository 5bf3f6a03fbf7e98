/// Fixed-capacity bullet pool.
///
/// Slots are allocated once and reused forever.  A shot takes the first
/// free slot in index order; when every slot is busy the oldest bullet
/// (smallest firing order) is recycled so firing never stalls.

use log::{debug, info, trace};

use crate::collision::swept_hit;
use crate::config::Tuning;
use crate::consts::MAX_BULLETS;
use crate::entities::{BulletSlot, Entity};

/// Where a shot landed in the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shot {
    pub index: usize,
    /// The slot was taken from a live bullet.
    pub recycled: bool,
    pub shot_order: u64,
}

/// What happened to the pool during one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Indices of enemies killed this tick, in kill order.
    pub killed: Vec<usize>,
    /// Bullets retired because they outlived their lifetime.
    pub expired: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BulletPool {
    slots: [BulletSlot; MAX_BULLETS],
    /// Next firing order to hand out; bumped on every shot.
    next_shot_order: u64,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletPool {
    pub fn new() -> Self {
        Self {
            slots: [BulletSlot::default(); MAX_BULLETS],
            next_shot_order: 0,
        }
    }

    pub fn slots(&self) -> &[BulletSlot; MAX_BULLETS] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [BulletSlot; MAX_BULLETS] {
        &mut self.slots
    }

    pub fn next_shot_order(&self) -> u64 {
        self.next_shot_order
    }

    /// Number of occupied slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.in_motion).count()
    }

    /// In-motion slots, for drawing.
    pub fn active(&self) -> impl Iterator<Item = &BulletSlot> {
        self.slots.iter().filter(|s| s.in_motion)
    }

    /// Claim a slot for a new bullet.
    ///
    /// The bullet's position is filled in by the next [`BulletPool::step`],
    /// which snaps it to the shooter.
    pub fn fire(&mut self) -> Shot {
        let mut oldest = 0;
        let mut free = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if !slot.in_motion {
                free = Some(i);
                break;
            }
            if slot.shot_order < self.slots[oldest].shot_order {
                oldest = i;
            }
        }

        let (index, recycled) = match free {
            Some(i) => (i, false),
            None => (oldest, true),
        };

        let shot_order = self.next_shot_order;
        self.next_shot_order += 1;

        let slot = &mut self.slots[index];
        slot.shot_order = shot_order;
        slot.fired = true;
        slot.in_motion = true;

        if recycled {
            debug!("pool full, recycled slot {index} for shot {shot_order}");
        } else {
            debug!("shot {shot_order} in slot {index}");
        }

        Shot {
            index,
            recycled,
            shot_order,
        }
    }

    /// Advance every live bullet by one tick.
    ///
    /// Freshly fired bullets are placed on `shooter` and skip the hit test;
    /// the rest are tested against every living enemy, then moved or retired.
    pub fn step(
        &mut self,
        shooter: &Entity,
        enemies: &mut [Entity],
        now: u64,
        tuning: &Tuning,
    ) -> StepReport {
        let mut report = StepReport::default();

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !slot.in_motion {
                continue;
            }

            if slot.fired {
                slot.current_frame.pos = shooter.pos;
                slot.current_frame.dir = shooter.dir;
                slot.age.start(now);
                slot.fired = false;
            } else {
                for (e, enemy) in enemies.iter_mut().enumerate() {
                    if !enemy.alive {
                        continue;
                    }
                    if swept_hit(
                        enemy.pos,
                        slot.last_frame.pos,
                        slot.current_frame.pos,
                        tuning.collision_radius,
                    ) {
                        enemy.alive = false;
                        slot.in_motion = false;
                        report.killed.push(e);
                        info!("bullet {i} killed enemy {e}");
                        break;
                    }
                }
            }

            if slot.in_motion {
                slot.last_frame = slot.current_frame;
                slot.age.update(now);
                if slot.age.elapsed_millis() > tuning.bullet_lifetime_ms {
                    slot.in_motion = false;
                    report.expired += 1;
                    trace!("bullet {i} expired");
                } else {
                    let dir = slot.current_frame.dir;
                    slot.current_frame.pos += dir * tuning.bullet_step;
                }
            }
        }

        report
    }
}
