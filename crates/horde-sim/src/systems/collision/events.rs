//! Physics-event collision resolution.
//!
//! Each reported contact is normalized into an (instigator, receiver) pair
//! by matching both orderings against [`CONTACT_RULES`]; the first rule that
//! matches wins. Pairs no rule covers are ignored. Events are handled one
//! at a time because two contacts in the same tick may touch the same
//! entity's health or lifetime.

use std::collections::HashSet;

use hecs::{Entity, World};
use tracing::trace;

use horde_core::components::{Health, Timed};
use horde_core::constants::ENEMY_CONTACT_DAMAGE;
use horde_core::tags::TagSet;

use crate::error::{Result, SimError};
use crate::physics::CollisionEvent;

use super::classify;

/// What happens to the receiving side of a contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReceiverEffect {
    /// Health drops to zero.
    Kill,
    /// Health drops by a fixed amount.
    Damage(f32),
}

/// One row of the contact precedence table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactRule {
    pub instigator: TagSet,
    pub receiver: TagSet,
    /// Zero the instigator's lifetime so the lifetime pass removes it.
    pub expire_instigator: bool,
    pub effect: ReceiverEffect,
}

/// Contact rules in precedence order.
pub const CONTACT_RULES: [ContactRule; 2] = [
    ContactRule {
        instigator: TagSet::BULLET,
        receiver: TagSet::ENEMY,
        expire_instigator: true,
        effect: ReceiverEffect::Kill,
    },
    ContactRule {
        instigator: TagSet::ENEMY,
        receiver: TagSet::PLAYER,
        expire_instigator: false,
        effect: ReceiverEffect::Damage(ENEMY_CONTACT_DAMAGE),
    },
];

/// A contact matched against a rule, with roles assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedContact {
    pub rule: ContactRule,
    pub instigator: Entity,
    pub receiver: Entity,
}

/// Resolve `events` against the world. Returns how many contacts applied.
///
/// With `dedupe` set, an unordered pair of entities is applied at most once
/// per call, so engines that report A↔B and B↔A do not double the damage.
pub fn run(world: &mut World, events: &[CollisionEvent], dedupe: bool) -> Result<usize> {
    let mut seen: HashSet<(Entity, Entity)> = HashSet::new();
    let mut resolved = 0;

    for event in events {
        let Some(contact) = normalize(world, event)? else {
            trace!(a = ?event.a, b = ?event.b, "contact matches no rule");
            continue;
        };

        if dedupe {
            let pair = (contact.instigator, contact.receiver);
            if !seen.insert(pair) {
                trace!(?pair, "duplicate contact skipped");
                continue;
            }
        }

        apply(world, &contact)?;
        resolved += 1;
    }

    Ok(resolved)
}

/// Classify both sides of `event` and find the first rule either ordering
/// satisfies.
pub fn normalize(world: &World, event: &CollisionEvent) -> Result<Option<ResolvedContact>> {
    let tags_a = classify(world, event.a)?;
    let tags_b = classify(world, event.b)?;

    for rule in CONTACT_RULES {
        if tags_a.contains(rule.instigator) && tags_b.contains(rule.receiver) {
            return Ok(Some(ResolvedContact {
                rule,
                instigator: event.a,
                receiver: event.b,
            }));
        }
        if tags_b.contains(rule.instigator) && tags_a.contains(rule.receiver) {
            return Ok(Some(ResolvedContact {
                rule,
                instigator: event.b,
                receiver: event.a,
            }));
        }
    }
    Ok(None)
}

fn apply(world: &mut World, contact: &ResolvedContact) -> Result<()> {
    // Borrow both sides before touching either, so a failed lookup leaves
    // the contact entirely unapplied.
    let timed = if contact.rule.expire_instigator {
        let timed = world
            .get::<&mut Timed>(contact.instigator)
            .map_err(|e| {
                SimError::from_component(e, contact.instigator, "Timed", "expiring instigator")
            })?;
        Some(timed)
    } else {
        None
    };
    let mut health = world
        .get::<&mut Health>(contact.receiver)
        .map_err(|e| SimError::from_component(e, contact.receiver, "Health", "damaging receiver"))?;

    if let Some(mut timed) = timed {
        timed.expire();
    }
    match contact.rule.effect {
        ReceiverEffect::Kill => health.kill(),
        ReceiverEffect::Damage(amount) => health.apply_damage(amount),
    }
    Ok(())
}
