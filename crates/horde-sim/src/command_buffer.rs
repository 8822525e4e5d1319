//! Deferred structural mutation.
//!
//! Systems never remove entities themselves. They record destroy commands
//! through a [`CommandWriter`], which is `Sync` and may be shared across
//! rayon workers. The engine flushes the buffer once, after every system
//! of the tick has run.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use hecs::{Entity, World};
use tracing::trace;

use horde_core::enums::DestroyReason;

use crate::error::{Result, SimError};

/// A structural mutation waiting for the tick-end barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Destroy {
        target: Entity,
        reason: DestroyReason,
    },
}

/// An entity removed during a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destroyed {
    pub entity: Entity,
    pub reason: DestroyReason,
}

#[derive(Debug)]
struct Entry {
    /// Writer that recorded the command; writers are created in system order.
    batch: u32,
    /// Entity index at record time, so parallel writers sort deterministically.
    sort_key: u32,
    command: Command,
}

#[derive(Debug, Default)]
pub struct CommandBuffer {
    entries: Mutex<Vec<Entry>>,
    next_batch: u32,
}

/// Handle for recording commands from one system, possibly from many threads.
#[derive(Debug, Clone, Copy)]
pub struct CommandWriter<'a> {
    buffer: &'a CommandBuffer,
    batch: u32,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a writer. Commands from later writers flush after earlier ones.
    pub fn writer(&mut self) -> CommandWriter<'_> {
        let batch = self.next_batch;
        self.next_batch += 1;
        CommandWriter {
            buffer: self,
            batch,
        }
    }

    /// Record a destroy from single-threaded code outside a system.
    pub fn destroy(&mut self, target: Entity, reason: DestroyReason) {
        self.writer().destroy(target, reason);
    }

    /// Number of recorded commands, duplicates included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply every recorded command to `world` and empty the buffer.
    ///
    /// Each target is removed exactly once no matter how many systems asked
    /// for it; the first request's reason is kept. A target that is not in
    /// the world is an ordering fault, and the world is left untouched.
    pub fn flush(&mut self, world: &mut World) -> Result<Vec<Destroyed>> {
        let mut entries = std::mem::take(
            self.entries
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner),
        );
        self.next_batch = 0;

        entries.sort_by_key(|entry| (entry.batch, entry.sort_key));

        let mut seen = HashSet::with_capacity(entries.len());
        let mut pending = Vec::with_capacity(entries.len());
        for entry in entries {
            let Command::Destroy { target, reason } = entry.command;
            if seen.insert(target) {
                pending.push(Destroyed {
                    entity: target,
                    reason,
                });
            }
        }

        // Nothing is removed unless every target is present.
        if let Some(missing) = pending.iter().find(|d| !world.contains(d.entity)) {
            return Err(SimError::UnknownDestroyTarget(missing.entity));
        }

        for destroyed in &pending {
            world
                .despawn(destroyed.entity)
                .map_err(|_| SimError::UnknownDestroyTarget(destroyed.entity))?;
            trace!(target = ?destroyed.entity, reason = ?destroyed.reason, "entity destroyed");
        }
        Ok(pending)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandWriter<'_> {
    pub fn destroy(&self, target: Entity, reason: DestroyReason) {
        let entry = Entry {
            batch: self.batch,
            sort_key: target.id(),
            command: Command::Destroy { target, reason },
        };
        self.buffer.lock().push(entry);
    }
}
