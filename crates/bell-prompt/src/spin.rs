//! Lock & spin slot selection.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::Slot;

/// Values the user has locked. `None` or blank slots are spun.
///
/// Locked values are free text and are not checked against the option
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLocks {
    pub topic: Option<String>,
    pub format: Option<String>,
    pub constraint: Option<String>,
}

impl SlotLocks {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        let value = match slot {
            Slot::Topic => self.topic.as_deref(),
            Slot::Format => self.format.as_deref(),
            Slot::Constraint => self.constraint.as_deref(),
        };
        value.map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn is_locked(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }
}

/// Outcome of a spin: one value per slot plus the slots that were spun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub topic: String,
    pub format: String,
    pub constraint: String,
    pub spun: Vec<Slot>,
}

impl Selection {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Topic => &self.topic,
            Slot::Format => &self.format,
            Slot::Constraint => &self.constraint,
        }
    }
}

/// Keep locked slots and pick a random option for every other slot.
pub fn spin<R: Rng + ?Sized>(locks: &SlotLocks, rng: &mut R) -> Selection {
    let mut spun = Vec::new();
    let mut pick = |slot: Slot| -> String {
        if let Some(value) = locks.get(slot) {
            return value.to_string();
        }
        spun.push(slot);
        slot.options()
            .choose(&mut *rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    };
    let topic = pick(Slot::Topic);
    let format = pick(Slot::Format);
    let constraint = pick(Slot::Constraint);

    debug!(?spun, %topic, %format, %constraint, "spun generator slots");
    Selection {
        topic,
        format,
        constraint,
        spun,
    }
}
