//! Hands out and reclaims up to 64 connection slots, tracking which are in
//! use with a single `BitField`.
//!
//! Run with `cargo run --example slots`.

use bitfield64::BitField;
use tracing::{info, warn};

struct SlotTable {
    in_use: BitField,
}

impl SlotTable {
    fn new() -> Self {
        Self {
            in_use: BitField::EMPTY,
        }
    }

    fn acquire(&mut self) -> Option<usize> {
        let Some(slot) = self.in_use.complement().least() else {
            warn!("all slots are in use");
            return None;
        };
        self.in_use = self.in_use.set(slot);
        info!(slot, in_use = self.in_use.count(), "acquired slot");
        Some(slot)
    }

    fn release(&mut self, slot: usize) {
        if !self.in_use.test(slot) {
            warn!(slot, "released a slot that was not in use");
            return;
        }
        self.in_use = self.in_use.unset(slot);
        info!(slot, in_use = self.in_use.count(), "released slot");
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut table = SlotTable::new();
    let acquired: Vec<usize> = (0..5).filter_map(|_| table.acquire()).collect();
    info!(?acquired, "initial allocation");

    table.release(1);
    table.release(3);
    table.release(3);
    info!(in_use = %table.in_use, "after releases");

    // released slots are reused lowest first
    table.acquire();
    info!(in_use = %table.in_use, free = table.in_use.complement().count(), "final table");

    table.in_use = BitField::FULL;
    table.acquire();
}
