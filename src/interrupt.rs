// Interrupt module - the CPU/PPU interrupt mailbox
//
// The original source modeled this as a package-level singleton
// (`interrupt.InterruptSignal`, a `var` of unexported type) shared by every
// caller in the process. That hides the coupling between the PPU, which
// sends, and the CPU, which reads and clears. Here it is an owned,
// explicitly-constructed single-slot mailbox: the coordinator builds one
// `InterruptLatch` and hands a clone of the handle to both the PPU and the
// CPU bus at construction time. Nothing else may reach it.

use std::cell::Cell;
use std::rc::Rc;

/// Which interrupt is latched. `Reset` re-runs the CPU's power-on sequence
/// without pushing anything to the stack; `Nmi` and `Irq` push PC and P and
/// jump through their vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Reset,
    Nmi,
    Irq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    pending: Option<InterruptKind>,
}

/// A single-slot mailbox: `send` always overwrites whatever was pending,
/// `read` atomically returns and clears it. Both operations run on the
/// single emulation thread, so a `Cell` is sufficient; nothing here is ever
/// touched from the host thread.
#[derive(Clone)]
pub struct InterruptLatch {
    slot: Rc<Cell<Slot>>,
}

impl InterruptLatch {
    pub fn new() -> Self {
        InterruptLatch {
            slot: Rc::new(Cell::new(Slot { pending: None })),
        }
    }

    /// Overwrite the pending interrupt. NMI is edge-triggered and always
    /// wins a race against a simultaneous IRQ because it is checked first
    /// by the CPU (see `Cpu::step`); `send` itself has no priority logic.
    pub fn send(&self, kind: InterruptKind) {
        self.slot.set(Slot { pending: Some(kind) });
    }

    /// Return and clear the pending interrupt, if any.
    pub fn read(&self) -> Option<InterruptKind> {
        let slot = self.slot.get();
        self.slot.set(Slot { pending: None });
        slot.pending
    }

    /// Peek without clearing; used by the CPU to decide whether an IRQ
    /// should be masked by the I flag while still honoring a pending NMI.
    pub fn peek(&self) -> Option<InterruptKind> {
        self.slot.get().pending
    }

    /// Clear without reading.
    pub fn clear(&self) {
        self.slot.set(Slot { pending: None });
    }
}

impl Default for InterruptLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_clears_the_slot() {
        let latch = InterruptLatch::new();
        latch.send(InterruptKind::Nmi);
        assert_eq!(latch.read(), Some(InterruptKind::Nmi));
        assert_eq!(latch.read(), None);
    }

    #[test]
    fn send_overwrites_pending() {
        let latch = InterruptLatch::new();
        latch.send(InterruptKind::Irq);
        latch.send(InterruptKind::Nmi);
        assert_eq!(latch.read(), Some(InterruptKind::Nmi));
    }

    #[test]
    fn clone_shares_the_same_slot() {
        let latch = InterruptLatch::new();
        let handle = latch.clone();
        handle.send(InterruptKind::Reset);
        assert_eq!(latch.read(), Some(InterruptKind::Reset));
    }
}
