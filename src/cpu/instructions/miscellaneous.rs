// NOP, BRK, RTI.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, vectors, Cpu};

impl Cpu {
    /// NOP still reads through its resolved operand so the unofficial
    /// multi-byte NOPs (e.g. $1C absolute,X) consume the bus the same way
    /// hardware does, including any read side effect at the address.
    pub(crate) fn nop(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let _ = self.read_operand(bus, operand);
        0
    }

    /// BRK consumes a padding byte after the opcode before pushing the
    /// return address, so the handler's RTI lands two bytes past BRK.
    pub(crate) fn brk(&mut self, bus: &mut CpuBus) -> u8 {
        self.pc = self.pc.wrapping_add(1);
        self.stack_push_u16(bus, self.pc);
        let status = self.status | flags::BREAK | flags::UNUSED;
        self.stack_push(bus, status);
        self.set_interrupt_disable(true);
        self.pc = bus.read_u16(vectors::IRQ);
        0
    }

    pub(crate) fn rti(&mut self, bus: &mut CpuBus) -> u8 {
        let pulled = self.stack_pop(bus);
        self.status = (pulled | flags::UNUSED) & !flags::BREAK;
        self.pc = self.stack_pop_u16(bus);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::CpuBus;

    #[test]
    fn brk_then_rti_round_trips_pc_and_flags() {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        bus.write(0xFFFE, 0x00);
        bus.write(0xFFFF, 0x90);
        cpu.pc = 0x8000;
        cpu.set_carry(true);
        cpu.brk(&mut bus);
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.get_interrupt_disable());
        cpu.rti(&mut bus);
        assert_eq!(cpu.pc, 0x8002);
        assert!(cpu.get_carry());
        assert!(!cpu.get_flag(flags::BREAK));
    }
}
