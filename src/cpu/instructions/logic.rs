// Logic instructions: AND, ORA, EOR, BIT.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn and(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.a &= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
        0
    }

    pub(crate) fn ora(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.a |= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
        0
    }

    pub(crate) fn eor(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.a ^= self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
        0
    }

    /// BIT - Zero is set from `A & M`, but N and V come straight from bits
    /// 7 and 6 of the memory operand, not from the AND result.
    pub(crate) fn bit(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.set_zero((self.a & value) == 0);
        self.set_negative(value & 0x80 != 0);
        self.set_overflow(value & 0x40 != 0);
        0
    }
}
