// Comparison instructions: CMP, CPX, CPY. Subtraction without storing the
// result; only C, Z, N are updated.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.set_carry(register >= value);
        self.update_zero_and_negative_flags(result);
    }

    pub(crate) fn cmp(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.compare(self.a, value);
        0
    }

    pub(crate) fn cpx(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.compare(self.x, value);
        0
    }

    pub(crate) fn cpy(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.compare(self.y, value);
        0
    }
}
