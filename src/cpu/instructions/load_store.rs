// Load/store instructions: LDA, LDX, LDY, STA, STX, STY.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn lda(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.a = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.a);
        0
    }

    pub(crate) fn ldx(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.x = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.x);
        0
    }

    pub(crate) fn ldy(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.y = self.read_operand(bus, operand);
        self.update_zero_and_negative_flags(self.y);
        0
    }

    pub(crate) fn sta(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.write_operand(bus, operand, self.a);
        0
    }

    pub(crate) fn stx(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.write_operand(bus, operand, self.x);
        0
    }

    pub(crate) fn sty(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.write_operand(bus, operand, self.y);
        0
    }
}
