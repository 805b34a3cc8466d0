// Arithmetic instructions: ADC, SBC, INC/DEC and the register increments.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    /// ADC - Add with Carry. Sets C on unsigned overflow, V on signed
    /// overflow (both operands same sign, result differs).
    pub(crate) fn adc(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        let carry_in = self.get_carry() as u16;
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.set_carry(sum > 0xFF);
        self.set_overflow((self.a ^ result) & (value ^ result) & 0x80 != 0);
        self.a = result;
        self.update_zero_and_negative_flags(self.a);
        0
    }

    /// SBC - Subtract with Carry, implemented as ADC of the one's
    /// complement of the operand (the 6502's actual behavior).
    pub(crate) fn sbc(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.adc(bus, Operand::Immediate(!value))
    }

    pub(crate) fn inc(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand).wrapping_add(1);
        self.write_operand(bus, operand, value);
        self.update_zero_and_negative_flags(value);
        0
    }

    pub(crate) fn dec(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand).wrapping_sub(1);
        self.write_operand(bus, operand, value);
        self.update_zero_and_negative_flags(value);
        0
    }

    pub(crate) fn inx(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
        0
    }

    pub(crate) fn dex(&mut self) -> u8 {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
        0
    }

    pub(crate) fn iny(&mut self) -> u8 {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
        0
    }

    pub(crate) fn dey(&mut self) -> u8 {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
        0
    }
}
