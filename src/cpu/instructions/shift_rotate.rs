// Shift and rotate instructions: ASL, LSR, ROL, ROR.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn asl(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.set_carry(value & 0x80 != 0);
        let result = value << 1;
        self.write_operand(bus, operand, result);
        self.update_zero_and_negative_flags(result);
        0
    }

    pub(crate) fn lsr(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;
        self.write_operand(bus, operand, result);
        self.update_zero_and_negative_flags(result);
        0
    }

    pub(crate) fn rol(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        let carry_in = self.get_carry() as u8;
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.write_operand(bus, operand, result);
        self.update_zero_and_negative_flags(result);
        0
    }

    pub(crate) fn ror(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        let carry_in = self.get_carry() as u8;
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        self.write_operand(bus, operand, result);
        self.update_zero_and_negative_flags(result);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::CpuBus;

    #[test]
    fn rol_brings_carry_in_at_bit_zero() {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        cpu.set_carry(true);
        cpu.a = 0x01;
        cpu.rol(&mut bus, Operand::Accumulator);
        assert_eq!(cpu.a, 0x03);
        assert!(!cpu.get_carry());
    }

    #[test]
    fn ror_brings_carry_in_at_bit_seven() {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        cpu.set_carry(true);
        cpu.a = 0x00;
        cpu.ror(&mut bus, Operand::Accumulator);
        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.get_carry());
    }

    #[test]
    fn asl_sets_carry_from_bit_seven() {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        cpu.a = 0x80;
        cpu.asl(&mut bus, Operand::Accumulator);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_carry());
        assert!(cpu.get_zero());
    }
}
