// Flag instructions: CLC, CLD, CLI, CLV, SEC, SED, SEI.

use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn clc(&mut self) -> u8 {
        self.clear_flag(flags::CARRY);
        0
    }

    pub(crate) fn cld(&mut self) -> u8 {
        self.clear_flag(flags::DECIMAL);
        0
    }

    pub(crate) fn cli(&mut self) -> u8 {
        self.clear_flag(flags::INTERRUPT_DISABLE);
        0
    }

    pub(crate) fn clv(&mut self) -> u8 {
        self.clear_flag(flags::OVERFLOW);
        0
    }

    pub(crate) fn sec(&mut self) -> u8 {
        self.set_flag(flags::CARRY);
        0
    }

    pub(crate) fn sed(&mut self) -> u8 {
        self.set_flag(flags::DECIMAL);
        0
    }

    pub(crate) fn sei(&mut self) -> u8 {
        self.set_flag(flags::INTERRUPT_DISABLE);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sec_then_clc_round_trips_carry() {
        let mut cpu = Cpu::new();
        cpu.sec();
        assert!(cpu.get_carry());
        cpu.clc();
        assert!(!cpu.get_carry());
    }
}
