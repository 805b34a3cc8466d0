// Unofficial opcodes exercised by common test ROMs: LAX, SAX, DCP, ISB,
// and the four shift/rotate-plus-logic combos (SLO, RLA, SRE, RRA). The
// combos are implemented by calling the official read-modify-write step
// and then the official logic step in sequence - hardware actually does
// both in one pass, but the end state (memory, A, flags) is identical
// either way since each step's carry/Z/N side effects only depend on its
// own inputs.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn lax(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand);
        self.a = value;
        self.x = value;
        self.update_zero_and_negative_flags(value);
        0
    }

    /// SAX stores A & X with no flag updates.
    pub(crate) fn sax(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.write_operand(bus, operand, self.a & self.x);
        0
    }

    /// DCP - DEC then CMP, used as a single-cycle-accurate compare-and-
    /// decrement by test ROMs.
    pub(crate) fn dcp(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        let value = self.read_operand(bus, operand).wrapping_sub(1);
        self.write_operand(bus, operand, value);
        self.cmp(bus, Operand::Immediate(value))
    }

    /// ISB/ISC - INC then SBC.
    pub(crate) fn isb(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.inc(bus, operand);
        self.sbc(bus, operand)
    }

    pub(crate) fn slo(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.asl(bus, operand);
        self.ora(bus, operand)
    }

    pub(crate) fn rla(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.rol(bus, operand);
        self.and(bus, operand)
    }

    pub(crate) fn sre(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.lsr(bus, operand);
        self.eor(bus, operand)
    }

    pub(crate) fn rra(&mut self, bus: &mut CpuBus, operand: Operand) -> u8 {
        self.ror(bus, operand);
        self.adc(bus, operand)
    }
}
