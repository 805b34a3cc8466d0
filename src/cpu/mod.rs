// CPU module - 6502 processor implementation

pub mod addressing;
pub mod execute;
pub mod instructions;
pub mod opcodes;
pub mod trace;

use std::fmt;

/// Processor Status Flags (P register)
///
/// ```text
/// 7  6  5  4  3  2  1  0
/// N  V  -  B  D  I  Z  C
/// ```
pub mod flags {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000; // unused on the NES's 6502 derivative
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000; // always 1
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// Fixed interrupt vector addresses at the top of the address space.
pub mod vectors {
    pub const NMI: u16 = 0xFFFA;
    pub const RESET: u16 = 0xFFFC;
    pub const IRQ: u16 = 0xFFFE;
}

/// Errors `Cpu::step` can report. The only one that actually occurs today
/// is an opcode byte outside the supported official+unofficial set - the
/// decode table covers every byte a real test ROM is expected to execute,
/// so hitting this means either a corrupt program counter or a ROM this
/// core was never meant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    InvalidOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::InvalidOpcode { opcode, pc } => {
                write!(f, "invalid opcode ${:02X} at ${:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for CpuError {}

/// The 6502-derivative processor's register state.
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
}

impl Cpu {
    /// Power-on state: A/X/Y are undefined on real hardware but zeroed
    /// here for determinism; SP starts at $FD, matching the three
    /// phantom stack-pointer decrements the real RESET sequence performs.
    pub fn new() -> Self {
        let mut cpu = Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: 0,
            cycles: 0,
        };
        cpu.set_flag(flags::UNUSED);
        cpu.set_flag(flags::INTERRUPT_DISABLE);
        cpu
    }

    /// RESET does not push to the stack; it just reloads PC from the
    /// reset vector and re-establishes the power-on flag state.
    pub fn reset(&mut self, bus: &mut crate::bus::CpuBus) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = 0;
        self.set_flag(flags::UNUSED);
        self.set_flag(flags::INTERRUPT_DISABLE);
        self.pc = bus.read_u16(vectors::RESET);
        self.cycles = 7;
    }

    #[inline]
    pub fn get_flag(&self, flag: u8) -> bool {
        (self.status & flag) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: u8) {
        self.status |= flag;
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: u8) {
        self.status &= !flag;
    }

    #[inline]
    pub fn update_flag(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set_flag(flag);
        } else {
            self.clear_flag(flag);
        }
    }

    #[inline]
    pub fn get_carry(&self) -> bool {
        self.get_flag(flags::CARRY)
    }
    #[inline]
    pub fn get_zero(&self) -> bool {
        self.get_flag(flags::ZERO)
    }
    #[inline]
    pub fn get_interrupt_disable(&self) -> bool {
        self.get_flag(flags::INTERRUPT_DISABLE)
    }
    #[inline]
    pub fn get_decimal(&self) -> bool {
        self.get_flag(flags::DECIMAL)
    }
    #[inline]
    pub fn get_break(&self) -> bool {
        self.get_flag(flags::BREAK)
    }
    #[inline]
    pub fn get_overflow(&self) -> bool {
        self.get_flag(flags::OVERFLOW)
    }
    #[inline]
    pub fn get_negative(&self) -> bool {
        self.get_flag(flags::NEGATIVE)
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.update_flag(flags::CARRY, value);
    }
    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.update_flag(flags::ZERO, value);
    }
    #[inline]
    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.update_flag(flags::INTERRUPT_DISABLE, value);
    }
    #[inline]
    pub fn set_decimal(&mut self, value: bool) {
        self.update_flag(flags::DECIMAL, value);
    }
    #[inline]
    pub fn set_break(&mut self, value: bool) {
        self.update_flag(flags::BREAK, value);
    }
    #[inline]
    pub fn set_overflow(&mut self, value: bool) {
        self.update_flag(flags::OVERFLOW, value);
    }
    #[inline]
    pub fn set_negative(&mut self, value: bool) {
        self.update_flag(flags::NEGATIVE, value);
    }

    /// Update Z and N from a value - the common post-load/post-arithmetic
    /// pattern almost every instruction ends with.
    #[inline]
    pub fn update_zero_and_negative_flags(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
