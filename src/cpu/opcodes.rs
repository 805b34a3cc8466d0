// Opcode table - a data-driven decode step instead of a 256-entry function
// pointer table. Each opcode maps to an (operation tag, addressing mode,
// base cycle count, page-penalty flag) tuple; `Cpu::step` looks the tuple
// up, resolves the addressing mode, and hands both to a single execute
// dispatch. This keeps the full opcode matrix in one auditable place and
// makes "is every opcode covered" a question `decode` can answer directly,
// rather than something spread across 256 closures.

use crate::cpu::addressing::AddressingMode as Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, Sbc, And, Eor, Ora, Bit,
    Asl, Lsr, Rol, Ror, Inc, Dec, Inx, Dex, Iny, Dey,
    Lda, Ldx, Ldy, Sta, Stx, Sty,
    Tax, Tay, Tsx, Txa, Txs, Tya,
    Pha, Php, Pla, Plp,
    Jmp, Jsr, Rts, Rti, Brk,
    Bcc, Bcs, Beq, Bne, Bpl, Bmi, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Sec, Sed, Sei,
    Cmp, Cpx, Cpy,
    Nop,
    // Unofficial opcodes exercised by common test ROMs.
    Lax, Sax, Dcp, Isb, Slo, Rla, Sre, Rra,
}

#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub op: Op,
    pub mode: Mode,
    pub cycles: u8,
    /// Read-class addressing (AbsoluteX/Y, IndirectIndexed) adds +1 cycle
    /// when the effective address crosses a page. Store and RMW opcodes
    /// leave this false; their `cycles` is already the fixed higher count.
    pub page_penalty: bool,
}

const fn op(o: Op, mode: Mode, cycles: u8, page_penalty: bool) -> OpcodeInfo {
    OpcodeInfo { op: o, mode, cycles, page_penalty }
}

/// Decode one opcode byte. `None` means the byte is not in the supported
/// official+unofficial set (spec §4.1, §7 `InvalidOpcode`).
pub fn decode(opcode: u8) -> Option<OpcodeInfo> {
    use Mode::*;
    use Op::*;
    Some(match opcode {
        // ADC
        0x69 => op(Adc, Immediate, 2, false),
        0x65 => op(Adc, ZeroPage, 3, false),
        0x75 => op(Adc, ZeroPageX, 4, false),
        0x6D => op(Adc, Absolute, 4, false),
        0x7D => op(Adc, AbsoluteX, 4, true),
        0x79 => op(Adc, AbsoluteY, 4, true),
        0x61 => op(Adc, IndexedIndirect, 6, false),
        0x71 => op(Adc, IndirectIndexed, 5, true),

        // SBC (+ unofficial alias 0xEB)
        0xE9 | 0xEB => op(Sbc, Immediate, 2, false),
        0xE5 => op(Sbc, ZeroPage, 3, false),
        0xF5 => op(Sbc, ZeroPageX, 4, false),
        0xED => op(Sbc, Absolute, 4, false),
        0xFD => op(Sbc, AbsoluteX, 4, true),
        0xF9 => op(Sbc, AbsoluteY, 4, true),
        0xE1 => op(Sbc, IndexedIndirect, 6, false),
        0xF1 => op(Sbc, IndirectIndexed, 5, true),

        // AND
        0x29 => op(And, Immediate, 2, false),
        0x25 => op(And, ZeroPage, 3, false),
        0x35 => op(And, ZeroPageX, 4, false),
        0x2D => op(And, Absolute, 4, false),
        0x3D => op(And, AbsoluteX, 4, true),
        0x39 => op(And, AbsoluteY, 4, true),
        0x21 => op(And, IndexedIndirect, 6, false),
        0x31 => op(And, IndirectIndexed, 5, true),

        // EOR
        0x49 => op(Eor, Immediate, 2, false),
        0x45 => op(Eor, ZeroPage, 3, false),
        0x55 => op(Eor, ZeroPageX, 4, false),
        0x4D => op(Eor, Absolute, 4, false),
        0x5D => op(Eor, AbsoluteX, 4, true),
        0x59 => op(Eor, AbsoluteY, 4, true),
        0x41 => op(Eor, IndexedIndirect, 6, false),
        0x51 => op(Eor, IndirectIndexed, 5, true),

        // ORA
        0x09 => op(Ora, Immediate, 2, false),
        0x05 => op(Ora, ZeroPage, 3, false),
        0x15 => op(Ora, ZeroPageX, 4, false),
        0x0D => op(Ora, Absolute, 4, false),
        0x1D => op(Ora, AbsoluteX, 4, true),
        0x19 => op(Ora, AbsoluteY, 4, true),
        0x01 => op(Ora, IndexedIndirect, 6, false),
        0x11 => op(Ora, IndirectIndexed, 5, true),

        // BIT
        0x24 => op(Bit, ZeroPage, 3, false),
        0x2C => op(Bit, Absolute, 4, false),

        // ASL
        0x0A => op(Asl, Accumulator, 2, false),
        0x06 => op(Asl, ZeroPage, 5, false),
        0x16 => op(Asl, ZeroPageX, 6, false),
        0x0E => op(Asl, Absolute, 6, false),
        0x1E => op(Asl, AbsoluteX, 7, false),

        // LSR
        0x4A => op(Lsr, Accumulator, 2, false),
        0x46 => op(Lsr, ZeroPage, 5, false),
        0x56 => op(Lsr, ZeroPageX, 6, false),
        0x4E => op(Lsr, Absolute, 6, false),
        0x5E => op(Lsr, AbsoluteX, 7, false),

        // ROL
        0x2A => op(Rol, Accumulator, 2, false),
        0x26 => op(Rol, ZeroPage, 5, false),
        0x36 => op(Rol, ZeroPageX, 6, false),
        0x2E => op(Rol, Absolute, 6, false),
        0x3E => op(Rol, AbsoluteX, 7, false),

        // ROR
        0x6A => op(Ror, Accumulator, 2, false),
        0x66 => op(Ror, ZeroPage, 5, false),
        0x76 => op(Ror, ZeroPageX, 6, false),
        0x6E => op(Ror, Absolute, 6, false),
        0x7E => op(Ror, AbsoluteX, 7, false),

        // INC / DEC
        0xE6 => op(Inc, ZeroPage, 5, false),
        0xF6 => op(Inc, ZeroPageX, 6, false),
        0xEE => op(Inc, Absolute, 6, false),
        0xFE => op(Inc, AbsoluteX, 7, false),
        0xC6 => op(Dec, ZeroPage, 5, false),
        0xD6 => op(Dec, ZeroPageX, 6, false),
        0xCE => op(Dec, Absolute, 6, false),
        0xDE => op(Dec, AbsoluteX, 7, false),

        0xE8 => op(Inx, Implied, 2, false),
        0xCA => op(Dex, Implied, 2, false),
        0xC8 => op(Iny, Implied, 2, false),
        0x88 => op(Dey, Implied, 2, false),

        // LDA
        0xA9 => op(Lda, Immediate, 2, false),
        0xA5 => op(Lda, ZeroPage, 3, false),
        0xB5 => op(Lda, ZeroPageX, 4, false),
        0xAD => op(Lda, Absolute, 4, false),
        0xBD => op(Lda, AbsoluteX, 4, true),
        0xB9 => op(Lda, AbsoluteY, 4, true),
        0xA1 => op(Lda, IndexedIndirect, 6, false),
        0xB1 => op(Lda, IndirectIndexed, 5, true),

        // LDX
        0xA2 => op(Ldx, Immediate, 2, false),
        0xA6 => op(Ldx, ZeroPage, 3, false),
        0xB6 => op(Ldx, ZeroPageY, 4, false),
        0xAE => op(Ldx, Absolute, 4, false),
        0xBE => op(Ldx, AbsoluteY, 4, true),

        // LDY
        0xA0 => op(Ldy, Immediate, 2, false),
        0xA4 => op(Ldy, ZeroPage, 3, false),
        0xB4 => op(Ldy, ZeroPageX, 4, false),
        0xAC => op(Ldy, Absolute, 4, false),
        0xBC => op(Ldy, AbsoluteX, 4, true),

        // STA
        0x85 => op(Sta, ZeroPage, 3, false),
        0x95 => op(Sta, ZeroPageX, 4, false),
        0x8D => op(Sta, Absolute, 4, false),
        0x9D => op(Sta, AbsoluteX, 5, false),
        0x99 => op(Sta, AbsoluteY, 5, false),
        0x81 => op(Sta, IndexedIndirect, 6, false),
        0x91 => op(Sta, IndirectIndexed, 6, false),

        // STX / STY
        0x86 => op(Stx, ZeroPage, 3, false),
        0x96 => op(Stx, ZeroPageY, 4, false),
        0x8E => op(Stx, Absolute, 4, false),
        0x84 => op(Sty, ZeroPage, 3, false),
        0x94 => op(Sty, ZeroPageX, 4, false),
        0x8C => op(Sty, Absolute, 4, false),

        0xAA => op(Tax, Implied, 2, false),
        0xA8 => op(Tay, Implied, 2, false),
        0xBA => op(Tsx, Implied, 2, false),
        0x8A => op(Txa, Implied, 2, false),
        0x9A => op(Txs, Implied, 2, false),
        0x98 => op(Tya, Implied, 2, false),

        0x48 => op(Pha, Implied, 3, false),
        0x08 => op(Php, Implied, 3, false),
        0x68 => op(Pla, Implied, 4, false),
        0x28 => op(Plp, Implied, 4, false),

        0x4C => op(Jmp, Absolute, 3, false),
        0x6C => op(Jmp, Indirect, 5, false),
        0x20 => op(Jsr, Absolute, 6, false),
        0x60 => op(Rts, Implied, 6, false),
        0x40 => op(Rti, Implied, 6, false),
        0x00 => op(Brk, Implied, 7, false),

        0x90 => op(Bcc, Relative, 2, false),
        0xB0 => op(Bcs, Relative, 2, false),
        0xF0 => op(Beq, Relative, 2, false),
        0xD0 => op(Bne, Relative, 2, false),
        0x10 => op(Bpl, Relative, 2, false),
        0x30 => op(Bmi, Relative, 2, false),
        0x50 => op(Bvc, Relative, 2, false),
        0x70 => op(Bvs, Relative, 2, false),

        0x18 => op(Clc, Implied, 2, false),
        0xD8 => op(Cld, Implied, 2, false),
        0x58 => op(Cli, Implied, 2, false),
        0xB8 => op(Clv, Implied, 2, false),
        0x38 => op(Sec, Implied, 2, false),
        0xF8 => op(Sed, Implied, 2, false),
        0x78 => op(Sei, Implied, 2, false),

        // CMP
        0xC9 => op(Cmp, Immediate, 2, false),
        0xC5 => op(Cmp, ZeroPage, 3, false),
        0xD5 => op(Cmp, ZeroPageX, 4, false),
        0xCD => op(Cmp, Absolute, 4, false),
        0xDD => op(Cmp, AbsoluteX, 4, true),
        0xD9 => op(Cmp, AbsoluteY, 4, true),
        0xC1 => op(Cmp, IndexedIndirect, 6, false),
        0xD1 => op(Cmp, IndirectIndexed, 5, true),

        0xE0 => op(Cpx, Immediate, 2, false),
        0xE4 => op(Cpx, ZeroPage, 3, false),
        0xEC => op(Cpx, Absolute, 4, false),
        0xC0 => op(Cpy, Immediate, 2, false),
        0xC4 => op(Cpy, ZeroPage, 3, false),
        0xCC => op(Cpy, Absolute, 4, false),

        0xEA => op(Nop, Implied, 2, false),
        // Unofficial single-byte NOPs
        0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => op(Nop, Implied, 2, false),
        // Unofficial immediate NOPs (read and discard a byte)
        0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => op(Nop, Immediate, 2, false),
        // Unofficial zero-page NOPs
        0x04 | 0x44 | 0x64 => op(Nop, ZeroPage, 3, false),
        0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => op(Nop, ZeroPageX, 4, false),
        // Unofficial absolute NOPs
        0x0C => op(Nop, Absolute, 4, false),
        0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => op(Nop, AbsoluteX, 4, true),

        // LAX
        0xA7 => op(Lax, ZeroPage, 3, false),
        0xB7 => op(Lax, ZeroPageY, 4, false),
        0xAF => op(Lax, Absolute, 4, false),
        0xBF => op(Lax, AbsoluteY, 4, true),
        0xA3 => op(Lax, IndexedIndirect, 6, false),
        0xB3 => op(Lax, IndirectIndexed, 5, true),

        // SAX
        0x87 => op(Sax, ZeroPage, 3, false),
        0x97 => op(Sax, ZeroPageY, 4, false),
        0x8F => op(Sax, Absolute, 4, false),
        0x83 => op(Sax, IndexedIndirect, 6, false),

        // DCP
        0xC7 => op(Dcp, ZeroPage, 5, false),
        0xD7 => op(Dcp, ZeroPageX, 6, false),
        0xCF => op(Dcp, Absolute, 6, false),
        0xDF => op(Dcp, AbsoluteX, 7, false),
        0xDB => op(Dcp, AbsoluteY, 7, false),
        0xC3 => op(Dcp, IndexedIndirect, 8, false),
        0xD3 => op(Dcp, IndirectIndexed, 8, false),

        // ISB/ISC
        0xE7 => op(Isb, ZeroPage, 5, false),
        0xF7 => op(Isb, ZeroPageX, 6, false),
        0xEF => op(Isb, Absolute, 6, false),
        0xFF => op(Isb, AbsoluteX, 7, false),
        0xFB => op(Isb, AbsoluteY, 7, false),
        0xE3 => op(Isb, IndexedIndirect, 8, false),
        0xF3 => op(Isb, IndirectIndexed, 8, false),

        // SLO
        0x07 => op(Slo, ZeroPage, 5, false),
        0x17 => op(Slo, ZeroPageX, 6, false),
        0x0F => op(Slo, Absolute, 6, false),
        0x1F => op(Slo, AbsoluteX, 7, false),
        0x1B => op(Slo, AbsoluteY, 7, false),
        0x03 => op(Slo, IndexedIndirect, 8, false),
        0x13 => op(Slo, IndirectIndexed, 8, false),

        // RLA
        0x27 => op(Rla, ZeroPage, 5, false),
        0x37 => op(Rla, ZeroPageX, 6, false),
        0x2F => op(Rla, Absolute, 6, false),
        0x3F => op(Rla, AbsoluteX, 7, false),
        0x3B => op(Rla, AbsoluteY, 7, false),
        0x23 => op(Rla, IndexedIndirect, 8, false),
        0x33 => op(Rla, IndirectIndexed, 8, false),

        // SRE
        0x47 => op(Sre, ZeroPage, 5, false),
        0x57 => op(Sre, ZeroPageX, 6, false),
        0x4F => op(Sre, Absolute, 6, false),
        0x5F => op(Sre, AbsoluteX, 7, false),
        0x5B => op(Sre, AbsoluteY, 7, false),
        0x43 => op(Sre, IndexedIndirect, 8, false),
        0x53 => op(Sre, IndirectIndexed, 8, false),

        // RRA
        0x67 => op(Rra, ZeroPage, 5, false),
        0x77 => op(Rra, ZeroPageX, 6, false),
        0x6F => op(Rra, Absolute, 6, false),
        0x7F => op(Rra, AbsoluteX, 7, false),
        0x7B => op(Rra, AbsoluteY, 7, false),
        0x63 => op(Rra, IndexedIndirect, 8, false),
        0x73 => op(Rra, IndirectIndexed, 8, false),

        _ => return None,
    })
}
