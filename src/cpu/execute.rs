// Instruction fetch/decode/execute and interrupt dispatch.

use crate::bus::CpuBus;
use crate::cpu::addressing::{AddressingMode, Resolved};
use crate::cpu::opcodes::{self, Op};
use crate::cpu::{flags, vectors, Cpu, CpuError};
use crate::interrupt::{InterruptKind, InterruptLatch};

impl Cpu {
    /// Run one instruction, one DMA micro-step, or one interrupt service
    /// sequence, whichever the current state calls for. Returns the
    /// number of cycles consumed.
    pub fn step(&mut self, bus: &mut CpuBus, interrupts: &InterruptLatch) -> Result<u8, CpuError> {
        if bus.dma_active() {
            bus.tick_dma();
            self.cycles = self.cycles.wrapping_add(1);
            return Ok(1);
        }

        if let Some(kind) = interrupts.peek() {
            let masked = kind == InterruptKind::Irq && self.get_interrupt_disable();
            if !masked {
                interrupts.read();
                let cycles = self.service_interrupt(bus, kind);
                self.cycles = self.cycles.wrapping_add(cycles as u64);
                return Ok(cycles);
            }
        }

        let fetch_pc = self.pc;
        let opcode = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let info = opcodes::decode(opcode).ok_or(CpuError::InvalidOpcode {
            opcode,
            pc: fetch_pc,
        })?;

        let resolved = self.resolve_operand(bus, info.mode);
        let extra = self.dispatch(info.op, bus, &resolved);

        let mut cycles = info.cycles;
        if info.page_penalty && resolved.page_crossed && info.mode != AddressingMode::Relative {
            cycles += 1;
        }
        cycles += extra;
        self.cycles = self.cycles.wrapping_add(cycles as u64);

        if bus.take_dma_trigger() {
            let total_after = self.cycles;
            if total_after % 2 == 1 {
                bus.add_dma_stall_cycle();
            }
        }

        Ok(cycles)
    }

    fn service_interrupt(&mut self, bus: &mut CpuBus, kind: InterruptKind) -> u8 {
        match kind {
            InterruptKind::Reset => {
                self.reset(bus);
                7
            }
            InterruptKind::Nmi => {
                self.push_interrupt_frame(bus);
                self.pc = bus.read_u16(vectors::NMI);
                7
            }
            InterruptKind::Irq => {
                self.push_interrupt_frame(bus);
                self.pc = bus.read_u16(vectors::IRQ);
                7
            }
        }
    }

    /// NMI and IRQ both push PC then status with B clear, UNUSED set, and
    /// set the I flag - only their vector differs.
    fn push_interrupt_frame(&mut self, bus: &mut CpuBus) {
        self.stack_push_u16(bus, self.pc);
        let status = (self.status & !flags::BREAK) | flags::UNUSED;
        self.stack_push(bus, status);
        self.set_interrupt_disable(true);
    }

    #[allow(clippy::too_many_lines)]
    fn dispatch(&mut self, op: Op, bus: &mut CpuBus, resolved: &Resolved) -> u8 {
        let operand = resolved.operand;
        match op {
            Op::Adc => self.adc(bus, operand),
            Op::Sbc => self.sbc(bus, operand),
            Op::And => self.and(bus, operand),
            Op::Eor => self.eor(bus, operand),
            Op::Ora => self.ora(bus, operand),
            Op::Bit => self.bit(bus, operand),
            Op::Asl => self.asl(bus, operand),
            Op::Lsr => self.lsr(bus, operand),
            Op::Rol => self.rol(bus, operand),
            Op::Ror => self.ror(bus, operand),
            Op::Inc => self.inc(bus, operand),
            Op::Dec => self.dec(bus, operand),
            Op::Inx => self.inx(),
            Op::Dex => self.dex(),
            Op::Iny => self.iny(),
            Op::Dey => self.dey(),
            Op::Lda => self.lda(bus, operand),
            Op::Ldx => self.ldx(bus, operand),
            Op::Ldy => self.ldy(bus, operand),
            Op::Sta => self.sta(bus, operand),
            Op::Stx => self.stx(bus, operand),
            Op::Sty => self.sty(bus, operand),
            Op::Tax => self.tax(),
            Op::Tay => self.tay(),
            Op::Tsx => self.tsx(),
            Op::Txa => self.txa(),
            Op::Txs => self.txs(),
            Op::Tya => self.tya(),
            Op::Pha => self.pha(bus),
            Op::Php => self.php(bus),
            Op::Pla => self.pla(bus),
            Op::Plp => self.plp(bus),
            Op::Jmp => self.jmp(operand),
            Op::Jsr => self.jsr(bus, operand),
            Op::Rts => self.rts(bus),
            Op::Rti => self.rti(bus),
            Op::Brk => self.brk(bus),
            Op::Bcc => self.bcc(resolved),
            Op::Bcs => self.bcs(resolved),
            Op::Beq => self.beq(resolved),
            Op::Bne => self.bne(resolved),
            Op::Bpl => self.bpl(resolved),
            Op::Bmi => self.bmi(resolved),
            Op::Bvc => self.bvc(resolved),
            Op::Bvs => self.bvs(resolved),
            Op::Clc => self.clc(),
            Op::Cld => self.cld(),
            Op::Cli => self.cli(),
            Op::Clv => self.clv(),
            Op::Sec => self.sec(),
            Op::Sed => self.sed(),
            Op::Sei => self.sei(),
            Op::Cmp => self.cmp(bus, operand),
            Op::Cpx => self.cpx(bus, operand),
            Op::Cpy => self.cpy(bus, operand),
            Op::Nop => self.nop(bus, operand),
            Op::Lax => self.lax(bus, operand),
            Op::Sax => self.sax(bus, operand),
            Op::Dcp => self.dcp(bus, operand),
            Op::Isb => self.isb(bus, operand),
            Op::Slo => self.slo(bus, operand),
            Op::Rla => self.rla(bus, operand),
            Op::Sre => self.sre(bus, operand),
            Op::Rra => self.rra(bus, operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::CpuBus;

    fn bus_with_program(bytes: &[u8]) -> CpuBus {
        let mut bus = CpuBus::new_headless();
        for (i, &b) in bytes.iter().enumerate() {
            bus.write(0x8000 + i as u16, b);
        }
        bus
    }

    #[test]
    fn lda_immediate_then_sta_absolute() {
        let mut bus = bus_with_program(&[0xA9, 0x42, 0x8D, 0x00, 0x03]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let latch = InterruptLatch::new();
        cpu.step(&mut bus, &latch).unwrap();
        assert_eq!(cpu.a, 0x42);
        cpu.step(&mut bus, &latch).unwrap();
        assert_eq!(bus.read(0x0300), 0x42);
    }

    #[test]
    fn invalid_opcode_returns_error_without_advancing_pc_twice() {
        let mut bus = bus_with_program(&[0x02]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let latch = InterruptLatch::new();
        let err = cpu.step(&mut bus, &latch).unwrap_err();
        assert_eq!(err, CpuError::InvalidOpcode { opcode: 0x02, pc: 0x8000 });
    }

    #[test]
    fn pending_nmi_is_serviced_instead_of_the_next_instruction() {
        let mut bus = bus_with_program(&[0xEA]);
        bus.write(0xFFFA, 0x00);
        bus.write(0xFFFB, 0x90);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let latch = InterruptLatch::new();
        latch.send(InterruptKind::Nmi);
        let cycles = cpu.step(&mut bus, &latch).unwrap();
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc, 0x9000);
    }

    #[test]
    fn masked_irq_stays_pending_until_i_flag_clears() {
        let mut bus = bus_with_program(&[0xEA, 0xEA]);
        bus.write(0xFFFE, 0x00);
        bus.write(0xFFFF, 0xA0);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.set_interrupt_disable(true);
        let latch = InterruptLatch::new();
        latch.send(InterruptKind::Irq);
        cpu.step(&mut bus, &latch).unwrap();
        assert_eq!(cpu.pc, 0x8001, "IRQ masked, NOP should have executed");
        cpu.set_interrupt_disable(false);
        let cycles = cpu.step(&mut bus, &latch).unwrap();
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc, 0xA000);
    }

    #[test]
    fn dma_trigger_adds_stall_cycle_on_odd_total_cycle_count() {
        let mut bus = bus_with_program(&[0xA9, 0x02, 0x8D, 0x14, 0x40]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.cycles = 0;
        let latch = InterruptLatch::new();
        cpu.step(&mut bus, &latch).unwrap();
        cpu.step(&mut bus, &latch).unwrap();
        assert!(bus.dma_active());
    }
}
