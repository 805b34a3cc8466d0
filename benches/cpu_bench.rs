// CPU Benchmarks
// Performance benchmarks for CPU instruction execution

use criterion::{criterion_group, criterion_main, Criterion};
use nes_core::{Cpu, CpuBus, InterruptLatch};
use std::hint::black_box;

fn bus_filled_with(byte: u8) -> CpuBus {
    let mut bus = CpuBus::new_headless();
    for addr in 0x8000..=0xFFFFu32 {
        bus.write(addr as u16, byte);
    }
    bus
}

/// Benchmark CPU instruction execution
/// Tests various common instruction patterns to measure dispatch and execution performance
fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bus_filled_with(0xEA); // NOP
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            cpu.step(black_box(&mut bus), &latch).unwrap();
        });
    });

    group.bench_function("lda_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        for addr in (0x8000..0xFFFF).step_by(2) {
            bus.write(addr, 0xA9); // LDA immediate
            bus.write(addr + 1, 0x42);
        }
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            cpu.step(black_box(&mut bus), &latch).unwrap();
        });
    });

    group.bench_function("adc_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        for addr in (0x8000..0xFFFF).step_by(2) {
            bus.write(addr, 0x69); // ADC immediate
            bus.write(addr + 1, 0x01);
        }
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            cpu.step(black_box(&mut bus), &latch).unwrap();
        });
    });

    group.bench_function("sta_absolute", |b| {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        for addr in (0x8000..0xFFFD).step_by(3) {
            bus.write(addr, 0x8D); // STA absolute
            bus.write(addr + 1, 0x00);
            bus.write(addr + 2, 0x02);
        }
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            cpu.step(black_box(&mut bus), &latch).unwrap();
        });
    });

    group.bench_function("jmp_absolute", |b| {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        bus.write(0xC000, 0x4C); // JMP absolute, loops to itself
        bus.write(0xC001, 0x00);
        bus.write(0xC002, 0xC0);
        let latch = InterruptLatch::new();
        cpu.pc = 0xC000;

        b.iter(|| {
            cpu.step(black_box(&mut bus), &latch).unwrap();
        });
    });

    group.finish();
}

/// Benchmark a sequence of mixed instructions (realistic workload)
fn bench_instruction_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("instruction_sequences");

    group.bench_function("typical_sequence", |b| {
        let mut cpu = Cpu::new();
        let mut bus = CpuBus::new_headless();
        let latch = InterruptLatch::new();

        let program: [u8; 10] = [
            0xA9, 0x00, // LDA #$00
            0x8D, 0x00, 0x02, // STA $0200
            0xA2, 0x05, // LDX #$05
            0xE8, // INX
            0xCA, // DEX
        ];
        for (i, &byte) in program.iter().enumerate() {
            bus.write(0xC000 + i as u16, byte);
        }
        bus.write(0xC00A, 0xD0); // BNE back to LDA
        bus.write(0xC00B, 0xF4); // -12 bytes
        cpu.pc = 0xC000;

        b.iter(|| {
            for _ in 0..7 {
                cpu.step(black_box(&mut bus), &latch).unwrap();
            }
        });
    });

    group.finish();
}

/// Benchmark CPU execution over multiple frames - the sustained steady-state
/// workload the coordinator loop actually runs.
fn bench_frame_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_execution");
    group.sample_size(20);

    group.bench_function("1000_cycles", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bus_filled_with(0xEA);
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            let start_cycles = cpu.cycles;
            while cpu.cycles - start_cycles < 1000 {
                cpu.step(black_box(&mut bus), &latch).unwrap();
            }
        });
    });

    group.bench_function("29780_cycles_one_frame", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bus_filled_with(0xEA);
        let latch = InterruptLatch::new();
        cpu.pc = 0x8000;

        b.iter(|| {
            // NES CPU runs at ~1.789773 MHz; at 60 FPS that's ~29,780
            // cycles per frame.
            let start_cycles = cpu.cycles;
            while cpu.cycles - start_cycles < 29780 {
                cpu.step(black_box(&mut bus), &latch).unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cpu_instructions,
    bench_instruction_sequence,
    bench_frame_execution
);
criterion_main!(benches);
