// Coordinator - wires Cartridge/Mapper/PPU/CPU-bus/CPU into a runnable
// emulation session and drives the CPU-PPU fetch/execute/render loop.
//
// Single-threaded core loop only: no save states, no screenshots, no
// recent-ROM list, no host window. Frames leave through a bounded channel
// and button state arrives through a pair of atomics, matching the
// host-facing boundary a windowing layer would sit behind.

use std::fs;
use std::io;
use std::rc::Rc;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::SyncSender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::bus::CpuBus;
use crate::cartridge::{make_mapper, Cartridge, Mapper, RomError};
use crate::cpu::{Cpu, CpuError};
use crate::input::Controller;
use crate::interrupt::{InterruptKind, InterruptLatch};
use crate::ppu::Ppu;
pub use crate::ppu::FrameBuffer;

const CONFIG_FILE: &str = "nes_core_config.toml";

/// PPU cycles run per CPU cycle - the NES dot clock is 3x the CPU clock.
const PPU_CYCLES_PER_CPU_CYCLE: u8 = 3;

/// Runtime-tunable knobs for the coordinator loop. This core owns no
/// video/audio/hotkey/screenshot settings - those are host concerns -
/// only the throttle and the frame channel's backpressure behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Pace `Core::run` to roughly NTSC speed (60.0988 Hz) instead of
    /// running as fast as the host CPU allows.
    pub throttle_enabled: bool,

    /// Target microseconds per frame. Defaults to the NTSC frame period,
    /// ~16639us.
    pub frame_period_micros: u64,

    /// Capacity of the `frame_tx`/`frame_rx` channel a caller builds before
    /// constructing `Core`. Stored here so it travels with the rest of the
    /// session's tuning rather than being a bare literal at call sites.
    pub frame_channel_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        CoordinatorConfig {
            throttle_enabled: true,
            frame_period_micros: 16_639,
            frame_channel_capacity: 2,
        }
    }
}

impl CoordinatorConfig {
    pub fn frame_period(&self) -> Duration {
        Duration::from_micros(self.frame_period_micros)
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

/// Why `Core::run` returned.
#[derive(Debug)]
pub enum RunOutcome {
    /// The host dropped the frame receiver; nothing left to render to.
    Closed,
    /// The CPU hit a byte outside the supported opcode set.
    Fatal(CpuError),
}

/// A running emulation session: one cartridge, one CPU, one PPU, one bus.
/// `Coordinator` is the public name for what `Core` implements; both names
/// are kept because callers reasonably look for either.
pub struct Core {
    cpu: Cpu,
    bus: CpuBus,
    ppu: Rc<RefCell<Ppu>>,
    interrupts: InterruptLatch,
    frame_tx: SyncSender<FrameBuffer>,
    joypad1: Arc<AtomicU8>,
    joypad2: Arc<AtomicU8>,
    config: CoordinatorConfig,
}

pub type Coordinator = Core;

impl Core {
    /// Parse `rom_bytes` as an iNES image, wire up its mapper, and return a
    /// session ready for `run`. The CPU is reset (loads PC from the reset
    /// vector) before this returns, matching real power-on.
    pub fn new(
        rom_bytes: &[u8],
        frame_tx: SyncSender<FrameBuffer>,
        joypad1: Arc<AtomicU8>,
        joypad2: Arc<AtomicU8>,
    ) -> Result<Self, RomError> {
        let cartridge = Cartridge::from_bytes(rom_bytes)?;
        let mapper: Rc<RefCell<Box<dyn Mapper>>> = Rc::new(RefCell::new(make_mapper(cartridge)));

        let mut ppu = Ppu::new();
        ppu.set_mirroring(mapper.borrow().mirroring());
        ppu.set_mapper(mapper.clone());
        let ppu = Rc::new(RefCell::new(ppu));

        let mut bus = CpuBus::new(ppu.clone(), mapper);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        Ok(Core {
            cpu,
            bus,
            ppu,
            interrupts: InterruptLatch::new(),
            frame_tx,
            joypad1,
            joypad2,
            config: CoordinatorConfig::load_or_default(),
        })
    }

    /// Run until the frame channel closes or the CPU faults. Each
    /// iteration: one CPU instruction (or DMA micro-step, or interrupt
    /// service), three PPU dots per CPU cycle consumed, NMI relayed from
    /// PPU to CPU, a completed frame pushed out, joypad state pulled in,
    /// and - if enabled - a sleep to hold roughly NTSC pace.
    pub fn run(&mut self) -> RunOutcome {
        let mut last_frame_at = Instant::now();

        loop {
            let cycles = match self.cpu.step(&mut self.bus, &self.interrupts) {
                Ok(cycles) => cycles,
                Err(e) => return RunOutcome::Fatal(e),
            };

            for _ in 0..(cycles as u16 * PPU_CYCLES_PER_CPU_CYCLE as u16) {
                self.ppu.borrow_mut().step();
            }

            if self.ppu.borrow().nmi_pending() {
                self.interrupts.send(InterruptKind::Nmi);
                self.ppu.borrow_mut().clear_nmi();
            }

            if let Some(frame) = self.ppu.borrow_mut().frame_ready() {
                if self.frame_tx.send(frame).is_err() {
                    return RunOutcome::Closed;
                }
                if self.config.throttle_enabled {
                    let target = self.config.frame_period();
                    let elapsed = last_frame_at.elapsed();
                    if elapsed < target {
                        std::thread::sleep(target - elapsed);
                    }
                    last_frame_at = Instant::now();
                }
            }

            self.poll_joypads();
        }
    }

    fn poll_joypads(&mut self) {
        let controllers = self.bus.controllers_mut();
        controllers.set_controller1(Controller::from_bits(self.joypad1.load(Ordering::Relaxed)));
        controllers.set_controller2(Controller::from_bits(self.joypad2.load(Ordering::Relaxed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::sync_channel;

    fn test_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 16 + 16384 + 8192];
        rom[0..4].copy_from_slice(b"NES\x1A");
        rom[4] = 1; // 1 PRG bank
        rom[5] = 1; // 1 CHR bank
        let reset_vector = 16; // offset of PRG bank 0 within the file
        rom[reset_vector] = 0xEA; // NOP at $8000
        let prg_end = 16 + 16384;
        rom[prg_end - 4] = 0x00; // NMI vector low
        rom[prg_end - 3] = 0x80;
        rom[prg_end - 2] = 0x00; // reset vector low -> $8000
        rom[prg_end - 1] = 0x80;
        rom
    }

    #[test]
    fn new_rejects_truncated_rom() {
        let (tx, _rx) = sync_channel(1);
        let err = Core::new(&[0u8; 4], tx, Arc::new(AtomicU8::new(0)), Arc::new(AtomicU8::new(0)))
            .unwrap_err();
        assert_eq!(err, RomError::TooShort);
    }

    #[test]
    fn new_resets_cpu_to_the_roms_reset_vector() {
        let (tx, _rx) = sync_channel(2);
        let core = Core::new(&test_rom(), tx, Arc::new(AtomicU8::new(0)), Arc::new(AtomicU8::new(0)))
            .unwrap();
        assert_eq!(core.cpu.pc, 0x8000);
    }

    #[test]
    fn run_stops_cleanly_when_frame_receiver_drops() {
        let (tx, rx) = sync_channel(1);
        let mut core = Core::new(&test_rom(), tx, Arc::new(AtomicU8::new(0)), Arc::new(AtomicU8::new(0)))
            .unwrap();
        core.config.throttle_enabled = false;
        drop(rx);
        match core.run() {
            RunOutcome::Closed => {}
            RunOutcome::Fatal(e) => panic!("expected a clean close, got {e}"),
        }
    }
}
