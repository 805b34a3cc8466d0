//! PPU unit tests, organized by what they exercise: register protocol,
//! VRAM/palette mirroring, and the dot-accurate pixel pipeline.

use super::*;
use crate::cartridge::{make_mapper, Cartridge};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) const PPUCTRL: u16 = 0x2000;
pub(crate) const PPUMASK: u16 = 0x2001;
pub(crate) const PPUSTATUS: u16 = 0x2002;
pub(crate) const OAMADDR: u16 = 0x2003;
pub(crate) const OAMDATA: u16 = 0x2004;
pub(crate) const PPUSCROLL: u16 = 0x2005;
pub(crate) const PPUADDR: u16 = 0x2006;
pub(crate) const PPUDATA: u16 = 0x2007;

/// A blank NROM cartridge with CHR-RAM, useful whenever a test needs a
/// mapper attached but doesn't care about tile contents.
pub(crate) fn blank_cartridge(mirroring: Mirroring) -> Cartridge {
    Cartridge {
        prg_rom: vec![0; 16 * 1024],
        chr_rom: vec![0; 8 * 1024],
        trainer: None,
        mapper_id: 0,
        mirroring,
        has_battery: false,
        chr_is_ram: true,
    }
}

pub(crate) fn ppu_with_mapper(cartridge: Cartridge) -> Ppu {
    let mirroring = cartridge.mirroring;
    let mut ppu = Ppu::new();
    ppu.set_mapper(Rc::new(RefCell::new(make_mapper(cartridge))));
    ppu.set_mirroring(mirroring);
    ppu
}

/// Drive the PPU through exactly one full frame (all 341*262 dots, minus
/// the odd-frame skip if it lands).
pub(crate) fn run_one_frame(ppu: &mut Ppu) {
    while !ppu.step() {}
}
