// Memory-layout and NTSC timing constants shared across the PPU submodules.

/// PPU registers occupy $2000-$2007 and mirror every 8 bytes through $3FFF.
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

pub(super) const NAMETABLE_SIZE: usize = 1024;
pub(super) const PALETTE_SIZE: usize = 32;

pub(super) const SCREEN_WIDTH: usize = 256;
pub(super) const SCREEN_HEIGHT: usize = 240;

/// Dots per scanline, scanlines per frame, and the scanline numbers that
/// delimit visible rendering, post-render idle, VBlank, and pre-render.
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;
pub(super) const SCANLINES_PER_FRAME: u16 = 262;
#[allow(dead_code)]
pub(super) const CYCLES_PER_FRAME: u32 =
    (CYCLES_PER_SCANLINE as u32) * (SCANLINES_PER_FRAME as u32);

pub(super) const FIRST_VISIBLE_SCANLINE: u16 = 0;
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;
pub(super) const POSTRENDER_SCANLINE: u16 = 240;
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;
pub(super) const LAST_VBLANK_SCANLINE: u16 = 260;
pub(super) const PRERENDER_SCANLINE: u16 = 261;
