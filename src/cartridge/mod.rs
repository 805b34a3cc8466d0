// Cartridge module - iNES ROM parsing and the mapper abstraction
//
// A `Cartridge` owns the raw PRG/CHR banks and header flags parsed out of an
// iNES image; a `Mapper` (see `mappers`) wraps a `Cartridge` and answers the
// CPU/PPU address-space questions the rest of the system asks of it. This
// core implements exactly one mapper (NROM, id 0) per spec; anything else
// is a hard error at load time rather than a silent fallback.

pub mod mappers;

use std::fmt;

pub use mappers::{make_mapper, Mapper};

const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;

/// Nametable mirroring mode, selected by the cartridge header and consumed
/// by the PPU memory bus when it decodes the four logical nametables down
/// to the two physical 1 KiB banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Errors that can occur while parsing an iNES image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomError {
    /// Fewer than 16 bytes - not even a header fits.
    TooShort,
    /// PRG-ROM region runs past the end of the buffer.
    TruncatedPrg,
    /// CHR-ROM region runs past the end of the buffer.
    TruncatedChr,
    /// Bytes remain after PRG+CHR; a well-formed iNES file ends exactly there.
    TrailingBytes,
    /// Mapper id outside the set this core implements (just {0}).
    UnimplementedMapper(u8),
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::TooShort => write!(f, "ROM buffer is shorter than the 16-byte iNES header"),
            RomError::TruncatedPrg => write!(f, "PRG-ROM region is truncated"),
            RomError::TruncatedChr => write!(f, "CHR-ROM region is truncated"),
            RomError::TrailingBytes => write!(f, "unexpected bytes after PRG+CHR data"),
            RomError::UnimplementedMapper(id) => write!(f, "mapper {id} is not implemented"),
        }
    }
}

impl std::error::Error for RomError {}

/// A parsed iNES image: header-derived flags plus owned PRG/CHR banks.
#[derive(Debug, Clone)]
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub trainer: Option<[u8; TRAINER_SIZE]>,
    pub mapper_id: u8,
    pub mirroring: Mirroring,
    pub has_battery: bool,
    /// True when the header declared zero CHR banks, i.e. the cartridge
    /// supplies writable CHR-RAM rather than fixed CHR-ROM.
    pub chr_is_ram: bool,
}

impl Cartridge {
    /// Parse an already-loaded iNES buffer. File I/O is a host concern; this
    /// core only ever sees bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RomError> {
        if data.len() < HEADER_SIZE {
            return Err(RomError::TooShort);
        }

        let header = &data[..HEADER_SIZE];
        let prg_banks = header[4] as usize;
        let chr_banks = header[5] as usize;
        let flags6 = header[6];
        let flags7 = header[7];

        let vertical = flags6 & 0x01 != 0;
        let has_battery = flags6 & 0x02 != 0;
        let has_trainer = flags6 & 0x04 != 0;
        let four_screen = flags6 & 0x08 != 0;
        let mapper_id = (flags7 & 0xF0) | (flags6 >> 4);

        let mut offset = HEADER_SIZE;

        let trainer = if has_trainer {
            if data.len() < offset + TRAINER_SIZE {
                return Err(RomError::TruncatedPrg);
            }
            let mut buf = [0u8; TRAINER_SIZE];
            buf.copy_from_slice(&data[offset..offset + TRAINER_SIZE]);
            offset += TRAINER_SIZE;
            Some(buf)
        } else {
            None
        };

        let prg_size = prg_banks * PRG_BANK_SIZE;
        if data.len() < offset + prg_size {
            return Err(RomError::TruncatedPrg);
        }
        let prg_rom = data[offset..offset + prg_size].to_vec();
        offset += prg_size;

        let chr_size = chr_banks * CHR_BANK_SIZE;
        if data.len() < offset + chr_size {
            return Err(RomError::TruncatedChr);
        }
        let chr_rom = if chr_banks == 0 {
            // CHR-RAM: the cartridge still owns a full 8 KiB bank, just
            // writable and starting zeroed rather than loaded from the file.
            vec![0u8; CHR_BANK_SIZE]
        } else {
            data[offset..offset + chr_size].to_vec()
        };
        offset += chr_size;

        if offset != data.len() {
            return Err(RomError::TrailingBytes);
        }

        if mapper_id != 0 {
            return Err(RomError::UnimplementedMapper(mapper_id));
        }

        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            trainer,
            mapper_id,
            mirroring,
            has_battery,
            chr_is_ram: chr_banks == 0,
        })
    }
}
