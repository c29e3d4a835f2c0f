use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::bitstream::Bits;
use crate::error::Result;
use crate::rna::RnaRecord;

/// Read a record from a text file: the first line is the sequence, the second the structure.
/// Anything after the second line is ignored, a missing line reads as empty.
pub fn read_record<P: AsRef<Path>>(path: P) -> Result<RnaRecord> {
    let text = fs::read_to_string(path.as_ref())?;
    let mut lines = text.lines();
    let sequence = lines.next().unwrap_or_default();
    let structure = lines.next().unwrap_or_default();
    if lines.next().is_some() {
        warn!(
            "Only the first two lines of {} are used.",
            path.as_ref().display()
        );
    }
    info!(
        "Read {} positions from {}.",
        sequence.chars().count(),
        path.as_ref().display()
    );
    Ok(RnaRecord::new(sequence, structure))
}

/// Write text as is (no trailing newline is added).
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let mut f_out = File::create(path.as_ref())?;
    f_out.write_all(text.as_bytes())?;
    Ok(())
}

/// Write bits packed MSB-first, padding the last byte with zeros. Returns the bytes written.
pub fn write_bits<P: AsRef<Path>>(path: P, bits: &Bits) -> Result<usize> {
    let bytes = bits.pack();
    let mut f_out = File::create(path.as_ref())?;
    f_out.write_all(&bytes)?;
    info!(
        "Wrote {} bits as {} bytes to {}.",
        bits.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(bytes.len())
}

/// Read a whole file as bits, MSB-first. Padding comes back as trailing zeros.
pub fn read_bits<P: AsRef<Path>>(path: P) -> Result<Bits> {
    let bytes = fs::read(path.as_ref())?;
    Ok(Bits::from_bytes(&bytes))
}

/// Replace the extension of a path (or add one if there is none).
pub fn swap_extension<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
    path.as_ref().with_extension(extension)
}
