use log::{error, trace};

/// Packs bits MSB-first into a byte buffer. Bits go in as codec words (see out24), bytes come out
/// of finish().
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with room for `size` bytes of output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Move every complete byte from the queue to the output.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /*
    NOTE: out24 takes a u32. The 8 most significant bits of the word indicate how
    many of the least significant bits will be written. Those bits must be aligned to
    the least signficant bit. (The middle bits are masked out.)
    Eg 00000100_00000000_00000000_00000010 writes out 0010.
    This is the same word format the label code tables use.
    */
    /// Writes 0-24 bits encoded with the number of bits to write in the most
    /// significant byte of a 32 bit word.
    pub fn out24(&mut self, data: u32) {
        let depth = (data >> 24) as u8;
        if depth == 0 {
            return;
        }
        self.queue <<= depth;
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64;
        self.q_bits += depth;
        self.write_stream();
    }

    /// Writes any number of bits, 24 at a time.
    pub fn out_bits(&mut self, bits: &[bool]) {
        for chunk in bits.chunks(24) {
            let word = chunk
                .iter()
                .fold(0_u32, |word, &bit| word << 1 | bit as u32);
            self.out24((chunk.len() as u32) << 24 | word);
        }
    }

    /// Pad the last byte with zeros in its least significant bits and hand out the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.q_bits > 0 {
            let padding = 8 - self.q_bits;
            trace!("Padding the last byte with {} zero bits.", padding);
            self.queue <<= padding;
            self.q_bits += padding;
            self.write_stream();
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        self.output
    }

    /// Debugging function to return the number of bytes.bits written so far
    pub fn loc(&self) -> String {
        let bits = self.output.len() * 8 + self.q_bits as usize;
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}
