//! Hand-tuned order-1 code tables.
//!
//! Each entry is (previous symbol, next symbol, code). The code uses the BitPacker word format: the bit
//! count sits in the most significant byte and the bits themselves are right-aligned, so 0x03_000006
//! is the three bit code 110. `;` is the label boundary: it is the context of a label's first symbol and
//! the symbol that ends a label. Within one context the codes form a prefix code.
//!

/// Start/end of a label, both as context and as symbol.
pub const BOUNDARY: char = ';';

/// Labels of unary super nodes (unpaired bases).
pub const UNARY_ALPHABET: [char; 4] = ['a', 'c', 'g', 'u'];

/// Labels of binary super nodes (pair types).
pub const BINARY_ALPHABET: [char; 6] = ['p', 'q', 'r', 's', 'x', 'y'];

#[allow(clippy::unusual_byte_groupings)]
pub const UNARY_CODES: [(char, char, u32); 24] = [
    (';', 'a', 0x02_000002),
    (';', 'c', 0x03_000006),
    (';', 'g', 0x01_000000),
    (';', 'u', 0x03_000007),
    ('a', ';', 0x01_000000),
    ('a', 'a', 0x02_000002),
    ('a', 'c', 0x04_00000e),
    ('a', 'g', 0x04_00000f),
    ('a', 'u', 0x03_000006),
    ('c', ';', 0x02_000000),
    ('c', 'a', 0x02_000001),
    ('c', 'c', 0x03_000006),
    ('c', 'g', 0x02_000002),
    ('c', 'u', 0x03_000007),
    ('g', ';', 0x02_000000),
    ('g', 'a', 0x02_000001),
    ('g', 'c', 0x03_000006),
    ('g', 'g', 0x03_000007),
    ('g', 'u', 0x02_000002),
    ('u', ';', 0x02_000000),
    ('u', 'a', 0x02_000001),
    ('u', 'c', 0x03_000006),
    ('u', 'g', 0x03_000007),
    ('u', 'u', 0x02_000002),
];

#[allow(clippy::unusual_byte_groupings)]
pub const BINARY_CODES: [(char, char, u32); 48] = [
    (';', 'p', 0x03_000004),
    (';', 'q', 0x03_000006),
    (';', 'r', 0x02_000000),
    (';', 's', 0x02_000001),
    (';', 'x', 0x03_000007),
    (';', 'y', 0x03_000005),
    ('p', ';', 0x03_000004),
    ('p', 'p', 0x03_000005),
    ('p', 'q', 0x03_000006),
    ('p', 'r', 0x02_000000),
    ('p', 's', 0x02_000001),
    ('p', 'x', 0x04_00000f),
    ('p', 'y', 0x04_00000e),
    ('q', ';', 0x02_000000),
    ('q', 'p', 0x04_00000e),
    ('q', 'q', 0x03_000006),
    ('q', 'r', 0x02_000001),
    ('q', 's', 0x02_000002),
    ('q', 'x', 0x05_00001f),
    ('q', 'y', 0x05_00001e),
    ('r', ';', 0x02_000000),
    ('r', 'p', 0x03_000004),
    ('r', 'q', 0x03_000005),
    ('r', 'r', 0x02_000001),
    ('r', 's', 0x03_000006),
    ('r', 'x', 0x04_00000f),
    ('r', 'y', 0x04_00000e),
    ('s', ';', 0x02_000000),
    ('s', 'p', 0x04_00000c),
    ('s', 'q', 0x04_00000d),
    ('s', 'r', 0x02_000001),
    ('s', 's', 0x02_000002),
    ('s', 'x', 0x04_00000f),
    ('s', 'y', 0x04_00000e),
    ('x', ';', 0x02_000000),
    ('x', 'p', 0x04_00000e),
    ('x', 'q', 0x03_000004),
    ('x', 'r', 0x02_000001),
    ('x', 's', 0x03_000005),
    ('x', 'x', 0x04_00000f),
    ('x', 'y', 0x03_000006),
    ('y', ';', 0x03_000004),
    ('y', 'p', 0x03_000005),
    ('y', 'q', 0x03_000006),
    ('y', 'r', 0x02_000000),
    ('y', 's', 0x02_000001),
    ('y', 'x', 0x04_00000f),
    ('y', 'y', 0x04_00000e),
];
