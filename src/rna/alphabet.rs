use std::fmt::{Display, Formatter};

/// One of the four RNA bases. Tree labels use the lower case letter, output uses upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// Lower case label as it appears in unary node labels.
    pub fn label(self) -> char {
        match self {
            Base::A => 'a',
            Base::C => 'c',
            Base::G => 'g',
            Base::U => 'u',
        }
    }

    /// Upper case letter as written to the decompressed sequence.
    pub fn letter(self) -> char {
        self.label().to_ascii_uppercase()
    }

    /// Case-insensitive parse. Anything outside ACGU is rejected (no T, no IUPAC codes).
    pub fn from_char(c: char) -> Option<Base> {
        match c.to_ascii_lowercase() {
            'a' => Some(Base::A),
            'c' => Some(Base::C),
            'g' => Some(Base::G),
            'u' => Some(Base::U),
            _ => None,
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The six pairings a binary node can stand for. Both partners and their orientation are
/// part of the type, so a structure can be rebuilt from the labels alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairType {
    /// A·U
    P,
    /// U·A
    Q,
    /// C·G
    R,
    /// G·C
    S,
    /// U·G (wobble)
    X,
    /// G·U (wobble)
    Y,
}

/// Label, opening base and closing base, indexed by `PairType as usize`.
const PAIR_TABLE: [(char, Base, Base); 6] = [
    ('p', Base::A, Base::U),
    ('q', Base::U, Base::A),
    ('r', Base::C, Base::G),
    ('s', Base::G, Base::C),
    ('x', Base::U, Base::G),
    ('y', Base::G, Base::U),
];

impl PairType {
    pub const ALL: [PairType; 6] = [
        PairType::P,
        PairType::Q,
        PairType::R,
        PairType::S,
        PairType::X,
        PairType::Y,
    ];

    pub fn label(self) -> char {
        PAIR_TABLE[self as usize].0
    }

    /// (opening base, closing base)
    pub fn bases(self) -> (Base, Base) {
        let (_, open, close) = PAIR_TABLE[self as usize];
        (open, close)
    }

    pub fn from_label(c: char) -> Option<PairType> {
        PairType::ALL.iter().copied().find(|pair| pair.label() == c)
    }

    /// Pair type assumed when only the opening base is known. G and U are resolved
    /// to their Watson-Crick partner until the closing base says otherwise.
    pub fn open(base: Base) -> PairType {
        match base {
            Base::A => PairType::P,
            Base::U => PairType::Q,
            Base::C => PairType::R,
            Base::G => PairType::S,
        }
    }

    /// Settle the pair type once the closing base is seen. Returns None for partners that
    /// do not form one of the six pairs.
    pub fn close(self, base: Base) -> Option<PairType> {
        match (self, base) {
            (PairType::S, Base::U) => Some(PairType::Y),
            (PairType::Q, Base::G) => Some(PairType::X),
            (pair, base) if pair.bases().1 == base => Some(pair),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Base, PairType};

    #[test]
    fn base_parse_test() {
        assert_eq!(Base::from_char('a'), Some(Base::A));
        assert_eq!(Base::from_char('G'), Some(Base::G));
        assert_eq!(Base::from_char('t'), None);
        assert_eq!(Base::U.letter(), 'U');
    }

    #[test]
    fn pair_label_test() {
        for pair in PairType::ALL {
            assert_eq!(PairType::from_label(pair.label()), Some(pair));
        }
        assert_eq!(PairType::from_label('a'), None);
    }

    #[test]
    fn wobble_test() {
        assert_eq!(PairType::open(Base::G).close(Base::U), Some(PairType::Y));
        assert_eq!(PairType::open(Base::U).close(Base::G), Some(PairType::X));
        assert_eq!(PairType::open(Base::G).close(Base::C), Some(PairType::S));
        assert_eq!(PairType::open(Base::A).close(Base::U), Some(PairType::P));
        assert_eq!(PairType::open(Base::A).close(Base::G), None);
        assert_eq!(PairType::open(Base::C).close(Base::C), None);
    }

    #[test]
    fn pair_bases_test() {
        assert_eq!(PairType::X.bases(), (Base::U, Base::G));
        assert_eq!(PairType::Y.bases(), (Base::G, Base::U));
        assert_eq!(PairType::R.bases(), (Base::C, Base::G));
    }
}
