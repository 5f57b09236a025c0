//! Pasaran (5-day market week) enumeration.

/// The five pasarans, in the order indexed by `key mod 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Pasaran {
    Pon,
    Wage,
    Kliwon,
    Legi,
    Pahing,
}

/// All 5 pasarans in table order (index 0 = Pon).
pub const ALL_PASARANS: [Pasaran; 5] = [
    Pasaran::Pon,
    Pasaran::Wage,
    Pasaran::Kliwon,
    Pasaran::Legi,
    Pasaran::Pahing,
];

const ALL_PASARAN_NAMES: [&str; 5] = ["Pon", "Wage", "Kliwon", "Legi", "Pahing"];

const ALL_PASARAN_NEPTU: [u8; 5] = [7, 4, 8, 5, 9];

impl Pasaran {
    /// Javanese name of the pasaran.
    pub const fn name(self) -> &'static str {
        ALL_PASARAN_NAMES[self.index() as usize]
    }

    /// 0-based table index (Pon=0 .. Pahing=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Pon => 0,
            Self::Wage => 1,
            Self::Kliwon => 2,
            Self::Legi => 3,
            Self::Pahing => 4,
        }
    }

    /// Pasaran at `index`, wrapping modulo 5.
    pub const fn from_index(index: u8) -> Self {
        ALL_PASARANS[(index % 5) as usize]
    }

    /// Traditional neptu value.
    pub const fn neptu(self) -> u8 {
        ALL_PASARAN_NEPTU[self.index() as usize]
    }

    /// The following pasaran, wrapping Pahing → Pon.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Pasaran {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
