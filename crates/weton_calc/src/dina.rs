//! Dina (7-day Javanese weekday) enumeration.
//!
//! Table order is fixed so that `key mod 7` from the weton congruence indexes
//! it directly: index 0 = Senen (Monday) .. index 6 = Ngahad (Sunday).

/// The seven dinas of the Javanese week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Dina {
    Senen,
    Selasa,
    Rebo,
    Kemis,
    Jemuwah,
    Setu,
    Ngahad,
}

/// All 7 dinas in table order (index 0 = Senen).
pub const ALL_DINAS: [Dina; 7] = [
    Dina::Senen,
    Dina::Selasa,
    Dina::Rebo,
    Dina::Kemis,
    Dina::Jemuwah,
    Dina::Setu,
    Dina::Ngahad,
];

const ALL_DINA_NAMES: [&str; 7] = [
    "Senen", "Selasa", "Rebo", "Kemis", "Jemuwah", "Setu", "Ngahad",
];

const ALL_DINA_NEPTU: [u8; 7] = [4, 3, 7, 8, 6, 9, 5];

impl Dina {
    /// Javanese name of the dina.
    pub const fn name(self) -> &'static str {
        ALL_DINA_NAMES[self.index() as usize]
    }

    /// 0-based table index (Senen=0 .. Ngahad=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Senen => 0,
            Self::Selasa => 1,
            Self::Rebo => 2,
            Self::Kemis => 3,
            Self::Jemuwah => 4,
            Self::Setu => 5,
            Self::Ngahad => 6,
        }
    }

    /// Dina at `index`, wrapping modulo 7.
    pub const fn from_index(index: u8) -> Self {
        ALL_DINAS[(index % 7) as usize]
    }

    /// Traditional neptu value.
    pub const fn neptu(self) -> u8 {
        ALL_DINA_NEPTU[self.index() as usize]
    }

    /// The following dina, wrapping Ngahad → Senen.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Dina {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
