//! Javanese weton from a proleptic Gregorian date.
//!
//! This crate provides:
//! - The adapted Zeller congruence mapping (day, month, year) to a key
//! - Dina (7-day) and pasaran (5-day) tables indexed by the key's residues
//! - Neptu values for both cycles
//! - `atoi`-compatible and strict parsing of date components
//!
//! Everything here is pure arithmetic over `const` tables.
//!
//! ```
//! use weton_calc::{Dina, Pasaran, weton};
//!
//! let w = weton(17, 8, 1945);
//! assert_eq!((w.dina, w.pasaran), (Dina::Jemuwah, Pasaran::Legi));
//! ```

pub mod args;
pub mod congruence;
pub mod date;
pub mod dina;
pub mod error;
pub mod pasaran;
pub mod weton;

pub use args::{ArgPosition, ParseMode, parse_component, parse_lenient, parse_strict};
pub use congruence::{CongruenceState, dina_index, pasaran_index, weton_key};
pub use date::CalendarDate;
pub use dina::{ALL_DINAS, Dina};
pub use error::WetonError;
pub use pasaran::{ALL_PASARANS, Pasaran};
pub use weton::{Weton, weton, weton_from_date};
