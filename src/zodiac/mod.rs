use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ZodiacError {
    #[error("month {0} is outside 1-12")]
    InvalidMonth(u32),

    #[error("day {0} is outside 1-31")]
    InvalidDay(u32),
}

/// The twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

// Indexed by month - 1: (first day of the late sign, early sign, late sign)
const CUTOFFS: [(u32, ZodiacSign, ZodiacSign); 12] = [
    (20, ZodiacSign::Capricorn, ZodiacSign::Aquarius),
    (19, ZodiacSign::Aquarius, ZodiacSign::Pisces),
    (21, ZodiacSign::Pisces, ZodiacSign::Aries),
    (20, ZodiacSign::Aries, ZodiacSign::Taurus),
    (21, ZodiacSign::Taurus, ZodiacSign::Gemini),
    (21, ZodiacSign::Gemini, ZodiacSign::Cancer),
    (23, ZodiacSign::Cancer, ZodiacSign::Leo),
    (23, ZodiacSign::Leo, ZodiacSign::Virgo),
    (23, ZodiacSign::Virgo, ZodiacSign::Libra),
    (23, ZodiacSign::Libra, ZodiacSign::Scorpio),
    (22, ZodiacSign::Scorpio, ZodiacSign::Sagittarius),
    (22, ZodiacSign::Sagittarius, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Looks up the sign for a day of a month.
    ///
    /// Only the ranges are checked, so `(31, 2)` resolves like any other late
    /// February day. Out-of-range input is rejected rather than guessed at.
    pub fn resolve(day: u32, month: u32) -> Result<Self, ZodiacError> {
        if !(1..=12).contains(&month) {
            return Err(ZodiacError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(ZodiacError::InvalidDay(day));
        }

        let (cutoff, early, late) = CUTOFFS[(month - 1) as usize];
        Ok(if day < cutoff { early } else { late })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`ZodiacSign::resolve`].
pub fn resolve(day: u32, month: u32) -> Result<ZodiacSign, ZodiacError> {
    ZodiacSign::resolve(day, month)
}
