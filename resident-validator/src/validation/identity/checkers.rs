//! Identifier format checkers
//!
//! The dispatcher only sees [`IdFormatChecker`]. The concrete checkers here
//! are reference implementations for deployments that do not inject their own.

/// Format predicate for one identifier kind
#[cfg_attr(test, mockall::automock)]
pub trait IdFormatChecker: Send + Sync {
    fn is_valid(&self, candidate: &str) -> bool;
}

const DEFAULT_UIN_LENGTH: usize = 10;
const DEFAULT_VID_LENGTH: usize = 16;
const DEFAULT_RID_LENGTH: usize = 29;

/// UIN: fixed-length digits, no leading 0 or 1, Verhoeff check digit
#[derive(Debug, Clone)]
pub struct UinChecker {
    length: usize,
}

impl UinChecker {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_UIN_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for UinChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdFormatChecker for UinChecker {
    fn is_valid(&self, candidate: &str) -> bool {
        is_checksummed_number(candidate, self.length)
    }
}

/// VID: same shape as a UIN with its own length
#[derive(Debug, Clone)]
pub struct VidChecker {
    length: usize,
}

impl VidChecker {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_VID_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for VidChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdFormatChecker for VidChecker {
    fn is_valid(&self, candidate: &str) -> bool {
        is_checksummed_number(candidate, self.length)
    }
}

/// RID: fixed-length digits
#[derive(Debug, Clone)]
pub struct RidChecker {
    length: usize,
}

impl RidChecker {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_RID_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RidChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdFormatChecker for RidChecker {
    fn is_valid(&self, candidate: &str) -> bool {
        candidate.len() == self.length && candidate.bytes().all(|b| b.is_ascii_digit())
    }
}

fn is_checksummed_number(candidate: &str, length: usize) -> bool {
    if candidate.len() != length || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if candidate.starts_with('0') || candidate.starts_with('1') {
        return false;
    }

    verhoeff::validate(candidate)
}

mod verhoeff {
    const MULTIPLICATION: [[u8; 10]; 10] = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
        [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
        [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
        [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
        [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
        [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
        [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
        [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
        [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    ];

    const PERMUTATION: [[u8; 10]; 8] = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
        [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
        [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
        [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
        [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
        [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
        [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
    ];

    const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

    /// `digits` must be ASCII digits only; the last one is the check digit.
    pub fn validate(digits: &str) -> bool {
        checksum(digits, 0) == 0
    }

    /// Check digit to append to `digits`.
    #[cfg(test)]
    pub fn generate(digits: &str) -> u8 {
        INVERSE[checksum(digits, 1) as usize]
    }

    fn checksum(digits: &str, offset: usize) -> u8 {
        digits
            .bytes()
            .rev()
            .enumerate()
            .fold(0u8, |c, (i, b)| {
                let digit = (b - b'0') as usize;
                MULTIPLICATION[c as usize][PERMUTATION[(i + offset) % 8][digit] as usize]
            })
    }
}
