//! # Year Structure
//!
//! Days-per-month table for one focus year, padded with the neighbouring
//! boundary months so the grid can look one month back and forward without
//! special cases:
//!
//! ```text
//! slot:   0    1   2   3  ...  12   13
//! month:  Dec  Jan Feb Mar ... Dec  Jan
//! year:   y-1  y   y   y       y    y+1
//! ```

use crate::core::date::days_in_month;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStructure {
    year: i32,
    days_in_months: [u8; 14],
}

impl YearStructure {
    pub fn generate(year: i32) -> Self {
        let mut days_in_months = [0u8; 14];
        days_in_months[0] = days_in_month(year.saturating_sub(1), 12);
        for month in 1..=12u8 {
            days_in_months[usize::from(month)] = days_in_month(year, month);
        }
        days_in_months[13] = days_in_month(year.saturating_add(1), 1);
        Self {
            year,
            days_in_months,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Day count of a table slot (0 = previous December, 13 = next January).
    pub fn days_in(&self, slot: usize) -> u8 {
        self.days_in_months[slot]
    }

    /// Days of January through the month before `month` of the focus year.
    pub fn days_before(&self, month: u8) -> u32 {
        self.days_in_months[1..usize::from(month)]
            .iter()
            .map(|&d| u32::from(d))
            .sum()
    }
}
