//! Paint order of the two sheet stacks.
//!
//! On the right (unflipped) stack the lowest index is on top, so the next sheet to turn is
//! always uppermost. On the left (flipped) stack the highest index is on top, like pages that
//! were turned later lying over earlier ones.

/// Default z-index boost for the sheet that is mid-flip.
pub const DEFAULT_Z_BOOST: i32 = 10;

/// Resting z-index of sheet `index` in a book of `total_sheets` sheets.
pub fn resting_z_index(index: usize, flipped: bool, total_sheets: usize) -> i32 {
    if flipped {
        to_z(index.saturating_add(1))
    } else {
        to_z(total_sheets.saturating_sub(index))
    }
}

/// Z-index of the sheet being flipped: above every resting sheet.
pub fn flipping_z_index(total_sheets: usize, boost: i32) -> i32 {
    to_z(total_sheets).saturating_add(boost)
}

/// Resting z-index of every sheet when the first `current_sheet` sheets are flipped.
pub fn stack_z_indices(current_sheet: usize, total_sheets: usize) -> Vec<i32> {
    (0..total_sheets)
        .map(|i| resting_z_index(i, i < current_sheet, total_sheets))
        .collect()
}

fn to_z(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/book/zorder.rs"]
mod tests;
