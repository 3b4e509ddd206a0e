use crate::foundation::core::{PageIndex, SheetIndex};

/// Content of one side of a sheet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Face<T> {
    /// A content page.
    Page(T),
    /// Blank paper (the back of the last sheet of an odd-length book).
    Blank,
}

impl<T> Face<T> {
    /// Borrow the page content, if any.
    pub fn page(&self) -> Option<&T> {
        match self {
            Self::Page(p) => Some(p),
            Self::Blank => None,
        }
    }

    /// True for [`Face::Blank`].
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// A physical sheet of paper: two consecutive pages, front and back.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sheet<T> {
    /// Position of the sheet in the book.
    pub index: SheetIndex,
    /// Page shown while the sheet lies on the right stack.
    pub front: T,
    /// Page shown once the sheet has been flipped onto the left stack.
    pub back: Face<T>,
}

impl<T> Sheet<T> {
    /// Handle of the front page.
    pub fn front_page(&self) -> PageIndex {
        self.index.front_page()
    }

    /// Handle of the back page, `None` when the back is blank.
    pub fn back_page(&self) -> Option<PageIndex> {
        match self.back {
            Face::Page(_) => Some(self.index.back_page()),
            Face::Blank => None,
        }
    }
}

/// Group an ordered page list into sheets: `(pages[2i], pages[2i + 1])`.
///
/// An odd page count leaves the last sheet's back [`Face::Blank`]. An empty list gives no sheets.
pub fn pair_sheets<T>(pages: impl IntoIterator<Item = T>) -> Vec<Sheet<T>> {
    let mut it = pages.into_iter();
    let mut sheets = Vec::with_capacity(it.size_hint().0.div_ceil(2));
    while let Some(front) = it.next() {
        let back = it.next().map_or(Face::Blank, Face::Page);
        sheets.push(Sheet {
            index: SheetIndex(sheets.len()),
            front,
            back,
        });
    }
    sheets
}

/// Number of sheets needed for `pages` pages.
pub fn sheet_count(pages: usize) -> usize {
    pages.div_ceil(2)
}

#[cfg(test)]
#[path = "../../tests/unit/book/sheet.rs"]
mod tests;
