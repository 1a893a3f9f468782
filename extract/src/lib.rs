//! Converts a rectangular selection of table cells into text that pastes
//! cleanly into a spreadsheet.
//!
//! Tables often split one logical value across several visual columns, for
//! example a `$` column followed by the amount, or an amount followed by a
//! column holding only `)` or `%`. [TextExtractor] rejoins such columns,
//! tidies up the merged cells, and renders the result as tab separated rows.

pub mod cellmerge;
pub mod columnmerge;
pub mod extractor;
pub mod normalise;
pub mod selection;
pub mod serialise;
pub mod table;
pub mod units;

pub use extractor::{TextExtractor, extract};
pub use selection::{CellPos, SelectionRange};
pub use table::{Grid, InvalidShapeError, Row};
pub use units::AllowedUnits;
