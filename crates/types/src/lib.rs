pub mod geometry;
pub mod page;

pub use geometry::{Rect, Size};
pub use page::PageSize;
