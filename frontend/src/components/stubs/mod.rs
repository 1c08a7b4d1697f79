//! Controls whose real behaviour is not built: they only log the intent.

pub mod filter_select;
pub mod load_more;
pub mod pagination;
pub mod search_box;
