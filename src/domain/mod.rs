pub mod modifier_catalog;
pub mod query_variant;
pub mod suggestion;

pub use modifier_catalog::*;
pub use query_variant::*;
pub use suggestion::*;
