pub mod aggregator;
pub mod csv_export;
pub mod google_suggest;
pub mod suggestion_source;

pub use aggregator::*;
pub use csv_export::*;
pub use google_suggest::*;
pub use suggestion_source::*;
