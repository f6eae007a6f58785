pub mod category;
pub mod error;
pub mod filter;
pub mod result;
pub mod table;

pub use category::{Category, CategorySets};
pub use error::{ConfigurationError, LookupError, ProviderError, ProviderErrorKind, Result};
pub use filter::{Filter, FilterSet, same_name};
pub use result::{CategoryResult, Entry};
pub use table::ReportTable;
