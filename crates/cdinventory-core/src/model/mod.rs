pub mod ids;
pub mod record;

pub use ids::{CdId, ParseCdIdError};
pub use record::Record;
