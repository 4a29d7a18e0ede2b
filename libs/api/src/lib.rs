pub mod error;
pub mod record;
pub mod store;

pub use error::{ErrorKind, StoreError};
pub use record::Record;
pub use store::RecordStore;
