pub use crate::config::{ReaderConfig, WriterConfig};
pub use crate::error::{CoerceError, Error, Result};
pub use crate::schema::{ColumnDef, ColumnMap, ColumnType, Schema};
pub use crate::types::{Record, Value};
