//! su-temperature: unit-aware temperature columns.
//!
//! Provides:
//! - Scalar temperatures in Celsius or Fahrenheit, plus the missing scalar
//! - `MaskedBuffer`: canonical Celsius magnitudes with a parallel missing mask
//! - `CelsiusType`: the dtype descriptor registered with the host
//! - `TemperatureArray`: the extension column the host indexes, aligns and
//!   concatenates
//! - Construction helpers and a text parser
//!
//! # Architecture
//!
//! Values are stored once, in Celsius. The unit a caller sees is a read-only
//! tag on the array, applied on element access and display. Missing markers
//! (`NaN`, `None`, the NA scalar, `"nan"` text) are normalized into the mask
//! at construction and never travel further.
//!
//! Everything host-specific lives in the `extension` module, which implements
//! the `su_frame` traits on top of the array's own API.
//!
//! # Example
//!
//! ```
//! use su_frame::{Column, DataFrame, Label};
//! use su_temperature::TemperatureArray;
//!
//! let temps = TemperatureArray::new(vec![0.0, 1.0, 2.0]).unwrap();
//! let frame = DataFrame::new(vec![("A", Column::Extension(Box::new(temps)))]).unwrap();
//!
//! let reindexed = frame.reindex(&[Label::Int(0), Label::Int(10)]).unwrap();
//! let col = reindexed.column("A").unwrap();
//! assert_eq!(col.values().isna(), vec![false, true]);
//! ```

pub mod array;
pub mod construct;
pub mod dtype;
pub mod error;
pub mod extension;
pub mod ops;
pub mod options;
pub mod parser;
pub mod scalar;
pub mod storage;
pub mod unit;

// Re-exports for ergonomics
pub use array::{Indexer, Selection, TemperatureArray};
pub use construct::{TemperatureInput, to_temperature};
pub use dtype::{CELSIUS, CelsiusType};
pub use error::{TemperatureError, TemperatureResult};
pub use ops::{CompareOp, Operand};
pub use options::DisplayOptions;
pub use parser::parse_temperature;
pub use scalar::{Celsius, Fahrenheit, NA, TemperatureScalar, TemperatureValue};
pub use storage::MaskedBuffer;
pub use unit::TemperatureUnit;
