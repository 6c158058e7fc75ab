//! su-frame: host adapter layer for extension column types.
//!
//! Provides:
//! - The extension protocol (`ExtensionDtype`, `ExtensionArray`, `ExtensionScalar`)
//! - A process-wide dtype registry
//! - A reference host (`Series`, `DataFrame`) that drives the protocol for
//!   indexing, alignment, concatenation and null handling
//!
//! # Architecture
//!
//! The host owns row labels and alignment. Extension arrays never see labels:
//! every label-level operation is lowered to positional `take` calls, with
//! `-1` marking positions that must be materialized as missing.
//!
//! # Example
//!
//! ```
//! use su_frame::{Column, DataFrame, Label};
//!
//! let frame = DataFrame::new(vec![
//!     ("B", Column::Float64(vec![Some(0.0), Some(1.0), Some(2.0)])),
//! ])
//! .unwrap();
//!
//! let reindexed = frame.reindex(&[Label::Int(0), Label::Int(10)]).unwrap();
//! assert_eq!(reindexed.isna().column("B").unwrap().values().as_bools(), Some(&[false, true][..]));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod extension;
pub mod frame;
pub mod label;
pub mod registry;
pub mod series;

// Re-exports for ergonomics
pub use cell::Cell;
pub use column::Column;
pub use error::{FrameError, FrameResult};
pub use extension::{ExtensionArray, ExtensionDtype, ExtensionScalar};
pub use frame::DataFrame;
pub use label::Label;
pub use series::Series;
