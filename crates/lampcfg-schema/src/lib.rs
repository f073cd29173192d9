//! lampcfg Schema Model
//!
//! The declarative page → group → field tree that drives rendering of the
//! device's configuration form. The model is data-only: no I/O, no markup
//! knowledge, just the record types plus builder helpers so a device
//! definition reads declaratively.
//!
//! # Example
//!
//! ```
//! use lampcfg_schema::{FieldDefinition, FieldType, Group, Page, Schema};
//!
//! let schema = Schema::new().page(
//!     Page::new("Light").group(
//!         Group::new()
//!             .explained("Lower values mean lower brightness.")
//!             .field(
//!                 "OnBrightness",
//!                 FieldDefinition::new(FieldType::Uint8, "Brightness", "obr", 210u16)
//!                     .range(1, 255),
//!             ),
//!     ),
//! );
//! assert_eq!(schema.pages.len(), 1);
//! ```

pub mod model;

pub use model::{FieldDefinition, FieldType, FieldValue, Group, Page, Schema};
