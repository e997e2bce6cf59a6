//! Style system for named typography styles and inheritance.
//!
//! This module provides the core styling primitives:
//!
//! - [`Typography`]: The resolved attributes of one named style
//! - [`StyleEntry`] / [`StyleTable`]: Typed configuration entries before resolution
//! - [`resolve_all`]: The inheritance resolution pass
//! - [`StyleError`]: Per-style resolution failures
//! - [`StyleReporter`]: Hook receiving each failure
//!
//! Styles form layers through `extends`: a style starts from the style it
//! extends and overrides only the attributes it sets itself.

mod attributes;
mod entry;
mod error;
mod report;
mod resolve;
mod typography;

pub use attributes::{LetterCase, ScalingMode, TextAlignment, UnknownToken};
pub use entry::{keys, parse_own_attributes, resolve_color, RawStyleEntry, StyleEntry, StyleTable};
pub use error::StyleError;
pub use report::{SilentReporter, StyleReporter, TracingReporter};
pub use resolve::{resolve_all, Resolution};
pub use typography::{merge, Typography};
