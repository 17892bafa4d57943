//! # CLI Behavior
//!
//! This is **one possible UI client** for CourseBuilder, not the application
//! itself. Each invocation is one user action: it opens the course, runs the
//! action through the API, prints the result and exits.
//!
//! Running `coursebuilder` with no arguments lists the course.
//!
//! Items are addressed by their 1-based position in the listing. Positions
//! are resolved to item ids before anything is changed, so `delete 1 3`
//! removes the items that were first and third when the command started.
//!
//! A form that fails validation (empty module name, link without a URL) adds
//! nothing and reports what was missing.

pub mod commands;
pub mod render;
pub mod setup;

pub use commands::run;
