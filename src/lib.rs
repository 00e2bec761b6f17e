//! Densebench — resident memory of dense sets of 16-bit integers, bitmap vs.
//! ordered set

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::print_stdout,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]
#![allow(
    // The 90’s called and wanted their charset back :p
    clippy::non_ascii_literal,
    // Too noisy for little value.
    clippy::must_use_candidate,
    // `bitmap::Bitmap` reads fine.
    clippy::module_name_repetitions,
)]

// }}}

pub mod bitmap;
mod config;
mod dense_set;
mod error;
pub mod ordered_set;
mod population;
pub mod resident;
mod stats;

pub use bitmap::Bitmap;
pub use config::{Config, DOMAIN_SIZE, HOLD_DURATION};
pub use dense_set::DenseSet;
pub use error::{Error, Result};
pub use ordered_set::OrderedSet;
pub use population::{fill, hold, Population};
pub use stats::Stats;
