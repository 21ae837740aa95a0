//! # Gridlet - Box-Drawn Tables as Styled Terminal Fragments
//!
//! `gridlet` lays out a sequence of heterogeneous key/value records as a
//! fixed-width, box-drawn text table for monospaced terminals. The output
//! is a tree of styled fragments (text paired with a `console::Style`)
//! that a host can print directly (`Display`) or consume piece by piece.
//!
//! ## Core Concepts
//!
//! - [`Record`]: one row's source data, an insertion-ordered key → value map
//! - [`Column`]: a derived key plus its computed display width
//! - [`TableConfig`]: padding, border glyph set, and the three style roles
//! - [`FragmentStyle`]: pluggable wrapper from text to styled [`Fragment`];
//!   the header, cell, and skeleton roles are each independently replaceable
//! - [`RenderedTable`]: the laid-out table, one [`Line`] of fragments per row
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlet::{render_serialize, TableConfig};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let rows = vec![
//!     Person { name: "Foo".into(), age: 12 },
//!     Person { name: "Bar".into(), age: 15 },
//! ];
//!
//! let table = render_serialize(&rows, &TableConfig::new()).unwrap();
//! assert_eq!(
//!     table.plain(),
//!     "\
//! ┌──────┬─────┐
//! │ name │ age │
//! ├──────┼─────┤
//! │ Foo  │ 12  │
//! ├──────┼─────┤
//! │ Bar  │ 15  │
//! └──────┴─────┘"
//! );
//! println!("{}", table); // styled, when stdout is a terminal
//! ```
//!
//! ## Columns and Widths
//!
//! Records are heterogeneous: different records may carry different key
//! sets. Columns are the first-seen-order union of keys; a record lacking
//! a key renders that cell as blank padding. Each column is as wide as its
//! key or its widest stringified value, plus padding on both sides. Widths
//! are literal char counts; wide-character display width is out of scope.
//!
//! ## Custom Styling
//!
//! Any `Fn(&str) -> Fragment` is a style role. Swap one without the others:
//!
//! ```rust
//! use console::Style;
//! use gridlet::style::styled;
//! use gridlet::{render, TableConfig};
//!
//! let config = TableConfig::new()
//!     .header(styled(Style::new().red().italic()));
//! let table = render(&[], &config);
//! assert_eq!(table.plain(), "┌┐\n└┘");
//! ```
//!
//! ## Border Styles
//!
//! The frame glyphs come from a [`BorderStyle`]: `Light` (default),
//! `Ascii`, `Rounded`, `Heavy`, or `Double`.

mod columns;
mod error;
mod fragment;
mod line;
mod record;
pub mod style;
mod table;
pub mod util;

pub use columns::{derive_columns, Column};
pub use error::TableError;
pub use fragment::{Fragment, Line, RenderedTable};
pub use line::{build_line, BorderStyle, Cell, LineSpec};
pub use record::{records_from, stringify, Record};
pub use style::FragmentStyle;
pub use table::{render, render_serialize, TableConfig};
