#![deny(missing_docs)]
//! shipdoc core library.
//!
//! Turns naev ship definition XML into naevpedia page sources: the ship tree
//! is flattened into path-keyed records and rendered into a fixed page
//! template for the naevpedia templating engine.

pub mod error;
pub mod flatten;
pub mod fs;
pub mod node;
pub mod page;
pub mod record;
pub mod render;

pub use error::{Result, ShipDocError};
pub use flatten::{flatten, flatten_ship};
pub use fs::{FileSystem, StdFileSystem};
pub use node::ShipNode;
pub use page::{ShipPage, generate_page, load_ship, parse_ship};
pub use record::{NAME_KEY, ShipRecord};
pub use render::{SHIP_BODY_TEMPLATE, render, render_header};
