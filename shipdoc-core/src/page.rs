//! End-to-end page generation: parse, flatten, render, write.

use std::path::Path;

use crate::error::{Result, ShipDocError};
use crate::flatten::flatten_ship;
use crate::fs::FileSystem;
use crate::node::ShipNode;
use crate::record::ShipRecord;
use crate::render::render;

/// Result of generating a naevpedia page for one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipPage {
    /// Flattened ship definition.
    pub record: ShipRecord,
    /// Rendered page contents.
    pub document: String,
}

impl ShipPage {
    /// Flatten and render a parsed ship tree.
    pub fn from_ship(root: &ShipNode) -> Self {
        let record = flatten_ship(root);
        let document = render(&record);
        Self { record, document }
    }
}

/// Parse a ship definition document into an owned tree.
pub fn parse_ship(xml: &str) -> Result<ShipNode> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;
    Ok(ShipNode::from_xml(doc.root_element()))
}

/// Read and parse a ship definition file.
pub fn load_ship<F: FileSystem>(fs: &F, path: &Path) -> Result<ShipNode> {
    let contents = fs.read_to_string(path)?;
    log::debug!("read {} bytes from {}", contents.len(), path.display());
    parse_ship(&contents)
}

/// Generate the page for `input` and write it to `output`.
///
/// Fails with [`ShipDocError::MissingOutput`] before touching the input when no
/// output path is given.
pub fn generate_page<F: FileSystem>(
    fs: &F,
    input: &Path,
    output: Option<&Path>,
) -> Result<ShipPage> {
    let output = output.ok_or(ShipDocError::MissingOutput)?;
    let root = load_ship(fs, input)?;
    let page = ShipPage::from_ship(&root);
    fs.write(output, &page.document)?;
    log::info!(
        "wrote {} ({} bytes) for ship {:?}",
        output.display(),
        page.document.len(),
        page.record.name().unwrap_or_default()
    );
    Ok(page)
}
