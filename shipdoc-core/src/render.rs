//! Naevpedia page rendering.
//!
//! The page is a front-matter header naming the ship followed by a constant
//! body. Everything in the body (`<%= %>` expressions, `<% if %>` blocks and
//! the literal `{name}` in the heading) is left for the naevpedia templating
//! engine and is never parsed here.

use std::fmt::Write;

use crate::record::ShipRecord;

/// Constant page body shared by every ship.
pub const SHIP_BODY_TEMPLATE: &str = include_str!("../templates/ship_body.md");

/// Render the naevpedia page for a flattened ship record.
///
/// A record without a name still renders, with an empty name in the header.
pub fn render(record: &ShipRecord) -> String {
    let name = match record.name() {
        Some(name) => name,
        None => {
            log::warn!("rendering ship page without a name; header will be malformed");
            ""
        }
    };
    let mut output = render_header(name);
    output.push_str(SHIP_BODY_TEMPLATE);
    output
}

/// Render only the front-matter header and ship binding for `name`.
pub fn render_header(name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "title: \"{name}\"");
    let _ = writeln!(output, "cond: \"return ship.get(\\\"{name}\\\"):known()\"");
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "<% s = ship.get(\"{name}\") %>");
    output
}
