//! Tree flattening into slash-joined path records.

use crate::node::ShipNode;
use crate::record::{NAME_KEY, ShipRecord};

/// Flatten the children of `node` into a record keyed by element path.
///
/// `path` is the location of `node` itself; pass an empty string for the
/// root so that keys never include the root tag. Leaves are visited
/// depth-first in document order. Sibling leaves with the same tag collide on
/// one key and the last one wins.
pub fn flatten(node: &ShipNode, path: &str) -> ShipRecord {
    let mut record = ShipRecord::new();
    for child in node.children() {
        let child_path = join_path(path, child.tag_name());
        if child.is_leaf() {
            record.insert(child_path, child.text().map(str::to_string));
        } else {
            record.merge(flatten(child, &child_path));
        }
    }
    record
}

/// Build the full record for a ship: the root `name` attribute followed by every leaf.
pub fn flatten_ship(root: &ShipNode) -> ShipRecord {
    let mut record = ShipRecord::seeded(root.attribute(NAME_KEY));
    record.merge(flatten(root, ""));
    log::debug!(
        "flattened {} leaves into {} entries",
        root.leaf_count(),
        record.len()
    );
    record
}

fn join_path(parent: &str, tag: &str) -> String {
    if parent.is_empty() {
        tag.to_string()
    } else {
        format!("{parent}/{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> ShipNode {
        let doc = roxmltree::Document::parse(xml).expect("valid xml");
        ShipNode::from_xml(doc.root_element())
    }

    #[test]
    fn llama_scenario_flattens_name_and_class() {
        let root = parse(r#"<ship name="Llama"><class>Yacht</class></ship>"#);

        let record = flatten_ship(&root);

        let entries: Vec<(&str, Option<&str>)> = record.iter().collect();
        assert_eq!(entries, vec![("name", Some("Llama")), ("class", Some("Yacht"))]);
    }

    #[test]
    fn nested_leaves_join_tags_with_slashes() {
        let root = parse("<ship><A><B><C>deep</C></B></A><top>1</top></ship>");

        let record = flatten(&root, "");

        assert_eq!(record.get("A/B/C"), Some(Some("deep")));
        assert_eq!(record.get("top"), Some(Some("1")));
        assert!(!record.contains_key("ship/top"));
        assert!(!record.contains_key("A"));
        assert!(!record.contains_key("A/B"));
    }

    #[test]
    fn prefix_path_is_extended() {
        let root = parse("<ship><class>Yacht</class></ship>");
        let record = flatten(&root, "outer");
        assert_eq!(record.get("outer/class"), Some(Some("Yacht")));
    }

    #[test]
    fn duplicate_siblings_last_write_wins() {
        let root = parse("<ship><tag>A</tag><tag>B</tag></ship>");

        let record = flatten(&root, "");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("tag"), Some(Some("B")));
    }

    #[test]
    fn duplicate_nested_groups_merge_by_path() {
        let root = parse(
            "<ship><slots><weapon>Laser</weapon></slots><mid/><slots><weapon>Ion</weapon></slots></ship>",
        );

        let record = flatten(&root, "");

        let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["slots/weapon", "mid"]);
        assert_eq!(record.get("slots/weapon"), Some(Some("Ion")));
    }

    #[test]
    fn empty_leaf_records_absent_text() {
        let root = parse(r#"<ship name="Llama"><license/></ship>"#);
        let record = flatten_ship(&root);
        assert_eq!(record.get("license"), Some(None));
    }

    #[test]
    fn pre_order_traversal_preserves_document_order() {
        let root = parse(
            "<ship><base_type>Llama</base_type><stats><speed>1</speed><mass>2</mass></stats><price>3</price></ship>",
        );

        let record = flatten(&root, "");

        let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["base_type", "stats/speed", "stats/mass", "price"]);
    }

    #[test]
    fn every_leaf_contributes_one_entry() {
        let root = parse(
            "<ship name=\"Koala\"><class>Courier</class><health><armour>1</armour><shield>2</shield></health><slots><weapon size=\"small\"/><utility/></slots></ship>",
        );

        let record = flatten_ship(&root);

        assert_eq!(record.len(), root.leaf_count() + 1);
        assert_eq!(record.name(), root.attribute("name"));
    }

    #[test]
    fn missing_name_attribute_yields_null_name() {
        let root = parse("<ship><class>Yacht</class></ship>");
        let record = flatten_ship(&root);
        assert_eq!(record.get("name"), Some(None));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn name_leaf_overrides_seeded_attribute() {
        let root = parse(r#"<ship name="Llama"><name>Alpaca</name></ship>"#);
        let record = flatten_ship(&root);
        assert_eq!(record.len(), 1);
        assert_eq!(record.name(), Some("Alpaca"));
    }
}
