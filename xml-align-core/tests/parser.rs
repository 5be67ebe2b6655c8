use std::path::PathBuf;

use xml_align_core::parse_file;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_attributes_text_and_nested_elements() {
    let node = parse_file(&fixture("fixtures/template.xml")).expect("parse should succeed");
    assert_eq!(node.tag, "config");
    assert_eq!(node.attribute("version"), Some("2.1"));

    let system = node.get_child("system").expect("system should exist");
    assert_eq!(
        system.get_child("hostname").and_then(|n| n.text.as_deref()),
        Some("edge-01")
    );

    let interfaces = node.get_child("interfaces").expect("interfaces should exist");
    let interface_nodes = interfaces.get_children("interface");
    assert_eq!(interface_nodes.len(), 3);
    assert_eq!(interface_nodes[0].attribute("name"), Some("wan"));
}

#[test]
fn attribute_document_order_is_preserved() {
    let node = parse_file(&fixture("fixtures/template.xml")).expect("parse should succeed");
    let interface = node
        .get_child("interfaces")
        .and_then(|n| n.get_children("interface").first().copied().cloned())
        .expect("first interface should exist");

    let names: Vec<&str> = interface
        .attributes
        .iter()
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(names, vec!["name", "device"]);
}

#[test]
fn rejects_malformed_documents() {
    assert!(xml_align_core::parse(b"<a><b></a>").is_err());
    assert!(xml_align_core::parse(b"<a/><b/>").is_err());
    assert!(xml_align_core::parse(b"").is_err());
}
