mod common;

use common::transport_document;
use iris_transport_core::config::Config;
use iris_transport_core::validation::{parse_document, validate_root, validate_str};
use iris_transport_core::{ElementNode, ErrorKind, Shape, ValidationError};

fn kind_of(xml: &str) -> Option<ErrorKind> {
    validate_str(xml, "inline", &Config::default())
        .err()
        .map(|e| e.kind())
}

#[test]
fn scenario_valid_versions() {
    let xml = transport_document(
        "versions",
        "",
        r#"<transferProtocol protocolId="iris.lwz">
             <application protocolId="urn:x"><dataModel protocolId="urn:y"/></application>
           </transferProtocol>"#,
    );
    assert_eq!(
        validate_str(&xml, "inline", &Config::default()),
        Ok(Shape::Versions)
    );
}

#[test]
fn scenario_missing_protocol_id() {
    let xml = transport_document(
        "versions",
        "",
        r#"<transferProtocol>
             <application protocolId="urn:x"><dataModel protocolId="urn:y"/></application>
           </transferProtocol>"#,
    );
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeConstraint);
    assert!(err.chain().contains("missing required attribute protocolId"));
}

#[test]
fn scenario_octets_values() {
    let negative = transport_document("size", "", "<response><octets>-5</octets></response>");
    assert_eq!(kind_of(&negative), Some(ErrorKind::ValueRange));

    let text = transport_document("size", "", "<response><octets>abc</octets></response>");
    assert_eq!(kind_of(&text), Some(ErrorKind::ValueFormat));

    let both = transport_document(
        "size",
        "",
        "<request><exceedsMaximum/><octets>1</octets></request>",
    );
    assert_eq!(kind_of(&both), Some(ErrorKind::ElementConstraint));
}

#[test]
fn scenario_duplicate_languages() {
    for root in ["authenticationSuccess", "authenticationFailure"] {
        let xml = transport_document(
            root,
            "",
            r#"<description language="en">a</description><description language="en">b</description>"#,
        );
        assert_eq!(kind_of(&xml), Some(ErrorKind::Uniqueness), "{root}");

        let xml = transport_document(
            root,
            "",
            r#"<description language="en">a</description><description language="de">b</description><description language="en-GB">c</description>"#,
        );
        assert_eq!(kind_of(&xml), None, "{root}");
    }

    let xml = transport_document(
        "other",
        r#" type="x""#,
        r#"<description language="en">a</description><description language="en">b</description>"#,
    );
    assert_eq!(kind_of(&xml), Some(ErrorKind::Uniqueness));
}

#[test]
fn scenario_other_missing_type() {
    let xml = transport_document("other", "", "");
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    assert!(matches!(
        err.cause(),
        Some(ValidationError::MissingAttribute { name, .. }) if name == "type"
    ));
}

#[test]
fn unexpected_attribute_names_the_offending_set() {
    let xml = transport_document(
        "versions",
        "",
        r#"<transferProtocol protocolId="a" zeta="1" alpha="2"/>"#,
    );
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    match err.cause() {
        Some(ValidationError::UnexpectedAttributes { names, .. }) => {
            assert_eq!(names.iter().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
        }
        other => panic!("expected UnexpectedAttributes, got {other:?}"),
    }
}

#[test]
fn children_outside_the_transport_namespace_are_unexpected() {
    let xml = transport_document(
        "size",
        "",
        r#"<response xmlns="urn:elsewhere"><octets>1</octets></response>"#,
    );
    assert_eq!(kind_of(&xml), Some(ErrorKind::ElementConstraint));
}

#[test]
fn pre_parsed_trees_validate_repeatably_without_mutation() {
    let xml = transport_document(
        "authenticationSuccess",
        "",
        r#"<description language="en">ok</description><data>QUJD</data>"#,
    );
    let doc = parse_document(&xml, "inline").expect("parse");
    let root = doc.get_root_element().expect("root");
    let before = (root.tag(), root.attributes(), root.children().len());

    let config = Config::default();
    let first = validate_root(&root, "inline", &config);
    let second = validate_root(&root, "inline", &config);
    assert_eq!(first, Ok(Shape::AuthenticationSuccess));
    assert_eq!(first, second);
    assert_eq!(before, (root.tag(), root.attributes(), root.children().len()));
    assert_eq!(doc.to_string(), parse_document(&xml, "again").expect("reparse").to_string());
}

#[test]
fn namespaced_type_does_not_satisfy_other() {
    let xml = transport_document("other", r#" xmlns:x="urn:foo" x:type="bar""#, "");
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    assert!(matches!(
        err.cause(),
        Some(ValidationError::MissingAttribute { name, .. }) if name == "type"
    ));
}

#[test]
fn namespaced_protocol_id_does_not_satisfy_transfer_protocol() {
    let xml = transport_document(
        "versions",
        r#" xmlns:x="urn:foo""#,
        r#"<transferProtocol x:protocolId="iris.lwz"/>"#,
    );
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    match err.cause() {
        Some(ValidationError::MissingAttribute { element, name }) => {
            assert_eq!(name, "protocolId");
            assert!(element.matches(common::NS, "transferProtocol"));
        }
        other => panic!("expected missing protocolId, got {other:?}"),
    }

    let xml = transport_document(
        "versions",
        r#" xmlns:x="urn:foo""#,
        r#"<transferProtocol protocolId="iris.lwz" x:protocolId="iris.lwz"/>"#,
    );
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    match err.cause() {
        Some(ValidationError::UnexpectedAttributes { names, .. }) => {
            assert_eq!(names.iter().collect::<Vec<_>>(), vec!["{urn:foo}protocolId"]);
        }
        other => panic!("expected UnexpectedAttributes, got {other:?}"),
    }
}

#[test]
fn namespaced_language_beside_language_is_unexpected() {
    let xml = transport_document(
        "authenticationFailure",
        r#" xmlns:x="urn:foo""#,
        r#"<description language="en" x:language="fr">Invalid credentials</description>"#,
    );
    let err = validate_str(&xml, "inline", &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeConstraint);
    match err.cause() {
        Some(ValidationError::UnexpectedAttributes { element, names }) => {
            assert!(element.matches(common::NS, "description"));
            assert_eq!(names.iter().collect::<Vec<_>>(), vec!["{urn:foo}language"]);
        }
        other => panic!("expected UnexpectedAttributes, got {other:?}"),
    }
}

#[test]
fn entity_references_expand_in_values() {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE size [<!ENTITY n "1211">]>
<size xmlns="{}"><response><octets>&n;</octets></response></size>"#,
        common::NS
    );
    assert_eq!(validate_str(&xml, "inline", &Config::default()), Ok(Shape::Size));

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE size [<!ENTITY n "-5">]>
<size xmlns="{}"><response><octets>&n;</octets></response></size>"#,
        common::NS
    );
    assert_eq!(kind_of(&xml), Some(ErrorKind::ValueRange));
}

#[test]
fn grouped_octets_conform() {
    let xml = transport_document("size", "", "<request><octets>1_000</octets></request>");
    assert_eq!(kind_of(&xml), None);
    let xml = transport_document("size", "", "<request><octets>1__000</octets></request>");
    assert_eq!(kind_of(&xml), Some(ErrorKind::ValueFormat));
}
