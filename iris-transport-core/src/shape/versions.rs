use tracing::trace;

use crate::error::ValidationError;
use crate::node::ElementNode;
use crate::schema::tables::{
    APPLICATION_ATTRIBUTES, APPLICATION_CHILDREN, DATA_MODEL_ATTRIBUTES, NO_ATTRIBUTES,
    NO_CHILDREN, TRANSFER_PROTOCOL_ATTRIBUTES, TRANSFER_PROTOCOL_CHILDREN, VERSIONS_CHILDREN,
};
use crate::verify::{verify_attributes, verify_elements};

/// `versions → transferProtocol → application → dataModel`, visited in
/// document order.
pub(crate) fn validate_versions<E: ElementNode>(root: &E) -> Result<(), ValidationError> {
    trace!("entering versions");
    verify_attributes(root, NO_ATTRIBUTES)?;
    verify_elements(root, VERSIONS_CHILDREN)?;
    for transfer_protocol in root.children() {
        validate_transfer_protocol(&transfer_protocol)?;
        for application in transfer_protocol.children() {
            validate_application(&application)?;
            for data_model in application.children() {
                validate_data_model(&data_model)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_transfer_protocol<E: ElementNode>(
    transfer_protocol: &E,
) -> Result<(), ValidationError> {
    trace!("entering transferProtocol");
    verify_elements(transfer_protocol, TRANSFER_PROTOCOL_CHILDREN)?;
    verify_attributes(transfer_protocol, TRANSFER_PROTOCOL_ATTRIBUTES)
}

pub(crate) fn validate_application<E: ElementNode>(application: &E) -> Result<(), ValidationError> {
    trace!("entering application");
    verify_elements(application, APPLICATION_CHILDREN)?;
    verify_attributes(application, APPLICATION_ATTRIBUTES)
}

pub(crate) fn validate_data_model<E: ElementNode>(data_model: &E) -> Result<(), ValidationError> {
    trace!("entering dataModel");
    verify_elements(data_model, NO_CHILDREN)?;
    verify_attributes(data_model, DATA_MODEL_ATTRIBUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::schema::TRANSPORT_NS;
    use libxml::parser::Parser;
    use libxml::tree::{Document, Node};

    const VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<versions xmlns="urn:ietf:params:xml:ns:iris-transport">
  <transferProtocol protocolId="iris.lwz" authenticationIds="PLAIN EXTERNAL">
    <application protocolId="urn:ietf:params:xml:ns:iris1"
      extensionIds="http://example.com/SIMPLEBAG">
      <dataModel protocolId="urn:ietf:params:xml:ns:dchk1"/>
      <dataModel protocolId="urn:ietf:params:xml:ns:dreg1"/>
    </application>
  </transferProtocol>
</versions>"#;

    const INVALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<versions xmlns="urn:ietf:params:xml:ns:iris-transport">
  <transferProtocol authenticationIds="PLAIN EXTERNAL">
  </transferProtocol>
  <transferProtocol protocolId="iris.lwz" authenticaastionIds="PLAIN EXTERNAL">
  </transferProtocol>
  <transferProtocol protocolId="iris.lwz" authenticationIds="PLAIN EXTERNAL">
    <application protocolId="urn:ietf:params:xml:ns:iris1" extensaaionIds="http://example.com/SIMPLEBAG">
    </application>
    <application extensionIds="http://example.com/SIMPLEBAG">
    </application>
    <application protocolId="urn:ietf:params:xml:ns:iris1" extensionIds="http://example.com/SIMPLEBAG">
      <dataModel />
      <dataModel protocolId="urn:ietf:params:xml:ns:dchk1" message="hello"/>
      <dataModel protocolId="urn:ietf:params:xml:ns:dchk1"><note>this is a note</note></dataModel>
      <note>this is a note</note>
    </application>
    <note>this is a note</note>
  </transferProtocol>
</versions>"#;

    fn parse(xml: &str) -> Document {
        Parser::default().parse_string(xml).expect("parse versions")
    }

    fn children_named(parent: &Node, name: &str) -> Vec<Node> {
        parent
            .get_child_elements()
            .into_iter()
            .filter(|n| n.tag().matches(TRANSPORT_NS, name))
            .collect()
    }

    fn kind(result: Result<(), ValidationError>) -> ErrorKind {
        result.expect_err("expected a violation").kind()
    }

    #[test]
    fn valid_versions_conform() {
        let doc = parse(VALID);
        let root = doc.get_root_element().expect("root");
        validate_versions(&root).expect("valid versions");
    }

    #[test]
    fn first_violation_is_the_missing_protocol_id() {
        let doc = parse(INVALID);
        let root = doc.get_root_element().expect("root");
        let err = validate_versions(&root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeConstraint);
        assert!(matches!(err, ValidationError::MissingAttribute { ref name, .. } if name == "protocolId"));
    }

    #[test]
    fn transfer_protocol_cases() {
        let doc = parse(INVALID);
        let root = doc.get_root_element().expect("root");
        let protocols = children_named(&root, "transferProtocol");

        assert!(matches!(
            validate_transfer_protocol(&protocols[0]),
            Err(ValidationError::MissingAttribute { .. })
        ));
        assert!(matches!(
            validate_transfer_protocol(&protocols[1]),
            Err(ValidationError::UnexpectedAttributes { .. })
        ));
        assert!(matches!(
            validate_transfer_protocol(&protocols[2]),
            Err(ValidationError::UnexpectedElements { .. })
        ));
    }

    #[test]
    fn application_cases() {
        let doc = parse(INVALID);
        let root = doc.get_root_element().expect("root");
        let protocols = children_named(&root, "transferProtocol");
        let applications = children_named(&protocols[2], "application");

        assert!(matches!(
            validate_application(&applications[0]),
            Err(ValidationError::UnexpectedAttributes { .. })
        ));
        assert!(matches!(
            validate_application(&applications[1]),
            Err(ValidationError::MissingAttribute { .. })
        ));
        assert_eq!(kind(validate_application(&applications[2])), ErrorKind::ElementConstraint);
    }

    #[test]
    fn data_model_cases() {
        let doc = parse(INVALID);
        let root = doc.get_root_element().expect("root");
        let protocols = children_named(&root, "transferProtocol");
        let applications = children_named(&protocols[2], "application");
        let models = children_named(&applications[2], "dataModel");

        assert!(matches!(
            validate_data_model(&models[0]),
            Err(ValidationError::MissingAttribute { .. })
        ));
        assert!(matches!(
            validate_data_model(&models[1]),
            Err(ValidationError::UnexpectedAttributes { .. })
        ));
        assert!(matches!(
            validate_data_model(&models[2]),
            Err(ValidationError::UnexpectedElements { .. })
        ));
    }

    #[test]
    fn versions_requires_a_transfer_protocol() {
        let doc = parse(r#"<versions xmlns="urn:ietf:params:xml:ns:iris-transport"/>"#);
        let root = doc.get_root_element().expect("root");
        match validate_versions(&root) {
            Err(ValidationError::MissingElement { found, min, .. }) => assert_eq!((found, min), (0, 1)),
            other => panic!("expected MissingElement, got {other:?}"),
        }
    }

    #[test]
    fn versions_root_attributes_are_checked_first() {
        let doc = parse(r#"<versions xmlns="urn:ietf:params:xml:ns:iris-transport" id="1"/>"#);
        let root = doc.get_root_element().expect("root");
        assert_eq!(kind(validate_versions(&root)), ErrorKind::AttributeConstraint);
    }

    #[test]
    fn later_siblings_are_still_visited() {
        let xml = r#"<versions xmlns="urn:ietf:params:xml:ns:iris-transport">
  <transferProtocol protocolId="a"/>
  <transferProtocol protocolId="b">
    <application protocolId="c"><dataModel protocolId="d" bogus="1"/></application>
  </transferProtocol>
</versions>"#;
        let doc = parse(xml);
        let root = doc.get_root_element().expect("root");
        match validate_versions(&root) {
            Err(ValidationError::UnexpectedAttributes { element, names }) => {
                assert!(element.matches(TRANSPORT_NS, "dataModel"));
                assert!(names.contains("bogus"));
            }
            other => panic!("expected UnexpectedAttributes, got {other:?}"),
        }
    }
}
