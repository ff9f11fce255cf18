// src/infrastructure/xml_payload.rs
//
// XML payload decoding (quick-xml + serde)

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Decode an XML document whose root element must be `root`.
///
/// The document type describes the repeated child elements; a root with no
/// children decodes to an empty collection.
pub fn parse_xml_document<T: DeserializeOwned>(xml: &str, root: &str) -> AppResult<T> {
    let found = root_element_name(xml)?;
    if found != root {
        return Err(AppError::UnexpectedRoot {
            expected: root.to_string(),
            found,
        });
    }

    let document = quick_xml::de::from_str(xml)?;
    Ok(document)
}

/// Name of the first element in the document, skipping the declaration,
/// comments and whitespace
fn root_element_name(xml: &str) -> AppResult<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                return Ok(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
            }
            Event::Eof => {
                return Err(AppError::Other("XML payload has no root element".to_string()));
            }
            _ => {}
        }
    }
}
