// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Payload decoding. Turns raw text into transfer records and nothing more:
// no validation, no defaults beyond what the record types declare.
//
// RULES:
// - Source order is preserved
// - A payload that cannot be decoded fails the whole call
// - Infrastructure is replaceable

pub mod json_payload;
pub mod xml_payload;

pub use json_payload::parse_json_collection;
pub use xml_payload::parse_xml_document;
