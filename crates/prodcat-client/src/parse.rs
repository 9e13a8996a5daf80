//! Body parsing for the two negotiated formats.
//!
//! The format is the one requested in `Accept`; the body is never sniffed.

use prodcat_core::Format;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Value;

use crate::error::ClientError;
use crate::xml::XmlElement;

/// Message carried by every XML [`ClientError::Parse`].
pub const MALFORMED_XML: &str = "malformed XML";

/// A parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(Value),
    /// The document (root) element.
    Xml(XmlElement),
}

/// Parses `body` as `format`.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] carrying the raw body if it is not valid
/// `format`.
pub fn parse_body(body: &str, format: Format) -> Result<Document, ClientError> {
    match format {
        Format::Json => parse_json(body).map(Document::Json),
        Format::Xml => parse_xml(body).map(Document::Xml),
    }
}

/// Strict JSON parse.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] with the `serde_json` message.
pub fn parse_json(body: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "response body is not valid JSON");
        ClientError::parse(Format::Json, e.to_string(), body)
    })
}

/// Parses an XML document into its root element.
///
/// Mismatched or unclosed tags, broken attribute syntax, a missing root and
/// content after the root element are rejected rather than yielding a
/// partial tree.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] with message [`MALFORMED_XML`].
pub fn parse_xml(body: &str) -> Result<XmlElement, ClientError> {
    let mut reader = Reader::from_str(body);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(malformed(body, "element after document root"));
                }
                check_attributes(&e, body)?;
                stack.push(XmlElement::new(tag_name(e.name().as_ref())));
            }
            Ok(Event::Empty(e)) => {
                check_attributes(&e, body)?;
                let element = XmlElement::new(tag_name(e.name().as_ref()));
                attach(&mut stack, &mut root, element, body)?;
            }
            Ok(Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return Err(malformed(body, "closing tag without opening tag"));
                };
                attach(&mut stack, &mut root, element, body)?;
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| malformed(body, &err.to_string()))?;
                push_text(&mut stack, &text, body)?;
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_text(&mut stack, &text, body)?;
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctype.
            Ok(_) => {}
            Err(e) => return Err(malformed(body, &e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(malformed(body, "unclosed element at end of document"));
    }
    root.ok_or_else(|| malformed(body, "no root element"))
}

// Attribute values are not kept, but quick-xml only validates them on read.
fn check_attributes(start: &BytesStart<'_>, body: &str) -> Result<(), ClientError> {
    for attr in start.attributes() {
        attr.map_err(|err| malformed(body, &err.to_string()))?;
    }
    Ok(())
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
    body: &str,
) -> Result<(), ClientError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(malformed(body, "element after document root"));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str, body: &str) -> Result<(), ClientError> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed(body, "text outside document root")),
    }
}

fn malformed(body: &str, detail: &str) -> ClientError {
    tracing::warn!(detail, "response body is not well-formed XML");
    ClientError::parse(Format::Xml, MALFORMED_XML, body)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
