use super::XmlNode;
use crate::error::XmlError;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// Parse a document into its root element.
pub fn parse(xml: &str) -> Result<XmlNode, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::parse(format!("at byte {}: {e}", reader.buffer_position())))?;

        match event {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let node = element_from(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| XmlError::parse("closing tag without an open element"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(|e| XmlError::parse(e.to_string()))?;
                    open.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(XmlError::parse(format!(
            "unexpected end of document inside <{}>",
            unclosed.name
        )));
    }

    root.ok_or_else(|| XmlError::parse("document has no root element"))
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlNode, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| XmlError::parse(e.to_string()))?
        .to_string();

    let mut node = XmlNode::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlError::parse(e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| XmlError::parse(e.to_string()))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlError::parse(e.to_string()))?
            .into_owned();
        node.attributes.push((key, value));
    }

    Ok(node)
}

fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(XmlError::parse(format!(
            "second root element <{}>",
            node.name
        ))),
    }
}
