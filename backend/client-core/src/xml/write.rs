use super::XmlNode;
use crate::error::XmlError;

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

pub(super) fn to_string(node: &XmlNode) -> Result<String, XmlError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_node(&mut writer, node)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| XmlError::write(e.to_string()))
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &XmlNode) -> Result<(), XmlError> {
    let mut start = BytesStart::new(node.name.as_str());
    for (name, value) in &node.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| XmlError::write(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| XmlError::write(e.to_string()))?;

    if !node.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&node.text)))
            .map_err(|e| XmlError::write(e.to_string()))?;
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(|e| XmlError::write(e.to_string()))
}
