use crate::sbom_generation::domain::{MarkupElement, MarkupNode};
use crate::shared::Result;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Writes an element tree as a UTF-8 XML document
///
/// Output has an XML declaration, two-space indentation and Unix newlines.
/// Empty elements are written as a start/end pair, never self-closed.
pub fn write_document(root: &MarkupElement) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &MarkupElement) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    if element.children().is_empty() {
        // keeps the end tag on the same line as the start tag
        writer.write_event(Event::Text(BytesText::new("")))?;
    }
    for child in element.children() {
        match child {
            MarkupNode::Element(child) => write_element(writer, child)?,
            MarkupNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            MarkupNode::CData(text) if !text.contains("]]>") => {
                writer.write_event(Event::CData(BytesCData::new(text.as_str())))?
            }
            MarkupNode::CData(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// Parses an XML document into an element tree
///
/// Whitespace-only text (indentation between elements) is dropped, other
/// text is kept exactly as written. Comments, processing instructions and
/// the declaration are ignored.
pub fn parse_document(content: &str) -> Result<MarkupElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<MarkupElement> = Vec::new();
    let mut root: Option<MarkupElement> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(start_element(e)?),
            Event::Empty(ref e) => {
                let element = start_element(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| anyhow::anyhow!("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                if let Some(parent) = stack.last_mut() {
                    if !text.trim().is_empty() {
                        parent.push_node(MarkupNode::Text(text.into_owned()));
                    }
                }
            }
            Event::CData(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(e).into_owned();
                    parent.push_node(MarkupNode::CData(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        anyhow::bail!("element <{}> is not closed", open.name());
    }
    root.ok_or_else(|| anyhow::anyhow!("document has no root element"))
}

fn start_element(e: &BytesStart<'_>) -> Result<MarkupElement> {
    let mut element = MarkupElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element = element.with_attribute(key, value);
    }
    Ok(element)
}

fn attach(
    stack: &mut [MarkupElement],
    root: &mut Option<MarkupElement>,
    element: MarkupElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => anyhow::bail!("document has more than one root element"),
    }
    Ok(())
}
