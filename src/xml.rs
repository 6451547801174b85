//! XML payload to nested mapping conversion.
//!
//! The API answers with documents such as
//!
//! ```xml
//! <ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
//!   <CommandResponse Type="namecheap.domains.dns.getHosts">
//!     <DomainDNSGetHostsResult Domain="example.com" IsUsingOurDNS="true">
//!       <host HostId="1" Name="@" Type="A" Address="192.0.2.1" TTL="1800" />
//!     </DomainDNSGetHostsResult>
//!   </CommandResponse>
//! </ApiResponse>
//! ```
//!
//! [`XmlElement::to_value`] turns an element into a [`serde_json::Value`]:
//! attributes and children share one map, repeated tags become arrays and bare
//! leaves collapse to their (type-guessed) text.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Map, Value};

use crate::error::{NamecheapError, NamecheapResult};

/// Key holding the text of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Parsed XML element with namespace prefixes removed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn to_value(&self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return match self.text() {
                Some(text) => guess_scalar(text),
                None => Value::Object(Map::new()),
            };
        }

        let mut map = Map::new();
        for (key, value) in &self.attributes {
            insert_or_append(&mut map, key, Value::String(value.clone()));
        }
        for child in &self.children {
            insert_or_append(&mut map, &child.name, child.to_value());
        }
        if let Some(text) = self.text() {
            map.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
        }
        Value::Object(map)
    }
}

fn insert_or_append(map: &mut Map<String, Value>, key: &str, value: Value) {
    match map.get_mut(key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key.to_string(), value);
        }
    }
}

/// Type-guess leaf text: integer, boolean word, or string.
///
/// Digit strings with a leading zero stay strings so postal codes and IDs survive.
pub fn guess_scalar(text: &str) -> Value {
    let is_int = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if is_int {
        if let Ok(n) = text.parse::<i64>() {
            return Value::from(n);
        }
    }

    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "enabled" => Value::Bool(true),
        "false" | "no" | "disabled" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

/// Parse a complete document and return its root element
pub fn parse_document(xml: &str) -> NamecheapResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("closing tag without matching opening tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(malformed("document ended before all elements were closed"));
    }
    root.ok_or_else(|| malformed("document has no root element"))
}

fn open_element(start: &BytesStart<'_>) -> NamecheapResult<XmlElement> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let raw_key = attr.key.as_ref();
        if raw_key == b"xmlns" || raw_key.starts_with(b"xmlns:") {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement { name, attributes, children: Vec::new(), text: String::new() })
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) -> NamecheapResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(malformed("document has more than one root element")),
    }
    Ok(())
}

fn malformed(reason: &str) -> NamecheapError {
    NamecheapError::MalformedResponse(format!("Failed to parse XML response: {}", reason))
}
