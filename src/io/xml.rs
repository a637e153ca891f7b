use std::io::{BufReader, Read, Write};

use ::xml::name::OwnedName;
use ::xml::reader::{EventReader, XmlEvent};
use ::xml::writer::{EmitterConfig, XmlEvent as WriterEvent};

use crate::geo_3d::Point;
use crate::io::{self, IoError, IoErrorType, IoResult};

/// A node of a parsed XML document.
/// Keeps the element name, its attributes in document order, and its child elements.
/// Text content is dropped, the quad files only carry data in attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}
impl XmlNode {
    /// Create a new node with no attributes and no children.
    pub fn new(name: &str) -> Self {
        XmlNode{
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing an existing value with the same name.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, old_value)) => *old_value = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Append a child node.
    pub fn add_node(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_num_nodes(&self) -> usize {
        self.children.len()
    }

    pub fn get_node(&self, i: usize) -> Option<&XmlNode> {
        self.children.get(i)
    }

    pub fn nodes(&self) -> std::slice::Iter<'_, XmlNode> {
        self.children.iter()
    }

    /// Get the raw string value of an attribute.
    pub fn get_attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get a boolean attribute.
    /// Returns `default` if the attribute is missing, `None` if it is present but not a boolean.
    pub fn get_attr_bool(&self, name: &str, default: bool) -> Option<bool> {
        match self.get_attr_str(name) {
            Some(value) => parse_bool(value),
            None => Some(default),
        }
    }

    /// Get a point attribute written as three numbers, see `Point::parse_literal`.
    /// Returns `None` if the attribute is missing, `Some(None)` if it is present but not a point.
    pub fn get_attr_point(&self, name: &str) -> Option<Option<Point>> {
        self.get_attr_str(name).map(Point::parse_literal)
    }

    /// Serialize the tree to an XML document string.
    pub fn to_xml_string(&self, indent: bool) -> IoResult<String> {
        let mut buffer = Vec::<u8>::new();
        write_tree(&mut buffer, self, indent).map_err(|cause| IoError{file: None, cause})?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Parse a boolean attribute value.
/// Accepts `true/yes/1/#t` and `false/no/0/#f` (case-insensitive), an empty value is false.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "#t" => Some(true),
        "false" | "no" | "0" | "#f" | "" => Some(false),
        _ => None,
    }
}

/// Load an XML file into a node tree.
/// Returns the root element.
pub fn create_xml_tree(path: &str) -> IoResult<XmlNode> {
    let file = io::open(path)?;
    parse_tree(BufReader::new(file)).map_err(|cause| IoError::with_file(path, cause))
}

/// Parse an XML document held in memory.
/// `source` names the document in errors.
pub fn parse_xml_str(text: &str, source: &str) -> IoResult<XmlNode> {
    parse_tree(text.as_bytes()).map_err(|cause| IoError::with_file(source, cause))
}

/// Write a node tree to an XML file.
pub fn write_xml_tree(path: &str, root: &XmlNode, indent: bool) -> IoResult<()> {
    let file = io::create(path)?;
    write_tree(file, root, indent).map_err(|cause| IoError::with_file(path, cause))
}

fn parse_tree<R: Read>(source: R) -> Result<XmlNode, IoErrorType> {
    let mut stack = Vec::<XmlNode>::new();
    let mut root = None;

    for event in EventReader::new(source) {
        match event.map_err(IoErrorType::Xml)? {
            XmlEvent::StartElement { name, attributes, .. } => {
                let mut node = XmlNode::new(&qualified_name(&name));
                for attribute in attributes {
                    node.set_attr(&qualified_name(&attribute.name), &attribute.value);
                }
                stack.push(node);
            },
            XmlEvent::EndElement { .. } => {
                let node = match stack.pop() {
                    Some(node) => node,
                    None => return Err(IoErrorType::StringOnly("Unbalanced end element".to_string())),
                };
                match stack.last_mut() {
                    Some(parent) => parent.add_node(node),
                    None => root = Some(node),
                }
            },
            _ => {},
        }
    }

    root.ok_or_else(|| IoErrorType::StringOnly("Document has no root element".to_string()))
}

/// Name as written in the document, with its prefix if any.
fn qualified_name(name: &OwnedName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local_name),
        None => name.local_name.clone(),
    }
}

fn write_tree<W: Write>(sink: W, root: &XmlNode, indent: bool) -> Result<(), IoErrorType> {
    let mut writer = EmitterConfig::new()
        .perform_indent(indent)
        .create_writer(sink);
    write_node(&mut writer, root).map_err(IoErrorType::XmlWrite)
}

fn write_node<W: Write>(writer: &mut ::xml::writer::EventWriter<W>, node: &XmlNode) -> ::xml::writer::Result<()> {
    let mut element = WriterEvent::start_element(node.name.as_str());
    for (name, value) in node.attributes.iter() {
        element = element.attr(name.as_str(), value.as_str());
    }
    writer.write(element)?;
    for child in node.children.iter() {
        write_node(writer, child)?;
    }
    writer.write(WriterEvent::end_element())
}
