//! Document mutation capability.
//!
//! DESIGN
//! ======
//! The synchronizer never touches a browser DOM directly. It asks a
//! [`DocumentHost`] for the handful of reads and writes it needs, addressing
//! elements by id or CSS selector. New elements are described as
//! [`ElementSpec`] trees so each host builds them with its own primitives.
//! [`MemoryDocument`] is a host backed by plain data, used natively.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::HostError;

/// Where a new element is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    /// The document `<body>`.
    Body,
    /// The first element matching a selector.
    Container(String),
}

/// A detached element tree to be created by a host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes in insertion order; names are unique.
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove `class`, like `classList.toggle(class, on)`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    /// This element or a descendant with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ElementSpec> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut ElementSpec> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// First descendant (not self) carrying `class`, in document order.
    pub fn descendant_with_class_mut(&mut self, class: &str) -> Option<&mut ElementSpec> {
        for child in &mut self.children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.descendant_with_class_mut(class) {
                return Some(found);
            }
        }
        None
    }
}

/// Reads and writes the synchronizer performs against a live document.
pub trait DocumentHost {
    /// Attribute on the root (`<html>`) element.
    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError>;

    fn body_has_class(&self, class: &str) -> bool;
    /// Add or remove a class on `<body>`.
    fn set_body_class(&mut self, class: &str, on: bool) -> Result<(), HostError>;

    fn has_element(&self, id: &str) -> bool;
    /// Whether any element matches `selector`.
    fn has_container(&self, selector: &str) -> bool;

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError>;
    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), HostError>;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError>;
    /// Replace the text of the first descendant of `#id` carrying `class`.
    fn set_descendant_text(&mut self, id: &str, class: &str, text: &str) -> Result<(), HostError>;

    /// Build `element` and append it under `parent`.
    fn append(&mut self, parent: &Mount, element: &ElementSpec) -> Result<(), HostError>;

    /// `href` attributes of the elements matching `selector`, in document order.
    fn link_hrefs(&self, selector: &str) -> Vec<Option<String>>;
    /// Add `class` to the `index`-th element matching `selector`.
    fn mark_link(&mut self, selector: &str, index: usize, class: &str) -> Result<(), HostError>;
}

/// An element appended to a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounted {
    pub parent: Mount,
    pub element: ElementSpec,
}

/// Plain-data [`DocumentHost`].
///
/// Selectors are opaque keys: containers and link lists are registered under
/// the exact selector string the synchronizer will ask for.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root_attributes: BTreeMap<String, String>,
    body_classes: Vec<String>,
    containers: BTreeSet<String>,
    links: BTreeMap<String, Vec<ElementSpec>>,
    mounted: Vec<Mounted>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element matching `selector` that children can be appended to.
    #[must_use]
    pub fn with_container(mut self, selector: &str) -> Self {
        self.containers.insert(selector.to_owned());
        self
    }

    /// Register anchors matching `selector` with the given `href`s.
    #[must_use]
    pub fn with_links(mut self, selector: &str, hrefs: &[Option<&str>]) -> Self {
        let anchors = hrefs
            .iter()
            .map(|href| match href {
                Some(href) => ElementSpec::new("a").with_attr("href", href),
                None => ElementSpec::new("a"),
            })
            .collect();
        self.links.insert(selector.to_owned(), anchors);
        self
    }

    /// Pre-render an element as if it came with the page markup.
    #[must_use]
    pub fn with_element(mut self, parent: Mount, element: ElementSpec) -> Self {
        self.mounted.push(Mounted { parent, element });
        self
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&ElementSpec> {
        self.mounted.iter().find_map(|m| m.element.find(id))
    }

    #[must_use]
    pub fn links(&self, selector: &str) -> &[ElementSpec] {
        self.links.get(selector).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn mounted(&self) -> &[Mounted] {
        &self.mounted
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut ElementSpec, HostError> {
        self.mounted
            .iter_mut()
            .find_map(|m| m.element.find_mut(id))
            .ok_or_else(|| HostError::MissingElement(id.to_owned()))
    }
}

impl DocumentHost for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.root_attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.iter().any(|c| c == class)
    }

    fn set_body_class(&mut self, class: &str, on: bool) -> Result<(), HostError> {
        if on {
            if !self.body_has_class(class) {
                self.body_classes.push(class.to_owned());
            }
        } else {
            self.body_classes.retain(|c| c != class);
        }
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn has_container(&self, selector: &str) -> bool {
        self.containers.contains(selector)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError> {
        self.element_mut(id)?.text = Some(text.to_owned());
        Ok(())
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), HostError> {
        self.element_mut(id)?.set_class(class, on);
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError> {
        self.element_mut(id)?.set_attribute(name, value);
        Ok(())
    }

    fn set_descendant_text(&mut self, id: &str, class: &str, text: &str) -> Result<(), HostError> {
        let child = self
            .element_mut(id)?
            .descendant_with_class_mut(class)
            .ok_or_else(|| HostError::MissingElement(format!("#{id} .{class}")))?;
        child.text = Some(text.to_owned());
        Ok(())
    }

    fn append(&mut self, parent: &Mount, element: &ElementSpec) -> Result<(), HostError> {
        if let Mount::Container(selector) = parent {
            if !self.has_container(selector) {
                return Err(HostError::MissingElement(selector.clone()));
            }
        }
        self.mounted.push(Mounted { parent: parent.clone(), element: element.clone() });
        Ok(())
    }

    fn link_hrefs(&self, selector: &str) -> Vec<Option<String>> {
        self.links(selector).iter().map(|a| a.attribute("href").map(str::to_owned)).collect()
    }

    fn mark_link(&mut self, selector: &str, index: usize, class: &str) -> Result<(), HostError> {
        let anchor = self
            .links
            .get_mut(selector)
            .and_then(|anchors| anchors.get_mut(index))
            .ok_or_else(|| HostError::MissingElement(format!("{selector}[{index}]")))?;
        anchor.set_class(class, true);
        Ok(())
    }
}
