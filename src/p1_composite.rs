// Pattern 1: Composite
// An article holds messages, messages hold replies. Every node renders its own
// label and then its children, depth-first.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Container capability
// ============================================================================

/// Children are shared handles so a caller can keep one and later remove it
/// by identity, or attach replies to it after it was inserted.
pub type MessageRef = Rc<RefCell<Message>>;

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ContentContainer {
    elements: Vec<MessageRef>,
}

impl ContentContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: MessageRef) {
        self.elements.push(element);
    }

    /// Removes `element` if this exact instance is a direct child.
    /// Returns `false` and leaves the sequence untouched otherwise.
    pub fn remove(&mut self, element: &MessageRef) -> bool {
        match self.elements.iter().position(|e| Rc::ptr_eq(e, element)) {
            Some(index) => {
                self.elements.remove(index);
                trace!(index, "removed composite element");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&MessageRef> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRef> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentContainer {
    type Item = &'a MessageRef;
    type IntoIter = std::slice::Iter<'a, MessageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

pub trait Container {
    fn container(&self) -> &ContentContainer;
    fn container_mut(&mut self) -> &mut ContentContainer;

    /// The line this node prints for itself.
    fn label(&self) -> String;

    fn add_element(&mut self, element: MessageRef) {
        self.container_mut().add(element);
    }

    fn remove_element(&mut self, element: &MessageRef) -> bool {
        self.container_mut().remove(element)
    }

    fn elements(&self) -> &ContentContainer {
        self.container()
    }

    fn display(&self, out: &mut Transcript) {
        out.line(self.label());
        for element in self.container() {
            element.borrow().display(out);
        }
    }
}

// ============================================================================
// Leaf / branch: Message
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Message {
    content: String,
    elements: ContentContainer,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            elements: ContentContainer::new(),
        }
    }

    pub fn shared(content: impl Into<String>) -> MessageRef {
        Rc::new(RefCell::new(Self::new(content)))
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Container for Message {
    fn container(&self) -> &ContentContainer {
        &self.elements
    }

    fn container_mut(&mut self) -> &mut ContentContainer {
        &mut self.elements
    }

    fn label(&self) -> String {
        self.content.clone()
    }
}

// ============================================================================
// Root: Article
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Article {
    title: String,
    elements: ContentContainer,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: ContentContainer::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Container for Article {
    fn container(&self) -> &ContentContainer {
        &self.elements
    }

    fn container_mut(&mut self) -> &mut ContentContainer {
        &mut self.elements
    }

    fn label(&self) -> String {
        format!("Стаття: {}", self.title)
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let mut article = Article::new("Навчальна стаття");

    let useful = Message::shared("Дуже корисна стаття");
    article.add_element(Rc::clone(&useful));
    article.add_element(Message::shared("Дякую за чудовий матеріал!"));

    useful
        .borrow_mut()
        .add_element(Message::shared("Відповідь: Згоден!"));

    article.display(out);
    out.dump(article.elements())
}

// ============================================================================
// Tests
// ============================================================================
