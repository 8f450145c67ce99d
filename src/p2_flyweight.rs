// Pattern 2: Flyweight
// Products point at a shared product group instead of owning a copy of it.
// The registry hands out exactly one instance per group name.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Shared state: Group
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    name: String,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display(&self, out: &mut Transcript) {
        out.line(format!("Група: {}", self.name));
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Canonical instance per group name. Entries are never evicted, so a handle
/// obtained earlier stays identical to every later lookup of the same name.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, Rc<Group>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Rc<Group> {
        if let Some(group) = self.groups.get(name) {
            trace!(name, "reusing shared group");
            return Rc::clone(group);
        }

        debug!(name, "creating shared group");
        let group = Rc::new(Group {
            name: name.to_string(),
        });
        self.groups.insert(name.to_string(), Rc::clone(&group));
        group
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// Unique state: Product
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Product {
    name: String,
    group: Rc<Group>,
}

impl Product {
    pub fn new(name: impl Into<String>, group: Rc<Group>) -> Self {
        Self {
            name: name.into(),
            group,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &Rc<Group> {
        &self.group
    }

    pub fn shares_group(&self, other: &Product) -> bool {
        Rc::ptr_eq(&self.group, &other.group)
    }

    pub fn display(&self, out: &mut Transcript) {
        out.line(format!("Продукт: {}, Група: {}", self.name, self.group.name));
    }
}

/// Products whose group is the very instance `group`, in input order.
pub fn products_in_group<'a>(products: &'a [Product], group: &Rc<Group>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| Rc::ptr_eq(&product.group, group))
        .collect()
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let mut registry = GroupRegistry::new();

    let electronics = registry.create("Електроніка");
    let books = registry.create("Книги");
    let electronics2 = registry.create("Електроніка");

    out.dump(&[&electronics, &books, &electronics2])?;
    out.line(Rc::ptr_eq(&electronics, &electronics2).to_string());

    let products = vec![
        Product::new("Ноутбук", Rc::clone(&electronics)),
        Product::new("Навушники", Rc::clone(&electronics)),
        Product::new("Воно", Rc::clone(&books)),
        Product::new("Смартфон", registry.create("Електроніка")),
    ];

    for product in &products {
        product.display(out);
    }

    out.line(products[0].shares_group(&products[3]).to_string());

    let in_electronics = products_in_group(&products, &registry.create("Електроніка"));
    out.dump(&in_electronics)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_name_same_instance() {
        let mut registry = GroupRegistry::new();
        let a = registry.create("Книги");
        let b = registry.create("Книги");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names_distinct_instances() {
        let mut registry = GroupRegistry::new();
        let a = registry.create("Книги");
        let b = registry.create("Електроніка");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Книги"));
        assert!(!registry.contains("Іграшки"));
    }

    #[test]
    fn test_separate_registries_do_not_share() {
        let mut first = GroupRegistry::new();
        let mut second = GroupRegistry::new();
        assert!(!Rc::ptr_eq(&first.create("Книги"), &second.create("Книги")));
    }

    #[test]
    fn test_products_share_allocation() {
        let mut registry = GroupRegistry::new();
        let laptop = Product::new("Ноутбук", registry.create("Електроніка"));
        let phone = Product::new("Смартфон", registry.create("Електроніка"));
        let novel = Product::new("Воно", registry.create("Книги"));

        assert!(laptop.shares_group(&phone));
        assert!(!laptop.shares_group(&novel));
        // Registry + two products.
        assert_eq!(Rc::strong_count(laptop.group()), 3);
    }

    #[test]
    fn test_products_in_group_uses_identity() {
        let mut registry = GroupRegistry::new();
        let products = vec![
            Product::new("Ноутбук", registry.create("Електроніка")),
            Product::new("Воно", registry.create("Книги")),
            Product::new("Смартфон", registry.create("Електроніка")),
        ];

        let found = products_in_group(&products, &registry.create("Електроніка"));
        let names: Vec<&str> = found.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ноутбук", "Смартфон"]);

        // Equal by value but not the registry's instance.
        let impostor = Rc::new(Group {
            name: "Електроніка".to_string(),
        });
        assert!(products_in_group(&products, &impostor).is_empty());
    }

    #[test]
    fn test_display_lines() {
        let mut registry = GroupRegistry::new();
        let mut out = Transcript::new();
        registry.create("Книги").display(&mut out);
        Product::new("Воно", registry.create("Книги")).display(&mut out);
        assert_eq!(out.lines(), ["Група: Книги", "Продукт: Воно, Група: Книги"]);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        let lines = out.lines();

        let product_lines: Vec<&String> =
            lines.iter().filter(|l| l.starts_with("Продукт:")).collect();
        assert_eq!(
            product_lines,
            [
                "Продукт: Ноутбук, Група: Електроніка",
                "Продукт: Навушники, Група: Електроніка",
                "Продукт: Воно, Група: Книги",
                "Продукт: Смартфон, Група: Електроніка",
            ]
        );
        assert_eq!(lines.iter().filter(|l| *l == "true").count(), 2);
        assert!(!lines.iter().any(|l| l.contains("\"name\": \"Воно\"")));
    }

    proptest! {
        #[test]
        fn test_registry_never_shrinks(names in prop::collection::vec("[a-d]{1,2}", 1..30)) {
            let mut registry = GroupRegistry::new();
            let mut previous = 0;
            for name in &names {
                let first = registry.create(name);
                let again = registry.create(name);
                prop_assert!(Rc::ptr_eq(&first, &again));
                prop_assert!(registry.len() >= previous);
                previous = registry.len();
            }
        }
    }
}
