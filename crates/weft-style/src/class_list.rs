#![forbid(unsafe_code)]

//! Style class lists.
//!
//! Every widget carries a [`ClassList`]: the ordered, duplicate-free set
//! of style class names a theme or the validation indicator toggles on
//! it. Order is insertion order, so repeated passes that toggle the same
//! classes leave the rendered class string stable.

use tracing::trace;

/// An ordered, duplicate-free list of style class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; present classes are left in place.
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class if present.
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class according to `on`.
    pub fn toggle(&mut self, class: &str, on: bool) {
        trace!(class, on, "toggle style class");
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Whether the class is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The space-joined class string.
    #[must_use]
    pub fn css_string(&self) -> String {
        self.classes.join(" ")
    }
}
