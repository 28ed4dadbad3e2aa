use super::*;

impl Page {
    /// Whether `css_class` is a whole token of the element's class attribute.
    pub fn has_class(&self, element: NodeId, css_class: &str) -> bool {
        if !ClassList::is_valid_token(css_class) {
            return false;
        }
        let Some(el) = self.dom.element(element) else {
            self.trace_line(|| format!("[class] has {css_class:?} on non-element"));
            return false;
        };
        el.class_list().contains(css_class)
    }

    /// Adds `css_class` when absent. With `reset_classes` the attribute is
    /// replaced by the single token instead of appended to.
    pub fn add_class(&mut self, element: NodeId, css_class: &str, reset_classes: bool) {
        if self.has_class(element, css_class) {
            return;
        }
        let Some(mut classes) = self.class_list(element) else {
            self.trace_line(|| format!("[class] add {css_class:?} skipped: not an element"));
            return;
        };
        if !ClassList::is_valid_token(css_class) {
            self.trace_line(|| format!("[class] add {css_class:?} skipped: invalid token"));
            return;
        }
        if reset_classes {
            classes.clear();
        }
        classes.add(css_class);
        self.write_class_list(element, &classes, "add", css_class);
    }

    /// Removes every occurrence of `css_class`; other tokens keep their order.
    pub fn remove_class(&mut self, element: NodeId, css_class: &str) {
        let Some(mut classes) = self.class_list(element) else {
            self.trace_line(|| format!("[class] remove {css_class:?} skipped: not an element"));
            return;
        };
        if !self.has_class(element, css_class) {
            return;
        }
        classes.remove(css_class);
        self.write_class_list(element, &classes, "remove", css_class);
    }

    /// Sets the class attribute to the empty string.
    pub fn remove_classes(&mut self, element: NodeId) {
        let Some(el) = self.dom.element_mut(element) else {
            self.trace_line(|| "[class] remove_classes skipped: not an element".to_string());
            return;
        };
        el.attrs.insert("class".to_string(), String::new());
        self.trace_line(|| format!("[class] remove_classes {}", self.trace_node_label(element)));
    }

    /// Returns whether `css_class` is present afterwards.
    pub fn toggle_class(&mut self, element: NodeId, css_class: &str) -> bool {
        if self.has_class(element, css_class) {
            self.remove_class(element, css_class);
        } else {
            self.add_class(element, css_class, false);
        }
        self.has_class(element, css_class)
    }

    /// Parsed class tokens of `element`, `None` for non-element nodes.
    pub fn class_list(&self, element: NodeId) -> Option<ClassList> {
        self.dom.element(element).map(Element::class_list)
    }

    fn write_class_list(&mut self, element: NodeId, classes: &ClassList, op: &str, token: &str) {
        if let Some(el) = self.dom.element_mut(element) {
            el.attrs.insert("class".to_string(), classes.to_string());
        }
        self.trace_line(|| {
            format!(
                "[class] {op} {token:?} on {} -> {:?}",
                self.trace_node_label(element),
                classes.to_string()
            )
        });
    }
}
