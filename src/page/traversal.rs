use super::*;

impl Page {
    /// Nearest ancestor of `element` whose `name` attribute equals `name`.
    ///
    /// The walk stops at `<body>`: on reaching it the result is the
    /// document's first body when `return_body_on_miss` is set, `None`
    /// otherwise.
    pub fn get_parent_by_name(
        &self,
        element: NodeId,
        name: &str,
        return_body_on_miss: bool,
    ) -> Option<NodeId> {
        self.find_ancestor(element, return_body_on_miss, "get_parent_by_name", name, |ancestor| {
            self.dom.attr(ancestor, "name") == Some(name)
        })
    }

    /// Nearest ancestor of `element` carrying the class token `css_class`.
    /// Stops at `<body>` exactly like [`Page::get_parent_by_name`].
    pub fn get_parent_by_class(
        &self,
        element: NodeId,
        css_class: &str,
        return_body_on_miss: bool,
    ) -> Option<NodeId> {
        self.find_ancestor(
            element,
            return_body_on_miss,
            "get_parent_by_class",
            css_class,
            |ancestor| self.has_class(ancestor, css_class),
        )
    }

    fn find_ancestor(
        &self,
        element: NodeId,
        return_body_on_miss: bool,
        operation: &str,
        key: &str,
        matches: impl Fn(NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut cursor = self.dom.parent(element);
        while let Some(ancestor) = cursor {
            if self.dom.tag_name(ancestor) == Some("body") {
                self.trace_line(|| {
                    format!(
                        "[dom] {operation} key={key:?} reached body return_body={return_body_on_miss}"
                    )
                });
                if !return_body_on_miss {
                    return None;
                }
                return self.dom.body().or(Some(ancestor));
            }
            if self.dom.element(ancestor).is_none() {
                break;
            }
            if key.is_empty() {
                self.trace_line(|| format!("[dom] {operation} empty key"));
                return None;
            }
            if matches(ancestor) {
                return Some(ancestor);
            }
            cursor = self.dom.parent(ancestor);
        }
        self.trace_line(|| {
            format!(
                "[dom] {operation} key={key:?} no body above {}",
                self.trace_node_label(element)
            )
        });
        None
    }
}
