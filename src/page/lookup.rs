use super::*;

impl Page {
    /// First element in document order whose `id` attribute equals `id`.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        let found = self.dom.by_id(id);
        if found.is_none() {
            self.trace_line(|| format!("[dom] get_by_id miss id={id:?}"));
        }
        found
    }

    /// Elements matching `selector`, in document order.
    ///
    /// With `root` only its descendants are searched. No match is an empty
    /// vector; a selector the engine cannot parse is an error.
    pub fn get_by_node(&self, selector: &str, root: Option<NodeId>) -> Result<Vec<NodeId>> {
        let result = self.dom.query_selector_all(root, selector);
        self.trace_line(|| match &result {
            Ok(matched) => format!(
                "[dom] get_by_node selector={selector:?} matched={}",
                matched.len()
            ),
            Err(err) => format!("[dom] get_by_node selector={selector:?} error={err}"),
        });
        result
    }

    /// Live collection of elements under `root` carrying every class in
    /// `class_names`.
    pub fn get_by_class(&self, class_names: &str, root: Option<NodeId>) -> ClassCollection {
        let collection = ClassCollection::new(root, class_names);
        if collection.class_names().is_empty() {
            self.trace_line(|| format!("[dom] get_by_class empty query {class_names:?}"));
        }
        collection
    }

    /// The document's root node (the node above `<html>`).
    pub fn document(&self) -> NodeId {
        self.dom.root
    }

    pub fn document_element(&self) -> Option<NodeId> {
        self.dom.document_element()
    }

    pub fn body(&self) -> Option<NodeId> {
        self.dom.body()
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.dom.parent(node_id)
    }

    pub fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.dom.tag_name(node_id)
    }

    pub fn attribute(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.dom.attr(node_id, &name.to_ascii_lowercase())
    }

    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        self.dom.set_attr(node_id, &name.to_ascii_lowercase(), value)
    }

    /// Raw `class` attribute, `None` when the attribute is missing.
    pub fn class_name(&self, node_id: NodeId) -> Option<&str> {
        self.dom.attr(node_id, "class")
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node_id, &mut out);
        out
    }

    fn collect_text(&self, node_id: NodeId, out: &mut String) {
        stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, || {
            if let Some(text) = self.dom.text(node_id) {
                out.push_str(text);
                return;
            }
            for child in self.dom.children(node_id) {
                self.collect_text(*child, out);
            }
        });
    }
}
