use super::*;

mod layout_style;
mod selector_matching;
mod tree_traversal;

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
    // Mock layout box; nothing in the crate performs real layout.
    pub(crate) offset_width: i64,
    pub(crate) offset_height: i64,
}

impl Element {
    pub(crate) fn new(tag_name: String, attrs: HashMap<String, String>) -> Self {
        Self {
            tag_name,
            attrs,
            offset_width: 0,
            offset_height: 0,
        }
    }

    pub(crate) fn class_list(&self) -> ClassList {
        ClassList::parse(self.attrs.get("class").map(String::as_str))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Dom {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) id_index: HashMap<String, Vec<NodeId>>,
}

impl Dom {
    pub(crate) fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    pub(crate) fn contains_node(&self, node_id: NodeId) -> bool {
        node_id.0 < self.nodes.len()
    }

    pub(crate) fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    pub(crate) fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let id = self.create_node(Some(parent), NodeType::Element(Element::new(tag_name, attrs)));
        if let Some(id_attr) = self
            .element(id)
            .and_then(|element| element.attrs.get("id").cloned())
        {
            self.index_id(&id_attr, id);
        }
        id
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text))
    }

    pub(crate) fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    pub(crate) fn text(&self, node_id: NodeId) -> Option<&str> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.element(node_id)
            .and_then(|element| element.attrs.get(name))
            .map(String::as_str)
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::NotAnElement("setAttribute".into()))?;
        let old = element.attrs.insert(name.to_string(), value.to_string());
        if name == "id" {
            if let Some(old) = old {
                self.unindex_id(&old, node_id);
            }
            self.index_id(value, node_id);
        }
        Ok(())
    }

    pub(crate) fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).and_then(|ids| ids.first().copied())
    }

    pub(crate) fn index_id(&mut self, id: &str, node_id: NodeId) {
        if id.is_empty() {
            return;
        }
        let nodes = self.id_index.entry(id.to_string()).or_default();
        // Arena order follows parse order, so the first entry wins a lookup.
        let pos = nodes.partition_point(|candidate| *candidate < node_id);
        if nodes.get(pos) != Some(&node_id) {
            nodes.insert(pos, node_id);
        }
    }

    pub(crate) fn unindex_id(&mut self, id: &str, node_id: NodeId) {
        let Some(nodes) = self.id_index.get_mut(id) else {
            return;
        };
        nodes.retain(|candidate| *candidate != node_id);
        if nodes.is_empty() {
            self.id_index.remove(id);
        }
    }
}
