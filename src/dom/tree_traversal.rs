use super::*;

impl Dom {
    pub(crate) fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0).and_then(|node| node.parent)
    }

    pub(crate) fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(node_id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn is_descendant_of(&self, node_id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(node_id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub(crate) fn collect_elements_dfs(&self, node_id: NodeId, out: &mut Vec<NodeId>) {
        // Generated documents can nest deeply enough to exhaust the default stack.
        stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, || {
            if self.element(node_id).is_some() {
                out.push(node_id);
            }
            for child in self.children(node_id) {
                self.collect_elements_dfs(*child, out);
            }
        });
    }

    pub(crate) fn collect_elements_descendants_dfs(&self, node_id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node_id) {
            self.collect_elements_dfs(*child, out);
        }
    }

    pub(crate) fn child_elements(&self, node_id: NodeId) -> Vec<NodeId> {
        self.children(node_id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    pub(crate) fn previous_element_sibling(&self, node_id: NodeId) -> Option<NodeId> {
        let parent = self.parent(node_id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|id| *id == node_id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|id| self.element(*id).is_some())
    }

    pub(crate) fn next_element_sibling(&self, node_id: NodeId) -> Option<NodeId> {
        let parent = self.parent(node_id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|id| *id == node_id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|id| self.element(*id).is_some())
    }

    pub(crate) fn document_element(&self) -> Option<NodeId> {
        self.children(self.root)
            .iter()
            .copied()
            .find(|id| self.tag_name(*id) == Some("html"))
    }

    /// First `<body>` in document order.
    pub(crate) fn body(&self) -> Option<NodeId> {
        self.first_element_by_tag("body")
    }

    pub(crate) fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        let mut all = Vec::new();
        self.collect_elements_dfs(self.root, &mut all);
        all.into_iter()
            .find(|id| self.tag_name(*id).is_some_and(|name| name.eq_ignore_ascii_case(tag)))
    }

    /// Moves `child` to the end of `parent`'s children.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let index = self.children(parent).len();
        self.insert_child_at(parent, child, index)
    }

    /// Moves `child` under `parent` at `index`, counted after `child` is
    /// detached from its old position.
    pub(crate) fn insert_child_at(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> Result<()> {
        if !self.contains_node(parent) {
            return Err(Error::UnknownNode(parent.0));
        }
        if !self.contains_node(child) {
            return Err(Error::UnknownNode(child.0));
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(Error::HtmlParse("cannot append a node into itself".into()));
        }
        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
        Ok(())
    }

    /// Guarantees a `<html>` document element with a `<body>` inside it.
    ///
    /// Stray content, inside `<html>` or beside it at the top level, is
    /// moved into the body, mirroring how browsers imply the skeleton.
    /// Whitespace-only text beside `<html>` stays where it is.
    pub(crate) fn normalize_document_skeleton(&mut self) -> Result<()> {
        let html = match self.document_element() {
            Some(html) => html,
            None => {
                let stray = self.children(self.root).to_vec();
                let html = self.create_element(self.root, "html".into(), HashMap::new());
                for node in stray {
                    self.append_child(html, node)?;
                }
                html
            }
        };

        let existing_body = self
            .child_elements(html)
            .into_iter()
            .find(|id| self.tag_name(*id) == Some("body"));
        let body = match existing_body {
            Some(body) => body,
            None => {
                let stray = self
                    .children(html)
                    .iter()
                    .copied()
                    .filter(|id| self.tag_name(*id) != Some("head"))
                    .collect::<Vec<_>>();
                let body = self.create_element(html, "body".into(), HashMap::new());
                for node in stray {
                    self.append_child(body, node)?;
                }
                body
            }
        };

        let top_level = self.children(self.root).to_vec();
        let Some(html_pos) = top_level.iter().position(|id| *id == html) else {
            return Ok(());
        };
        let mut insert_at = 0;
        for (pos, node) in top_level.into_iter().enumerate() {
            if node == html || self.text(node).is_some_and(|text| text.trim().is_empty()) {
                continue;
            }
            if pos < html_pos {
                self.insert_child_at(body, node, insert_at)?;
                insert_at += 1;
            } else {
                self.append_child(body, node)?;
            }
        }
        Ok(())
    }
}
