use super::*;

impl Dom {
    /// Elements matching `selector` in document order.
    ///
    /// With a scope only its descendants are candidates, like
    /// `Element.querySelectorAll`.
    pub(crate) fn query_selector_all(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Vec<NodeId>> {
        let groups = parse_selector_groups(selector)?;

        if scope.is_none() && groups.len() == 1 && groups[0].len() == 1 {
            if let Some(id) = groups[0][0].step.id_only() {
                return Ok(self.id_index.get(id).cloned().unwrap_or_default());
            }
        }

        let mut candidates = Vec::new();
        self.collect_elements_descendants_dfs(scope.unwrap_or(self.root), &mut candidates);

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for candidate in candidates {
            if groups
                .iter()
                .any(|steps| self.matches_selector_chain(candidate, steps))
                && seen.insert(candidate)
            {
                matched.push(candidate);
            }
        }
        Ok(matched)
    }

    pub(crate) fn matches_step(&self, node_id: NodeId, step: &SelectorStep) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };

        if !step.universal {
            if let Some(tag) = &step.tag {
                if !element.tag_name.eq_ignore_ascii_case(tag) {
                    return false;
                }
            }
        } else if step.tag.is_some() {
            return false;
        }

        if let Some(id) = &step.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }

        if !step.classes.is_empty() {
            let classes = element.class_list();
            if step.classes.iter().any(|name| !classes.contains(name)) {
                return false;
            }
        }

        for cond in &step.attrs {
            if !cond.matches(&element.attrs) {
                return false;
            }
        }

        step.pseudo_classes
            .iter()
            .all(|pseudo| self.matches_pseudo_class(node_id, pseudo))
    }

    fn matches_pseudo_class(&self, node_id: NodeId, pseudo: &SelectorPseudoClass) -> bool {
        match pseudo {
            SelectorPseudoClass::FirstChild => self.previous_element_sibling(node_id).is_none(),
            SelectorPseudoClass::LastChild => self.next_element_sibling(node_id).is_none(),
            SelectorPseudoClass::OnlyChild => {
                self.previous_element_sibling(node_id).is_none()
                    && self.next_element_sibling(node_id).is_none()
            }
            SelectorPseudoClass::FirstOfType => {
                self.same_type_siblings(node_id).first() == Some(&node_id)
            }
            SelectorPseudoClass::LastOfType => {
                self.same_type_siblings(node_id).last() == Some(&node_id)
            }
            SelectorPseudoClass::OnlyOfType => self.same_type_siblings(node_id).len() == 1,
            SelectorPseudoClass::Empty => self.children(node_id).is_empty(),
            SelectorPseudoClass::Not(inners) => !inners
                .iter()
                .any(|inner| self.matches_selector_chain(node_id, inner)),
        }
    }

    fn same_type_siblings(&self, node_id: NodeId) -> Vec<NodeId> {
        let Some(tag) = self.tag_name(node_id) else {
            return Vec::new();
        };
        let Some(parent) = self.parent(node_id) else {
            return vec![node_id];
        };
        self.child_elements(parent)
            .into_iter()
            .filter(|sibling| self.tag_name(*sibling) == Some(tag))
            .collect()
    }

    pub(crate) fn matches_selector_chain(&self, node_id: NodeId, steps: &[SelectorPart]) -> bool {
        let Some(last) = steps.last() else {
            return false;
        };
        if !self.matches_step(node_id, &last.step) {
            return false;
        }

        let mut current = node_id;
        for idx in (1..steps.len()).rev() {
            let prev_step = &steps[idx - 1].step;
            let combinator = steps[idx]
                .combinator
                .unwrap_or(SelectorCombinator::Descendant);

            let matched = match combinator {
                SelectorCombinator::Child => self
                    .parent(current)
                    .filter(|parent| self.matches_step(*parent, prev_step)),
                SelectorCombinator::Descendant => {
                    let mut cursor = self.parent(current);
                    let mut found = None;
                    while let Some(parent) = cursor {
                        if self.matches_step(parent, prev_step) {
                            found = Some(parent);
                            break;
                        }
                        cursor = self.parent(parent);
                    }
                    found
                }
                SelectorCombinator::AdjacentSibling => self
                    .previous_element_sibling(current)
                    .filter(|sibling| self.matches_step(*sibling, prev_step)),
                SelectorCombinator::GeneralSibling => {
                    let mut cursor = self.previous_element_sibling(current);
                    let mut found = None;
                    while let Some(sibling) = cursor {
                        if self.matches_step(sibling, prev_step) {
                            found = Some(sibling);
                            break;
                        }
                        cursor = self.previous_element_sibling(sibling);
                    }
                    found
                }
            };

            let Some(matched) = matched else {
                return false;
            };
            current = matched;
        }

        true
    }
}
