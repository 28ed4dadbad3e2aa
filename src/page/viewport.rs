use super::*;

impl Page {
    /// Locks (`hide == true`) or releases page scrolling by writing
    /// `overflow` on both `<html>` and `<body>`.
    pub fn remove_scroll(&mut self, hide: bool) {
        let value = if hide { "hidden" } else { "visible" };
        for target in [self.dom.document_element(), self.dom.body()] {
            let Some(target) = target else {
                self.trace_line(|| format!("[scroll] overflow={value} skipped missing element"));
                continue;
            };
            if self.dom.style_set(target, "overflow", value).is_ok() {
                self.trace_line(|| {
                    format!("[scroll] {} overflow={value}", self.trace_node_label(target))
                });
            }
        }
    }

    /// Inline `overflow` declaration of `element`.
    pub fn overflow(&self, element: NodeId) -> Option<String> {
        self.dom.style_get(element, "overflow")
    }

    /// `true` when the element has a non-empty layout box in either axis.
    pub fn is_visible(&self, element: NodeId) -> bool {
        let Some(el) = self.dom.element(element) else {
            self.trace_line(|| {
                format!(
                    "[dom] is_visible on non-element {}",
                    self.trace_node_label(element)
                )
            });
            return false;
        };
        el.offset_width > 0 || el.offset_height > 0
    }

    pub fn set_offset_size(&mut self, element: NodeId, width: i64, height: i64) -> Result<()> {
        self.dom.set_offset_size(element, width, height)
    }

    pub fn offset_width(&self, element: NodeId) -> Result<i64> {
        self.dom.offset_width(element)
    }

    pub fn offset_height(&self, element: NodeId) -> Result<i64> {
        self.dom.offset_height(element)
    }
}
