use super::*;

impl Page {
    /// Registers `handler` for every whitespace-separated type in `events`.
    ///
    /// Returns how many registrations were new; a handler already attached
    /// for a type is not attached again.
    pub fn add_event_multi_listener(
        &mut self,
        element: NodeId,
        events: &str,
        handler: EventHandler,
    ) -> usize {
        if !self.dom.contains_node(element) {
            self.trace_line(|| format!("[event] add {events:?} skipped: unknown node"));
            return 0;
        }
        let mut added = 0;
        for event_type in events.split_whitespace() {
            if self.listeners.add(element, event_type, Rc::clone(&handler)) {
                added += 1;
            }
        }
        self.trace_line(|| {
            format!(
                "[event] add {events:?} on {} added={added}",
                self.trace_node_label(element)
            )
        });
        added
    }

    /// Fires `event_type` at `target` and bubbles it up to the document.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&mut self, target: NodeId, event_type: &str) -> Result<usize> {
        if !self.dom.contains_node(target) {
            return Err(Error::UnknownNode(target.0));
        }

        let mut path = vec![target];
        let mut cursor = self.dom.parent(target);
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.dom.parent(node);
        }

        let mut event = Event::new(event_type, target);
        let mut invoked = 0;
        for node in path {
            let handlers = self.listeners.handlers(node, event_type);
            if handlers.is_empty() {
                continue;
            }
            event.set_current_target(node);
            for handler in handlers {
                handler(self, &mut event);
                invoked += 1;
            }
            if event.propagation_stopped() {
                self.trace_line(|| {
                    format!(
                        "[event] {event_type} propagation stopped at {}",
                        self.trace_node_label(node)
                    )
                });
                break;
            }
        }
        self.trace_line(|| {
            format!(
                "[event] dispatch {event_type} target={} handlers={invoked}",
                self.trace_node_label(target)
            )
        });
        Ok(invoked)
    }

    pub fn listener_count(&self, element: NodeId, event_type: &str) -> usize {
        self.listeners.count(element, event_type)
    }
}
