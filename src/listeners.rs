use super::*;

/// Callback registered through [`Page::add_event_multi_listener`].
///
/// Handlers receive the page so they can run the same helpers a caller
/// would (toggle a class, write to storage) while the event is in flight.
pub type EventHandler = Rc<dyn Fn(&mut Page, &mut Event)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_type: String,
    target: NodeId,
    current_target: NodeId,
    propagation_stopped: bool,
}

impl Event {
    pub(crate) fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            current_target: target,
            propagation_stopped: false,
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    /// Remaining handlers on the current node still run; ancestors do not.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn set_current_target(&mut self, node_id: NodeId) {
        self.current_target = node_id;
    }
}

#[derive(Default)]
pub(crate) struct ListenerStore {
    map: HashMap<NodeId, HashMap<String, Vec<EventHandler>>>,
}

impl ListenerStore {
    /// Returns `false` when the same handler is already registered for the type.
    pub(crate) fn add(&mut self, node_id: NodeId, event: &str, handler: EventHandler) -> bool {
        let listeners = self
            .map
            .entry(node_id)
            .or_default()
            .entry(event.to_string())
            .or_default();
        if listeners
            .iter()
            .any(|existing| same_handler(existing, &handler))
        {
            return false;
        }
        listeners.push(handler);
        true
    }

    /// Snapshot of the handlers, so registrations made while they run are
    /// not picked up by the current dispatch.
    pub(crate) fn handlers(&self, node_id: NodeId, event: &str) -> Vec<EventHandler> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, node_id: NodeId, event: &str) -> usize {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (node_id, events) in &self.map {
            let counts = events
                .iter()
                .map(|(event, handlers)| (event.as_str(), handlers.len()))
                .collect::<Vec<_>>();
            map.entry(node_id, &counts);
        }
        map.finish()
    }
}

fn same_handler(left: &EventHandler, right: &EventHandler) -> bool {
    // Compare data pointers only; vtable pointers are not stable across codegen units.
    std::ptr::addr_eq(Rc::as_ptr(left), Rc::as_ptr(right))
}
