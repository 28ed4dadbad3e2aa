use super::*;

mod classes;
mod events;
mod lookup;
mod storage_access;
mod traversal;
mod viewport;

/// A document together with its listener registry and optional key-value
/// store.
///
/// Every helper runs against the page it is called on; nothing reaches for
/// global state, so tests can build as many isolated pages as they need.
#[derive(Debug)]
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) listeners: ListenerStore,
    pub(crate) storage: Option<Box<dyn KeyValueStore>>,
    pub(crate) trace_state: RefCell<TraceState>,
}

#[derive(Debug)]
pub(crate) struct TraceState {
    enabled: bool,
    logs: VecDeque<String>,
    log_limit: usize,
    to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}

impl Page {
    /// Parses `html` into a page backed by an empty [`MemoryStorage`].
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_impl(html, Some(Box::new(MemoryStorage::new())))
    }

    pub fn from_html_with_local_storage(
        html: &str,
        initial_local_storage: &[(&str, &str)],
    ) -> Result<Self> {
        let storage = MemoryStorage::with_entries(initial_local_storage);
        Self::from_html_impl(html, Some(Box::new(storage)))
    }

    pub fn from_html_with_storage(html: &str, storage: Box<dyn KeyValueStore>) -> Result<Self> {
        Self::from_html_impl(html, Some(storage))
    }

    /// A page on a host without a storage API: every storage helper falls
    /// through quietly.
    pub fn without_storage(html: &str) -> Result<Self> {
        Self::from_html_impl(html, None)
    }

    fn from_html_impl(html: &str, storage: Option<Box<dyn KeyValueStore>>) -> Result<Self> {
        let dom = html::parse_html(html)?;
        Ok(Self {
            dom,
            listeners: ListenerStore::default(),
            storage,
            trace_state: RefCell::new(TraceState::default()),
        })
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.get_mut().enabled = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.get_mut().to_stderr = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidConfig(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        let trace = self.trace_state.get_mut();
        trace.log_limit = max_entries;
        while trace.logs.len() > trace.log_limit {
            trace.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.get_mut().logs.drain(..).collect()
    }

    /// Records a trace line; `build` only runs while tracing is enabled.
    pub(crate) fn trace_line(&self, build: impl FnOnce() -> String) {
        let mut trace = self.trace_state.borrow_mut();
        if !trace.enabled {
            return;
        }
        let line = build();
        if trace.to_stderr {
            eprintln!("{line}");
        }
        if trace.logs.len() >= trace.log_limit {
            trace.logs.pop_front();
        }
        trace.logs.push_back(line);
    }

    /// Short description of a node for trace output, e.g. `div#menu.open`.
    pub(crate) fn trace_node_label(&self, node_id: NodeId) -> String {
        let Some(element) = self.dom.element(node_id) else {
            return if node_id == self.dom.root {
                "document".to_string()
            } else {
                format!("node#{}", node_id.0)
            };
        };
        let mut label = element.tag_name.clone();
        if let Some(id) = element.attrs.get("id").filter(|id| !id.is_empty()) {
            label.push('#');
            label.push_str(id);
        }
        for class_name in element.class_list().iter() {
            label.push('.');
            label.push_str(class_name);
        }
        label
    }
}

/// Live result of [`Page::get_by_class`].
///
/// The collection keeps only the query; every read evaluates it against the
/// page, so class changes made after the lookup are reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCollection {
    scope: Option<NodeId>,
    class_names: Vec<String>,
}

impl ClassCollection {
    pub(crate) fn new(scope: Option<NodeId>, class_names: &str) -> Self {
        Self {
            scope,
            class_names: class_names
                .split_ascii_whitespace()
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    pub fn to_vec(&self, page: &Page) -> Vec<NodeId> {
        if self.class_names.is_empty() {
            return Vec::new();
        }
        let mut candidates = Vec::new();
        page.dom
            .collect_elements_descendants_dfs(self.scope.unwrap_or(page.dom.root), &mut candidates);
        candidates.retain(|candidate| {
            page.dom.element(*candidate).is_some_and(|element| {
                let classes = element.class_list();
                self.class_names.iter().all(|name| classes.contains(name))
            })
        });
        candidates
    }

    pub fn len(&self, page: &Page) -> usize {
        self.to_vec(page).len()
    }

    pub fn is_empty(&self, page: &Page) -> bool {
        self.len(page) == 0
    }

    pub fn item(&self, page: &Page, index: usize) -> Option<NodeId> {
        self.to_vec(page).get(index).copied()
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }
}
