use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

mod class_list;
mod dom;
mod html;
mod listeners;
mod loose;
mod page;
mod selector;
mod storage;

pub use class_list::ClassList;
pub use listeners::{Event, EventHandler};
pub use loose::{LooseValue, in_array, in_array_by, loose_equal};
pub use page::{ClassCollection, Page};
pub use storage::{KeyValueStore, MemoryStorage};

use dom::{Dom, Element};
use listeners::ListenerStore;
use selector::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    UnsupportedSelector(String),
    NotAnElement(String),
    UnknownNode(usize),
    StorageUnavailable,
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::NotAnElement(context) => write!(f, "{context} target is not an element"),
            Self::UnknownNode(index) => write!(f, "unknown node: #{index}"),
            Self::StorageUnavailable => write!(f, "key-value storage is not available"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl StdError for Error {}

/// Handle to a node of a [`Page`] document.
///
/// Handles are only meaningful for the page that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}
