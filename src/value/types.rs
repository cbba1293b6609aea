use indexmap::IndexMap;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identity token of a container.
///
/// Derived from the address of the shared storage, so two handles to the
/// same container compare equal while two containers with equal contents
/// do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A value to be rendered as a tree.
#[derive(Debug, Clone)]
pub enum Value {
    Mapping(MapRef),
    Sequence(ListRef),
    Primitive(Primitive),
}

/// Leaf values. Text and bytes are primitives, never sequences.
#[derive(Debug, Clone)]
pub enum Primitive {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// Anything else; rendered through its `Debug` representation.
    Opaque(Rc<dyn fmt::Debug>),
}

/// Shared handle to an insertion-ordered mapping with unique keys.
///
/// Cloning the handle aliases the same storage.
#[derive(Clone, Default)]
pub struct MapRef(Rc<RefCell<IndexMap<String, Value>>>);

/// Shared handle to an ordered sequence.
///
/// Cloning the handle aliases the same storage.
#[derive(Clone, Default)]
pub struct ListRef(Rc<RefCell<Vec<Value>>>);

impl Value {
    /// An empty mapping.
    pub fn map() -> Self {
        Value::Mapping(MapRef::new())
    }

    /// An empty sequence.
    pub fn list() -> Self {
        Value::Sequence(ListRef::new())
    }

    pub fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Primitive(Primitive::Bytes(bytes.into()))
    }

    pub fn opaque<T: fmt::Debug + 'static>(value: T) -> Self {
        Value::Primitive(Primitive::Opaque(Rc::new(value)))
    }

    /// Identity of the container, `None` for primitives.
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Value::Mapping(map) => Some(map.id()),
            Value::Sequence(list) => Some(list.id()),
            Value::Primitive(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, Value::Primitive(_))
    }

    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::Sequence(list) => Some(list),
            _ => None,
        }
    }
}

impl MapRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Remove a key, shifting later entries up to keep their order.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Drop all entries. Breaks reference cycles running through this map.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Borrow the entries in insertion order.
    ///
    /// Panics if the map is mutably borrowed, which only happens while an
    /// `insert`, `remove` or `clear` on the same map is in progress.
    pub fn entries(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.0.borrow()
    }
}

impl ListRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Drop all items. Breaks reference cycles running through this list.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }
}

// Contents are left out: a container may hold itself.
impl fmt::Debug for MapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRef")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Debug for ListRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRef")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapRef {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = MapRef::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Into<Value>> FromIterator<V> for ListRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ListRef(Rc::new(RefCell::new(
            iter.into_iter().map(Into::into).collect(),
        )))
    }
}

impl From<MapRef> for Value {
    fn from(map: MapRef) -> Self {
        Value::Mapping(map)
    }
}

impl From<ListRef> for Value {
    fn from(list: ListRef) -> Self {
        Value::Sequence(list)
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        Value::Primitive(primitive)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::Sequence(items.into_iter().collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or_else(Value::null, Into::into)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::Str(s))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Primitive(Primitive::Float(f))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Primitive(Primitive::Float(f64::from(f)))
    }
}

macro_rules! int_into_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Primitive(Primitive::Int(i as i128))
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);
