use std::collections::hash_map;
use std::collections::HashMap;

/// A value stored under a key in a [`Data`] container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    /// Unsigned integers above `i64::MAX` keep their exact value here.
    Unsigned(u64),
    Float(f64),
    /// Plain quoted string. Not escaped at render time; see [`crate::util::escape_string`].
    Text(String),
    /// Translatable string, rendered as `_"..."`.
    Translatable(String),
    /// Emitted verbatim without quotes (macros, formulas).
    RawExpression(String),
    /// A nested sub-tag body.
    Map(Data),
    /// Pre-formatted text placed between `[key]` and `[/key]`.
    RawBlock(String),
    /// The key occurs several times as sibling sub-tags.
    Repeated(Vec<Value>),
    /// A value preceded by a `#textdomain` directive.
    DomainWrapped(Domain),
}

/// A value paired with the textdomain it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub value: Box<Value>,
    pub domain: String,
}

/// A named sub-tag: the view of a single-entry container whose value is a map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub name: String,
    pub body: Data,
}

/// A key-to-value container, the body of a WML tag.
///
/// Iteration order is unspecified. Anything that needs a stable order
/// (rendering, JSON output) goes through [`Data::sorted_keys`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Data {
    entries: HashMap<String, Value>,
}

impl Data {
    pub fn new() -> Self {
        Data {
            entries: HashMap::new(),
        }
    }

    /// Merge several containers into a new one. Later arguments win on
    /// duplicate keys; none of the inputs is modified.
    pub fn merge<'a>(first: &Data, others: impl IntoIterator<Item = &'a Data>) -> Data {
        let mut data = first.clone();
        for other in others {
            data.merge_from(other);
        }
        data
    }

    /// Copy every entry of `other` into `self`, overwriting existing keys.
    pub fn merge_from(&mut self, other: &Data) {
        for (k, v) in &other.entries {
            self.entries.insert(k.clone(), v.clone());
        }
    }

    /// Insert a value, returning the previous value for the key, if any.
    ///
    /// Keys must be non-empty; an empty key would render as `=value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        debug_assert!(!key.is_empty(), "WML keys must be non-empty");
        self.entries.insert(key, value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Keys in ascending byte order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Render at depth 0 and return the bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Data {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Data::new();
        data.extend(iter);
        data
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Data {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Data {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Tag {
    pub fn new(name: impl Into<String>, body: Data) -> Self {
        Tag {
            name: name.into(),
            body,
        }
    }

    /// Wrap the tag back into a single-entry container.
    pub fn into_data(self) -> Data {
        let mut data = Data::new();
        data.insert(self.name, Value::Map(self.body));
        data
    }
}

impl Domain {
    pub fn new(value: impl Into<Value>, domain: impl Into<String>) -> Self {
        Domain {
            value: Box::new(value.into()),
            domain: domain.into(),
        }
    }
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn tr(s: impl Into<String>) -> Self {
        Value::Translatable(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Value::RawExpression(s.into())
    }

    pub fn raw_block(s: impl Into<String>) -> Self {
        Value::RawBlock(s.into())
    }

    pub fn map(data: impl Into<Data>) -> Self {
        Value::Map(data.into())
    }

    pub fn repeated<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Repeated(items.into_iter().map(Into::into).collect())
    }

    /// Wrap `value` so it renders after a `#textdomain <domain>` line.
    pub fn domain(value: impl Into<Value>, domain: impl Into<String>) -> Self {
        Value::DomainWrapped(Domain::new(value, domain))
    }

    /// Short variant name, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) | Value::Unsigned(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Translatable(_) => "translatable",
            Value::RawExpression(_) => "raw expression",
            Value::Map(_) => "map",
            Value::RawBlock(_) => "raw block",
            Value::Repeated(_) => "repeated",
            Value::DomainWrapped(_) => "domain",
        }
    }

    pub fn as_map(&self) -> Option<&Data> {
        match self {
            Value::Map(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Unsigned(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Unsigned(n) => Some(*n),
            Value::Integer(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            Value::Unsigned(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_repeated(&self) -> Option<&[Value]> {
        match self {
            Value::Repeated(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_domain(&self) -> Option<&Domain> {
        match self {
            Value::DomainWrapped(d) => Some(d),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Unsigned(n),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Data> for Value {
    fn from(d: Data) -> Self {
        Value::Map(d)
    }
}

impl From<Domain> for Value {
    fn from(d: Domain) -> Self {
        Value::DomainWrapped(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Repeated(items)
    }
}
