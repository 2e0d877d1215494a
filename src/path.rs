use crate::error::{PathError, Result};
use crate::tree::{Data, Tag, Value};

impl Data {
    /// Read a nested value using dot notation (`"unit.abilities.heals"`).
    ///
    /// Every segment but the last must name a map. An absent segment fails
    /// with `PathNotFound`; a segment holding anything other than a map
    /// fails with `TypeMismatch`.
    pub fn read(&self, path: &str) -> Result<&Value> {
        let mut segments: Vec<&str> = path.split('.').collect();
        // split always yields at least one item
        let last = segments.pop().unwrap_or_default();

        let mut data = self;
        for segment in segments {
            match data.get(segment) {
                Some(Value::Map(inner)) => data = inner,
                Some(other) => {
                    return Err(PathError::TypeMismatch {
                        path: path.to_string(),
                        expected: "map",
                        found: other.kind(),
                    })
                }
                None => return Err(not_found(path, segment)),
            }
        }

        data.get(last).ok_or_else(|| not_found(path, last))
    }

    /// Read a nested map.
    pub fn read_data(&self, path: &str) -> Result<&Data> {
        match self.read(path)? {
            Value::Map(data) => Ok(data),
            other => Err(mismatch(path, "map", other)),
        }
    }

    /// Read a nested plain text value.
    pub fn read_string(&self, path: &str) -> Result<&str> {
        match self.read(path)? {
            Value::Text(s) => Ok(s),
            other => Err(mismatch(path, "text", other)),
        }
    }

    /// The only entry of a single-valued container.
    pub fn single(&self) -> Result<(&str, &Value)> {
        if self.len() != 1 {
            return Err(PathError::NotSingleValued { len: self.len() });
        }
        self.iter()
            .next()
            .map(|(k, v)| (k.as_str(), v))
            .ok_or(PathError::NotSingleValued { len: 0 })
    }

    /// View a single-valued container whose value is a map as a tag.
    pub fn to_tag(&self) -> Result<Tag> {
        let (name, value) = self.single()?;
        match value {
            Value::Map(body) => Ok(Tag::new(name, body.clone())),
            other => Err(mismatch(name, "map", other)),
        }
    }
}

fn not_found(path: &str, segment: &str) -> PathError {
    PathError::PathNotFound {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

fn mismatch(path: &str, expected: &'static str, found: &Value) -> PathError {
    PathError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}
