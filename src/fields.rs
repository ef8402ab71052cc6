use std::fmt;

/// The value of a single coordinate field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FieldValue<'a> {
    /// Name, version, release or arch
    Text(&'a str),
    /// The epoch of a NEVR or NEVRA
    Epoch(u32),
}

impl<'a> FieldValue<'a> {
    /// The value if this is a text field
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(*s),
            FieldValue::Epoch(_) => None,
        }
    }

    /// The value if this is the epoch field
    pub fn as_epoch(&self) -> Option<u32> {
        match self {
            FieldValue::Epoch(e) => Some(*e),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Epoch(e) => write!(f, "{}", e),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(s)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(e: u32) -> Self {
        FieldValue::Epoch(e)
    }
}

/// Field name to value mapping of a coordinate, kept in declaration order:
/// name, epoch (only for shapes that have one), version, release, arch (only for shapes that have one).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fields<'a> {
    entries: Vec<(&'static str, FieldValue<'a>)>,
}

impl<'a> Fields<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Fields {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(mut self, name: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<FieldValue<'a>> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Whether the shape has a field with this name
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names, in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Name and value pairs, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldValue<'a>)> + '_ {
        self.entries.iter().copied()
    }

    /// The number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = (&'static str, FieldValue<'a>);
    type IntoIter = std::vec::IntoIter<(&'static str, FieldValue<'a>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Epoch(e) => serializer.serialize_u32(*e),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Fields<'static> {
        Fields::with_capacity(3)
            .push("name", "curl")
            .push("epoch", 1u32)
            .push("version", "8.6.0")
    }

    #[test]
    fn test_lookup() {
        let fields = sample();
        assert_eq!(fields.get("name"), Some(FieldValue::Text("curl")));
        assert_eq!(fields.get("epoch").and_then(|e| e.as_epoch()), Some(1));
        assert_eq!(fields.get("arch"), None);
        assert!(!fields.contains_key("release"));
    }

    #[test]
    fn test_order_is_preserved() {
        let fields = sample();
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["name", "epoch", "version"]);
        assert_eq!(fields.len(), 3);

        let rendered: Vec<String> = fields.into_iter().map(|(_, v)| v.to_string()).collect();
        assert_eq!(rendered, ["curl", "1", "8.6.0"]);
    }
}
