use indexmap::IndexMap;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// PackageRecord - one node of the resolved package tree
///
/// Produced by the external package resolver (`npm ls --json --all --long`
/// or `read-installed`). Every field is optional and read leniently: a value
/// of the wrong JSON shape is treated as absent instead of failing the whole
/// tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Either a plain string or an object with a `name` field
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub keywords: Option<Value>,
    #[serde(default)]
    pub license: Option<Value>,
    /// Legacy `licenses: [{type, url}]` form
    #[serde(default)]
    pub licenses: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<Value>,
    #[serde(default)]
    pub bugs: Option<Value>,
    /// Directory the package is installed in
    #[serde(default, deserialize_with = "lenient_path")]
    pub path: Option<PathBuf>,
    #[serde(default, rename = "_integrity", deserialize_with = "lenient_string")]
    pub integrity: Option<String>,
    #[serde(default, rename = "_resolved", deserialize_with = "lenient_string")]
    pub resolved: Option<String>,
    /// Set by the resolver when the package is pruned (e.g. dev-only)
    #[serde(default, deserialize_with = "lenient_bool")]
    pub extraneous: bool,
    /// `None` when the record has no `dependencies` field at all
    #[serde(default, deserialize_with = "lenient_dependencies")]
    pub dependencies: Option<IndexMap<String, DependencyEntry>>,
}

/// A value of the `dependencies` map
#[derive(Debug, Clone)]
pub enum DependencyEntry {
    /// A resolved, nested package
    Package(Box<PackageRecord>),
    /// A placeholder where the resolver closed a cycle (or could not resolve)
    CycleMarker(String),
}

impl<'de> Deserialize<'de> for DependencyEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DependencyEntryVisitor)
    }
}

/// Streams nested records straight into [`PackageRecord`] without an
/// intermediate `Value`, so each tree level costs one pass
struct DependencyEntryVisitor;

impl DependencyEntryVisitor {
    fn marker<E>(marker: impl fmt::Display) -> Result<DependencyEntry, E> {
        Ok(DependencyEntry::CycleMarker(marker.to_string()))
    }
}

impl<'de> Visitor<'de> for DependencyEntryVisitor {
    type Value = DependencyEntry;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a package record or a placeholder")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        PackageRecord::deserialize(MapAccessDeserializer::new(map))
            .map(|record| DependencyEntry::Package(Box::new(record)))
    }

    fn visit_str<E: de::Error>(self, marker: &str) -> Result<Self::Value, E> {
        Self::marker(marker)
    }

    fn visit_string<E: de::Error>(self, marker: String) -> Result<Self::Value, E> {
        Ok(DependencyEntry::CycleMarker(marker))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Self::marker(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Self::marker(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Self::marker(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Self::marker(value)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Self::marker("null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Self::marker("null")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Self::marker(Value::Array(items))
    }
}

impl PackageRecord {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            ..Self::default()
        }
    }

    /// Adds a nested dependency, creating the `dependencies` map if needed
    pub fn with_dependency(mut self, key: &str, record: PackageRecord) -> Self {
        self.dependencies
            .get_or_insert_with(IndexMap::new)
            .insert(key.to_string(), DependencyEntry::Package(Box::new(record)));
        self
    }

    /// Adds a cycle placeholder under `key`
    pub fn with_cycle_marker(mut self, key: &str, marker: &str) -> Self {
        self.dependencies
            .get_or_insert_with(IndexMap::new)
            .insert(key.to_string(), DependencyEntry::CycleMarker(marker.to_string()));
        self
    }

    /// Ensures a (possibly empty) `dependencies` map is present
    pub fn with_empty_dependencies(mut self) -> Self {
        self.dependencies.get_or_insert_with(IndexMap::new);
        self
    }

    pub fn extraneous(mut self) -> Self {
        self.extraneous = true;
        self
    }

    /// Splits `@scope/name` into `(Some("@scope"), "name")`
    ///
    /// Unscoped names (and a bare `@scope` without a slash) have no group.
    pub fn split_name(&self) -> Option<(Option<&str>, &str)> {
        let raw = self.name.as_deref()?;
        if let Some(scoped) = raw.strip_prefix('@') {
            if let Some((scope, name)) = scoped.split_once('/') {
                if !scope.is_empty() && !name.is_empty() {
                    return Some((Some(&raw[..scope.len() + 1]), name));
                }
            }
        }
        Some((None, raw))
    }

    /// Author name from either the string or the object form
    pub fn author_name(&self) -> Option<&str> {
        match self.author.as_ref()? {
            Value::String(author) => Some(author.as_str()),
            Value::Object(author) => author.get("name").and_then(Value::as_str),
            _ => None,
        }
    }

    /// String keywords; non-string entries are ignored
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.map(PathBuf::from))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

fn lenient_dependencies<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, DependencyEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(DependenciesVisitor)
}

/// Keeps the key order of the `dependencies` object; any other shape is absent
struct DependenciesVisitor;

impl<'de> Visitor<'de> for DependenciesVisitor {
    type Value = Option<IndexMap<String, DependencyEntry>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of dependencies")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dependencies = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, entry)) = map.next_entry::<String, DependencyEntry>()? {
            dependencies.insert(key, entry);
        }
        Ok(Some(dependencies))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_scoped() {
        let record = PackageRecord::new("@angular/core", "17.0.0");
        assert_eq!(record.split_name(), Some((Some("@angular"), "core")));
    }

    #[test]
    fn test_split_name_unscoped() {
        let record = PackageRecord::new("lodash", "4.17.21");
        assert_eq!(record.split_name(), Some((None, "lodash")));
    }

    #[test]
    fn test_split_name_bare_scope() {
        let record = PackageRecord::new("@scope", "1.0.0");
        assert_eq!(record.split_name(), Some((None, "@scope")));
    }

    #[test]
    fn test_split_name_missing() {
        let record = PackageRecord::default();
        assert_eq!(record.split_name(), None);
    }

    #[test]
    fn test_deserialize_lenient_fields() {
        let json = r#"{
            "name": "pkg",
            "version": 12,
            "description": ["not", "a", "string"],
            "extraneous": "yes",
            "author": {"name": "Jane Doe", "email": "jane@example.com"},
            "keywords": ["web", 3, "Framework"]
        }"#;
        let record: PackageRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name.as_deref(), Some("pkg"));
        assert_eq!(record.version, None);
        assert_eq!(record.description, None);
        assert!(!record.extraneous);
        assert_eq!(record.author_name(), Some("Jane Doe"));
        assert_eq!(record.keywords().collect::<Vec<_>>(), vec!["web", "Framework"]);
        assert!(record.dependencies.is_none());
    }

    #[test]
    fn test_deserialize_dependencies_preserve_order_and_markers() {
        let json = r#"{
            "name": "root",
            "version": "1.0.0",
            "dependencies": {
                "zeta": {"name": "zeta", "version": "1.0.0"},
                "alpha": "^2.0.0",
                "mid": {"name": "mid", "version": "3.0.0", "extraneous": true}
            }
        }"#;
        let record: PackageRecord = serde_json::from_str(json).unwrap();
        let dependencies = record.dependencies.unwrap();

        let keys: Vec<&str> = dependencies.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert!(matches!(dependencies["alpha"], DependencyEntry::CycleMarker(_)));
        match &dependencies["mid"] {
            DependencyEntry::Package(record) => assert!(record.extraneous),
            DependencyEntry::CycleMarker(_) => panic!("expected a nested package"),
        }
    }

    #[test]
    fn test_deserialize_dependencies_of_wrong_shape_are_absent() {
        for dependencies in [r#"["a", "b"]"#, r#""a""#, "7", "null"] {
            let json = format!(r#"{{"name": "a", "dependencies": {}}}"#, dependencies);
            let record: PackageRecord = serde_json::from_str(&json).unwrap();
            assert!(record.dependencies.is_none(), "dependencies: {}", dependencies);
        }
    }

    #[test]
    fn test_deserialize_non_string_placeholders() {
        let json = r#"{"dependencies": {"a": 1, "b": false, "c": null, "d": [1]}}"#;
        let record: PackageRecord = serde_json::from_str(json).unwrap();
        let markers: Vec<String> = record
            .dependencies
            .unwrap()
            .into_values()
            .map(|entry| match entry {
                DependencyEntry::CycleMarker(marker) => marker,
                DependencyEntry::Package(_) => panic!("expected a placeholder"),
            })
            .collect();
        assert_eq!(markers, vec!["1", "false", "null", "[1]"]);
    }

    #[test]
    fn test_deserialize_empty_dependencies_is_present() {
        let record: PackageRecord =
            serde_json::from_str(r#"{"name": "a", "version": "1.0.0", "dependencies": {}}"#)
                .unwrap();
        assert!(record.dependencies.unwrap().is_empty());
    }

    #[test]
    fn test_author_string_form() {
        let record: PackageRecord =
            serde_json::from_str(r#"{"author": "Jane Doe <jane@example.com>"}"#).unwrap();
        assert_eq!(record.author_name(), Some("Jane Doe <jane@example.com>"));
    }

    #[test]
    fn test_builder_helpers() {
        let record = PackageRecord::new("root", "1.0.0")
            .with_dependency("a", PackageRecord::new("a", "1.0.0"))
            .with_cycle_marker("b", "^1.0.0");
        let dependencies = record.dependencies.unwrap();
        assert_eq!(dependencies.len(), 2);
        assert!(PackageRecord::new("x", "1").extraneous().extraneous);
    }
}
