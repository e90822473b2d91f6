use qbrecord_core::{schema::Fid, Result, TableSchema};

use indexmap::IndexMap;

/// Query options written with field names, e.g. `clist = "name.salary"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    options: IndexMap<String, String>,
}

/// Query options with every field name replaced by its FID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    options: IndexMap<String, String>,
}

impl QueryOptions {
    /// Name of the option holding free-form service directives. Its value is
    /// never resolved.
    pub const OPTIONS: &'static str = "options";

    pub fn new() -> QueryOptions {
        QueryOptions::default()
    }

    /// Set the fields returned for each record.
    pub fn clist(self, fields: impl Into<String>) -> Self {
        self.set("clist", fields)
    }

    /// Set the fields records are sorted by.
    pub fn slist(self, fields: impl Into<String>) -> Self {
        self.set("slist", fields)
    }

    /// Set service directives such as `num-10.skp-20.sortorder-D`.
    pub fn options(self, directives: impl Into<String>) -> Self {
        self.set(Self::OPTIONS, directives)
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve every option except `options` to FIDs.
    ///
    /// Values are split on `.`; components that are already numeric pass
    /// through, names are looked up in `schema`.
    pub fn build(&self, schema: &TableSchema) -> Result<ResolvedOptions> {
        let mut options = IndexMap::with_capacity(self.options.len());

        for (name, value) in &self.options {
            let resolved = if name == Self::OPTIONS {
                value.clone()
            } else {
                resolve_list(value, schema)?
            };

            options.insert(name.clone(), resolved);
        }

        Ok(ResolvedOptions { options })
    }
}

fn resolve_list(value: &str, schema: &TableSchema) -> Result<String> {
    let fids = value
        .split('.')
        .map(|component| match component.parse::<Fid>() {
            Ok(fid) => Ok(fid.to_string()),
            Err(_) => schema.fid(component).map(|fid| fid.to_string()),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(fids.join("."))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryOptions {
            options: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl ResolvedOptions {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn clist(&self) -> Option<&str> {
        self.get("clist")
    }

    pub fn slist(&self) -> Option<&str> {
        self.get("slist")
    }

    pub fn options(&self) -> Option<&str> {
        self.get(QueryOptions::OPTIONS)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
