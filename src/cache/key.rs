//! Structured cache keys — `(resource, params)` identity.
//!
//! Invalidation matches on the typed resource family, never on string
//! prefixes, so `Members` can never accidentally sweep an unrelated key.

use std::fmt;

/// Logical resource families the query cache can hold and invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Members,
    Transactions,
    Reports,
    Tenant,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Transactions => "transactions",
            Self::Reports => "reports",
            Self::Tenant => "tenant",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a cached query: a resource family plus normalized parameters.
///
/// Parameter order is irrelevant — pairs are sorted on construction, so
/// `[("status", "active"), ("page", "1")]` and the reverse build equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: Resource,
    params: Vec<(String, String)>,
}

impl QueryKey {
    pub fn new<K, V>(resource: Resource, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        params.sort();
        Self { resource, params }
    }

    /// A key with no parameters (e.g. a singleton resource).
    pub fn bare(resource: Resource) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_order_is_irrelevant() {
        let a = QueryKey::new(Resource::Members, [("page", "1"), ("status", "active")]);
        let b = QueryKey::new(Resource::Members, [("status", "active"), ("page", "1")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_params_differ() {
        let a = QueryKey::new(Resource::Members, [("page", "1")]);
        let b = QueryKey::new(Resource::Members, [("page", "2")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_resources_differ() {
        let a = QueryKey::bare(Resource::Members);
        let b = QueryKey::bare(Resource::Transactions);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let key = QueryKey::new(Resource::Reports, [("kind", "savings-trend")]);
        assert_eq!(key.to_string(), "reports?kind=savings-trend");
        assert_eq!(QueryKey::bare(Resource::Tenant).to_string(), "tenant");
    }
}
