use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::template::resources::{Resource, ResourceKind};
use crate::template::value::CfnValue;

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: CfnValue,
}

/// Resources and outputs produced by one assembler call.
///
/// Keys are kept sorted, so two graphs built from the same input serialize
/// byte for byte identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceGraph {
    pub resources: BTreeMap<String, Resource>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Output>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource and hand back a `Ref` to it.
    pub fn add(&mut self, logical_id: &str, resource: Resource) -> CfnValue {
        self.resources.insert(logical_id.to_owned(), resource);
        CfnValue::reference(logical_id)
    }

    pub fn add_kind(&mut self, logical_id: &str, kind: ResourceKind) -> CfnValue {
        self.add(logical_id, Resource::new(kind))
    }

    pub fn add_output(&mut self, logical_id: &str, description: &str, value: CfnValue) {
        self.outputs.insert(
            logical_id.to_owned(),
            Output {
                description: Some(description.to_owned()),
                value,
            },
        );
    }

    /// Move everything from `other` into this graph, refusing to shadow an
    /// existing logical id.
    pub fn merge(&mut self, other: ResourceGraph) -> Result<()> {
        for (id, resource) in other.resources {
            if self.resources.contains_key(&id) {
                bail!("duplicate logical id '{}' in resource graph", id);
            }
            self.resources.insert(id, resource);
        }
        for (id, output) in other.outputs {
            if self.outputs.contains_key(&id) {
                bail!("duplicate output '{}' in resource graph", id);
            }
            self.outputs.insert(id, output);
        }
        Ok(())
    }

    /// Move everything from `other` into this graph when the caller owns both
    /// naming schemes and they cannot collide. Shadowing an id is a bug, caught
    /// in debug builds.
    pub fn absorb(&mut self, other: ResourceGraph) {
        for (id, resource) in other.resources {
            let shadowed = self.resources.insert(id.clone(), resource);
            debug_assert!(shadowed.is_none(), "logical id '{}' shadowed while absorbing graph", id);
        }
        for (id, output) in other.outputs {
            let shadowed = self.outputs.insert(id.clone(), output);
            debug_assert!(shadowed.is_none(), "output '{}' shadowed while absorbing graph", id);
        }
    }

    pub fn get(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn resources_of_type(&self, type_name: &str) -> Vec<(&str, &Resource)> {
        self.resources
            .iter()
            .filter(|(_, r)| r.type_name() == type_name)
            .map(|(id, r)| (id.as_str(), r))
            .collect()
    }

    pub fn count_of_type(&self, type_name: &str) -> usize {
        self.resources_of_type(type_name).len()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// The document handed to the provisioning engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub graph: ResourceGraph,
}

impl Template {
    pub fn new(description: Option<String>, graph: ResourceGraph) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_owned(),
            description,
            graph,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod test {
    use super::ResourceGraph;
    use crate::template::resources::{ResourceKind, RestApiProps};

    fn rest_api(id: &str) -> ResourceGraph {
        let mut graph = ResourceGraph::new();
        graph.add_kind(
            id,
            ResourceKind::RestApi(RestApiProps {
                name: id.to_string(),
                description: String::new(),
            }),
        );
        graph
    }

    #[test]
    fn merge_rejects_duplicate_ids() {
        let mut graph = rest_api("Api");
        assert!(graph.merge(rest_api("Other")).is_ok());
        let err = graph.merge(rest_api("Api")).unwrap_err();
        assert!(err.to_string().contains("duplicate logical id 'Api'"));
    }

    #[test]
    fn absorb_keeps_disjoint_graphs() {
        let mut graph = rest_api("Api");
        graph.absorb(rest_api("Other"));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    #[should_panic(expected = "shadowed while absorbing graph")]
    fn absorb_panics_on_shadowed_id_in_debug() {
        let mut graph = rest_api("Api");
        graph.absorb(rest_api("Api"));
    }
}
