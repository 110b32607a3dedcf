use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

pub const PSEUDO_REGION: &str = "AWS::Region";
pub const PSEUDO_URL_SUFFIX: &str = "AWS::URLSuffix";

/// A property value inside the template: either a plain string or one of the
/// intrinsic functions the provisioning engine resolves at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CfnValue {
    Literal(String),
    /// `{"Ref": "<logical id or pseudo parameter>"}`
    Ref(String),
    /// `{"Fn::GetAtt": ["<logical id>", "<attribute>"]}`
    GetAtt(String, String),
    /// `{"Fn::Join": ["", [..]]}`
    Join(Vec<CfnValue>),
}

impl CfnValue {
    pub fn literal(value: impl Into<String>) -> Self {
        CfnValue::Literal(value.into())
    }

    pub fn reference(logical_id: impl Into<String>) -> Self {
        CfnValue::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        CfnValue::GetAtt(logical_id.into(), attribute.into())
    }

    pub fn region() -> Self {
        CfnValue::Ref(PSEUDO_REGION.to_owned())
    }

    pub fn url_suffix() -> Self {
        CfnValue::Ref(PSEUDO_URL_SUFFIX.to_owned())
    }

    /// Concatenate parts. Nested joins are flattened and adjacent literals
    /// merged, so a join of plain strings collapses into a single literal.
    pub fn join(parts: impl IntoIterator<Item = CfnValue>) -> Self {
        let mut flat: Vec<CfnValue> = Vec::new();
        for part in parts {
            let nested = match part {
                CfnValue::Join(inner) => inner,
                other => vec![other],
            };
            for value in nested {
                if let CfnValue::Literal(s) = &value {
                    if s.is_empty() {
                        continue;
                    }
                    if let Some(CfnValue::Literal(prev)) = flat.last_mut() {
                        prev.push_str(s);
                        continue;
                    }
                }
                flat.push(value);
            }
        }

        match flat.len() {
            0 => CfnValue::Literal(String::new()),
            1 => flat.remove(0),
            _ => CfnValue::Join(flat),
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            CfnValue::Literal(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CfnValue {
    fn from(value: &str) -> Self {
        CfnValue::Literal(value.to_owned())
    }
}

impl From<String> for CfnValue {
    fn from(value: String) -> Self {
        CfnValue::Literal(value)
    }
}

impl Serialize for CfnValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CfnValue::Literal(s) => serializer.serialize_str(s),
            CfnValue::Ref(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", id)?;
                map.end()
            }
            CfnValue::GetAtt(id, attribute) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[id, attribute])?;
                map.end()
            }
            CfnValue::Join(parts) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::Join", &JoinArgs(parts))?;
                map.end()
            }
        }
    }
}

struct JoinArgs<'a>(&'a [CfnValue]);

impl Serialize for JoinArgs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element("")?;
        seq.serialize_element(self.0)?;
        seq.end()
    }
}
