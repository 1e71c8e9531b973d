//! FBX container decoding into a generic node tree.
//!
//! Both the binary and the ASCII flavour decode into the same [`Document`]; nothing in
//! here knows about meshes. Mesh-level lookups go through [`resolve`].

pub(crate) mod binary;
pub(crate) mod path;
pub(crate) mod text;

use crate::foundation::error::{UvError, UvResult};

/// A parsed FBX file: the top-level node list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Node>,
}

/// One property value attached to a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Raw(Vec<u8>),
    BoolArray(Vec<bool>),
    I32Array(Vec<i32>),
    I64Array(Vec<i64>),
    F32Array(Vec<f32>),
    F64Array(Vec<f64>),
}

impl Property {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Raw(_) => "raw",
            Self::BoolArray(_) => "bool array",
            Self::I32Array(_) => "i32 array",
            Self::I64Array(_) => "i64 array",
            Self::F32Array(_) => "f32 array",
            Self::F64Array(_) => "f64 array",
        }
    }

    /// Any numeric array as `f64`.
    ///
    /// Integer arrays are accepted because ASCII files cannot distinguish `0,1` written as
    /// floats from the same values written as integers.
    pub fn to_f64_vec(&self) -> UvResult<Vec<f64>> {
        match self {
            Self::F64Array(v) => Ok(v.clone()),
            Self::F32Array(v) => Ok(v.iter().map(|&x| f64::from(x)).collect()),
            Self::I32Array(v) => Ok(v.iter().map(|&x| f64::from(x)).collect()),
            Self::I64Array(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            other => Err(UvError::decode(format!(
                "expected a numeric array, found {}",
                other.kind()
            ))),
        }
    }

    pub fn to_i64_vec(&self) -> UvResult<Vec<i64>> {
        match self {
            Self::I64Array(v) => Ok(v.clone()),
            Self::I32Array(v) => Ok(v.iter().map(|&x| i64::from(x)).collect()),
            other => Err(UvError::decode(format!(
                "expected an integer array, found {}",
                other.kind()
            ))),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Document {
    /// See [`resolve`].
    pub fn resolve(&self, path: &[&str]) -> UvResult<Option<&Property>> {
        path::resolve(&self.nodes, path)
    }
}

/// Decode an FBX file, trying the binary reader first and the ASCII reader once on failure.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn load_document(bytes: &[u8]) -> UvResult<Document> {
    let binary_err = match binary::parse(bytes) {
        Ok(doc) => return Ok(doc),
        Err(e) => e,
    };
    tracing::debug!(error = %binary_err, "binary decode failed, retrying as text");

    let text = std::str::from_utf8(bytes).map_err(|e| {
        UvError::container(format!(
            "not a binary FBX ({binary_err}) and not UTF-8 text ({e})"
        ))
    })?;
    text::parse(text).map_err(|text_err| {
        UvError::container(format!(
            "not a binary FBX ({binary_err}) and not a text FBX ({text_err})"
        ))
    })
}

pub use path::resolve;

#[cfg(test)]
#[path = "../../tests/unit/fbx/load.rs"]
mod tests;
