use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of a CLA group. Owned by the CLA group registry, opaque here.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ClaGroupId(String);

impls_for_string_newtype!(ClaGroupId);
