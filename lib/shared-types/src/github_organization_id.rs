use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// GitHub organization login, e.g. `communitybridge`.
///
/// Compared byte-exactly: `Acme` and `acme` are different identifiers.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct GithubOrganizationId(String);

impls_for_string_newtype!(GithubOrganizationId);
