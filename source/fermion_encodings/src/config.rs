// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.


use serde::{Deserialize, Serialize};

use crate::{
    Error,
    encoding::{Encoding, Scheme, generate_encoding},
};

/// A request for an encoding, as written by callers that configure the
/// encoding from a file:
///
/// ```json
/// { "scheme": "bravyi-kitaev", "num-modes": 8 }
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EncodingConfig {
    pub scheme: Scheme,
    /// Number of fermionic modes. For 1-local the strings are wider.
    pub num_modes: usize,
}

impl EncodingConfig {
    #[must_use]
    pub const fn new(scheme: Scheme, num_modes: usize) -> Self {
        Self { scheme, num_modes }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn generate(&self) -> crate::Result<Encoding> {
        generate_encoding(self.scheme, self.num_modes)
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self::new(Scheme::JordanWigner, 1)
    }
}
