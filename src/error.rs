// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

use std::fmt;

/// Errors encountered while validating codec options.
///
/// To inspect the details of the error use [`details`](Self::details) or
/// [`into_details`](Self::into_details) to get a [`Details`] which contains
/// more precise error information.
///
/// See [`Details`] for all possible errors.
#[derive(thiserror::Error, Debug)]
#[repr(transparent)]
#[error(transparent)]
pub struct Error {
    details: Box<Details>,
}

impl Error {
    pub fn new(details: Details) -> Self {
        Self {
            details: Box::new(details),
        }
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn into_details(self) -> Details {
        *self.details
    }
}

impl From<Details> for Error {
    fn from(details: Details) -> Self {
        Self::new(details)
    }
}

/// All the errors this crate can produce.
///
/// Every error is raised synchronously at construction or option-bag parsing
/// time; the accessors of a constructed [`CodecOptions`](crate::CodecOptions)
/// never fail.
#[derive(thiserror::Error, PartialEq)]
pub enum Details {
    /// Containers produced by the document class violate the mutable-mapping
    /// contract. `violation` names the first violated clause.
    #[error("document_class `{class}` must behave like a mutable ordered mapping: {violation}")]
    DocumentClassContract {
        class: String,
        violation: &'static str,
    },

    #[error("document_class must be a mapping-like container class, got a {found} value")]
    DocumentClassType { found: &'static str },

    #[error("tz_aware must be a boolean, got a {found} value")]
    TzAwareType { found: &'static str },

    #[error("uuid_representation must be a value from ALL_UUID_REPRESENTATIONS, got code {0}")]
    UnknownUuidRepresentationCode(i64),

    #[error("uuid_representation must be a value from ALL_UUID_REPRESENTATIONS, got `{0}`")]
    UnknownUuidRepresentationName(String),

    #[error("uuid_representation must be a value from ALL_UUID_REPRESENTATIONS, got a {found} value")]
    UuidRepresentationValue { found: &'static str },
}

impl fmt::Debug for Details {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}
