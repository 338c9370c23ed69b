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

//! The [`CodecOptions`] value object and the loose option-bag adapter.

use crate::{
    CodecResult, binary::UuidRepresentation, document::DocumentClass, error::Details,
};
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

/// Encapsulates the options governing how BSON documents are decoded and how
/// UUID values are mapped to and from their binary encoding.
///
/// Decoders use [`document_class`](Self::document_class) to pick the container
/// type decoded documents are materialized into and
/// [`tz_aware`](Self::tz_aware) to decide whether decoded datetimes carry an
/// explicit UTC offset; both encoders and decoders use
/// [`uuid_representation`](Self::uuid_representation) to pick the UUID byte
/// layout.
///
/// Instances are immutable once constructed: "changing" an option means
/// constructing a new instance. They hold no external resources and can be
/// freely cloned and shared across threads. Equality is field-wise, so higher
/// layers can compare instances to detect interchangeable configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    document_class: DocumentClass,
    tz_aware: bool,
    uuid_representation: UuidRepresentation,
}

#[bon::bon]
impl CodecOptions {
    /// Builds a `CodecOptions`, verifying that containers of
    /// `document_class` honor the mutable-mapping contract.
    ///
    /// Construction either fully succeeds or fails; a failed build leaves no
    /// partially constructed value behind, and no further checks happen over
    /// the value's lifetime.
    #[builder]
    pub fn builder(
        #[builder(default)] document_class: DocumentClass,
        #[builder(default = false)] tz_aware: bool,
        #[builder(default)] uuid_representation: UuidRepresentation,
    ) -> CodecResult<Self> {
        document_class.check_mapping_contract()?;
        Ok(Self {
            document_class,
            tz_aware,
            uuid_representation,
        })
    }
}

impl CodecOptions {
    /// Creates a `CodecOptions` from the three options.
    pub fn new(
        document_class: DocumentClass,
        tz_aware: bool,
        uuid_representation: UuidRepresentation,
    ) -> CodecResult<Self> {
        Self::builder()
            .document_class(document_class)
            .tz_aware(tz_aware)
            .uuid_representation(uuid_representation)
            .build()
    }

    /// The container class decoded documents are materialized into.
    pub fn document_class(&self) -> &DocumentClass {
        &self.document_class
    }

    /// Whether decoded datetimes carry an explicit UTC offset. When `false`,
    /// decoded datetimes are naive.
    pub fn tz_aware(&self) -> bool {
        self.tz_aware
    }

    /// The representation used when encoding and decoding UUID values.
    pub fn uuid_representation(&self) -> UuidRepresentation {
        self.uuid_representation
    }
}

impl Default for CodecOptions {
    /// The canonical document class, naive datetimes and the legacy UUID
    /// representation.
    fn default() -> Self {
        // The default class is known to pass the mapping contract check.
        Self {
            document_class: DocumentClass::document(),
            tz_aware: false,
            uuid_representation: UuidRepresentation::PythonLegacy,
        }
    }
}

/// A loosely typed value in a driver option bag.
///
/// Higher driver layers collect options from many sources (URI options,
/// keyword-style settings) into a bag of well-known string keys mapped to
/// these variants. [`parse_codec_options`] resolves the codec-related keys
/// out of such a bag.
#[derive(Debug, Clone)]
pub enum OptionValue {
    Bool(bool),
    I64(i64),
    String(String),
    DocumentClass(DocumentClass),
    UuidRepresentation(UuidRepresentation),
}

impl OptionValue {
    /// A short name for the variant's type, used in error messages.
    fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::I64(_) => "integer",
            OptionValue::String(_) => "string",
            OptionValue::DocumentClass(_) => "document class",
            OptionValue::UuidRepresentation(_) => "uuid representation",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::I64(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<DocumentClass> for OptionValue {
    fn from(value: DocumentClass) -> Self {
        OptionValue::DocumentClass(value)
    }
}

impl From<UuidRepresentation> for OptionValue {
    fn from(value: UuidRepresentation) -> Self {
        OptionValue::UuidRepresentation(value)
    }
}

/// Resolves the codec-related keys of a loose option bag into a validated
/// [`CodecOptions`], applying defaults for the missing ones.
///
/// Recognized keys:
///
/// - `"document_class"`, defaulting to [`DocumentClass::document`];
/// - `"tz_aware"`, defaulting to `false`;
/// - `"uuidrepresentation"`, defaulting to
///   [`UuidRepresentation::PythonLegacy`], accepted as the enum itself, its
///   numeric code, or its camelCase name.
///
/// Any other key is ignored, since the bag may carry unrelated driver
/// options. Keys are resolved in the order above and validation failures
/// propagate unchanged, so the first invalid value determines the error.
pub fn parse_codec_options(options: &HashMap<String, OptionValue>) -> CodecResult<CodecOptions> {
    for key in options.keys() {
        if !matches!(
            key.as_str(),
            "document_class" | "tz_aware" | "uuidrepresentation"
        ) {
            debug!("ignoring unrelated option `{key}`");
        }
    }

    let document_class = match options.get("document_class") {
        None => DocumentClass::document(),
        Some(OptionValue::DocumentClass(class)) => class.clone(),
        Some(other) => {
            return Err(Details::DocumentClassType {
                found: other.type_name(),
            }
            .into());
        }
    };

    let tz_aware = match options.get("tz_aware") {
        None => false,
        Some(OptionValue::Bool(tz_aware)) => *tz_aware,
        Some(other) => {
            return Err(Details::TzAwareType {
                found: other.type_name(),
            }
            .into());
        }
    };

    let uuid_representation = match options.get("uuidrepresentation") {
        None => UuidRepresentation::PythonLegacy,
        Some(OptionValue::UuidRepresentation(representation)) => *representation,
        Some(OptionValue::I64(code)) => UuidRepresentation::from_code(*code)
            .ok_or(Details::UnknownUuidRepresentationCode(*code))?,
        Some(OptionValue::String(name)) => UuidRepresentation::from_str(name)
            .map_err(|_| Details::UnknownUuidRepresentationName(name.clone()))?,
        Some(other) => {
            return Err(Details::UuidRepresentationValue {
                found: other.type_name(),
            }
            .into());
        }
    };

    CodecOptions::new(document_class, tz_aware, uuid_representation)
}
