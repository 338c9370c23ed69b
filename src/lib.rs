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

//! Validated, immutable codec options for BSON encoding and decoding.
//!
//! [`CodecOptions`] is the configuration value object a BSON encode/decode
//! pipeline consults to decide which container type decoded documents are
//! materialized into, whether decoded datetimes carry timezone information,
//! and which [`UuidRepresentation`] to use for UUID values. The BSON byte
//! codec itself is not part of this crate.
//!
//! Options are validated once, at construction; a constructed instance is
//! immutable, holds no external resources and can be freely cloned and
//! shared across threads.
//!
//! ```
//! use bson_codec_options::{CodecOptions, DocumentClass, UuidRepresentation};
//!
//! let options = CodecOptions::builder()
//!     .tz_aware(true)
//!     .uuid_representation(UuidRepresentation::Standard)
//!     .build()?;
//! assert_eq!(options.document_class(), &DocumentClass::document());
//! # Ok::<(), bson_codec_options::Error>(())
//! ```
//!
//! Driver layers that carry options as a loose string-keyed bag can resolve
//! the codec-related keys with [`parse_codec_options`]:
//!
//! ```
//! use bson_codec_options::{OptionValue, parse_codec_options};
//! use std::collections::HashMap;
//!
//! let mut bag = HashMap::new();
//! bag.insert("tz_aware".to_string(), OptionValue::Bool(true));
//! bag.insert("appname".to_string(), OptionValue::String("reports".into()));
//!
//! let options = parse_codec_options(&bag)?;
//! assert!(options.tz_aware());
//! # Ok::<(), bson_codec_options::Error>(())
//! ```
//!
//! # MSRV
//!
//! The current MSRV is 1.88.0.

mod binary;
mod document;
mod options;

pub mod error;

pub use binary::{OLD_UUID_SUBTYPE, UUID_SUBTYPE, UuidRepresentation};
pub use document::{DocumentClass, MutableMapping};
pub use error::Error;
pub use options::{CodecOptions, OptionValue, parse_codec_options};

/// A convenience type alias for `Result`s with `Error`s.
pub type CodecResult<T> = Result<T, Error>;
