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

//! BSON binary subtype constants and the closed set of recognized UUID
//! representations.

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The BSON binary subtype UUIDs are stored under by the legacy
/// representations.
pub const OLD_UUID_SUBTYPE: u8 = 0x03;

/// The BSON binary subtype UUIDs are stored under by the standard
/// representation.
pub const UUID_SUBTYPE: u8 = 0x04;

/// The byte-layout convention used when encoding and decoding UUID values.
///
/// The variants form a closed set: a [`CodecOptions`](crate::CodecOptions)
/// only ever holds one of these members. How each representation shuffles the
/// UUID bytes is the concern of the encoder and decoder, not of this crate.
///
/// Loose option bags identify a representation either by its numeric code
/// (see [`from_code`](Self::from_code)) or by its camelCase name
/// (`"pythonLegacy"`, `"standard"`, `"javaLegacy"`, `"csharpLegacy"`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum UuidRepresentation {
    /// The legacy representation historically used by the Python driver:
    /// RFC 4122 byte order under subtype 3. This is the designated default.
    #[default]
    PythonLegacy,
    /// RFC 4122 byte order under subtype 4.
    Standard,
    /// The legacy representation historically used by the Java driver.
    JavaLegacy,
    /// The legacy representation historically used by the C# driver.
    #[strum(serialize = "csharpLegacy")]
    CSharpLegacy,
}

impl UuidRepresentation {
    /// Looks up a representation by the numeric code used in loose option
    /// bags. Returns `None` for any code outside the closed set.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            3 => Some(Self::PythonLegacy),
            4 => Some(Self::Standard),
            5 => Some(Self::JavaLegacy),
            6 => Some(Self::CSharpLegacy),
            _ => None,
        }
    }

    /// The numeric code identifying this representation in loose option bags.
    pub fn code(self) -> i64 {
        match self {
            Self::PythonLegacy => 3,
            Self::Standard => 4,
            Self::JavaLegacy => 5,
            Self::CSharpLegacy => 6,
        }
    }

    /// The BSON binary subtype UUIDs are stored under with this
    /// representation.
    pub fn subtype(self) -> u8 {
        match self {
            Self::Standard => UUID_SUBTYPE,
            _ => OLD_UUID_SUBTYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn representation_to_str() {
        assert_eq!(<&str>::from(UuidRepresentation::PythonLegacy), "pythonLegacy");
        assert_eq!(<&str>::from(UuidRepresentation::Standard), "standard");
        assert_eq!(<&str>::from(UuidRepresentation::JavaLegacy), "javaLegacy");
        assert_eq!(<&str>::from(UuidRepresentation::CSharpLegacy), "csharpLegacy");
    }

    #[test]
    fn representation_from_str() {
        use std::str::FromStr;

        for representation in UuidRepresentation::iter() {
            let name = <&str>::from(representation);
            assert_eq!(UuidRepresentation::from_str(name).unwrap(), representation);
        }

        assert!(UuidRepresentation::from_str("not a representation").is_err());
        // Names are case sensitive, as in option strings.
        assert!(UuidRepresentation::from_str("PythonLegacy").is_err());
    }

    #[test]
    fn code_round_trip() {
        for representation in UuidRepresentation::iter() {
            assert_eq!(
                UuidRepresentation::from_code(representation.code()),
                Some(representation)
            );
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [i64::MIN, -1, 0, 1, 2, 7, 255, i64::MAX] {
            assert_eq!(UuidRepresentation::from_code(code), None);
        }
    }

    #[test]
    fn subtypes() {
        assert_eq!(UuidRepresentation::Standard.subtype(), UUID_SUBTYPE);
        assert_eq!(UuidRepresentation::PythonLegacy.subtype(), OLD_UUID_SUBTYPE);
        assert_eq!(UuidRepresentation::JavaLegacy.subtype(), OLD_UUID_SUBTYPE);
        assert_eq!(UuidRepresentation::CSharpLegacy.subtype(), OLD_UUID_SUBTYPE);
    }

    #[test]
    fn python_legacy_is_the_default() {
        assert_eq!(UuidRepresentation::default(), UuidRepresentation::PythonLegacy);
    }
}
