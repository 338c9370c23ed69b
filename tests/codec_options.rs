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

//! End-to-end exercise of the public surface, the way a driver layer would
//! use it: build options per collection handle, compare them for
//! interchangeability, and materialize decoded documents through the
//! configured class.

use bson_codec_options::{
    CodecOptions, DocumentClass, OptionValue, UuidRepresentation, error::Details,
    parse_codec_options,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::collections::HashMap;

type TestResult = anyhow::Result<()>;

fn bag<const N: usize>(entries: [(&str, OptionValue); N]) -> HashMap<String, OptionValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[test]
fn driver_bag_round_trip() -> TestResult {
    // A bag as a driver would assemble it from URI options plus unrelated
    // settings.
    let options = parse_codec_options(&bag([
        ("tz_aware", OptionValue::Bool(true)),
        ("uuidrepresentation", OptionValue::String("standard".into())),
        ("appname", OptionValue::String("reports".into())),
        ("max_pool_size", OptionValue::I64(50)),
    ]))?;

    assert_eq!(options.document_class(), &DocumentClass::document());
    assert!(options.tz_aware());
    assert_eq!(options.uuid_representation(), UuidRepresentation::Standard);

    // The same configuration built directly compares equal, which is what
    // client/database/collection caching relies on.
    let direct = CodecOptions::builder()
        .tz_aware(true)
        .uuid_representation(UuidRepresentation::Standard)
        .build()?;
    assert_eq!(options, direct);
    Ok(())
}

#[test]
fn decoded_documents_go_through_the_configured_class() -> TestResult {
    let options = CodecOptions::new(
        DocumentClass::index_map(),
        false,
        UuidRepresentation::PythonLegacy,
    )?;

    // A decoder materializes each document through the class.
    let mut document = options.document_class().instantiate();
    document.set("_id", Value::from(1));
    document.set("name", Value::from("ada"));
    document.set("_id", Value::from(2));

    let keys: Vec<&str> = document.entries().map(|(key, _)| key).collect();
    assert_eq!(keys, ["_id", "name"]);
    assert_eq!(document.get("_id"), Some(&Value::from(2)));
    Ok(())
}

#[test]
fn subtype_selection_follows_the_representation() -> TestResult {
    // An encoder picks the binary subtype off the configured representation.
    let legacy = CodecOptions::default();
    let standard = CodecOptions::builder()
        .uuid_representation(UuidRepresentation::Standard)
        .build()?;

    assert_eq!(legacy.uuid_representation().subtype(), 0x03);
    assert_eq!(standard.uuid_representation().subtype(), 0x04);
    Ok(())
}

#[test]
fn validation_failures_surface_as_details() {
    let error = parse_codec_options(&bag([("uuidrepresentation", OptionValue::I64(42))]))
        .unwrap_err();
    assert_eq!(error.details(), &Details::UnknownUuidRepresentationCode(42));
    assert_eq!(
        error.to_string(),
        "uuid_representation must be a value from ALL_UUID_REPRESENTATIONS, got code 42"
    );
}

#[test]
fn options_are_shareable_across_threads() -> TestResult {
    let options = CodecOptions::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let options = options.clone();
            std::thread::spawn(move || {
                assert_eq!(options.document_class(), &DocumentClass::document());
                assert!(!options.tz_aware());
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
    Ok(())
}
