//! The embedded literal always decodes to the artifact bytes

use precompile_embed::embed::template::format_byte_list;
use precompile_embed::TemplateSpec;
use proptest::prelude::*;

use crate::common::parse_declaration;

#[test]
fn test_known_bytes() {
    assert_eq!(format_byte_list(&[1, 2, 255]), "1, 2, 255");
}

#[test]
fn test_every_byte_value() {
    let bytes: Vec<u8> = (0..=255).collect();
    let source = TemplateSpec::default().render("verify", &bytes).unwrap();
    assert_eq!(parse_declaration(&source).1, bytes);
}

proptest! {
    #[test]
    fn prop_render_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let source = TemplateSpec::default().render("update", &bytes).unwrap();
        let (name, decoded) = parse_declaration(&source);
        prop_assert_eq!(name, "wasmUpdate");
        prop_assert_eq!(decoded, bytes);
    }
}
