#[path = "../../support/mod.rs"]
mod support;

use support::{Prop, rec, uv_mesh_binary, write_binary};

use super::*;

#[test]
fn decodes_nested_nodes_and_scalar_properties() {
    let bytes = write_binary(
        7400,
        &[rec(
            "Root",
            vec![Prop::I32(-7), Prop::F64(0.25), Prop::Str("hi".into())],
            vec![rec("Leaf", vec![Prop::I64(1 << 40)], vec![])],
        )],
    );
    let doc = parse(&bytes).unwrap();
    assert_eq!(doc.nodes.len(), 1);
    let root = &doc.nodes[0];
    assert_eq!(root.name, "Root");
    assert_eq!(
        root.properties,
        vec![
            Property::I32(-7),
            Property::F64(0.25),
            Property::String("hi".into())
        ]
    );
    assert_eq!(root.children[0].name, "Leaf");
    assert_eq!(root.children[0].properties, vec![Property::I64(1 << 40)]);
}

#[test]
fn raw_and_zlib_arrays_decode_identically() {
    for version in [7400, 7500] {
        let uvs = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        let raw = parse(&uv_mesh_binary(version, &uvs, &[0, 1, 2], &[5, 7, -9], false)).unwrap();
        let zlib = parse(&uv_mesh_binary(version, &uvs, &[0, 1, 2], &[5, 7, -9], true)).unwrap();
        assert_eq!(raw, zlib, "version {version}");

        let pvi = raw
            .resolve(&["Objects", "Geometry", "PolygonVertexIndex"])
            .unwrap()
            .unwrap();
        assert_eq!(pvi, &Property::I32Array(vec![5, 7, -9]));
    }
}

#[test]
fn rejects_missing_magic() {
    let err = parse(b"; FBX 7.4.0 project file\n").unwrap_err();
    assert!(matches!(err, UvError::Container(_)));
}

#[test]
fn rejects_truncated_records() {
    let bytes = uv_mesh_binary(7400, &[0.0, 0.0], &[0], &[-1], false);
    let cut = &bytes[..bytes.len() / 2];
    assert!(matches!(parse(cut), Err(UvError::Container(_))));
}

#[test]
fn rejects_unknown_property_codes() {
    let mut bytes = write_binary(7400, &[rec("N", vec![Prop::I32(1)], vec![])]);
    let code_at = support::FBX_MAGIC.len() + 2 + 4 + 13 + 1;
    assert_eq!(bytes[code_at], b'I');
    bytes[code_at] = b'?';
    let err = parse(&bytes).unwrap_err();
    assert!(err.to_string().contains("unknown property type code"));
}

#[test]
fn rejects_corrupt_zlib_payload() {
    let mut bytes = write_binary(7400, &[rec("N", vec![Prop::F64ArrayZlib(vec![1.0; 32])], vec![])]);
    // code + length + encoding + stored length, then the deflate stream.
    let payload_at = support::FBX_MAGIC.len() + 2 + 4 + 13 + 1 + 13;
    for b in &mut bytes[payload_at..payload_at + 4] {
        *b ^= 0xff;
    }
    assert!(matches!(parse(&bytes), Err(UvError::Container(_))));
}
