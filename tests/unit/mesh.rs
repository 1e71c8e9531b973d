#[path = "../support/mod.rs"]
mod support;

use super::*;
use crate::fbx::{Node, Property, load_document};

#[test]
fn extracts_the_three_arrays_from_text_and_binary() {
    let uvs = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    let text = support::uv_mesh_text(&uvs, &[0, 1, 2], &[5, 7, -9]);
    let bin = support::uv_mesh_binary(7500, &uvs, &[0, 1, 2], &[5, 7, -9], true);

    for bytes in [text.into_bytes(), bin] {
        let mesh = UvMesh::from_document(&load_document(&bytes).unwrap()).unwrap();
        assert_eq!(mesh.uvs, uvs);
        assert_eq!(mesh.uv_indices, vec![0, 1, 2]);
        assert_eq!(mesh.polygon_vertex_indices, vec![5, 7, -9]);
        assert_eq!(mesh.vertex_count(), 3);
    }
}

#[test]
fn missing_path_names_the_property() {
    let doc = Document {
        nodes: vec![Node {
            name: "Objects".into(),
            properties: vec![],
            children: vec![Node {
                name: "Geometry".into(),
                properties: vec![],
                children: vec![Node {
                    name: "PolygonVertexIndex".into(),
                    properties: vec![Property::I32Array(vec![0, 1, -3])],
                    children: vec![],
                }],
            }],
        }],
    };
    let err = UvMesh::from_document(&doc).unwrap_err();
    assert!(matches!(err, UvError::Decode(_)));
    assert!(
        err.to_string()
            .contains("missing property `Objects/Geometry/LayerElementUV/UV`"),
        "{err}"
    );
}

#[test]
fn wrong_property_type_is_a_decode_error() {
    let text = "Objects: {\n Geometry: 1 {\n  PolygonVertexIndex: \"oops\"\n  LayerElementUV: 0 {\n   UV: *2 {\n    a: 0.5,0.5\n   }\n   UVIndex: *1 {\n    a: 0\n   }\n  }\n }\n}\n";
    let doc = load_document(text.as_bytes()).unwrap();
    let err = UvMesh::from_document(&doc).unwrap_err();
    assert!(err.to_string().contains("expected an integer array, found string"), "{err}");
}

#[test]
fn uv_lookup_is_bounds_checked() {
    let mesh = UvMesh {
        uvs: vec![0.25, 0.75, 1.0],
        ..UvMesh::default()
    };
    assert_eq!(mesh.uv(0).unwrap(), (0.25, 0.75));
    // Odd trailing coordinate does not form a pair.
    assert!(mesh.uv(1).is_err());
    assert!(mesh.uv(usize::MAX / 2).is_err());
}
