use super::*;

fn node(name: &str, properties: Vec<Property>, children: Vec<Node>) -> Node {
    Node {
        name: name.to_string(),
        properties,
        children,
    }
}

fn tree() -> Vec<Node> {
    vec![
        node("FBXHeaderExtension", vec![], vec![]),
        node(
            "Objects",
            vec![],
            vec![
                node(
                    "Geometry",
                    vec![Property::I64(1), Property::String("Mesh".into())],
                    vec![
                        node("PolygonVertexIndex", vec![Property::I32Array(vec![0, 1, -3])], vec![]),
                        node("Empty", vec![], vec![]),
                    ],
                ),
                node(
                    "Geometry",
                    vec![Property::I64(2)],
                    vec![node("PolygonVertexIndex", vec![Property::I32Array(vec![9])], vec![])],
                ),
            ],
        ),
    ]
}

#[test]
fn resolves_first_property_of_final_node() {
    let nodes = tree();
    let p = resolve(&nodes, &["Objects", "Geometry", "PolygonVertexIndex"]).unwrap();
    assert_eq!(p, Some(&Property::I32Array(vec![0, 1, -3])));
}

#[test]
fn first_matching_sibling_wins() {
    let nodes = tree();
    let p = resolve(&nodes, &["Objects", "Geometry"]).unwrap();
    assert_eq!(p, Some(&Property::I64(1)));
}

#[test]
fn missing_step_is_absent_not_an_error() {
    let nodes = tree();
    assert_eq!(resolve(&nodes, &["Objects", "Model", "X"]).unwrap(), None);
    assert_eq!(resolve(&nodes, &["Nope"]).unwrap(), None);
}

#[test]
fn final_node_without_properties_is_absent() {
    let nodes = tree();
    assert_eq!(
        resolve(&nodes, &["Objects", "Geometry", "Empty"]).unwrap(),
        None
    );
}

#[test]
fn empty_path_is_a_decode_error() {
    let nodes = tree();
    assert!(matches!(resolve(&nodes, &[]), Err(UvError::Decode(_))));
}
