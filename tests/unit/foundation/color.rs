use serde_json::json;

use super::*;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    let c: ColorDef = "#0f8".parse().unwrap();
    assert_eq!(c.to_rgba8(), [0x00, 0xff, 0x88, 0xff]);
}

#[test]
fn parses_css_names_case_insensitively() {
    let c: ColorDef = "White".parse().unwrap();
    assert_eq!(c.to_rgba8(), [255, 255, 255, 255]);

    let c: ColorDef = serde_json::from_value(json!("green")).unwrap();
    assert_eq!(c.to_rgba8(), [0, 128, 0, 255]);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn rejects_unknown_names_and_bad_hex() {
    assert!("chartreuse-ish".parse::<ColorDef>().is_err());
    assert!("#12345".parse::<ColorDef>().is_err());
    assert!("#gg0000".parse::<ColorDef>().is_err());
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = ColorDef::rgba(1.0, 0.5, 0.0, 0.5);
    assert_eq!(c.to_rgba8_premul(), [128, 64, 0, 128]);
    assert_eq!(c.to_rgba8(), [255, 128, 0, 128]);
}
