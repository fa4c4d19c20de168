//! Loading the lookup table and swatch images from disk.

mod common;

use dyeatlas::error::LoadError;
use dyeatlas::models::AppConfig;
use dyeatlas::services::SwatchLibrary;
use pretty_assertions::assert_eq;
use serde_json::json;
use swatch_engine::Field;

use common::{assert_rgb_near, fixtures, TestWorkspace};

#[tokio::test]
async fn test_loads_every_fixture() {
    let ws = TestWorkspace::new();
    let library = ws.library().await;

    assert_eq!(library.len(), fixtures::SWATCHES.len());
    let report = library.report();
    assert_eq!(report.rows.accepted, 6);
    assert_eq!(report.rows.malformed, 0);
    assert_eq!(report.images_dropped, 0);
    assert_eq!(report.previews_missing, 2);

    // Load order is lookup order
    let names: Vec<_> = library.records().iter().map(|r| r.filename.as_str()).collect();
    let expected: Vec<_> = fixtures::SWATCHES.iter().map(|s| s.filename).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_string_saturation_is_coerced() {
    let ws = TestWorkspace::new();
    let library = ws.library().await;

    for fixture in &fixtures::SWATCHES {
        let record = library.catalogue().get(fixture.filename).unwrap();
        let expected = fixture.hsb();
        assert!((record.color.s - expected.s).abs() < 1e-9);
        assert!((record.color.h - expected.h).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_field_values_are_ordered() {
    let ws = TestWorkspace::new();
    let library = ws.library().await;
    let catalogue = library.catalogue();

    assert_eq!(
        catalogue.unique_values(Field::Ph).values(),
        ["Acidic", "Neutral", "Alkaline"]
    );
    assert_eq!(
        catalogue.unique_values(Field::ExposureTime).values(),
        ["30m", "1h", "12h"]
    );
    assert_eq!(
        catalogue.unique_values(Field::Mordant).values(),
        ["Alum", "Copper", "Iron"]
    );
}

#[tokio::test]
async fn test_bad_rows_and_missing_tiles_are_dropped() {
    let extra = vec![
        // Unparseable hue
        json!({"filename": "bad_hue.png", "h": "abc", "s": 10, "b": 10, "mordant": "Tin"}),
        // Missing brightness
        json!({"filename": "no_b.png", "h": 10, "s": 10, "mordant": "Tin"}),
        // Duplicate filename
        json!({"filename": "weld_alum_neutral.png", "h": 1, "s": 1, "b": 1}),
        // Valid row whose tile image does not exist
        json!({"filename": "ghost.png", "h": 5, "s": 5, "b": 5, "mordant": "Tin"}),
    ];
    let ws = TestWorkspace::with_swatches(&fixtures::SWATCHES, extra);
    let library = ws.library().await;

    assert_eq!(library.len(), 6);
    let report = library.report();
    assert_eq!(report.rows.malformed, 2);
    assert_eq!(report.rows.duplicates, 1);
    assert_eq!(report.images_dropped, 1);

    // Indexes are rebuilt over survivors only
    assert!(!library
        .catalogue()
        .unique_values(Field::Mordant)
        .values()
        .contains(&"Tin".to_string()));

    // The first occurrence of a duplicate wins
    let weld = library.catalogue().get("weld_alum_neutral.png").unwrap();
    assert!(weld.color.b > 50.0);
}

#[tokio::test]
async fn test_preview_or_tile() {
    let ws = TestWorkspace::new();
    let library = ws.library().await;

    let with_preview = fixtures::find("madder_alum_acid.png");
    let images = library.images(with_preview.filename).unwrap();
    let [r, g, b] = with_preview.rgb;
    assert_rgb_near(
        images.preview_or_tile().pixel(0, 0).unwrap(),
        [255 - r, 255 - g, 255 - b],
        0,
    );

    let without = fixtures::find("weld_iron_alkaline.png");
    let images = library.images(without.filename).unwrap();
    assert!(images.preview.is_none());
    assert_rgb_near(images.preview_or_tile().pixel(0, 0).unwrap(), without.rgb, 0);
}

#[tokio::test]
async fn test_missing_lookup_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default().with_path_overrides(
        Some(dir.path().join("nope.json")),
        None,
        None,
    );
    let err = SwatchLibrary::open(&config).await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[tokio::test]
async fn test_object_shaped_lookup() {
    let ws = TestWorkspace::new();
    let fixture = fixtures::find("madder_alum_acid.png");
    let hsb = fixture.hsb();
    let doc = json!({
        "first": {"filename": fixture.filename, "h": hsb.h, "s": hsb.s, "b": hsb.b},
    });
    std::fs::write(&ws.config.paths.lookup, doc.to_string()).unwrap();

    let library = ws.library().await;
    assert_eq!(library.len(), 1);
    assert_eq!(library.records()[0].filename, fixture.filename);
}

#[tokio::test]
async fn test_object_shaped_lookup_keeps_document_order() {
    let ws = TestWorkspace::new();
    let later = fixtures::find("weld_alum_neutral.png");
    let earlier = fixtures::find("madder_alum_acid.png");
    let (lh, eh) = (later.hsb(), earlier.hsb());
    let doc = format!(
        r#"{{"zz": {{"filename": "{}", "h": {}, "s": {}, "b": {}}},
            "aa": {{"filename": "{}", "h": {}, "s": {}, "b": {}}}}}"#,
        later.filename, lh.h, lh.s, lh.b, earlier.filename, eh.h, eh.s, eh.b,
    );
    std::fs::write(&ws.config.paths.lookup, doc).unwrap();

    let library = ws.library().await;
    let names: Vec<_> = library.records().iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, [later.filename, earlier.filename]);
}
