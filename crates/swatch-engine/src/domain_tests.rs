//! Domain-critical regression tests for swatch-engine.
//!
//! Each test pins a behavior that presentation code or exported data relies
//! on. The doc comment on each test says what a failure means.

#[cfg(test)]
mod domain_tests {
    use crate::catalogue::{Catalogue, Field, FieldIndex, RawSwatchRow};
    use crate::color::{hue_distance, score, Hsb, MatchWeights};
    use crate::filter::FilterEngine;
    use crate::hit::find_entry_at;
    use crate::layout::{GridAxes, LayoutStrategy, NestedGridLayout, PolarLayout, PositionedEntry};
    use crate::mosaic::MosaicComposer;
    use crate::pixels::PixelBuffer;

    fn swatch(name: &str, h: f64, s: f64, b: f64) -> RawSwatchRow {
        RawSwatchRow {
            filename: name.into(),
            h,
            s,
            b,
            dyestuff: "Madder".into(),
            ph: "Neutral".into(),
            mordant: "Alum".into(),
            additive: "None".into(),
            time: "30m".into(),
        }
    }

    // ========================================================================
    // Hue distance and score
    // ========================================================================

    /// If this breaks, it means: hue distance stopped wrapping around the
    /// wheel, so deep reds near 350 no longer match reds near 10.
    #[test]
    fn test_hue_distance_is_symmetric_and_wraps() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        let hues = [0.0, 10.0, 90.0, 179.0, 180.0, 181.0, 270.0, 359.5];
        for &a in &hues {
            assert_eq!(hue_distance(a, a), 0.0);
            for &b in &hues {
                assert_eq!(hue_distance(a, b), hue_distance(b, a), "{} {}", a, b);
                assert!(hue_distance(a, b) <= 180.0);
            }
        }
    }

    /// If this breaks, it means: a swatch could score better than an exact
    /// match, or a negative score leaked into exports.
    #[test]
    fn test_score_non_negative_and_zero_on_identity() {
        let colors = [
            Hsb::new(0.0, 0.0, 0.0),
            Hsb::new(359.0, 100.0, 100.0),
            Hsb::new(120.0, 35.5, 62.0),
        ];
        let weights = [
            MatchWeights::default(),
            MatchWeights::new(0.0, 0.0, 0.0),
            MatchWeights::new(2.0, 0.0, 5.0),
        ];
        for &w in &weights {
            for &a in &colors {
                assert_eq!(score(a, a, w), 0.0);
                for &b in &colors {
                    assert!(score(a, b, w) >= 0.0);
                }
            }
        }
    }

    // ========================================================================
    // Mosaic
    // ========================================================================

    /// If this breaks, it means: either tile sampling no longer reports the
    /// true average of a uniform region, or the nearest-swatch scan picks a
    /// record other than the unique minimum.
    #[test]
    fn test_solid_sample_matches_unique_minimum() {
        let catalogue = Catalogue::load(vec![
            swatch("red", 0.0, 100.0, 100.0),
            swatch("green", 120.0, 100.0, 100.0),
            swatch("dark_blue", 240.0, 100.0, 30.0),
        ]);
        let candidates: Vec<_> = catalogue.records().iter().collect();
        // Pure blue: nearest is dark_blue (0 hue, 70 brightness apart),
        // well below green (120 hue apart) and red (120 hue apart)
        let sample = PixelBuffer::solid(45, 33, [0, 0, 255]).unwrap();
        let target = Hsb::new(240.0, 100.0, 100.0);

        let mosaic = MosaicComposer::new(MatchWeights::default())
            .tile_size(10)
            .compose(&sample, &candidates)
            .unwrap();

        assert_eq!(mosaic.tiles().count(), 5 * 4);
        for tile in mosaic.tiles() {
            assert_eq!(tile.sampled, target);
            assert_eq!(tile.swatch.filename, "dark_blue");
            assert_eq!(tile.score, score(tile.swatch.color, target, MatchWeights::default()));
        }
    }

    /// If this breaks, it means: the tile grid no longer rounds partial
    /// tiles up, so the right and bottom edges of the sample go unrendered.
    #[test]
    fn test_mosaic_dimensions_round_up() {
        let catalogue = Catalogue::load(vec![swatch("a", 0.0, 0.0, 50.0)]);
        let candidates: Vec<_> = catalogue.records().iter().collect();
        let sample = PixelBuffer::solid(100, 50, [10, 10, 10]).unwrap();
        let mosaic = MosaicComposer::new(MatchWeights::default())
            .tile_size(20)
            .compose(&sample, &candidates)
            .unwrap();
        assert_eq!(mosaic.dimensions(), (5, 3));
    }

    // ========================================================================
    // Filtering and field order
    // ========================================================================

    /// If this breaks, it means: an unrestricted filter hides records, or
    /// an empty selection (all boxes unticked) still lets records through.
    #[test]
    fn test_filter_unrestricted_and_empty() {
        let catalogue = Catalogue::load(vec![
            swatch("a", 0.0, 0.0, 0.0),
            RawSwatchRow {
                dyestuff: String::new(),
                ph: "Unknown".into(),
                ..swatch("b", 10.0, 10.0, 10.0)
            },
        ]);

        let mut filter = FilterEngine::new();
        assert!(catalogue.records().iter().all(|r| filter.passes(r)));

        filter.set_selection(Field::Additive, Some(Vec::<String>::new()));
        assert!(catalogue.records().iter().all(|r| !filter.passes(r)));
    }

    /// If this breaks, it means: exposure times sort as strings again, so
    /// "12h" lands before "30m" on axes and in filter lists.
    #[test]
    fn test_exposure_time_order() {
        let catalogue = Catalogue::load(["90m", "30m", "12h", "60m"].iter().enumerate().map(
            |(i, time)| RawSwatchRow {
                time: time.to_string(),
                ..swatch(&format!("s{}", i), 0.0, 0.0, 0.0)
            },
        ));
        assert_eq!(
            catalogue.unique_values(Field::ExposureTime).values(),
            ["30m", "60m", "90m", "12h"]
        );
    }

    /// If this breaks, it means: pH axes fell back to alphabetic order
    /// (Acidic, Alkaline, Neutral).
    #[test]
    fn test_ph_order_is_acidity() {
        let catalogue = Catalogue::load(["Alkaline", "Acidic", "Neutral"].iter().enumerate().map(
            |(i, ph)| RawSwatchRow {
                ph: ph.to_string(),
                ..swatch(&format!("s{}", i), 0.0, 0.0, 0.0)
            },
        ));
        let index: &FieldIndex = catalogue.unique_values(Field::Ph);
        assert_eq!(index.values(), ["Acidic", "Neutral", "Alkaline"]);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// If this breaks, it means: the wheel lost its hue-0-up convention or
    /// the saturation to radius mapping changed.
    #[test]
    fn test_polar_anchor_points() {
        let catalogue = Catalogue::load(vec![
            swatch("red", 0.0, 100.0, 50.0),
            swatch("grey_a", 77.0, 0.0, 50.0),
            swatch("grey_b", 300.0, 0.0, 50.0),
        ]);
        let list: Vec<_> = catalogue.records().iter().collect();
        let layout = PolarLayout::default();
        let out = layout.layout(&list);

        let red = out.entries.iter().find(|e| e.record.filename == "red").unwrap();
        assert!(red.x.abs() < 1e-9);
        assert!((red.y + layout.outer_radius()).abs() < 1e-9);

        for entry in out.entries.iter().filter(|e| e.record.color.s == 0.0) {
            let r = (entry.x * entry.x + entry.y * entry.y).sqrt();
            assert!((r - layout.params().inner_radius).abs() < 1e-9);
        }
    }

    /// If this breaks, it means: grid placement became nondeterministic and
    /// hover targets will jump between redraws.
    #[test]
    fn test_grid_layout_is_idempotent() {
        let catalogue = Catalogue::load((0..12).map(|i| RawSwatchRow {
            dyestuff: ["Madder", "Weld", "Indigo"][i % 3].into(),
            mordant: ["Alum", "Iron"][i % 2].into(),
            ..swatch(&format!("swatch_{:03}.png", i), i as f64 * 30.0, 50.0, 50.0)
        }));
        let list: Vec<_> = catalogue.records().iter().collect();

        for axes in [
            GridAxes::outer(Field::Dyestuff, Field::Mordant),
            GridAxes::outer(Field::Dyestuff, Field::Ph).with_inner(Some(Field::Mordant), None),
        ] {
            let layout = NestedGridLayout::default().axes(axes);
            let first = layout.layout(&list);
            let second = layout.layout(&list);
            assert_eq!(first.entries.len(), 12);
            for (a, b) in first.entries.iter().zip(&second.entries) {
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
            }
        }
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// If this breaks, it means: hover picks the wrong swatch where sprites
    /// overlap, or reports a swatch when the pointer is on empty canvas.
    #[test]
    fn test_hit_testing_contract() {
        let catalogue = Catalogue::load(vec![
            swatch("left", 0.0, 0.0, 0.0),
            swatch("right", 0.0, 0.0, 0.0),
        ]);
        let records = catalogue.records();
        let at = move |i: usize, x: f64| PositionedEntry {
            record: &records[i],
            x,
            y: 0.0,
            size: 10.0,
            alpha: 1.0,
            group: None,
        };
        let entries = vec![at(0, 0.0), at(1, 8.0)];

        // Inside only the left box
        assert_eq!(find_entry_at(-3.0, 2.0, &entries, 1.0), Some(0));
        // Covered by neither
        assert_eq!(find_entry_at(0.0, 6.0, &entries, 1.0), None);
        // Covered by both, right center is nearer
        assert_eq!(find_entry_at(4.5, 0.0, &entries, 1.0), Some(1));
    }
}
