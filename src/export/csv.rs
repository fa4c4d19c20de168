use std::borrow::Cow;
use std::fmt::Write;

use swatch_engine::Mosaic;

pub const MOSAIC_CSV_HEADER: [&str; 19] = [
    "tx", "ty", "x", "y", "w", "h", "tileH", "tileS", "tileB", "filename", "swatchH", "swatchS",
    "swatchB", "dyestuff", "pH", "mordant", "additive", "time", "score",
];

/// Quote a field when it contains a separator, quote or line break.
fn escape(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// One row per tile in row-major order, after a header line. Colour
/// components use two decimals and the score three. No trailing newline.
pub fn mosaic_csv(mosaic: &Mosaic<'_>) -> String {
    let mut out = MOSAIC_CSV_HEADER.join(",");
    for tile in mosaic.tiles() {
        let s = tile.swatch;
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "\n{},{},{},{},{},{},{:.2},{:.2},{:.2},{},{:.2},{:.2},{:.2},{},{},{},{},{},{:.3}",
            tile.tx,
            tile.ty,
            tile.x,
            tile.y,
            tile.width,
            tile.height,
            tile.sampled.h,
            tile.sampled.s,
            tile.sampled.b,
            escape(&s.filename),
            s.color.h,
            s.color.s,
            s.color.b,
            escape(&s.dyestuff),
            escape(&s.ph),
            escape(&s.mordant),
            escape(&s.additive),
            escape(&s.exposure_time),
            tile.score,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_engine::{Catalogue, MatchWeights, MosaicComposer, PixelBuffer, RawSwatchRow};

    #[test]
    fn test_escape() {
        assert_eq!(escape("Alum"), "Alum");
        assert_eq!(escape("Alum, Iron"), "\"Alum, Iron\"");
        assert_eq!(escape("5\" strip"), "\"5\"\" strip\"");
        assert_eq!(escape("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_empty_mosaic_is_header_only() {
        assert_eq!(mosaic_csv(&Mosaic::empty(20)), MOSAIC_CSV_HEADER.join(","));
    }

    #[test]
    fn test_mosaic_rows() {
        let catalogue = Catalogue::load(vec![RawSwatchRow {
            filename: "red, bright.png".into(),
            h: 0.0,
            s: 100.0,
            b: 100.0,
            dyestuff: "Madder".into(),
            ph: "Acidic".into(),
            mordant: "Alum".into(),
            additive: "None".into(),
            time: "1h".into(),
        }]);
        let candidates: Vec<_> = catalogue.records().iter().collect();
        let sample = PixelBuffer::solid(5, 3, [255, 0, 0]).unwrap();
        let mosaic = MosaicComposer::new(MatchWeights::default())
            .tile_size(4)
            .compose(&sample, &candidates)
            .unwrap();

        let csv = mosaic_csv(&mosaic);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "0,0,0,0,4,4,0.00,100.00,100.00,\"red, bright.png\",0.00,100.00,100.00,Madder,Acidic,Alum,None,1h,0.000"
        );
        // Clipped edge tile still reports the full tile size
        assert!(lines[2].starts_with("1,0,4,0,4,4,"));
        assert!(!csv.ends_with('\n'));
    }
}
