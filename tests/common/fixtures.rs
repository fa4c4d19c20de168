//! Test fixtures and constants.

use swatch_engine::Hsb;

/// A swatch written to the test workspace.
#[derive(Debug, Clone, Copy)]
pub struct SwatchFixture {
    pub filename: &'static str,
    /// Solid colour of the tile image; the lookup row carries its HSB
    pub rgb: [u8; 3],
    pub dyestuff: &'static str,
    pub ph: &'static str,
    pub mordant: &'static str,
    pub additive: &'static str,
    pub time: &'static str,
    /// Whether a preview image is written alongside the tile
    pub preview: bool,
}

impl SwatchFixture {
    pub fn hsb(&self) -> Hsb {
        Hsb::from_rgb(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Six swatches covering every pH class, three mordants and two dyes.
pub const SWATCHES: [SwatchFixture; 6] = [
    SwatchFixture {
        filename: "madder_alum_acid.png",
        rgb: [200, 40, 30],
        dyestuff: "Madder",
        ph: "Acidic",
        mordant: "Alum",
        additive: "None",
        time: "1h",
        preview: true,
    },
    SwatchFixture {
        filename: "madder_iron_neutral.png",
        rgb: [110, 50, 45],
        dyestuff: "Madder",
        ph: "Neutral",
        mordant: "Iron",
        additive: "None",
        time: "12h",
        preview: true,
    },
    SwatchFixture {
        filename: "madder_alum_alkaline.png",
        rgb: [220, 90, 120],
        dyestuff: "Madder",
        ph: "Alkaline",
        mordant: "Alum",
        additive: "Chalk",
        time: "30m",
        preview: false,
    },
    SwatchFixture {
        filename: "weld_alum_neutral.png",
        rgb: [230, 210, 40],
        dyestuff: "Weld",
        ph: "Neutral",
        mordant: "Alum",
        additive: "None",
        time: "1h",
        preview: true,
    },
    SwatchFixture {
        filename: "weld_copper_acid.png",
        rgb: [120, 150, 40],
        dyestuff: "Weld",
        ph: "Acidic",
        mordant: "Copper",
        additive: "Vinegar",
        time: "12h",
        preview: true,
    },
    SwatchFixture {
        filename: "weld_iron_alkaline.png",
        rgb: [90, 100, 50],
        dyestuff: "Weld",
        ph: "Alkaline",
        mordant: "Iron",
        additive: "Chalk",
        time: "30m",
        preview: false,
    },
];

pub fn find(filename: &str) -> &'static SwatchFixture {
    SWATCHES
        .iter()
        .find(|s| s.filename == filename)
        .expect("unknown fixture")
}
