//! Assertion helpers for tests.

/// PNG file signature
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_MAGIC),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert an RGB(A) pixel is within `tolerance` of `expected` per channel
pub fn assert_rgb_near(actual: [u8; 4], expected: [u8; 3], tolerance: u8) {
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.abs_diff(e) <= tolerance,
            "Channel {i}: expected {expected:?} ± {tolerance}, got {actual:?}"
        );
    }
}
