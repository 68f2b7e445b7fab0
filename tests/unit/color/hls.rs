//! Tests for RGB and HLS conversions and degenerate colour handling

#[cfg(test)]
mod tests {
    use seamblend::color::Hls;
    use seamblend::Rgb;
    use seamblend::color::hls::{hls_to_rgb, rgb_to_hls};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // Tests primary and secondary colours land on their hue sectors
    // Verified by swapping the green and blue sector offsets
    #[test]
    fn test_rgb_to_hls_hue_sectors() {
        let cases = [
            ([255, 0, 0], 0.0),
            ([255, 255, 0], 1.0 / 6.0),
            ([0, 255, 0], 1.0 / 3.0),
            ([0, 255, 255], 0.5),
            ([0, 0, 255], 2.0 / 3.0),
            ([255, 0, 255], 5.0 / 6.0),
        ];

        for (pixel, hue) in cases {
            let hls = Hls::from_rgb(pixel);
            assert_close(hls.hue, hue);
            assert_close(hls.lightness, 0.5);
            assert_close(hls.saturation, 1.0);
        }
    }

    // Tests saturation uses the light-half formula above lightness 0.5
    // Verified by always dividing by the channel sum
    #[test]
    fn test_rgb_to_hls_saturation_halves() {
        let dark = rgb_to_hls(0.4, 0.2, 0.2);
        assert_close(dark.lightness, 0.3);
        assert_close(dark.saturation, 0.2 / 0.6);

        let light = rgb_to_hls(1.0, 0.6, 0.6);
        assert_close(light.lightness, 0.8);
        assert_close(light.saturation, 0.4 / 0.4);
    }

    // Tests greys have zero hue and saturation
    // Verified by computing hue for achromatic input
    #[test]
    fn test_achromatic_inputs() {
        for value in [0u8, 1, 128, 254, 255] {
            let hls = Hls::from_rgb([value, value, value]);
            assert_close(hls.hue, 0.0);
            assert_close(hls.saturation, 0.0);
        }
        assert_eq!(hls_to_rgb(Hls::new(0.7, 0.25, 0.0)), (0.25, 0.25, 0.25));
    }

    // Tests only pure black and pure white are degenerate
    // Verified by treating near-black as degenerate
    #[test]
    fn test_is_degenerate() {
        assert!(Hls::from_rgb([0, 0, 0]).is_degenerate());
        assert!(Hls::from_rgb([255, 255, 255]).is_degenerate());
        assert!(!Hls::from_rgb([1, 1, 1]).is_degenerate());
        assert!(!Hls::from_rgb([254, 254, 254]).is_degenerate());
        assert!(!Hls::from_rgb([255, 0, 0]).is_degenerate());
    }

    // Tests chroma substitution keeps lightness and only applies to degenerate colours
    // Verified by also replacing lightness
    #[test]
    fn test_or_chroma_of() {
        let donor = Hls::new(0.3, 0.4, 0.8);

        let white = Hls::new(0.0, 1.0, 0.0).or_chroma_of(donor);
        assert_eq!(white, Hls::new(0.3, 1.0, 0.8));

        let grey = Hls::new(0.0, 0.5, 0.0);
        assert_eq!(grey.or_chroma_of(donor), grey);
    }

    // Tests the half difference is signed and unclamped
    // Verified by clamping the difference to [0, 1]
    #[test]
    fn test_half_difference() {
        let diff = Hls::new(0.2, 0.0, 1.0).half_difference(Hls::new(0.6, 1.0, 0.0));
        assert_close(diff.hue, -0.2);
        assert_close(diff.lightness, -0.5);
        assert_close(diff.saturation, 0.5);
    }

    // Tests shifting clamps each component into [0, 1]
    // Verified by removing clamp_unit from Hls::shifted
    #[test]
    fn test_shifted_clamps() {
        let base = Hls::new(0.1, 0.9, 0.5);
        let shifted = base.shifted(Hls::new(-0.4, 0.4, 0.1), 1.0);
        assert_close(shifted.hue, 0.0);
        assert_close(shifted.lightness, 1.0);
        assert_close(shifted.saturation, 0.6);

        let reversed = base.shifted(Hls::new(-0.4, 0.4, 0.1), -0.5);
        assert_close(reversed.hue, 0.3);
        assert_close(reversed.lightness, 0.7);
        assert_close(reversed.saturation, 0.45);
    }

    // Tests a round trip through HLS truncates to exactly the bytes colorsys yields
    // Verified by switching hue_channel and the m2 branch back to mul_add
    #[test]
    fn test_round_trip_exact_bytes() {
        let cases: [(Rgb, Rgb); 8] = [
            ([12, 200, 77], [11, 200, 77]),
            ([255, 128, 0], [255, 128, 0]),
            ([3, 3, 250], [2, 2, 250]),
            ([90, 90, 91], [90, 90, 90]),
            ([200, 10, 180], [200, 9, 179]),
            ([167, 128, 193], [166, 128, 193]),
            ([112, 198, 134], [112, 197, 134]),
            ([56, 232, 200], [56, 231, 200]),
        ];

        for (pixel, expected) in cases {
            assert_eq!(Hls::from_rgb(pixel).to_rgb(), expected, "pixel {pixel:?}");
        }
    }

    // Tests hue at the top of the range wraps to red
    // Verified by removing rem_euclid from the channel hue
    #[test]
    fn test_hue_one_wraps() {
        let (r, g, b) = hls_to_rgb(Hls::new(1.0, 0.5, 1.0));
        assert_close(r, 1.0);
        assert_close(g, 0.0);
        assert_close(b, 0.0);
    }
}
