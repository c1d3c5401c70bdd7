use cubehelix::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn helix_strategy() -> impl Strategy<Value = Cubehelix> {
    (
        -1.0f64..4.0,
        -5.0f64..5.0,
        0.05f64..5.0,
        0.0f64..4.0,
        prop::bool::ANY,
        2usize..600,
    )
        .prop_map(|(start, rot, gamma, hue, reverse, samples)| {
            Cubehelix::new(start, rot, gamma, hue, reverse).samples(samples)
        })
}

proptest! {
    #[test]
    fn channels_stay_in_unit_range(helix in helix_strategy()) {
        let palette = helix.generate().unwrap();
        prop_assert_eq!(palette.size(), helix.samples);
        for c in palette.colors() {
            for v in [c.red, c.green, c.blue] {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn positions_span_unit_interval(helix in helix_strategy()) {
        let palette = helix.generate().unwrap();
        let n = palette.size();
        prop_assert_eq!(palette.sample_at(0).unwrap().t, 0.0);
        prop_assert_eq!(palette.sample_at(n - 1).unwrap().t, 1.0);
        for pair in palette.samples().windows(2) {
            prop_assert!(pair[0].t < pair[1].t);
        }
    }

    #[test]
    fn reversal_mirrors_colors(helix in helix_strategy()) {
        let forward = helix.reverse(false).generate().unwrap();
        let backward = helix.reverse(true).generate().unwrap();
        let n = forward.size();

        for k in 0..n {
            let f = forward.sample_at(n - 1 - k).unwrap();
            let b = backward.sample_at(k).unwrap();
            prop_assert_eq!(b.color, f.color);
            prop_assert_eq!(b.t, forward.sample_at(k).unwrap().t);
        }
        prop_assert_eq!(forward.reversed(), backward);
    }

    #[test]
    fn zero_hue_follows_gamma(gamma in 0.05f64..5.0, samples in 2usize..400) {
        let palette = Cubehelix::default().hue(0.).gamma(gamma).samples(samples).generate().unwrap();
        for s in &palette {
            let expected = s.t.powf(gamma);
            prop_assert_eq!(s.color, Rgb::gray(expected));
        }
    }

    #[test]
    fn gamma_darkens_interior(t in 0.001f64..0.999, g1 in 0.05f64..5.0, dg in 0.01f64..3.0) {
        let g2 = g1 + dg;
        prop_assert!(t.powf(g1) > t.powf(g2));

        let low = Cubehelix::default().hue(0.).gamma(g1).color_at(t);
        let high = Cubehelix::default().hue(0.).gamma(g2).color_at(t);
        prop_assert!(low.red > high.red);
    }

    #[test]
    fn interpolation_stays_between_neighbours(helix in helix_strategy(), q in 0.0f64..=1.0) {
        let palette = helix.generate().unwrap();
        let c = palette.interpolate(q);

        // one sample of slack on each side absorbs rounding of the grid index
        let pos = q * (palette.size() - 1) as f64;
        let lo = (pos.floor() as usize).saturating_sub(1);
        let hi = (pos.ceil() as usize + 1).min(palette.size() - 1);
        let window = &palette.samples()[lo..=hi];

        let got: [f64; 3] = c.into();
        for ch in 0..3 {
            let values = window.iter().map(|s| <[f64; 3]>::from(s.color)[ch]);
            let min = values.clone().fold(f64::INFINITY, f64::min);
            let max = values.fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(got[ch] >= min - 1e-9 && got[ch] <= max + 1e-9);
        }
    }
}

#[test]
fn default_endpoints() {
    let palette = generate_cubehelix_palette(0.5, -1.5, 1.0, 1.2, false, 256).unwrap();
    assert_eq!(palette.size(), 256);

    let first = palette.sample_at(0).unwrap();
    let last = palette.sample_at(255).unwrap();
    assert_eq!((first.t, first.color), (0.0, Rgb::new(0., 0., 0.)));
    assert_eq!((last.t, last.color), (1.0, Rgb::new(1., 1., 1.)));

    let lut = palette.to_rgb8();
    assert_eq!(lut[0], [0, 0, 0]);
    assert_eq!(lut[255], [255, 255, 255]);
}

#[test]
fn midpoint_blends_neighbours() {
    let palette = Cubehelix::default().generate().unwrap();
    let a = palette.sample_at(127).unwrap();
    let b = palette.sample_at(128).unwrap();
    let w = (0.5 - a.t) / (b.t - a.t);
    assert!((w - 0.5).abs() < 1e-9);

    let expected = Rgb::lerp(a.color, b.color, w);
    let got = palette.interpolate(0.5);
    assert!((got.red - expected.red).abs() < 1e-12);
    assert!((got.green - expected.green).abs() < 1e-12);
    assert!((got.blue - expected.blue).abs() < 1e-12);
}

#[test]
fn interpolation_hits_grid_points() {
    let palette = Cubehelix::default().rot(0.7).samples(33).generate().unwrap();
    for s in &palette {
        assert_eq!(palette.interpolate(s.t), s.color);
    }
}

#[test]
fn rejects_too_few_samples() {
    for n in [0, 1] {
        assert_eq!(
            generate_cubehelix_palette(0.5, -1.5, 1.0, 1.2, false, n),
            Err(PaletteError::InvalidSampleCount(n))
        );
    }
}

#[test]
fn random_configurations_are_accepted() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let helix = Cubehelix::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-20.0..20.0),
            rng.random_range(0.01..10.0),
            rng.random_range(0.0..20.0),
            rng.random(),
        )
        .samples(rng.random_range(2..64));

        let palette = helix.generate().unwrap();
        assert!(palette.colors().all(|c| c == c.clamp()));
    }
}

#[test]
fn blues_only_without_rotation() {
    // start = 0 and rot = 0 hold the angle at a full turn: cos = 1, sin = 0
    let palette = Cubehelix::default().start(0.).rot(0.).generate().unwrap();
    for c in palette.colors() {
        assert!(c.blue >= c.red - 1e-12);
        assert!(c.red >= c.green - 1e-12);
    }
}
