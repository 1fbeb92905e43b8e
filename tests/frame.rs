use bars_wasm::frame::{layout_bars, paint_frame};
use bars_wasm::palette::PaletteGenerator;
use bars_wasm::rng::Rng;
use bars_wasm::surface::{PixelSurface, Surface};
use bars_wasm::VisualizerConfig;

#[test]
fn bars_stay_within_bounds() {
    let config = VisualizerConfig::default();
    let mut rng = Rng::new_with_seed(2024);
    for &(w, h) in &[(1920.0, 1080.0), (375.0, 812.0), (1.0, 1.0), (0.0, 0.0)] {
        let samples: Vec<u8> = (0..128).map(|_| rng.rand_u8()).collect();
        let bars: Vec<_> = layout_bars(&samples, (w, h), 3, &config).collect();
        assert_eq!(bars.len(), samples.len());

        let extent: f64 = bars.iter().map(|b| b.width + config.bar_gap).sum();
        assert!(extent <= w * config.bar_width_factor + samples.len() as f64 * config.bar_gap + 1e-6);

        for bar in &bars {
            assert!(bar.height >= 0.0 && bar.height <= h * config.bar_height_ratio + 1e-9);
            assert!((bar.y + bar.height - h).abs() < 1e-9, "anchored to the bottom");
            assert!(bar.color < 3);
        }
        for pair in bars.windows(2) {
            assert!((pair[1].x - (pair[0].x + pair[0].width + config.bar_gap)).abs() < 1e-9);
        }
    }
}

#[test]
fn silent_samples_leave_only_particles() {
    let config = VisualizerConfig {
        particle_count: 0,
        ..VisualizerConfig::default()
    };
    let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(1));
    let mut surface = PixelSurface::new(64, 32);
    paint_frame(&mut surface, &[0; 128], &palette, &mut Rng::new_with_seed(1), &config);
    assert!(surface.is_blank());
}

#[test]
fn painting_clears_the_previous_frame() {
    let config = VisualizerConfig {
        particle_count: 0,
        ..VisualizerConfig::default()
    };
    let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(1));
    let mut rng = Rng::new_with_seed(1);
    let mut surface = PixelSurface::new(64, 32);
    paint_frame(&mut surface, &[255; 128], &palette, &mut rng, &config);
    assert!(!surface.is_blank());
    paint_frame(&mut surface, &[0; 128], &palette, &mut rng, &config);
    assert!(surface.is_blank());
}

#[test]
fn mirror_is_fainter_than_bar() {
    let config = VisualizerConfig {
        particle_count: 0,
        ..VisualizerConfig::default()
    };
    let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(6));
    let mut surface = PixelSurface::new(128, 90);
    paint_frame(&mut surface, &[255; 128], &palette, &mut Rng::new_with_seed(6), &config);

    let (_, h) = surface.size();
    let bar = surface.pixel(0, h as usize - 1)[3];
    let mirror = surface.pixel(0, 0)[3];
    assert!(mirror > 0 && mirror < bar, "mirror {mirror} bar {bar}");
    // Between the mirror (18px) and the bar top (36px from the top).
    assert_eq!(surface.pixel(0, 27)[3], 0);
}

#[test]
fn opacity_is_restored_after_each_mirror() {
    let config = VisualizerConfig::default();
    let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(6));
    let mut surface = PixelSurface::new(128, 90);
    let samples = [255; 128];
    paint_frame(&mut surface, &samples, &palette, &mut Rng::new_with_seed(6), &config);

    // Particles only ever add coverage, so the faintest pixel down a bar's
    // column is the bar's own fill.
    let size = surface.size();
    let faintest_in_bar = |bar: &bars_wasm::frame::Bar| {
        let px = (bar.x + bar.width / 2.0) as usize;
        (bar.y.ceil() as usize..size.1 as usize)
            .map(|py| surface.pixel(px, py)[3])
            .min()
            .unwrap()
    };

    let bars: Vec<_> = layout_bars(&samples, size, palette.len(), &config).take(6).collect();
    let first = faintest_in_bar(&bars[0]);
    // 0.7 colour alpha at full opacity, not the mirror's 0.7 * 0.3.
    assert_eq!(first, (0.7_f64 * 255.0).round() as u8);
    for bar in &bars[1..] {
        assert_eq!(faintest_in_bar(bar), first, "bar at x={}", bar.x);
    }
}
