use super::*;

// =============================================================
// Speed
// =============================================================

#[test]
fn slow_step_is_one_thousandth() {
    assert_eq!(Speed::Slow.step(), 0.001);
}

#[test]
fn fast_step_is_two_thousandths() {
    assert_eq!(Speed::Fast.step(), 0.002);
}

#[test]
fn default_speed_is_fast() {
    assert_eq!(Speed::default(), Speed::Fast);
    assert_eq!(Speed::default().step(), 0.002);
}

// =============================================================
// WaveConfig defaults
// =============================================================

#[test]
fn default_palette_has_five_entries() {
    let config = WaveConfig::default();
    assert_eq!(config.colors.len(), 5);
    assert_eq!(config.colors[0], "#38bdf8");
    assert_eq!(config.colors[4], "#22d3ee");
}

#[test]
fn default_stroke_and_fill() {
    let config = WaveConfig::default();
    assert_eq!(config.wave_width, 50.0);
    assert_eq!(config.background_fill, "black");
    assert_eq!(config.blur_px, 10.0);
    assert_eq!(config.wave_opacity, 0.5);
    assert_eq!(config.speed, Speed::Fast);
}

// =============================================================
// layer_color
// =============================================================

#[test]
fn layer_color_cycles_palette() {
    let config = WaveConfig {
        colors: vec!["#111111".to_owned(), "#222222".to_owned()],
        ..WaveConfig::default()
    };
    assert_eq!(config.layer_color(0), "#111111");
    assert_eq!(config.layer_color(1), "#222222");
    assert_eq!(config.layer_color(2), "#111111");
    assert_eq!(config.layer_color(3), "#222222");
}

#[test]
fn layer_color_empty_palette_uses_defaults() {
    let config = WaveConfig { colors: Vec::new(), ..WaveConfig::default() };
    assert_eq!(config.layer_color(0), "#38bdf8");
    assert_eq!(config.layer_color(6), "#818cf8");
}

#[test]
fn layer_color_default_layer_zero_is_sky_blue() {
    let config = WaveConfig::default();
    assert_eq!(config.layer_color(0), "#38bdf8");
}
