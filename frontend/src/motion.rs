//! Pointer driven parallax and lens focus math.
//!
//! Every transform here is a linear function of a `PointerOffset` (pointer
//! position relative to the viewport center) or of a focus value. Nothing is
//! cached between calls; the hero view recomputes on each pointer move.

/// Signed pixel offset of the pointer from the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// Translation applied to a single parallax layer, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerTransform {
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Visual parameters of the lens derived from a focus value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTransform {
    pub rotation_deg: f64,
    pub breathing_scale: f64,
    pub internal_shift_px: f64,
    pub blur_px: f64,
}

/// Focus value at which the lens is perfectly sharp and unrotated.
pub const FOCUS_NEUTRAL: f64 = 50.0;

const ROTATION_PER_UNIT: f64 = 1.8;
const SCALE_PER_UNIT: f64 = 0.001;
const SHIFT_PER_UNIT: f64 = 0.1;
const BLUR_PER_UNIT: f64 = 0.05;

pub fn compute_offset(
    pointer_client_x: f64,
    pointer_client_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> PointerOffset {
    PointerOffset {
        x: pointer_client_x - viewport_width / 2.0,
        y: pointer_client_y - viewport_height / 2.0,
    }
}

/// Scales the offset by `factor` on both axes. Smaller `|factor|` reads as
/// farther away; a negative factor drifts against the pointer.
pub fn compute_layer_transform(offset: PointerOffset, factor: f64) -> LayerTransform {
    LayerTransform {
        translate_x: offset.x * factor,
        translate_y: offset.y * factor,
    }
}

/// Values outside `[0, 100]` are extrapolated, not clamped.
pub fn compute_focus_transform(focus_value: f64) -> FocusTransform {
    let delta = focus_value - FOCUS_NEUTRAL;
    FocusTransform {
        rotation_deg: delta * ROTATION_PER_UNIT,
        breathing_scale: 1.0 + delta * SCALE_PER_UNIT,
        internal_shift_px: delta * SHIFT_PER_UNIT,
        blur_px: delta.abs() * BLUR_PER_UNIT,
    }
}

impl LayerTransform {
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px)", self.translate_x, self.translate_y)
    }
}

impl FocusTransform {
    /// Transform for the outer lens barrel.
    pub fn barrel_css(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotation_deg, self.breathing_scale)
    }

    /// Diagonal drift of the inner glass: `+shift` on x, `-shift` on y.
    pub fn glass_css(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.internal_shift_px, -self.internal_shift_px
        )
    }

    pub fn filter_css(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

/// Per-axis parallax factor pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Depth {
    pub x: f64,
    pub y: f64,
}

impl Depth {
    pub const fn uniform(factor: f64) -> Self {
        Self { x: factor, y: factor }
    }

    pub fn apply(&self, offset: PointerOffset) -> LayerTransform {
        LayerTransform {
            translate_x: compute_layer_transform(offset, self.x).translate_x,
            translate_y: compute_layer_transform(offset, self.y).translate_y,
        }
    }
}

/// Decorative layers of the hero section, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    FilmStrip,
    Microphone,
    Clapperboard,
    FocusReticle,
    LensGlow,
    HeroLens,
}

impl Layer {
    pub fn depth(self) -> Depth {
        match self {
            Layer::FilmStrip => Depth::uniform(0.01),
            Layer::Microphone => Depth::uniform(-0.015),
            Layer::Clapperboard => Depth::uniform(0.03),
            Layer::FocusReticle => Depth::uniform(0.01),
            Layer::LensGlow => Depth { x: -0.04, y: -0.02 },
            Layer::HeroLens => Depth::uniform(-0.01),
        }
    }

    /// Static rotation appended after the parallax translation.
    pub fn tilt_deg(self) -> Option<f64> {
        match self {
            Layer::FilmStrip => Some(12.0),
            Layer::Microphone => Some(-15.0),
            Layer::Clapperboard => Some(10.0),
            Layer::FocusReticle | Layer::LensGlow | Layer::HeroLens => None,
        }
    }

    pub fn transform(self, offset: PointerOffset) -> LayerTransform {
        self.depth().apply(offset)
    }

    /// Full `transform:` value for this layer at the given offset.
    pub fn css(self, offset: PointerOffset) -> String {
        let translate = self.transform(offset).to_css();
        match self.tilt_deg() {
            Some(deg) => format!("{} rotate({}deg)", translate, deg),
            None => translate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    const ALL_LAYERS: [Layer; 6] = [
        Layer::FilmStrip,
        Layer::Microphone,
        Layer::Clapperboard,
        Layer::FocusReticle,
        Layer::LensGlow,
        Layer::HeroLens,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn assert_focus(t: FocusTransform, rotation: f64, scale: f64, shift: f64, blur: f64) {
        assert!(close(t.rotation_deg, rotation), "rotation {}", t.rotation_deg);
        assert!(close(t.breathing_scale, scale), "scale {}", t.breathing_scale);
        assert!(close(t.internal_shift_px, shift), "shift {}", t.internal_shift_px);
        assert!(close(t.blur_px, blur), "blur {}", t.blur_px);
    }

    #[test]
    fn offset_is_relative_to_viewport_center() {
        let offset = compute_offset(100.0, 700.0, 1280.0, 800.0);
        assert_eq!(offset, PointerOffset { x: -540.0, y: 300.0 });
    }

    #[test]
    fn pointer_at_center_has_zero_offset() {
        for (w, h) in [(1280.0, 800.0), (375.0, 667.0), (1.0, 1.0)] {
            let offset = compute_offset(w / 2.0, h / 2.0, w, h);
            assert_eq!(offset, PointerOffset::default());
        }
    }

    #[test]
    fn layer_transform_scales_each_axis() {
        let offset = PointerOffset { x: 200.0, y: -100.0 };
        let t = compute_layer_transform(offset, 0.03);
        assert!(close(t.translate_x, 6.0));
        assert!(close(t.translate_y, -3.0));

        let t = compute_layer_transform(offset, -0.015);
        assert!(close(t.translate_x, -3.0));
        assert!(close(t.translate_y, 1.5));
    }

    #[test]
    fn zero_factor_is_a_null_layer() {
        let offset = PointerOffset { x: 913.0, y: -42.5 };
        let t = compute_layer_transform(offset, 0.0);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 0.0);
    }

    #[test]
    fn focus_midpoint_is_neutral() {
        assert_focus(compute_focus_transform(50.0), 0.0, 1.0, 0.0, 0.0);
    }

    #[test]
    fn focus_extremes() {
        assert_focus(compute_focus_transform(0.0), -90.0, 0.95, -5.0, 2.5);
        assert_focus(compute_focus_transform(100.0), 90.0, 1.05, 5.0, 2.5);
    }

    #[test]
    fn focus_symmetry_around_midpoint() {
        for d in [0.5, 7.0, 25.0, 49.0] {
            let lo = compute_focus_transform(50.0 - d);
            let hi = compute_focus_transform(50.0 + d);
            assert!(close(lo.blur_px, hi.blur_px));
            assert!(close(lo.rotation_deg, -hi.rotation_deg));
            assert!(close(lo.internal_shift_px, -hi.internal_shift_px));
            assert!(close(lo.breathing_scale - 1.0, 1.0 - hi.breathing_scale));
        }
    }

    #[test]
    fn focus_rotation_inverts_back_to_input() {
        for v in [-20.0, 0.0, 13.37, 50.0, 88.0, 150.0] {
            let t = compute_focus_transform(v);
            assert!(close(t.rotation_deg / 1.8 + 50.0, v), "v = {}", v);
        }
    }

    #[test]
    fn focus_out_of_range_extrapolates() {
        let t = compute_focus_transform(150.0);
        assert!(close(t.rotation_deg, 180.0));
        assert!(close(t.blur_px, 5.0));
        let t = compute_focus_transform(-50.0);
        assert!(close(t.rotation_deg, -180.0));
        assert!(close(t.breathing_scale, 0.9));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = compute_focus_transform(37.25);
        let b = compute_focus_transform(37.25);
        assert_eq!(a.rotation_deg.to_bits(), b.rotation_deg.to_bits());
        assert_eq!(a.breathing_scale.to_bits(), b.breathing_scale.to_bits());
        assert_eq!(a.internal_shift_px.to_bits(), b.internal_shift_px.to_bits());
        assert_eq!(a.blur_px.to_bits(), b.blur_px.to_bits());

        let offset = compute_offset(123.4, 56.7, 1024.0, 768.0);
        assert_eq!(offset, compute_offset(123.4, 56.7, 1024.0, 768.0));
    }

    #[test]
    fn lens_glow_uses_distinct_axis_factors() {
        let offset = PointerOffset { x: 100.0, y: 100.0 };
        let t = Layer::LensGlow.transform(offset);
        assert!(close(t.translate_x, -4.0));
        assert!(close(t.translate_y, -2.0));
    }

    #[test]
    fn uniform_layers_match_scalar_transform() {
        let offset = PointerOffset { x: -321.0, y: 77.0 };
        for layer in ALL_LAYERS {
            let depth = layer.depth();
            if depth.x == depth.y {
                assert_eq!(layer.transform(offset), compute_layer_transform(offset, depth.x));
            }
        }
    }

    #[test]
    fn layer_css_appends_tilt() {
        let offset = PointerOffset { x: 100.0, y: 200.0 };
        assert_eq!(Layer::Clapperboard.css(offset), "translate(3px, 6px) rotate(10deg)");
        assert_eq!(Layer::FocusReticle.css(offset), "translate(1px, 2px)");
    }

    #[test]
    fn neutral_focus_css() {
        let t = compute_focus_transform(FOCUS_NEUTRAL);
        assert_eq!(t.barrel_css(), "rotate(0deg) scale(1)");
        assert_eq!(t.filter_css(), "blur(0px)");
    }
}
