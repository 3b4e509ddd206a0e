use super::*;

fn dims(w: f64, h: f64) -> Dimensions {
    compute_dimensions(Viewport::new(w, h), &LayoutConfig::default())
}

#[test]
fn laptop_viewport_keeps_two_by_three_pages() {
    let d = dims(1280.0, 720.0);
    assert_eq!(
        d,
        Dimensions {
            width: 416,
            height: 625
        }
    );
    assert!((d.ratio() - 1.5).abs() < 0.01);

    let cfg = LayoutConfig::default();
    assert!(d.width >= cfg.min_width);
    assert!(d.height >= cfg.min_height && d.height <= cfg.max_height);
}

#[test]
fn narrow_viewport_is_width_limited() {
    let d = dims(600.0, 900.0);
    assert_eq!(
        d,
        Dimensions {
            width: 288,
            height: 432
        }
    );
}

#[test]
fn tiny_viewport_is_clamped_to_minimums() {
    let d = dims(100.0, 100.0);
    assert_eq!(
        d,
        Dimensions {
            width: 200,
            height: 300
        }
    );
}

#[test]
fn tall_viewport_is_capped_by_max_height() {
    let d = dims(4000.0, 5000.0);
    assert_eq!(
        d,
        Dimensions {
            width: 1600,
            height: 2400
        }
    );
}

#[test]
fn degenerate_viewport_never_produces_invalid_geometry() {
    for (w, h) in [(-50.0, -50.0), (f64::NAN, 700.0), (0.0, f64::INFINITY)] {
        let d = dims(w, h);
        assert!(d.width >= 200);
        assert!(d.height >= 300);
    }
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(LayoutConfig::default().validate().is_ok());

    let bad_ratio = LayoutConfig {
        aspect_ratio: 0.0,
        ..LayoutConfig::default()
    };
    assert!(bad_ratio.validate().is_err());

    let bad_fill = LayoutConfig {
        fill_factor: 1.5,
        ..LayoutConfig::default()
    };
    assert!(bad_fill.validate().is_err());

    let bad_bounds = LayoutConfig {
        min_height: 500,
        max_height: 400,
        ..LayoutConfig::default()
    };
    assert!(bad_bounds.validate().is_err());
}
