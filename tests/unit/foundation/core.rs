use super::*;

#[test]
fn sheet_and_page_indices_map_both_ways() {
    let s = SheetIndex(3);
    assert_eq!(s.front_page(), PageIndex(6));
    assert_eq!(s.back_page(), PageIndex(7));
    assert_eq!(PageIndex(6).sheet(), s);
    assert_eq!(PageIndex(7).sheet(), s);
    assert!(!PageIndex(6).is_back_face());
    assert!(PageIndex(7).is_back_face());
}

#[test]
fn dimensions_spread_is_two_pages_wide() {
    let d = Dimensions {
        width: 400,
        height: 600,
    };
    assert_eq!(d.to_size(), Size::new(400.0, 600.0));
    assert_eq!(d.spread(), Size::new(800.0, 600.0));
    assert_eq!(d.ratio(), 1.5);
}

#[test]
fn zero_width_ratio_is_zero() {
    let d = Dimensions {
        width: 0,
        height: 10,
    };
    assert_eq!(d.ratio(), 0.0);
}
