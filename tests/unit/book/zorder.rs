use super::*;

#[test]
fn five_sheets_two_flipped() {
    let z = stack_z_indices(2, 5);
    assert_eq!(z, vec![1, 2, 3, 2, 1]);

    // Left stack: the later-flipped sheet lies on top.
    assert!(z[1] > z[0]);
    // Right stack: the next sheet to turn lies on top.
    assert!(z[2] > z[3]);
    assert!(z[2] > z[4]);
}

#[test]
fn next_sheet_to_flip_is_topmost_of_right_stack() {
    let total = 7;
    for current in 0..total {
        let z = stack_z_indices(current, total);
        let top_right = z[current];
        assert!(z[current + 1..].iter().all(|&other| other < top_right));
    }
}

#[test]
fn flipping_sheet_is_above_everything() {
    let total = 5;
    let boost = flipping_z_index(total, DEFAULT_Z_BOOST);
    assert_eq!(boost, 15);
    for current in 0..=total {
        assert!(stack_z_indices(current, total).iter().all(|&z| z < boost));
    }
}
