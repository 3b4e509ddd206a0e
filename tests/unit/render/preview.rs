use super::*;
use crate::book::animator::FlipAnimator;
use crate::config::BookConfig;
use crate::foundation::core::Dimensions;

fn rgb(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let p = img.get_pixel(x, y).0;
    [p[0], p[1], p[2]]
}

fn centres(opts: &PreviewOpts, dims: Dimensions) -> ((u32, u32), (u32, u32)) {
    let m = opts.margin;
    let y = m + dims.height / 2;
    ((m + dims.width / 2, y), (m + dims.width + dims.width / 2, y))
}

#[test]
fn closed_book_shows_cover_on_the_right_only() {
    let book = FlipAnimator::new(0..5, BookConfig::default()).unwrap();
    let frame = book.frame();
    let opts = PreviewOpts::default();
    let img = render_preview(&frame, &opts).unwrap();

    assert_eq!(img.width(), frame.dimensions.width * 2 + 48);
    assert_eq!(img.height(), frame.dimensions.height + 48);

    let (left, right) = centres(&opts, frame.dimensions);
    assert_eq!(rgb(&img, right.0, right.1), COVER);
    let bg = opts.background;
    assert_eq!(rgb(&img, left.0, left.1), [bg[0], bg[1], bg[2]]);
}

#[test]
fn open_spread_shows_back_left_and_front_right() {
    let mut book = FlipAnimator::new(0..5, BookConfig::default()).unwrap();
    book.flip_to(2);
    let frame = book.frame();
    let opts = PreviewOpts::default();
    let img = render_preview(&frame, &opts).unwrap();

    let (left, right) = centres(&opts, frame.dimensions);
    assert_eq!(rgb(&img, left.0, left.1), PAPER_BACK);
    assert_eq!(rgb(&img, right.0, right.1), PAPER_FRONT);
    // Sheet border is inked.
    assert_eq!(rgb(&img, opts.margin + frame.dimensions.width + 1, right.1), INK);
}

#[test]
fn shading_darkens_face_colour() {
    assert_eq!(shade([200, 100, 0], 0.5), [100, 50, 0]);
    assert_eq!(shade([200, 100, 0], 0.0), [200, 100, 0]);
}

#[test]
fn zero_sized_frame_is_an_error() {
    let frame = BookFrame {
        dimensions: Dimensions {
            width: 0,
            height: 10,
        },
        poses: Vec::new(),
    };
    assert!(matches!(
        render_preview(&frame, &PreviewOpts::default()),
        Err(BookError::Render(_))
    ));
}
