use super::*;
use crate::card::model::{ImagePosition, ImageShape};

#[test]
fn content_box_insets_both_paddings() {
    let content = ContentBox::for_canvas(560.0, 560.0);
    assert_eq!(content.x0, 60.0);
    assert_eq!(content.y0, 60.0);
    assert_eq!(content.width(), 440.0);
    assert_eq!(content.height(), 440.0);
}

#[test]
fn cover_scales_up_to_fill_the_box() {
    // 100x50 image into a 200x200 box: scale by height, crop width.
    let affine = cover_affine(100.0, 50.0, 0.0, 0.0, 200.0, 200.0);
    let [sx, _, _, sy, tx, ty] = affine.as_coeffs();
    assert_eq!(sx, 4.0);
    assert_eq!(sy, 4.0);
    // 100 * 4 = 400 wide; centered overflow of 200 splits evenly.
    assert_eq!(tx, -100.0);
    assert_eq!(ty, 0.0);
}

#[test]
fn cover_centers_the_cropped_axis_at_an_offset_box() {
    let affine = cover_affine(50.0, 100.0, 10.0, 20.0, 100.0, 100.0);
    let [sx, _, _, _, tx, ty] = affine.as_coeffs();
    assert_eq!(sx, 2.0);
    assert_eq!(tx, 10.0);
    assert_eq!(ty, 20.0 + (100.0 - 200.0) / 2.0);
}

#[test]
fn left_position_puts_the_image_before_the_text() {
    let content = ContentBox {
        x0: 0.0,
        y0: 0.0,
        x1: 400.0,
        y1: 200.0,
    };
    let (image, text, centered) =
        image_text_boxes(&content, ImagePosition::Left, ImageShape::Rect, 20.0);

    assert!(!centered);
    assert_eq!(image.x0, 0.0);
    assert_eq!(image.width(), 160.0); // 40% of 400
    assert_eq!(image.height(), 200.0); // rect stretches to full height
    assert_eq!(text.x0, 180.0);
    assert_eq!(text.x1, 400.0);
}

#[test]
fn right_position_mirrors_left() {
    let content = ContentBox {
        x0: 0.0,
        y0: 0.0,
        x1: 400.0,
        y1: 200.0,
    };
    let (image, text, _) =
        image_text_boxes(&content, ImagePosition::Right, ImageShape::Rect, 20.0);

    assert_eq!(image.x1, 400.0);
    assert_eq!(text.x0, 0.0);
    assert!(text.x1 < image.x0);
}

#[test]
fn square_shape_is_square_and_vertically_centered() {
    let content = ContentBox {
        x0: 0.0,
        y0: 0.0,
        x1: 300.0,
        y1: 200.0,
    };
    let (image, _, _) =
        image_text_boxes(&content, ImagePosition::Left, ImageShape::Square, 20.0);

    assert_eq!(image.width(), image.height());
    assert_eq!(image.y0, (200.0 - image.height()) / 2.0);
}

#[test]
fn top_position_centers_the_image_and_text() {
    let content = ContentBox {
        x0: 0.0,
        y0: 0.0,
        x1: 300.0,
        y1: 400.0,
    };
    let (image, text, centered) =
        image_text_boxes(&content, ImagePosition::Top, ImageShape::Circle, 20.0);

    assert!(centered);
    assert_eq!(image.width(), 128.0);
    assert_eq!(image.x0, (300.0 - 128.0) / 2.0);
    assert_eq!(text.y0, image.y1 + 20.0);
}
