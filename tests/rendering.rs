//! Integration tests for numeral and difference rendering

use std::fs;

use cistercian::{GeneratorConfig, NumeralRenderer};
use image::GenericImageView;

fn test_renderer(dir: &tempfile::TempDir) -> NumeralRenderer {
    let config = GeneratorConfig::default().with_output_directory(dir.path());
    NumeralRenderer::new(config)
}

#[test]
fn test_render_writes_png_at_number_path() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let path = renderer.render(5038).expect("Should render");
    assert_eq!(path, dir.path().join("5038.png"));
    assert!(path.is_file());
}

#[test]
fn test_render_dimensions_follow_segment_length() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    // segment_length 50 -> 100x200 canvas
    let path = renderer.render(1).unwrap();
    let img = image::open(path).unwrap();
    assert_eq!(img.dimensions(), (100, 200));
}

#[test]
fn test_render_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let first_path = renderer.render(7457).unwrap();
    let first_bytes = fs::read(&first_path).unwrap();

    let second_path = renderer.render(7457).unwrap();
    let second_bytes = fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_render_cache_hit_skips_re_encode() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let path = renderer.render(42).unwrap();
    // Replace the cached artifact; a second render must not overwrite it
    fs::write(&path, b"sentinel").unwrap();
    renderer.render(42).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"sentinel");
}

#[test]
fn test_render_has_stem_and_transparent_background() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    // 0 has no segments at all, only the stem
    let img = image::open(renderer.render(0).unwrap()).unwrap().into_rgba8();

    // Stem: thickness 5 centered on x=50, full height
    for y in 0..200 {
        for x in 48..=52 {
            assert_eq!(img.get_pixel(x, y).0, [0, 0, 0, 255], "stem at ({x},{y})");
        }
    }
    // Corners stay transparent
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(99, 199).0[3], 0);
}

#[test]
fn test_render_aliases_above_9999() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let low = fs::read(renderer.render(5038).unwrap()).unwrap();
    let high = fs::read(renderer.render(15038).unwrap()).unwrap();
    assert_eq!(low, high);
}

#[test]
fn test_difference_path_joins_numbers_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let path = renderer.render_difference(&[5038, 4245]).unwrap();
    assert_eq!(path, dir.path().join("difference-5038-4245.png"));

    // Order-sensitive key: reversed input is a distinct artifact
    let reversed = renderer.render_difference(&[4245, 5038]).unwrap();
    assert_eq!(reversed, dir.path().join("difference-4245-5038.png"));
}

#[test]
fn test_difference_of_number_with_itself_is_blank() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    // Every segment toggles twice and cancels; no stem either
    let img = image::open(renderer.render_difference(&[5038, 5038]).unwrap())
        .unwrap()
        .into_rgba8();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_difference_of_single_number_matches_render_minus_stem() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let rendered = image::open(renderer.render(5038).unwrap()).unwrap().into_rgba8();
    let diff = image::open(renderer.render_difference(&[5038]).unwrap())
        .unwrap()
        .into_rgba8();

    // Away from the stem columns the two images agree pixel for pixel
    for (x, y, pixel) in diff.enumerate_pixels() {
        if !(48..=52).contains(&x) {
            assert_eq!(pixel, rendered.get_pixel(x, y), "pixel ({x},{y})");
        }
    }
    // And the stem itself is absent: the stem-only rows are transparent
    assert_eq!(diff.get_pixel(50, 100).0[3], 0);
}

#[test]
fn test_difference_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = test_renderer(&dir);

    let path = renderer.render_difference(&[8030, 59]).unwrap();
    let bytes = fs::read(&path).unwrap();
    renderer.render_difference(&[8030, 59]).unwrap();
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_render_small_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default()
        .with_segment_length(10)
        .with_line_thickness(3)
        .with_output_directory(dir.path());
    let renderer = NumeralRenderer::new(config);

    let img = image::open(renderer.render(9999).unwrap()).unwrap();
    assert_eq!(img.dimensions(), (20, 40));
}
