//! End-to-end pipeline tests: real files on disk, both strategies, all
//! three outcome classes.

use deborder::codec;
use deborder::config::{Config, Strategy};
use deborder::inputs;
use deborder::process::{self, WriteMode};
use deborder::types::{ErrorReason, ProcessResult, SkipReason};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// White canvas with a centered black square leaving `margin` pixels on
/// every side.
fn margined_image(canvas: u32, margin: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(canvas, canvas, WHITE);
    for y in margin..canvas - margin {
        for x in margin..canvas - margin {
            image.put_pixel(x, y, BLACK);
        }
    }
    image
}

fn config(strategy: Strategy) -> Config {
    let mut config = Config::default();
    config.detector.strategy = strategy;
    config
}

fn write(path: &Path, image: &RgbImage) {
    codec::encode(image, path).unwrap();
}

fn expect_output(result: &ProcessResult) -> PathBuf {
    match result {
        ProcessResult::Success { output, .. } => output.clone(),
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn fifty_pixel_margin_crops_to_content_both_strategies() {
    for strategy in [Strategy::Contour, Strategy::Scan] {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("framed.png");
        write(&input, &margined_image(200, 50));

        let results = process::process_batch(&[input], &config(strategy), WriteMode::Apply);
        let output = expect_output(&results[0]);
        assert_eq!(output.file_name().unwrap(), "framed_cropped.png");

        let cropped = codec::decode(&output).unwrap();
        assert_eq!(cropped.dimensions(), (100, 100), "{strategy:?}");
        // Content only: every remaining pixel is the black square.
        assert!(cropped.pixels().all(|p| *p == BLACK), "{strategy:?}");
    }
}

#[test]
fn two_pixel_margin_is_below_the_crop_threshold() {
    for strategy in [Strategy::Contour, Strategy::Scan] {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("tight.png");
        write(&input, &margined_image(200, 2));

        let results = process::process_batch(&[input], &config(strategy), WriteMode::Apply);
        assert!(
            matches!(
                results[0],
                ProcessResult::Skipped {
                    reason: SkipReason::InsignificantBorder,
                    ..
                }
            ),
            "{strategy:?}: got {:?}",
            results[0]
        );
        assert!(!tmp.path().join("tight_cropped.png").exists());
    }
}

#[test]
fn fully_white_image_skips_under_scan() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("blank.png");
    write(&input, &RgbImage::from_pixel(50, 50, WHITE));

    let results = process::process_batch(&[input], &config(Strategy::Scan), WriteMode::Apply);
    assert!(matches!(
        results[0],
        ProcessResult::Skipped {
            reason: SkipReason::NoContent,
            ..
        }
    ));
}

#[test]
fn zero_byte_file_reports_decode_failure() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("broken.png");
    std::fs::write(&input, b"").unwrap();

    let results = process::process_batch(&[input], &Config::default(), WriteMode::Apply);
    assert!(matches!(
        results[0],
        ProcessResult::Error {
            reason: ErrorReason::DecodeFailure,
            ..
        }
    ));
}

#[test]
fn pipeline_is_idempotent() {
    for strategy in [Strategy::Contour, Strategy::Scan] {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("framed.png");
        write(&input, &margined_image(120, 20));
        let config = config(strategy);

        let first = process::process_batch(&[input], &config, WriteMode::Apply);
        let output = expect_output(&first[0]);

        let second = process::process_batch(&[output], &config, WriteMode::Apply);
        assert!(
            matches!(second[0], ProcessResult::Skipped { .. }),
            "{strategy:?}: got {:?}",
            second[0]
        );
    }
}

#[test]
fn contour_rectangle_is_reproducible_across_runs() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("framed.png");
    write(&input, &margined_image(150, 30));
    let config = config(Strategy::Contour);

    let first = process::process_batch(&[input.clone()], &config, WriteMode::Apply);
    let first_out = codec::decode(&expect_output(&first[0])).unwrap();

    let second = process::process_batch(&[input], &config, WriteMode::Apply);
    let second_out = codec::decode(&expect_output(&second[0])).unwrap();

    assert_eq!(first_out.dimensions(), second_out.dimensions());
    assert_eq!(first_out, second_out);
}

#[test]
fn folder_argument_expands_and_classifies_every_image() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("a.png"), &margined_image(100, 20));
    write(&tmp.path().join("b.png"), &RgbImage::from_pixel(40, 40, WHITE));
    std::fs::write(tmp.path().join("c.png"), b"junk").unwrap();
    std::fs::write(tmp.path().join("notes.txt"), b"not an image").unwrap();

    let images = inputs::collect_images(&[tmp.path().to_path_buf()]);
    assert_eq!(images.len(), 3);

    let results = process::process_batch(&images, &config(Strategy::Scan), WriteMode::Apply);
    assert_eq!(results.len(), 3);
    // Sorted walk order: a.png, b.png, c.png.
    assert!(results[0].is_success());
    assert!(matches!(results[1], ProcessResult::Skipped { .. }));
    assert!(results[2].is_error());
}

#[test]
fn jpeg_input_yields_jpeg_output() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("photo.jpg");
    write(&input, &margined_image(160, 30));

    let results = process::process_batch(&[input], &Config::default(), WriteMode::Apply);
    let output = expect_output(&results[0]);
    assert_eq!(output.extension().unwrap(), "jpg");

    let reader = image::ImageReader::open(&output)
        .unwrap()
        .with_guessed_format()
        .unwrap();
    assert_eq!(reader.format(), Some(image::ImageFormat::Jpeg));
}

#[test]
fn report_results_serialize_in_order() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.png");
    let broken = tmp.path().join("broken.png");
    write(&good, &margined_image(100, 20));
    std::fs::write(&broken, b"junk").unwrap();

    let results = process::process_batch(
        &[good.clone(), broken.clone()],
        &Config::default(),
        WriteMode::Apply,
    );
    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&results).unwrap(),
    )
    .unwrap();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["status"], "success");
    assert_eq!(items[1]["status"], "error");
    assert_eq!(items[1]["reason"], "decode-failure");
}
