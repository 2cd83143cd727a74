//! End-to-end tests driving the `simshot` binary.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::{Command, Output};

use image::{DynamicImage, ImageFormat};
use tempfile::TempDir;

fn simshot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simshot"))
        .args(args)
        .output()
        .expect("failed to run simshot")
}

/// Write a portrait RGBA PNG of the given size and return its path.
fn write_capture(dir: &TempDir, name: &str, width: u32, height: u32) -> String {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([30, 60, 90, 255]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();

    let path = dir.path().join(name);
    fs::write(&path, buf).unwrap();
    path.to_string_lossy().into_owned()
}

fn out_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_ipad_capture_with_default_margins() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 2048, 2732);
    let output = out_path(&dir, "clean.jpg");

    let result = simshot(&[input.as_str(), output.as_str()]);

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    assert_eq!(
        stdout(&result).trim(),
        format!("Processed: 2732x1876 -> {output}")
    );

    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (2732, 1876));
    assert!(!written.color().has_alpha());
}

#[test]
fn test_ipad_capture_without_margins() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 2048, 2732);
    let output = out_path(&dir, "full.jpeg");

    let result = simshot(&[
        input.as_str(),
        output.as_str(),
        "--crop-top",
        "0",
        "--crop-bottom",
        "0",
    ]);

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    assert!(stdout(&result).contains("2732x2048"));
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = out_path(&dir, "does-not-exist.png");
    let output = out_path(&dir, "out.png");

    let result = simshot(&[input.as_str(), output.as_str()]);

    assert!(!result.status.success());
    assert!(stderr(&result).contains("does-not-exist.png"));
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_missing_arguments_prints_usage() {
    let result = simshot(&["only-one.png"]);

    assert!(!result.status.success());
    assert!(stderr(&result).contains("Usage"));
}

#[test]
fn test_uppercase_png_extension_is_lossless() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 40, 60);
    let output = out_path(&dir, "OUT.PNG");

    let result = simshot(&[
        input.as_str(),
        output.as_str(),
        "--crop-top",
        "4",
        "--crop-bottom",
        "2",
    ]);

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    let bytes = fs::read(&output).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);

    let written = image::load_from_memory(&bytes).unwrap();
    assert_eq!((written.width(), written.height()), (60, 34));
    assert!(written.color().has_alpha());
}

#[test]
fn test_lossless_output_ignores_quality() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 40, 60);
    let a = out_path(&dir, "a.png");
    let b = out_path(&dir, "b.png");

    let margins = ["--crop-top", "1", "--crop-bottom", "1"];
    let mut args_a = vec![input.as_str(), a.as_str(), "--quality", "10"];
    args_a.extend(margins);
    let mut args_b = vec![input.as_str(), b.as_str(), "--quality", "95"];
    args_b.extend(margins);

    assert!(simshot(&args_a).status.success());
    assert!(simshot(&args_b).status.success());
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_degenerate_crop_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 100, 200);
    let output = out_path(&dir, "out.png");

    // Rotated height is 100; the default margins remove 172 rows
    let result = simshot(&[input.as_str(), output.as_str()]);

    assert!(!result.status.success());
    assert!(stderr(&result).contains("Degenerate crop"));
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_out_of_range_quality_fails_for_jpeg() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 40, 60);
    let output = out_path(&dir, "out.jpg");

    let result = simshot(&[
        input.as_str(),
        output.as_str(),
        "--quality",
        "150",
        "--crop-top",
        "0",
        "--crop-bottom",
        "0",
    ]);

    assert!(!result.status.success());
    assert!(stderr(&result).contains("Quality 150 is out of range"));
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_corrupt_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = out_path(&dir, "raw.png");
    fs::write(&input, b"this is not a png").unwrap();
    let output = out_path(&dir, "out.png");

    let result = simshot(&[input.as_str(), output.as_str()]);

    assert!(!result.status.success());
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let input = write_capture(&dir, "raw.png", 30, 50);
    let output = out_path(&dir, "out.jpg");

    let result = simshot(&[
        input.as_str(),
        output.as_str(),
        "--json",
        "--crop-top",
        "3",
        "--crop-bottom",
        "2",
    ]);

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    let report: serde_json::Value = serde_json::from_str(&stdout(&result)).unwrap();
    assert_eq!(report["width"], 50);
    assert_eq!(report["height"], 25);
    assert_eq!(report["format"], "jpeg");
    assert_eq!(report["options"]["quality"], 90);
}
