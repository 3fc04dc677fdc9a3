use assert_cmd::Command;
use predicates::prelude::*;

fn facefind() -> Command {
    Command::cargo_bin("facefind").expect("binary built")
}

#[test]
fn edge_writes_output_and_reports_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("detected_edges.jpg");

    facefind()
        .args(["edge", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Face shape detected via edge analysis.",
        ));

    assert!(out.exists(), "annotated output not written");
}

#[test]
fn faces_with_missing_image_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.jpeg");

    facefind()
        .args(["faces", "--image"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn features_with_missing_image_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.jpeg");

    facefind()
        .args(["features", "--image"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn mesh_with_missing_image_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.jpeg");

    facefind()
        .args(["mesh", "--image"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn faces_with_missing_model_reports_model_error() {
    // A real input image but no model file: the error names the model path,
    // not the image.
    let dir = tempfile::tempdir().expect("tempdir");
    let img_path = dir.path().join("input.png");
    image::RgbImage::from_pixel(32, 32, image::Rgb([127, 127, 127]))
        .save(&img_path)
        .expect("write test image");
    let missing_model = dir.path().join("seeta.bin");

    facefind()
        .args(["faces", "--image"])
        .arg(&img_path)
        .arg("--model")
        .arg(&missing_model)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("face model file not found"));
}
