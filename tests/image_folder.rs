use std::fs;
use std::path::Path;
use image::{Rgb, RgbImage};
use serde_json::json;
use tempfile::tempdir;

use posed_images::PosedImagesError;
use posed_images::io::image_folder::{DatasetOptions, ImageFolderDataset, IMAGE_FOLDER_DATASET};

fn write_image(root: &Path, name: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(path).unwrap();
}

fn identity_label() -> Vec<f64> {
    vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
         1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
}

#[test]
fn test_enumerates_images_recursively_and_sorted() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_image(root, "b1.png");
    write_image(root, "a0.png");
    write_image(root, "00000/c2.png");
    fs::write(root.join("notes.txt"), "skip").unwrap();
    fs::write(root.join("dataset.json"), "{\"labels\": []}").unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    assert_eq!(dataset.image_fnames(), &["00000/c2.png".to_string(), "a0.png".to_string(), "b1.png".to_string()][..]);
    assert_eq!(dataset.path(), root);
    assert_eq!(dataset.len(), 3);
}

#[test]
fn test_max_size_and_xflip_shape_raw_items() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for name in ["a0.png", "a1.png", "a2.png"].iter() {
        write_image(root, name);
    }

    let options = DatasetOptions {
        class_name: IMAGE_FOLDER_DATASET.to_string(),
        path: root.to_path_buf(),
        use_labels: false,
        max_size: Some(2),
        xflip: true
    };
    let dataset = ImageFolderDataset::open(&options).unwrap();
    assert_eq!(dataset.image_fnames().len(), 3);
    assert_eq!(dataset.raw_items(), vec![("a0.png", false), ("a1.png", false), ("a0.png", true), ("a1.png", true)]);
    assert!(dataset.load_label_dict().unwrap().is_empty());
}

#[test]
fn test_reads_label_table() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_image(root, "a0.png");
    let labels = json!({ "labels": [["a0.png", identity_label()]] });
    fs::write(root.join("dataset.json"), labels.to_string()).unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    let table = dataset.load_label_dict().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table["a0.png"].as_slice(), &identity_label()[..]);
}

#[test]
fn test_rejects_short_label() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let labels = json!({ "labels": [["a0.png", [1.0, 2.0, 3.0]]] });
    fs::write(root.join("dataset.json"), labels.to_string()).unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    let err = dataset.load_label_dict().unwrap_err();
    assert!(matches!(err, PosedImagesError::PoseLengthMismatch { expected: 25, actual: 3 }));
}

#[test]
fn test_null_labels_are_unavailable() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("dataset.json"), "{\"labels\": null}").unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    assert!(matches!(dataset.load_label_dict(), Err(PosedImagesError::LabelsUnavailable(_))));
}

#[test]
fn test_malformed_label_file_is_a_json_error() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("dataset.json"), "{\"labels\": [").unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    assert!(matches!(dataset.load_label_dict(), Err(PosedImagesError::Json { .. })));
}

#[test]
fn test_rejects_unknown_class_and_missing_root() {
    let dir = tempdir().unwrap();
    let mut options = DatasetOptions::labelled(dir.path());
    options.class_name = "training.dataset.ZipDataset".to_string();
    assert!(matches!(ImageFolderDataset::open(&options), Err(PosedImagesError::UnknownDatasetClass(_))));

    let missing = DatasetOptions::labelled(&dir.path().join("missing"));
    assert!(matches!(ImageFolderDataset::open(&missing), Err(PosedImagesError::DatasetRootMissing(_))));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_descended() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_image(root, "img0.png");
    write_image(root, "real/img1.png");
    std::os::unix::fs::symlink(root, root.join("loop")).unwrap();
    std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();
    std::os::unix::fs::symlink(root.join("img0.png"), root.join("link0.png")).unwrap();

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(root)).unwrap();
    assert_eq!(dataset.image_fnames(), &["img0.png".to_string(), "link0.png".to_string(), "real/img1.png".to_string()][..]);
}
