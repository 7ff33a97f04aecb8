use std::collections::HashMap;
use std::path::{Path, PathBuf};
use log::debug;
use serde::Deserialize;

use crate::Float;
use crate::error::{PosedImagesError, Result};
use crate::io::{has_image_extension, read_to_string};
use crate::numerics::pose::PoseVector;

pub const IMAGE_FOLDER_DATASET: &str = "training.dataset.ImageFolderDataset";
pub const LABEL_FILE: &str = "dataset.json";

pub type LabelTable = HashMap<String, PoseVector>;

#[derive(Debug, Clone)]
pub struct DatasetOptions {
    pub class_name: String,
    pub path: PathBuf,
    pub use_labels: bool,
    pub max_size: Option<usize>,
    pub xflip: bool
}

impl DatasetOptions {
    /**
     * Labelled, unbounded, unflipped image folder
     */
    pub fn labelled(path: &Path) -> DatasetOptions {
        DatasetOptions {
            class_name: IMAGE_FOLDER_DATASET.to_string(),
            path: path.to_path_buf(),
            use_labels: true,
            max_size: None,
            xflip: false
        }
    }
}

#[derive(Deserialize)]
struct LabelFile {
    labels: Option<Vec<(String, Vec<Float>)>>
}

/**
 * Folder of images with an optional dataset.json holding one camera label per image.
 */
#[derive(Debug, Clone)]
pub struct ImageFolderDataset {
    path: PathBuf,
    image_fnames: Vec<String>,
    raw_idx: Vec<usize>,
    raw_xflip: Vec<bool>,
    use_labels: bool
}

impl ImageFolderDataset {

    pub fn open(options: &DatasetOptions) -> Result<ImageFolderDataset> {
        if options.class_name != IMAGE_FOLDER_DATASET {
            return Err(PosedImagesError::UnknownDatasetClass(options.class_name.clone()));
        }
        if !options.path.is_dir() {
            return Err(PosedImagesError::DatasetRootMissing(options.path.clone()));
        }

        let mut image_fnames = Vec::<String>::new();
        collect_image_fnames(&options.path, &options.path, &mut image_fnames)?;
        image_fnames.sort();

        let mut raw_idx = (0..image_fnames.len()).collect::<Vec<usize>>();
        if let Some(max_size) = options.max_size {
            raw_idx.truncate(max_size);
        }
        let mut raw_xflip = vec![false; raw_idx.len()];
        if options.xflip {
            raw_idx.extend_from_within(..);
            raw_xflip.resize(raw_idx.len(), true);
        }

        debug!("{}: {} images, {} raw items", options.path.display(), image_fnames.len(), raw_idx.len());

        Ok(ImageFolderDataset {
            path: options.path.clone(),
            image_fnames,
            raw_idx,
            raw_xflip,
            use_labels: options.use_labels
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /**
     * All image files below the root, relative and '/' separated, sorted
     */
    pub fn image_fnames(&self) -> &[String] {
        &self.image_fnames
    }

    pub fn len(&self) -> usize {
        self.raw_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_idx.is_empty()
    }

    /**
     * (file name, mirrored) for every raw item after max_size and xflip
     */
    pub fn raw_items(&self) -> Vec<(&str, bool)> {
        self.raw_idx.iter().zip(self.raw_xflip.iter()).map(|(&i, &flip)| (self.image_fnames[i].as_str(), flip)).collect()
    }

    pub fn load_label_dict(&self) -> Result<LabelTable> {
        if !self.use_labels {
            return Ok(LabelTable::new());
        }

        let label_path = self.path.join(LABEL_FILE);
        if !label_path.is_file() {
            return Err(PosedImagesError::LabelsUnavailable(label_path));
        }
        let contents = read_to_string(&label_path)?;
        let label_file: LabelFile = serde_json::from_str(&contents).map_err(|source| PosedImagesError::Json { path: label_path.clone(), source })?;
        let labels = label_file.labels.ok_or_else(|| PosedImagesError::LabelsUnavailable(label_path.clone()))?;

        let mut table = LabelTable::with_capacity(labels.len());
        for (name, values) in labels {
            let pose = PoseVector::from_slice(&values)?;
            table.insert(name, pose);
        }
        debug!("{}: {} labels", label_path.display(), table.len());
        Ok(table)
    }
}

fn collect_image_fnames(root: &Path, dir_path: &Path, image_fnames: &mut Vec<String>) -> Result<()> {
    let io_err = |source| PosedImagesError::Io { path: dir_path.to_path_buf(), source };
    for entry_result in std::fs::read_dir(dir_path).map_err(io_err)? {
        let entry = entry_result.map_err(io_err)?;
        let entry_path = entry.path();
        // file_type does not follow symlinks, so linked directories are skipped
        if entry.file_type().map_err(io_err)?.is_dir() {
            collect_image_fnames(root, &entry_path, image_fnames)?;
        } else if has_image_extension(&entry_path) {
            if let Ok(relative) = entry_path.strip_prefix(root) {
                let name = relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect::<Vec<String>>().join("/");
                image_fnames.push(name);
            }
        }
    }
    Ok(())
}
