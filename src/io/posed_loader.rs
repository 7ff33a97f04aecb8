use std::path::Path;
use log::{debug, info};

use crate::error::{PosedImagesError, Result};
use crate::image::{image_item::ImageItem, tensor::Device};
use crate::io::image_folder::{DatasetOptions, ImageFolderDataset, LabelTable};
use crate::io::loading_parameters::LoadingParameters;
use crate::numerics::pose::PoseVector;

const DERIVED_PREFIX: &str = "crop";
const SELECTED_SUFFIX: &str = ".png";

/**
 * Accepts png files whose base name does not start with "crop" and whose stem ends in a digit.
 */
pub fn is_selected(file_name: &str) -> bool {
    let base_name = file_name.rsplit('/').next().unwrap_or(file_name);
    if base_name.starts_with(DERIVED_PREFIX) {
        return false;
    }
    match base_name.strip_suffix(SELECTED_SUFFIX) {
        Some(stem) => stem.chars().last().map_or(false, |c| c.is_ascii_digit()),
        None => false
    }
}

pub fn select_file_names(file_names: &[String]) -> Vec<String> {
    file_names.iter().filter(|name| is_selected(name)).cloned().collect()
}

/**
 * First run of ASCII digits in the base name. Runs too long for usize saturate to usize::MAX.
 */
pub fn canonical_index(file_name: &str) -> Option<usize> {
    let base_name = file_name.rsplit('/').next().unwrap_or(file_name);
    let start = base_name.find(|c: char| c.is_ascii_digit())?;
    let digits = &base_name[start..];
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    Some(digits[..end].parse::<usize>().unwrap_or(usize::MAX))
}

/**
 * Places every name at its canonical index. The indices must form a permutation of 0..N.
 */
pub fn canonical_order(file_names: &[String]) -> Result<Vec<String>> {
    let count = file_names.len();
    let mut slots: Vec<Option<&String>> = vec![None; count];
    for name in file_names {
        let index = canonical_index(name).ok_or_else(|| PosedImagesError::MissingIndex(name.clone()))?;
        if index >= count {
            return Err(PosedImagesError::IndexOutOfRange { index, name: name.clone(), count });
        }
        if let Some(first) = slots[index] {
            return Err(PosedImagesError::DuplicateIndex { index, first: first.clone(), second: name.clone() });
        }
        slots[index] = Some(name);
    }

    // N names in N slots without duplicates leaves no gaps
    Ok(slots.into_iter().flatten().cloned().collect())
}

pub fn lookup_poses(ordered_names: &[String], labels: &LabelTable) -> Result<Vec<PoseVector>> {
    ordered_names.iter().map(|name| {
        labels.get(name).copied().ok_or_else(|| PosedImagesError::MissingLabel(name.clone()))
    }).collect()
}

pub fn load(folder: &Path, img_resolution: u32, device: Device) -> Result<Vec<ImageItem>> {
    if img_resolution == 0 {
        return Err(PosedImagesError::InvalidResolution(img_resolution));
    }

    let dataset = ImageFolderDataset::open(&DatasetOptions::labelled(folder))?;
    let selected = select_file_names(dataset.image_fnames());
    debug!("{} of {} image files selected", selected.len(), dataset.image_fnames().len());

    let ordered_names = canonical_order(&selected)?;
    let label_dict = dataset.load_label_dict()?;
    let poses = lookup_poses(&ordered_names, &label_dict)?;

    let total = ordered_names.len();
    info!("Loading Data: {} images from {} at {}x{} on {}", total, folder.display(), img_resolution, img_resolution, device);
    let mut images = Vec::<ImageItem>::with_capacity(total);
    for (idx, (name, pose)) in ordered_names.iter().zip(poses.into_iter()).enumerate() {
        let target_fname = dataset.path().join(name);
        images.push(ImageItem::new(&target_fname, pose, device, img_resolution)?);
        info!("Loading Data: {}/{}", idx + 1, total);
    }

    Ok(images)
}

pub fn load_with_parameters(parameters: &LoadingParameters) -> Result<Vec<ImageItem>> {
    load(&parameters.folder, parameters.resolution, parameters.device)
}
