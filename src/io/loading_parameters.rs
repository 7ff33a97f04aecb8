use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::image::tensor::Device;
use crate::io::read_to_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingParameters {
    pub folder: PathBuf,
    pub resolution: u32,
    #[serde(default)]
    pub device: Device
}

impl LoadingParameters {
    pub fn from_yaml_str(yaml: &str) -> Result<LoadingParameters> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(file_path: &Path) -> Result<LoadingParameters> {
        LoadingParameters::from_yaml_str(&read_to_string(file_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PosedImagesError;

    #[test]
    fn parses_with_default_device() {
        let params = LoadingParameters::from_yaml_str("folder: /data/ffhq\nresolution: 512\n").unwrap();
        assert_eq!(params.folder, PathBuf::from("/data/ffhq"));
        assert_eq!(params.resolution, 512);
        assert_eq!(params.device, Device::Cpu);
    }

    #[test]
    fn rejects_unknown_device() {
        let err = LoadingParameters::from_yaml_str("folder: x\nresolution: 64\ndevice: \"cuda:0\"\n").unwrap_err();
        assert!(matches!(err, PosedImagesError::Yaml(_)));
    }
}
