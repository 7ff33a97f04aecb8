extern crate color_eyre;
extern crate posed_images;

use std::env;
use std::path::Path;
use color_eyre::eyre::{eyre, Result};

use posed_images::io::loading_parameters::LoadingParameters;
use posed_images::load_with_parameters;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let conf_path = env::args().nth(1).ok_or_else(|| eyre!("usage: load_posed <loading_parameters.yaml>"))?;
    let parameters = LoadingParameters::from_yaml_file(Path::new(&conf_path))?;
    let images = load_with_parameters(&parameters)?;

    println!("--------");
    for (idx, item) in images.iter().enumerate() {
        let [x, y, z] = item.xyz(false);
        let direction = item.direction(false)?;
        println!("{}: {} ({}x{}) xyz: ({:.3}, {:.3}, {:.3}) xz angle: {:.3} direction: ({:.3}, {:.3}, {:.3})",
            idx, item.file_name.display(), item.w, item.h, x, y, z, item.xz_angle(false), direction.x, direction.y, direction.z);
    }
    println!("--------");

    Ok(())
}
