use std::{env::current_dir, io, path::PathBuf};


/// Returns the default configuration filepath, which is at
/// `{current directory}/data/configuration.toml`.
pub fn get_default_configuration_file_path() -> Result<PathBuf, io::Error> {
    let mut configuration_filepath = current_dir()?;
    configuration_filepath.push("data/configuration.toml");

    Ok(configuration_filepath)
}
