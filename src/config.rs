use crate::constants::output;
use anyhow::{bail, Result};
use image::ImageFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Edge lengths to write, in output order
    pub sizes: Vec<u32>,
    pub out_dir: PathBuf,
    pub file_stem: String,
    pub extension: String,
}

fn default_sizes() -> Vec<u32> {
    output::SIZES.to_vec()
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(output::DIR)
}

fn default_file_stem() -> String {
    output::FILE_STEM.to_string()
}

fn default_extension() -> String {
    output::EXTENSION.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            sizes: default_sizes(),
            out_dir: default_out_dir(),
            file_stem: default_file_stem(),
            extension: default_extension(),
        }
    }
}

impl GeneratorConfig {
    /// Default icon set written somewhere else
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    /// Largest size, rendered once and downsampled for the rest
    pub fn master_size(&self) -> u32 {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    pub fn sized_file_name(&self, size: u32) -> String {
        format!("{}-{}.{}", self.file_stem, size, self.extension)
    }

    /// Canonical copy of the master render, without a size suffix
    pub fn default_file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.extension)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("at least one icon size is required");
        }
        if self.sizes.contains(&0) {
            bail!("icon sizes must be greater than 0");
        }

        let mut seen = HashSet::new();
        for size in &self.sizes {
            if !seen.insert(size) {
                bail!("icon size {} is listed more than once", size);
            }
        }

        if self.file_stem.is_empty() {
            bail!("file stem cannot be empty");
        }
        if self.file_stem.contains(['/', '\\']) {
            bail!("file stem '{}' must not contain path separators", self.file_stem);
        }

        if self.extension.is_empty() {
            bail!("file extension cannot be empty");
        }
        // Icons need lossless output with an alpha channel
        match ImageFormat::from_extension(&self.extension) {
            Some(ImageFormat::Png) => {}
            Some(format) => bail!(
                "image format {:?} ('{}') cannot store lossless RGBA icons, use png",
                format,
                self.extension
            ),
            None => bail!("unsupported image extension '{}'", self.extension),
        }

        Ok(())
    }
}
