use crate::config::GeneratorConfig;
use crate::render;
use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by one run, in the order they were produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub out_dir: PathBuf,
    pub files: Vec<String>,
}

impl GenerationReport {
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.out_dir.join(name))
    }
}

/// Shrink the master render with a Lanczos3 filter
pub fn downsample(master: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(master, size, size, FilterType::Lanczos3)
}

fn save(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("Failed to write icon {}", path.display()))
}

/// Render the master icon once and write every configured size plus the
/// default-named copy. Existing files with the same names are overwritten.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("Failed to create output directory {}", config.out_dir.display())
    })?;

    let master_size = config.master_size();
    let master = render::render(master_size);

    let mut files = Vec::with_capacity(config.sizes.len() + 1);

    for &size in &config.sizes {
        let name = config.sized_file_name(size);
        let path = config.out_dir.join(&name);

        if size == master_size {
            save(&master, &path)?;
        } else {
            save(&downsample(&master, size), &path)?;
        }
        files.push(name);
    }

    let name = config.default_file_name();
    save(&master, &config.out_dir.join(&name))?;
    files.push(name);

    Ok(GenerationReport {
        out_dir: config.out_dir.clone(),
        files,
    })
}
