use crate::task::TaskRunner;
use crate::ResizeError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use xcommon::{Scaler, ScalerOpts};

/// Android resource directory, relative to the project root.
pub const RES_DIR: &str = "android/app/src/main/res";

pub const IC_LAUNCHER: &str = "ic_launcher.png";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Density {
    pub label: &'static str,
    pub size: u32,
}

impl Density {
    const fn new(label: &'static str, size: u32) -> Self {
        Self { label, size }
    }

    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.label)
    }
}

pub const DENSITIES: [Density; 5] = [
    Density::new("mdpi", 48),
    Density::new("hdpi", 72),
    Density::new("xhdpi", 96),
    Density::new("xxhdpi", 144),
    Density::new("xxxhdpi", 192),
];

/// Writes `ic_launcher.png` for every density into `res`.
///
/// Targets are written in order and a failure stops the batch. Icons
/// written before the failure are left in place.
pub fn mipmap_ic_launcher(
    scaler: &Scaler,
    res: &Path,
    runner: &mut TaskRunner,
) -> Result<Vec<PathBuf>, ResizeError> {
    let mut written = Vec::with_capacity(DENSITIES.len());
    for density in DENSITIES {
        runner.start_task(format!("{} icon ({1}x{1})", density.dir_name(), density.size));
        let dir = res.join(density.dir_name());
        std::fs::create_dir_all(&dir).map_err(|source| ResizeError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(IC_LAUNCHER);
        let file = File::create(&path).map_err(|source| ResizeError::Create {
            path: path.clone(),
            source,
        })?;
        let mut w = BufWriter::new(file);
        scaler
            .write(&mut w, ScalerOpts::new(density.size))
            .and_then(|_| w.flush().map_err(Into::into))
            .map_err(|source| ResizeError::Encode {
                path: path.clone(),
                source,
            })?;
        runner.end_task();
        written.push(path);
    }
    Ok(written)
}
