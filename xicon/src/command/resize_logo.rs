use crate::mipmap::{self, DENSITIES, RES_DIR};
use crate::task::{self, TaskRunner};
use crate::ResizeError;
use std::path::{Path, PathBuf};
use xcommon::Scaler;

pub const LOGO: &str = "logo.png";

/// Creates the android launcher icons from `logo.png`.
///
/// Returns `false` after reporting the failure when the logo is missing or
/// any step fails.
pub fn resize_logo(project_dir: &Path, verbose: bool) -> bool {
    task::info("Resizing logo for Android app icons...");
    if !project_dir.join(LOGO).exists() {
        task::error(format!("{} not found in {}", LOGO, project_dir.display()));
        return false;
    }
    match try_resize_logo(project_dir, verbose) {
        Ok(icons) => {
            tracing::debug!(count = icons.len(), "wrote launcher icons");
            task::ok("Logo resizing complete!");
            task::info("All Android app icons have been created in the correct folders.");
            true
        }
        Err(err) => {
            tracing::error!(?err);
            task::error(format!("Error resizing logo: {}", err));
            false
        }
    }
}

pub fn try_resize_logo(project_dir: &Path, verbose: bool) -> Result<Vec<PathBuf>, ResizeError> {
    let logo = project_dir.join(LOGO);
    let scaler = Scaler::open(&logo).map_err(|source| ResizeError::Decode {
        path: logo.clone(),
        source,
    })?;
    let (width, height) = scaler.dimensions();
    task::info(format!("Original logo size: {}x{}", width, height));
    let mut runner = TaskRunner::new(DENSITIES.len() as u32, verbose);
    mipmap::mipmap_ic_launcher(&scaler, &project_dir.join(RES_DIR), &mut runner)
}
