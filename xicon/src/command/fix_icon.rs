use crate::task;
use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// App store icon of a flutter project, relative to the project root.
pub const IOS_APP_ICON: &str =
    "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-1024x1024@1x.png";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixOutcome {
    Fixed,
    NotFound,
}

/// Removes transparency from the ios app icon, overwriting it in place.
///
/// A missing icon is reported and is not an error. Decode and encode
/// failures are returned to the caller.
pub fn fix_icon(project_dir: &Path) -> Result<FixOutcome> {
    let path = project_dir.join(IOS_APP_ICON);
    if !path.exists() {
        task::error(format!("Icon file not found: {}", path.display()));
        return Ok(FixOutcome::NotFound);
    }
    let img = ImageReader::open(&path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| format!("failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::debug!(
        color = ?img.color(),
        alpha = xcommon::has_alpha(&img),
        "decoded app icon"
    );
    xcommon::strip_alpha(img)
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    task::ok(format!("Fixed transparency in {}", path.display()));
    Ok(FixOutcome::Fixed)
}
