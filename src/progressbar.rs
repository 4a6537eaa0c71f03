use anyhow::Result;
use indicatif::{MultiProgress, ProgressStyle};

pub fn new() -> MultiProgress {
    MultiProgress::new()
}

pub fn spinner() -> Result<ProgressStyle> {
    Ok(ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")?
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "))
}
