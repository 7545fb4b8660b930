//! Cleaning several documents at once.
//!
//! Documents are independent, so they are spread over the rayon thread
//! pool; each one is still cleaned sequentially by a shared pipeline.

use crate::clean::{CleanupOptions, CleanupPipeline, CleanupResult};
use crate::error::Result;
use crate::json;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Clean every JSON element file in `paths` in parallel.
///
/// Invalid options fail the whole batch up front; a file that cannot be
/// read or decoded only fails its own entry. Results keep the input order.
pub fn clean_files<P>(
    paths: &[P],
    options: &CleanupOptions,
) -> Result<Vec<(PathBuf, Result<CleanupResult>)>>
where
    P: AsRef<Path> + Sync,
{
    let pipeline = CleanupPipeline::new(options.clone())?;
    Ok(clean_files_with(paths, &pipeline))
}

/// Clean every JSON element file in `paths` in parallel with a prepared pipeline.
pub fn clean_files_with<P>(
    paths: &[P],
    pipeline: &CleanupPipeline,
) -> Vec<(PathBuf, Result<CleanupResult>)>
where
    P: AsRef<Path> + Sync,
{
    clean_files_with_progress(paths, pipeline, |_| {})
}

/// Like [`clean_files_with`], calling `on_done` from the worker thread as
/// soon as each file has been cleaned (or has failed).
pub fn clean_files_with_progress<P, F>(
    paths: &[P],
    pipeline: &CleanupPipeline,
    on_done: F,
) -> Vec<(PathBuf, Result<CleanupResult>)>
where
    P: AsRef<Path> + Sync,
    F: Fn(&Path) + Sync,
{
    log::debug!("cleaning {} documents", paths.len());

    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = json::from_file(path).map(|elements| pipeline.process_with_stats(elements));
            if let Err(ref e) = result {
                log::warn!("failed to clean {}: {}", path.display(), e);
            }
            on_done(path);
            (path.to_path_buf(), result)
        })
        .collect()
}
