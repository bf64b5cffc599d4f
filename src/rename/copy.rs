//! Concurrent copy of planned renames.

use std::collections::HashMap;
use std::fs::{File, FileTimes};
use std::io::ErrorKind;
use std::path::Path;

use futures::{stream, StreamExt};
use indicatif::ProgressBar;

use crate::error::{Error, Result};
use crate::fs::is_same_file;
use crate::rename::outcome::{RenameOutcome, TaskResult};
use crate::rename::plan::{RenamePlan, RenameTask};

/// Copy a file, keeping its permissions and access/modification times.
///
/// Times are best effort: a failure to set them does not fail the copy.
/// Copying a file onto itself is refused so the original is never truncated.
pub fn copy_with_metadata(source: &Path, destination: &Path) -> std::io::Result<u64> {
    if is_same_file(source, destination) {
        return Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "{} and {} are the same file",
                source.display(),
                destination.display()
            ),
        ));
    }

    let bytes = std::fs::copy(source, destination)?;

    let metadata = std::fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    let applied = File::options()
        .write(true)
        .open(destination)
        .or_else(|_| File::open(destination))
        .and_then(|file| file.set_times(times));

    if let Err(e) = applied {
        tracing::debug!(
            "Could not preserve timestamps on {}: {}",
            destination.display(),
            e
        );
    }

    Ok(bytes)
}

/// Run one copy on the blocking pool.
async fn copy_task(task: &RenameTask) -> Result<u64> {
    let source = task.source.clone();
    let destination = task.destination.clone();

    tokio::task::spawn_blocking(move || copy_with_metadata(&source, &destination))
        .await
        .map_err(|e| Error::Copy(format!("copy worker failed: {}", e)))?
        .map_err(Error::from)
}

/// Group tasks that write the same destination, keeping plan order.
///
/// Each group runs sequentially so the last task in plan order wins.
fn group_by_destination(tasks: &[RenameTask]) -> Vec<Vec<&RenameTask>> {
    let mut groups: Vec<Vec<&RenameTask>> = Vec::new();
    let mut index: HashMap<&Path, usize> = HashMap::new();

    for task in tasks {
        match index.get(task.destination.as_path()) {
            Some(&i) => groups[i].push(task),
            None => {
                index.insert(task.destination.as_path(), groups.len());
                groups.push(vec![task]);
            }
        }
    }

    groups
}

/// Execute every task in `plan` with at most `workers` copies in flight.
///
/// A failed copy is logged and recorded; it never stops the others.
pub async fn execute_plan(
    plan: &RenamePlan,
    workers: usize,
    progress: Option<&ProgressBar>,
) -> RenameOutcome {
    let total = plan.len();
    let groups = group_by_destination(&plan.tasks);

    if groups.len() < total {
        tracing::warn!(
            "{} item names map to an existing destination; the later copy wins",
            total - groups.len()
        );
    }

    let mut results: Vec<TaskResult> = stream::iter(groups)
        .map(|group| async move {
            let mut group_results = Vec::with_capacity(group.len());

            for task in group {
                let result = copy_task(task).await;

                match &result {
                    Ok(bytes) => {
                        tracing::debug!(
                            "Copied {} -> {} ({} bytes)",
                            task.source.display(),
                            task.destination.display(),
                            bytes
                        );
                        if let Some(bar) = progress {
                            bar.println(format!(
                                "Renamed {} to {} ({}/{})",
                                task.source_filename(),
                                task.destination_filename(),
                                task.position,
                                total
                            ));
                        }
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to copy {} to {}: {}",
                            task.source.display(),
                            task.destination.display(),
                            e
                        );
                    }
                }

                if let Some(bar) = progress {
                    bar.inc(1);
                }

                group_results.push(TaskResult::from_copy(task.clone(), result));
            }

            group_results
        })
        .buffer_unordered(workers.max(1))
        .flat_map(stream::iter)
        .collect()
        .await;

    results.sort_by_key(|r| r.task.position);

    RenameOutcome {
        total,
        results,
        names_dropped: plan.names_dropped,
        images_dropped: plan.images_dropped,
    }
}
