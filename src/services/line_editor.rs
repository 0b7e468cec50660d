use std::fs;
use std::path::Path;

use crate::domain::{Diagnostics, ManagedContent};

/// Ensure a managed unit is present in (or absent from) a line-oriented file.
///
/// Lines are compared exactly after stripping trailing terminators. Only the
/// first match is acted on: removal deletes the first matching line or
/// contiguous window, insertion appends the whole unit at end of file. The
/// file is rewritten only when a change was made.
///
/// A missing file or an I/O failure is reported through the diagnostics sink
/// and the operation is skipped; it never aborts the run.
pub fn ensure_content(
    path: &Path,
    content: &ManagedContent,
    should_exist: bool,
    diag: &dyn Diagnostics,
) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            diag.error(&format!("File '{}' not found.", path.display()));
            return;
        }
        Err(err) => {
            diag.error(&format!("Unable to read or write file. {err}"));
            return;
        }
    };

    let mut file_lines: Vec<String> = text.lines().map(str::to_string).collect();
    let unit = content.normalized_lines();
    let is_single = unit.len() == 1;

    let found_at = find_window(&file_lines, &unit);
    let modified = match (found_at, should_exist) {
        (Some(index), false) => {
            file_lines.drain(index..index + unit.len());
            true
        }
        (None, true) => {
            file_lines.extend(unit.iter().cloned());
            true
        }
        _ => false,
    };

    let content_type = if is_single { "line" } else { "block of lines" };
    if !modified {
        let state = if should_exist { "already exists in" } else { "is not in" };
        diag.debug(&format!("No changes made. The specified {content_type} {state} the file."));
        return;
    }

    let mut output = file_lines.join("\n");
    output.push('\n');
    if let Err(err) = fs::write(path, output) {
        diag.error(&format!("Unable to read or write file. {err}"));
        return;
    }

    let action = if should_exist { "added to" } else { "removed from" };
    diag.debug(&format!("The specified {content_type} was {action} the file."));
}

/// Index of the first contiguous window equal to `unit`, line by line.
fn find_window(file_lines: &[String], unit: &[String]) -> Option<usize> {
    if unit.is_empty() || file_lines.len() < unit.len() {
        return None;
    }
    (0..=file_lines.len() - unit.len())
        .find(|&i| file_lines[i..i + unit.len()].iter().map(String::as_str).eq(unit.iter().map(String::as_str)))
}
