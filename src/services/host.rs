use std::env;
use std::num::NonZero;
use std::thread::available_parallelism;

use nix::sys::sysinfo::sysinfo;
use nix::unistd::{getgid, getuid};

/// Fallback CPU count if detection fails.
const DEFAULT_CPU_COUNT: usize = 1;
/// Fallback total memory (bytes) if detection fails.
const DEFAULT_TOTAL_MEMORY: u64 = 8 * 1024 * 1024 * 1024;

const GIB: f64 = (1024 * 1024 * 1024) as f64;

pub fn cpu_count() -> usize {
    available_parallelism().map(NonZero::get).unwrap_or(DEFAULT_CPU_COUNT)
}

fn total_memory_bytes() -> u64 {
    sysinfo().map(|info| info.ram_total()).unwrap_or(DEFAULT_TOTAL_MEMORY)
}

/// Half of the host CPUs.
pub fn default_cpu_limit() -> f64 {
    cpu_count() as f64 / 2.0
}

/// One sixteenth of the host CPUs.
pub fn default_cpu_reservation() -> f64 {
    cpu_count() as f64 / 16.0
}

/// Half of total memory, as a compose memory string.
pub fn default_memory_limit() -> String {
    format!("{:.2}G", total_memory_bytes() as f64 / GIB / 2.0)
}

/// One sixteenth of total memory, as a compose memory string.
pub fn default_memory_reservation() -> String {
    format!("{:.2}G", total_memory_bytes() as f64 / GIB / 16.0)
}

pub fn user_ids() -> (u32, u32) {
    (u32::from(getuid()), u32::from(getgid()))
}

/// `$XDG_RUNTIME_DIR`, falling back to `/run/user/<uid>` when unset.
pub fn runtime_dir() -> String {
    env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| format!("/run/user/{}", user_ids().0))
}
