//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `schoolmap_core` linkage.
//! - Initialize the default store and print its records for quick local
//!   sanity checks.

use schoolmap_core::{CancellationToken, LocationStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_dir = std::env::temp_dir().join("schoolmap-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = schoolmap_core::init_logging(schoolmap_core::default_log_level(), dir) {
            eprintln!("schoolmap: logging disabled: {err}");
        }
    }

    let store = LocationStore::open_default();
    let cancel = CancellationToken::new();

    println!("schoolmap_core version={}", schoolmap_core::core_version());
    println!("db={}", store.db_path().display());

    if let Err(err) = store.initialize(&cancel) {
        eprintln!("schoolmap: initialize failed: {err}");
        return ExitCode::FAILURE;
    }

    match store.get_all(&cancel) {
        Ok(schools) => {
            for school in &schools {
                println!(
                    "{}\t{:.6}\t{:.6}\t{}\t{}",
                    school.name,
                    school.latitude,
                    school.longitude,
                    school.city.as_deref().unwrap_or("-"),
                    school.state.as_deref().unwrap_or("-"),
                );
            }
            println!("total={}", schools.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("schoolmap: get_all failed: {err}");
            ExitCode::FAILURE
        }
    }
}
