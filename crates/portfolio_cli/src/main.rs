//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use portfolio_core::{MemoryStore, ProjectRepository, SystemClock};

fn main() {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());

    // Seed an ephemeral store to confirm the repository wiring end to end.
    let store = MemoryStore::new();
    match ProjectRepository::load(&store, SystemClock) {
        Ok(repo) => {
            for project in repo.list() {
                println!("project id={} title={}", project.id, project.title);
            }
        }
        Err(err) => {
            eprintln!("failed to load project repository: {err}");
            std::process::exit(1);
        }
    }
}
