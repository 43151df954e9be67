//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `userbook_core` linkage and store bootstrap without a UI host.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use userbook_core::db::{migrations::latest_version, open_db_in_memory};
use userbook_core::{SqliteUserRepository, UserService};

fn main() -> ExitCode {
    println!("userbook_core ping={}", userbook_core::ping());
    println!("userbook_core version={}", userbook_core::core_version());
    println!("userbook_core schema_version={}", latest_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("userbook_core store=error error={err}");
            return ExitCode::FAILURE;
        }
    };
    let service = UserService::new(SqliteUserRepository::new(&conn));
    match service.list_users() {
        Ok(users) => {
            println!("userbook_core store=ok users={}", users.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("userbook_core store=error error={err}");
            ExitCode::FAILURE
        }
    }
}
