//! # pidkit
//!
//! A Rust library for inspecting, terminating and restarting native OS
//! processes by PID. Built for supervisors, launchers and diagnostic tools
//! that need to look at or act on processes they did not necessarily spawn.
//!
//! ## Features
//!
//! - **Command-line inspection**: Resolve the executable path and argument
//!   vector of a live process from its PID
//! - **Liveness checks**: Point-in-time existence queries without delivering
//!   a signal
//! - **Soft and forcible termination**: SIGTERM/SIGKILL on Unix,
//!   `TerminateProcess` on Windows, with a fast path for locally spawned
//!   children
//! - **Restart**: Re-spawn a process from its resolved command line
//! - **Serialization**: Optional serde support for process snapshots
//!
//! Supported platforms: Linux, Solaris/illumos, macOS, FreeBSD, Windows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::process::Command;
//! use pidkit::process::handle::ProcessHandle;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let child = Command::new("sleep").arg("60").spawn()?;
//!     let mut handle = ProcessHandle::from_child(child);
//!
//!     assert!(handle.is_alive());
//!
//!     // Snapshot of the command line, resolved from the OS.
//!     let info = handle.info()?;
//!     println!("running: {:?} {:?}", info.executable, info.arguments);
//!
//!     handle.kill_forcibly()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Inspecting an arbitrary PID
//!
//! ```rust,no_run
//! use pidkit::process::handle::ProcessHandle;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handle = ProcessHandle::of(1234)?;
//!     if handle.is_alive() {
//!         let info = handle.info()?;
//!         println!("{}", info);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! Every query is a point-in-time snapshot. A process may exit, be reaped, or
//! have its PID reused between two calls; the library does not attempt to
//! close that race. All calls are synchronous and block on the caller's
//! thread.
//!
//! ## Optional Features
//!
//! - `serde`: Enable serialization support for process snapshots
//! - `tracing`: Enable structured logging integration

pub mod process;
