//! Dependency bootstrap.
//!
//! - [`runner`] - The [`Bootstrapper`] and its run options
//! - [`host`] - The [`Host`] trait and the real [`SystemHost`]
//! - [`fake`] - A scripted [`FakeHost`] for tests
//! - [`report`] - Phases and per-step records
//!
//! # Example
//!
//! ```
//! use align_bootstrap::bootstrap::{Bootstrapper, FakeHost, RunOptions};
//! use align_bootstrap::config::BootstrapConfig;
//! use align_bootstrap::ui::MockUI;
//!
//! let config = BootstrapConfig::default();
//! let mut host = FakeHost::new().with_executable("brew");
//! let mut ui = MockUI::new();
//!
//! let report = Bootstrapper::new(&config, RunOptions::default())
//!     .run(&mut host, &mut ui)
//!     .unwrap();
//! assert_eq!(report.installs.len(), 4);
//! assert!(ui.has_output("Installation complete!"));
//! ```

pub mod fake;
pub mod host;
pub mod report;
pub mod runner;

pub use fake::FakeHost;
pub use host::{Host, SystemHost};
pub use report::{extract_version, BootstrapReport, Phase, ProbeReport, StepOutcome};
pub use runner::{Bootstrapper, RunOptions};
