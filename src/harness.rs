//=========================================================================
// Example Harness
//
// Main entry point: configures the harness, starts the example worker and
// runs the platform on the calling thread.
//
// Architecture:
// ```text
//     HarnessBuilder  ──build()──>  Harness  ──run(entry)──>  [Runtime]
//         │                           │
//         ├─ with_title()             ├─ spawns "example-main" worker
//         ├─ with_install_dir()       ├─ runs platform (blocks)
//         ├─ with_temp_dir()          └─ joins worker, returns its code
//         ├─ with_display_rows()
//         └─ with_channel_capacity()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::input::{Button, InputTranslator};
use crate::core::platform_bridge::{UiEvent, UiLink};
use crate::core::resources::ResourceLocator;
use crate::core::{ExampleContext, HarnessError};
use crate::platform::{Platform, PlatformConfig};

//=== HarnessBuilder ======================================================

/// Builder for configuring and constructing a [`Harness`].
///
/// # Default Values
///
/// - **Title**: `"Example"`
/// - **Install dir**: directory of the running executable
/// - **Temp dir**: `std::env::temp_dir()`
/// - **Display rows**: 25
/// - **Channel capacity**: 128 UI events
///
/// # Examples
///
/// ```no_run
/// use example_harness::prelude::*;
///
/// let code = HarnessBuilder::new()
///     .with_title("Play Sound")
///     .build()
///     .run(|mut ctx| {
///         loop {
///             ctx.update();
///             if ctx.btn_press(Button::Quit) {
///                 break;
///             }
///             ctx.draw_text("Press Esc to quit");
///             ctx.sleep(50);
///         }
///         0
///     })
///     .expect("harness failed");
/// # let _ = code;
/// ```
pub struct HarnessBuilder {
    title: String,
    install_dir: Option<PathBuf>,
    temp_dir: Option<PathBuf>,
    display_rows: usize,
    channel_capacity: usize,
}

impl HarnessBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Example".to_string(),
            install_dir: None,
            temp_dir: None,
            display_rows: 25,
            channel_capacity: 128,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the directory packaged (`ms-appx://`) resources resolve against.
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    /// Sets the directory `write_path()` points into.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Sets how many text lines the panel keeps per frame.
    ///
    /// Default: 25
    ///
    /// # Panics
    ///
    /// Panics if `rows == 0`.
    pub fn with_display_rows(mut self, rows: usize) -> Self {
        assert!(rows > 0, "Display rows must be positive");
        self.display_rows = rows;
        self
    }

    /// Sets the capacity of the worker → UI channel.
    ///
    /// Display frames posted while the channel is full are dropped; exit
    /// requests wait for space.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the harness, resolving default directories.
    ///
    /// Installs the logger first so configuration is logged.
    pub fn build(self) -> Harness {
        init_logging();

        let install_dir = self.install_dir.unwrap_or_else(default_install_dir);
        let temp_dir = self.temp_dir.unwrap_or_else(std::env::temp_dir);

        info!(
            target: "harness",
            "Building harness (install: {}, temp: {}, rows: {}, channel: {})",
            install_dir.display(),
            temp_dir.display(),
            self.display_rows,
            self.channel_capacity
        );

        Harness {
            resources: ResourceLocator::new(install_dir, temp_dir),
            platform: PlatformConfig {
                title: self.title,
                display_rows: self.display_rows,
            },
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

//=== Harness =============================================================

/// Example harness runtime.
///
/// # Architecture
///
/// ```text
/// Harness (Main Thread)
///   ├─► Worker ("example-main")
///   │     └─► entry(ExampleContext) → exit code
///   │
///   └─► Platform (Event Loop)
///         └─► Window, key/tap input, text panel
///
/// Input:   Platform → Arc<InputTranslator> → Worker
/// Display: Worker → crossbeam channel (UiEvent) → Platform
/// ```
pub struct Harness {
    resources: ResourceLocator,
    platform: PlatformConfig,
    channel_capacity: usize,
}

impl Harness {
    /// Runs `entry` on a worker thread and the platform on this thread.
    ///
    /// Blocks until the event loop ends and the worker returns. Closing the
    /// window records a one-shot [`Button::Quit`]; entry points are expected
    /// to return once they observe it.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::WorkerSpawn`] if the worker cannot be started
    /// - [`HarnessError::Platform`] if the event loop fails
    /// - [`HarnessError::WorkerPanicked`] if `entry` panics
    pub fn run<F>(self, entry: F) -> Result<i32, HarnessError>
    where
        F: FnOnce(ExampleContext) -> i32 + Send + 'static,
    {
        init_logging();
        info!(target: "harness", "Starting harness runtime");

        //--- 1. Shared state and worker → UI channel ---------------------
        let input = Arc::new(InputTranslator::new());
        let (tx, rx) = bounded(self.channel_capacity);
        let ctx = ExampleContext::new(Arc::clone(&input), self.resources, UiLink::new(tx));

        //--- 2. Spawn the example worker ---------------------------------
        let worker = spawn_worker(ctx, entry)?;
        info!(target: "harness", "Example worker spawned");

        //--- 3. Run the platform until close or worker exit --------------
        let platform = Platform::new(Arc::clone(&input), rx, self.platform);
        let platform_result = platform.run();

        if let Err(e) = &platform_result {
            error!(target: "harness", "Platform error: {}", e);
            input.record_touch(Button::Quit);
        }

        //--- 4. Wait for the worker --------------------------------------
        let code = join_worker(worker)?;
        let reported = platform_result?;

        info!(
            target: "harness",
            "Harness shutdown complete (worker: {}, reported: {:?})",
            code,
            reported
        );
        Ok(code)
    }
}

//=== Worker ==============================================================

fn spawn_worker<F>(ctx: ExampleContext, entry: F) -> Result<JoinHandle<i32>, HarnessError>
where
    F: FnOnce(ExampleContext) -> i32 + Send + 'static,
{
    let link = ctx.ui_link();

    thread::Builder::new()
        .name("example-main".to_string())
        .spawn(move || {
            let code = entry(ctx);
            link.send_control(UiEvent::WorkerFinished(code));
            code
        })
        .map_err(HarnessError::WorkerSpawn)
}

fn join_worker(worker: JoinHandle<i32>) -> Result<i32, HarnessError> {
    match worker.join() {
        Ok(code) => {
            info!(target: "harness", "Example worker returned {}", code);
            Ok(code)
        }
        Err(_) => {
            error!(target: "harness", "Example worker panicked");
            Err(HarnessError::WorkerPanicked)
        }
    }
}

//=== Logging =============================================================

/// Installs `env_logger` (default filter `info`). Later calls are no-ops.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

//=========================================================================
// Unit Tests
//=========================================================================
