//=========================================================================
// Example Harness: Library Root
//
// Platform glue for audio SDK example programs.
//
// Responsibilities:
// - Expose the harness entry point (`Harness`, `HarnessBuilder`)
// - Expose the worker-facing callback surface (`ExampleContext`)
// - Keep the winit platform layer hidden from example code
//
// Input is keyboard-first. The window draws nothing: display frames are
// logged at `info` under the `display` target and their first readable line
// is shown in the title bar. The 3×3 touch pad is hit-tested at the bottom
// of the window but not rendered, so taps only work if you know the layout.
//
// Typical usage:
// ```no_run
// use example_harness::prelude::*;
//
// fn main() -> Result<(), HarnessError> {
//     let code = HarnessBuilder::new().build().run(|mut ctx| {
//         loop {
//             ctx.update();
//             if ctx.btn_press(Button::Quit) {
//                 return 0;
//             }
//             ctx.draw_text("Press Esc to quit");
//             ctx.sleep(50);
//         }
//     })?;
//     std::process::exit(code);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent services: input translation, the
// text panel buffer, resource loading, and the worker/UI contract.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and event loop (winit). `harness` wires the
// platform and the example worker together.
//
mod harness;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use harness::{Harness, HarnessBuilder};
