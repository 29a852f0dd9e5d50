// App module for tempgrid
// Handles application state and interaction logic

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen, TooltipState};
