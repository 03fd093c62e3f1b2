//! Interactive terminal interface: a query input, the programme card list
//! with its incremental "load more" window, and the resources tab.

mod components;
mod input;
mod render;
mod runtime;
mod state;

pub use input::QueryInput;
pub use runtime::run;
pub use state::{App, DatasetUpdate, Tab};
