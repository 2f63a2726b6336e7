//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: title icon, title and subtitle of the selected category
//! - `CategoryTabs`: one tab per registered category
//! - `Skeleton`: placeholder rows while sources load
//! - `StatusBar`: fetch status, last route, key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `RankingList`: ranked rows with a cursor; emits `RankingEvent::Activate`
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//! The view decides *what* to show (list, skeleton or error); components only
//! decide *how*.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs
//! ├── category_tabs.rs
//! ├── ranking_list.rs
//! ├── skeleton.rs
//! └── status_bar.rs
//! ```

pub mod category_tabs;
pub mod header;
pub mod ranking_list;
pub mod skeleton;
pub mod status_bar;

pub use category_tabs::CategoryTabs;
pub use header::Header;
pub use ranking_list::{RankingEvent, RankingList, RankingListState};
pub use skeleton::Skeleton;
pub use status_bar::StatusBar;

/// Flattens a test buffer into one string of cell symbols.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
