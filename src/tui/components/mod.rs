//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing source and status
//! - `QuestionPanel`: Current topic and question
//! - `Countdown`: Remaining time as `M:SS`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Sidebar`: Questions in the current topic, with a keyboard cursor and
//!   mouse hit testing
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! QuestionPanel::new(view.current_topic, question).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! QuestionPanel::render(frame, area); // reads from global App
//! ```

mod countdown;
mod question_panel;
pub mod sidebar;
mod title_bar;

pub use countdown::Countdown;
pub use question_panel::QuestionPanel;
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use title_bar::TitleBar;
