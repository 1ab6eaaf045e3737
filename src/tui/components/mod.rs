// UI components
//
// Each component renders one region of the screen. The two panels
// (prompt, results) own their state and implement the trait contracts in
// `tui::traits`; the chrome (title bar, status bar, toast, help) renders
// from App state directly.

pub mod help;
pub mod prompt_panel;
pub mod results_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
