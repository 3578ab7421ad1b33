// ABOUTME: UI components for the TUI interface including the company roster,
// Monday.com wizard modal, and help overlay

pub mod company_table;
pub mod help;
pub mod layout;
pub mod wizard_modal;

pub use company_table::CompanyTableComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use wizard_modal::MondayWizardComponent;
