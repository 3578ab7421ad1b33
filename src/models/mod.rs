// ABOUTME: Data models shared between the TUI, CLI, and API layers

pub mod company;

pub use company::Company;
