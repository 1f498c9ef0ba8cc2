// Global state management
// Stores hold the page state the components render

pub mod links;
