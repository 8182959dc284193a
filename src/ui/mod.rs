pub mod chat_input;
pub mod dashboard;
pub mod samples;
pub mod sidebar;

/// A change a view asks the controller to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    PatientChanged(String),
    ModeChanged(bool),
    SendMessage(String),
}
