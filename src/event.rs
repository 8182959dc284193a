#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    AssistantReply(String),
}
