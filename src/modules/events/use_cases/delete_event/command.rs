#[derive(Debug, Clone, Default)]
pub struct DeleteEvent {
    pub id: Option<String>,
}
