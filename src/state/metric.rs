/// A headline number shown in a dashboard metric tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub delta: String,
    pub note: Option<String>,
}

impl MetricCard {
    pub fn new(title: &str, value: &str, delta: &str) -> Self {
        Self { title: title.to_owned(), value: value.to_owned(), delta: delta.to_owned(), note: None }
    }

    #[must_use]
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_owned());
        self
    }
}
