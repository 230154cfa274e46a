/// Timestamp format shown next to every task: day/month/year hour:minute.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub date: String,
}

/// Current local time formatted for display and storage.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
