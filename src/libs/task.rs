use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Upper bound on rows returned by a single search.
pub const SEARCH_LIMIT: usize = 20;

/// Input format of date-mode search queries.
pub const QUERY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Storage format of the `date` column.
pub const TASK_DATE_FORMAT: &str = "%Y%m%d";

static DATE_QUERY: OnceLock<Regex> = OnceLock::new();

/// A scheduled task as stored in the `scheduler` table.
///
/// `repeat` is an opaque recurrence descriptor; the store never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(with = "id_string")]
    pub id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    pub fn new(id: i64, date: &str, title: &str, comment: &str, repeat: &str) -> Self {
        Task {
            id,
            date: date.to_string(),
            title: title.to_string(),
            comment: comment.to_string(),
            repeat: repeat.to_string(),
        }
    }
}

/// How a search query is matched against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Exact match on `date`, already in `YYYYMMDD` form.
    Date(String),
    /// Substring match over `title` and `comment`.
    Text(String),
}

impl TaskFilter {
    /// Picks the search mode for a raw query.
    ///
    /// Queries shaped like `DD.MM.YYYY` must also be real calendar dates;
    /// `31.02.2024` is rejected rather than falling back to text mode.
    pub fn parse(query: &str) -> Result<Self, chrono::ParseError> {
        if !date_query().is_match(query) {
            return Ok(TaskFilter::Text(query.to_string()));
        }

        let date = NaiveDate::parse_from_str(query, QUERY_DATE_FORMAT)?;
        Ok(TaskFilter::Date(date.format(TASK_DATE_FORMAT).to_string()))
    }
}

fn date_query() -> &'static Regex {
    DATE_QUERY.get_or_init(|| Regex::new(r"^([0-2][0-9]|3[01])\.(0[1-9]|1[0-2])\.[0-9]{4}$").expect("date query pattern is valid"))
}

/// Wraps a text query in `%` wildcards, escaping LIKE metacharacters with `\`.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Ids travel as strings on the wire but are integers in the table.
mod id_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(id),
            RawId::Text(id) => id.trim().parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_shaped_query_becomes_date_filter() {
        assert_eq!(TaskFilter::parse("15.03.2024").unwrap(), TaskFilter::Date("20240315".to_string()));
        assert_eq!(TaskFilter::parse("01.12.1999").unwrap(), TaskFilter::Date("19991201".to_string()));
    }

    #[test]
    fn other_queries_become_text_filter() {
        for query in ["", "Pay bills", "15.3.2024", "2024-03-15", "15.03.24", "15.13.2024", "32.01.2024", " 15.03.2024"] {
            assert_eq!(TaskFilter::parse(query).unwrap(), TaskFilter::Text(query.to_string()), "query {:?}", query);
        }
    }

    #[test]
    fn impossible_calendar_dates_are_errors() {
        assert!(TaskFilter::parse("31.02.2024").is_err());
        assert!(TaskFilter::parse("00.01.2024").is_err());
        assert!(TaskFilter::parse("29.02.2024").is_ok());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("bills"), "%bills%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn task_json_uses_string_id() {
        let task = Task::new(7, "20240101", "Pay bills", "", "d 7");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["repeat"], "d 7");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn task_json_accepts_numeric_id_and_missing_optionals() {
        let task: Task = serde_json::from_str(r#"{"id": 3, "date": "20240101", "title": "Call mom"}"#).unwrap();
        assert_eq!(task, Task::new(3, "20240101", "Call mom", "", ""));
    }
}
