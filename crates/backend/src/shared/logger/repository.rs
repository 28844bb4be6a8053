use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use contracts::shared::logger::LogEntry;
use once_cell::sync::Lazy;

/// Сколько последних записей хранится в памяти
const MAX_ENTRIES: usize = 500;

static LOGS: Lazy<Mutex<LogRing>> = Lazy::new(|| Mutex::new(LogRing::new(MAX_ENTRIES)));

/// Кольцевой журнал событий: старые записи вытесняются новыми
#[derive(Debug)]
pub struct LogRing {
    capacity: usize,
    next_id: i64,
    entries: VecDeque<LogEntry>,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: 1,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, source: &str, category: &str, message: &str) -> LogEntry {
        let entry = LogEntry {
            id: self.next_id,
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            source: source.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        };
        self.next_id += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.clone());
        entry
    }

    /// Записи, новые сверху
    pub fn newest_first(&self) -> Vec<LogEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Добавить запись в лог и продублировать ее в tracing
pub fn log_event(source: &str, category: &str, message: &str) -> LogEntry {
    tracing::info!(target: "app_log", source, category, "{}", message);
    let mut logs = LOGS.lock().unwrap_or_else(|e| e.into_inner());
    logs.push(source, category, message)
}

/// Получить все записи лога (новые сверху)
pub fn get_all_logs() -> Vec<LogEntry> {
    let logs = LOGS.lock().unwrap_or_else(|e| e.into_inner());
    logs.newest_first()
}

/// Очистить все записи лога
pub fn clear_all_logs() {
    let mut logs = LOGS.lock().unwrap_or_else(|e| e.into_inner());
    logs.clear();
}
