use base::{FileLogger, Level, Logger, format_today};
use std::{
    fs,
    sync::{Arc, Mutex},
};

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert_eq!(Level::Warn.to_string(), "WARN");
}

#[test]
fn test_file_logger_creates_directory() {
    let test_dir = std::env::temp_dir().join(format!("base-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let _logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");

    assert!(test_dir.is_dir());
    assert!(test_dir.join(format!("{}.log", format_today())).exists());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_writes_one_line_per_record() {
    let test_dir =
        std::env::temp_dir().join(format!("base-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    logger.log(Level::Info, "capture.rs", 12, "first");
    logger.log(Level::Error, "capture.rs", 34, "second");

    let contents = fs::read_to_string(test_dir.join(format!("{}.log", format_today()))).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("capture.rs:12"));
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].contains("ERROR"));
    assert!(lines[1].ends_with("second"));

    fs::remove_dir_all(&test_dir).ok();
}

struct Collect(Arc<Mutex<Vec<(Level, String)>>>);

impl Logger for Collect {
    fn log(&self, level: Level, _file: &str, _line: usize, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

// the only test in this binary that touches the global logger and level
#[test]
fn test_macros_respect_minimum_level() {
    let records = Arc::new(Mutex::new(Vec::new()));
    base::LOGGER
        .lock()
        .unwrap()
        .replace(Box::new(Collect(Arc::clone(&records))));

    base::set_level(Level::Warn);
    base::log_debug!("hidden {}", 1);
    base::log_info!("hidden {}", 2);
    base::log_warn!("shown {}", 3);
    base::log_error!("shown {}", 4);

    base::set_level(Level::Debug);
    base::log_debug!("shown {}", 5);

    let records = records.lock().unwrap().clone();
    assert_eq!(
        records,
        vec![
            (Level::Warn, "shown 3".to_string()),
            (Level::Error, "shown 4".to_string()),
            (Level::Debug, "shown 5".to_string()),
        ]
    );

    base::LOGGER.lock().unwrap().take();
    base::set_level(Level::Info);
}
