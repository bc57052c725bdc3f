use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

/// Append-only transcript of prompts and replies, mirrored to stdout.
pub struct FileLogger {
    file: Mutex<std::fs::File>,
}

impl FileLogger {
    pub fn new(path: &str) -> Result<Self, std::io::Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    pub fn log(&self, action: &str, details: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}] {}\n", timestamp, action, details);

        // Mirror to stdout for Docker logs
        print!("{}", line);

        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn log_prompt(&self, role: &str, prompt: &str) {
        self.log("PROMPT", &format!("[{}] {}", role, prompt));
    }

    pub fn log_reply(&self, reply: &str) {
        // Replies can be multi-line; keep the transcript one line per event.
        self.log("REPLY", &reply.replace('\n', " / "));
    }

    pub fn log_rejected(&self, reason: &str) {
        self.log("REJECTED", reason);
    }

    pub fn log_error(&self, error: &str) {
        self.log("ERROR", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.log");
        let logger = FileLogger::new(path.to_str().unwrap()).unwrap();

        logger.log_prompt("Poet", "The lake is still.");
        logger.log_reply("line one\nline two");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[PROMPT]"));
        assert!(lines[0].contains("The lake is still."));
        assert!(lines[1].contains("[REPLY]"));
        assert!(lines[1].contains("line one / line two"));
    }
}
