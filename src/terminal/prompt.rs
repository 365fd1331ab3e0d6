//! Terminal confirmation and notifications

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::controller::{Notice, NoticeKind, UserPrompt};

/// Interpret a typed answer; only `y`/`yes` confirm
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Single-line rendering of a notice
pub fn notice_line(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✓ {}", notice.message),
        NoticeKind::Error => format!("✗ {}", notice.message),
    }
}

/// How confirmations are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Ask on stdin
    Interactive,
    /// Answer yes without asking
    AssumeYes,
}

/// Prompt bound to the process's stdin/stdout/stderr
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    mode: ConfirmMode,
}

impl TerminalPrompt {
    pub fn interactive() -> Self {
        Self {
            mode: ConfirmMode::Interactive,
        }
    }

    pub fn assume_yes() -> Self {
        Self {
            mode: ConfirmMode::AssumeYes,
        }
    }

    pub fn mode(&self) -> ConfirmMode {
        self.mode
    }

    async fn ask(question: &str) -> std::io::Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("{} [y/N] ", question).as_bytes()).await?;
        stdout.flush().await?;

        let mut answer = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut answer).await?;
        Ok(answer)
    }
}

#[async_trait]
impl UserPrompt for TerminalPrompt {
    async fn confirm(&self, question: &str) -> bool {
        if self.mode == ConfirmMode::AssumeYes {
            tracing::debug!(question, "Confirmation assumed");
            return true;
        }

        match Self::ask(question).await {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation, treating as declined");
                false
            }
        }
    }

    async fn notify(&self, notice: Notice) {
        let line = notice_line(&notice);
        if notice.is_error() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  yes  "));

        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_notice_line() {
        assert_eq!(
            notice_line(&Notice::success("Expense added successfully!")),
            "✓ Expense added successfully!"
        );
        assert_eq!(notice_line(&Notice::error("Failed to add expense")), "✗ Failed to add expense");
    }

    #[tokio::test]
    async fn test_assume_yes_confirms_without_input() {
        let prompt = TerminalPrompt::assume_yes();
        assert_eq!(prompt.mode(), ConfirmMode::AssumeYes);
        assert!(prompt.confirm("Delete?").await);
    }
}
