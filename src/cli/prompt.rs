use std::io::Write;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

/// Reads one query per line until end of input.
pub struct Prompt<R> {
    label: String,
    lines: Lines<BufReader<R>>,
}

impl Prompt<Stdin> {
    pub fn stdin(label: &str) -> Self {
        Self::new(tokio::io::stdin(), label)
    }
}

impl<R> Prompt<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R, label: &str) -> Self {
        Self {
            label: label.to_string(),
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Next submitted line, blank lines included. `None` on EOF or read error.
    pub async fn next_query(&mut self) -> Option<String> {
        print!("{}", self.label);
        let _ = std::io::stdout().flush();

        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Cannot read input: {}", e);
                None
            }
        }
    }
}
