//! Interactive read-eval-print session.

use super::handlers::{Assistant, Reply};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Greeting printed when a session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

const INVALID_UTF8: &str = "Error: input is not valid UTF-8";

/// Run a session until `exit`/`close` or end of input.
///
/// Each line read from `input` is handled by `assistant`; replies are written
/// to `output` followed by a newline. `prompt` is written, without a newline,
/// before every read.
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    write_line(&mut output, GREETING).await?;

    loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            tracing::info!("Input closed, ending session");
            // Keep the farewell off the prompt line
            output.write_all(b"\n").await?;
            write_line(&mut output, "Good bye!").await?;
            break;
        }

        let Ok(line) = std::str::from_utf8(trim_line_ending(&buf)) else {
            tracing::warn!(bytes = buf.len(), "Skipping line that is not valid UTF-8");
            write_line(&mut output, INVALID_UTF8).await?;
            continue;
        };

        match assistant.respond(line) {
            Reply::Continue(Some(text)) => write_line(&mut output, &text).await?,
            Reply::Continue(None) => {}
            Reply::Exit(text) => {
                write_line(&mut output, &text).await?;
                break;
            }
        }
    }

    output.flush().await
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn transcript(script: &str, prompt: &str) -> String {
        transcript_bytes(script.as_bytes(), prompt).await
    }

    async fn transcript_bytes(script: &[u8], prompt: &str) -> String {
        let mut assistant = Assistant::new();
        let mut output = Vec::new();
        run_session(
            &mut assistant,
            BufReader::new(script),
            &mut output,
            prompt,
        )
        .await
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_session_greets_and_exits() {
        let out = transcript("hello\nexit\nhello\n", "> ").await;
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n> How can I help you?\n> Good bye!\n"
        );
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let out = transcript("hello", "> ").await;
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n> How can I help you?\n> \nGood bye!\n"
        );
    }

    #[tokio::test]
    async fn test_session_continues_after_error() {
        let out = transcript("add Al\nadd Al 1112223333\nclose\n", "").await;
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to the assistant bot!",
                "Error: Usage: add <name> <phone>",
                "Contact 'Al' added with phone number '1112223333'.",
                "Good bye!",
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_lines_print_nothing() {
        let out = transcript("\n\nexit\n", "").await;
        assert_eq!(out, "Welcome to the assistant bot!\nGood bye!\n");
    }

    #[tokio::test]
    async fn test_session_continues_after_invalid_utf8() {
        let script = b"add Al 1112223333\nadd \xff\xfe 1112223333\nall\nexit\n";
        let out = transcript_bytes(script, "").await;
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to the assistant bot!",
                "Contact 'Al' added with phone number '1112223333'.",
                "Error: input is not valid UTF-8",
                "All contacts:",
                "Contact name: Al, phones: 1112223333",
                "Good bye!",
            ]
        );
    }

    #[tokio::test]
    async fn test_session_accepts_crlf_lines() {
        let out = transcript("hello\r\nexit\r\n", "").await;
        assert_eq!(out, "Welcome to the assistant bot!\nHow can I help you?\nGood bye!\n");
    }
}
