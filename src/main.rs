use clap::Parser;
use std::io::BufRead;

use chatfs::{Attachment, BlobRef, FileManager, Inbound, ManagerOptions, Reply};

#[derive(Parser)]
#[command(name = "chatfs")]
#[command(about = "A per-user simulated file system with a chat-style command surface")]
#[command(version)]
struct Cli {
    /// Handle a single event from the command line and exit
    #[arg(short = 'c')]
    event: Option<String>,

    /// User identity to attribute events to
    #[arg(long = "user", default_value = "local")]
    user: String,

    /// Output replies as JSON (kind, text, forward)
    #[arg(long = "json")]
    json: bool,
}

/// Parse one transport event. Slash lines are commands; `upload <name>
/// <blob-ref>` simulates a document arriving (a bare `upload` simulates a
/// message with no usable document).
fn parse_event(line: &str) -> Option<Inbound> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next()?;

    if let Some(verb) = head.strip_prefix('/') {
        return Some(Inbound::Command {
            verb: verb.to_string(),
            args: tokens.map(str::to_string).collect(),
        });
    }

    if head == "upload" {
        let attachment = match (tokens.next(), tokens.next()) {
            (Some(file_name), Some(blob)) => Some(Attachment {
                file_name: file_name.to_string(),
                blob: BlobRef::from(blob),
            }),
            _ => None,
        };
        return Some(Inbound::Upload { attachment });
    }

    None
}

fn print_reply(reply: &Reply, json: bool) {
    if json {
        match serde_json::to_string(reply) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("chatfs: cannot serialize reply: {}", e),
        }
        return;
    }
    println!("{}", reply.text);
    for blob in &reply.forward {
        println!("[forwarding {}]", blob);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manager = FileManager::new(ManagerOptions::default());

    if let Some(line) = cli.event {
        let Some(event) = parse_event(&line) else {
            eprintln!("chatfs: commands start with '/'; try -c '/help'");
            std::process::exit(2);
        };
        let reply = manager.execute(&cli.user, event).await;
        print_reply(&reply, cli.json);
        std::process::exit(if reply.is_success() { 0 } else { 1 });
    }

    // One event per stdin line, standing in for the chat transport.
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("chatfs: stdin error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(&line) {
            Some(event) => {
                let reply = manager.execute(&cli.user, event).await;
                print_reply(&reply, cli.json);
            }
            None => println!("Commands start with '/'; try /help."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_event() {
        match parse_event("/mkdir docs") {
            Some(Inbound::Command { verb, args }) => {
                assert_eq!(verb, "mkdir");
                assert_eq!(args, vec!["docs"]);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_parse_upload_event() {
        match parse_event("upload report.pdf B1") {
            Some(Inbound::Upload { attachment: Some(att) }) => {
                assert_eq!(att.file_name, "report.pdf");
                assert_eq!(att.blob, BlobRef::from("B1"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_upload_has_no_attachment() {
        match parse_event("upload") {
            Some(Inbound::Upload { attachment: None }) => {}
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert!(parse_event("hello there").is_none());
        assert!(parse_event("").is_none());
    }
}
