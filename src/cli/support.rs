use std::io::{self, BufRead, Write};
use std::time::Duration;

use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    api::Api,
    info,
    types::{ChatMessage, Sender},
};

const GREETING: &str = "Oracle System Online. Awaiting query.";

/// Support chat against the oracle.
///
/// With a message argument this is a one-shot exchange. Without one it
/// opens an interactive session whose transcript lives only as long as the
/// session itself ("exit" or EOF ends it).
pub async fn support(api: &Api, message: Option<String>) {
    match message {
        Some(text) => {
            let reply = ask(api, &text).await;
            print_message(&agent_message(reply));
        }
        None => interactive_session(api).await,
    }
}

async fn interactive_session(api: &Api) {
    let mut transcript: Vec<ChatMessage> = vec![agent_message(GREETING.to_string())];
    print_message(&transcript[0]);
    info!("Type your question, or 'exit' to leave.");

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".bold());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        transcript.push(user_message(input.to_string()));
        let reply = ask(api, input).await;
        let agent = agent_message(reply);
        print_message(&agent);
        transcript.push(agent);
    }

    info!("Session closed ({} messages).", transcript.len());
}

async fn ask(api: &Api, text: &str) -> String {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Oracle is thinking...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let reply = api.chat(text).await;
    pb.finish_and_clear();
    reply
}

fn user_message(text: String) -> ChatMessage {
    ChatMessage {
        id: Utc::now().timestamp_millis().to_string(),
        sender: Sender::User,
        text,
        timestamp: Utc::now(),
    }
}

fn agent_message(text: String) -> ChatMessage {
    ChatMessage {
        // +1 keeps agent ids distinct from the user message minted in the
        // same millisecond
        id: (Utc::now().timestamp_millis() + 1).to_string(),
        sender: Sender::Agent,
        text,
        timestamp: Utc::now(),
    }
}

fn print_message(message: &ChatMessage) {
    let label = match message.sender {
        Sender::User => "you".cyan().bold(),
        Sender::Agent => "oracle".yellow().bold(),
    };
    println!(
        "[{}] {} {}",
        message.timestamp.format("%H:%M"),
        label,
        message.text
    );
}
