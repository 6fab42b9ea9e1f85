use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;

use acadex_types::{ChatMessage, ChatTranscript, KNOWN_MODELS};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

pub async fn ask(
    exec: &ExecutionContext,
    prompt: Vec<String>,
    model: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let model = match model {
        Some(model) => model,
        None => exec.default_model()?,
    };
    let prompt = prompt.join(" ");
    let messages = [ChatMessage::user(prompt.clone())];
    let reply = client.ai().chat(&model, &messages).await.map_err(describe)?;
    ctx.render(presenters::present_ask(&model, &prompt, &reply))
}

/// Line-based REPL against the assistant relay. The whole conversation is
/// resent on every turn, so the assistant sees its own earlier answers.
pub async fn chat(exec: &ExecutionContext, model: Option<String>) -> Result<()> {
    let client = exec.client()?;
    let mut model = match model {
        Some(model) => model,
        None => exec.default_model()?,
    };

    let id = uuid::Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let mut messages: Vec<ChatMessage> = Vec::new();

    println!(
        "{}",
        "Chatting with the study assistant. /new starts over, /model <NAME> switches, /quit leaves."
            .dimmed()
    );
    println!("{} {}", "Model:".bold(), model);

    let stdin = io::stdin();
    loop {
        print!("{} ", "you ›".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/new" => {
                messages.clear();
                println!("{}", "Started a fresh conversation.".dimmed());
                continue;
            }
            "/model" => {
                println!("{} {}", "Model:".bold(), model);
                println!("{} {}", "Known:".dimmed(), KNOWN_MODELS.join(", "));
                continue;
            }
            _ => {}
        }
        if let Some(name) = line.strip_prefix("/model ") {
            model = name.trim().to_string();
            println!("Switched to {}", model);
            continue;
        }

        messages.push(ChatMessage::user(line));
        match client.ai().chat(&model, &messages).await {
            Ok(reply) => {
                let reply = reply.trim().to_string();
                println!("{} {}", "assistant ›".green().bold(), reply);
                messages.push(ChatMessage::assistant(reply));
            }
            Err(err) => {
                // Drop the unanswered question so it can be re-sent as-is.
                messages.pop();
                eprintln!("{} {}", "error:".red().bold(), describe(err));
            }
        }
        println!();
    }

    if !messages.is_empty() {
        let transcript = ChatTranscript {
            id,
            model,
            started_at,
            messages,
        };
        let path = save_transcript(exec.data_dir(), &transcript)?;
        println!("{} {}", "Transcript saved to".dimmed(), path.display());
    }
    Ok(())
}

fn save_transcript(data_dir: &Path, transcript: &ChatTranscript) -> Result<PathBuf> {
    let dir = data_dir.join("chats");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.json", transcript.id));
    std::fs::write(&path, serde_json::to_vec_pretty(transcript)?)?;
    Ok(path)
}
