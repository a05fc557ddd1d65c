use anyhow::Context;
use brevity_model::{
    InferenceClient, LengthCategory, QuestionAnswerer, Summarizer, DEFAULT_INFERENCE_URL,
    DEFAULT_QA_MODEL, DEFAULT_SUMMARIZATION_MODEL,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::time::Duration;

mod demo;
mod prompts;

use demo::{run_demo_prompt, PromptResult};
use prompts::DEMO_PROMPTS;

#[derive(Parser)]
#[command(name = "brevity-cli")]
#[command(about = "Summarize text and ask questions about the summaries")]
#[command(version)]
struct Cli {
    /// Inference API base URL
    #[arg(long, env = "INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    inference_url: String,

    /// Inference API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Summarization model id
    #[arg(long, env = "SUMMARIZATION_MODEL", default_value = DEFAULT_SUMMARIZATION_MODEL)]
    summarization_model: String,

    /// Question-answering model id
    #[arg(long, env = "QA_MODEL", default_value = DEFAULT_QA_MODEL)]
    qa_model: String,

    /// Per-call time limit, in seconds
    #[arg(long, env = "MODEL_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in passages through summarization and question answering
    Demo,
    /// Summarize a single text
    Summarize {
        /// Summary length
        #[arg(long, short, value_enum, default_value = "medium")]
        length: LengthArg,
        /// Text to summarize
        text: String,
    },
    /// Answer a question from a context passage
    Ask {
        /// Passage to search for the answer
        #[arg(long, short)]
        context: String,
        /// Question to ask
        question: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for LengthCategory {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => LengthCategory::Short,
            LengthArg::Medium => LengthCategory::Medium,
            LengthArg::Long => LengthCategory::Long,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!(
            "{}",
            format!("[DEBUG] Inference URL: {}", cli.inference_url).dimmed()
        );
    }

    let mut client = InferenceClient::new(&cli.inference_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(token) = cli.api_token.clone() {
        client = client.with_api_token(token);
    }

    let summarizer = client
        .for_model(&cli.summarization_model)
        .context("Invalid summarization model")?;
    let answerer = client
        .for_model(&cli.qa_model)
        .context("Invalid question-answering model")?;

    match cli.command {
        Commands::Demo => {
            for (i, prompt) in DEMO_PROMPTS.iter().enumerate() {
                println!("\n{}", format!("--- Test {} ---", i + 1).bold());
                match run_demo_prompt(&summarizer, &answerer, prompt).await {
                    Ok(result) => print_result(&result),
                    Err(e) => eprintln!("{} {}", "Summarization failed:".red(), e),
                }
            }
        }
        Commands::Summarize { length, text } => {
            let summary = summarizer
                .summarize(&text, LengthCategory::from(length).bounds())
                .await
                .context("Summarization failed")?;
            println!("{}", summary);
        }
        Commands::Ask { context, question } => {
            let answer = answerer
                .answer(&question, &context)
                .await
                .context("Question answering failed")?;
            println!("{}", answer.answer);
            if cli.debug {
                eprintln!(
                    "{}",
                    format!("[DEBUG] score={:.3} span={}..{}", answer.score, answer.start, answer.end)
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}

fn print_result(result: &PromptResult) {
    println!("\n{}", "Generated Summary:".green().bold());
    println!("{}", result.summary);

    for item in &result.questions {
        println!("\n{} {}", "Question:".cyan().bold(), item.question);
        match &item.answer {
            Ok(answer) => println!("{} {}", "Answer:".cyan().bold(), answer.answer),
            Err(e) => println!("{} {}", "Answer failed:".red(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_arg_maps_to_category() {
        assert_eq!(LengthCategory::from(LengthArg::Short), LengthCategory::Short);
        assert_eq!(LengthCategory::from(LengthArg::Medium), LengthCategory::Medium);
        assert_eq!(LengthCategory::from(LengthArg::Long), LengthCategory::Long);
    }

    #[test]
    fn cli_parses_summarize_command() {
        let cli = Cli::try_parse_from(["brevity-cli", "summarize", "--length", "short", "Some text"])
            .unwrap();
        match cli.command {
            Commands::Summarize { length, text } => {
                assert!(matches!(length, LengthArg::Short));
                assert_eq!(text, "Some text");
            }
            _ => panic!("expected summarize command"),
        }
    }
}
