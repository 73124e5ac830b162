use clap::Parser;

#[derive(Parser)]
#[command(name = "ytgist", about = "Summarize YouTube videos with Gemini", version)]
pub struct Cli {
    /// YouTube video URL (reads URLs from stdin if omitted)
    pub url: Option<String>,

    /// Preferred caption language, highest priority first (repeatable)
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Gemini model for summarization
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the full transcript after the summary
    #[arg(short = 't', long)]
    pub show_transcript: bool,

    /// Show pipeline metadata on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
