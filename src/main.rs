use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File the quiz collection is persisted in
    #[arg(short, long, default_value = "quizzes.json")]
    quizzes: PathBuf,

    /// Length of the simulated video clip, in seconds
    #[arg(short, long, default_value_t = 120)]
    duration: u64,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    if let Err(e) = quiz_overlay::player::run(args.quizzes, args.duration).await {
        eprintln!("Error running player: {}", e);
        std::process::exit(1);
    }
}
