use std::{io, process};

use argh::FromArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod debug;
mod output;
mod quiz;
mod study;
mod vec2;
mod vocabulary;

/// Vocabulary quizzes in the terminal
#[derive(Debug, FromArgs)]
struct VQuiz {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Debug(debug::Entry),
    Flip(study::flip::Entry),
    Spell(study::spell::Entry),
    Codes(study::codes::Entry),
}

fn main() {
    // stdout belongs to the quiz screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vquiz=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let res = match argh::from_env::<VQuiz>().subcommand {
        Subcommand::Debug(cmd) => {
            cmd.run();
            Ok(())
        }
        Subcommand::Flip(cmd) => cmd.run(),
        Subcommand::Spell(cmd) => cmd.run(),
        Subcommand::Codes(cmd) => cmd.run(),
    };
    if let Err(err) = res {
        output::write_fatal_error(&err.to_string());
        process::exit(1);
    }
}
