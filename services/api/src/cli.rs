use crate::analyze::{run_analyze, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use design_lens::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DesignLens",
    about = "Critique a design against core layout and typography principles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run one critique end to end and print the report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_lens::critique::Principle;

    #[test]
    fn analyze_accepts_repeated_principles() {
        let cli = Cli::try_parse_from([
            "design-lens",
            "analyze",
            "poster.png",
            "--principle",
            "alignment",
            "-p",
            "Contrast & Colour",
            "--instant",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(
                    args.principles,
                    vec![Principle::Alignment, Principle::ContrastColour]
                );
                assert!(args.instant);
                assert!(args.media_type.is_none());
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_principles_are_rejected_by_the_parser() {
        let parsed = Cli::try_parse_from(["design-lens", "analyze", "a.png", "-p", "kerning"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["design-lens"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
