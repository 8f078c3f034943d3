use checkout_wizard::application::session::{CheckoutSession, Outcome};
use checkout_wizard::config::CheckoutConfig;
use checkout_wizard::interfaces::csv::action_reader::ActionReader;
use checkout_wizard::interfaces::format::CurrencyFormat;
use checkout_wizard::interfaces::json::view_writer::{SessionEvent, ViewWriter};
use checkout_wizard::interfaces::view::render;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV script of checkout actions (`action, value`)
    input: PathBuf,

    /// Issue this PIX code instead of a randomly generated one
    #[arg(long)]
    pix_code: Option<String>,

    /// Make the payment provider reject every payment
    #[arg(long)]
    decline_payments: bool,

    /// File used as clipboard for copied PIX codes. Without it, copies fall
    /// back to an in-memory buffer.
    #[arg(long)]
    clipboard_file: Option<PathBuf>,

    /// Currency symbol shown before prices
    #[arg(long, default_value = "R$")]
    currency_symbol: String,

    /// Decimal separator used in prices
    #[arg(long, default_value_t = ',')]
    decimal_separator: char,
}

impl From<Cli> for CheckoutConfig {
    fn from(cli: Cli) -> Self {
        Self {
            format: CurrencyFormat {
                symbol: cli.currency_symbol,
                decimal_separator: cli.decimal_separator,
            },
            pix_code: cli.pix_code,
            decline_payments: cli.decline_payments,
            clipboard_file: cli.clipboard_file,
        }
    }
}

fn emit<W: Write>(
    writer: &mut ViewWriter<W>,
    session: &CheckoutSession,
    format: &CurrencyFormat,
    action: &str,
    outcome: Outcome,
) -> Result<()> {
    let notification = match outcome {
        Outcome::Notified(notification) => Some(notification.message()),
        _ => None,
    };
    writer.write_event(&SessionEvent {
        action,
        step: session.state().step().number(),
        outcome: outcome.as_str(),
        notification,
        view: render(session, format),
    })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let input = cli.input.clone();
    let config = CheckoutConfig::from(cli);
    let mut session = config.build_session();

    let stdout = io::stdout();
    let mut writer = ViewWriter::new(stdout.lock());
    emit(&mut writer, &session, &config.format, "start", Outcome::Applied)?;

    // Replay the checkout script
    let file = File::open(input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                let name = action.name();
                match session.dispatch(action).await {
                    Ok(outcome) => {
                        if let Outcome::Notified(notification) = outcome {
                            eprintln!("{}", notification.message());
                        }
                        emit(&mut writer, &session, &config.format, name, outcome)?;
                    }
                    Err(e) => {
                        eprintln!("Error processing action: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    writer.flush()?;
    Ok(())
}
