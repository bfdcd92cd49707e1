use shift_tally::commands::handle_line;
use shift_tally::components::shift_form::ShiftForm;
use shift_tally::error::Error;
use shift_tally::{shutdown, startup};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting shift tally");

    // Load configuration
    let config = startup::load_config()?;
    startup::apply_locale(&config.locale);

    let mut session = startup::open_session(&config)?;
    let mut form = ShiftForm::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let signal = shutdown::wait_for_signal();
    tokio::pin!(signal);

    loop {
        stdout.write_all(b"> ").await.map_err(Error::from)?;
        stdout.flush().await.map_err(Error::from)?;

        let line = tokio::select! {
            line = lines.next_line() => line.map_err(Error::from)?,
            result = &mut signal => {
                if let Err(e) = result {
                    error!("Signal handler failed: {}", e);
                }
                break;
            }
        };

        // End of input
        let Some(line) = line else {
            break;
        };

        let outcome = handle_line(&mut session, &mut form, &line);
        for output in &outcome.lines {
            stdout
                .write_all(format!("{}\n", output).as_bytes())
                .await
                .map_err(Error::from)?;
        }

        if outcome.quit {
            break;
        }
    }

    info!("Shift tally stopped");
    Ok(())
}
