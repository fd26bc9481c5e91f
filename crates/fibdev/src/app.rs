//! Application entry point and dispatch.

use anyhow::Result;

use fibdev_core::{device, DigitBuffer, Session, Whence};

use crate::config::AppConfig;

/// Run the application: open a session on the process device, position it,
/// read, and print. The session guard releases the device on every path out.
pub fn run(config: &AppConfig) -> Result<()> {
    let mut session = device().open()?;

    if let (Some(from), Some(to)) = (config.from, config.to) {
        run_range(&mut session, config, from, to)
    } else {
        let offset = match config.n {
            // Out-of-range requests saturate; the clamp bounds them anyway.
            Some(n) => i64::try_from(n).unwrap_or(i64::MAX),
            None => config.seek,
        };
        let whence = if config.n.is_some() {
            Whence::Start
        } else {
            config.whence.into()
        };
        let position = session.seek(offset, whence);
        let value = session.read()?;
        print_term(config, position, &value);
        Ok(())
    }
}

fn run_range(session: &mut Session<'_>, config: &AppConfig, from: u64, to: u64) -> Result<()> {
    anyhow::ensure!(from <= to, "--from must not exceed --to");
    for k in from..=to {
        let position = session.seek(i64::try_from(k).unwrap_or(i64::MAX), Whence::Start);
        let value = session.read()?;
        print_term(config, position, &value);
    }
    Ok(())
}

fn print_term(config: &AppConfig, position: i64, value: &DigitBuffer) {
    if config.quiet {
        println!("{value}");
    } else if config.verbose {
        println!("F({position}) = {value} ({} digits)", value.len());
    } else {
        println!("F({position}) = {value}");
    }
}
