//! The read-eval-print loop.

use std::io::BufRead;

use tracing::{debug, info, instrument};

use crate::{
    commands::{Reply, Session},
    config::AssistantConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Greet, then answer lines from `input` until `close`/`exit` or end of input.
///
/// Command failures are reported and the loop carries on; only I/O errors
/// end the session early. Bytes that are not UTF-8 become U+FFFD.
#[instrument(skip_all)]
pub fn run<R: BufRead>(
    session: &mut Session,
    mut input: R,
    output: &OutputManager,
    assistant: &AssistantConfig,
) -> CliResult<()> {
    output.header(&assistant.greeting)?;

    let mut buf = Vec::new();
    loop {
        output.prompt(&assistant.prompt)?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_cli_context(|| "Failed to read a command")?;
        if read == 0 {
            debug!("End of input");
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match session.handle_line(&line) {
            Ok(Reply::Message(text)) => output.print(&text)?,
            Ok(Reply::Json(value)) => output.json(&value)?,
            Ok(Reply::Exit(farewell)) => {
                output.print(&farewell)?;
                break;
            }
            Ok(Reply::Silent) => {}
            Err(e) => report(output, &e)?,
        }
    }

    info!(contacts = session.service().book().len(), "Session finished");
    Ok(())
}

/// The error line, plus its suggestions under `-v`.
fn report(output: &OutputManager, err: &CliError) -> CliResult<()> {
    err.log();
    output.error(&err.user_message())?;
    if output.is_verbose() {
        for suggestion in err.suggestions() {
            output.hint(&suggestion)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::commands::test_support::session;
    use crate::config::AppConfig;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            quiet: true,
            no_color: true,
            output_format: OutputFormat::Plain,
            ..Default::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn stops_at_exit() {
        let mut s = session();
        let input = Cursor::new("add John 1234567890\nexit\nadd Jane 5555555555\n");
        run(&mut s, input, &quiet_output(), &AppConfig::default().assistant).unwrap();
        assert_eq!(s.service().book().len(), 1);
    }

    #[test]
    fn runs_to_end_of_input_through_errors() {
        let mut s = session();
        let input = Cursor::new("bogus\nadd J 1234567890\n\nadd Jane 5555555555");
        run(&mut s, input, &quiet_output(), &AppConfig::default().assistant).unwrap();
        assert_eq!(s.service().book().len(), 1);
        assert!(s.service().contact("Jane").is_ok());
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let mut s = session();
        let input = Cursor::new(
            b"add John 1234567890\nfly\xff\xfe\nadd Jane 5555555555\n".to_vec(),
        );
        run(&mut s, input, &quiet_output(), &AppConfig::default().assistant).unwrap();
        assert_eq!(s.service().book().len(), 2);
        assert!(s.service().contact("Jane").is_ok());
    }
}
