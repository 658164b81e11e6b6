use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tripplan_runtime::{PlanError, PlanningService, TripRequestForm};
use tripplan_types::{PlanResponse, TripField, TripRequestPayload};

use crate::args::TripFieldArgs;
use crate::context::{AppContext, CliClock};
use crate::presentation::{FormReport, Palette, render_form, render_plan};
use crate::types::OutputFormat;

const HELP: &str = "\
Commands:
  set <field> <value>   Replace one field (origin|from, destination|to, departure, return)
  clear <field>         Empty one field
  show                  Print the form again
  submit                Send the trip request
  help                  Show this message
  quit                  Leave";

const ALREADY_SUBMITTING: &str = "A trip request is already in flight.";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Set(TripField, String),
    Clear(TripField),
    Show,
    Submit,
    Help,
    Quit,
}

fn parse_action(line: &str) -> std::result::Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    let field = |name: &str| -> std::result::Result<TripField, String> {
        if name.is_empty() {
            return Err(format!("'{}' needs a field name", command));
        }
        name.parse::<TripField>().map_err(|e| e.to_string())
    };

    let action = match command {
        "set" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map(|(n, v)| (n, v.trim()))
                .unwrap_or((rest, ""));
            Action::Set(field(name)?, value.to_string())
        }
        "clear" => Action::Clear(field(rest)?),
        "show" => Action::Show,
        "submit" => Action::Submit,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => return Err(format!("Unknown command '{}' (type 'help')", other)),
    };
    Ok(Some(action))
}

type PlanResult = std::result::Result<PlanResponse, PlanError>;

/// Line-oriented editing session over stdin: every edit re-renders the form
pub fn handle(ctx: &AppContext, fields: &TripFieldArgs) -> Result<()> {
    let runtime = ctx.async_runtime()?;
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    runtime.block_on(run_session(ctx, fields, input, &mut out))
}

/// Drive the session until `quit` or end of input.
///
/// A submitted request runs as its own task, so lines keep being read and
/// applied while it is outstanding. A pending request is awaited before
/// the session ends.
async fn run_session<R, W>(
    ctx: &AppContext,
    fields: &TripFieldArgs,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let client = ctx.planning_client();

    let mut form = ctx.new_form();
    super::apply_fields(&mut form, fields);

    let mut session = Session {
        form,
        format: ctx.format,
        palette: Palette::detect(),
        prompt: std::io::stdin().is_terminal(),
    };

    session.render(out, false, None)?;
    if session.format == OutputFormat::Plain {
        writeln!(out, "Type 'help' for commands.")?;
    }
    session.prompt(out)?;

    let mut lines = input.lines();
    let mut in_flight: Option<JoinHandle<PlanResult>> = None;

    loop {
        tokio::select! {
            biased;

            joined = settle(&mut in_flight), if in_flight.is_some() => {
                in_flight = None;
                session.complete(joined.context("Trip request task failed")?, out)?;
                session.prompt(out)?;
            }

            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_action(&line) {
                    Ok(None) => {}
                    Ok(Some(Action::Set(field, value))) => session.edit(field, value, out)?,
                    Ok(Some(Action::Clear(field))) => session.edit(field, String::new(), out)?,
                    Ok(Some(Action::Show)) => session.render(out, false, None)?,
                    Ok(Some(Action::Help)) => writeln!(out, "{}", HELP)?,
                    Ok(Some(Action::Submit)) => {
                        if let Some(payload) = session.start(out)? {
                            let client = client.clone();
                            in_flight = Some(tokio::spawn(async move {
                                client.plan_trip(&payload).await
                            }));
                        }
                    }
                    Ok(Some(Action::Quit)) => break,
                    Err(message) => writeln!(out, "{}", message)?,
                }
                session.prompt(out)?;
            }
        }
    }

    if let Some(handle) = in_flight {
        let result = handle.await.context("Trip request task failed")?;
        session.complete(result, out)?;
    }

    Ok(())
}

/// Resolves with the pending request; never resolves when there is none
async fn settle(
    task: &mut Option<JoinHandle<PlanResult>>,
) -> std::result::Result<PlanResult, JoinError> {
    match task {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

struct Session {
    form: TripRequestForm<CliClock>,
    format: OutputFormat,
    palette: Palette,
    prompt: bool,
}

impl Session {
    fn edit<W: Write>(&mut self, field: TripField, value: String, out: &mut W) -> Result<()> {
        self.form.set_field(field, value);
        self.render(out, false, None)
    }

    /// Begin a submission unless one is outstanding or the form is invalid
    fn start<W: Write>(&mut self, out: &mut W) -> Result<Option<TripRequestPayload>> {
        if !self.form.submit_enabled() {
            writeln!(out, "{}", ALREADY_SUBMITTING)?;
            return Ok(None);
        }

        let payload = self.form.begin_submission();
        self.render(out, false, None)?;
        Ok(payload)
    }

    fn complete<W: Write>(&mut self, result: PlanResult, out: &mut W) -> Result<()> {
        let response = self.form.finish_submission(result);
        self.render(out, true, response.as_ref().map(|r| r.as_json().clone()))?;

        if let (Some(response), OutputFormat::Plain) = (&response, self.format) {
            writeln!(out)?;
            write!(out, "{}", render_plan(response, self.palette))?;
        }
        Ok(())
    }

    fn render<W: Write>(
        &self,
        out: &mut W,
        submitted: bool,
        response: Option<serde_json::Value>,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let report = FormReport::capture(&self.form, submitted, response);
                writeln!(out, "{}", report.to_json_line()?)?;
            }
            OutputFormat::Plain => {
                writeln!(out)?;
                write!(out, "{}", render_form(&self.form.feedback(), self.palette))?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.prompt && self.format == OutputFormat::Plain {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
