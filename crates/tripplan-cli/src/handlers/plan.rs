use anyhow::{Result, bail};
use tripplan_runtime::SubmitOutcome;

use crate::args::TripFieldArgs;
use crate::context::AppContext;
use crate::presentation::{FormReport, Palette, render_form, render_plan};
use crate::types::OutputFormat;

pub fn handle(ctx: &AppContext, fields: &TripFieldArgs) -> Result<()> {
    let mut form = ctx.new_form();
    super::apply_fields(&mut form, fields);

    let client = ctx.planning_client();
    let runtime = ctx.async_runtime()?;
    tracing::debug!(url = %ctx.api_url.url, source = %ctx.api_url.source, "submitting trip request");

    let outcome = runtime.block_on(form.submit(&client));

    let (submitted, response) = match &outcome {
        SubmitOutcome::Blocked(_) => (false, None),
        SubmitOutcome::Planned(response) => (true, Some(response)),
        SubmitOutcome::Failed => (true, None),
    };

    match ctx.format {
        OutputFormat::Json => {
            let report =
                FormReport::capture(&form, submitted, response.map(|r| r.as_json().clone()));
            println!("{}", report.to_json_pretty()?);
        }
        OutputFormat::Plain => {
            let palette = Palette::detect();
            print!("{}", render_form(&form.feedback(), palette));
            if let Some(response) = response {
                println!();
                print!("{}", render_plan(response, palette));
            }
        }
    }

    match outcome {
        SubmitOutcome::Planned(_) => Ok(()),
        SubmitOutcome::Blocked(_) => bail!("Trip request not sent: the form has errors"),
        SubmitOutcome::Failed => bail!("Trip request failed"),
    }
}
