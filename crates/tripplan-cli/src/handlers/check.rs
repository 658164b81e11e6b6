use anyhow::{Result, bail};

use crate::args::TripFieldArgs;
use crate::context::AppContext;
use crate::presentation::{FormReport, Palette, render_form};
use crate::types::OutputFormat;

/// Validate the form without contacting the planning service
pub fn handle(ctx: &AppContext, fields: &TripFieldArgs) -> Result<()> {
    let mut form = ctx.new_form();
    super::apply_fields(&mut form, fields);

    match ctx.format {
        OutputFormat::Json => {
            let report = FormReport::capture(&form, false, None);
            println!("{}", report.to_json_pretty()?);
        }
        OutputFormat::Plain => {
            print!("{}", render_form(&form.feedback(), Palette::detect()));
        }
    }

    if !form.validation().can_submit() {
        bail!("The trip request has errors");
    }
    Ok(())
}
