//! Settings display and mutation.

use gymlog_core::settings::WeightUnit;

use crate::app::AppContext;
use crate::cli::SettingsSetArgs;
use crate::helpers::format_duration;
use crate::output;

pub fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;

    let mut table = output::table();
    table.set_header(["Setting", "Value"]);
    table.add_row([
        "weight-unit".to_string(),
        settings.weight_unit.as_str().to_string(),
    ]);
    table.add_row(["default-rpe".to_string(), settings.default_rpe.to_string()]);
    table.add_row([
        "default-rest".to_string(),
        format!(
            "{}s ({})",
            settings.default_rest_seconds,
            format_duration(settings.default_rest_seconds)
        ),
    ]);
    println!("{table}");
    Ok(())
}

pub fn handle_set(ctx: &AppContext, args: &SettingsSetArgs) -> anyhow::Result<()> {
    let mut settings = ctx.load_settings()?;

    match args.key.as_str() {
        "weight-unit" => {
            settings.weight_unit = WeightUnit::parse(&args.value)?;
        }
        "default-rpe" => {
            settings.default_rpe = args
                .value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid RPE: {}", args.value))?;
        }
        "default-rest" => {
            settings.default_rest_seconds = args
                .value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid rest seconds: {}", args.value))?;
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unknown setting: {} (use weight-unit, default-rpe, or default-rest)",
                other
            ));
        }
    }

    // save() re-validates, so out-of-range values never reach disk.
    ctx.save_settings(&settings)?;
    output::success(&format!("Set {} = {}", args.key, args.value), ctx.quiet());
    Ok(())
}
