use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;
use strum::IntoEnumIterator;

use revenue_lens::{Cli, Granularity, build_series, load_records_from_file, unique_locations};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    log::info!("Parsed arguments: {:?}", args);

    // C. Load the saved invoice export
    let records = load_records_from_file(&args.invoices)?;

    // D. Resolve selections
    let locations = if args.locations.is_empty() {
        unique_locations(&records)
    } else {
        args.locations.clone()
    };
    if locations.is_empty() {
        bail!("invoice export contains no named locations and none were requested");
    }

    let granularities: Vec<Granularity> = if args.granularities.is_empty() {
        Granularity::iter().collect()
    } else {
        args.granularities
            .iter()
            .map(|raw| {
                raw.parse::<Granularity>().with_context(|| {
                    format!(
                        "unknown granularity {:?} (expected hour-of-day, day-of-month, \
                         iso-week or month-of-year)",
                        raw
                    )
                })
            })
            .collect::<Result<_>>()?
    };

    // E. Build and print the series, one JSON document per chart
    let series = build_series(
        &records,
        &locations,
        args.start.as_str(),
        args.end.as_str(),
        &granularities,
    )?;

    for location in locations.iter().unique() {
        let Some(per_granularity) = series.get(location) else {
            continue;
        };
        for granularity in &granularities {
            if let Some(one) = per_granularity.get(granularity) {
                println!("{}", serde_json::to_string_pretty(one)?);
            }
        }
    }

    Ok(())
}
