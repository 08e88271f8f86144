use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use kundali_base::{
    ApproximateAge, Dignity, DignityMark, GRID_SIZE, Graha, LayoutSlot, Rashi, ReferenceData,
    ReferenceError, approximate_age, aspected_signs, house_number, nakshatra_placement,
    sign_placement, slot_at,
};
use kundali_chart::{
    BirthInput, CellView, Chart, ChartError, ChartReport, TransitInput, assemble_birth_chart,
    assemble_transit_chart, chart_cells,
};
use kundali_ephemeris::{AyanamshaSystem, HouseSystem, ProviderError, SnapshotProvider};
use log::{LevelFilter, debug};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal Vedic chart CLI")]
struct Cli {
    /// Reference data overlay (TOML)
    #[arg(long, global = true)]
    reference: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign, degree and minute of a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// House number of a sign counted from an anchor sign
    House {
        /// Sign (name or 0-based index)
        sign: Rashi,
        /// Anchor sign counted as house 1
        #[arg(long)]
        anchor: Rashi,
    },
    /// Signs aspected by a graha placed in a sign
    Aspect {
        /// Graha name (English or Sanskrit)
        graha: Graha,
        /// Sign the graha occupies
        #[arg(long)]
        from: Rashi,
    },
    /// Dignities of the grahas in a sign
    Dignity {
        /// Sign (name or 0-based index)
        sign: Rashi,
    },
    /// Print the South Indian chart layout
    Layout,
    /// Approximate age from a birth date
    Age {
        /// Birth date (YYYY-MM-DD)
        birth: NaiveDate,
        /// Reference time (YYYY-MM-DDThh:mm:ss), defaults to now
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },
    /// Assemble a birth chart
    Birth {
        #[command(flatten)]
        source: ChartSource,
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Local birth time (hh:mm[:ss])
        #[arg(long)]
        time: NaiveTime,
        /// Hours east of UTC
        #[arg(long, allow_hyphen_values = true, default_value = "5.5")]
        tz: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// House system (Placidus, Koch, Equal, WholeSign, Porphyry or a letter code)
        #[arg(long, default_value = "P")]
        house_system: HouseSystem,
    },
    /// Assemble a transit chart (houses counted from the Moon)
    Transit {
        #[command(flatten)]
        source: ChartSource,
        /// UT instant (YYYY-MM-DDThh:mm:ss), defaults to now
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
}

/// Options shared by the chart subcommands.
#[derive(clap::Args)]
struct ChartSource {
    /// Ephemeris snapshot file (TOML)
    #[arg(long)]
    snapshot: PathBuf,
    /// Ayanamsha (Lahiri, Raman, PushyaPaksha, Krishnamurti, TrueChitra or SE_SIDM_*)
    #[arg(long, default_value = "Krishnamurti")]
    ayanamsha: AyanamshaSystem,
    /// Highlight signs aspected by this graha
    #[arg(long)]
    select: Option<Graha>,
    /// Print JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reference data: {0}")]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("chart assembly failed: {0}")]
    Chart(#[from] ChartError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn load_reference(path: Option<&Path>) -> Result<ReferenceData, CliError> {
    match path {
        Some(p) => Ok(ReferenceData::load(p)?),
        None => Ok(ReferenceData::default()),
    }
}

fn open_provider(path: &Path) -> Result<SnapshotProvider, CliError> {
    let provider = SnapshotProvider::open(path)?;
    debug!("snapshot epoch JD {}", provider.snapshot().jd_ut);
    Ok(provider)
}

fn graha_abbrev(graha: Graha) -> &'static str {
    match graha {
        Graha::Surya => "Su",
        Graha::Chandra => "Mo",
        Graha::Mangal => "Ma",
        Graha::Buddh => "Me",
        Graha::Guru => "Ju",
        Graha::Shukra => "Ve",
        Graha::Shani => "Sa",
        Graha::Rahu => "Ra",
        Graha::Ketu => "Ke",
    }
}

const CELL_WIDTH: usize = 22;
const CELL_LINES: usize = 3;

fn mark_symbol(mark: DignityMark) -> char {
    match mark {
        DignityMark::Exalted => '▲',
        DignityMark::Debilitated => '▼',
        DignityMark::Mooltrikona => '☗',
        DignityMark::Friendly => '+',
        DignityMark::Enemy => '-',
        DignityMark::Neutral => '=',
    }
}

fn dignity_symbols(dignity: Option<Dignity>) -> String {
    dignity
        .map(|d| d.marks().iter().copied().map(mark_symbol).collect())
        .unwrap_or_default()
}

/// Text rendering of a cell: header, occupants, then dignities of grahas
/// placed elsewhere.
fn cell_lines(view: &CellView) -> [String; CELL_LINES] {
    let mut header = format!("{:.3}", view.sign_name);
    if let Some(h) = view.house {
        header.push_str(&format!(" H{h}"));
    }
    if view.is_ascendant {
        header.push_str(" Asc");
    }
    if view.aspected {
        header.push_str(" *");
    }
    let occupants = view
        .occupants
        .iter()
        .map(|o| {
            let retro = if o.retrograde { "(R)" } else { "" };
            format!(
                "{}{}{retro}{}",
                graha_abbrev(o.graha),
                o.degree,
                dignity_symbols(o.dignity)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    let relations = view
        .remaining_relations
        .iter()
        .map(|&(g, d)| format!("{}{}", graha_abbrev(g), dignity_symbols(Some(d))))
        .collect::<Vec<_>>()
        .join(" ");
    [header, occupants, relations]
}

fn render_grid(cells: &[CellView], center: &[String]) -> String {
    let size = usize::from(GRID_SIZE);
    let border = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(size));
    let mut out = border.clone();
    for row in 0..GRID_SIZE {
        for line in 0..CELL_LINES {
            out.push('|');
            for col in 0..GRID_SIZE {
                let text = match slot_at(row, col) {
                    Some(LayoutSlot::Sign(rashi)) => cells
                        .iter()
                        .find(|c| c.sign_index == rashi.index())
                        .map(|c| cell_lines(c)[line].clone())
                        .unwrap_or_default(),
                    _ => {
                        let i = usize::from(row - 1) * 2 * CELL_LINES
                            + usize::from(col - 1) * CELL_LINES
                            + line;
                        center.get(i).cloned().unwrap_or_default()
                    }
                };
                out.push_str(&format!("{text:<CELL_WIDTH$.CELL_WIDTH$}|"));
            }
            out.push('\n');
        }
        out.push_str(&border);
    }
    out
}

fn center_lines(chart: &Chart, reference: &ReferenceData) -> Vec<String> {
    let mut lines = vec![
        format!("{:?} chart", chart.kind()),
        format!("JD {:.5}", chart.jd_ut()),
        chart.ayanamsha_system().to_string(),
        chart
            .ayanamsha_deg()
            .map(|a| format!("ayanamsha {a:.4}"))
            .unwrap_or_default(),
    ];
    if let Some(asc) = chart.ascendant() {
        lines.push(format!("Lagna {} {}", reference.sign_name(asc.sign.sign_index), asc.sign));
    } else {
        lines.push(String::new());
    }
    if let Some(n) = chart.moon_nakshatra() {
        lines.push(format!(
            "Moon {} p{}",
            reference.nakshatra_name(n.nakshatra_number),
            n.pada
        ));
    }
    lines
}

fn print_report(
    report: &ChartReport,
    reference: &ReferenceData,
    source: &ChartSource,
    age: Option<ApproximateAge>,
) -> Result<(), CliError> {
    let cells = chart_cells(&report.chart, reference, source.select);
    let failures: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
    if source.json {
        let mut value = serde_json::json!({
            "chart": report.chart,
            "cells": cells,
            "failures": failures,
        });
        if let (Some(age), Some(map)) = (age, value.as_object_mut()) {
            map.insert("age".to_string(), serde_json::to_value(age)?);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", render_grid(&cells, &center_lines(&report.chart, reference)));
    for p in report.chart.planets() {
        println!(
            "{:<8} {:>9.4}  {:<12} {:<8} {} p{}{}",
            p.graha.english_name(),
            p.longitude,
            reference.sign_name(p.sign.sign_index),
            p.sign.to_string(),
            reference.nakshatra_name(p.nakshatra.nakshatra_number),
            p.nakshatra.pada,
            if p.retrograde { "  R" } else { "" }
        );
    }
    if let Some(age) = age {
        println!("Age: {} years {} months", age.years, age.months);
    }
    for f in &failures {
        eprintln!("warning: {f}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let reference = load_reference(cli.reference.as_deref())?;

    match cli.command {
        Commands::Rashi { lon } => {
            let p = sign_placement(lon);
            println!(
                "{} ({} / {}) - {} ({:.4} deg in sign)",
                reference.sign_name(p.sign_index),
                p.rashi.name(),
                reference.localized_sign_name(p.sign_index),
                p,
                p.degrees_in_sign
            );
        }

        Commands::Nakshatra { lon } => {
            let n = nakshatra_placement(lon);
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                reference.nakshatra_name(n.nakshatra_number),
                n.nakshatra_number,
                n.pada,
                n.degrees_in_nakshatra,
                n.degrees_in_pada
            );
        }

        Commands::House { sign, anchor } => {
            println!("{}", house_number(sign.index(), anchor.index()));
        }

        Commands::Aspect { graha, from } => {
            let signs = aspected_signs(from.index(), reference.aspect_offsets(graha));
            let names: Vec<&str> = signs.iter().map(|&s| reference.sign_name(s)).collect();
            println!("{graha} in {} aspects: {}", reference.sign_name(from.index()), names.join(", "));
        }

        Commands::Dignity { sign } => {
            for (graha, dignity) in reference.dignities().relations_in(sign) {
                println!("{:<8} {}", graha.english_name(), dignity.name());
            }
        }

        Commands::Layout => {
            for row in 0..GRID_SIZE {
                let line: Vec<String> = (0..GRID_SIZE)
                    .map(|col| match slot_at(row, col) {
                        Some(LayoutSlot::Sign(r)) => format!("{:<12}", reference.sign_name(r.index())),
                        _ => format!("{:<12}", "."),
                    })
                    .collect();
                println!("{}", line.join(" "));
            }
        }

        Commands::Age { birth, now } => {
            let now = now.unwrap_or_else(|| Utc::now().naive_utc());
            match approximate_age(birth, now) {
                Some(age) => println!("{} years {} months", age.years, age.months),
                None => println!("birth date is in the future"),
            }
        }

        Commands::Birth {
            source,
            date,
            time,
            tz,
            lat,
            lon,
            house_system,
        } => {
            let provider = open_provider(&source.snapshot)?;
            let input = BirthInput {
                date,
                time,
                timezone_offset_hours: tz,
                latitude: lat,
                longitude: lon,
                ayanamsha: source.ayanamsha,
                house_system,
            };
            let report = assemble_birth_chart(&provider, &input)?;
            let age = approximate_age(date, Utc::now().naive_utc());
            print_report(&report, &reference, &source, age)?;
        }

        Commands::Transit { source, at } => {
            let provider = open_provider(&source.snapshot)?;
            let input = TransitInput {
                at_ut: at.unwrap_or_else(|| Utc::now().naive_utc()),
                ayanamsha: source.ayanamsha,
            };
            let report = assemble_transit_chart(&provider, &input)?;
            print_report(&report, &reference, &source, None)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_birth_command() {
        let cli = Cli::try_parse_from([
            "kundali",
            "birth",
            "--snapshot",
            "data/j2000_chennai.toml",
            "--date",
            "2000-01-01",
            "--time",
            "17:30",
            "--lat",
            "13.0827",
            "--lon",
            "80.2707",
            "--ayanamsha",
            "SE_SIDM_LAHIRI",
            "--select",
            "Mars",
        ])
        .unwrap();
        let Commands::Birth {
            source, tz, house_system, ..
        } = cli.command
        else {
            panic!("expected birth command");
        };
        assert_eq!(source.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(source.select, Some(Graha::Mangal));
        assert_eq!(tz, 5.5);
        assert_eq!(house_system, HouseSystem::Placidus);
    }

    #[test]
    fn negative_longitude_argument() {
        let cli = Cli::try_parse_from(["kundali", "rashi", "-10.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Rashi { lon } if lon == -10.5));
    }

    #[test]
    fn rejects_unknown_graha() {
        assert!(Cli::try_parse_from(["kundali", "aspect", "Pluto", "--from", "Aries"]).is_err());
    }

    #[test]
    fn grid_places_signs_and_center() {
        let reference = ReferenceData::default();
        let chart_source = include_str!("../../../data/j2000_chennai.toml");
        let provider = SnapshotProvider::from_toml_str(chart_source).unwrap();
        let input = TransitInput {
            at_ut: NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ayanamsha: AyanamshaSystem::Krishnamurti,
        };
        let report = assemble_transit_chart(&provider, &input).unwrap();
        let cells = chart_cells(&report.chart, &reference, None);
        let grid = render_grid(&cells, &center_lines(&report.chart, &reference));

        let lines: Vec<&str> = grid.lines().collect();
        // 4 rows of 3 text lines plus 5 borders
        assert_eq!(lines.len(), 17);
        assert!(lines[1].starts_with("|Pis"));
        assert!(lines[1].contains("|Ari"));
        assert!(grid.contains("Transit chart"));
        // Moon in Libra anchors a transit chart
        assert!(grid.contains("Lib H1"));
    }

    #[test]
    fn grid_shows_dignity_marks() {
        let reference = ReferenceData::default();
        let provider =
            SnapshotProvider::from_toml_str(include_str!("../../../data/j2000_chennai.toml"))
                .unwrap();
        let input = TransitInput {
            at_ut: NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ayanamsha: AyanamshaSystem::Krishnamurti,
        };
        let report = assemble_transit_chart(&provider, &input).unwrap();
        let cells = chart_cells(&report.chart, &reference, None);
        let aries = cells.iter().find(|c| c.sign_index == 0).unwrap();
        let [_, occupants, relations] = cell_lines(aries);

        // Saturn at 16°38' sidereal is retrograde and debilitated in Aries
        assert!(occupants.contains("Sa16(R)▼"), "{occupants}");
        assert!(relations.contains("Su▲"), "{relations}");
        assert!(relations.contains("Ma☗"), "{relations}");
        assert!(!relations.contains("Sa"));
        assert_eq!(dignity_symbols(Some(Dignity::MooltrikonaExalted)), "☗▲");
        assert_eq!(dignity_symbols(None), "");
    }
}
