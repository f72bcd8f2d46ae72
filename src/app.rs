//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the real main. It parses the CLI,
//! installs logging, runs the requested command and prints text or JSON.

use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{AnalyzeArgs, BatchArgs, Command, HydroArgs, LocationArg, RegionArgs, SolarArgs, WindArgs};
use crate::config::Settings;
use crate::data::{REGIONAL_CITY, WeatherClient, cities_for_state, example_profiles, india_states, regional_towns};
use crate::domain::{AnalysisRequest, LocationCode, WeatherReport, parse_non_negative};
use crate::engine::parse_daily_hours;
use crate::error::{AppError, ErrorKind};
use crate::estimate::{
    DEFAULT_FLOW_LPS, DEFAULT_HEAD_M, DEFAULT_ROOF_SQFT, DEFAULT_TURBINE_KW, carbon_price, estimate_hydro,
    estimate_solar, estimate_wind, localized_carbon_price,
};
use crate::report::{AnalyzeResponse, HydroResponse, SolarResponse, WindResponse};

pub mod pipeline;

/// Entry point for the `eco` binary.
pub fn run() -> Result<(), AppError> {
    // `eco` and `eco -l IN --hours 8` behave like `eco analyze ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    crate::logging::init_logging(cli.verbose)?;

    let json = cli.json;
    match cli.command {
        Command::Analyze(args) => handle_analyze(&args, json),
        Command::Solar(args) => handle_solar(&args, json),
        Command::Wind(args) => handle_wind(&args, json),
        Command::Hydro(args) => handle_hydro(&args, json),
        Command::CarbonPrice(args) => handle_carbon_price(&args, json),
        Command::Weather(args) => handle_weather(&args, json),
        Command::Batch(args) => handle_batch(&args, json),
        Command::Regions(args) => handle_regions(&args, json),
        Command::Examples => handle_examples(json),
    }
}

fn handle_analyze(args: &AnalyzeArgs, json: bool) -> Result<(), AppError> {
    let request = request_from_args(args)?;
    let profile = pipeline::analyze(&request)?;

    if json {
        print_json(&AnalyzeResponse::from_profile(&profile))
    } else {
        print!("{}", crate::report::format_profile(&profile));
        Ok(())
    }
}

/// Build the analysis request from flags, optionally seeded from an example.
pub fn request_from_args(args: &AnalyzeArgs) -> Result<AnalysisRequest, AppError> {
    let mut request = match args.example {
        Some(n) => {
            let examples = example_profiles();
            let example = n.checked_sub(1).and_then(|idx| examples.get(idx)).ok_or_else(|| {
                AppError::invalid_input(format!("Unknown example {n}; choose 1-{}.", examples.len()))
            })?;
            example.to_request()
        }
        None => AnalysisRequest::new(
            args.location.location,
            parse_daily_hours(&args.hours)?,
            args.habits.clone(),
        ),
    };
    request.state = args.state.clone();
    request.city = args.city.clone();
    request.town = args.town.clone();
    Ok(request)
}

fn handle_solar(args: &SolarArgs, json: bool) -> Result<(), AppError> {
    let location = args.location.location;
    let roof_sqft = parse_non_negative("roof area", &args.roof_sqft)?.unwrap_or(DEFAULT_ROOF_SQFT);
    let est = estimate_solar(location, roof_sqft)?;

    if json {
        print_json(&SolarResponse::from(&est))
    } else {
        print!("{}", crate::report::format_solar(location, roof_sqft, &est));
        Ok(())
    }
}

fn handle_wind(args: &WindArgs, json: bool) -> Result<(), AppError> {
    let location = args.location.location;
    let turbine_kw = parse_non_negative("turbine size", &args.turbine_kw)?.unwrap_or(DEFAULT_TURBINE_KW);
    let est = estimate_wind(location, turbine_kw)?;

    if json {
        print_json(&WindResponse::from(&est))
    } else {
        print!("{}", crate::report::format_wind(location, turbine_kw, &est));
        Ok(())
    }
}

fn handle_hydro(args: &HydroArgs, json: bool) -> Result<(), AppError> {
    let location = args.location.location;
    let flow_lps = parse_non_negative("flow rate", &args.flow_lps)?.unwrap_or(DEFAULT_FLOW_LPS);
    let head_m = parse_non_negative("head height", &args.head_m)?.unwrap_or(DEFAULT_HEAD_M);
    let est = estimate_hydro(location, flow_lps, head_m)?;

    if json {
        print_json(&HydroResponse::from(&est))
    } else {
        print!("{}", crate::report::format_hydro(location, flow_lps, head_m, &est));
        Ok(())
    }
}

fn handle_carbon_price(args: &LocationArg, json: bool) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let price = carbon_price(&settings);

    if json {
        print_json(&price)
    } else {
        println!("Carbon price: {}", localized_carbon_price(price, args.location));
        Ok(())
    }
}

fn handle_weather(args: &LocationArg, json: bool) -> Result<(), AppError> {
    let report = current_weather(Settings::from_env(), args.location);

    if json {
        match &report {
            Some(r) => print_json(r),
            None => {
                println!("{{}}");
                Ok(())
            }
        }
    } else {
        print!("{}", crate::report::format_weather(args.location, report.as_ref()));
        Ok(())
    }
}

/// Weather never fails the command: bad settings or an unbuildable client
/// are logged and reported as "unavailable".
fn current_weather(settings: Result<Settings, AppError>, location: LocationCode) -> Option<WeatherReport> {
    match settings.and_then(|s| WeatherClient::new(&s)) {
        Ok(client) => client.current(location),
        Err(err) => {
            warn!(%location, reason = %err, "weather lookup skipped");
            None
        }
    }
}

fn handle_batch(args: &BatchArgs, json: bool) -> Result<(), AppError> {
    let run = pipeline::run_batch(&args.file)?;

    if let Some(path) = &args.export {
        crate::io::export::write_batch_csv(path, &run.results)?;
        info!(path = %path.display(), rows = run.results.len(), "batch results exported");
    }

    if json {
        let responses: Vec<AnalyzeResponse> = run
            .results
            .iter()
            .map(|r| AnalyzeResponse::from_profile(&r.profile).with_id(r.id.clone()))
            .collect();
        print_json(&responses)
    } else {
        print!("{}", crate::report::format_batch(&run.results, &run.row_errors));
        Ok(())
    }
}

fn handle_regions(args: &RegionArgs, json: bool) -> Result<(), AppError> {
    let (heading, names) = if let Some(state) = &args.state {
        let cities = cities_for_state(state.trim())
            .ok_or_else(|| AppError::new(ErrorKind::NoData, format!("No city list for state '{state}'.")))?;
        (format!("Cities in {}", state.trim()), cities)
    } else if let Some(city) = &args.city {
        if !city.trim().eq_ignore_ascii_case(REGIONAL_CITY) {
            return Err(AppError::new(
                ErrorKind::NoData,
                format!("No town list for city '{city}'; only {REGIONAL_CITY} has one."),
            ));
        }
        (format!("Towns in {REGIONAL_CITY}"), regional_towns())
    } else {
        ("Indian states".to_string(), india_states())
    };

    if json {
        print_json(names)
    } else {
        print!("{}", crate::report::format_list(&heading, names));
        Ok(())
    }
}

fn handle_examples(json: bool) -> Result<(), AppError> {
    if json {
        print_json(example_profiles())
    } else {
        print!("{}", crate::report::format_examples(example_profiles()));
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::new(ErrorKind::Runtime, format!("Failed to encode JSON: {e}")))?;
    println!("{text}");
    Ok(())
}

const SUBCOMMANDS: [&str; 9] = [
    "analyze",
    "solar",
    "wind",
    "hydro",
    "carbon-price",
    "weather",
    "batch",
    "regions",
    "examples",
];

/// Rewrite argv so `eco` defaults to `eco analyze`.
///
/// Rules:
/// - `eco`                      -> `eco analyze`
/// - `eco -l IN ...`            -> `eco analyze -l IN ...`
/// - `eco --json solar ...`     -> unchanged (global flags may precede a subcommand)
/// - `eco --json -l IN`         -> `eco --json analyze -l IN`
/// - `eco --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let first = argv
        .iter()
        .skip(1)
        .position(|arg| !is_global_flag(arg))
        .map(|pos| pos + 1);

    let Some(idx) = first else {
        argv.push("analyze".to_string());
        return argv;
    };

    let arg = argv[idx].as_str();
    let is_top_level_help_or_version = matches!(arg, "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version || SUBCOMMANDS.contains(&arg) {
        return argv;
    }

    if arg.starts_with('-') {
        argv.insert(idx, "analyze".to_string());
    }
    argv
}

/// `--json`, `--verbose`, `-v`, `-vv`, ...
fn is_global_flag(arg: &str) -> bool {
    match arg {
        "--json" | "--verbose" => true,
        _ => arg.strip_prefix('-').is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'v')),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cli::Cli;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_analyze() {
        assert_eq!(rewrite_args(argv(&["eco"])), argv(&["eco", "analyze"]));
    }

    #[test]
    fn leading_flag_runs_analyze() {
        assert_eq!(
            rewrite_args(argv(&["eco", "-l", "IN", "--hours", "8"])),
            argv(&["eco", "analyze", "-l", "IN", "--hours", "8"])
        );
        assert_eq!(rewrite_args(argv(&["eco", "--json"])), argv(&["eco", "--json", "analyze"]));
        assert_eq!(
            rewrite_args(argv(&["eco", "-v", "--json", "-l", "DE"])),
            argv(&["eco", "-v", "--json", "analyze", "-l", "DE"])
        );
    }

    #[test]
    fn global_flags_before_a_subcommand_keep_it() {
        for args in [
            &["eco", "--json", "solar"][..],
            &["eco", "-v", "examples"][..],
            &["eco", "-vv", "--json", "wind", "--turbine-kw", "3"][..],
            &["eco", "--verbose", "carbon-price", "-l", "IN"][..],
        ] {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }

        let cli = Cli::try_parse_from(rewrite_args(argv(&["eco", "--json", "solar"]))).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Solar(_)));

        let cli = Cli::try_parse_from(rewrite_args(argv(&["eco", "-vv", "examples"]))).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Examples));
    }

    #[test]
    fn global_flags_alone_still_run_analyze() {
        let cli = Cli::try_parse_from(rewrite_args(argv(&["eco", "--json", "-l", "IN"]))).unwrap();
        assert!(cli.json);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.location.location, LocationCode::In);
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for cmd in SUBCOMMANDS {
            assert_eq!(rewrite_args(argv(&["eco", cmd])), argv(&["eco", cmd]));
        }
        assert_eq!(rewrite_args(argv(&["eco", "--help"])), argv(&["eco", "--help"]));
        assert_eq!(rewrite_args(argv(&["eco", "-V"])), argv(&["eco", "-V"]));
    }

    fn analyze_args(args: &[&str]) -> AnalyzeArgs {
        let mut full = vec!["eco", "analyze"];
        full.extend_from_slice(args);
        match Cli::parse_from(full).command {
            Command::Analyze(a) => a,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn request_from_flags() {
        let req = request_from_args(&analyze_args(&["-l", "in", "--hours", "16", "--town", "Bhalki"])).unwrap();
        assert_eq!(req.location, LocationCode::In);
        assert_eq!(req.daily_hours, 16.0);
        assert_eq!(req.town.as_deref(), Some("Bhalki"));
    }

    #[test]
    fn blank_hours_mean_zero() {
        let req = request_from_args(&analyze_args(&["--hours", ""])).unwrap();
        assert_eq!(req.daily_hours, 0.0);
    }

    #[test]
    fn bad_hours_are_invalid_input() {
        let err = request_from_args(&analyze_args(&["--hours", "lots"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn example_seeds_the_request() {
        let req = request_from_args(&analyze_args(&["--example", "2", "--town", "Aurad"])).unwrap();
        assert_eq!(req.location, LocationCode::In);
        assert_eq!(req.daily_hours, 16.0);
        assert_eq!(req.habits, "Fans, Lights, TV, Fridge");
        assert_eq!(req.town.as_deref(), Some("Aurad"));
    }

    #[test]
    fn unknown_example_is_rejected() {
        for n in ["0", "4"] {
            let err = request_from_args(&analyze_args(&["--example", n])).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn weather_with_bad_settings_is_unavailable() {
        let settings = Settings::from_lookup(|key| (key == "ECO_WEATHER_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(settings.is_err());
        assert_eq!(current_weather(settings, LocationCode::Us), None);
    }

    #[test]
    fn weather_for_unmapped_location_is_unavailable() {
        let settings = Settings {
            weather_url: "http://127.0.0.1:9/forecast".to_string(),
            weather_timeout: Duration::from_millis(50),
            ..Settings::default()
        };
        assert_eq!(current_weather(Ok(settings), LocationCode::Pl), None);
    }
}
