use cp_social_core::config::Settings;
use cp_social_core::error::Error;
use cp_social_core::models::{
    Command, ErrorResponse, ProjectRequest, ProjectResponse, RankRequest, RankResponse, VisibilityPolicy,
};
use std::io::{Read, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    // stdout carries the response, so logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn rank(settings: &Settings, req: RankRequest) -> Result<String, Error> {
    req.validate()?;

    let total_candidates = req.candidates.len();
    let limit = settings.matching.effective_limit(req.limit);
    let matches = settings
        .matching
        .scorer()
        .rank_candidates(&req.reference, req.candidates, &req.exclude_ids, Some(limit))?;

    info!("Returning {} of {} candidates for {}", matches.len(), total_candidates, req.reference.user_id);

    Ok(serde_json::to_string(&RankResponse {
        matches,
        total_candidates,
    })?)
}

fn project(settings: &Settings, req: ProjectRequest) -> Result<String, Error> {
    let policy = VisibilityPolicy::from_entries(req.policy);
    let defaults = VisibilityPolicy::profile_defaults();

    let profile = settings
        .visibility
        .filter()
        .project(&req.record, &policy, req.relationship, &defaults);

    info!("Projected {} of {} fields", profile.len(), req.record.len());

    Ok(serde_json::to_string(&ProjectResponse { profile })?)
}

fn run(settings: &Settings) -> Result<String, Error> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    match serde_json::from_str::<Command>(&input)? {
        Command::Rank(req) => rank(settings, req),
        Command::Project(req) => project(settings, req),
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);

    let (output, code) = match run(&settings) {
        Ok(body) => (body, ExitCode::SUCCESS),
        Err(e) => {
            error!("Command failed: {}", e);
            let body = ErrorResponse {
                error: e.kind().to_string(),
                message: e.to_string(),
            };
            (serde_json::to_string(&body).unwrap_or_default(), ExitCode::FAILURE)
        }
    };

    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "{}", output).is_err() {
        return ExitCode::FAILURE;
    }

    code
}
