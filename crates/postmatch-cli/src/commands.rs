use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use postmatch_core::{MatchSelector, TracingObserver};
use postmatch_model::{MatchPolicy, SubscriberRecord};
use postmatch_roster::RosterSource;
use tracing::{info, info_span};

use crate::cli::{
    BatchArgs, MatchArgs, NormalizeArgs, OutputFormatArg, PolicyArgs, RankArgs, RosterArgs,
    ScoreArgs,
};
use crate::report::{MatchReport, batch_table, format_score, rank_table, roster_table};

/// Exit code when the query matched nobody.
pub const EXIT_NO_MATCH: i32 = 2;

/// Shared state for commands that consult the matcher.
pub struct MatchContext {
    pub selector: MatchSelector,
    pub observer: TracingObserver,
}

impl MatchContext {
    pub fn new(policy_args: &PolicyArgs, log_data: bool) -> Result<Self> {
        let policy = resolve_policy(policy_args)?;
        let selector = MatchSelector::with_policy(policy).context("invalid matching policy")?;
        Ok(Self {
            selector,
            observer: TracingObserver::new(log_data),
        })
    }

    fn find(&mut self, query: &str, roster: &[SubscriberRecord]) -> MatchReport {
        let result = self
            .selector
            .find_best_match_observed(query, roster, &mut self.observer);
        MatchReport::new(query, &result)
    }
}

/// Policy file first, then individual flag overrides.
pub fn resolve_policy(args: &PolicyArgs) -> Result<MatchPolicy> {
    let mut policy = match &args.policy_file {
        Some(path) => MatchPolicy::from_json_file(path)
            .with_context(|| format!("load policy {}", path.display()))?,
        None => MatchPolicy::default(),
    };
    if let Some(threshold) = args.threshold {
        policy.threshold = threshold;
    }
    if let Some(boost) = args.postal_code_boost {
        policy.postal_code_boost = boost;
    }
    policy.validate().context("invalid matching policy")?;
    Ok(policy)
}

fn load_roster(args: &RosterArgs) -> Result<Vec<SubscriberRecord>> {
    let source = RosterSource::from_path(args.roster.clone());
    let roster = source.load().with_context(|| match &source {
        RosterSource::Csv(path) => format!("load roster {}", path.display()),
        RosterSource::Demo => "load demo roster".to_string(),
    })?;
    if roster.is_empty() {
        bail!("roster has no subscribers with both email and address");
    }
    Ok(roster)
}

fn read_query(address: Option<&str>) -> Result<String> {
    let query = match address {
        Some(address) => address.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read address from stdin")?;
            buffer
        }
    };
    let query = query.trim().to_string();
    if query.is_empty() {
        bail!("no address provided");
    }
    Ok(query)
}

pub fn run_match(args: &MatchArgs, ctx: &mut MatchContext) -> Result<i32> {
    let query = read_query(args.address.as_deref())?;
    let roster = load_roster(&args.roster)?;

    let span = info_span!("match", candidates = roster.len());
    let _guard = span.enter();
    let report = ctx.find(&query, &roster);

    match args.format {
        OutputFormatArg::Text => println!("{}", report.to_text()),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        ),
    }
    Ok(if report.is_match() { 0 } else { EXIT_NO_MATCH })
}

pub fn run_batch(args: &BatchArgs, ctx: &mut MatchContext) -> Result<i32> {
    let text = std::fs::read_to_string(&args.queries)
        .with_context(|| format!("read queries {}", args.queries.display()))?;
    let roster = load_roster(&args.roster)?;

    let span = info_span!("batch", candidates = roster.len());
    let _guard = span.enter();
    let reports: Vec<MatchReport> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| ctx.find(line, &roster))
        .collect();
    let matched = reports.iter().filter(|r| r.is_match()).count();
    info!(queries = reports.len(), matched, "batch complete");

    match args.format {
        OutputFormatArg::Text => {
            println!("{}", batch_table(&reports));
            println!("Matched {matched} of {} addresses", reports.len());
        }
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("serialize reports")?
        ),
    }
    Ok(0)
}

pub fn run_rank(args: &RankArgs, ctx: &MatchContext) -> Result<i32> {
    let roster = load_roster(&args.roster)?;
    let ranked = ctx
        .selector
        .rank_candidates(&args.address, &roster, args.limit);
    println!("{}", rank_table(&ranked));
    println!(
        "Threshold: {} (a match must score higher)",
        format_score(ctx.selector.threshold())
    );
    Ok(0)
}

pub fn run_score(args: &ScoreArgs, ctx: &MatchContext) -> Result<i32> {
    let score = ctx.selector.scorer().score(&args.first, &args.second);
    println!("Score: {}", format_score(score.score));
    for component in &score.explanation {
        println!(
            "  {:<18} {:>7}  {}",
            component.name,
            format!("{:+.3}", component.value),
            component.description
        );
    }
    Ok(0)
}

pub fn run_normalize(args: &NormalizeArgs, ctx: &MatchContext) -> Result<i32> {
    let normalized = postmatch_core::normalize(&args.text);
    let components = ctx.selector.scorer().extractor().extract_normalized(&normalized);
    println!("Normalized:  {normalized}");
    println!("Number:      {}", or_dash(&components.number));
    println!("Postal code: {}", or_dash(&components.postal_code));
    Ok(0)
}

pub fn run_roster(args: &RosterArgs) -> Result<i32> {
    let roster = RosterSource::from_path(args.roster.clone())
        .load()
        .context("load roster")?;
    println!("{}", roster_table(&roster));
    Ok(0)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

