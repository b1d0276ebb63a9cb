use bstack::cases::{coverage, format_actions, parse_actions, replay};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "replay push/pop sequences on a bounded stack", long_about = None)]
pub struct Cli {
    #[arg(long = "cap", default_value_t = 2)]
    pub cap: usize,

    #[arg(long = "actions", help = "sequence in p/o notation, e.g. ppo")]
    pub actions: Option<String>,

    #[arg(long = "pushes", help = "replay every interleaving of this many pushes...")]
    pub pushes: Option<usize>,

    #[arg(long = "pops", help = "...and this many pops")]
    pub pops: Option<usize>,

    #[arg(short = 'v', action = clap::ArgAction::Count, help = "-v debug, -vv trace")]
    pub verbose: u8,
}

fn walk(cli: &Cli, actions: &str) -> anyhow::Result<()> {
    let actions = parse_actions(actions)?;
    let trace = replay(cli.cap, &actions);
    for (idx, step) in trace.steps().iter().enumerate() {
        let outcome = match step.outcome {
            Ok(None) => "ok".to_string(),
            Ok(Some(v)) => format!("-> {}", v),
            Err(e) => e.to_string(),
        };
        println!("{:>3} {} size={} {} {}", idx, step.action, step.size, step.class, outcome);
    }
    info!(
        "[{}] ended in {} with {} error(s)",
        format_actions(&actions),
        trace.final_class(),
        trace.errors().count()
    );
    Ok(())
}

fn interleave(cli: &Cli, pushes: usize, pops: usize) {
    let report = coverage(cli.cap, pushes, pops);
    let visited: Vec<String> = report.visited.iter().map(|c| c.to_string()).collect();
    println!("sequences:   {}", report.sequences);
    println!("visited:     {}", visited.join(","));
    println!("overflowed:  {}", report.overflowed);
    println!("underflowed: {}", report.underflowed);
    println!("clean:       {} (final sizes {:?})", report.clean, report.clean_ends);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    if let Some(actions) = cli.actions.as_deref() {
        walk(&cli, actions)?;
    }
    if cli.pushes.is_some() || cli.pops.is_some() {
        interleave(&cli, cli.pushes.unwrap_or(0), cli.pops.unwrap_or(0));
    }
    if cli.actions.is_none() && cli.pushes.is_none() && cli.pops.is_none() {
        // Stack(2) with 3 pushes and 3 pops reaches b1, b2 and b3
        interleave(&cli, cli.cap + 1, cli.cap + 1);
    }
    Ok(())
}
