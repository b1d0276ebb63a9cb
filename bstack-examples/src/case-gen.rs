use anyhow::Context;
use bstack::cases::{CaseGenerator, format_actions};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "derive boundary test cases for a bounded stack", long_about = None)]
pub struct Cli {
    #[arg(long = "cap", help = "stack capacities", num_args = 1.., default_values_t = vec![0, 1, 2])]
    pub caps: Vec<usize>,

    #[arg(long = "no-round-trip", help = "skip the push-all/pop-all baseline")]
    pub no_round_trip: bool,

    #[arg(long = "no-probes", help = "skip the overflow/underflow probes")]
    pub no_probes: bool,

    #[arg(long = "run", help = "replay every case and check it")]
    pub run: bool,

    #[arg(short = 'v', action = clap::ArgAction::Count, help = "-v debug, -vv trace")]
    pub verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

fn generate(cli: &Cli) -> anyhow::Result<()> {
    let mut failed = 0;
    for &cap in &cli.caps {
        let generator = CaseGenerator::new(cap)
            .with_round_trip(!cli.no_round_trip)
            .with_probes(!cli.no_probes);

        let reachable: Vec<String> = generator
            .reachable_classes()
            .iter()
            .map(|c| c.to_string())
            .collect();
        info!("cap={} reachable: {}", cap, reachable.join(","));

        for case in generator.suite() {
            if !cli.run {
                println!("{}", case);
                continue;
            }
            match case.run() {
                Ok(trace) => {
                    let visited: Vec<String> =
                        trace.visited().iter().map(|c| c.to_string()).collect();
                    println!(
                        "ok   {} [{}] visited {}",
                        case.name,
                        format_actions(&case.actions),
                        visited.join(",")
                    );
                }
                Err(e) => {
                    error!("{:#}", e);
                    println!("FAIL {}", case);
                    failed += 1;
                }
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} case(s) failed", failed);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();
    generate(&cli).context("case generation")
}
