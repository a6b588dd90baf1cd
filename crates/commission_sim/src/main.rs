use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use commission::{
    compute_commission, compute_commission_with_selector, load_rule_set, rule_set_hash, RuleSet,
};
use rust_decimal::Decimal;

const MAX_SWEEP_ROWS: usize = 1_000_000;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let rules = load_rule_set(&args.rules)
        .with_context(|| format!("loading {}", args.rules.display()))?;
    rules
        .normalized()
        .with_context(|| format!("validating {}", args.rules.display()))?;

    let principals = args.principal_list()?;
    ensure!(!principals.is_empty(), "no principals given; use --principals or --sweep");
    ensure!(
        args.selectors.is_empty() || args.selectors.len() == principals.len(),
        "--selectors has {} values but there are {} principals",
        args.selectors.len(),
        principals.len()
    );

    write_table(&args.out, &rules, &principals, &args.selectors)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!(
        "wrote {} rows to {} (rule_set_hash={})",
        principals.len(),
        args.out.display(),
        rule_set_hash(&rules)?
    );
    Ok(())
}

fn write_table(
    out: &Path,
    rules: &RuleSet,
    principals: &[Decimal],
    selectors: &[Decimal],
) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(out)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "principal,selector,tier_start,commission")?;

    for (idx, principal) in principals.iter().copied().enumerate() {
        match selectors.get(idx).copied() {
            Some(selector) => {
                let tier = rules.tier_for(selector)?;
                let commission = compute_commission_with_selector(principal, selector, rules)?;
                writeln!(writer, "{principal},{selector},{},{commission}", tier.start)?;
            }
            None => {
                let tier = rules.tier_for(principal)?;
                let commission = compute_commission(principal, rules)?;
                writeln!(writer, "{principal},,{},{commission}", tier.start)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sweep {
    from: Decimal,
    to: Decimal,
    step: Decimal,
}

impl Sweep {
    fn values(&self) -> Result<Vec<Decimal>> {
        let mut values = Vec::new();
        let mut current = self.from;
        while current <= self.to {
            if values.len() == MAX_SWEEP_ROWS {
                bail!("sweep produces more than {MAX_SWEEP_ROWS} rows");
            }
            values.push(current);
            let Some(next) = current.checked_add(self.step) else {
                bail!("sweep overflows the decimal range after {current}");
            };
            current = next;
        }
        Ok(values)
    }
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(&value.trim().replace('_', "")).map_err(|err| err.to_string())
}

fn parse_sweep(value: &str) -> Result<Sweep, String> {
    let parts: Vec<_> = value.split(':').collect();
    let [from, to, step] = parts.as_slice() else {
        return Err(format!("expected from:to:step, got {value}"));
    };
    let sweep = Sweep {
        from: parse_decimal(from)?,
        to: parse_decimal(to)?,
        step: parse_decimal(step)?,
    };
    if sweep.step <= Decimal::ZERO {
        return Err("sweep step must be positive".to_string());
    }
    Ok(sweep)
}

#[derive(Debug, Parser)]
#[command(
    name = "commission-sim",
    version,
    about = "Evaluates a commission rule file over a batch of principals",
    disable_help_subcommand = true
)]
struct Args {
    /// TOML rule file.
    #[arg(long)]
    rules: PathBuf,
    /// Comma separated principals, e.g. `450,999,1_200`.
    #[arg(long, value_delimiter = ',', value_parser = parse_decimal, conflicts_with = "sweep")]
    principals: Vec<Decimal>,
    /// Inclusive `from:to:step` range of principals.
    #[arg(long, value_parser = parse_sweep)]
    sweep: Option<Sweep>,
    /// Selector per principal; switches to selector-based tiering.
    #[arg(long, value_delimiter = ',', value_parser = parse_decimal)]
    selectors: Vec<Decimal>,
    #[arg(long, default_value = "target/commission.csv")]
    out: PathBuf,
}

impl Args {
    fn principal_list(&self) -> Result<Vec<Decimal>> {
        match &self.sweep {
            Some(sweep) => sweep.values(),
            None => Ok(self.principals.clone()),
        }
    }
}
