//! Dansu - Entry Point
//!
//! Command line front end over the progression engine. Results go to stdout,
//! logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use dansu::display::{group_digits, to_display_currency};
use dansu::economy::{allocate_budget, spend_exp, CostBreakdown};
use dansu::input::{clamp_budget, clamp_discount, clamp_stat};
use dansu::planner::{plan_capacity, plan_target_rank, price_stats, AllocationPolicy};
use dansu::{GameTables, RankStatus, StatType};

/// HP/MP progression and Rar cost calculator
#[derive(Parser)]
#[command(name = "dansu")]
#[command(about = "HP/MP experience, rank and Rar cost calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Tables file to use instead of the default location
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Display-currency units per Rar
    #[arg(long, global = true)]
    rate: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Experience and rank of an HP/MP pair
    Rank {
        #[arg(long, allow_negative_numbers = true)]
        hp: i64,
        #[arg(long, allow_negative_numbers = true)]
        mp: i64,
    },

    /// Rar cost of raising HP and MP to target values
    Cost {
        #[arg(long, allow_negative_numbers = true)]
        hp: i64,
        #[arg(long, allow_negative_numbers = true)]
        mp: i64,
        #[arg(long, allow_negative_numbers = true)]
        target_hp: i64,
        #[arg(long, allow_negative_numbers = true)]
        target_mp: i64,
        /// Discount percent, clamped to 0..=99
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
    },

    /// How far a Rar budget raises one stat
    Budget {
        #[arg(long, value_enum)]
        stat: StatArg,
        #[arg(long, allow_negative_numbers = true)]
        current: i64,
        #[arg(long, allow_negative_numbers = true)]
        rar: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
    },

    /// How far an experience budget raises one stat
    Spend {
        #[arg(long, value_enum)]
        stat: StatArg,
        #[arg(long, allow_negative_numbers = true)]
        current: i64,
        #[arg(long, allow_negative_numbers = true)]
        exp: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
    },

    /// Headroom left in the current rank, spent on each stat
    Capacity {
        #[arg(long, allow_negative_numbers = true)]
        hp: i64,
        #[arg(long, allow_negative_numbers = true)]
        mp: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
    },

    /// Minimal stats that reach a rank, and their cost
    Target {
        #[arg(long, allow_negative_numbers = true)]
        hp: i64,
        #[arg(long, allow_negative_numbers = true)]
        mp: i64,
        #[arg(long)]
        rank: u32,
        #[arg(long, value_enum, default_value_t = PolicyArg::Both)]
        policy: PolicyArg,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
    },

    /// Table file management
    #[command(subcommand)]
    Tables(TablesCommand),
}

#[derive(Subcommand)]
enum TablesCommand {
    /// Write the active tables as RON for editing
    Export {
        /// Output file, defaults to the standard tables location
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the standard tables location
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatArg {
    Hp,
    Mp,
}

impl From<StatArg> for StatType {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Hp => StatType::Hp,
            StatArg::Mp => StatType::Mp,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    HpOnly,
    MpOnly,
    Both,
}

impl From<PolicyArg> for AllocationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::HpOnly => AllocationPolicy::HpOnly,
            PolicyArg::MpOnly => AllocationPolicy::MpOnly,
            PolicyArg::Both => AllocationPolicy::Both,
        }
    }
}

#[derive(Serialize)]
struct RankReport {
    hp: u64,
    mp: u64,
    hp_exp: u64,
    mp_exp: u64,
    total_exp: u64,
    rank: RankStatus,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let tables = load_tables(cli.tables.as_deref())?;
    let out = Output { json: cli.json, rate: cli.rate };

    match cli.command {
        Command::Rank { hp, mp } => {
            let (hp, mp) = (clamp_stat(hp), clamp_stat(mp));
            let hp_exp = tables.experience.cumulative_exp(StatType::Hp, hp);
            let mp_exp = tables.experience.cumulative_exp(StatType::Mp, mp);
            let total_exp = hp_exp.saturating_add(mp_exp);
            let report = RankReport { hp, mp, hp_exp, mp_exp, total_exp, rank: tables.ranks.rank_for(total_exp) };
            out.emit(&report, || {
                println!("HP {} -> {} exp", group_digits(hp), group_digits(hp_exp));
                println!("MP {} -> {} exp", group_digits(mp), group_digits(mp_exp));
                println!("Total {} exp", group_digits(total_exp));
                print_rank("Rank", &report.rank, total_exp);
            })
        }

        Command::Cost { hp, mp, target_hp, target_mp, discount } => {
            let price = price_stats(
                &tables,
                clamp_stat(hp),
                clamp_stat(mp),
                clamp_stat(target_hp),
                clamp_stat(target_mp),
                clamp_discount(discount),
            );
            out.emit(&price, || {
                print_breakdown(StatType::Hp, &price.hp);
                print_breakdown(StatType::Mp, &price.mp);
                println!("Total {}", out.money(price.total_cost));
                println!(
                    "Rank {} -> {} ({} -> {} exp)",
                    price.rank_before.rank,
                    price.rank_after.rank,
                    group_digits(price.exp_before),
                    group_digits(price.exp_after)
                );
            })
        }

        Command::Budget { stat, current, rar, discount } => {
            let stat = StatType::from(stat);
            let allocation = allocate_budget(
                clamp_stat(current),
                clamp_budget(rar),
                tables.costs.table(stat).tiers(),
                clamp_discount(discount),
            );
            out.emit(&allocation, || {
                println!(
                    "{} {} -> {} (+{})",
                    stat,
                    group_digits(allocation.start),
                    group_digits(allocation.final_value),
                    group_digits(allocation.total_gain)
                );
                println!(
                    "{} upgrades, spent {}, left {}",
                    allocation.upgrades,
                    out.money(allocation.spent),
                    out.money(allocation.remaining_budget)
                );
            })
        }

        Command::Spend { stat, current, exp, discount } => {
            let stat = StatType::from(stat);
            let spend = spend_exp(
                clamp_stat(current),
                clamp_budget(exp),
                stat,
                &tables.experience,
                &tables.costs,
                clamp_discount(discount),
            );
            out.emit(&spend, || {
                println!(
                    "{} {} -> {} (+{})",
                    stat,
                    group_digits(spend.start),
                    group_digits(spend.final_stat),
                    group_digits(spend.gain)
                );
                println!(
                    "{} exp used, {} left, {}",
                    group_digits(spend.exp_used),
                    group_digits(spend.exp_left()),
                    out.money(spend.cost)
                );
            })
        }

        Command::Capacity { hp, mp, discount } => {
            let plan = plan_capacity(&tables, clamp_stat(hp), clamp_stat(mp), clamp_discount(discount));
            out.emit(&plan, || {
                print_rank("Rank", &plan.rank, plan.total_exp);
                println!(
                    "Capacity {}, {} exp to spend",
                    group_digits(plan.capacity),
                    group_digits(plan.exp_budget)
                );
                for stat in StatType::ALL {
                    let spend = plan.spend(stat);
                    println!(
                        "  {} -> {} (+{}) for {}",
                        stat,
                        group_digits(spend.final_stat),
                        group_digits(spend.gain),
                        out.money(spend.cost)
                    );
                }
                match plan.recommended {
                    Some(stat) => println!("Recommended: {}", stat),
                    None => println!("Recommended: none, no headroom"),
                }
            })
        }

        Command::Target { hp, mp, rank, policy, discount } => {
            let plan = plan_target_rank(
                &tables,
                clamp_stat(hp),
                clamp_stat(mp),
                rank,
                policy.into(),
                clamp_discount(discount),
            );
            out.emit(&plan, || {
                if !plan.reachable {
                    println!("Rank {} is out of reach ({})", plan.rank, plan.policy.name());
                    return;
                }
                println!(
                    "Rank {} needs {} exp ({})",
                    plan.rank,
                    group_digits(plan.exp_threshold),
                    plan.policy.name()
                );
                println!(
                    "HP {} -> {}, MP {} -> {}",
                    group_digits(plan.current_hp),
                    group_digits(plan.target_hp),
                    group_digits(plan.current_mp),
                    group_digits(plan.target_mp)
                );
                print_breakdown(StatType::Hp, &plan.hp_cost);
                print_breakdown(StatType::Mp, &plan.mp_cost);
                println!("Total {}", out.money(plan.total_cost));
            })
        }

        Command::Tables(TablesCommand::Export { out: path }) => {
            let path = path.unwrap_or_else(GameTables::default_path);
            tables
                .export(&path)
                .with_context(|| format!("Failed to export tables to {:?}", path))?;
            println!("{}", path.display());
            Ok(())
        }

        Command::Tables(TablesCommand::Path) => {
            println!("{}", GameTables::default_path().display());
            Ok(())
        }
    }
}

/// An explicit `--tables` file must load; the default location may be absent
fn load_tables(path: Option<&std::path::Path>) -> Result<GameTables> {
    match path {
        Some(path) => GameTables::load(path).with_context(|| format!("Failed to load tables from {:?}", path)),
        None => Ok(GameTables::load_or_builtin(&GameTables::default_path())),
    }
}

struct Output {
    json: bool,
    rate: Option<f64>,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce()) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
            println!("{}", json);
        } else {
            text();
        }
        Ok(())
    }

    fn money(&self, rar: u64) -> String {
        match self.rate {
            Some(rate) => format!("{} Rar ({:.2})", group_digits(rar), to_display_currency(rar, rate)),
            None => format!("{} Rar", group_digits(rar)),
        }
    }
}

fn print_rank(label: &str, rank: &RankStatus, total_exp: u64) {
    let name = if rank.ranked { rank.rank.to_string() } else { format!("{} (unranked)", rank.rank) };
    match rank.exp_to_next(total_exp) {
        Some(missing) => println!(
            "{} {} at {:.1}%, {} exp to next",
            label,
            name,
            rank.progress_percent,
            group_digits(missing)
        ),
        None => println!("{} {} (top rank)", label, name),
    }
}

fn print_breakdown(stat: StatType, breakdown: &CostBreakdown) {
    if breakdown.tiers.is_empty() {
        println!("{}: no change", stat);
        return;
    }
    println!(
        "{} {} -> {} (+{}, {} upgrades):",
        stat,
        group_digits(breakdown.from),
        group_digits(breakdown.to),
        group_digits(breakdown.gain()),
        breakdown.total_steps()
    );
    for tier in &breakdown.tiers {
        println!("  [{}] {} upgrades, {} Rar", tier.label, tier.steps, group_digits(tier.cost));
    }
}
