use clap::Parser;
use monty_hall::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "monty-hall")]
#[command(about = "三门问题蒙特卡洛模拟：比较坚持选择与改变选择的胜率")]
struct Args {
    /// 游戏轮数
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// 随机数种子，不指定则使用系统熵
    #[arg(long)]
    seed: Option<u64>,

    /// 以 JSON 输出统计结果
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut simulator = match args.seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::new(),
    };

    // 进行全部轮次并统计结果
    let summary = simulator.play_n_games(args.trials)?.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("共进行了 {} 轮游戏；", summary.rounds);
    println!(
        "第一次就选择正确 {} 轮，第一次选择正确率 {:.2}%；",
        summary.first_pick_wins,
        summary.first_pick_wins as f64 * 100.0 / summary.rounds as f64
    );
    println!(
        "坚持选择赢得汽车 {} 轮，改变选择赢得汽车 {} 轮。",
        summary.stay.wins, summary.switch.wins
    );
    println!();
    print!("{summary}");

    Ok(())
}
