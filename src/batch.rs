use crate::error::*;
use crate::game::Outcome;
use crate::round::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// 默认轮数
pub const DEFAULT_TRIALS: usize = 100;

/// 多轮游戏的结果
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct BatchResult {
    rounds: Vec<RoundResult>,
}

impl BatchResult {
    /// 每一轮的结果
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// 展开后的结果表，共 2n 行
    pub fn records(&self) -> Vec<Record> {
        self.rounds.iter().flat_map(RoundResult::records).collect()
    }

    /// 统计结果
    pub fn summary(&self) -> Summary {
        Summary::calculate(&self.rounds)
    }
}

/// 进行 n 轮游戏，n 必须大于 0
pub fn play_n_games<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<BatchResult> {
    if n == 0 {
        return Err(Error::InvalidTrialCount(n));
    }

    let mut rounds = Vec::with_capacity(n);
    for _ in 0..n {
        rounds.push(play_game(rng)?);
    }
    let result = BatchResult { rounds };

    let summary = result.summary();
    info!(
        rounds = summary.rounds,
        stay_win_rate = summary.stay.win_rate,
        switch_win_rate = summary.switch.win_rate,
        "batch completed"
    );

    Ok(result)
}

/// 单个策略的统计
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct StrategySummary {
    /// 轮数
    pub games: usize,
    /// 赢的轮数
    pub wins: usize,
    /// 输的轮数
    pub losses: usize,
    /// 胜率，保留两位小数
    pub win_rate: f64,
    /// 败率，与胜率之和恰好为 1.00
    pub loss_rate: f64,
}

impl StrategySummary {
    fn new(wins: usize, losses: usize) -> Self {
        let games = wins + losses;
        let hundredths = if games == 0 {
            0
        } else {
            (wins as f64 * 100.0 / games as f64).round() as u32
        };
        Self {
            games,
            wins,
            losses,
            win_rate: hundredths as f64 / 100.0,
            loss_rate: (100 - hundredths) as f64 / 100.0,
        }
    }
}

/// 多轮游戏的统计结果
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct Summary {
    /// 轮数
    pub rounds: usize,
    /// 第一次就选中汽车的轮数
    pub first_pick_wins: usize,
    /// 坚持选择
    pub stay: StrategySummary,
    /// 改变选择
    pub switch: StrategySummary,
}

impl Summary {
    pub fn calculate<R>(rounds: R) -> Self
    where
        R: AsRef<[RoundResult]>,
    {
        let rounds = rounds.as_ref();
        let mut counts: BTreeMap<(Strategy, Outcome), usize> = BTreeMap::new();
        let mut first_pick_wins = 0;

        for round in rounds {
            if round.first_pick_wins() {
                first_pick_wins += 1;
            }
            for record in round.records() {
                *counts.entry((record.strategy, record.outcome)).or_default() += 1;
            }
        }

        let count = |strategy: Strategy, outcome: Outcome| {
            counts.get(&(strategy, outcome)).copied().unwrap_or(0)
        };
        let of = |strategy: Strategy| {
            StrategySummary::new(
                count(strategy, Outcome::Win),
                count(strategy, Outcome::Lose),
            )
        };

        Summary {
            rounds: rounds.len(),
            first_pick_wins,
            stay: of(Strategy::Stay),
            switch: of(Strategy::Switch),
        }
    }

    /// 指定策略的统计
    pub fn strategy(&self, strategy: Strategy) -> &StrategySummary {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10}{:>6}{:>6}", "strategy", Outcome::Lose, Outcome::Win)?;
        for strategy in Strategy::ALL {
            let s = self.strategy(strategy);
            writeln!(f, "{:<10}{:>6.2}{:>6.2}", strategy, s.loss_rate, s.win_rate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_trials_is_rejected() {
        let mut rng = rand::thread_rng();
        assert_eq!(play_n_games(&mut rng, 0), Err(Error::InvalidTrialCount(0)));
    }

    #[test]
    fn records_are_2n() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in [1, 2, DEFAULT_TRIALS] {
            let result = play_n_games(&mut rng, n).unwrap();
            let records = result.records();
            assert_eq!(records.len(), 2 * n);
            let stays = records.iter().filter(|r| r.strategy.is_stay()).count();
            assert_eq!(stays, n);
            assert_eq!(records.len() - stays, n);
        }
    }

    #[test]
    fn converges_to_one_third_and_two_thirds() {
        let mut rng = rand::thread_rng();
        let summary = play_n_games(&mut rng, 10000).unwrap().summary();
        assert_eq!(summary.rounds, 10000);
        assert_eq!(summary.stay.games, 10000);
        assert_eq!(summary.switch.games, 10000);
        assert!((summary.stay.win_rate - 0.33).abs() <= 0.03, "{:?}", summary);
        assert!((summary.switch.win_rate - 0.67).abs() <= 0.03, "{:?}", summary);
        assert_eq!(summary.first_pick_wins, summary.stay.wins);
        assert_eq!(summary.stay.wins, summary.switch.losses);
    }

    #[test]
    fn rates_sum_to_one() {
        // 1/8 = 0.125，四舍五入后两行仍然各自合计 1.00
        let s = StrategySummary::new(1, 7);
        assert_eq!(s.win_rate, 0.13);
        assert_eq!(s.loss_rate, 0.87);

        let s = StrategySummary::new(2, 1);
        assert_eq!(s.win_rate, 0.67);
        assert_eq!(s.loss_rate, 0.33);
    }

    #[test]
    fn same_seed_same_batch() {
        let a = play_n_games(&mut StdRng::seed_from_u64(99), 50).unwrap();
        let b = play_n_games(&mut StdRng::seed_from_u64(99), 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_table() {
        let mut rng = StdRng::seed_from_u64(8);
        let summary = play_n_games(&mut rng, 20).unwrap().summary();
        let table = summary.to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("strategy"));
        assert!(lines[0].contains("LOSE") && lines[0].contains("WIN"));
        assert!(lines[1].starts_with("stay"));
        assert!(lines[2].starts_with("switch"));
        assert_eq!(
            format!("{:.2}", summary.stay.win_rate),
            format!("{:.2}", summary.switch.loss_rate)
        );
    }
}
