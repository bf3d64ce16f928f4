use crate::error::*;
use crate::game::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 挑战者策略
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 坚持选择
    Stay,

    /// 改变选择
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn is_stay(self) -> bool {
        matches!(self, Strategy::Stay)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => f.pad("stay"),
            Strategy::Switch => f.pad("switch"),
        }
    }
}

/// 结果表中的一行
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct Record {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// 一轮游戏的结果，同一布置下两种策略各自的结局
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct RoundResult {
    /// 奖品布置
    arrangement: Arrangement,

    /// 挑战者选择的门序号
    chosen: u32,

    /// 主持人打开的门序号
    opened: u32,

    /// 坚持选择的结局
    stay: Outcome,

    /// 改变选择的结局
    switch: Outcome,
}

impl RoundResult {
    /// 奖品布置
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// 挑战者选择的门序号
    pub fn chosen(&self) -> u32 {
        self.chosen
    }

    /// 主持人打开的门序号
    pub fn opened(&self) -> u32 {
        self.opened
    }

    /// 指定策略的结局
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }

    /// 第一次就选中了汽车
    pub fn first_pick_wins(&self) -> bool {
        self.stay == Outcome::Win
    }

    /// 两行结果：坚持在前，改变在后
    pub fn records(&self) -> [Record; 2] {
        Strategy::ALL.map(|strategy| Record {
            strategy,
            outcome: self.outcome(strategy),
        })
    }
}

/// 进行一轮完整的游戏，两种策略共用同一布置、同一选择和同一次揭示
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<RoundResult> {
    let arrangement = create_game(rng);
    let chosen = select_door(rng);
    let opened = open_goat_door(rng, &arrangement, chosen)?;

    let stay = determine_winner(change_door(true, opened, chosen)?, &arrangement)?;
    let switch = determine_winner(change_door(false, opened, chosen)?, &arrangement)?;

    debug!(%arrangement, chosen, opened, %stay, %switch, "round played");

    Ok(RoundResult {
        arrangement,
        chosen,
        opened,
        stay,
        switch,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn strategies_are_complementary() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let result = play_game(&mut rng).unwrap();
            assert_ne!(result.outcome(Strategy::Stay), result.outcome(Strategy::Switch));
            assert_eq!(
                result.first_pick_wins(),
                result.arrangement().car() == result.chosen()
            );
        }
    }

    #[test]
    fn doors_are_pairwise_distinct() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let result = play_game(&mut rng).unwrap();
            let switched = change_door(false, result.opened(), result.chosen()).unwrap();
            let mut doors = [result.chosen(), result.opened(), switched];
            doors.sort_unstable();
            assert_eq!(doors, [1, 2, 3]);
            assert_eq!(result.arrangement().prize(result.opened()), Ok(Prize::Goat));
        }
    }

    #[test]
    fn records_have_two_rows() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = play_game(&mut rng).unwrap();
        let [stay, switch] = result.records();
        assert_eq!(stay.strategy, Strategy::Stay);
        assert_eq!(switch.strategy, Strategy::Switch);
        assert_eq!(stay.outcome, result.outcome(Strategy::Stay));
        assert_eq!(switch.outcome, result.outcome(Strategy::Switch));
    }

    #[test]
    fn record_serializes_as_table_row() {
        let record = Record {
            strategy: Strategy::Switch,
            outcome: Outcome::Win,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"strategy":"switch","outcome":"WIN"}"#
        );
    }
}
