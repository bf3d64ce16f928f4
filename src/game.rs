use crate::error::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 门数
pub const DOORS: u32 = 3;

// 1 + 2 + 3，已知两个不同的门序号即可算出第三个
const DOOR_SUM: u32 = 6;

/// 门后的奖品
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    /// 汽车
    Car,

    /// 山羊
    Goat,
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Car => f.pad("car"),
            Prize::Goat => f.pad("goat"),
        }
    }
}

/// 一轮游戏中三个门后奖品的布置，门序号为 1..=3
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
#[serde(try_from = "[Prize; 3]", into = "[Prize; 3]")]
pub struct Arrangement([Prize; 3]);

impl Arrangement {
    /// 按给定顺序布置奖品，必须恰好有一辆汽车
    pub fn new(prizes: [Prize; 3]) -> Result<Self> {
        let cars = prizes.iter().filter(|p| **p == Prize::Car).count();
        if cars != 1 {
            return Err(Error::InvalidArrangement);
        }
        Ok(Self(prizes))
    }

    /// 指定门后的奖品
    pub fn prize(&self, door: u32) -> Result<Prize> {
        check_door(door)?;
        Ok(self.0[door as usize - 1])
    }

    /// 汽车所在门序号
    pub fn car(&self) -> u32 {
        self.0
            .iter()
            .position(|p| *p == Prize::Car)
            .map(|i| i as u32 + 1)
            .unwrap_or_default()
    }

    pub fn prizes(&self) -> &[Prize; 3] {
        &self.0
    }
}

impl TryFrom<[Prize; 3]> for Arrangement {
    type Error = Error;

    fn try_from(prizes: [Prize; 3]) -> Result<Self> {
        Self::new(prizes)
    }
}

impl From<Arrangement> for [Prize; 3] {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.0
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// 挑战者的最终结果
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// 没有赢得汽车
    Lose,

    /// 赢得汽车
    Win,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Lose => f.pad("LOSE"),
            Outcome::Win => f.pad("WIN"),
        }
    }
}

/// 随机布置一辆汽车和两只山羊，三种排列等概率出现
pub fn create_game<R: Rng + ?Sized>(rng: &mut R) -> Arrangement {
    let mut prizes = [Prize::Car, Prize::Goat, Prize::Goat];
    prizes.shuffle(rng);
    Arrangement(prizes)
}

/// 挑战者随机选择一个门
pub fn select_door<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=DOORS)
}

/// 主持人打开一扇门后是山羊的门，该门不是挑战者选择的门
pub fn open_goat_door<R: Rng + ?Sized>(
    rng: &mut R,
    arrangement: &Arrangement,
    pick: u32,
) -> Result<u32> {
    match arrangement.prize(pick)? {
        // 剩下两扇门后都是山羊，随机打开一扇
        Prize::Car => Ok(random_door(rng, pick)),
        // 只剩一扇门既不是汽车也不是挑战者选择的
        Prize::Goat => Ok(other_door(pick, arrangement.car())),
    }
}

/// 挑战者做出最终选择，`stay` 为 `true` 表示坚持原来的选择
pub fn change_door(stay: bool, opened_door: u32, pick: u32) -> Result<u32> {
    check_door(opened_door)?;
    check_door(pick)?;
    if stay {
        Ok(pick)
    } else if opened_door == pick {
        Err(Error::InvalidOperation)
    } else {
        Ok(other_door(opened_door, pick))
    }
}

/// 最终选择的门后是汽车即为赢
pub fn determine_winner(final_pick: u32, arrangement: &Arrangement) -> Result<Outcome> {
    match arrangement.prize(final_pick)? {
        Prize::Car => Ok(Outcome::Win),
        Prize::Goat => Ok(Outcome::Lose),
    }
}

fn check_door(door: u32) -> Result<u32> {
    if (1..=DOORS).contains(&door) {
        Ok(door)
    } else {
        Err(Error::InvalidDoorIndex(door))
    }
}

// a 与 b 必须是不同的合法门序号
fn other_door(a: u32, b: u32) -> u32 {
    debug_assert!(a != b, "a = {}, b = {}", a, b);
    DOOR_SUM - a - b
}

// 在 [1, DOORS] 范围内生成 exclusive 之外的随机门序号
fn random_door<R: Rng + ?Sized>(rng: &mut R, exclusive: u32) -> u32 {
    assert!(
        (1..=DOORS).contains(&exclusive),
        "doors = {}, exclusive = {}",
        DOORS,
        exclusive
    );

    let random = rng.gen_range(1..DOORS);

    if random >= exclusive {
        random + 1
    } else {
        random
    }
}
