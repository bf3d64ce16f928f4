mod batch;
mod error;
mod game;
mod round;

pub use batch::*;
pub use error::*;
pub use game::*;
pub use round::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 模拟器，持有整个模拟过程使用的随机数生成器
#[derive(Debug, Clone)]
pub struct Simulator<R = StdRng> {
    rng: R,
}

impl Simulator {
    /// 使用系统熵初始化随机数生成器
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子，相同种子得到相同的结果
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Simulator<R> {
    /// 使用指定的随机数生成器
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 进行一轮游戏
    pub fn play_game(&mut self) -> Result<RoundResult> {
        play_game(&mut self.rng)
    }

    /// 进行 n 轮游戏
    pub fn play_n_games(&mut self, n: usize) -> Result<BatchResult> {
        play_n_games(&mut self.rng, n)
    }
}
