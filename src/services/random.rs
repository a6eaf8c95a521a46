//! 随机数来源
//!
//! 测验抽题通过这个接口取随机下标，测试时可以换成固定种子或固定下标

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// 均匀随机下标来源
pub trait RandomSource: Send + Sync {
    /// 返回 `[0, len)` 内均匀分布的下标，调用方保证 `len > 0`
    fn pick_index(&self, len: usize) -> usize;
}

/// 线程本地随机数，生产环境使用
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// 固定种子的随机数，结果可复现
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}
